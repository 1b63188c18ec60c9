use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// The dashboard's shared secret, loaded from `ADMIN_PASSWORD`.
#[derive(Clone)]
pub struct AdminSecret {
    secret: String,
}

impl AdminSecret {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.trim().to_string(),
        }
    }

    /// Plain string comparison. An empty secret never matches.
    pub fn verify(&self, candidate: &str) -> bool {
        !self.secret.is_empty() && self.secret == candidate
    }
}

/// Gate for the admin routes: the bearer token must equal the shared secret.
pub async fn require_admin(
    State(secret): State<AdminSecret>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if secret.verify(token) => Ok(next.run(req).await),
        _ => {
            tracing::warn!("Invalid admin credential attempt");
            Err(WebError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    async fn protected() -> &'static str {
        "ok"
    }

    fn app(secret: &str) -> Router {
        Router::new()
            .route("/admin", get(protected))
            .route_layer(middleware::from_fn_with_state(
                AdminSecret::new(secret),
                require_admin,
            ))
    }

    fn request(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/admin");
        if let Some(auth) = auth {
            builder = builder.header("Authorization", auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn verify_accepts_the_configured_secret_only() {
        let secret = AdminSecret::new("admin123");
        assert!(secret.verify("admin123"));
        assert!(!secret.verify("admin1234"));
        assert!(!secret.verify(""));
        assert!(!AdminSecret::new("").verify(""));
    }

    #[tokio::test]
    async fn passes_with_the_right_bearer_token() {
        let response = app("admin123")
            .oneshot(request(Some("Bearer admin123")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_wrong_or_missing_credentials() {
        let response = app("admin123")
            .oneshot(request(Some("Bearer nope")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app("admin123").oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
