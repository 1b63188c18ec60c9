use anyhow::Context;
use axum::Router;
use storage::Database;
use storage::questions::QuestionBank;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::AdminSecret;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::participants::handlers::register_participant,
        features::participants::handlers::get_participant,
        features::quiz::handlers::get_test_overview,
        features::quiz::handlers::start_session,
        features::quiz::handlers::get_session,
        features::quiz::handlers::submit_answer,
        features::dashboard::handlers::admin_login,
        features::dashboard::handlers::get_summary,
        features::dashboard::handlers::list_results,
        features::dashboard::handlers::export_results,
        features::dashboard::handlers::get_participant_answers,
    ),
    components(
        schemas(
            storage::dto::participant::RegisterParticipantRequest,
            storage::dto::participant::ParticipantResponse,
            storage::dto::participant::ParticipantAnswersResponse,
            storage::dto::session::StartSessionRequest,
            storage::dto::session::StartSessionResponse,
            storage::dto::session::SubmitAnswerRequest,
            storage::dto::session::SubmitAnswerResponse,
            storage::dto::session::SessionProgressResponse,
            storage::dto::session::TestOverview,
            storage::dto::result::TestResultResponse,
            storage::dto::result::ResultRow,
            storage::dto::result::DashboardSummary,
            storage::dto::common::PaginationMeta,
            storage::models::Participant,
            storage::models::Answer,
            storage::models::TestResult,
            storage::questions::QuestionView,
            storage::questions::Category,
            storage::services::scoring::TestStatus,
            features::dashboard::handlers::AdminLoginRequest,
            features::dashboard::handlers::AdminLoginResponse,
        )
    ),
    tags(
        (name = "participants", description = "Candidate intake endpoints"),
        (name = "quiz", description = "Quiz session endpoints"),
        (name = "admin", description = "Password-gated dashboard endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Admin password")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting recruitment test API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let questions = QuestionBank::load(config.questions_path.as_deref())
        .context("Failed to load question bank")?;
    tracing::info!("Question bank loaded with {} questions", questions.len());

    let admin = AdminSecret::new(&config.admin_password);
    let state = AppState::new(db, questions, admin.clone());

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let app = Router::new()
        .nest("/api/participants", features::participants::routes::routes())
        .nest("/api/quiz", features::quiz::routes::routes())
        .nest("/api/admin", features::dashboard::routes::routes(admin))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
