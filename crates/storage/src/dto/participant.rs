use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Positions candidates can apply for, as shown in the intake form.
pub const POSITIONS: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "UI/UX Designer",
    "Project Manager",
    "Quality Assurance",
];

/// Intake form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterParticipantRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    #[validate(length(max = 255))]
    pub email: String,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(custom(function = "validate_position"))]
    pub position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub created_at: NaiveDateTime,
}

/// Admin review view: a participant with every answer they recorded.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParticipantAnswersResponse {
    pub participant: ParticipantResponse,
    pub answers: Vec<crate::models::Answer>,
}

fn validate_position(position: &str) -> Result<(), validator::ValidationError> {
    if POSITIONS.contains(&position) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("unknown_position"))
    }
}

impl From<crate::models::Participant> for ParticipantResponse {
    fn from(participant: crate::models::Participant) -> Self {
        Self {
            participant_id: participant.participant_id,
            name: participant.name,
            email: participant.email,
            phone: participant.phone,
            position: participant.position,
            created_at: participant.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterParticipantRequest {
        RegisterParticipantRequest {
            name: "Jane Roe".into(),
            email: "jane@example.com".into(),
            phone: Some("081234567890".into()),
            position: "Backend Developer".into(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let mut req = request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut req = request();
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_unknown_position() {
        let mut req = request();
        req.position = "Astronaut".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn phone_is_optional() {
        let mut req = request();
        req.phone = None;
        assert!(req.validate().is_ok());
    }
}
