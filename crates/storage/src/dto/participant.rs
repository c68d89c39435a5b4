use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Participant;

/// Request payload for registering a participant into a group
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddParticipantRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Full name must be between 1 and 255 characters"
    ))]
    pub full_name: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    pub institute_id: Uuid,

    pub department_id: Uuid,

    #[serde(default)]
    pub is_group_leader: bool,
}

/// Request payload for updating an existing participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipantRequest {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub phone: Option<String>,

    pub institute_id: Option<Uuid>,

    pub department_id: Option<Uuid>,

    pub group_id: Option<Uuid>,

    pub is_group_leader: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub institute_id: Uuid,
    pub department_id: Uuid,
    pub user_id: Uuid,
    pub group_id: Option<Uuid>,
    pub is_group_leader: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            participant_id: participant.participant_id,
            full_name: participant.full_name,
            email: participant.email,
            phone: participant.phone,
            institute_id: participant.institute_id,
            department_id: participant.department_id,
            user_id: participant.user_id,
            group_id: participant.group_id,
            is_group_leader: participant.is_group_leader,
            created_at: participant.created_at,
            updated_at: participant.updated_at,
        }
    }
}
