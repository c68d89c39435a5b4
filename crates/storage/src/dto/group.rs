use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::participant::ParticipantResponse;
use crate::models::{Group, Participant};

/// Request payload for creating a new group under an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
}

/// Request payload for updating an existing group
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub is_payment_done: Option<bool>,

    pub is_present: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub group_id: Uuid,
    pub name: String,
    pub event_id: Uuid,
    pub is_payment_done: bool,
    pub is_present: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// Group together with its member list, ordered by registration time.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetailResponse {
    pub group_id: Uuid,
    pub name: String,
    pub event_id: Uuid,
    pub is_payment_done: bool,
    pub is_present: bool,
    pub members: Vec<ParticipantResponse>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            group_id: group.group_id,
            name: group.name,
            event_id: group.event_id,
            is_payment_done: group.is_payment_done,
            is_present: group.is_present,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

impl GroupDetailResponse {
    pub fn new(group: Group, members: Vec<Participant>) -> Self {
        Self {
            group_id: group.group_id,
            name: group.name,
            event_id: group.event_id,
            is_payment_done: group.is_payment_done,
            is_present: group.is_present,
            members: members.into_iter().map(ParticipantResponse::from).collect(),
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}
