use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::EventWiseWinner;

/// Request payload for declaring a winner for an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWinnerRequest {
    #[validate(range(min = 1, message = "Rank must be a positive integer"))]
    pub rank: i32,

    pub participant_id: Option<Uuid>,

    pub group_id: Option<Uuid>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Prize must be between 1 and 255 characters"
    ))]
    pub prize: String,
}

/// Request payload for updating an existing winner entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWinnerRequest {
    #[validate(range(min = 1, message = "Rank must be a positive integer"))]
    pub rank: Option<i32>,

    pub participant_id: Option<Uuid>,

    pub group_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub prize: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerResponse {
    pub winner_id: Uuid,
    pub event_id: Uuid,
    pub rank: i32,
    pub participant_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub prize: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<EventWiseWinner> for WinnerResponse {
    fn from(winner: EventWiseWinner) -> Self {
        Self {
            winner_id: winner.winner_id,
            event_id: winner.event_id,
            rank: winner.rank,
            participant_id: winner.participant_id,
            group_id: winner.group_id,
            prize: winner.prize,
            created_at: winner.created_at,
            updated_at: winner.updated_at,
        }
    }
}
