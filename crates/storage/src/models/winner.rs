use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Ranked result for an event, naming either an individual participant or a
/// group. One row per (event, rank), enforced by a unique index.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventWiseWinner {
    pub winner_id: Uuid,
    pub event_id: Uuid,
    pub rank: i32,
    pub participant_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub prize: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
