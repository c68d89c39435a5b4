use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A team competing in one event. The member list is not stored on the row;
/// it is the set of participants whose `group_id` points here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_id: Uuid,
    pub name: String,
    pub event_id: Uuid,
    pub is_payment_done: bool,
    pub is_present: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
