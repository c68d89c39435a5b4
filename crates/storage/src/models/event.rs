use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Free-form time slot as entered by organizers, e.g. "10:00 AM".
    pub time: String,
    pub location: String,
    pub category: String,
    pub rules: Vec<String>,
    pub department_id: Option<Uuid>,
    pub max_participants: i32,
    pub group_min_participants: i32,
    pub group_max_participants: i32,
    pub max_groups_allowed: i32,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
