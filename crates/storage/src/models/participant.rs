use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub participant_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub institute_id: Uuid,
    pub department_id: Uuid,
    /// Identity of the user who registered, as resolved from their token.
    pub user_id: Uuid,
    pub group_id: Option<Uuid>,
    pub is_group_leader: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
