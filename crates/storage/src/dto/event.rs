use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::PaginationMeta;
use crate::models::Event;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    pub date: NaiveDate,

    #[validate(length(min = 1, max = 64))]
    pub time: String,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[validate(length(min = 1, max = 255))]
    pub category: String,

    #[serde(default)]
    pub rules: Vec<String>,

    pub department_id: Option<Uuid>,

    #[serde(default = "default_max_participants")]
    pub max_participants: i32,

    #[serde(default = "default_group_min_participants")]
    pub group_min_participants: i32,

    #[serde(default = "default_group_max_participants")]
    pub group_max_participants: i32,

    #[serde(default = "default_max_groups_allowed")]
    pub max_groups_allowed: i32,
}

/// Request payload for updating an existing event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 64))]
    pub time: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub category: Option<String>,

    pub rules: Option<Vec<String>>,

    pub department_id: Option<Uuid>,

    pub max_participants: Option<i32>,

    pub group_min_participants: Option<i32>,

    pub group_max_participants: Option<i32>,

    pub max_groups_allowed: Option<i32>,
}

/// Query string for the event listing: pagination plus optional filters.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EventListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Case-insensitive title search
    pub q: Option<String>,
    /// Filter by owning department
    pub department: Option<Uuid>,
    /// Case-insensitive location filter
    pub location: Option<String>,
}

impl EventListParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        i64::from((self.page - 1) * self.limit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event_id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
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

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    pub events: Vec<EventResponse>,
    pub pagination: PaginationMeta,
}

/// Registration counts for one event
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryResponse {
    pub event_id: Uuid,
    pub total_groups: i64,
    pub total_participants: i64,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

fn default_max_participants() -> i32 {
    100
}

fn default_group_min_participants() -> i32 {
    1
}

fn default_group_max_participants() -> i32 {
    1
}

fn default_max_groups_allowed() -> i32 {
    50
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            title: event.title,
            description: event.description,
            date: event.date,
            time: event.time,
            location: event.location,
            category: event.category,
            rules: event.rules,
            department_id: event.department_id,
            max_participants: event.max_participants,
            group_min_participants: event.group_min_participants,
            group_max_participants: event.group_max_participants,
            max_groups_allowed: event.max_groups_allowed,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}
