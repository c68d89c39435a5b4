use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::PaginationMeta;
use crate::models::Institute;

/// Request payload for creating a new institute
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstituteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[validate(length(min = 1, max = 255))]
    pub contact: String,
}

/// Request payload for updating an existing institute
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstituteRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstituteResponse {
    pub institute_id: Uuid,
    pub name: String,
    pub location: String,
    pub contact: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstituteListResponse {
    pub institutes: Vec<InstituteResponse>,
    pub pagination: PaginationMeta,
}

/// Dependent-record counts for one institute
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstituteSummaryResponse {
    pub institute_id: Uuid,
    pub events_count: i64,
    pub participants_count: i64,
}

impl From<Institute> for InstituteResponse {
    fn from(institute: Institute) -> Self {
        Self {
            institute_id: institute.institute_id,
            name: institute.name,
            location: institute.location,
            contact: institute.contact,
            created_at: institute.created_at,
            updated_at: institute.updated_at,
        }
    }
}
