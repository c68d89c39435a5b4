use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Department;

/// Request payload for creating a new department
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub hod: String,

    #[validate(email(message = "Contact email must be a valid email address"))]
    pub contact_email: String,

    pub institute_id: Uuid,
}

/// Request payload for updating an existing department
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub hod: Option<String>,

    #[validate(email)]
    pub contact_email: Option<String>,

    pub institute_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub department_id: Uuid,
    pub name: String,
    pub hod: String,
    pub contact_email: String,
    pub institute_id: Uuid,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            department_id: department.department_id,
            name: department.name,
            hod: department.hod,
            contact_email: department.contact_email,
            institute_id: department.institute_id,
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}
