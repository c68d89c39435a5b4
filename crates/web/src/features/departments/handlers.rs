use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use storage::Database;
use storage::dto::department::{
    CreateDepartmentRequest, DepartmentResponse, UpdateDepartmentRequest,
};
use storage::dto::event::EventResponse;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "All departments", body = Vec<DepartmentResponse>)
    ),
    tag = "departments"
)]
pub async fn list_departments(State(db): State<Database>) -> Result<Response, WebError> {
    let departments = services::list_departments(db.pool()).await?;

    Ok(response::ok(departments, "Departments fetched"))
}

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartmentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 400, description = "Validation error or duplicate name in institute"),
        (status = 404, description = "Institute not found")
    ),
    tag = "departments"
)]
pub async fn create_department(
    State(db): State<Database>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let department = services::create_department(db.pool(), &req).await?;

    Ok(response::created(department, "Department created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Department updated", body = DepartmentResponse),
        (status = 404, description = "Department not found")
    ),
    tag = "departments"
)]
pub async fn update_department(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let department = services::update_department(db.pool(), id, &req).await?;

    Ok(response::ok(department, "Department updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Department removed"),
        (status = 400, description = "Department still has linked participants"),
        (status = 404, description = "Department not found")
    ),
    tag = "departments"
)]
pub async fn delete_department(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_department(db.pool(), id).await?;

    Ok(response::ok_message("Department removed"))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}/events",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Events owned by the department", body = Vec<EventResponse>)
    ),
    tag = "departments"
)]
pub async fn list_department_events(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let events =
        crate::features::events::services::list_events_by_department(db.pool(), id).await?;

    Ok(response::ok(events, "Department events fetched"))
}
