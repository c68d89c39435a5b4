use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use storage::Database;
use storage::dto::common::PaginationParams;
use storage::dto::department::DepartmentResponse;
use storage::dto::institute::{
    CreateInstituteRequest, InstituteListResponse, InstituteResponse, InstituteSummaryResponse,
    UpdateInstituteRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/institutes",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of institutes", body = InstituteListResponse)
    ),
    tag = "institutes"
)]
pub async fn list_institutes(
    State(db): State<Database>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let data = services::list_institutes(db.pool(), &params).await?;

    Ok(response::ok(data, "Institutes fetched successfully"))
}

#[utoipa::path(
    get,
    path = "/api/institutes/{id}",
    params(
        ("id" = Uuid, Path, description = "Institute ID")
    ),
    responses(
        (status = 200, description = "Institute found", body = InstituteResponse),
        (status = 404, description = "Institute not found")
    ),
    tag = "institutes"
)]
pub async fn get_institute(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let institute = services::get_institute(db.pool(), id).await?;

    Ok(response::ok(institute, "Institute details fetched"))
}

#[utoipa::path(
    post,
    path = "/api/institutes",
    request_body = CreateInstituteRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Institute created", body = InstituteResponse),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    ),
    tag = "institutes"
)]
pub async fn create_institute(
    State(db): State<Database>,
    Json(req): Json<CreateInstituteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let institute = services::create_institute(db.pool(), &req).await?;

    Ok(response::created(institute, "Institute created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/institutes/{id}",
    params(
        ("id" = Uuid, Path, description = "Institute ID")
    ),
    request_body = UpdateInstituteRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Institute updated", body = InstituteResponse),
        (status = 404, description = "Institute not found")
    ),
    tag = "institutes"
)]
pub async fn update_institute(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateInstituteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let institute = services::update_institute(db.pool(), id, &req).await?;

    Ok(response::ok(institute, "Institute updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/institutes/{id}",
    params(
        ("id" = Uuid, Path, description = "Institute ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Institute removed"),
        (status = 400, description = "Institute still has linked records"),
        (status = 404, description = "Institute not found")
    ),
    tag = "institutes"
)]
pub async fn delete_institute(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_institute(db.pool(), id).await?;

    Ok(response::ok_message("Institute removed"))
}

#[utoipa::path(
    get,
    path = "/api/institutes/{id}/summary",
    params(
        ("id" = Uuid, Path, description = "Institute ID")
    ),
    responses(
        (status = 200, description = "Dependent-record counts", body = InstituteSummaryResponse),
        (status = 404, description = "Institute not found")
    ),
    tag = "institutes"
)]
pub async fn get_institute_summary(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let summary = services::get_institute_summary(db.pool(), id).await?;

    Ok(response::ok(summary, "Institute summary fetched"))
}

#[utoipa::path(
    get,
    path = "/api/institutes/{id}/departments",
    params(
        ("id" = Uuid, Path, description = "Institute ID")
    ),
    responses(
        (status = 200, description = "Departments of the institute", body = Vec<DepartmentResponse>)
    ),
    tag = "institutes"
)]
pub async fn list_institute_departments(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let departments =
        crate::features::departments::services::list_departments_by_institute(db.pool(), id)
            .await?;

    Ok(response::ok(departments, "Institute departments fetched"))
}
