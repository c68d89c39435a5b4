use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use storage::Database;
use storage::dto::group::{
    CreateGroupRequest, GroupDetailResponse, GroupResponse, UpdateGroupRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/groups",
    responses(
        (status = 200, description = "All groups", body = Vec<GroupResponse>)
    ),
    tag = "groups"
)]
pub async fn list_groups(State(db): State<Database>) -> Result<Response, WebError> {
    let groups = services::list_groups(db.pool()).await?;

    Ok(response::ok(groups, "Groups fetched"))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/groups",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Groups of the event with their member lists", body = Vec<GroupDetailResponse>)
    ),
    tag = "groups"
)]
pub async fn list_event_groups(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let groups = services::list_event_groups(db.pool(), event_id).await?;

    Ok(response::ok(groups, "Event groups fetched"))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/groups",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = GroupResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "groups"
)]
pub async fn create_group(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let group = services::create_group(db.pool(), event_id, &req).await?;

    Ok(response::created(group, "Group created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    request_body = UpdateGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Group updated", body = GroupResponse),
        (status = 404, description = "Group not found")
    ),
    tag = "groups"
)]
pub async fn update_group(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let group = services::update_group(db.pool(), id, &req).await?;

    Ok(response::ok(group, "Group updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Group removed; members detached"),
        (status = 404, description = "Group not found")
    ),
    tag = "groups"
)]
pub async fn delete_group(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_group(db.pool(), id).await?;

    Ok(response::ok_message("Group removed"))
}
