use axum::{
    Extension, Json,
    extract::{Path, State},
    response::Response,
};
use storage::Database;
use storage::dto::participant::{
    AddParticipantRequest, ParticipantResponse, UpdateParticipantRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Principal;
use crate::response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participants",
    responses(
        (status = 200, description = "All participants", body = Vec<ParticipantResponse>)
    ),
    tag = "participants"
)]
pub async fn list_participants(State(db): State<Database>) -> Result<Response, WebError> {
    let participants = services::list_participants(db.pool()).await?;

    Ok(response::ok(participants, "All participants fetched"))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}/participants",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Members of the group", body = Vec<ParticipantResponse>)
    ),
    tag = "participants"
)]
pub async fn list_group_participants(
    State(db): State<Database>,
    Path(group_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let participants = services::list_group_participants(db.pool(), group_id).await?;

    Ok(response::ok(participants, "Group participants fetched"))
}

#[utoipa::path(
    post,
    path = "/api/groups/{id}/participants",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    request_body = AddParticipantRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Participant registered", body = ParticipantResponse),
        (status = 400, description = "Capacity, duplicate-registration, or leader rule failed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group or event not found")
    ),
    tag = "participants"
)]
pub async fn add_participant(
    State(db): State<Database>,
    Path(group_id): Path<Uuid>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<AddParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant =
        services::add_participant_to_group(db.pool(), group_id, principal.user_id, &req).await?;

    Ok(response::created(participant, "Participant added to group"))
}

#[utoipa::path(
    put,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    request_body = UpdateParticipantRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Participant updated", body = ParticipantResponse),
        (status = 400, description = "Leader rule failed"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn update_participant(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = services::update_participant(db.pool(), id, &req).await?;

    Ok(response::ok(participant, "Participant updated"))
}

#[utoipa::path(
    delete,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Participant removed from its group"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn remove_participant(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::remove_participant(db.pool(), id).await?;

    Ok(response::ok_message("Participant removed"))
}
