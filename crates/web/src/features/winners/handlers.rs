use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use storage::Database;
use storage::dto::winner::{CreateWinnerRequest, UpdateWinnerRequest, WinnerResponse};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/winners",
    responses(
        (status = 200, description = "All winner entries", body = Vec<WinnerResponse>)
    ),
    tag = "winners"
)]
pub async fn list_winners(State(db): State<Database>) -> Result<Response, WebError> {
    let winners = services::list_winners(db.pool()).await?;

    Ok(response::ok(winners, "Winners fetched"))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/winners",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Winners of the event, best rank first", body = Vec<WinnerResponse>)
    ),
    tag = "winners"
)]
pub async fn list_event_winners(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let winners = services::list_event_winners(db.pool(), event_id).await?;

    Ok(response::ok(winners, "Event winners fetched"))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/winners",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateWinnerRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Winner declared", body = WinnerResponse),
        (status = 400, description = "Rank already assigned for this event"),
        (status = 404, description = "Event not found")
    ),
    tag = "winners"
)]
pub async fn create_winner(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<CreateWinnerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let winner = services::create_winner(db.pool(), event_id, &req).await?;

    Ok(response::created(winner, "Winner added successfully"))
}

#[utoipa::path(
    put,
    path = "/api/winners/{id}",
    params(
        ("id" = Uuid, Path, description = "Winner entry ID")
    ),
    request_body = UpdateWinnerRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Winner updated", body = WinnerResponse),
        (status = 400, description = "Rank already taken for this event"),
        (status = 404, description = "Winner entry not found")
    ),
    tag = "winners"
)]
pub async fn update_winner(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWinnerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let winner = services::update_winner(db.pool(), id, &req).await?;

    Ok(response::ok(winner, "Winner updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/winners/{id}",
    params(
        ("id" = Uuid, Path, description = "Winner entry ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Winner entry removed"),
        (status = 404, description = "Winner entry not found")
    ),
    tag = "winners"
)]
pub async fn delete_winner(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_winner(db.pool(), id).await?;

    Ok(response::ok_message("Winner removed"))
}
