use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use storage::Database;
use storage::dto::event::{
    CreateEventRequest, EventListParams, EventListResponse, EventResponse, EventSummaryResponse,
    UpdateEventRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventListParams),
    responses(
        (status = 200, description = "One page of events with filters applied", body = EventListResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    Query(params): Query<EventListParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let data = services::list_events(db.pool(), &params).await?;

    Ok(response::ok(data, "Events fetched successfully"))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), id).await?;

    Ok(response::ok(event, "Event details fetched"))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Validation error or invalid capacity limits"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a coordinator")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req).await?;

    Ok(response::created(event, "Event created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, description = "Invalid capacity limits after merging the patch"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::update_event(db.pool(), id, &req).await?;

    Ok(response::ok(event, "Event updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event removed"),
        (status = 400, description = "Event still has linked groups or winners"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_event(db.pool(), id).await?;

    Ok(response::ok_message("Event removed"))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/summary",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registration counts", body = EventSummaryResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event_summary(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let summary = services::get_event_summary(db.pool(), id).await?;

    Ok(response::ok(summary, "Event summary fetched"))
}
