use sqlx::PgPool;
use storage::dto::common::PaginationMeta;
use storage::dto::event::{
    CreateEventRequest, EventListParams, EventListResponse, EventResponse, EventSummaryResponse,
    UpdateEventRequest,
};
use storage::repository::event::EventRepository;
use storage::services::registration_rules;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// List one page of events, honoring search and filter params
pub async fn list_events(pool: &PgPool, params: &EventListParams) -> WebResult<EventListResponse> {
    let repo = EventRepository::new(pool);

    let total = repo.count_filtered(params).await?;
    let events = repo.list_filtered(params).await?;

    Ok(EventListResponse {
        events: events.into_iter().map(EventResponse::from).collect(),
        pagination: PaginationMeta::new(params.page, params.limit, total),
    })
}

pub async fn list_events_by_department(
    pool: &PgPool,
    department_id: Uuid,
) -> WebResult<Vec<EventResponse>> {
    let repo = EventRepository::new(pool);

    let events = repo.list_by_department(department_id).await?;
    Ok(events.into_iter().map(EventResponse::from).collect())
}

pub async fn get_event(pool: &PgPool, id: Uuid) -> WebResult<EventResponse> {
    let repo = EventRepository::new(pool);

    let event = repo
        .find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Event not found"))?;

    Ok(event.into())
}

/// Create an event after validating its capacity limits
pub async fn create_event(pool: &PgPool, req: &CreateEventRequest) -> WebResult<EventResponse> {
    registration_rules::validate_capacity_limits(
        req.group_min_participants,
        req.group_max_participants,
        req.max_groups_allowed,
    )?;

    let repo = EventRepository::new(pool);
    let event = repo.create(req).await?;

    Ok(event.into())
}

/// Update an event. The patch is merged over the stored row and the merged
/// capacity limits are validated, so a one-sided patch cannot sneak an
/// inverted min/max pair past the check.
pub async fn update_event(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateEventRequest,
) -> WebResult<EventResponse> {
    let repo = EventRepository::new(pool);

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Event not found"))?;

    registration_rules::validate_capacity_limits(
        req.group_min_participants
            .unwrap_or(existing.group_min_participants),
        req.group_max_participants
            .unwrap_or(existing.group_max_participants),
        req.max_groups_allowed.unwrap_or(existing.max_groups_allowed),
    )?;

    let updated = repo.update(id, &existing, req).await?;
    Ok(updated.into())
}

pub async fn delete_event(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = EventRepository::new(pool);

    repo.delete(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Event not found"))
}

pub async fn get_event_summary(pool: &PgPool, id: Uuid) -> WebResult<EventSummaryResponse> {
    let repo = EventRepository::new(pool);

    repo.find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Event not found"))?;

    let (total_groups, total_participants) = repo.summary(id).await?;

    Ok(EventSummaryResponse {
        event_id: id,
        total_groups,
        total_participants,
    })
}
