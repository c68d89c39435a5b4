use sqlx::PgPool;
use storage::dto::group::{
    CreateGroupRequest, GroupDetailResponse, GroupResponse, UpdateGroupRequest,
};
use storage::repository::event::EventRepository;
use storage::repository::group::GroupRepository;
use storage::repository::participant::ParticipantRepository;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn list_groups(pool: &PgPool) -> WebResult<Vec<GroupResponse>> {
    let repo = GroupRepository::new(pool);

    let groups = repo.list().await?;
    Ok(groups.into_iter().map(GroupResponse::from).collect())
}

/// Groups of one event, each with its member list
pub async fn list_event_groups(pool: &PgPool, event_id: Uuid) -> WebResult<Vec<GroupDetailResponse>> {
    let groups = GroupRepository::new(pool).list_by_event(event_id).await?;
    let participants = ParticipantRepository::new(pool);

    let mut detailed = Vec::with_capacity(groups.len());
    for group in groups {
        let members = participants.list_by_group(group.group_id).await?;
        detailed.push(GroupDetailResponse::new(group, members));
    }

    Ok(detailed)
}

/// Create a group under an event
pub async fn create_group(
    pool: &PgPool,
    event_id: Uuid,
    req: &CreateGroupRequest,
) -> WebResult<GroupResponse> {
    EventRepository::new(pool)
        .find_by_id(event_id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Event not found"))?;

    let group = GroupRepository::new(pool).create(event_id, req).await?;
    Ok(group.into())
}

pub async fn update_group(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateGroupRequest,
) -> WebResult<GroupResponse> {
    let repo = GroupRepository::new(pool);

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Group not found"))?;

    let updated = repo.update(id, &existing, req).await?;
    Ok(updated.into())
}

/// Delete a group; its participants are detached, not deleted
pub async fn delete_group(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = GroupRepository::new(pool);

    repo.delete(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Group not found"))
}
