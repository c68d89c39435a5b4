use sqlx::PgPool;
use storage::dto::participant::{
    AddParticipantRequest, ParticipantResponse, UpdateParticipantRequest,
};
use storage::repository::event::EventRepository;
use storage::repository::group::GroupRepository;
use storage::repository::participant::ParticipantRepository;
use storage::services::registration_rules;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn list_participants(pool: &PgPool) -> WebResult<Vec<ParticipantResponse>> {
    let repo = ParticipantRepository::new(pool);

    let participants = repo.list().await?;
    Ok(participants.into_iter().map(ParticipantResponse::from).collect())
}

pub async fn list_group_participants(
    pool: &PgPool,
    group_id: Uuid,
) -> WebResult<Vec<ParticipantResponse>> {
    let repo = ParticipantRepository::new(pool);

    let participants = repo.list_by_group(group_id).await?;
    Ok(participants.into_iter().map(ParticipantResponse::from).collect())
}

/// Register the acting user into a group, enforcing the event's capacity
/// limit, one-registration-per-event, and the single-leader rule.
///
/// The checks run first so failures come back in a fixed order with precise
/// messages; the insert itself re-asserts capacity and duplicate registration
/// in one conditional statement, and the partial unique leader index covers
/// the leader rule, so two racing requests cannot both commit.
pub async fn add_participant_to_group(
    pool: &PgPool,
    group_id: Uuid,
    acting_user: Uuid,
    req: &AddParticipantRequest,
) -> WebResult<ParticipantResponse> {
    let group = GroupRepository::new(pool)
        .find_by_id(group_id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Group not found"))?;

    let event = EventRepository::new(pool)
        .find_by_id(group.event_id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Event not found"))?;

    let repo = ParticipantRepository::new(pool);

    let current = repo.count_in_group(group_id).await?;
    registration_rules::check_group_capacity(current, event.group_max_participants)?;

    let already = repo
        .user_registered_for_event(event.event_id, acting_user)
        .await?;
    registration_rules::check_not_already_registered(already)?;

    if req.is_group_leader {
        let leader_exists = repo.leader_exists(group_id, None).await?;
        registration_rules::check_leader_slot(true, leader_exists)?;
    }

    let created = repo
        .create_registered(
            group_id,
            event.event_id,
            acting_user,
            event.group_max_participants,
            req,
        )
        .await?;

    match created {
        Some(participant) => Ok(participant.into()),
        // The conditional insert lost a race; re-run the checks to report
        // the rule that actually failed.
        None => {
            let current = repo.count_in_group(group_id).await?;
            registration_rules::check_group_capacity(current, event.group_max_participants)?;

            let already = repo
                .user_registered_for_event(event.event_id, acting_user)
                .await?;
            registration_rules::check_not_already_registered(already)?;

            Err(WebError::BadRequest(
                "Registration could not be completed".to_string(),
            ))
        }
    }
}

/// Update a participant. Promoting to leader re-checks the single-leader
/// rule against the stored group, excluding the participant itself.
pub async fn update_participant(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateParticipantRequest,
) -> WebResult<ParticipantResponse> {
    let repo = ParticipantRepository::new(pool);

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Participant not found"))?;

    if req.is_group_leader == Some(true) && !existing.is_group_leader {
        let group_id = req.group_id.or(existing.group_id);
        if let Some(group_id) = group_id {
            let leader_exists = repo.leader_exists(group_id, Some(id)).await?;
            registration_rules::check_leader_slot(true, leader_exists)?;
        }
    }

    let updated = repo.update(id, &existing, req).await?;
    Ok(updated.into())
}

/// Delete a participant. The group's member list is the participant rows
/// themselves, so removal needs no second write and re-deleting an already
/// removed id is just a 404.
pub async fn remove_participant(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = ParticipantRepository::new(pool);

    repo.find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Participant not found"))?;

    repo.delete(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Participant not found"))
}
