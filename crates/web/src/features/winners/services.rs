use sqlx::PgPool;
use storage::dto::winner::{CreateWinnerRequest, UpdateWinnerRequest, WinnerResponse};
use storage::repository::event::EventRepository;
use storage::repository::winner::WinnerRepository;
use storage::services::registration_rules;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn list_winners(pool: &PgPool) -> WebResult<Vec<WinnerResponse>> {
    let repo = WinnerRepository::new(pool);

    let winners = repo.list().await?;
    Ok(winners.into_iter().map(WinnerResponse::from).collect())
}

pub async fn list_event_winners(pool: &PgPool, event_id: Uuid) -> WebResult<Vec<WinnerResponse>> {
    let repo = WinnerRepository::new(pool);

    let winners = repo.list_by_event(event_id).await?;
    Ok(winners.into_iter().map(WinnerResponse::from).collect())
}

/// Declare a winner. The rank pre-check yields the friendly message; the
/// compound (event, rank) unique index is the backstop under concurrency,
/// and the repository maps a losing insert to the same message.
pub async fn create_winner(
    pool: &PgPool,
    event_id: Uuid,
    req: &CreateWinnerRequest,
) -> WebResult<WinnerResponse> {
    EventRepository::new(pool)
        .find_by_id(event_id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Event not found"))?;

    let repo = WinnerRepository::new(pool);

    let taken = repo.rank_taken(event_id, req.rank, None).await?;
    registration_rules::check_rank_free_for_create(req.rank, taken)?;

    let winner = repo.create(event_id, req).await?;
    Ok(winner.into())
}

/// Update a winner; a changed rank re-checks uniqueness within the event,
/// excluding this record.
pub async fn update_winner(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateWinnerRequest,
) -> WebResult<WinnerResponse> {
    let repo = WinnerRepository::new(pool);

    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Winner entry not found"))?;

    if let Some(rank) = req.rank {
        if rank != existing.rank {
            let taken = repo.rank_taken(existing.event_id, rank, Some(id)).await?;
            registration_rules::check_rank_free_for_update(rank, taken)?;
        }
    }

    let updated = repo.update(id, &existing, req).await?;
    Ok(updated.into())
}

pub async fn delete_winner(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = WinnerRepository::new(pool);

    repo.delete(id)
        .await
        .map_err(|e| WebError::map_not_found(e, "Winner entry not found"))
}
