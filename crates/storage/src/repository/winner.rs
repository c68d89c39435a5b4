use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::winner::{CreateWinnerRequest, UpdateWinnerRequest};
use crate::error::{Result, StorageError};
use crate::models::EventWiseWinner;

/// Repository for EventWiseWinner database operations
pub struct WinnerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WinnerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<EventWiseWinner>> {
        let winners = sqlx::query_as::<_, EventWiseWinner>(
            r#"
            SELECT winner_id, event_id, rank, participant_id, group_id, prize,
                   created_at, updated_at
            FROM event_wise_winners
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(winners)
    }

    /// Winners of one event, best rank first
    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<EventWiseWinner>> {
        let winners = sqlx::query_as::<_, EventWiseWinner>(
            r#"
            SELECT winner_id, event_id, rank, participant_id, group_id, prize,
                   created_at, updated_at
            FROM event_wise_winners
            WHERE event_id = $1
            ORDER BY rank
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(winners)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<EventWiseWinner> {
        let winner = sqlx::query_as::<_, EventWiseWinner>(
            r#"
            SELECT winner_id, event_id, rank, participant_id, group_id, prize,
                   created_at, updated_at
            FROM event_wise_winners
            WHERE winner_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(winner)
    }

    /// Is this rank already assigned for the event, other than `exclude`?
    pub async fn rank_taken(&self, event_id: Uuid, rank: i32, exclude: Option<Uuid>) -> Result<bool> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM event_wise_winners
                WHERE event_id = $1
                  AND rank = $2
                  AND ($3::uuid IS NULL OR winner_id <> $3)
            )
            "#,
        )
        .bind(event_id)
        .bind(rank)
        .bind(exclude)
        .fetch_one(self.pool)
        .await?;

        Ok(taken)
    }

    pub async fn create(&self, event_id: Uuid, req: &CreateWinnerRequest) -> Result<EventWiseWinner> {
        let winner = sqlx::query_as::<_, EventWiseWinner>(
            r#"
            INSERT INTO event_wise_winners (event_id, rank, participant_id, group_id, prize)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING winner_id, event_id, rank, participant_id, group_id, prize,
                      created_at, updated_at
            "#,
        )
        .bind(event_id)
        .bind(req.rank)
        .bind(req.participant_id)
        .bind(req.group_id)
        .bind(&req.prize)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            // The compound (event, rank) index is the backstop under races;
            // a losing writer gets the same message as the pre-check.
            StorageError::from(e)
                .on_unique(&format!("Rank {} already assigned for this event", req.rank))
                .on_foreign_key("Referenced event, participant, or group not found")
        })?;

        Ok(winner)
    }

    /// Update a winner; absent patch fields keep their stored values. The
    /// caller re-checks rank uniqueness when the rank changes.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &EventWiseWinner,
        req: &UpdateWinnerRequest,
    ) -> Result<EventWiseWinner> {
        let rank = req.rank.unwrap_or(existing.rank);
        let participant_id = req.participant_id.or(existing.participant_id);
        let group_id = req.group_id.or(existing.group_id);
        let prize = req.prize.as_ref().unwrap_or(&existing.prize);

        let winner = sqlx::query_as::<_, EventWiseWinner>(
            r#"
            UPDATE event_wise_winners
            SET rank = $2, participant_id = $3, group_id = $4, prize = $5, updated_at = now()
            WHERE winner_id = $1
            RETURNING winner_id, event_id, rank, participant_id, group_id, prize,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(rank)
        .bind(participant_id)
        .bind(group_id)
        .bind(prize)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique(&format!("Rank {rank} is already taken for this event"))
                .on_foreign_key("Referenced participant or group not found")
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(winner)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM event_wise_winners WHERE winner_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
