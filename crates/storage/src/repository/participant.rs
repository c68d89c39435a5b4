use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::participant::{AddParticipantRequest, UpdateParticipantRequest};
use crate::error::{Result, StorageError};
use crate::models::Participant;

/// Repository for Participant database operations
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, full_name, email, phone, institute_id, department_id,
                   user_id, group_id, is_group_leader, created_at, updated_at
            FROM participants
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Member list of one group, in registration order
    pub async fn list_by_group(&self, group_id: Uuid) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, full_name, email, phone, institute_id, department_id,
                   user_id, group_id, is_group_leader, created_at, updated_at
            FROM participants
            WHERE group_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(group_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Most recent registrations, for the admin dashboard
    pub async fn recent(&self, limit: i64) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, full_name, email, phone, institute_id, department_id,
                   user_id, group_id, is_group_leader, created_at, updated_at
            FROM participants
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, full_name, email, phone, institute_id, department_id,
                   user_id, group_id, is_group_leader, created_at, updated_at
            FROM participants
            WHERE participant_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    pub async fn count_in_group(&self, group_id: Uuid) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM participants WHERE group_id = $1")
                .bind(group_id)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// Does the group already have a leader, other than `exclude`?
    pub async fn leader_exists(&self, group_id: Uuid, exclude: Option<Uuid>) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM participants
                WHERE group_id = $1
                  AND is_group_leader
                  AND ($2::uuid IS NULL OR participant_id <> $2)
            )
            "#,
        )
        .bind(group_id)
        .bind(exclude)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Is this user already in any group of the event?
    pub async fn user_registered_for_event(&self, event_id: Uuid, user_id: Uuid) -> Result<bool> {
        let registered = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM participants p
                JOIN groups g ON p.group_id = g.group_id
                WHERE p.user_id = $1 AND g.event_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(self.pool)
        .await?;

        Ok(registered)
    }

    /// Insert a registration as one conditional write: the row only lands if
    /// the group is still below `group_max` members and the user has no
    /// participant in any group of `event_id`. Returns `None` when the
    /// condition failed, so the caller can re-check which rule lost the race.
    /// Leader uniqueness is not part of the condition; the partial unique
    /// index rejects a second leader and is remapped here.
    pub async fn create_registered(
        &self,
        group_id: Uuid,
        event_id: Uuid,
        user_id: Uuid,
        group_max: i32,
        req: &AddParticipantRequest,
    ) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (
                full_name, email, phone, institute_id, department_id,
                user_id, group_id, is_group_leader
            )
            SELECT $1, $2, $3, $4, $5, $6, $7, $8
            WHERE (SELECT COUNT(*) FROM participants WHERE group_id = $7) < $9
              AND NOT EXISTS (
                  SELECT 1
                  FROM participants p
                  JOIN groups g ON p.group_id = g.group_id
                  WHERE p.user_id = $6 AND g.event_id = $10
              )
            RETURNING participant_id, full_name, email, phone, institute_id, department_id,
                      user_id, group_id, is_group_leader, created_at, updated_at
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(req.institute_id)
        .bind(req.department_id)
        .bind(user_id)
        .bind(group_id)
        .bind(req.is_group_leader)
        .bind(group_max)
        .bind(event_id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_participant_write_error)?;

        Ok(participant)
    }

    /// Update a participant; absent patch fields keep their stored values
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Participant,
        req: &UpdateParticipantRequest,
    ) -> Result<Participant> {
        let full_name = req.full_name.as_ref().unwrap_or(&existing.full_name);
        let email = req.email.as_ref().unwrap_or(&existing.email);
        let phone = req.phone.as_ref().unwrap_or(&existing.phone);
        let institute_id = req.institute_id.unwrap_or(existing.institute_id);
        let department_id = req.department_id.unwrap_or(existing.department_id);
        let group_id = req.group_id.or(existing.group_id);
        let is_group_leader = req.is_group_leader.unwrap_or(existing.is_group_leader);

        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET full_name = $2, email = $3, phone = $4, institute_id = $5,
                department_id = $6, group_id = $7, is_group_leader = $8, updated_at = now()
            WHERE participant_id = $1
            RETURNING participant_id, full_name, email, phone, institute_id, department_id,
                      user_id, group_id, is_group_leader, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(institute_id)
        .bind(department_id)
        .bind(group_id)
        .bind(is_group_leader)
        .fetch_optional(self.pool)
        .await
        .map_err(map_participant_write_error)?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    /// Delete a participant. Membership is the row itself, so the group's
    /// member list shrinks with the delete and removal is idempotent at the
    /// store level.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM participants WHERE participant_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

fn map_participant_write_error(e: sqlx::Error) -> StorageError {
    let err = StorageError::from(e);
    let constraint = err.constraint().map(str::to_owned);
    match constraint.as_deref() {
        Some("participants_email_key") => {
            StorageError::ConstraintViolation("A participant with this email already exists".into())
        }
        Some("participants_one_leader_per_group") => {
            StorageError::ConstraintViolation("Group already has a leader".into())
        }
        Some("participants_institute_id_fkey") => {
            StorageError::ConstraintViolation("Institute not found".into())
        }
        Some("participants_department_id_fkey") => {
            StorageError::ConstraintViolation("Department not found".into())
        }
        Some("participants_group_id_fkey") => {
            StorageError::ConstraintViolation("Group not found".into())
        }
        _ => err,
    }
}
