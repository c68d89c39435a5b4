use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::group::{CreateGroupRequest, UpdateGroupRequest};
use crate::error::{Result, StorageError};
use crate::models::Group;

/// Repository for Group database operations
pub struct GroupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GroupRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            r#"
            SELECT group_id, name, event_id, is_payment_done, is_present, created_at, updated_at
            FROM groups
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(groups)
    }

    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            r#"
            SELECT group_id, name, event_id, is_payment_done, is_present, created_at, updated_at
            FROM groups
            WHERE event_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(groups)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            SELECT group_id, name, event_id, is_payment_done, is_present, created_at, updated_at
            FROM groups
            WHERE group_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    pub async fn create(&self, event_id: Uuid, req: &CreateGroupRequest) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (name, event_id)
            VALUES ($1, $2)
            RETURNING group_id, name, event_id, is_payment_done, is_present, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(event_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_foreign_key("Event not found"))?;

        Ok(group)
    }

    /// Update a group; absent patch fields keep their stored values
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Group,
        req: &UpdateGroupRequest,
    ) -> Result<Group> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let is_payment_done = req.is_payment_done.unwrap_or(existing.is_payment_done);
        let is_present = req.is_present.unwrap_or(existing.is_present);

        let group = sqlx::query_as::<_, Group>(
            r#"
            UPDATE groups
            SET name = $2, is_payment_done = $3, is_present = $4, updated_at = now()
            WHERE group_id = $1
            RETURNING group_id, name, event_id, is_payment_done, is_present, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(is_payment_done)
        .bind(is_present)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    /// Delete a group. Its participants are detached, not deleted: their
    /// `group_id` is cleared by the foreign key's SET NULL action.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM groups WHERE group_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
