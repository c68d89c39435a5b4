use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::institute::{CreateInstituteRequest, UpdateInstituteRequest};
use crate::error::{Result, StorageError};
use crate::models::Institute;

/// Repository for Institute database operations
pub struct InstituteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InstituteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM institutes")
            .fetch_one(self.pool)
            .await?;

        Ok(total)
    }

    /// List one page of institutes, ordered by name
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Institute>> {
        let institutes = sqlx::query_as::<_, Institute>(
            r#"
            SELECT institute_id, name, location, contact, created_at, updated_at
            FROM institutes
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(institutes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Institute> {
        let institute = sqlx::query_as::<_, Institute>(
            r#"
            SELECT institute_id, name, location, contact, created_at, updated_at
            FROM institutes
            WHERE institute_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(institute)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Institute>> {
        let institute = sqlx::query_as::<_, Institute>(
            r#"
            SELECT institute_id, name, location, contact, created_at, updated_at
            FROM institutes
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(institute)
    }

    pub async fn create(&self, req: &CreateInstituteRequest) -> Result<Institute> {
        let institute = sqlx::query_as::<_, Institute>(
            r#"
            INSERT INTO institutes (name, location, contact)
            VALUES ($1, $2, $3)
            RETURNING institute_id, name, location, contact, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.location)
        .bind(&req.contact)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("Institute already exists"))?;

        Ok(institute)
    }

    /// Update an institute; absent patch fields keep their stored values
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Institute,
        req: &UpdateInstituteRequest,
    ) -> Result<Institute> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let location = req.location.as_ref().unwrap_or(&existing.location);
        let contact = req.contact.as_ref().unwrap_or(&existing.contact);

        let institute = sqlx::query_as::<_, Institute>(
            r#"
            UPDATE institutes
            SET name = $2, location = $3, contact = $4, updated_at = now()
            WHERE institute_id = $1
            RETURNING institute_id, name, location, contact, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(location)
        .bind(contact)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("Institute already exists"))?
        .ok_or(StorageError::NotFound)?;

        Ok(institute)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM institutes WHERE institute_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e)
                    .on_foreign_key("Institute has linked departments or participants")
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Count events (through the institute's departments) and participants
    pub async fn summary(&self, id: Uuid) -> Result<(i64, i64)> {
        let events_count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM events e
            JOIN departments d ON e.department_id = d.department_id
            WHERE d.institute_id = $1
            "#,
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        let participants_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM participants WHERE institute_id = $1")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok((events_count, participants_count))
    }
}
