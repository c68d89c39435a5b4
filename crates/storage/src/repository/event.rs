use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, EventListParams, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::Event;

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count events matching the listing filters
    pub async fn count_filtered(&self, params: &EventListParams) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM events
            WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
              AND ($2::uuid IS NULL OR department_id = $2)
              AND ($3::text IS NULL OR location ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(&params.q)
        .bind(params.department)
        .bind(&params.location)
        .fetch_one(self.pool)
        .await?;

        Ok(total)
    }

    /// List one page of events, newest first, honoring the listing filters
    pub async fn list_filtered(&self, params: &EventListParams) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, description, date, time, location, category, rules,
                   department_id, max_participants, group_min_participants,
                   group_max_participants, max_groups_allowed, created_at, updated_at
            FROM events
            WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
              AND ($2::uuid IS NULL OR department_id = $2)
              AND ($3::text IS NULL OR location ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(&params.q)
        .bind(params.department)
        .bind(&params.location)
        .bind(i64::from(params.limit))
        .bind(params.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn list_by_department(&self, department_id: Uuid) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, description, date, time, location, category, rules,
                   department_id, max_participants, group_min_participants,
                   group_max_participants, max_groups_allowed, created_at, updated_at
            FROM events
            WHERE department_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(department_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, description, date, time, location, category, rules,
                   department_id, max_participants, group_min_participants,
                   group_max_participants, max_groups_allowed, created_at, updated_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                title, description, date, time, location, category, rules,
                department_id, max_participants, group_min_participants,
                group_max_participants, max_groups_allowed
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING event_id, title, description, date, time, location, category, rules,
                      department_id, max_participants, group_min_participants,
                      group_max_participants, max_groups_allowed, created_at, updated_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.date)
        .bind(&req.time)
        .bind(&req.location)
        .bind(&req.category)
        .bind(&req.rules)
        .bind(req.department_id)
        .bind(req.max_participants)
        .bind(req.group_min_participants)
        .bind(req.group_max_participants)
        .bind(req.max_groups_allowed)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_foreign_key("Department not found"))?;

        Ok(event)
    }

    /// Update an event; absent patch fields keep their stored values. The
    /// caller validates the merged capacity pair before getting here.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Event,
        req: &UpdateEventRequest,
    ) -> Result<Event> {
        let title = req.title.as_ref().unwrap_or(&existing.title);
        let description = req.description.as_ref().unwrap_or(&existing.description);
        let date = req.date.unwrap_or(existing.date);
        let time = req.time.as_ref().unwrap_or(&existing.time);
        let location = req.location.as_ref().unwrap_or(&existing.location);
        let category = req.category.as_ref().unwrap_or(&existing.category);
        let rules = req.rules.as_ref().unwrap_or(&existing.rules);
        let department_id = req.department_id.or(existing.department_id);
        let max_participants = req.max_participants.unwrap_or(existing.max_participants);
        let group_min_participants = req
            .group_min_participants
            .unwrap_or(existing.group_min_participants);
        let group_max_participants = req
            .group_max_participants
            .unwrap_or(existing.group_max_participants);
        let max_groups_allowed = req.max_groups_allowed.unwrap_or(existing.max_groups_allowed);

        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $2, description = $3, date = $4, time = $5, location = $6,
                category = $7, rules = $8, department_id = $9, max_participants = $10,
                group_min_participants = $11, group_max_participants = $12,
                max_groups_allowed = $13, updated_at = now()
            WHERE event_id = $1
            RETURNING event_id, title, description, date, time, location, category, rules,
                      department_id, max_participants, group_min_participants,
                      group_max_participants, max_groups_allowed, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(date)
        .bind(time)
        .bind(location)
        .bind(category)
        .bind(rules)
        .bind(department_id)
        .bind(max_participants)
        .bind(group_min_participants)
        .bind(group_max_participants)
        .bind(max_groups_allowed)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_foreign_key("Department not found"))?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| StorageError::from(e).on_foreign_key("Event has linked groups or winners"))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Count registered groups and participants for one event
    pub async fn summary(&self, id: Uuid) -> Result<(i64, i64)> {
        let total_groups =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM groups WHERE event_id = $1")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        let total_participants = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM participants p
            JOIN groups g ON p.group_id = g.group_id
            WHERE g.event_id = $1
            "#,
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok((total_groups, total_participants))
    }
}
