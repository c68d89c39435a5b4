use sqlx::PgPool;

use crate::dto::dashboard::DashboardStatsResponse;
use crate::error::Result;

/// Read-only aggregate queries backing the admin dashboard
pub struct DashboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DashboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn stats(&self) -> Result<DashboardStatsResponse> {
        let (institutes, events, participants, winners) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT (SELECT COUNT(*) FROM institutes),
                   (SELECT COUNT(*) FROM events),
                   (SELECT COUNT(*) FROM participants),
                   (SELECT COUNT(*) FROM event_wise_winners)
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(DashboardStatsResponse {
            institutes,
            events,
            participants,
            winners,
        })
    }
}
