use sqlx::PgPool;
use storage::dto::dashboard::DashboardStatsResponse;
use storage::dto::participant::ParticipantResponse;
use storage::repository::dashboard::DashboardRepository;
use storage::repository::participant::ParticipantRepository;

use crate::error::WebResult;

const RECENT_REGISTRATIONS: i64 = 5;

pub async fn get_stats(pool: &PgPool) -> WebResult<DashboardStatsResponse> {
    let repo = DashboardRepository::new(pool);

    Ok(repo.stats().await?)
}

pub async fn get_recent_registrations(pool: &PgPool) -> WebResult<Vec<ParticipantResponse>> {
    let repo = ParticipantRepository::new(pool);

    let recent = repo.recent(RECENT_REGISTRATIONS).await?;
    Ok(recent.into_iter().map(ParticipantResponse::from).collect())
}
