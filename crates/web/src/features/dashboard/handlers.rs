use axum::{extract::State, response::Response};
use storage::Database;
use storage::dto::dashboard::DashboardStatsResponse;
use storage::dto::participant::ParticipantResponse;

use crate::error::WebError;
use crate::response;

use super::services;

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Entity counts", body = DashboardStatsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    ),
    tag = "dashboard"
)]
pub async fn get_stats(State(db): State<Database>) -> Result<Response, WebError> {
    let stats = services::get_stats(db.pool()).await?;

    Ok(response::ok(stats, "Dashboard stats fetched"))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/recent",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Five most recent registrations", body = Vec<ParticipantResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    ),
    tag = "dashboard"
)]
pub async fn get_recent_registrations(State(db): State<Database>) -> Result<Response, WebError> {
    let recent = services::get_recent_registrations(db.pool()).await?;

    Ok(response::ok(recent, "Recent registrations fetched"))
}
