use serde::Serialize;
use utoipa::ToSchema;

/// Entity counts shown on the admin dashboard
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub institutes: i64,
    pub events: i64,
    pub participants: i64,
    pub winners: i64,
}
