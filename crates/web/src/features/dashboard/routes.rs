use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{get_recent_registrations, get_stats};
use crate::middleware::auth::{AccessTokens, require_admin};

pub fn routes(tokens: AccessTokens) -> Router<Database> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/recent", get(get_recent_registrations))
        .route_layer(middleware::from_fn_with_state(tokens, require_admin))
}
