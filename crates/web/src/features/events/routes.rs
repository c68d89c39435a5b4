use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_event, delete_event, get_event, get_event_summary, list_events, update_event,
};
use crate::features::groups::handlers::{create_group, list_event_groups};
use crate::features::winners::handlers::{create_winner, list_event_winners};
use crate::middleware::auth::{AccessTokens, require_coordinator};

pub fn routes(tokens: AccessTokens) -> Router<Database> {
    let coordinator = Router::new()
        .route("/", post(create_event))
        .route("/:id", put(update_event))
        .route("/:id", delete(delete_event))
        .route("/:id/winners", post(create_winner))
        .route_layer(middleware::from_fn_with_state(tokens, require_coordinator));

    Router::new()
        .route("/", get(list_events))
        .route("/:id", get(get_event))
        .route("/:id/summary", get(get_event_summary))
        .route("/:id/groups", get(list_event_groups))
        .route("/:id/groups", post(create_group))
        .route("/:id/winners", get(list_event_winners))
        .merge(coordinator)
}
