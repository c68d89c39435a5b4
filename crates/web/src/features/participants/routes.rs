use axum::{
    Router, middleware,
    routing::{delete, get, put},
};
use storage::Database;

use super::handlers::{list_participants, remove_participant, update_participant};
use crate::middleware::auth::{AccessTokens, require_coordinator};

pub fn routes(tokens: AccessTokens) -> Router<Database> {
    let coordinator = Router::new()
        .route("/:id", put(update_participant))
        .route("/:id", delete(remove_participant))
        .route_layer(middleware::from_fn_with_state(tokens, require_coordinator));

    Router::new()
        .route("/", get(list_participants))
        .merge(coordinator)
}
