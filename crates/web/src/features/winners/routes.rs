use axum::{
    Router, middleware,
    routing::{delete, get, put},
};
use storage::Database;

use super::handlers::{delete_winner, list_winners, update_winner};
use crate::middleware::auth::{AccessTokens, require_coordinator};

pub fn routes(tokens: AccessTokens) -> Router<Database> {
    let coordinator = Router::new()
        .route("/:id", put(update_winner))
        .route("/:id", delete(delete_winner))
        .route_layer(middleware::from_fn_with_state(tokens, require_coordinator));

    Router::new()
        .route("/", get(list_winners))
        .merge(coordinator)
}
