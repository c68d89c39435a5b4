use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{delete_group, list_groups, update_group};
use crate::features::participants::handlers::{add_participant, list_group_participants};
use crate::middleware::auth::{AccessTokens, require_auth, require_coordinator};

pub fn routes(tokens: AccessTokens) -> Router<Database> {
    let coordinator = Router::new()
        .route("/:id", put(update_group))
        .route("/:id", delete(delete_group))
        .route_layer(middleware::from_fn_with_state(
            tokens.clone(),
            require_coordinator,
        ));

    // Any authenticated user may register into a group
    let registration = Router::new()
        .route("/:id/participants", post(add_participant))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth));

    Router::new()
        .route("/", get(list_groups))
        .route("/:id/participants", get(list_group_participants))
        .merge(registration)
        .merge(coordinator)
}
