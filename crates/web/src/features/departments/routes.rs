use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_department, delete_department, list_department_events, list_departments,
    update_department,
};
use crate::middleware::auth::{AccessTokens, require_admin};

pub fn routes(tokens: AccessTokens) -> Router<Database> {
    let admin = Router::new()
        .route("/", post(create_department))
        .route("/:id", put(update_department))
        .route("/:id", delete(delete_department))
        .route_layer(middleware::from_fn_with_state(tokens, require_admin));

    Router::new()
        .route("/", get(list_departments))
        .route("/:id/events", get(list_department_events))
        .merge(admin)
}
