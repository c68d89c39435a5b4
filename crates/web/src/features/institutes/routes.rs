use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_institute, delete_institute, get_institute, get_institute_summary,
    list_institute_departments, list_institutes, update_institute,
};
use crate::middleware::auth::{AccessTokens, require_admin};

pub fn routes(tokens: AccessTokens) -> Router<Database> {
    let admin = Router::new()
        .route("/", post(create_institute))
        .route("/:id", put(update_institute))
        .route("/:id", delete(delete_institute))
        .route_layer(middleware::from_fn_with_state(tokens, require_admin));

    Router::new()
        .route("/", get(list_institutes))
        .route("/:id", get(get_institute))
        .route("/:id/summary", get(get_institute_summary))
        .route("/:id/departments", get(list_institute_departments))
        .merge(admin)
}
