use axum::{Router, middleware, routing::post};
use storage::Database;

use super::handlers::submit_results;
use crate::middleware::auth::{ApiKeys, require_auth};

/// Mounted under `/api/competitions`
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:id/results", post(submit_results))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
