use axum::Router;
use storage::Database;

use crate::middleware::auth::ApiKeys;

pub mod competitions;
pub mod organizers;
pub mod participants;
pub mod results;
pub mod teams;

/// All `/api` routes, still waiting for the database state
pub fn router(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .nest(
            "/api/competitions",
            competitions::routes::routes(api_keys.clone())
                .merge(results::routes::routes(api_keys.clone())),
        )
        .nest(
            "/api/organizers",
            organizers::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/participants",
            participants::routes::routes(api_keys.clone()),
        )
        .nest("/api/teams", teams::routes::routes(api_keys))
}
