use anyhow::Context;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::get_standings,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::register,
        features::results::handlers::submit_results,
        features::organizers::handlers::create_organizer,
        features::organizers::handlers::get_dashboard,
        features::participants::handlers::create_participant,
        features::participants::handlers::get_participant,
        features::participants::handlers::join_team,
        features::teams::handlers::list_teams,
        features::teams::handlers::create_team,
    ),
    components(
        schemas(
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::common::PaginationMeta,
            storage::dto::people::CreateOrganizerRequest,
            storage::dto::people::CreateParticipantRequest,
            storage::dto::people::CreateTeamRequest,
            storage::dto::people::JoinTeamRequest,
            storage::dto::people::OrganizerDashboard,
            storage::dto::people::ParticipantDashboard,
            storage::dto::registration::RegistrationMode,
            storage::dto::registration::RegistrationRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::standings::TeamStanding,
            storage::dto::standings::ParticipantResultEntry,
            storage::dto::standings::FinalizeResultsResponse,
            storage::services::placement::TeamPlacement,
            storage::models::Competition,
            storage::models::CompetitionResult,
            storage::models::Organizer,
            storage::models::Participant,
            storage::models::Team,
        )
    ),
    tags(
        (name = "competitions", description = "Competition listing, creation and registration"),
        (name = "results", description = "Score submission and placement"),
        (name = "organizers", description = "Organizer profiles"),
        (name = "participants", description = "Participant profiles and team membership"),
        (name = "teams", description = "Teams"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting competition results API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API keys configured, every protected endpoint will answer 401");
    } else {
        tracing::info!("Loaded {} API keys", api_keys.len());
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = features::router(api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
