use anyhow::Context;
use axum::{Router, response::Response, routing::get};
use storage::Database;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod response;

use config::Config;
use middleware::auth::AccessTokens;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::institutes::handlers::list_institutes,
        features::institutes::handlers::get_institute,
        features::institutes::handlers::create_institute,
        features::institutes::handlers::update_institute,
        features::institutes::handlers::delete_institute,
        features::institutes::handlers::get_institute_summary,
        features::institutes::handlers::list_institute_departments,
        features::departments::handlers::list_departments,
        features::departments::handlers::create_department,
        features::departments::handlers::update_department,
        features::departments::handlers::delete_department,
        features::departments::handlers::list_department_events,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::events::handlers::get_event_summary,
        features::groups::handlers::list_groups,
        features::groups::handlers::list_event_groups,
        features::groups::handlers::create_group,
        features::groups::handlers::update_group,
        features::groups::handlers::delete_group,
        features::participants::handlers::list_participants,
        features::participants::handlers::list_group_participants,
        features::participants::handlers::add_participant,
        features::participants::handlers::update_participant,
        features::participants::handlers::remove_participant,
        features::winners::handlers::list_winners,
        features::winners::handlers::list_event_winners,
        features::winners::handlers::create_winner,
        features::winners::handlers::update_winner,
        features::winners::handlers::delete_winner,
        features::dashboard::handlers::get_stats,
        features::dashboard::handlers::get_recent_registrations,
    ),
    components(
        schemas(
            storage::dto::common::PaginationParams,
            storage::dto::common::PaginationMeta,
            storage::dto::institute::CreateInstituteRequest,
            storage::dto::institute::UpdateInstituteRequest,
            storage::dto::institute::InstituteResponse,
            storage::dto::institute::InstituteListResponse,
            storage::dto::institute::InstituteSummaryResponse,
            storage::dto::department::CreateDepartmentRequest,
            storage::dto::department::UpdateDepartmentRequest,
            storage::dto::department::DepartmentResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::event::EventListResponse,
            storage::dto::event::EventSummaryResponse,
            storage::dto::group::CreateGroupRequest,
            storage::dto::group::UpdateGroupRequest,
            storage::dto::group::GroupResponse,
            storage::dto::group::GroupDetailResponse,
            storage::dto::participant::AddParticipantRequest,
            storage::dto::participant::UpdateParticipantRequest,
            storage::dto::participant::ParticipantResponse,
            storage::dto::winner::CreateWinnerRequest,
            storage::dto::winner::UpdateWinnerRequest,
            storage::dto::winner::WinnerResponse,
            storage::dto::dashboard::DashboardStatsResponse,
            storage::models::Institute,
            storage::models::Department,
            storage::models::Event,
            storage::models::Group,
            storage::models::Participant,
            storage::models::EventWiseWinner,
        )
    ),
    tags(
        (name = "institutes", description = "Institute management endpoints"),
        (name = "departments", description = "Department management endpoints"),
        (name = "events", description = "Event management endpoints"),
        (name = "groups", description = "Group (team) endpoints"),
        (name = "participants", description = "Participant registration endpoints"),
        (name = "winners", description = "Event winner endpoints"),
        (name = "dashboard", description = "Admin dashboard endpoints"),
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
                        .bearer_format("Access Token")
                        .build(),
                ),
            )
        }
    }
}

async fn api_status() -> Response {
    response::ok(
        serde_json::json!({
            "status": "Backend is running",
            "timestamp": chrono::Utc::now(),
        }),
        "Status fetched",
    )
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

    tracing::info!("Starting Frolic API");

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

    let tokens = AccessTokens::from_comma_separated(&config.access_tokens);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let cors = CorsLayer::very_permissive();

    let app = Router::new()
        .route("/api/status", get(api_status))
        .nest("/api/institutes", features::institutes::routes::routes(tokens.clone()))
        .nest("/api/departments", features::departments::routes::routes(tokens.clone()))
        .nest("/api/events", features::events::routes::routes(tokens.clone()))
        .nest("/api/groups", features::groups::routes::routes(tokens.clone()))
        .nest("/api/participants", features::participants::routes::routes(tokens.clone()))
        .nest("/api/winners", features::winners::routes::routes(tokens.clone()))
        .nest("/api/dashboard", features::dashboard::routes::routes(tokens))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
