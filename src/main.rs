use sqlx::sqlite::SqlitePoolOptions;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use climate_api::api::{create_router, AppState};
use climate_api::config::Config;
use climate_api::db::{schema, MeasurementRepository, StationRepository};
use climate_api::services::ClimateService;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,climate_api=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting climate API with config: {:?}", config);

    // Create database connection pool
    info!("Connecting to database...");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    info!("Database connection established");

    // The store is pre-existing and read-only; probe the expected schema
    // instead of running migrations. A mismatch is fatal.
    info!("Validating store schema...");
    schema::validate(&pool).await?;

    // Create repositories
    let measurement_repo = MeasurementRepository::new(pool.clone());
    let station_repo = StationRepository::new(pool.clone());

    // Create services
    let climate_service = ClimateService::new(measurement_repo, station_repo);

    // Create API router
    let app_state = AppState { climate_service };
    let app = create_router(app_state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
