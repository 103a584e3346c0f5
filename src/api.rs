use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::db::{Station, TemperatureSummary};
use crate::services::ClimateService;

#[derive(Clone)]
pub struct AppState {
    pub climate_service: ClimateService,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/precipitation", get(get_precipitation))
        .route("/stations", get(get_stations))
        .route("/tobs", get(get_tobs))
        .route("/{start}", get(get_summary_from))
        .route("/{start}/{end}", get(get_summary_between))
        .with_state(state);

    Router::new()
        .route("/", get(index))
        .nest("/api/v1.0", api_routes)
}

async fn index() -> Html<&'static str> {
    Html(
        "<h1>Welcome to the Climate API!</h1>\
         <p>Available Routes:</p>\
         <ul>\
         <li><a href='/api/v1.0/precipitation'>Precipitation Data</a></li>\
         <li><a href='/api/v1.0/stations'>Station Data</a></li>\
         <li><a href='/api/v1.0/tobs'>Temperature Observations</a></li>\
         <li><a href='/api/v1.0/start'>Temperature Summary (start date)</a></li>\
         <li><a href='/api/v1.0/start/end'>Temperature Summary (start-end date range)</a></li>\
         </ul>",
    )
}

#[instrument(skip(_state))]
async fn health(State(_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state))]
async fn get_precipitation(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Option<f64>>>, StatusCode> {
    debug!("Fetching precipitation for the last-year window");
    let precipitation = state
        .climate_service
        .precipitation_last_year()
        .await
        .map_err(|e| {
            error!("Failed to fetch precipitation data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    info!("Retrieved precipitation for {} dates", precipitation.len());

    Ok(Json(precipitation))
}

#[instrument(skip(state))]
async fn get_stations(State(state): State<AppState>) -> Result<Json<Vec<Station>>, StatusCode> {
    debug!("Fetching station listing");
    let stations = state.climate_service.list_stations().await.map_err(|e| {
        error!("Failed to fetch stations: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    info!("Retrieved {} stations", stations.len());

    Ok(Json(stations))
}

#[instrument(skip(state))]
async fn get_tobs(State(state): State<AppState>) -> Result<Json<Vec<f64>>, StatusCode> {
    debug!("Fetching temperature observations for the most-active station");
    let temperatures = state.climate_service.tobs_last_year().await.map_err(|e| {
        error!("Failed to fetch temperature observations: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    info!("Retrieved {} temperature observations", temperatures.len());

    Ok(Json(temperatures))
}

#[instrument(skip(state), fields(start = %start))]
async fn get_summary_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>, StatusCode> {
    debug!("Fetching temperature summary from {}", start);
    let summary = state
        .climate_service
        .temperature_summary_from(&start)
        .await
        .map_err(|e| {
            error!("Failed to fetch temperature summary from {}: {}", start, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    info!("Retrieved temperature summary from {}", start);

    Ok(Json(summary))
}

#[instrument(skip(state), fields(start = %start, end = %end))]
async fn get_summary_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>, StatusCode> {
    debug!("Fetching temperature summary from {} to {}", start, end);
    let summary = state
        .climate_service
        .temperature_summary_between(&start, &end)
        .await
        .map_err(|e| {
            error!(
                "Failed to fetch temperature summary from {} to {}: {}",
                start, end, e
            );
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    info!("Retrieved temperature summary from {} to {}", start, end);

    Ok(Json(summary))
}
