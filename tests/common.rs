// Shared test fixtures: a tempfile-backed SQLite store seeded per test.
// Each test gets its own store file, so tests stay independent and parallel.

#![allow(dead_code)]

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tempfile::NamedTempFile;

use climate_api::api::{create_router, AppState};
use climate_api::db::{MeasurementRepository, StationRepository};
use climate_api::services::ClimateService;

/// Create an empty store with the expected two-table schema.
///
/// The returned `NamedTempFile` owns the store file; keep it alive for the
/// duration of the test.
pub async fn create_store() -> (SqlitePool, NamedTempFile) {
    let file = NamedTempFile::new().expect("Failed to create temp store file");

    let options = SqliteConnectOptions::new()
        .filename(file.path())
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to test store");

    sqlx::query(
        r#"
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create measurement table");

    sqlx::query(
        r#"
        CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create station table");

    (pool, file)
}

pub async fn insert_measurement(
    pool: &SqlitePool,
    date: &str,
    station: &str,
    prcp: Option<f64>,
    tobs: f64,
) {
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(pool)
        .await
        .expect("Failed to insert test measurement");
}

pub async fn insert_station(pool: &SqlitePool, station: &str, name: &str) {
    sqlx::query(
        "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, 21.3, -157.8, 3.0)",
    )
    .bind(station)
    .bind(name)
    .execute(pool)
    .await
    .expect("Failed to insert test station");
}

/// Build the real router over a test store
pub fn build_app(pool: SqlitePool) -> axum::Router {
    let measurement_repo = MeasurementRepository::new(pool.clone());
    let station_repo = StationRepository::new(pool);
    let climate_service = ClimateService::new(measurement_repo, station_repo);

    create_router(AppState { climate_service })
}
