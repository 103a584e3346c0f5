use serde::Serialize;
use sqlx::FromRow;

// Database entity models (statically declared; the store file is read-only)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measurement {
    pub date: String,
    pub station: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    pub station: String,
    pub name: String,
}

/// One (date, prcp) row from the precipitation window query
#[derive(Debug, Clone, FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Aggregate row from the min/avg/max temperature queries.
/// All fields are NULL when no rows match the filter.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TemperatureStats {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

// API response DTOs (to avoid circular dependency between services and api modules)

/// Temperature summary for the start / start-end endpoints.
///
/// Field names follow the documented wire format. `end_date` is omitted (not
/// null) on the start-only endpoint; the aggregate fields serialize as null
/// when no rows matched.
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "End Date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}
