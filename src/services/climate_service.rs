use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use crate::db::{
    DbError, MeasurementRepository, Station, StationRepository, TemperatureSummary,
};

#[derive(Debug, thiserror::Error)]
pub enum ClimateError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("Stored date {0:?} is not a valid YYYY-MM-DD date")]
    InvalidStoredDate(String),
}

#[derive(Clone)]
pub struct ClimateService {
    measurement_repo: MeasurementRepository,
    station_repo: StationRepository,
}

impl ClimateService {
    pub fn new(measurement_repo: MeasurementRepository, station_repo: StationRepository) -> Self {
        Self {
            measurement_repo,
            station_repo,
        }
    }

    /// Precipitation readings in the last-year window, as a date -> prcp map.
    ///
    /// Rows arrive in storage order; when two stations report on the same
    /// date the later row overwrites the earlier one. The map contract makes
    /// this lossy collapse part of the endpoint's documented behavior.
    pub async fn precipitation_last_year(
        &self,
    ) -> Result<HashMap<String, Option<f64>>, ClimateError> {
        let Some(latest) = self.measurement_repo.find_latest_date().await? else {
            return Ok(HashMap::new());
        };

        let cutoff = Self::one_year_before(&latest)?;
        let readings = self
            .measurement_repo
            .find_precipitation_since(&cutoff)
            .await?;

        Ok(readings.into_iter().map(|r| (r.date, r.prcp)).collect())
    }

    /// All stations, unfiltered
    pub async fn list_stations(&self) -> Result<Vec<Station>, ClimateError> {
        Ok(self.station_repo.find_all().await?)
    }

    /// Temperature observations for the most-active station in the last-year
    /// window, dates discarded, query order preserved
    pub async fn tobs_last_year(&self) -> Result<Vec<f64>, ClimateError> {
        let Some(station) = self.measurement_repo.find_most_active_station().await? else {
            return Ok(Vec::new());
        };

        let Some(latest) = self.measurement_repo.find_latest_date().await? else {
            return Ok(Vec::new());
        };

        let cutoff = Self::one_year_before(&latest)?;
        Ok(self
            .measurement_repo
            .find_tobs_since(&station, &cutoff)
            .await?)
    }

    /// Min/avg/max temperature from `start` onward.
    ///
    /// `start` is echoed back verbatim and never validated; a malformed value
    /// compares as TEXT and typically matches nothing, yielding null fields.
    pub async fn temperature_summary_from(
        &self,
        start: &str,
    ) -> Result<TemperatureSummary, ClimateError> {
        let stats = self.measurement_repo.temperature_stats_from(start).await?;

        Ok(TemperatureSummary {
            start_date: start.to_string(),
            end_date: None,
            tmin: stats.tmin,
            tavg: stats.tavg,
            tmax: stats.tmax,
        })
    }

    /// Min/avg/max temperature over the inclusive `start..=end` range
    pub async fn temperature_summary_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureSummary, ClimateError> {
        let stats = self
            .measurement_repo
            .temperature_stats_between(start, end)
            .await?;

        Ok(TemperatureSummary {
            start_date: start.to_string(),
            end_date: Some(end.to_string()),
            tmin: stats.tmin,
            tavg: stats.tavg,
            tmax: stats.tmax,
        })
    }

    /// Cutoff for the "last year" window: the given date minus 365 days
    fn one_year_before(date: &str) -> Result<String, ClimateError> {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ClimateError::InvalidStoredDate(date.to_string()))?;

        let cutoff = parsed - Duration::days(365);
        Ok(cutoff.format("%Y-%m-%d").to_string())
    }
}
