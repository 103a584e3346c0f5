use sqlx::SqlitePool;
use tracing::{debug, instrument};

use crate::db::{DbError, PrecipitationReading, TemperatureStats};

#[derive(Clone)]
pub struct MeasurementRepository {
    pool: SqlitePool,
}

impl MeasurementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Most recent measurement date in the store, as the raw `YYYY-MM-DD` string
    #[instrument(skip(self))]
    pub async fn find_latest_date(&self) -> Result<Option<String>, DbError> {
        debug!("Querying for most recent measurement date");

        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        debug!("Most recent measurement date: {:?}", latest);
        Ok(latest)
    }

    /// All (date, prcp) pairs on or after the cutoff date, in storage order
    #[instrument(skip(self))]
    pub async fn find_precipitation_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<PrecipitationReading>, DbError> {
        debug!("Querying precipitation readings since {}", cutoff);

        let readings = sqlx::query_as::<_, PrecipitationReading>(
            r#"
            SELECT date, prcp
            FROM measurement
            WHERE date >= ?
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} precipitation readings", readings.len());
        Ok(readings)
    }

    /// Station with the highest measurement count.
    /// Count ties break on station id so the result is deterministic.
    #[instrument(skip(self))]
    pub async fn find_most_active_station(&self) -> Result<Option<String>, DbError> {
        debug!("Querying for most active station");

        let station: Option<String> = sqlx::query_scalar(
            r#"
            SELECT station
            FROM measurement
            GROUP BY station
            ORDER BY COUNT(station) DESC, station
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        debug!("Most active station: {:?}", station);
        Ok(station)
    }

    /// Temperature observations for one station on or after the cutoff date
    #[instrument(skip(self), fields(station = %station))]
    pub async fn find_tobs_since(
        &self,
        station: &str,
        cutoff: &str,
    ) -> Result<Vec<f64>, DbError> {
        debug!("Querying temperature observations since {}", cutoff);

        let temperatures: Vec<f64> = sqlx::query_scalar(
            r#"
            SELECT tobs
            FROM measurement
            WHERE station = ? AND date >= ?
            "#,
        )
        .bind(station)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} temperature observations", temperatures.len());
        Ok(temperatures)
    }

    /// Min/avg/max temperature over all rows with `date >= start`.
    ///
    /// `start` is compared as TEXT, exactly as stored; it is not validated as
    /// a calendar date. Zero matching rows yield NULL aggregates.
    #[instrument(skip(self))]
    pub async fn temperature_stats_from(&self, start: &str) -> Result<TemperatureStats, DbError> {
        debug!("Querying temperature stats from {}", start);

        let stats = sqlx::query_as::<_, TemperatureStats>(
            r#"
            SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
            FROM measurement
            WHERE date >= ?
            "#,
        )
        .bind(start)
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }

    /// Min/avg/max temperature over all rows with `start <= date <= end`
    #[instrument(skip(self))]
    pub async fn temperature_stats_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureStats, DbError> {
        debug!("Querying temperature stats from {} to {}", start, end);

        let stats = sqlx::query_as::<_, TemperatureStats>(
            r#"
            SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
            FROM measurement
            WHERE date >= ? AND date <= ?
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}
