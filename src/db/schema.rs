use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::db::{DbError, Measurement, Station};

/// Probe both tables at startup so an incompatible store fails fast.
///
/// The store file is pre-existing and read-only; instead of migrations we run
/// one throwaway SELECT per table with the full expected column list. A
/// missing table or column surfaces as a fatal sqlx error before the server
/// starts accepting requests.
#[instrument(skip(pool))]
pub async fn validate(pool: &SqlitePool) -> Result<(), DbError> {
    debug!("Probing measurement table schema");
    sqlx::query_as::<_, Measurement>(
        "SELECT date, station, prcp, tobs FROM measurement LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    debug!("Probing station table schema");
    sqlx::query_as::<_, Station>("SELECT station, name FROM station LIMIT 1")
        .fetch_optional(pool)
        .await?;

    info!("Store schema validated");
    Ok(())
}
