//! Database bootstrap: connect and migrate in one entrypoint.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile and apply migrations.
///
/// The test profile pins the pool to a single connection so that an
/// in-memory sqlite database is shared across the whole test.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile.clone())?;

    let mut opts = ConnectOptions::new(url);
    match profile {
        DbProfile::Prod => {
            opts.max_connections(10)
                .connect_timeout(Duration::from_secs(5))
                .sqlx_logging(false);
        }
        DbProfile::Test => {
            opts.max_connections(1).sqlx_logging(false);
        }
    }

    let conn = Database::connect(opts)
        .await
        .map_err(|e| AppError::db(format!("failed to connect: {e}")))?;

    migration::migrate_up(&conn).await?;
    info!("database connected and migrated");

    Ok(conn)
}
