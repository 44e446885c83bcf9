use sea_orm::DatabaseConnection;

use super::wager_config::WagerConfig;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Wagering limits
    wager: WagerConfig,
}

impl AppState {
    /// Create a new AppState with the given database connection and wager config
    pub fn new(db: DatabaseConnection, wager: WagerConfig) -> Self {
        Self {
            db: Some(db),
            wager,
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn new_without_db(wager: WagerConfig) -> Self {
        Self { db: None, wager }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn wager(&self) -> &WagerConfig {
        &self.wager
    }
}
