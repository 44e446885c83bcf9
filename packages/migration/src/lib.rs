pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::DatabaseConnection;

mod m20260825_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260825_000001_init::Migration)]
    }
}

/// Apply all pending migrations, logging the applied/defined counts.
///
/// Used by both the backend bootstrap and tests.
pub async fn migrate_up(db: &DatabaseConnection) -> Result<(), DbErr> {
    let defined = Migrator::migrations().len();
    tracing::info!("running migrations: {defined} defined");

    match Migrator::up(db, None).await {
        Ok(()) => {
            tracing::info!("migrations applied");
            Ok(())
        }
        Err(e) => {
            tracing::error!("migration failed: {e}");
            Err(e)
        }
    }
}
