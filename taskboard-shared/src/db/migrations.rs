/// Database migration runner
///
/// Runs the SQL migrations under `taskboard-shared/migrations/` using
/// sqlx's embedded migration system. Each migration is a single
/// `{version}_{name}.sql` file applied in order at startup.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::db::migrations::run_migrations;
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// Runs all pending database migrations
///
/// Migrations already recorded in the `_sqlx_migrations` table are
/// skipped; a failed migration is rolled back and returned as an error.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
