

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect and migrate, or `None` when no database is available.
pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let cfg = match crate::db::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("skip: invalid database config: {}", e);
            return None;
        }
    };
    let db = match crate::db::connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    let migrated = MIGRATED
        .get_or_try_init(|| async { migration::Migrator::up(&db, None).await })
        .await;
    if let Err(e) = migrated {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}
