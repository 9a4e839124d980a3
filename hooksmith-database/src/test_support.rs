use sqlx::sqlite::SqlitePoolOptions;

use crate::database::{Database, MIGRATOR};

/// Build a migrated in-memory database for tests.
///
/// A single connection keeps every query on the same in-memory SQLite
/// instance for the lifetime of the test.
pub(crate) async fn test_db() -> Database {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    MIGRATOR.run(&pool).await.expect("migrations apply");

    Database::new(pool)
}
