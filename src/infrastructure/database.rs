use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{str::FromStr, time::Duration};

/// Open the article store. WAL keeps list reads from blocking behind the
/// read-modify-write save path; the busy timeout covers contention on
/// SQLite's single writer lock.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_pool_applies_wal_and_runs_migrations() {
        let path = std::env::temp_dir().join(format!(
            "aura-core-db-test-{}.db",
            std::process::id()
        ));
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let pool = init_pool(&url).await.expect("open pool");

        let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .expect("read journal_mode");
        assert_eq!(mode.to_lowercase(), "wal");

        run_migrations(&pool).await.expect("run migrations");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&pool)
            .await
            .expect("articles table exists");
        assert_eq!(count, 0);

        pool.close().await;
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }
}
