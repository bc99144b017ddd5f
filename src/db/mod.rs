//! SQLite storage layer
//!
//! Owns the connection pool and the schema. Integrity rules live in the
//! schema itself: unique usernames, an enum check on transaction kind,
//! non-negative amount/limit checks, a composite uniqueness constraint on
//! budgets, and foreign keys that cascade deletes from a user to their rows.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::debug;

use crate::config::paths::TallyPaths;
use crate::error::TallyResult;

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        salt TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        kind TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
        date TEXT NOT NULL,
        category TEXT NOT NULL,
        amount_cents INTEGER NOT NULL CHECK (amount_cents >= 0),
        note TEXT,
        FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS budgets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        period TEXT NOT NULL,
        category TEXT NOT NULL,
        limit_cents INTEGER NOT NULL CHECK (limit_cents >= 0),
        UNIQUE (user_id, period, category),
        FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
    )
    "#,
];

/// Handle to the SQLite database
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if necessary) the database file under the data directory
    ///
    /// Foreign-key enforcement is switched on for every connection in the
    /// pool; SQLite leaves it off by default.
    pub async fn open(paths: &TallyPaths) -> TallyResult<Self> {
        paths.ensure_directories()?;

        let options = SqliteConnectOptions::new()
            .filename(paths.database_file())
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        debug!(path = %paths.database_file().display(), "opened database");

        Ok(Self { pool })
    }

    /// Create the tables if they do not exist yet
    ///
    /// Idempotent; safe to run on every startup.
    pub async fn init_schema(&self) -> TallyResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("schema ensured");
        Ok(())
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_db() -> (TempDir, Database) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let db = Database::open(&paths).await.unwrap();
        db.init_schema().await.unwrap();
        (temp_dir, db)
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let (_temp_dir, db) = create_test_db().await;
        db.init_schema().await.unwrap();
        db.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_kind_check_constraint() {
        let (_temp_dir, db) = create_test_db().await;

        sqlx::query("INSERT INTO users (username, password_hash, salt) VALUES ('a', 'h', 's')")
            .execute(db.pool())
            .await
            .unwrap();

        let result = sqlx::query(
            "INSERT INTO transactions (user_id, kind, date, category, amount_cents, note) \
             VALUES (1, 'transfer', '2024-05-01', 'Food', 100, NULL)",
        )
        .execute(db.pool())
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_negative_amount_rejected() {
        let (_temp_dir, db) = create_test_db().await;

        sqlx::query("INSERT INTO users (username, password_hash, salt) VALUES ('a', 'h', 's')")
            .execute(db.pool())
            .await
            .unwrap();

        let result = sqlx::query(
            "INSERT INTO transactions (user_id, kind, date, category, amount_cents, note) \
             VALUES (1, 'expense', '2024-05-01', 'Food', -100, NULL)",
        )
        .execute(db.pool())
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_orphan_rows_rejected() {
        let (_temp_dir, db) = create_test_db().await;

        let result = sqlx::query(
            "INSERT INTO transactions (user_id, kind, date, category, amount_cents, note) \
             VALUES (99, 'expense', '2024-05-01', 'Food', 100, NULL)",
        )
        .execute(db.pool())
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_deleting_user_cascades() {
        let (_temp_dir, db) = create_test_db().await;

        sqlx::query("INSERT INTO users (username, password_hash, salt) VALUES ('a', 'h', 's')")
            .execute(db.pool())
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO transactions (user_id, kind, date, category, amount_cents, note) \
             VALUES (1, 'expense', '2024-05-01', 'Food', 100, NULL)",
        )
        .execute(db.pool())
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO budgets (user_id, period, category, limit_cents) \
             VALUES (1, '2024-05', 'Food', 10000)",
        )
        .execute(db.pool())
        .await
        .unwrap();

        sqlx::query("DELETE FROM users WHERE id = 1")
            .execute(db.pool())
            .await
            .unwrap();

        let transactions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(db.pool())
            .await
            .unwrap();
        let budgets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM budgets")
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert_eq!(transactions, 0);
        assert_eq!(budgets, 0);
    }
}
