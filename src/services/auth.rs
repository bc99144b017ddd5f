//! Authentication service
//!
//! Registers users and verifies credentials. Expected failures are typed:
//! a duplicate username surfaces as its own error so callers can report it
//! precisely, while a failed sign-in never says whether the username or the
//! password was wrong.

use tracing::debug;

use crate::crypto::password::{generate_salt, hash_password, verify_password};
use crate::db::Database;
use crate::error::{TallyError, TallyResult};
use crate::models::User;

/// Service for account registration and sign-in
pub struct AuthService<'a> {
    db: &'a Database,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a new user and return their id
    ///
    /// Generates a fresh salt, hashes the password, and inserts the user row.
    /// The username uniqueness constraint is enforced by the storage engine;
    /// a collision maps to [`TallyError::DuplicateUsername`] and leaves the
    /// existing account untouched.
    pub async fn register(&self, username: &str, password: &str) -> TallyResult<i64> {
        let salt = generate_salt();
        let password_hash = hash_password(password, &salt);

        let result =
            sqlx::query("INSERT INTO users (username, password_hash, salt) VALUES (?, ?, ?)")
                .bind(username)
                .bind(&password_hash)
                .bind(&salt)
                .execute(self.db.pool())
                .await;

        match result {
            Ok(done) => {
                let user_id = done.last_insert_rowid();
                debug!(username, user_id, "registered user");
                Ok(user_id)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(TallyError::DuplicateUsername {
                    username: username.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Verify credentials, returning the user's id on success
    ///
    /// Returns `Ok(None)` for an unknown username or a wrong password; the
    /// two cases are deliberately indistinguishable to the caller. The hash
    /// comparison is constant-time.
    pub async fn login(&self, username: &str, password: &str) -> TallyResult<Option<i64>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, salt FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.db.pool())
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        if verify_password(password, &user.salt, &user.password_hash) {
            debug!(username, user_id = user.id, "sign-in succeeded");
            Ok(Some(user.id))
        } else {
            debug!(username, "sign-in failed");
            Ok(None)
        }
    }
}

/// The identity a command runs under
///
/// Constructed once per process invocation by authenticating; there is no
/// persisted session token, so every invocation signs in afresh.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
}

impl Session {
    /// Authenticate and build a session, or fail with a generic
    /// invalid-credentials error
    pub async fn sign_in(db: &Database, username: &str, password: &str) -> TallyResult<Self> {
        match AuthService::new(db).login(username, password).await? {
            Some(user_id) => Ok(Self {
                user_id,
                username: username.to_string(),
            }),
            None => Err(TallyError::InvalidCredentials),
        }
    }
}
