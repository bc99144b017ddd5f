//! User model

use serde::{Deserialize, Serialize};

/// A stored user row
///
/// Created on registration and immutable thereafter. Deleting a user cascades
/// to their transactions and budgets at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique identifier
    pub id: i64,

    /// Unique username
    pub username: String,

    /// Hex-encoded salted digest of the password
    pub password_hash: String,

    /// Hex-encoded per-user random salt
    pub salt: String,
}
