//! Salted password hashing
//!
//! Credentials are stored as a per-user random salt plus a SHA-256 digest of
//! `salt || password`, both hex-encoded. Verification recomputes the digest
//! and compares in constant time to prevent timing side channels.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a salt (32 hex characters once encoded)
const SALT_LEN: usize = 16;

/// Generate a fresh random salt, hex-encoded
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compute the hex-encoded SHA-256 digest of `salt || password`
///
/// Deterministic: the same inputs always produce the same output. Used both
/// when storing credentials and when verifying them.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a password attempt against a stored salt and digest
pub fn verify_password(password: &str, salt: &str, stored_hash: &str) -> bool {
    constant_time_compare(&hash_password(password, salt), stored_hash)
}

/// Compare two strings in constant time
///
/// Examines every byte regardless of where the first mismatch occurs, so the
/// comparison time does not reveal how much of a guess was correct.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_is_32_hex_chars() {
        let salt = generate_salt();
        assert_eq!(salt.len(), 32);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_salts_are_unique() {
        let a = generate_salt();
        let b = generate_salt();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_is_deterministic() {
        let salt = generate_salt();
        assert_eq!(
            hash_password("hunter2", &salt),
            hash_password("hunter2", &salt)
        );
    }

    #[test]
    fn test_distinct_salts_give_distinct_hashes() {
        let a = generate_salt();
        let b = generate_salt();
        assert_ne!(hash_password("hunter2", &a), hash_password("hunter2", &b));
    }

    #[test]
    fn test_verify_roundtrip() {
        let salt = generate_salt();
        let stored = hash_password("hunter2", &salt);

        assert!(verify_password("hunter2", &salt, &stored));
        assert!(!verify_password("hunter3", &salt, &stored));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("hello", "hello"));
        assert!(!constant_time_compare("hello", "world"));
        assert!(!constant_time_compare("hello", "hell"));
        assert!(constant_time_compare("", ""));
    }
}
