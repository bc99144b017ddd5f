//! Per-invocation session establishment
//!
//! There is no persisted session token: every data command authenticates
//! afresh, building a [`Session`] that is handed to the command handler.
//! Credentials come from flags or environment variables, falling back to an
//! interactive prompt for the password.

use zeroize::Zeroizing;

use crate::db::Database;
use crate::error::{TallyError, TallyResult};
use crate::services::Session;

/// Resolve a password from the command line or an interactive prompt
///
/// The buffer is zeroed when dropped.
pub fn resolve_password(provided: Option<String>) -> TallyResult<Zeroizing<String>> {
    match provided {
        Some(password) => Ok(Zeroizing::new(password)),
        None => rpassword::prompt_password("Password: ")
            .map(Zeroizing::new)
            .map_err(|e| TallyError::Io(format!("Failed to read password: {}", e))),
    }
}

/// Authenticate and build the session a data command runs under
pub async fn establish_session(
    db: &Database,
    username: Option<String>,
    password: Option<String>,
) -> TallyResult<Session> {
    let username = username.ok_or_else(|| {
        TallyError::Validation(
            "A username is required: pass --username or set TALLY_USERNAME".into(),
        )
    })?;
    let password = resolve_password(password)?;

    Session::sign_in(db, &username, &password).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_password_prefers_provided() {
        let password = resolve_password(Some("hunter2".to_string())).unwrap();
        assert_eq!(password.as_str(), "hunter2");
    }
}
