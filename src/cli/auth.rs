//! Signup and signin CLI commands

use crate::cli::session::resolve_password;
use crate::db::Database;
use crate::error::{TallyError, TallyResult};
use crate::services::{AuthService, Session};

/// Handle the signup command
pub async fn handle_signup(
    db: &Database,
    username: &str,
    password: Option<String>,
) -> TallyResult<()> {
    let username = username.trim();
    if username.is_empty() {
        return Err(TallyError::Validation("Username must not be empty".into()));
    }

    let password = resolve_password(password)?;
    if password.is_empty() {
        return Err(TallyError::Validation("Password must not be empty".into()));
    }

    AuthService::new(db).register(username, &password).await?;

    println!("Account created. Sign in with 'tally signin {}'.", username);
    Ok(())
}

/// Handle the signin command
///
/// Verifies credentials and reports the identity. Since sessions do not
/// outlive the process, this is a credential check; data commands
/// authenticate again on each invocation.
pub async fn handle_signin(
    db: &Database,
    username: &str,
    password: Option<String>,
) -> TallyResult<()> {
    let password = resolve_password(password)?;
    let session = Session::sign_in(db, username, &password).await?;

    println!("Signed in as {}.", session.username);
    Ok(())
}
