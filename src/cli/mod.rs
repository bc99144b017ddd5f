//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Input validation (kinds,
//! dates, amounts, periods) happens here, before any service call.

pub mod auth;
pub mod budget;
pub mod session;
pub mod transaction;

pub use auth::{handle_signin, handle_signup};
pub use budget::{handle_alerts, handle_budget_command, handle_summary, BudgetCommands};
pub use session::establish_session;
pub use transaction::{handle_add, handle_show, AddArgs};
