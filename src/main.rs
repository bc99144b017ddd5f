use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally_cli::cli::{
    establish_session, handle_add, handle_alerts, handle_budget_command, handle_show,
    handle_signin, handle_signup, handle_summary, AddArgs, BudgetCommands,
};
use tally_cli::config::{paths::TallyPaths, settings::Settings};
use tally_cli::db::Database;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal expense and budget tracker",
    long_about = "Tally is a terminal-based personal finance tracker. Create an \
                  account, record income and expenses, set monthly category \
                  budgets, and keep an eye on overspending from the command line."
)]
struct Cli {
    #[command(flatten)]
    auth: AuthArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Credentials used by data commands
///
/// Data commands authenticate on every invocation; the password falls back
/// to an interactive prompt when neither the flag nor the environment
/// variable is set.
#[derive(Args)]
struct AuthArgs {
    /// Username to run data commands as
    #[arg(long, global = true, env = "TALLY_USERNAME")]
    username: Option<String>,

    /// Password (prompted for when omitted)
    #[arg(long, global = true, env = "TALLY_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and database
    Init,

    /// Create a new account
    Signup {
        /// Username for the new account
        username: String,
    },

    /// Verify credentials for an existing account
    Signin {
        /// Username to sign in as
        username: String,
    },

    /// Add a transaction
    Add(AddArgs),

    /// Show all transactions for a month
    Show {
        /// Month to list (YYYY-MM)
        period: String,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show income, expense, and net for a month
    Summary {
        /// Month to summarize (YYYY-MM)
        period: String,
    },

    /// Show overspend alerts for a month
    Alerts {
        /// Month to check (YYYY-MM)
        period: String,

        /// Spend/limit ratio at which warnings fire (default from settings)
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();
    let Cli { auth, command } = cli;

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match command {
        Commands::Init => {
            let db = Database::open(&paths).await?;
            db.init_schema().await?;
            settings.save(&paths)?;
            println!("Initialized tally at: {}", paths.base_dir().display());
        }

        Commands::Signup { username } => {
            let db = Database::open(&paths).await?;
            db.init_schema().await?;
            handle_signup(&db, &username, auth.password).await?;
        }

        Commands::Signin { username } => {
            let db = Database::open(&paths).await?;
            db.init_schema().await?;
            handle_signin(&db, &username, auth.password).await?;
        }

        Commands::Add(args) => {
            let db = Database::open(&paths).await?;
            let session = establish_session(&db, auth.username, auth.password).await?;
            handle_add(&db, &session, args).await?;
        }

        Commands::Show { period } => {
            let db = Database::open(&paths).await?;
            let session = establish_session(&db, auth.username, auth.password).await?;
            handle_show(&db, &settings, &session, &period).await?;
        }

        Commands::Budget(cmd) => {
            let db = Database::open(&paths).await?;
            let session = establish_session(&db, auth.username, auth.password).await?;
            handle_budget_command(&db, &settings, &session, cmd).await?;
        }

        Commands::Summary { period } => {
            let db = Database::open(&paths).await?;
            let session = establish_session(&db, auth.username, auth.password).await?;
            handle_summary(&db, &settings, &session, &period).await?;
        }

        Commands::Alerts { period, threshold } => {
            let db = Database::open(&paths).await?;
            let session = establish_session(&db, auth.username, auth.password).await?;
            handle_alerts(&db, &settings, &session, &period, threshold).await?;
        }

        Commands::Config => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Database file:  {}", paths.database_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Alert threshold: {}", settings.alert_threshold);
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// RUST_LOG takes precedence; otherwise only warnings and errors are shown.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
