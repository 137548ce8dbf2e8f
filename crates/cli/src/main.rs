//! Maru CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! maru migrate
//!
//! # Promote an account to administrator
//! maru admin grant -e jiyoon@maruliving.kr
//!
//! # Seed a demo catalog
//! maru seed
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "maru")]
#[command(author, version, about = "Maru Living CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage administrator accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the database with a demo catalog
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Promote an existing account to administrator
    Grant {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
    /// Demote an administrator back to a regular account
    Revoke {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), commands::CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maru_cli=info,maru_server=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Admin { action } => match action {
            AdminAction::Grant { email } => {
                commands::admin::set_role(&email, maru_core::UserRole::Admin).await
            }
            AdminAction::Revoke { email } => {
                commands::admin::set_role(&email, maru_core::UserRole::User).await
            }
        },
        Commands::Seed => commands::seed::run().await,
    }
}
