//! Storekeep command-line entry point

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use storekeep_client::{AuthClient, Gateway, SessionStore};
use storekeep_tui::App;

mod cli;

use cli::entities::{self, EntityCommands};
use cli::session::{self, LoginArgs};

#[derive(Debug, Parser)]
#[command(name = "storekeep", about = "Admin console for the Storekeep backend", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Launch the interactive console (default)
    Console,
    /// Sign in and store the session token
    Login(LoginArgs),
    /// Sign out and clear the stored session
    Logout,
    /// Manage users
    Users {
        #[command(subcommand)]
        command: EntityCommands,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        command: EntityCommands,
    },
    /// Manage product categories
    Categories {
        #[command(subcommand)]
        command: EntityCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let session = SessionStore::new(&storekeep_config::config_dir());
    session.load().await?;

    let base_url = storekeep_config::api_url();
    let timeout = Duration::from_secs(storekeep_config::http_timeout_secs());
    tracing::debug!(%base_url, ?timeout, "storekeep starting");

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => {
            let app = App::new(
                &base_url,
                timeout,
                session,
                storekeep_config::page_size(),
                Duration::from_millis(storekeep_config::toast_duration_ms()),
            )?;
            storekeep_tui::launch(app).await
        }
        Commands::Login(args) => {
            let auth = AuthClient::new(&base_url, timeout, session)?;
            session::handle_login(args, &auth).await
        }
        Commands::Logout => {
            let auth = AuthClient::new(&base_url, timeout, session)?;
            session::handle_logout(&auth).await
        }
        Commands::Users { command } => {
            let gateway = Gateway::new(&base_url, timeout, session)?;
            entities::handle_users(command, gateway).await
        }
        Commands::Products { command } => {
            let gateway = Gateway::new(&base_url, timeout, session)?;
            entities::handle_products(command, gateway).await
        }
        Commands::Categories { command } => {
            let gateway = Gateway::new(&base_url, timeout, session)?;
            entities::handle_categories(command, gateway).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
