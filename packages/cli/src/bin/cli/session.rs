//! Login and logout commands

use clap::Args;
use colored::*;

use storekeep_client::{AuthClient, LoginRequest};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email; prompted for when omitted
    #[arg(long)]
    pub username: Option<String>,
}

/// Handle `storekeep login`
pub async fn handle_login(args: LoginArgs, auth: &AuthClient) -> anyhow::Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => inquire::Text::new("Email:").prompt()?,
    };
    let password = inquire::Password::new("Password:")
        .without_confirmation()
        .prompt()?;

    let envelope = auth
        .login(&LoginRequest {
            user_name: username,
            password,
        })
        .await?;

    if envelope.success && auth.session().is_authenticated() {
        println!("✅ {}", "Signed in".green());
    } else {
        println!("❌ {}", envelope.message_or("Login failed").red());
    }

    Ok(())
}

/// Handle `storekeep logout`
pub async fn handle_logout(auth: &AuthClient) -> anyhow::Result<()> {
    auth.logout().await?;
    println!("👋 {}", "Signed out".green());
    Ok(())
}
