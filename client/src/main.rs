use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod exit_codes;
mod output;

use cli::{Cli, Command};
use client::session::FileStorage;
use client::{ApiClient, ClientConfig, Navigator, SessionStore};

/// Navigation adapter for a console front end: "redirecting to the login
/// page" becomes printing sign-in instructions.
struct CliNavigator;

impl Navigator for CliNavigator {
    fn redirect_to_login(&self) {
        eprintln!("You are signed out. Run `pmadmin login <email> <password>` to sign in.");
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "client=warn",
        1 => "client=info",
        _ => "client=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.override_base_url(base_url);
    }

    let session = SessionStore::new(Arc::new(FileStorage::open(&cli.session_file)));
    let api = ApiClient::new(config, session).with_navigator(Arc::new(CliNavigator));

    let exit_code = match cli.command {
        Command::Login(args) => commands::auth::login(&api, args).await,
        Command::Logout => commands::auth::logout(&api),
        Command::Status => commands::status::execute(&api).await,
        Command::Patients { command } => commands::patients::execute(&api, command).await,
    };

    std::process::exit(exit_code);
}
