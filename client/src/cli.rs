use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pmadmin",
    version,
    about = "Administrative client for the patient management platform",
    long_about = "Sign in against the API gateway, manage patient records, and\n\
                  check backend service health. The session (token + user) is\n\
                  persisted in a local file between invocations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the API gateway
    #[arg(long, env = "PM_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Path of the session file
    #[arg(
        long,
        env = "PM_SESSION_FILE",
        default_value = ".pmadmin-session.json",
        global = true
    )]
    pub session_file: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and persist the session
    Login(LoginArgs),
    /// Clear the persisted session
    Logout,
    /// Show the dashboard: patient stats and a service health sweep
    Status,
    /// Manage patient records
    Patients {
        #[command(subcommand)]
        command: PatientCommand,
    },
}

#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

#[derive(Subcommand)]
pub enum PatientCommand {
    /// List patient records
    List {
        /// Case-insensitive filter on name, email, or address
        #[arg(long)]
        search: Option<String>,
    },
    /// Register a new patient
    Create(CreateArgs),
    /// Update fields of an existing patient
    Update(UpdateArgs),
    /// Delete a patient record
    Delete {
        /// Patient id
        id: String,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    /// Full name
    #[arg(long)]
    pub name: String,
    /// Contact email
    #[arg(long)]
    pub email: String,
    /// Postal address
    #[arg(long, default_value = "")]
    pub address: String,
    /// Date of birth, YYYY-MM-DD
    #[arg(long = "dob")]
    pub date_of_birth: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Patient id
    pub id: String,
    /// New full name
    #[arg(long)]
    pub name: Option<String>,
    /// New contact email
    #[arg(long)]
    pub email: Option<String>,
    /// New postal address
    #[arg(long)]
    pub address: Option<String>,
    /// New date of birth, YYYY-MM-DD
    #[arg(long = "dob")]
    pub date_of_birth: Option<String>,
}
