//! `login` and `logout` commands

use client::{ApiClient, ApiService};

use crate::cli::LoginArgs;
use crate::exit_codes;

pub async fn login(api: &ApiClient, args: LoginArgs) -> i32 {
    if args.email.trim().is_empty() || args.password.is_empty() {
        eprintln!("Please enter your email and password.");
        return exit_codes::USAGE;
    }

    match api.login(args.email.trim(), &args.password).await {
        Ok(_) => {
            println!("Authentication successful. Signed in as {}.", args.email.trim());
            exit_codes::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            exit_codes::FAILURE
        }
    }
}

pub fn logout(api: &ApiClient) -> i32 {
    api.logout();
    println!("Signed out.");
    exit_codes::SUCCESS
}
