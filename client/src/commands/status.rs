//! `status` command: the dashboard as a console view.
//!
//! Prints the signed-in user, patient stats, the most recent
//! registrations, and a parallel health sweep of the backend services.

use chrono::{Datelike, Utc};
use client::services::api::{default_targets, health};
use client::{ApiClient, ApiService};
use shared::dto::patient::Patient;

use crate::{exit_codes, output};

/// Number of recent patients shown on the dashboard
const RECENT_COUNT: usize = 5;

pub async fn execute(api: &ApiClient) -> i32 {
    if !api.require_auth() {
        return exit_codes::FAILURE;
    }

    match api.session().user() {
        Ok(Some(user)) => println!("Signed in as {}", user.email),
        Ok(None) => println!("Signed in"),
        Err(e) => {
            eprintln!("Persisted session is corrupt: {e}");
            return exit_codes::FAILURE;
        }
    }

    let mut code = exit_codes::SUCCESS;
    match api.get_patients().await {
        Ok(patients) => print_stats(&patients),
        Err(e) => {
            // The health sweep below still runs; a dead patient service
            // should show up as offline rather than abort the dashboard.
            eprintln!("Unable to load data: {e}");
            code = exit_codes::FAILURE;
        }
    }

    let targets = default_targets(api.base_url());
    let results = health::check_all(api, &targets).await;
    output::print_health_results(&results);

    code
}

fn print_stats(patients: &[Patient]) {
    let now = Utc::now();
    let this_month = patients
        .iter()
        .filter_map(Patient::birth_date)
        .filter(|d| d.month() == now.month() && d.year() == now.year())
        .count();

    println!("Total patients:  {}", patients.len());
    println!("Active records:  {}", patients.len());
    println!("This month:      {this_month}");

    let recent: Vec<&Patient> = patients.iter().rev().take(RECENT_COUNT).collect();
    if !recent.is_empty() {
        println!("Recent patients:");
        for patient in recent {
            println!(
                "  {:<22} {:<28} {}",
                patient.name, patient.email, patient.date_of_birth
            );
        }
    }
}
