//! `patients` subcommands: list, create, update, delete

use chrono::Utc;
use client::{ApiClient, ApiService};
use shared::dto::patient::{NewPatient, Patient, PatientUpdate};

use crate::cli::{CreateArgs, PatientCommand, UpdateArgs};
use crate::{exit_codes, output};

pub async fn execute(api: &ApiClient, command: PatientCommand) -> i32 {
    if !api.require_auth() {
        return exit_codes::FAILURE;
    }

    match command {
        PatientCommand::List { search } => list(api, search).await,
        PatientCommand::Create(args) => create(api, args).await,
        PatientCommand::Update(args) => update(api, args).await,
        PatientCommand::Delete { id } => delete(api, &id).await,
    }
}

async fn list(api: &ApiClient, search: Option<String>) -> i32 {
    let patients = match api.get_patients().await {
        Ok(patients) => patients,
        Err(e) => {
            eprintln!("Unable to load patients: {e}");
            return exit_codes::FAILURE;
        }
    };

    let filtered: Vec<Patient> = match &search {
        Some(query) => {
            let query = query.to_lowercase();
            patients
                .into_iter()
                .filter(|p| {
                    p.name.to_lowercase().contains(&query)
                        || p.email.to_lowercase().contains(&query)
                        || p.address.to_lowercase().contains(&query)
                })
                .collect()
        }
        None => patients,
    };

    output::print_patient_table(&filtered);
    exit_codes::SUCCESS
}

async fn create(api: &ApiClient, args: CreateArgs) -> i32 {
    if args.name.trim().is_empty() || args.email.trim().is_empty() {
        eprintln!("Name and email are required.");
        return exit_codes::USAGE;
    }

    let patient = NewPatient {
        name: args.name,
        email: args.email,
        address: args.address,
        date_of_birth: args.date_of_birth,
        registered_date: registration_stamp(),
    };
    match api.create_patient(&patient).await {
        Ok(created) => {
            println!("Registered patient {} ({}).", created.name, created.id);
            exit_codes::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            exit_codes::FAILURE
        }
    }
}

async fn update(api: &ApiClient, args: UpdateArgs) -> i32 {
    let update = PatientUpdate {
        name: args.name,
        email: args.email,
        address: args.address,
        date_of_birth: args.date_of_birth,
    };
    if update == PatientUpdate::default() {
        eprintln!("Nothing to update: pass at least one of --name, --email, --address, --dob.");
        return exit_codes::USAGE;
    }

    match api.update_patient(&args.id, &update).await {
        Ok(updated) => {
            println!("Updated patient {} ({}).", updated.name, updated.id);
            exit_codes::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            exit_codes::FAILURE
        }
    }
}

/// Today's date, `YYYY-MM-DD`, sent as `registeredDate` on create
fn registration_stamp() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

async fn delete(api: &ApiClient, id: &str) -> i32 {
    match api.delete_patient(id).await {
        Ok(()) => {
            println!("Deleted patient {id}.");
            exit_codes::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            exit_codes::FAILURE
        }
    }
}
