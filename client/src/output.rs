//! Plain-text rendering for the `pmadmin` binary

use shared::dto::health::ServiceHealth;
use shared::dto::patient::Patient;

/// Render patients as an aligned table
pub fn print_patient_table(patients: &[Patient]) {
    if patients.is_empty() {
        println!("No patients yet. Register a new patient to get started.");
        return;
    }

    println!(
        "{:<26} {:<22} {:<28} {:<12}",
        "ID", "NAME", "EMAIL", "DOB"
    );
    for patient in patients {
        println!(
            "{:<26} {:<22} {:<28} {:<12}",
            patient.id, patient.name, patient.email, patient.date_of_birth
        );
    }
    println!("{} patient(s)", patients.len());
}

/// Render one sweep of health probe results
pub fn print_health_results(results: &[ServiceHealth]) {
    println!("System status:");
    for result in results {
        println!("  {:<18} {}", result.name, result.status);
    }
}
