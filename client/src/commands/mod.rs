//! Subcommand implementations for the `pmadmin` binary.
//!
//! Each command returns a process exit code; errors are printed here, at
//! the presentation layer, never swallowed inside the API client.

pub mod auth;
pub mod patients;
pub mod status;
