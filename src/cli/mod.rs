//! CLI module for the Immunisation Dashboard
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API server
//! - `migrate`: apply database migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Immunisation Dashboard - JWT-gated immunisation compliance API
#[derive(Parser)]
#[command(name = "immunidash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Apply database migrations and exit
    Migrate,
}
