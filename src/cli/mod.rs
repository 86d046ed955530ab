//! CLI module for the SME gateway
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server
//! - `seed`: load the bundled sample documents

pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// SME Gateway - virtual subject-matter experts for banking domains
#[derive(Parser)]
#[command(name = "sme-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Load the bundled sample documents into the knowledge base
    Seed,
}
