// CLI module for operations that run alongside or instead of the server

pub mod migrate;
pub mod token;

use clap::{Parser, Subcommand};

use crate::types::internal::Campus;

/// Academy admin backend
#[derive(Parser)]
#[command(name = "academy-backend")]
#[command(about = "Youth academy administration backend", long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run migrations and start the HTTP server
    Serve,

    /// Run pending database migrations and exit
    Migrate,

    /// Mint a staff token signed with JWT_SECRET for local development
    Token {
        /// Staff identifier stored in the `sub` claim
        #[arg(long)]
        subject: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Home campus (oahu or hilo)
        #[arg(long, value_parser = parse_campus)]
        campus: Option<Campus>,

        /// Lifetime in minutes
        #[arg(long, default_value_t = 60)]
        ttl_minutes: i64,
    },
}

fn parse_campus(value: &str) -> Result<Campus, String> {
    value.parse::<Campus>().map_err(|e| e.to_string())
}
