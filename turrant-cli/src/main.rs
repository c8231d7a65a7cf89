//! turrant CLI - runs the Turrant marketing site backend
//!
//! Subcommands:
//! - `serve`: static pages, public blog API and admin API on one port

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "turrant",
    author,
    version,
    about = "Turrant marketing site server with a Supabase-backed blog",
    long_about = "Serves the Turrant industry pages, redirects legacy .html URLs, and exposes \
                  the public and admin blog APIs. Settings come from flags, the environment, \
                  or a .env file in the working directory."
)]
struct Cli {
    /// Verbose logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (pages, blog API, admin API)
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so `env = ...` args see .env values
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
