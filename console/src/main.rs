// console/src/main.rs

// Entry point for the clinic admin console. Parses the command line and
// dispatches to the per-resource handlers in the cli module.

use anyhow::Result;
use clap::Parser;
use log::info;

use clinic_console::cli::cli::{dispatch, Cli};
use clinic_console::config::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    tokio::select! {
        result = dispatch(cli, config) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, shutting down");
            Ok(())
        }
    }
}
