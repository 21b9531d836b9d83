//! ts-sim - tourist safety simulator
//!
//! Drives simulated tourists against the prediction service and reads back
//! alerts, live statuses and logs. Output is JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Simulate two tourists, one on an anomalous path
//! ts-sim simulate --select "T1|normal" --select "T2|anomaly" --pretty
//!
//! # Raise an SOS at a fixed position
//! ts-sim sos T1 --lat 28.61 --lon 77.20
//!
//! # Regional heatmap against a local relay
//! ts-sim --api-url http://127.0.0.1:5001 heatmap --regional
//! ```

use ts_config::{Config, logger};
use ts_sim::cli::Cli;
use ts_sim::commands::{self, CommandContext};
use ts_sim::{ApiClient, SessionStore, SimResult};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match setup(cli.api_url) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match commands::execute(cli.command, &ctx).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Config, logging and the API client. Explicit `--api-url` beats config.
fn setup(api_url: Option<String>) -> SimResult<CommandContext> {
    let mut config = Config::load()?;
    if let Some(url) = api_url {
        config.simulation.api_url = url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    debug!("Using prediction service at {}", config.simulation.api_url);

    let client = ApiClient::new(
        &config.simulation.api_url,
        config.simulation.request_timeout(),
    )?;

    Ok(CommandContext {
        client: Arc::new(client),
        session: SessionStore::new(Config::session_path()?),
        simulation: config.simulation,
    })
}
