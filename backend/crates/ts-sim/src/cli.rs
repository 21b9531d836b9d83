use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ts-sim")]
#[command(about = "Tourist safety simulator, monitor and live dashboard")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Prediction service URL (defaults to simulation.api_url from config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
