//! Command-line arguments for the `draxen` server binary.

use std::path::PathBuf;

use clap::Parser;

/// Draxen - Moroccan-Darija chat assistant API server.
#[derive(Parser, Debug)]
#[command(name = "draxen", version, about, long_about = None)]
pub struct Cli {
    /// Address to bind (overrides the config file)
    #[arg(long, env = "DRAXEN_HOST")]
    pub host: Option<String>,

    /// Port to listen on; the next free port is used if it is taken
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Path to the TOML config file
    #[arg(short, long, env = "DRAXEN_CONFIG", default_value = "draxen.toml")]
    pub config: PathBuf,

    /// Export spans through OpenTelemetry (stdout exporter)
    #[arg(long)]
    pub otel: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
