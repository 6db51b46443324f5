//! SerialPoint CLI: drive the mouse cursor from a serial pointing device.
//!
//! Usage:
//!   serialpoint [run] [OPTIONS]    Follow `GOTO x y` commands from the device
//!   serialpoint ports              List serial ports and the auto-selected one
//!   serialpoint replay <FILE>      Run a captured command log through the smoother
//!   serialpoint config             Show (or write) the effective configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serialpoint_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "serialpoint",
    about = "Move the mouse cursor from normalized coordinates sent over a serial port",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow cursor commands from the device (default)
    Run(RunArgs),

    /// List serial ports and show which one would be used
    Ports {
        /// Print the port list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a text file of device commands against a virtual screen
    Replay {
        /// File with one command per line (`-` for stdin)
        path: PathBuf,

        /// Virtual screen width
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Virtual screen height
        #[arg(long, default_value = "1080")]
        height: u32,

        /// Smoothing factor in (0, 1]
        #[arg(long)]
        alpha: Option<f64>,

        /// Safety margin from screen edges (pixels)
        #[arg(long)]
        margin: Option<u32>,
    },

    /// Show the effective configuration
    Config {
        /// Write the configuration to its standard location
        #[arg(long)]
        write: bool,
    },
}

/// Options for following the device. Unset values come from the config file.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Serial device path (auto-detected when omitted)
    #[arg(short, long)]
    port: Option<String>,

    /// Baud rate
    #[arg(long)]
    baud: Option<u32>,

    /// Smoothing factor in (0, 1]; larger reacts faster
    #[arg(long)]
    alpha: Option<f64>,

    /// Safety margin from screen edges (pixels)
    #[arg(long)]
    margin: Option<u32>,

    /// Log cursor moves instead of moving the real cursor
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = AppConfig::load();
    let mut config = loaded.as_ref().cloned().unwrap_or_default();

    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if cli.json_logs {
        config.logging.json = true;
    }
    serialpoint_common::logging::init_logging(&config.logging)?;

    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "Using default configuration");
    }

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::run(config, args),
        Commands::Ports { json } => commands::ports::run(&config, json),
        Commands::Replay {
            path,
            width,
            height,
            alpha,
            margin,
        } => commands::replay::run(config, path, width, height, alpha, margin),
        Commands::Config { write } => commands::config::run(&config, write),
    }
}
