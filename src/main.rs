//! Stochastic presets - main entry point
//!
//! This binary provides five subcommands:
//! - show: Resolve the parameters for one symbol/timeframe
//! - list: Print every record in the table
//! - validate: Check every record against its domain
//! - conflicts: List keys defined in both the canonical and legacy schema
//! - export: Write the table as JSON or CSV

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "stochastic-presets")]
#[command(about = "Default Stochastic indicator and strategy parameters per symbol and timeframe", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override file applied on top of the built-in presets
    /// (defaults to $PRESETS_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the parameters for a symbol and timeframe
    Show {
        /// Trading pair symbol. E.g., "EURUSD"
        #[arg(short, long)]
        symbol: String,

        /// Timeframe. E.g., "M15", "PERIOD_H4", "4h"
        #[arg(short, long)]
        timeframe: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every record
    List {
        /// Include records of the older sets schema
        #[arg(long)]
        legacy: bool,
    },

    /// Validate every record
    Validate,

    /// List keys defined in both the canonical and legacy schema
    Conflicts,

    /// Export the table
    Export {
        /// Output format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Export the older sets schema instead (JSON only)
        #[arg(long)]
        legacy: bool,
    },
}

fn setup_logging(verbose: bool, command_name: &str) -> Result<()> {
    // Create logs directory
    std::fs::create_dir_all("logs")?;

    // Create log file with naming pattern: {command}_{date}.log
    let log_filename = format!(
        "{}_{}.log",
        command_name,
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    );
    let log_path = PathBuf::from("logs").join(&log_filename);

    let level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = tracing_appender::rolling::never("logs", &log_filename);

    // Console stays quiet unless asked; results go to stdout. `None` is a
    // no-op layer, so both cases share one subscriber type.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(verbose.then_some(console_layer))
        .with(file_layer)
        .init();

    info!("Logging initialized");
    info!("Log file: {}", log_path.display());

    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let command_name = match &cli.command {
        Commands::Show { .. } => "show",
        Commands::List { .. } => "list",
        Commands::Validate => "validate",
        Commands::Conflicts => "conflicts",
        Commands::Export { .. } => "export",
    };

    setup_logging(cli.verbose, command_name)?;

    match cli.command {
        Commands::Show {
            symbol,
            timeframe,
            json,
        } => commands::show::run(cli.config, symbol, timeframe, json),

        Commands::List { legacy } => commands::list::run(cli.config, legacy),

        Commands::Validate => commands::validate::run(cli.config),

        Commands::Conflicts => commands::conflicts::run(cli.config),

        Commands::Export {
            format,
            output,
            legacy,
        } => commands::export::run(cli.config, format, output, legacy),
    }
}
