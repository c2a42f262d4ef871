//! calcard CLI: descriptor generators for calendar cards.
//!
//! Provides two commands that write TOML to standard output:
//! `template` (the card layout) and `values` (one month's strings).
//!
//! Both delegate to [`calcard_core`]; the CLI only resolves arguments,
//! sets up logging, and reports errors.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "calcard",
    about = "Calendar card descriptors: layout templates and month values",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a calcard.toml with layout defaults (default: ./calcard.toml if present)
    #[arg(long, global = true, env = "CALCARD_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv), logged to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout template for a calendar card
    #[command(visible_alias = "tmpl")]
    Template(commands::template::TemplateArgs),

    /// Print the values for one month
    #[command(visible_alias = "val")]
    Values {
        /// Year, e.g. 2024
        #[arg(allow_negative_numbers = true)]
        year: i64,

        /// Month number, 1-12
        #[arg(allow_negative_numbers = true)]
        month: i64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the descriptor
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Template(args) => commands::template::run(cli.config.as_deref(), args),
        Commands::Values { year, month } => commands::values::run(year, month),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
