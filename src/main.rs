//! GC Log Analyzer CLI
//!
//! Aggregates JVM garbage-collection event streams into pause, memory and
//! throughput statistics, and merges rotated log fragments into one timeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gclog_analyzer::commands::{
    display_types, display_version, execute_analyze, validate_args, validate_summary_file,
    AnalyzeArgs,
};
use gclog_analyzer::model::Generation;
use gclog_analyzer::utils::config::DEFAULT_SUMMARY_PATH;

/// GC Log Analyzer - statistics for JVM garbage-collection logs
#[derive(Parser, Debug)]
#[command(name = "gclog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true, env = "GCLOG_VERBOSE")]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one log, or merge several rotated fragments of the same run
    Analyze {
        /// Event logs (JSON lines), local paths or http(s) URLs
        #[arg(required = true)]
        files: Vec<String>,

        /// Output path for JSON summary
        #[arg(short, long, env = "GCLOG_OUTPUT", default_value = DEFAULT_SUMMARY_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long, env = "GCLOG_SUMMARY")]
        summary: bool,
    },

    /// List the known event types
    Types {
        /// Only show types of this generation (young, tenured, perm, all)
        #[arg(short, long)]
        generation: Option<Generation>,
    },

    /// Validate a summary JSON file
    Validate {
        /// Path to summary JSON file
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            files,
            output,
            summary,
        } => {
            let args = AnalyzeArgs {
                files,
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Types { generation } => {
            display_types(generation);
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
