//! CLI command definitions and handlers

mod analyze;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Readability - text readability metrics
///
/// Scores text with ARI, Flesch–Kincaid, SMOG and Coleman–Liau and
/// estimates the age of its readers.
#[derive(Parser, Debug)]
#[command(name = "readability")]
#[command(
    version,
    about = "Readability metrics for text files: ARI, Flesch–Kincaid, SMOG and Coleman–Liau mapped to reader ages",
    after_help = "\
Examples:
  readability analyze essay.txt                    All four metrics plus the average age
  readability analyze essay.txt -m FK              Only Flesch–Kincaid
  readability analyze essay.txt --policy ceiling   Age ranges instead of upper bounds
  readability analyze a.txt b.txt --format json    JSON output for scripting
  cat essay.txt | readability analyze -            Read from stdin
  readability init                                 Write an example readability.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more text files
    #[command(after_help = "\
Examples:
  readability analyze essay.txt                          Text report, all metrics
  readability analyze essay.txt --metric SMOG            Single metric
  readability analyze essay.txt -f markdown -o out.md    Markdown report written to a file
  readability analyze essay.txt --fail-above-age 14      Exit code 1 if the text is too hard (CI mode)")]
    Analyze {
        /// Text files to score (`-` reads stdin)
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Metric to report: ARI, FK, SMOG, CL or all (default: all)
        #[arg(long, short = 'm')]
        metric: Option<String>,

        /// Age policy: round (upper-bound age) or ceiling (age range)
        #[arg(long, value_parser = ["round", "ceiling"])]
        policy: Option<String>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path, or a directory for readability-report.<ext> (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the input text before the report (to stderr for json)
        #[arg(long)]
        show_text: bool,

        /// Exit with code 1 if the estimated reader age exceeds this value
        #[arg(long, value_name = "YEARS")]
        fail_above_age: Option<f64>,

        /// Disable emoji in output (cleaner for CI logs)
        #[arg(long)]
        no_emoji: bool,
    },

    /// Write an example readability.toml config file
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            files,
            metric,
            policy,
            format,
            output,
            show_text,
            fail_above_age,
            no_emoji,
        } => {
            let config = readability::config::load_project_config(std::path::Path::new("."));
            let options = analyze::AnalyzeOptions::resolve(
                metric,
                policy,
                format,
                output,
                show_text,
                fail_above_age,
                no_emoji,
                &config.defaults,
            )?;
            analyze::run(&files, &options)
        }

        Commands::Init { path } => init::run(&path),

        Commands::Version => {
            println!("readability {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
