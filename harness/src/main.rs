//! `decontam`: minimal-k graph decontamination.
//!
//! # Commands
//!
//! - `solve`: minimal decontamination sequence for an edge stream
//! - `guards`: solve, then print the equivalent guard-checker input
//! - `verify`: replay a guard-checker input and print `OK!` or `NO`
//!
//! Exit codes: 0 success, 1 checker `NO`, 2 input or configuration error,
//! 3 search error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use decontam_harness::config::PolicyConfig;
use decontam_harness::error::{HarnessError, EXIT_OK, EXIT_VERDICT_NO};
use decontam_harness::runner::{open_input, run_guards, run_solve, run_verify, OutputFormat};

#[derive(Parser)]
#[command(name = "decontam")]
#[command(version)]
#[command(about = "Minimal-k graph decontamination search and guard checker")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Largest vertex count accepted by the search (at most 64)
    #[arg(long, env = "DECONTAM_MAX_VERTICES", global = true)]
    max_vertices: Option<usize>,

    /// Visited-configuration budget per k attempt
    #[arg(long, env = "DECONTAM_MAX_CONFIGURATIONS", global = true)]
    max_configurations: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the minimal decontamination sequence for an edge stream
    Solve {
        /// Edge stream file; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Solve, then print the guard-checker input for the sequence
    Guards {
        /// Edge stream file; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Replay a guard-checker input
    Verify {
        /// Checker input file; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<i32, HarnessError> {
    let config = PolicyConfig {
        max_vertices: cli.max_vertices,
        max_configurations: cli.max_configurations,
    };
    match cli.command {
        Commands::Solve { input, format } => {
            let reader = open_input(input.as_deref())?;
            print!("{}", run_solve(reader, format, &config)?);
            Ok(EXIT_OK)
        }
        Commands::Guards { input } => {
            let reader = open_input(input.as_deref())?;
            print!("{}", run_guards(reader, &config)?);
            Ok(EXIT_OK)
        }
        Commands::Verify { input } => {
            let reader = open_input(input.as_deref())?;
            let replay = run_verify(reader)?;
            print!("{}", replay.render());
            Ok(if replay.is_ok() { EXIT_OK } else { EXIT_VERDICT_NO })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!(exit_code = err.exit_code(), "{err}");
            eprintln!("decontam: {err}");
            err.exit_code()
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
