// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! `tricount <input> [workers]` prints the right-triangle count for the
//! point file to stdout. Nothing else goes to stdout, so the output can be
//! consumed by scripts. Parallel runs use worker threads by default;
//! `--processes` switches to spawned worker processes, each of which
//! re-invokes this executable with the hidden `worker` subcommand.
//!
//! Exit codes: 0 success, 1 usage error, 2 I/O or worker failure,
//! 3 malformed input content.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tricount::error::Error;
use tricount::{count, pool, store};

/// Largest accepted worker count.
const MAX_WORKERS: i64 = 256;

#[derive(Parser)]
#[command(
    name = "tricount",
    version,
    about = "Count right triangles in a 2-D integer point set",
    subcommand_negates_reqs = true
)]
struct Cli {
    /// Input point file; a `.dat` suffix selects the binary format
    #[arg(required = true)]
    input: Option<PathBuf>,

    /// Number of workers; omit for a serial run
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_WORKERS))]
    workers: Option<u32>,

    /// Split the work across worker processes instead of threads
    #[arg(long)]
    processes: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one worker over an assignment read from stdin
    #[command(hide = true)]
    Worker,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version arrive here as "errors" but are not.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            err.print().ok();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Some(Command::Worker) => pool::worker::run(io::stdin().lock(), io::stdout().lock()),
        None => {
            let input = cli
                .input
                .expect("clap enforces the input argument when no subcommand is given");
            let workers = cli.workers.unwrap_or(1) as usize;
            count_file(&input, workers, cli.processes)
        }
    }
}

fn count_file(input: &Path, workers: usize, processes: bool) -> Result<(), Error> {
    let store = store::open(input)?;
    tracing::debug!(input = %input.display(), points = store.len(), "opened point store");

    let count = if processes && workers > 1 {
        let program = env::current_exe()?;
        pool::process::count_across_processes(&program, input, store.as_ref(), workers)?
    } else if workers > 1 {
        pool::threads::count_across_threads(store.as_ref(), workers)
    } else {
        count::count_right_triangles(store.as_ref(), 0..store.len())
    };

    println!("{count}");
    Ok(())
}
