// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Out-of-process worker pool.
//!
//! Each worker is an independently spawned process running the worker
//! subcommand of this same binary. The parent's interaction with a worker is
//! a strict half-duplex round trip: write the three-line assignment, close
//! the pipe, read the one-line result, then wait for termination. Workers
//! run concurrently with each other; results are collected sequentially and
//! aggregated only once every worker has either produced a result or
//! fatally failed the run.
//!
//! Failure policy: a worker that exits nonzero *after* producing a parseable
//! result is reported as a warning and its result is kept. A missing or
//! unparseable result line, a spawn failure, or a lost child is fatal: all
//! remaining workers are terminated and the run reports no count.

use crate::count::{count_right_triangles, WorkRange};
use crate::error::{Error, WorkerFailure};
use crate::pool::partition;
use crate::store::PointStore;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};

/// Subcommand of the main binary that runs the child side of the protocol.
pub const WORKER_SUBCOMMAND: &str = "worker";

/// Count right triangles across up to `workers` processes.
///
/// `program` is the worker executable (normally the current executable);
/// `source` is the point file each worker re-opens on its own. The parent's
/// already-open `store` supplies `n` and serves the serial fallback when the
/// partition collapses to a single range.
pub fn count_across_processes(
    program: &Path,
    source: &Path,
    store: &dyn PointStore,
    workers: usize,
) -> Result<u64, Error> {
    let ranges = partition(store.len(), workers);
    if ranges.len() == 1 {
        return Ok(count_right_triangles(
            store,
            ranges.into_iter().next().unwrap_or(0..0),
        ));
    }

    debug!(
        workers = ranges.len(),
        points = store.len(),
        "starting process pool"
    );

    let mut children: Vec<Child> = Vec::with_capacity(ranges.len());
    for (index, range) in ranges.iter().enumerate() {
        match spawn_worker(program, source, range, index) {
            Ok(child) => children.push(child),
            Err(failure) => {
                terminate_all(&mut children);
                return Err(failure.into());
            }
        }
    }

    let mut total: u64 = 0;
    for index in 0..children.len() {
        match collect_result(&mut children[index], index) {
            Ok(count) => total += count,
            Err(failure) => {
                terminate_all(&mut children);
                return Err(failure.into());
            }
        }
    }
    Ok(total)
}

/// Spawn one worker and send it its assignment.
fn spawn_worker(
    program: &Path,
    source: &Path,
    range: &WorkRange,
    index: usize,
) -> Result<Child, WorkerFailure> {
    let mut child = Command::new(program)
        .arg(WORKER_SUBCOMMAND)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|err| WorkerFailure::Spawn { index, source: err })?;

    if let Err(err) = write_assignment(&mut child, source, range) {
        child.kill().ok();
        child.wait().ok();
        return Err(WorkerFailure::Assign { index, source: err });
    }
    Ok(child)
}

fn write_assignment(child: &mut Child, source: &Path, range: &WorkRange) -> io::Result<()> {
    let mut stdin = child.stdin.take().ok_or_else(|| {
        io::Error::new(io::ErrorKind::BrokenPipe, "worker stdin was not captured")
    })?;
    write!(stdin, "{}\n{}\n{}\n", source.display(), range.start, range.end)?;
    stdin.flush()
    // Dropping stdin closes the pipe: the assignment is complete.
}

/// Read one worker's result line, then reap the process.
fn collect_result(child: &mut Child, index: usize) -> Result<u64, WorkerFailure> {
    let Some(stdout) = child.stdout.take() else {
        return Err(WorkerFailure::MissingResult { index });
    };

    let mut line = String::new();
    match BufReader::new(stdout).read_line(&mut line) {
        Ok(0) | Err(_) => return Err(WorkerFailure::MissingResult { index }),
        Ok(_) => {}
    }
    let count: u64 = line.trim().parse().map_err(|_| WorkerFailure::BadResult {
        index,
        line: line.trim().to_string(),
    })?;

    let status = child
        .wait()
        .map_err(|err| WorkerFailure::Lost { index, source: err })?;
    if !status.success() {
        warn!(worker = index, %status, "worker exited abnormally; keeping its result");
    }
    Ok(count)
}

fn terminate_all(children: &mut [Child]) {
    for child in children.iter_mut() {
        child.kill().ok();
        child.wait().ok();
    }
}
