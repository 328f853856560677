// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error taxonomy and process exit codes.
//!
//! Every failure is terminal for the run: there are no retries and a
//! partially-computed count is never reported as success. The variants map
//! onto the exit-code convention used by the binary:
//!
//! - `0`: success, the count was printed to stdout
//! - `1`: usage or argument error (produced by argument parsing, not here)
//! - `2`: I/O or permission failure, or a worker-pool failure
//! - `3`: structurally invalid input content
//!
//! Out-of-range index access on a [`crate::store::PointStore`] is a contract
//! violation, not a user-facing condition, and panics rather than appearing
//! in this taxonomy.

use std::io;
use thiserror::Error;

/// Top-level error for a counting run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The input file is structurally invalid.
    #[error("malformed input: {0}")]
    Malformed(#[from] MalformedInput),

    /// The out-of-process worker pool failed.
    #[error(transparent)]
    Worker(#[from] WorkerFailure),
}

impl Error {
    /// The process exit code this error should terminate with.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io(_) | Error::Worker(_) => 2,
            Error::Malformed(_) => 3,
        }
    }
}

/// Structurally invalid text or binary point content.
#[derive(Debug, Error)]
pub enum MalformedInput {
    /// A text source ended before the point-count header line.
    #[error("input is empty")]
    Empty,

    /// The first line of a text source is not a non-negative point count.
    #[error("first line is not a point count: {line:?}")]
    BadCount { line: String },

    /// A non-blank text line did not parse as two integer coordinates.
    #[error("line {lineno}: expected two integer coordinates, got {line:?}")]
    BadPoint { lineno: usize, line: String },

    /// A text source ended before the promised number of points.
    #[error("expected {expected} points but input ends after {found}")]
    TooFewPoints { expected: usize, found: usize },

    /// A binary source is not a whole number of 8-byte point records.
    #[error("binary point file is {size} bytes, not a multiple of the {record}-byte record size")]
    UnalignedBinary { size: u64, record: usize },
}

/// Failure of the out-of-process worker pool.
///
/// A worker-level I/O or malformed-input failure surfaces on the child's
/// stderr and exit status; at the pool level it becomes one of these, which
/// terminates all sibling workers.
#[derive(Debug, Error)]
pub enum WorkerFailure {
    /// A worker process could not be spawned.
    #[error("failed to spawn worker {index}: {source}")]
    Spawn { index: usize, source: io::Error },

    /// A worker's assignment could not be written to its stdin.
    #[error("failed to send assignment to worker {index}: {source}")]
    Assign { index: usize, source: io::Error },

    /// A worker closed its stdout without producing a result line.
    #[error("worker {index} produced no result")]
    MissingResult { index: usize },

    /// A worker's result line did not parse as a count.
    #[error("worker {index} produced an unparseable result: {line:?}")]
    BadResult { index: usize, line: String },

    /// A worker process went missing while being waited on.
    #[error("lost worker {index}: {source}")]
    Lost { index: usize, source: io::Error },

    /// The assignment read from stdin by a worker was missing or invalid.
    #[error("invalid worker assignment: {0}")]
    BadAssignment(&'static str),
}
