// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Child side of the process-pool pipe protocol.
//!
//! A worker reads a three-line assignment from its standard input:
//!
//! ```text
//! <source>
//! <start>
//! <end>
//! ```
//!
//! opens its own [`crate::store::PointStore`] from the source path (the
//! source is immutable and shared, so re-opening it avoids serializing the
//! point set through the pipe), counts right triangles over `[start, end)`,
//! and writes a single decimal count line to its standard output. The parent
//! interprets the process exit status: 0 on success, nonzero on any failure.

use crate::count::count_right_triangles;
use crate::error::{Error, WorkerFailure};
use crate::store;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Run one worker assignment from `input`, writing the count to `output`.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<(), Error> {
    let source = read_assignment_line(&mut input, "source path")?;
    let start = parse_index(read_assignment_line(&mut input, "start index")?, "start index")?;
    let end = parse_index(read_assignment_line(&mut input, "end index")?, "end index")?;
    if end < start {
        return Err(WorkerFailure::BadAssignment("end index before start index").into());
    }

    debug!(source = %source, start, end, "worker assignment received");

    let store = store::open(Path::new(&source))?;
    let count = count_right_triangles(store.as_ref(), start..end);

    writeln!(output, "{count}")?;
    output.flush()?;
    Ok(())
}

fn read_assignment_line<R: BufRead>(
    input: &mut R,
    expected: &'static str,
) -> Result<String, Error> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(WorkerFailure::BadAssignment(expected).into());
    }
    Ok(line.trim().to_string())
}

fn parse_index(line: String, expected: &'static str) -> Result<usize, Error> {
    line.parse()
        .map_err(|_| WorkerFailure::BadAssignment(expected).into())
}
