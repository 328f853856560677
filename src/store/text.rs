// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text-encoded point store.
//!
//! Format: the first line is a decimal point count `n`; each following
//! non-blank line is two whitespace-separated decimal integers `x y`. Blank
//! lines are skipped and do not count toward `n`. Parsing stops once `n`
//! points have been read; trailing content is ignored.

use crate::error::{Error, MalformedInput};
use crate::store::PointStore;
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Point store parsed eagerly from a text source.
///
/// All points are materialized into two coordinate arrays at construction,
/// so indexed access never touches the source again.
#[derive(Debug)]
pub struct TextPointStore {
    xs: Vec<i32>,
    ys: Vec<i32>,
}

impl TextPointStore {
    /// Read and parse a text point file.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse the text format from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(MalformedInput::Empty.into()),
        };
        let expected: usize = header.trim().parse().map_err(|_| MalformedInput::BadCount {
            line: header.trim().to_string(),
        })?;

        let mut xs = Vec::with_capacity(expected);
        let mut ys = Vec::with_capacity(expected);
        let mut lineno = 1;

        for line in lines {
            if xs.len() == expected {
                break;
            }
            let line = line?;
            lineno += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let Some((first, second)) = trimmed.split_whitespace().collect_tuple() else {
                return Err(MalformedInput::BadPoint {
                    lineno,
                    line: trimmed.to_string(),
                }
                .into());
            };
            let bad_point = |_| MalformedInput::BadPoint {
                lineno,
                line: trimmed.to_string(),
            };
            let x: i32 = first.parse().map_err(bad_point)?;
            let y: i32 = second.parse().map_err(bad_point)?;
            xs.push(x);
            ys.push(y);
        }

        if xs.len() < expected {
            return Err(MalformedInput::TooFewPoints {
                expected,
                found: xs.len(),
            }
            .into());
        }

        Ok(TextPointStore { xs, ys })
    }
}

impl PointStore for TextPointStore {
    fn len(&self) -> usize {
        self.xs.len()
    }

    fn x(&self, idx: usize) -> i32 {
        self.xs[idx]
    }

    fn y(&self, idx: usize) -> i32 {
        self.ys[idx]
    }
}
