// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point storage.
//!
//! A [`PointStore`] is an immutable, zero-indexed, randomly-indexable
//! sequence of `(x, y)` points. Two implementations cover the two input
//! encodings:
//!
//! - [`TextPointStore`]: parses the line-oriented text format eagerly into
//!   coordinate arrays.
//! - [`BinPointStore`]: memory-maps the fixed-record binary format and
//!   reads coordinates straight from the mapping.
//!
//! Stores are created once per run (or once per worker process) and never
//! mutated afterwards, which is what lets the in-process pool share one
//! store by reference across worker threads. Backing resources are released
//! when the store is dropped.

pub mod binary;
pub mod text;

pub use binary::BinPointStore;
pub use text::TextPointStore;

use crate::error::Error;
use std::path::Path;

/// Immutable, indexable source of point coordinates.
///
/// `Send + Sync` because one store is shared by reference across worker
/// threads for the duration of a run.
///
/// # Panics
///
/// `x` and `y` panic if `idx >= len()`. Out-of-range access is a contract
/// violation by the caller, not a recoverable condition.
pub trait PointStore: Send + Sync {
    /// Number of points in the store.
    fn len(&self) -> usize;

    /// The x coordinate of point `idx`.
    fn x(&self, idx: usize) -> i32;

    /// The y coordinate of point `idx`.
    fn y(&self, idx: usize) -> i32;

    /// Whether the store holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filename suffix that selects the binary format.
const BINARY_SUFFIX: &str = "dat";

/// Open the point store appropriate for `path`.
///
/// A `.dat` suffix selects the memory-mapped binary format; anything else is
/// parsed as text.
pub fn open(path: &Path) -> Result<Box<dyn PointStore>, Error> {
    if path.extension().is_some_and(|ext| ext == BINARY_SUFFIX) {
        Ok(Box::new(BinPointStore::open(path)?))
    } else {
        Ok(Box::new(TextPointStore::open(path)?))
    }
}
