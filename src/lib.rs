// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count axis-arbitrary right triangles in a set of 2-D integer points.
//!
//! # Architecture
//!
//! The counting algorithm is O(n²): each point in turn acts as the corner
//! (right-angle apex) under evaluation, and the displacements to every other
//! point are collapsed into a histogram of canonical ray directions. Two
//! directions form a right angle at the corner exactly when one is the +90°
//! rotation of the other, so the triangles with their apex at that corner are
//! counted by multiplying histogram entries for perpendicular direction pairs.
//!
//! Because every corner evaluation scans the full point set, the work
//! partitions cleanly over the *corner* index: any split of `[0, n)` into
//! contiguous ranges yields partial counts that sum to the whole. Two worker
//! pools exploit this:
//!
//! - [`pool::threads`]: scoped worker threads sharing one read-only
//!   [`store::PointStore`], each writing its partial count into an exclusive
//!   pre-allocated slot, joined before aggregation.
//! - [`pool::process`]: independently spawned worker processes, each given a
//!   `(source, start, end)` assignment over a line-oriented stdin/stdout
//!   protocol, and each opening its own store from the shared immutable file.
//!
//! # Point storage
//!
//! [`store::PointStore`] abstracts the point source behind indexed access:
//! - [`store::TextPointStore`] parses a count header plus `x y` lines into
//!   two coordinate arrays.
//! - [`store::BinPointStore`] memory-maps a flat file of 8-byte big-endian
//!   `(x, y)` records and reads coordinates straight from the mapping.
//!
//! [`store::open`] selects the format from the filename suffix: `.dat` is
//! binary, anything else is text.

pub mod count;
pub mod error;
pub mod geometry;
pub mod pool;
pub mod store;

// Re-export commonly used types
pub use count::{count_right_triangles, WorkRange};
pub use error::{Error, MalformedInput, WorkerFailure};
pub use geometry::Direction;
pub use store::PointStore;
