// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Worker pools over disjoint corner ranges.
//!
//! Both pools split the corner index space `[0, n)` with
//! [`partition::partition`] and aggregate per-worker partial counts by plain
//! summation, which is correct because partitioning is over the corner
//! index, never over comparison pairs:
//!
//! - [`threads`]: in-process pool where scoped threads share one read-only
//!   [`crate::store::PointStore`] by reference and each writes one exclusive
//!   output slot.
//! - [`process`]: out-of-process pool where each worker is an independently
//!   spawned process that re-opens its own store from the shared immutable
//!   source file; only a 3-line assignment and a 1-line result cross the
//!   pipe. [`worker`] is the child side of that protocol.
//!
//! Neither pool supports timeouts, retries, or cancellation: any worker
//! failure is fatal to the whole run.

pub mod partition;
pub mod process;
pub mod threads;
pub mod worker;

pub use partition::partition;
