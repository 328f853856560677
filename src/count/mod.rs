// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Right-triangle counting over a range of corner candidates.
//!
//! For each corner index in the assigned range, the displacements to every
//! other point are canonicalized into ray [`Direction`]s and tallied in a
//! fresh histogram. Two other points form a right angle at the corner exactly
//! when their directions are perpendicular, so the corner's contribution is
//! the sum of `count(d) * count(d.perpendicular_left())` over the histogram.
//! Checking only the left perpendicular visits each perpendicular pair once;
//! see [`crate::geometry::direction`] for why no further bookkeeping is
//! needed.
//!
//! The inner comparison always scans the full point set `[0, n)` no matter
//! which corner range is assigned. Partitioning therefore only decides which
//! vertices act as the right-angle apex, and partial counts over any
//! contiguous split of the corner index sum to the whole. That is the
//! property the worker pools in [`crate::pool`] rely on.

use crate::geometry::Direction;
use crate::store::PointStore;
use std::collections::HashMap;
use std::ops::Range;

/// Half-open range of corner indices assigned to one worker.
pub type WorkRange = Range<usize>;

/// Count right triangles whose apex index lies in `range`.
///
/// The range is clamped to `[0, n]`; an empty clamped range or a store with
/// fewer than three points counts zero. Complexity is
/// O(range length × n) time and O(n) auxiliary space.
pub fn count_right_triangles(store: &dyn PointStore, range: WorkRange) -> u64 {
    let n = store.len();
    if n < 3 {
        return 0;
    }
    let start = range.start.min(n);
    let end = range.end.min(n);
    if start >= end {
        return 0;
    }

    // Cache the coordinates up front; the O(range × n) comparison loop must
    // not go through the store accessors on every step.
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for k in 0..n {
        xs.push(i64::from(store.x(k)));
        ys.push(i64::from(store.y(k)));
    }

    let mut total: u64 = 0;

    for i in start..end {
        let corner_x = xs[i];
        let corner_y = ys[i];

        // Histogram of canonical ray directions from this corner. Pre-sized
        // on the heuristic that about a third of the directions are distinct.
        let mut histogram: HashMap<Direction, u64> = HashMap::with_capacity(n / 3 + 1);

        for j in 0..n {
            if j == i {
                continue;
            }
            let direction = Direction::canonical(xs[j] - corner_x, ys[j] - corner_y);
            if direction.is_zero() {
                // A duplicate of the corner point: no ray, no contribution.
                continue;
            }
            *histogram.entry(direction).or_insert(0) += 1;
        }

        for (&direction, &along) in &histogram {
            if let Some(&across) = histogram.get(&direction.perpendicular_left()) {
                total += along * across;
            }
        }
    }

    total
}
