// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-process worker pool.
//!
//! Workers are scoped threads reading the same shared, read-only
//! [`PointStore`] and each writing its partial count into an exclusive,
//! pre-allocated output slot. The slots are disjoint `&mut` borrows of one
//! vector, so no locking is involved, and no slot is read until the scope's
//! join barrier has seen every worker finish.

use crate::count::count_right_triangles;
use crate::pool::partition;
use crate::store::PointStore;
use std::thread;
use tracing::debug;

/// Count right triangles across up to `workers` threads.
///
/// Degenerate inputs (`n < 3`, one effective worker) are counted serially on
/// the calling thread. The aggregate is independent of the worker count.
///
/// # Panics
///
/// Panics if a worker thread cannot be spawned or panics while counting; the
/// run is aborted rather than continued with partial data.
pub fn count_across_threads(store: &dyn PointStore, workers: usize) -> u64 {
    let ranges = partition(store.len(), workers);
    if ranges.len() == 1 {
        return count_right_triangles(store, ranges.into_iter().next().unwrap_or(0..0));
    }

    debug!(workers = ranges.len(), points = store.len(), "starting thread pool");

    let mut slots = vec![0u64; ranges.len()];
    thread::scope(|scope| {
        for (index, (slot, range)) in slots.iter_mut().zip(ranges.iter().cloned()).enumerate() {
            thread::Builder::new()
                .name(format!("worker-{index}"))
                .spawn_scoped(scope, move || {
                    *slot = count_right_triangles(store, range);
                })
                .expect("failed to spawn worker thread");
        }
        // Leaving the scope joins every worker; a worker panic resurfaces
        // here and aborts the run before any slot is read.
    });

    slots.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TextPointStore;
    use std::io::Cursor;

    fn store_of(points: &[(i32, i32)]) -> TextPointStore {
        let mut text = format!("{}\n", points.len());
        for (x, y) in points {
            text.push_str(&format!("{} {}\n", x, y));
        }
        TextPointStore::from_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_thread_counts_match_serial() {
        let points: Vec<(i32, i32)> = (0..8)
            .flat_map(|x| (0..3).map(move |y| (x, y)))
            .collect();
        let store = store_of(&points);
        let serial = count_right_triangles(&store, 0..points.len());
        for workers in [1, 2, 3, 5, 8, 64] {
            assert_eq!(
                count_across_threads(&store, workers),
                serial,
                "workers = {}",
                workers
            );
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let store = store_of(&[(0, 0), (1, 1)]);
        assert_eq!(count_across_threads(&store, 4), 0);
        let store = store_of(&[]);
        assert_eq!(count_across_threads(&store, 4), 0);
    }
}
