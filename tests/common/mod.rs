// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test fixtures shared across integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use tempfile::NamedTempFile;

/// Write a point set in the text format (count header + `x y` lines).
pub fn text_fixture(points: &[(i32, i32)]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("points-")
        .suffix(".txt")
        .tempfile()
        .unwrap();
    writeln!(file, "{}", points.len()).unwrap();
    for (x, y) in points {
        writeln!(file, "{} {}", x, y).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Write a point set in the binary format (8-byte big-endian records).
///
/// The `.dat` suffix is what makes `store::open` pick the binary reader.
pub fn binary_fixture(points: &[(i32, i32)]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("points-")
        .suffix(".dat")
        .tempfile()
        .unwrap();
    for &(x, y) in points {
        file.write_all(&x.to_be_bytes()).unwrap();
        file.write_all(&y.to_be_bytes()).unwrap();
    }
    file.flush().unwrap();
    file
}

/// A reproducible point set on a small grid.
///
/// The small spread keeps coincidences (collinear runs, duplicates,
/// perpendicular pairs) frequent enough to exercise the interesting paths.
pub fn random_points(seed: u64, n: usize, spread: i32) -> Vec<(i32, i32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                rng.gen_range(-spread..=spread),
                rng.gen_range(-spread..=spread),
            )
        })
        .collect()
}
