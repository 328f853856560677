// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary-encoded point store.
//!
//! Format: a flat sequence of fixed 8-byte records, each two 4-byte
//! big-endian signed integers `(x, y)`. The file is mapped read-only and
//! coordinates are decoded from the mapping on access; nothing is copied
//! up front.

use crate::error::{Error, MalformedInput};
use crate::store::PointStore;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Bytes per coordinate.
const COORD_SIZE: usize = 4;

/// Bytes per `(x, y)` record.
const RECORD_SIZE: usize = 2 * COORD_SIZE;

/// Point store backed by a read-only memory mapping.
///
/// An empty file yields an empty store with no mapping at all.
#[derive(Debug)]
pub struct BinPointStore {
    /// `None` only for an empty file.
    mmap: Option<Mmap>,
    len: usize,
}

impl BinPointStore {
    /// Map a binary point file.
    ///
    /// Fails with [`MalformedInput::UnalignedBinary`] if the file size is not
    /// a whole number of records.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();

        if size % RECORD_SIZE as u64 != 0 {
            return Err(MalformedInput::UnalignedBinary {
                size,
                record: RECORD_SIZE,
            }
            .into());
        }

        let len = (size / RECORD_SIZE as u64) as usize;
        let mmap = if size == 0 {
            None
        } else {
            // Safety: the mapping is read-only and the store owns it for the
            // lifetime of every access.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(BinPointStore { mmap, len })
    }

    fn coord_at(&self, offset: usize) -> i32 {
        let data = self.mmap.as_deref().unwrap_or(&[]);
        let mut raw = [0u8; COORD_SIZE];
        raw.copy_from_slice(&data[offset..offset + COORD_SIZE]);
        i32::from_be_bytes(raw)
    }

    fn check_index(&self, idx: usize) {
        assert!(
            idx < self.len,
            "point index {} out of bounds for {} points",
            idx,
            self.len
        );
    }
}

impl PointStore for BinPointStore {
    fn len(&self) -> usize {
        self.len
    }

    fn x(&self, idx: usize) -> i32 {
        self.check_index(idx);
        self.coord_at(idx * RECORD_SIZE)
    }

    fn y(&self, idx: usize) -> i32 {
        self.check_index(idx);
        self.coord_at(idx * RECORD_SIZE + COORD_SIZE)
    }
}
