//! In-memory container adapter
//!
//! Reference implementation of [`ContainerRead`] over plain maps. Used by
//! the unit tests as a synthetic container, and usable by callers that
//! already hold a recording's contents in memory.

use std::collections::HashMap;
use std::ops::Range;

use gridwave_core::GridPosition;

use super::{ContainerRead, StoreError, StoreResult};

/// Raw sample dataset in one of the two on-disk shapes.
#[derive(Clone, Debug)]
enum RawDataset {
    /// Flat 1-D dataset (version 101 layout)
    Flat(Vec<u16>),
    /// 2-D dataset stored row-major (version 100 layout)
    Rows {
        codes: Vec<u16>,
        width: u64,
    },
}

/// Hierarchical container held in memory.
///
/// Paths are the same logical strings a file-backed adapter would resolve;
/// see [`crate::layout`].
#[derive(Clone, Debug, Default)]
pub struct MemContainer {
    scalars_f64: HashMap<String, f64>,
    scalars_i64: HashMap<String, i64>,
    attrs: HashMap<(String, String), i64>,
    datasets: HashMap<String, RawDataset>,
    positions: HashMap<String, Vec<GridPosition>>,
}

impl MemContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a floating-point scalar dataset.
    pub fn put_scalar_f64(&mut self, path: &str, value: f64) {
        self.scalars_f64.insert(path.to_string(), value);
    }

    /// Store an integer scalar dataset.
    pub fn put_scalar_i64(&mut self, path: &str, value: i64) {
        self.scalars_i64.insert(path.to_string(), value);
    }

    /// Attach an integer attribute to a group or dataset path.
    pub fn put_attr(&mut self, path: &str, name: &str, value: i64) {
        self.attrs.insert((path.to_string(), name.to_string()), value);
    }

    /// Store a flat 1-D raw dataset (version 101 layout).
    pub fn put_flat(&mut self, path: &str, codes: Vec<u16>) {
        self.datasets.insert(path.to_string(), RawDataset::Flat(codes));
    }

    /// Store a 2-D raw dataset row-major (version 100 layout).
    pub fn put_rows(&mut self, path: &str, codes: Vec<u16>, width: u64) {
        self.datasets
            .insert(path.to_string(), RawDataset::Rows { codes, width });
    }

    /// Store an ordered electrode coordinate list.
    pub fn put_grid_positions(&mut self, path: &str, positions: Vec<GridPosition>) {
        self.positions.insert(path.to_string(), positions);
    }

    /// Remove any node at `path` (missing-field scenarios in tests).
    pub fn remove(&mut self, path: &str) {
        self.scalars_f64.remove(path);
        self.scalars_i64.remove(path);
        self.datasets.remove(path);
        self.positions.remove(path);
    }

    fn dataset(&self, path: &str) -> StoreResult<&RawDataset> {
        self.datasets.get(path).ok_or_else(|| StoreError::NotFound {
            path: path.to_string(),
        })
    }
}

fn check_bounds(path: &str, range: &Range<u64>, len: u64) -> StoreResult<()> {
    if range.end > len {
        return Err(StoreError::OutOfBounds {
            path: path.to_string(),
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

impl ContainerRead for MemContainer {
    fn scalar_f64(&self, path: &str) -> StoreResult<f64> {
        self.scalars_f64
            .get(path)
            .copied()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_string(),
            })
    }

    fn scalar_i64(&self, path: &str) -> StoreResult<i64> {
        self.scalars_i64
            .get(path)
            .copied()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_string(),
            })
    }

    fn attr_i64(&self, path: &str, name: &str) -> StoreResult<i64> {
        self.attrs
            .get(&(path.to_string(), name.to_string()))
            .copied()
            .ok_or_else(|| StoreError::AttributeNotFound {
                path: path.to_string(),
                name: name.to_string(),
            })
    }

    fn shape(&self, path: &str) -> StoreResult<Vec<u64>> {
        match self.dataset(path)? {
            RawDataset::Flat(codes) => Ok(vec![codes.len() as u64]),
            RawDataset::Rows { codes, width } => {
                let rows = if *width == 0 {
                    0
                } else {
                    codes.len() as u64 / width
                };
                Ok(vec![rows, *width])
            }
        }
    }

    fn read_rows(&self, path: &str, rows: Range<u64>) -> StoreResult<Vec<u16>> {
        match self.dataset(path)? {
            RawDataset::Flat(_) => Err(StoreError::Layout {
                path: path.to_string(),
                detail: "expected a 2-D dataset",
            }),
            RawDataset::Rows { codes, width } => {
                let n_rows = if *width == 0 {
                    0
                } else {
                    codes.len() as u64 / width
                };
                check_bounds(path, &rows, n_rows)?;
                let start = (rows.start * width) as usize;
                let end = (rows.end * width) as usize;
                Ok(codes[start..end].to_vec())
            }
        }
    }

    fn read_flat(&self, path: &str, range: Range<u64>) -> StoreResult<Vec<u16>> {
        match self.dataset(path)? {
            RawDataset::Rows { .. } => Err(StoreError::Layout {
                path: path.to_string(),
                detail: "expected a flat 1-D dataset",
            }),
            RawDataset::Flat(codes) => {
                check_bounds(path, &range, codes.len() as u64)?;
                Ok(codes[range.start as usize..range.end as usize].to_vec())
            }
        }
    }

    fn read_grid_positions(&self, path: &str) -> StoreResult<Vec<GridPosition>> {
        self.positions
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_string(),
            })
    }
}
