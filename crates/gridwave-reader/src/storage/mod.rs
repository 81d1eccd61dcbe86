//! Read-only container access
//!
//! The decoding core never touches a storage engine directly; it sees a
//! container only through the narrow [`ContainerRead`] capability. An
//! adapter over a real HDF5 library implements the same trait in the
//! application that owns the file handle.
//!
//! Access is synchronous and the handle is treated as read-only for the
//! lifetime of a recording session. The trait makes no thread-safety
//! promises: concurrent readers must be serialized externally unless the
//! adapter documents otherwise.

use std::ops::Range;

use thiserror::Error;

use gridwave_core::GridPosition;

mod memory;

pub use memory::MemContainer;

/// Errors raised by a container adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No dataset or group at the requested path
    #[error("no dataset or group at {path}")]
    NotFound {
        /// Requested logical path
        path: String,
    },

    /// The group exists but carries no such attribute
    #[error("no attribute {name} on {path}")]
    AttributeNotFound {
        /// Group or dataset path
        path: String,
        /// Attribute name
        name: String,
    },

    /// The dataset exists but has the wrong rank or element kind
    #[error("dataset {path} has unexpected layout: {detail}")]
    Layout {
        /// Dataset path
        path: String,
        /// What was expected
        detail: &'static str,
    },

    /// A slice request reaches past the end of the dataset
    #[error("range [{start}, {end}) exceeds dataset {path} of length {len}")]
    OutOfBounds {
        /// Dataset path
        path: String,
        /// Requested start (inclusive)
        start: u64,
        /// Requested end (exclusive)
        end: u64,
        /// Dataset length in the sliced dimension
        len: u64,
    },
}

/// Result alias for container access.
pub type StoreResult<T> = Result<T, StoreError>;

/// Narrow read-only view of a hierarchical recording container.
///
/// The capability set is exactly what the decoding core needs: scalar and
/// attribute reads at fixed paths, dataset shape, row- and element-range
/// slices of the raw dataset, and the ordered electrode coordinate list.
pub trait ContainerRead {
    /// First element of the floating-point scalar dataset at `path`.
    fn scalar_f64(&self, path: &str) -> StoreResult<f64>;

    /// First element of the integer scalar dataset at `path`.
    fn scalar_i64(&self, path: &str) -> StoreResult<i64>;

    /// Integer attribute `name` attached to the group or dataset at `path`.
    fn attr_i64(&self, path: &str, name: &str) -> StoreResult<i64>;

    /// Dimensions of the dataset at `path`.
    fn shape(&self, path: &str) -> StoreResult<Vec<u64>>;

    /// Rows `[rows.start, rows.end)` of the 2-D dataset at `path`,
    /// flattened row-major.
    fn read_rows(&self, path: &str, rows: Range<u64>) -> StoreResult<Vec<u16>>;

    /// Elements `[range.start, range.end)` of the flat 1-D dataset at
    /// `path`.
    fn read_flat(&self, path: &str, range: Range<u64>) -> StoreResult<Vec<u16>>;

    /// Ordered electrode grid coordinates stored at `path`.
    fn read_grid_positions(&self, path: &str) -> StoreResult<Vec<GridPosition>>;
}
