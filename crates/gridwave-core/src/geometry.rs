//! Electrode grid geometry
//!
//! Maps the 1-based `(row, col)` electrode coordinates stored in the
//! container onto flat grid indices. The flat index is the external
//! channel naming for full-array files (`0..4095` on a 64x64 chip).

use crate::types::GridPosition;

/// Flat grid index of an electrode: `(col - 1) + (row - 1) * n_cols`.
///
/// Returns `None` for malformed coordinates (a zero row or column cannot
/// occur in a well-formed container, where coordinates are 1-based) or if
/// the index overflows `u32`.
#[must_use]
pub fn flat_index(position: GridPosition, n_cols: u32) -> Option<u32> {
    if position.row == 0 || position.col == 0 {
        return None;
    }
    (position.row - 1)
        .checked_mul(n_cols)
        .and_then(|base| base.checked_add(position.col - 1))
}

/// Flat grid indices for a whole geometry sequence, input order preserved.
///
/// The resulting order is the external channel-id ordering of the
/// recording. Returns `None` if any position is malformed.
#[must_use]
pub fn grid_indices(positions: &[GridPosition], n_cols: u32) -> Option<Vec<u32>> {
    positions
        .iter()
        .map(|&position| flat_index(position, n_cols))
        .collect()
}
