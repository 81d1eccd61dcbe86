//! Open-time format inspection
//!
//! Reads the fixed-path metadata of a BrainWave container, determines the
//! layout version, derives the recorded channel count and the electrode
//! grid mapping, and validates the invariants the decoder relies on. Runs
//! once when a recording is opened; the result is held read-only for the
//! session.

use gridwave_core::{geometry, FormatVersion, RecordingMetadata};

use crate::error::{RecordingError, RecordingResult};
use crate::layout;
use crate::storage::{ContainerRead, StoreError, StoreResult};

/// Map a missing required field onto [`RecordingError::MissingMetadata`];
/// other store failures pass through.
fn required<T>(result: StoreResult<T>, path: &str) -> RecordingResult<T> {
    result.map_err(|err| match err {
        StoreError::NotFound { .. } | StoreError::AttributeNotFound { .. } => {
            RecordingError::MissingMetadata {
                path: path.to_string(),
            }
        }
        other => RecordingError::Store(other),
    })
}

/// Inspect a container and assemble the recording metadata.
///
/// # Errors
///
/// - [`RecordingError::MissingMetadata`] if a required field is absent
/// - [`RecordingError::UnsupportedFormat`] if the layout version is not
///   100 or 101
/// - [`RecordingError::InvalidMetadata`] for zero frame or channel counts,
///   a malformed raw dataset shape, or zero-valued grid coordinates
pub fn inspect<S: ContainerRead>(store: &S) -> RecordingResult<RecordingMetadata> {
    let frame_count = required(store.scalar_i64(layout::NREC_FRAMES), layout::NREC_FRAMES)?;
    let sampling_rate_hz = required(store.scalar_f64(layout::SAMPLING_RATE), layout::SAMPLING_RATE)?;
    let signal_inversion = required(
        store.scalar_i64(layout::SIGNAL_INVERSION),
        layout::SIGNAL_INVERSION,
    )?;
    let n_cols = required(store.scalar_i64(layout::N_COLS), layout::N_COLS)?;

    if frame_count <= 0 {
        return Err(RecordingError::InvalidMetadata {
            field: "NRecFrames",
            value: frame_count,
        });
    }
    let frame_count = frame_count as u64;

    if n_cols <= 0 || n_cols > i64::from(u32::MAX) {
        return Err(RecordingError::InvalidMetadata {
            field: "NCols",
            value: n_cols,
        });
    }
    let n_cols = n_cols as u32;

    let raw_version = required(
        store.attr_i64(layout::DATA_GROUP, layout::VERSION_ATTR),
        layout::DATA_GROUP,
    )?;
    let format_version = FormatVersion::from_raw(raw_version).ok_or(
        RecordingError::UnsupportedFormat {
            version: raw_version,
        },
    )?;

    let channel_count = channel_count(store, format_version, frame_count)?;

    let positions = required(
        store.read_grid_positions(layout::CHANNEL_COORDS),
        layout::CHANNEL_COORDS,
    )?;
    if positions.len() != channel_count as usize {
        tracing::warn!(
            "Channel coordinate list has {} entries but {} channels were recorded",
            positions.len(),
            channel_count
        );
    }
    let grid_indices = geometry::grid_indices(&positions, n_cols).ok_or_else(|| {
        // Report the first entry the mapping rejected
        let bad = positions
            .iter()
            .position(|&position| geometry::flat_index(position, n_cols).is_none())
            .unwrap_or(0);
        RecordingError::InvalidMetadata {
            field: "Chs",
            value: bad as i64,
        }
    })?;

    tracing::info!(
        "BrainWave data format {} with signal inversion {}",
        format_version.as_raw(),
        signal_inversion
    );
    log_voltage_range(store);

    Ok(RecordingMetadata {
        frame_count,
        sampling_rate_hz,
        signal_inversion,
        channel_count,
        positions,
        grid_indices,
        format_version,
    })
}

/// Recorded channel count, derived per layout version.
///
/// Version 100 stores one row per frame, so the count is the row width of
/// the 2-D raw dataset. Version 101 stores a flat dataset of
/// `frames * channels` codes, so the count is the total length divided by
/// the frame count (floor).
fn channel_count<S: ContainerRead>(
    store: &S,
    format_version: FormatVersion,
    frame_count: u64,
) -> RecordingResult<u32> {
    let dims = required(store.shape(layout::RAW_DATASET), layout::RAW_DATASET)?;
    let count = match (format_version, dims.as_slice()) {
        (FormatVersion::V100, [_, width]) => *width,
        (FormatVersion::V101, [total]) => total / frame_count,
        _ => {
            return Err(RecordingError::Store(StoreError::Layout {
                path: layout::RAW_DATASET.to_string(),
                detail: match format_version {
                    FormatVersion::V100 => "expected a 2-D dataset",
                    FormatVersion::V101 => "expected a flat 1-D dataset",
                },
            }))
        }
    };
    if count == 0 || count > u64::from(u32::MAX) {
        return Err(RecordingError::InvalidMetadata {
            field: "Raw",
            value: count as i64,
        });
    }
    Ok(count as u32)
}

/// Advisory voltage-range diagnostic. The fields are not required; absence
/// just skips the log line.
fn log_voltage_range<S: ContainerRead>(store: &S) {
    if let (Ok(min_volt), Ok(max_volt)) = (
        store.scalar_f64(layout::MIN_VOLT),
        store.scalar_f64(layout::MAX_VOLT),
    ) {
        tracing::info!("Signal range: {min_volt} - {max_volt}");
    }
}
