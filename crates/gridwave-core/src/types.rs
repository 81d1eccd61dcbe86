//! Core types for BrainWave recordings
//!
//! This module provides the data model shared by the inspector and decoder
//! tiers: the on-disk layout version, electrode grid positions, and the
//! metadata block assembled once when a recording is opened.

use serde::{Deserialize, Serialize};

// ============================================================================
// Format Version
// ============================================================================

/// On-disk layout version of the raw sample dataset.
///
/// Version 100 stores one row per frame (a 2-D frames-by-channels
/// dataset); version 101 stores a flat 1-D dataset with channels
/// interleaved frame by frame. Any other version on disk is rejected when
/// the recording is opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatVersion {
    /// Per-frame rows: 2-D `[frames][channels]` raw dataset
    V100,
    /// Channel-interleaved: flat 1-D raw dataset of `frames * channels` codes
    V101,
}

impl FormatVersion {
    /// Parse the container's `Version` attribute (returns `None` if the
    /// value names no known layout).
    #[inline]
    #[must_use]
    pub const fn from_raw(version: i64) -> Option<Self> {
        match version {
            100 => Some(Self::V100),
            101 => Some(Self::V101),
            _ => None,
        }
    }

    /// The attribute value this version is stored as.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> i64 {
        match self {
            Self::V100 => 100,
            Self::V101 => 101,
        }
    }
}

// ============================================================================
// Electrode Grid Position
// ============================================================================

/// Physical placement of one electrode on the sensor grid.
///
/// Coordinates are 1-based, exactly as stored in the container's channel
/// stream. The flat grid index derived from a position is computed by
/// [`crate::geometry::flat_index`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    /// Grid row (1-based)
    pub row: u32,
    /// Grid column (1-based)
    pub col: u32,
}

impl GridPosition {
    /// Create a position from 1-based grid coordinates.
    #[inline]
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

// ============================================================================
// Recording Metadata
// ============================================================================

/// Metadata read once when a recording container is opened.
///
/// Assembled by the format inspector and held read-only for the lifetime
/// of the recording session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordingMetadata {
    /// Number of recorded frames
    pub frame_count: u64,
    /// Acquisition sampling rate in Hz
    pub sampling_rate_hz: f64,
    /// Raw signal-inversion flag as stored on disk (`-1` means inverted;
    /// every other value is treated as not inverted)
    pub signal_inversion: i64,
    /// Number of recorded channels
    pub channel_count: u32,
    /// Electrode positions in recorded channel order
    pub positions: Vec<GridPosition>,
    /// Flat grid index of each recorded channel, same order as `positions`
    pub grid_indices: Vec<u32>,
    /// On-disk layout version of the raw dataset
    pub format_version: FormatVersion,
}
