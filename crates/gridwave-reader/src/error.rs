//! Error types for opening and reading recordings
//!
//! Every failure is terminal for the triggering call: nothing is retried
//! and no partial results are returned.

use thiserror::Error;

use crate::storage::StoreError;

/// Errors produced while opening a recording or extracting traces.
#[derive(Debug, Error)]
pub enum RecordingError {
    /// A required metadata field is absent from the container
    #[error("required metadata missing at {path}")]
    MissingMetadata {
        /// Logical path of the missing field
        path: String,
    },

    /// The container's layout version names no known format
    #[error("unsupported data format version {version}")]
    UnsupportedFormat {
        /// The `Version` attribute value found on disk
        version: i64,
    },

    /// A metadata field is present but unusable
    #[error("invalid value {value} for metadata field {field}")]
    InvalidMetadata {
        /// Field name
        field: &'static str,
        /// The offending value
        value: i64,
    },

    /// The requested operation has no supported read path
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A requested channel id is outside the recorded channel set
    #[error("channel {id} out of range for {channel_count}-channel recording")]
    ChannelIndex {
        /// Requested channel id
        id: usize,
        /// Number of recorded channels
        channel_count: usize,
    },

    /// A requested frame range is invalid for this recording
    #[error("invalid frame range [{start}, {end}) for recording with {frame_count} frames")]
    Range {
        /// Requested start frame (inclusive)
        start: u64,
        /// Requested end frame (exclusive)
        end: u64,
        /// Number of recorded frames
        frame_count: u64,
    },

    /// Container access failed
    #[error("container read failed: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for recording operations.
pub type RecordingResult<T> = Result<T, RecordingError>;
