//! Gridwave Core - data model for 3Brain BrainWave MEA recordings
//!
//! This crate provides the foundational types for the Gridwave platform:
//! the on-disk layout versions, electrode grid geometry, recording
//! metadata, and the decode-variant selection that the reader tier applies
//! to raw sample codes.
//!
//! # Modules
//!
//! - [`types`]: Format version, grid positions, recording metadata
//! - [`geometry`]: Electrode coordinate to flat grid index mapping
//! - [`variant`]: Decode variant selection, sample centering and clipping
//!
//! # Example
//!
//! ```rust
//! use gridwave_core::{DecodeVariant, FormatVersion};
//!
//! // A version-101 file recorded without signal inversion stores samples
//! // interleaved and with flipped polarity.
//! let variant = DecodeVariant::select(FormatVersion::V101, 1);
//! assert_eq!(variant, DecodeVariant::InterleavedFlipped);
//!
//! // Raw codes are centered around the ADC midpoint and clipped.
//! assert_eq!(variant.center(2000), 48);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod geometry;
pub mod types;
pub mod variant;

// Re-export commonly used types at crate root
pub use geometry::{flat_index, grid_indices};
pub use types::{FormatVersion, GridPosition, RecordingMetadata};
pub use variant::{DecodeVariant, CLIP_LIMIT, CODE_MIDPOINT};
