//! Decode variant selection
//!
//! A BrainWave file is decoded by one of four fixed routines, determined
//! by the layout version and the recorded signal-inversion flag. The
//! variant is resolved once when the recording is opened and cached for
//! the session; it fixes both where raw codes are sliced from (per-frame
//! rows vs. the flat interleaved dataset) and the sign of the centering
//! arithmetic.

use serde::{Deserialize, Serialize};

use crate::types::FormatVersion;

/// ADC midpoint of the 12-bit raw codes.
pub const CODE_MIDPOINT: i32 = 2048;

/// Largest centered magnitude accepted as signal.
///
/// Centered samples beyond this are saturation artifacts of the sensor and
/// are forced to zero rather than reported.
pub const CLIP_LIMIT: i32 = 1500;

/// One of the four fixed decode behaviors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecodeVariant {
    /// Per-frame rows, centered as `sample - 2048`
    FrameRowsSigned,
    /// Per-frame rows, centered as `2048 - sample`
    FrameRowsFlipped,
    /// Flat interleaved dataset, centered as `2048 - sample`
    InterleavedFlipped,
    /// Flat interleaved dataset, centered as `sample - 2048`
    InterleavedSigned,
}

impl DecodeVariant {
    /// Select the decode variant for a recording.
    ///
    /// The inversion test is exact equality to `-1`, not a sign test; any
    /// other stored value (including 0) selects the not-inverted variant
    /// for that layout.
    #[must_use]
    pub const fn select(version: FormatVersion, signal_inversion: i64) -> Self {
        match version {
            FormatVersion::V100 => {
                if signal_inversion == -1 {
                    Self::FrameRowsSigned
                } else {
                    Self::FrameRowsFlipped
                }
            }
            FormatVersion::V101 => {
                if signal_inversion != -1 {
                    Self::InterleavedFlipped
                } else {
                    Self::InterleavedSigned
                }
            }
        }
    }

    /// Whether this variant reads the flat interleaved dataset (version
    /// 101 layout) rather than per-frame rows.
    #[inline]
    #[must_use]
    pub const fn is_interleaved(self) -> bool {
        matches!(self, Self::InterleavedFlipped | Self::InterleavedSigned)
    }

    /// Center a raw code around the ADC midpoint and clip saturation.
    ///
    /// The arithmetic runs in `i32` (centered values span `[-2048, 2047]`
    /// before clipping); after clipping the result always fits `i16`.
    #[inline]
    #[must_use]
    pub const fn center(self, code: u16) -> i16 {
        let code = code as i32;
        let value = match self {
            Self::FrameRowsSigned | Self::InterleavedSigned => code - CODE_MIDPOINT,
            Self::FrameRowsFlipped | Self::InterleavedFlipped => CODE_MIDPOINT - code,
        };
        if value > CLIP_LIMIT || value < -CLIP_LIMIT {
            0
        } else {
            value as i16
        }
    }
}
