//! Raw frame decoding
//!
//! Extracts a frame range from the raw dataset, centers the codes around
//! the ADC midpoint with the variant's polarity, and clips saturation
//! artifacts. Output is a flat frame-major sequence; channel-major
//! selection happens in [`crate::traces`].

use gridwave_core::DecodeVariant;

use crate::error::{RecordingError, RecordingResult};
use crate::layout;
use crate::storage::ContainerRead;

/// Decode frames `[start, end)` into centered, clipped samples.
///
/// Per-frame-row variants slice the 2-D raw dataset directly by frame
/// index; interleaved variants slice the flat dataset over
/// `[channels * start, channels * end)` and reshape row-major, which on a
/// row-major flat buffer is the identity. Either way the result is
/// `(end - start) * channels` samples in frame-major order.
///
/// # Errors
///
/// Reversed ranges fail with [`RecordingError::UnsupportedOperation`]:
/// there is no reverse-read path. Store failures pass through.
pub fn decode_frames<S: ContainerRead>(
    store: &S,
    variant: DecodeVariant,
    start: u64,
    end: u64,
    channels: u32,
) -> RecordingResult<Vec<i16>> {
    if start > end {
        return Err(RecordingError::UnsupportedOperation(
            "reversed frame reads are not supported",
        ));
    }
    let channels = u64::from(channels);
    let codes = if variant.is_interleaved() {
        store.read_flat(layout::RAW_DATASET, channels * start..channels * end)?
    } else {
        store.read_rows(layout::RAW_DATASET, start..end)?
    };
    debug_assert_eq!(codes.len() as u64, (end - start) * channels);
    Ok(codes.into_iter().map(|code| variant.center(code)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemContainer;

    /// Flat version-101 dataset: 10 frames x 4 channels, code = 2000 + index.
    fn interleaved_store() -> MemContainer {
        let mut container = MemContainer::new();
        container.put_flat(
            layout::RAW_DATASET,
            (0..40).map(|i| 2000 + i as u16).collect(),
        );
        container
    }

    /// 2-D version-100 dataset with the same codes, 4 columns per frame.
    fn frame_row_store() -> MemContainer {
        let mut container = MemContainer::new();
        container.put_rows(
            layout::RAW_DATASET,
            (0..40).map(|i| 2000 + i as u16).collect(),
            4,
        );
        container
    }

    #[test]
    fn test_interleaved_decode_slices_flat_range() {
        // Frames [2, 4) of a 4-channel recording slice elements [8, 16),
        // reshape to (2, 4), flatten, and center as 2048 - code.
        let samples = decode_frames(
            &interleaved_store(),
            DecodeVariant::InterleavedFlipped,
            2,
            4,
            4,
        )
        .unwrap();
        assert_eq!(samples, vec![40, 39, 38, 37, 36, 35, 34, 33]);
    }

    #[test]
    fn test_frame_row_decode_slices_by_frame() {
        let samples =
            decode_frames(&frame_row_store(), DecodeVariant::FrameRowsSigned, 2, 4, 4).unwrap();
        // code - 2048 for codes 2008..2016
        assert_eq!(samples, vec![-40, -39, -38, -37, -36, -35, -34, -33]);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let store = interleaved_store();
        let first = decode_frames(&store, DecodeVariant::InterleavedFlipped, 0, 10, 4).unwrap();
        let second = decode_frames(&store, DecodeVariant::InterleavedFlipped, 0, 10, 4).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 40);
    }

    #[test]
    fn test_decoded_samples_obey_clip_law() {
        let mut container = MemContainer::new();
        // Mix of in-range codes and saturation artifacts
        container.put_flat(layout::RAW_DATASET, vec![2048, 4095, 0, 2500, 3600, 600]);
        let samples =
            decode_frames(&container, DecodeVariant::InterleavedSigned, 0, 3, 2).unwrap();
        assert_eq!(samples, vec![0, 0, 0, 452, 0, -1448]);
        assert!(samples.iter().all(|&s| i32::from(s).abs() <= 1500));
    }

    #[test]
    fn test_empty_range_decodes_to_nothing() {
        let samples = decode_frames(
            &interleaved_store(),
            DecodeVariant::InterleavedFlipped,
            3,
            3,
            4,
        )
        .unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_reversed_range_is_unsupported() {
        assert!(matches!(
            decode_frames(
                &interleaved_store(),
                DecodeVariant::InterleavedFlipped,
                4,
                2,
                4
            ),
            Err(RecordingError::UnsupportedOperation(_))
        ));
    }
}
