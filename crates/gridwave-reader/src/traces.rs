//! Channel-major trace selection
//!
//! A decoded frame range is a flat frame-major buffer of
//! `frames * channels` samples. Selection reshapes it to frames-by-channels,
//! transposes, and picks the requested channel rows in the order given.

use crate::error::{RecordingError, RecordingResult};

/// Select channel traces from a decoded frame-major buffer.
///
/// Returns one row per requested channel id, each of `frames` samples, in
/// exactly the requested order; duplicate ids yield duplicate rows. The
/// transpose is performed by strided gathering, without materializing the
/// intermediate frames-by-channels matrix.
///
/// # Errors
///
/// [`RecordingError::ChannelIndex`] if any id is outside
/// `[0, channel_count)`.
pub fn select_channels(
    samples: &[i16],
    frames: usize,
    channel_count: usize,
    channels: &[usize],
) -> RecordingResult<Vec<Vec<i16>>> {
    debug_assert_eq!(samples.len(), frames * channel_count);
    let mut traces = Vec::with_capacity(channels.len());
    for &channel in channels {
        if channel >= channel_count {
            return Err(RecordingError::ChannelIndex {
                id: channel,
                channel_count,
            });
        }
        traces.push(
            (0..frames)
                .map(|frame| samples[frame * channel_count + channel])
                .collect(),
        );
    }
    Ok(traces)
}
