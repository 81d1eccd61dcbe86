//! Recording session
//!
//! [`MeaRecording`] owns a read-only container handle for its lifetime,
//! inspects the format once at open time, caches the selected decode
//! variant, and serves trace requests. Closing the underlying container is
//! the owner's responsibility once the session is dropped.

use gridwave_core::{DecodeVariant, GridPosition, RecordingMetadata};

use crate::decode::decode_frames;
use crate::error::{RecordingError, RecordingResult};
use crate::inspect::inspect;
use crate::storage::ContainerRead;
use crate::traces::select_channels;

/// An open multi-electrode-array recording.
pub struct MeaRecording<S> {
    store: S,
    metadata: RecordingMetadata,
    variant: DecodeVariant,
}

impl<S: ContainerRead> MeaRecording<S> {
    /// Open a recording: inspect the container and cache the decode
    /// variant for the session.
    ///
    /// # Errors
    ///
    /// Any inspection failure (see [`inspect`]) is terminal; no session is
    /// created.
    pub fn open(store: S) -> RecordingResult<Self> {
        let metadata = inspect(&store)?;
        let variant = DecodeVariant::select(metadata.format_version, metadata.signal_inversion);
        tracing::debug!("Selected decode variant {:?}", variant);
        Ok(Self {
            store,
            metadata,
            variant,
        })
    }

    /// Open a recording split across container segments.
    ///
    /// # Errors
    ///
    /// Multi-segment recordings are not supported: anything other than
    /// exactly one segment fails with
    /// [`RecordingError::UnsupportedOperation`] before any container is
    /// touched.
    pub fn open_segments(mut stores: Vec<S>) -> RecordingResult<Self> {
        if stores.len() != 1 {
            return Err(RecordingError::UnsupportedOperation(
                "multi-segment recordings are not supported",
            ));
        }
        Self::open(stores.remove(0))
    }

    /// Number of recorded channels.
    #[must_use]
    pub fn channel_count(&self) -> u32 {
        self.metadata.channel_count
    }

    /// Number of recorded frames.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.metadata.frame_count
    }

    /// Acquisition sampling rate in Hz.
    #[must_use]
    pub fn sampling_rate_hz(&self) -> f64 {
        self.metadata.sampling_rate_hz
    }

    /// Full metadata block assembled at open time.
    #[must_use]
    pub fn metadata(&self) -> &RecordingMetadata {
        &self.metadata
    }

    /// The decode variant cached for this session.
    #[must_use]
    pub fn variant(&self) -> DecodeVariant {
        self.variant
    }

    /// Decode raw traces as a channel-major matrix.
    ///
    /// `start`/`end` default to the full recording; `channels` defaults to
    /// natural order `0..channel_count`. The result has one row per
    /// requested channel (duplicates permitted, order preserved), each
    /// with `end - start` samples.
    ///
    /// # Errors
    ///
    /// - [`RecordingError::Range`] if `start > end` or `end` exceeds the
    ///   frame count (validated before any decode is attempted)
    /// - [`RecordingError::ChannelIndex`] for channel ids outside
    ///   `[0, channel_count)`
    /// - store failures from the container adapter
    pub fn raw_traces(
        &self,
        start: Option<u64>,
        end: Option<u64>,
        channels: Option<&[usize]>,
    ) -> RecordingResult<Vec<Vec<i16>>> {
        let frame_count = self.metadata.frame_count;
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(frame_count);
        if start > end || end > frame_count {
            return Err(RecordingError::Range {
                start,
                end,
                frame_count,
            });
        }

        let samples = decode_frames(
            &self.store,
            self.variant,
            start,
            end,
            self.metadata.channel_count,
        )?;
        let frames = (end - start) as usize;
        let channel_count = self.metadata.channel_count as usize;
        match channels {
            Some(ids) => select_channels(&samples, frames, channel_count, ids),
            None => {
                let natural: Vec<usize> = (0..channel_count).collect();
                select_channels(&samples, frames, channel_count, &natural)
            }
        }
    }

    /// On-disk grid placement of a channel.
    ///
    /// # Errors
    ///
    /// [`RecordingError::ChannelIndex`] if the id is out of range.
    pub fn channel_location(&self, channel: usize) -> RecordingResult<GridPosition> {
        self.metadata
            .positions
            .get(channel)
            .copied()
            .ok_or(RecordingError::ChannelIndex {
                id: channel,
                channel_count: self.metadata.positions.len(),
            })
    }

    /// Flat grid index of a channel (`(col-1) + (row-1) * n_cols`).
    ///
    /// # Errors
    ///
    /// [`RecordingError::ChannelIndex`] if the id is out of range.
    pub fn channel_grid_index(&self, channel: usize) -> RecordingResult<u32> {
        self.metadata
            .grid_indices
            .get(channel)
            .copied()
            .ok_or(RecordingError::ChannelIndex {
                id: channel,
                channel_count: self.metadata.grid_indices.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwave_core::FormatVersion;
    use crate::layout;
    use crate::storage::MemContainer;

    const FRAMES: u64 = 60;
    const CHANNELS: u64 = 4;

    /// Synthetic code for frame `f`, channel `c`: distinct per cell and
    /// inside the clip window for flipped centering.
    fn code(frame: u64, channel: u64) -> u16 {
        (1000 + frame * CHANNELS + channel) as u16
    }

    /// Version-101 container: 60 frames x 4 channels.
    fn v101_container() -> MemContainer {
        let mut container = MemContainer::new();
        container.put_scalar_i64(layout::NREC_FRAMES, FRAMES as i64);
        container.put_scalar_f64(layout::SAMPLING_RATE, 17855.5);
        container.put_scalar_i64(layout::SIGNAL_INVERSION, 1);
        container.put_scalar_i64(layout::N_COLS, 64);
        container.put_scalar_f64(layout::MIN_VOLT, -4125.0);
        container.put_scalar_f64(layout::MAX_VOLT, 4125.0);
        container.put_attr(layout::DATA_GROUP, layout::VERSION_ATTR, 101);
        container.put_flat(
            layout::RAW_DATASET,
            (0..FRAMES * CHANNELS).map(|i| 1000 + i as u16).collect(),
        );
        container.put_grid_positions(
            layout::CHANNEL_COORDS,
            vec![
                GridPosition::new(1, 1),
                GridPosition::new(1, 2),
                GridPosition::new(2, 1),
                GridPosition::new(2, 2),
            ],
        );
        container
    }

    /// Version-100 container with the same contents in per-frame rows.
    fn v100_container() -> MemContainer {
        let mut container = v101_container();
        container.put_attr(layout::DATA_GROUP, layout::VERSION_ATTR, 100);
        container.put_rows(
            layout::RAW_DATASET,
            (0..FRAMES * CHANNELS).map(|i| 1000 + i as u16).collect(),
            CHANNELS,
        );
        container
    }

    #[test]
    fn test_open_caches_selected_variant() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        assert_eq!(recording.variant(), DecodeVariant::InterleavedFlipped);
        assert_eq!(
            recording.metadata().format_version,
            FormatVersion::V101
        );

        let recording = MeaRecording::open(v100_container()).unwrap();
        assert_eq!(recording.variant(), DecodeVariant::FrameRowsFlipped);
    }

    #[test]
    fn test_full_range_shape_is_channels_by_frames() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        let traces = recording.raw_traces(None, None, None).unwrap();
        assert_eq!(traces.len(), CHANNELS as usize);
        assert!(traces.iter().all(|row| row.len() == FRAMES as usize));
    }

    #[test]
    fn test_traces_are_channel_major_and_centered() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        let traces = recording.raw_traces(Some(5), Some(8), None).unwrap();
        for channel in 0..CHANNELS {
            let expected: Vec<i16> = (5..8)
                .map(|frame| (2048 - i32::from(code(frame, channel))) as i16)
                .collect();
            assert_eq!(traces[channel as usize], expected);
        }
    }

    #[test]
    fn test_v100_and_v101_agree_on_same_codes() {
        let from_flat = MeaRecording::open(v101_container())
            .unwrap()
            .raw_traces(Some(10), Some(20), None)
            .unwrap();
        let from_rows = MeaRecording::open(v100_container())
            .unwrap()
            .raw_traces(Some(10), Some(20), None)
            .unwrap();
        assert_eq!(from_flat, from_rows);
    }

    #[test]
    fn test_duplicate_channel_selection() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        let traces = recording.raw_traces(None, None, Some(&[3, 1, 1])).unwrap();
        assert_eq!(traces.len(), 3);
        assert_eq!(traces[1], traces[2]);
        assert_ne!(traces[0], traces[1]);
    }

    #[test]
    fn test_empty_range_yields_zero_columns() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        let traces = recording.raw_traces(Some(0), Some(0), None).unwrap();
        assert_eq!(traces.len(), CHANNELS as usize);
        assert!(traces.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_reversed_range_is_range_error() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        assert!(matches!(
            recording.raw_traces(Some(50), Some(10), None),
            Err(RecordingError::Range {
                start: 50,
                end: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_range_past_end_is_range_error() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        assert!(matches!(
            recording.raw_traces(Some(0), Some(FRAMES + 1), None),
            Err(RecordingError::Range { .. })
        ));
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        let first = recording.raw_traces(Some(0), Some(30), None).unwrap();
        let second = recording.raw_traces(Some(0), Some(30), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_segment_open() {
        let recording = MeaRecording::open_segments(vec![v101_container()]).unwrap();
        assert_eq!(recording.channel_count(), CHANNELS as u32);
    }

    #[test]
    fn test_multi_segment_open_is_rejected() {
        let stores = vec![v101_container(), v101_container()];
        assert!(matches!(
            MeaRecording::open_segments(stores),
            Err(RecordingError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            MeaRecording::<MemContainer>::open_segments(vec![]),
            Err(RecordingError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_channel_location_and_grid_index() {
        let recording = MeaRecording::open(v101_container()).unwrap();
        assert_eq!(recording.channel_location(2).unwrap(), GridPosition::new(2, 1));
        assert_eq!(recording.channel_grid_index(2).unwrap(), 64);
        assert!(matches!(
            recording.channel_location(4),
            Err(RecordingError::ChannelIndex { id: 4, .. })
        ));
    }

    #[test]
    fn test_unsupported_version_fails_open() {
        let mut container = v101_container();
        container.put_attr(layout::DATA_GROUP, layout::VERSION_ATTR, 42);
        assert!(matches!(
            MeaRecording::open(container),
            Err(RecordingError::UnsupportedFormat { version: 42 })
        ));
    }
}
