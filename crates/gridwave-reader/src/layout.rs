//! Fixed logical paths inside a BrainWave container
//!
//! The container is hierarchical (HDF5-compatible); recording metadata
//! lives at well-known paths that have been stable across layout versions
//! 100 and 101. Only the shape of the raw dataset differs between the two.

/// Number of recorded frames (scalar, first element).
pub const NREC_FRAMES: &str = "3BRecInfo/3BRecVars/NRecFrames";

/// Acquisition sampling rate in Hz (scalar, first element).
pub const SAMPLING_RATE: &str = "3BRecInfo/3BRecVars/SamplingRate";

/// Signal-inversion flag (scalar, first element).
pub const SIGNAL_INVERSION: &str = "3BRecInfo/3BRecVars/SignalInversion";

/// Lower bound of the recorded voltage range (diagnostic only).
pub const MIN_VOLT: &str = "3BRecInfo/3BRecVars/MinVolt";

/// Upper bound of the recorded voltage range (diagnostic only).
pub const MAX_VOLT: &str = "3BRecInfo/3BRecVars/MaxVolt";

/// Number of columns on the sensor chip (scalar, first element).
pub const N_COLS: &str = "3BRecInfo/3BMeaChip/NCols";

/// Group carrying the layout `Version` attribute.
pub const DATA_GROUP: &str = "3BData";

/// Name of the layout version attribute on [`DATA_GROUP`].
pub const VERSION_ATTR: &str = "Version";

/// Raw sample dataset: 2-D `[frames][channels]` in version 100, flat 1-D
/// of `frames * channels` codes in version 101.
pub const RAW_DATASET: &str = "3BData/Raw";

/// Ordered electrode `(row, col)` pairs, one per recorded channel.
pub const CHANNEL_COORDS: &str = "3BRecInfo/3BMeaStreams/Raw/Chs";
