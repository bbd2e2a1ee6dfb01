//! Golden-value sampling core for weather-radar volume scans.
//!
//! The modules turn a decoded volume into a deterministic snapshot: a
//! nearest-neighbor locator, a golden-value extractor with masked-value
//! normalization, and a per-sweep/per-volume summarizer.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod records;
pub mod telemetry;
pub mod volume;

pub use prelude::{DecodeError, SampleError, VolumeDecoder, VolumeError};
