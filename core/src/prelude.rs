use crate::volume::RadarVolume;
use std::path::Path;

/// Raised when decoded arrays break the volume layout invariants.
#[derive(thiserror::Error, Debug)]
pub enum VolumeError {
    #[error("sweep {sweep}: {reason}")]
    SweepLayout { sweep: usize, reason: String },
    #[error("field {field}: {reason}")]
    FieldShape { field: String, reason: String },
    #[error("invalid volume: {0}")]
    Invalid(String),
}

/// Raised by a decoder during a genuine decode attempt.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decoder command failed: {0}")]
    Command(String),
    #[error("malformed volume dump: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Volume(#[from] VolumeError),
}

/// Raised when a sample point cannot be resolved against a volume.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    #[error("sweep index {index} out of range ({count} sweeps)")]
    SweepOutOfRange { index: usize, count: usize },
    #[error("sweep {0} owns no rays")]
    EmptySweep(usize),
    #[error("volume has no range gates")]
    EmptyRange,
    #[error("no finite distance to target in sweep {0}")]
    NoCandidate(usize),
}

pub type VolumeResult<T> = Result<T, VolumeError>;
pub type DecodeResult<T> = Result<T, DecodeError>;
pub type SampleResult<T> = Result<T, SampleError>;

/// Seam to the external radar-archive decoder.
///
/// Implementations receive the fixture path and an optional station hint and
/// either return a fully validated volume or a decode fault.
pub trait VolumeDecoder {
    fn decode(&self, path: &Path, station: Option<&str>) -> DecodeResult<RadarVolume>;
}

impl<D: VolumeDecoder + ?Sized> VolumeDecoder for Box<D> {
    fn decode(&self, path: &Path, station: Option<&str>) -> DecodeResult<RadarVolume> {
        (**self).decode(path, station)
    }
}

impl<D: VolumeDecoder + ?Sized> VolumeDecoder for &D {
    fn decode(&self, path: &Path, station: Option<&str>) -> DecodeResult<RadarVolume> {
        (**self).decode(path, station)
    }
}
