pub mod dump;
pub mod radar;
pub mod synthetic;

pub use dump::{FieldDump, VolumeDump};
pub use radar::{FieldData, GateValue, RadarVolume, VolumeParts};
pub use synthetic::{build_volume, SyntheticConfig, SyntheticDecoder};
