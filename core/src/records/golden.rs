use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub sweep_index: usize,
    pub azimuth_deg: f64,
    pub range_km: f64,
}

impl SamplePoint {
    pub const fn new(sweep_index: usize, azimuth_deg: f64, range_km: f64) -> Self {
        Self {
            sweep_index,
            azimuth_deg,
            range_km,
        }
    }
}

/// Coordinates and values are already rounded. `fields` follows the
/// decoder's field order; `None` marks a gate without data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenValue {
    pub sweep_index: usize,
    pub target_azimuth_deg: f64,
    pub target_range_km: f64,
    pub actual_azimuth_deg: f64,
    pub actual_range_km: f64,
    pub ray_index: usize,
    pub gate_index: usize,
    pub fields: IndexMap<String, Option<f64>>,
}
