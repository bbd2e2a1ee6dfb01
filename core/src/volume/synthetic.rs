use crate::prelude::{DecodeResult, VolumeDecoder, VolumeResult};
use crate::volume::radar::{FieldData, RadarVolume, VolumeParts};
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration for generating a seeded synthetic volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub elevations: Vec<f32>,
    pub rays_per_sweep: usize,
    pub gates: usize,
    pub first_gate_m: f32,
    pub gate_spacing_m: f32,
    pub fields: Vec<String>,
    /// Every n-th gate of each ray is flagged as no data; 0 disables masking.
    pub mask_every: usize,
    pub nyquist_velocity: Option<f32>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub time_units: String,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            elevations: vec![0.5, 0.9, 1.3],
            rays_per_sweep: 360,
            gates: 400,
            first_gate_m: 2125.0,
            gate_spacing_m: 250.0,
            fields: vec![
                "reflectivity".into(),
                "velocity".into(),
                "spectrum_width".into(),
            ],
            mask_every: 7,
            nyquist_velocity: Some(26.4),
            latitude: 38.975_278,
            longitude: -77.477_778,
            altitude: 113.0,
            time_units: "seconds since 2024-01-01T00:00:00Z".into(),
            seed: 0,
        }
    }
}

impl SyntheticConfig {
    fn normalized_rays(&self) -> usize {
        self.rays_per_sweep.max(1)
    }
}

fn build_field(config: &SyntheticConfig, rays: usize, rng: &mut StdRng) -> FieldData {
    let gates = config.gates;
    let mut values = Array2::<f32>::zeros((rays, gates));
    let mut mask = Array2::<bool>::from_elem((rays, gates), false);
    for ((ray, gate), value) in values.indexed_iter_mut() {
        let envelope = 1.0 - gate as f32 / gates.max(1) as f32;
        *value = rng.gen_range(-30.0_f32..70.0) * envelope;
        if config.mask_every > 0 && (ray + gate) % config.mask_every == 0 {
            mask[(ray, gate)] = true;
        }
    }
    FieldData::new(values).with_mask(mask)
}

/// Builds a volume whose sweeps each hold `rays_per_sweep` evenly spaced rays.
pub fn build_volume(config: &SyntheticConfig) -> VolumeResult<RadarVolume> {
    let rays_per_sweep = config.normalized_rays();
    let sweeps = config.elevations.len();
    let rays = sweeps * rays_per_sweep;
    let step = 360.0 / rays_per_sweep as f32;

    let azimuth = (0..sweeps)
        .flat_map(|_| (0..rays_per_sweep).map(move |ray| ray as f32 * step))
        .collect::<Vec<_>>();
    let range = (0..config.gates)
        .map(|gate| config.first_gate_m + gate as f32 * config.gate_spacing_m)
        .collect();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let fields = config
        .fields
        .iter()
        .map(|name| (name.clone(), build_field(config, rays, &mut rng)))
        .collect();

    let instrument_parameters = config.nyquist_velocity.map(|nyquist| {
        let mut params = BTreeMap::new();
        params.insert("nyquist_velocity".to_string(), vec![nyquist; rays]);
        params
    });

    RadarVolume::new(VolumeParts {
        time_units: config.time_units.clone(),
        latitude: vec![config.latitude; rays.max(1)],
        longitude: vec![config.longitude; rays.max(1)],
        altitude: vec![config.altitude; rays.max(1)],
        fixed_angle: config.elevations.clone(),
        sweep_start_ray_index: (0..sweeps).map(|s| s * rays_per_sweep).collect(),
        sweep_end_ray_index: (0..sweeps).map(|s| (s + 1) * rays_per_sweep - 1).collect(),
        azimuth,
        range,
        fields,
        instrument_parameters,
    })
}

/// Decoder stand-in that returns the same seeded volume for every path.
#[derive(Debug, Clone)]
pub struct SyntheticDecoder {
    config: SyntheticConfig,
}

impl SyntheticDecoder {
    pub fn new(config: SyntheticConfig) -> Self {
        Self { config }
    }
}

impl VolumeDecoder for SyntheticDecoder {
    fn decode(&self, _path: &Path, _station: Option<&str>) -> DecodeResult<RadarVolume> {
        Ok(build_volume(&self.config)?)
    }
}
