use crate::prelude::{VolumeError, VolumeResult};
use ndarray::Array2;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateValue {
    Value(f32),
    NoData,
}

/// A ray × gate grid of one measured quantity.
///
/// A cell counts as "no data" when its mask bit is set, when it equals the
/// decoder's fill value, or when it is not finite.
#[derive(Debug, Clone)]
pub struct FieldData {
    values: Array2<f32>,
    mask: Option<Array2<bool>>,
    fill_value: Option<f32>,
}

impl FieldData {
    pub fn new(values: Array2<f32>) -> Self {
        Self {
            values,
            mask: None,
            fill_value: None,
        }
    }

    pub fn with_mask(mut self, mask: Array2<bool>) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_fill_value(mut self, fill_value: f32) -> Self {
        self.fill_value = Some(fill_value);
        self
    }

    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Returns `None` when the cell lies outside the grid.
    pub fn gate(&self, ray: usize, gate: usize) -> Option<GateValue> {
        let value = *self.values.get((ray, gate))?;
        let masked = self
            .mask
            .as_ref()
            .and_then(|mask| mask.get((ray, gate)).copied())
            .unwrap_or(false);
        if masked || !value.is_finite() || self.fill_value == Some(value) {
            Some(GateValue::NoData)
        } else {
            Some(GateValue::Value(value))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VolumeParts {
    pub time_units: String,
    pub latitude: Vec<f64>,
    pub longitude: Vec<f64>,
    pub altitude: Vec<f64>,
    pub fixed_angle: Vec<f32>,
    pub sweep_start_ray_index: Vec<usize>,
    pub sweep_end_ray_index: Vec<usize>,
    pub azimuth: Vec<f32>,
    pub range: Vec<f32>,
    pub fields: Vec<(String, FieldData)>,
    pub instrument_parameters: Option<BTreeMap<String, Vec<f32>>>,
}

/// A decoded volume scan. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct RadarVolume {
    parts: VolumeParts,
}

impl RadarVolume {
    pub fn new(parts: VolumeParts) -> VolumeResult<Self> {
        let sweeps = parts.fixed_angle.len();
        if parts.sweep_start_ray_index.len() != sweeps || parts.sweep_end_ray_index.len() != sweeps
        {
            return Err(VolumeError::Invalid(format!(
                "{} fixed angles but {} start / {} end indices",
                sweeps,
                parts.sweep_start_ray_index.len(),
                parts.sweep_end_ray_index.len()
            )));
        }

        let rays = parts.azimuth.len();
        let mut next_ray = 0;
        for (sweep, (&start, &end)) in parts
            .sweep_start_ray_index
            .iter()
            .zip(&parts.sweep_end_ray_index)
            .enumerate()
        {
            if start != next_ray {
                return Err(VolumeError::SweepLayout {
                    sweep,
                    reason: format!("starts at ray {} but ray {} is next", start, next_ray),
                });
            }
            if end < start {
                return Err(VolumeError::SweepLayout {
                    sweep,
                    reason: format!("ends at ray {} before it starts at {}", end, start),
                });
            }
            next_ray = end + 1;
        }
        if next_ray != rays {
            return Err(VolumeError::Invalid(format!(
                "sweeps cover {} rays but {} azimuths were decoded",
                next_ray, rays
            )));
        }

        if parts.latitude.is_empty() || parts.longitude.is_empty() || parts.altitude.is_empty() {
            return Err(VolumeError::Invalid("missing site position".into()));
        }

        let gates = parts.range.len();
        for (name, field) in &parts.fields {
            if field.shape() != (rays, gates) {
                return Err(VolumeError::FieldShape {
                    field: name.clone(),
                    reason: format!("shape {:?}, expected ({}, {})", field.shape(), rays, gates),
                });
            }
            if let Some(mask) = &field.mask {
                if mask.dim() != (rays, gates) {
                    return Err(VolumeError::FieldShape {
                        field: name.clone(),
                        reason: format!("mask shape {:?}, expected ({}, {})", mask.dim(), rays, gates),
                    });
                }
            }
        }

        Ok(Self { parts })
    }

    pub fn nsweeps(&self) -> usize {
        self.parts.fixed_angle.len()
    }

    pub fn nrays(&self) -> usize {
        self.parts.azimuth.len()
    }

    pub fn ngates(&self) -> usize {
        self.parts.range.len()
    }

    /// Inclusive (start, end) ray indices owned by a sweep.
    pub fn sweep_span(&self, sweep: usize) -> Option<(usize, usize)> {
        let start = *self.parts.sweep_start_ray_index.get(sweep)?;
        let end = *self.parts.sweep_end_ray_index.get(sweep)?;
        Some((start, end))
    }

    pub fn fixed_angles(&self) -> &[f32] {
        &self.parts.fixed_angle
    }

    pub fn azimuths(&self) -> &[f32] {
        &self.parts.azimuth
    }

    pub fn ranges_m(&self) -> &[f32] {
        &self.parts.range
    }

    pub fn time_units(&self) -> &str {
        &self.parts.time_units
    }

    /// Site position as reported on the first ray: (latitude, longitude, altitude).
    pub fn site(&self) -> (f64, f64, f64) {
        (
            self.parts.latitude[0],
            self.parts.longitude[0],
            self.parts.altitude[0],
        )
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldData)> {
        self.parts
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
    }

    pub fn field(&self, name: &str) -> Option<&FieldData> {
        self.fields()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, field)| field)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.parts.fields.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Looks up an instrument parameter; absence is not an error.
    pub fn instrument_parameter(&self, name: &str) -> Option<&[f32]> {
        self.parts
            .instrument_parameters
            .as_ref()?
            .get(name)
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_sweep_parts() -> VolumeParts {
        VolumeParts {
            time_units: "seconds since 2013-05-20T19:50:00Z".into(),
            latitude: vec![35.333],
            longitude: vec![-97.278],
            altitude: vec![390.0],
            fixed_angle: vec![0.5, 1.5],
            sweep_start_ray_index: vec![0, 2],
            sweep_end_ray_index: vec![1, 3],
            azimuth: vec![0.0, 180.0, 0.0, 180.0],
            range: vec![1000.0, 2000.0],
            fields: vec![(
                "reflectivity".into(),
                FieldData::new(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]),
            )],
            instrument_parameters: None,
        }
    }

    #[test]
    fn accepts_contiguous_sweeps() {
        let volume = RadarVolume::new(two_sweep_parts()).unwrap();
        assert_eq!(volume.nsweeps(), 2);
        assert_eq!(volume.nrays(), 4);
        assert_eq!(volume.ngates(), 2);
        assert_eq!(volume.sweep_span(1), Some((2, 3)));
        assert_eq!(volume.sweep_span(2), None);
    }

    #[test]
    fn rejects_gap_between_sweeps() {
        let mut parts = two_sweep_parts();
        parts.sweep_start_ray_index = vec![0, 3];
        assert!(matches!(
            RadarVolume::new(parts),
            Err(VolumeError::SweepLayout { sweep: 1, .. })
        ));
    }

    #[test]
    fn rejects_field_with_wrong_gate_count() {
        let mut parts = two_sweep_parts();
        parts.range.push(3000.0);
        assert!(matches!(
            RadarVolume::new(parts),
            Err(VolumeError::FieldShape { .. })
        ));
    }

    #[test]
    fn masked_fill_and_nan_cells_are_no_data() {
        let field = FieldData::new(array![[1.0, -9999.0], [f32::NAN, 4.0]])
            .with_mask(array![[false, false], [false, true]])
            .with_fill_value(-9999.0);
        assert_eq!(field.gate(0, 0), Some(GateValue::Value(1.0)));
        assert_eq!(field.gate(0, 1), Some(GateValue::NoData));
        assert_eq!(field.gate(1, 0), Some(GateValue::NoData));
        assert_eq!(field.gate(1, 1), Some(GateValue::NoData));
        assert_eq!(field.gate(2, 0), None);
    }

    #[test]
    fn missing_instrument_parameters_are_soft() {
        let volume = RadarVolume::new(two_sweep_parts()).unwrap();
        assert!(volume.instrument_parameter("nyquist_velocity").is_none());
    }
}
