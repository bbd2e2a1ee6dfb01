use crate::math::rounding::round_to;
use crate::processing::locator::locate;
use crate::records::{GoldenValue, SamplePoint};
use crate::volume::{GateValue, RadarVolume};
use indexmap::IndexMap;
use log::debug;

const AZIMUTH_DIGITS: usize = 2;
const RANGE_DIGITS: usize = 3;
const VALUE_DIGITS: usize = 4;

/// Samples every field at the gate nearest to `point`, or `None` when the
/// point's sweep does not exist in this volume.
pub fn extract(volume: &RadarVolume, point: &SamplePoint) -> Option<GoldenValue> {
    let location = match locate(volume, point.sweep_index, point.azimuth_deg, point.range_km) {
        Ok(location) => location,
        Err(err) => {
            debug!("skipping sample {:?}: {}", point, err);
            return None;
        }
    };

    let mut fields = IndexMap::new();
    for (name, field) in volume.fields() {
        let value = match field.gate(location.ray_index, location.gate_index) {
            Some(GateValue::Value(value)) => Some(round_to(f64::from(value), VALUE_DIGITS)),
            Some(GateValue::NoData) => None,
            None => {
                debug!(
                    "skipping sample {:?}: field {} has no cell ({}, {})",
                    point, name, location.ray_index, location.gate_index
                );
                return None;
            }
        };
        fields.insert(name.to_string(), value);
    }

    Some(GoldenValue {
        sweep_index: point.sweep_index,
        target_azimuth_deg: point.azimuth_deg,
        target_range_km: point.range_km,
        actual_azimuth_deg: round_to(location.actual_azimuth_deg, AZIMUTH_DIGITS),
        actual_range_km: round_to(location.actual_range_km, RANGE_DIGITS),
        ray_index: location.ray_index,
        gate_index: location.gate_index,
        fields,
    })
}
