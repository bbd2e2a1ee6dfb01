use crate::math::search::argmin_abs_diff;
use crate::prelude::{SampleError, SampleResult};
use crate::volume::RadarVolume;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub ray_index: usize,
    pub gate_index: usize,
    pub actual_azimuth_deg: f64,
    pub actual_range_km: f64,
}

/// Finds the ray and gate nearest to (azimuth, range) inside one sweep.
///
/// Azimuth distance is the plain absolute difference, so rays on the far side
/// of the 0/360 seam are not considered close. Distances are taken in f32,
/// the precision of the decoded arrays, and ties resolve to the lowest index.
pub fn locate(
    volume: &RadarVolume,
    sweep_index: usize,
    target_azimuth_deg: f64,
    target_range_km: f64,
) -> SampleResult<Location> {
    let (start, end) = volume
        .sweep_span(sweep_index)
        .ok_or(SampleError::SweepOutOfRange {
            index: sweep_index,
            count: volume.nsweeps(),
        })?;
    let azimuths = volume
        .azimuths()
        .get(start..=end)
        .filter(|span| !span.is_empty())
        .ok_or(SampleError::EmptySweep(sweep_index))?;
    let az_offset = argmin_abs_diff(azimuths, target_azimuth_deg as f32)
        .ok_or(SampleError::NoCandidate(sweep_index))?;

    let ranges_km = volume
        .ranges_m()
        .iter()
        .map(|meters| meters / 1000.0)
        .collect::<Vec<f32>>();
    if ranges_km.is_empty() {
        return Err(SampleError::EmptyRange);
    }
    let gate_index = argmin_abs_diff(&ranges_km, target_range_km as f32)
        .ok_or(SampleError::NoCandidate(sweep_index))?;

    Ok(Location {
        ray_index: start + az_offset,
        gate_index,
        actual_azimuth_deg: f64::from(azimuths[az_offset]),
        actual_range_km: f64::from(ranges_km[gate_index]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::{FieldData, VolumeParts};
    use ndarray::Array2;

    fn volume_with(azimuth: Vec<f32>, spans: &[(usize, usize)], range: Vec<f32>) -> RadarVolume {
        let rays = azimuth.len();
        let gates = range.len();
        RadarVolume::new(VolumeParts {
            time_units: "seconds since 2020-01-01T00:00:00Z".into(),
            latitude: vec![0.0],
            longitude: vec![0.0],
            altitude: vec![0.0],
            fixed_angle: spans.iter().map(|_| 0.5).collect(),
            sweep_start_ray_index: spans.iter().map(|s| s.0).collect(),
            sweep_end_ray_index: spans.iter().map(|s| s.1).collect(),
            azimuth,
            range,
            fields: vec![(
                "reflectivity".into(),
                FieldData::new(Array2::zeros((rays, gates))),
            )],
            instrument_parameters: None,
        })
        .unwrap()
    }

    #[test]
    fn locates_within_requested_sweep() {
        let volume = volume_with(
            vec![0.0, 90.0, 180.0, 270.0, 0.5, 90.5, 180.5, 270.5],
            &[(0, 3), (4, 7)],
            vec![1000.0, 2000.0, 3000.0],
        );
        let location = locate(&volume, 1, 180.0, 2.2).unwrap();
        assert_eq!(location.ray_index, 6);
        assert_eq!(location.gate_index, 1);
        assert_eq!(location.actual_azimuth_deg, 180.5);
        assert_eq!(location.actual_range_km, 2.0);
    }

    #[test]
    fn out_of_range_sweep_is_reported() {
        let volume = volume_with(vec![0.0, 180.0], &[(0, 1)], vec![1000.0]);
        assert_eq!(
            locate(&volume, 5, 0.0, 1.0),
            Err(SampleError::SweepOutOfRange { index: 5, count: 1 })
        );
    }

    #[test]
    fn equidistant_rays_resolve_to_lowest_index() {
        let volume = volume_with(vec![350.0, 10.0, 350.0], &[(0, 2)], vec![500.0, 1500.0]);
        let location = locate(&volume, 0, 180.0, 1.0).unwrap();
        assert_eq!(location.ray_index, 0);
        assert_eq!(location.gate_index, 0);
    }

    #[test]
    fn azimuth_seam_is_not_wrapped() {
        let volume = volume_with(vec![1.0, 200.0], &[(0, 1)], vec![1000.0]);
        let location = locate(&volume, 0, 359.0, 1.0).unwrap();
        assert_eq!(location.ray_index, 1);
    }

    #[test]
    fn indices_stay_inside_sweep_and_gate_bounds() {
        let volume = volume_with(
            vec![0.0, 120.0, 240.0, 0.0, 120.0, 240.0],
            &[(0, 2), (3, 5)],
            vec![250.0, 500.0, 750.0, 1000.0],
        );
        for sweep in 0..2 {
            for az in [0.0, 45.0, 359.9, 720.0, -10.0] {
                for range_km in [0.0, 0.6, 100.0] {
                    let loc = locate(&volume, sweep, az, range_km).unwrap();
                    let (start, end) = volume.sweep_span(sweep).unwrap();
                    assert!(loc.ray_index >= start && loc.ray_index <= end);
                    assert!(loc.gate_index < volume.ngates());
                }
            }
        }
    }
}
