use crate::math::rounding::round_to;
use crate::math::stats::StatsHelper;
use crate::records::{SiteInfo, SweepDetail};
use crate::volume::RadarVolume;

const TIME_UNITS_PREFIX: &str = "seconds since ";
const NYQUIST_PARAMETER: &str = "nyquist_velocity";

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSummary {
    pub site: SiteInfo,
    /// Reference time exactly as the decoder reports it, minus the unit prefix.
    pub time_start: String,
    pub num_sweeps: usize,
    pub num_rays_total: usize,
    pub num_gates: usize,
    pub elevation_angles_deg: Vec<f64>,
    pub available_fields: Vec<String>,
    pub sweep_details: Vec<SweepDetail>,
    pub nyquist_velocity_mps: Option<f64>,
}

pub fn summarize(volume: &RadarVolume) -> VolumeSummary {
    let num_gates = volume.ngates();
    let elevation_angles_deg = volume
        .fixed_angles()
        .iter()
        .map(|&angle| round_to(f64::from(angle), 2))
        .collect::<Vec<_>>();

    let sweep_details = elevation_angles_deg
        .iter()
        .enumerate()
        .filter_map(|(sweep_index, &elevation_deg)| {
            let (start, end) = volume.sweep_span(sweep_index)?;
            Some(SweepDetail {
                sweep_index,
                elevation_deg,
                num_radials: end - start + 1,
                num_gates,
            })
        })
        .collect();

    let (latitude, longitude, altitude) = volume.site();

    VolumeSummary {
        site: SiteInfo {
            latitude: round_to(latitude, 6),
            longitude: round_to(longitude, 6),
            altitude_m: round_to(altitude, 2),
        },
        time_start: volume.time_units().replace(TIME_UNITS_PREFIX, ""),
        num_sweeps: volume.nsweeps(),
        num_rays_total: volume.nrays(),
        num_gates,
        elevation_angles_deg,
        available_fields: volume.field_names(),
        sweep_details,
        nyquist_velocity_mps: mean_nyquist_velocity(volume),
    }
}

/// Mean Nyquist velocity over every reported ray, rounded to 2 places.
///
/// `None` when the decoder exposes no such parameter or no finite value.
pub fn mean_nyquist_velocity(volume: &RadarVolume) -> Option<f64> {
    let values = volume.instrument_parameter(NYQUIST_PARAMETER)?;
    StatsHelper::finite_mean(values).map(|mean| round_to(mean, 2))
}
