//! Built-in fixture expectations and sample points.

use crate::workflow::config::FixtureEntry;
use goldencore::records::{FixtureExpectation, SamplePoint};

/// (sweep_index, azimuth_deg, range_km) sampled in every fixture.
pub const SAMPLE_POINTS: [SamplePoint; 7] = [
    SamplePoint::new(0, 0.0, 10.0),
    SamplePoint::new(0, 90.0, 25.0),
    SamplePoint::new(0, 180.0, 50.0),
    SamplePoint::new(0, 270.0, 75.0),
    SamplePoint::new(0, 45.0, 100.0),
    SamplePoint::new(1, 0.0, 20.0),
    SamplePoint::new(1, 180.0, 40.0),
];

fn entry(
    name: &str,
    description: &str,
    station: &str,
    expected_vcp: Option<u16>,
    expected_message_type: Option<u8>,
    notes: &str,
) -> FixtureEntry {
    FixtureEntry {
        name: name.to_string(),
        expectation: FixtureExpectation {
            description: description.to_string(),
            station: station.to_string(),
            expected_vcp,
            expected_message_type,
            notes: notes.to_string(),
            expect_failure: false,
        },
    }
}

pub fn default_fixtures() -> Vec<FixtureEntry> {
    let mut truncated = entry(
        "07_truncated.ar2v",
        "Truncated / corrupt file",
        "KLWX",
        None,
        None,
        "First 50KB of fixture 01. Should produce DecodeError::Truncated.",
    );
    truncated.expectation.expect_failure = true;

    vec![
        entry(
            "01_vcp215_standard.ar2v",
            "Standard VCP 215 volume scan",
            "KLWX",
            Some(215),
            Some(31),
            "Baseline test. All modern moments should be present.",
        ),
        entry(
            "02_vcp35_clearair.ar2v",
            "VCP 35 clear-air mode",
            "KLWX",
            Some(35),
            Some(31),
            "Clear-air mode. Fewer tilts, 1.0 deg azimuth resolution.",
        ),
        entry(
            "03_vcp12_severe.ar2v",
            "VCP 12 severe weather mode (Moore EF5 tornado)",
            "KTLX",
            Some(12),
            Some(31),
            "May 20, 2013 Moore EF5 tornado. High tilt count.",
        ),
        entry(
            "04_superres.ar2v",
            "Super-resolution scan (0.5 deg azimuth)",
            "KTLX",
            None,
            Some(31),
            "0.5 deg azimuth, 250m gate spacing at lower tilts.",
        ),
        entry(
            "05_legacy_msg1.ar2v",
            "Legacy Message Type 1 (pre-2008)",
            "KTLX",
            None,
            Some(1),
            "Pre-2008 format. Only REF, VEL, SW. No dual-pol.",
        ),
        entry(
            "06_bzip2_compressed.ar2v",
            "Bzip2-compressed LDM records",
            "KFSX",
            None,
            Some(31),
            "Tests internal bzip2 decompression of LDM records.",
        ),
        truncated,
        entry(
            "08_missing_moments.ar2v",
            "Volume scan with missing/partial moments",
            "KLWX",
            None,
            Some(31),
            "Early dual-pol era. Some moments may be missing.",
        ),
        entry(
            "09_high_altitude_kfsx.ar2v",
            "High-altitude station (KFSX, 7514 ft)",
            "KFSX",
            None,
            Some(31),
            "Tests beam height correction at high station elevation.",
        ),
        entry(
            "10_velocity_aliasing.ar2v",
            "Strong velocity aliasing (El Reno EF5 tornado)",
            "KTLX",
            None,
            Some(31),
            "May 31, 2013 El Reno EF5. Extreme velocities cause aliasing.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_truncated_fixture_expects_failure() {
        let fixtures = default_fixtures();
        assert_eq!(fixtures.len(), 10);
        let failing = fixtures
            .iter()
            .filter(|f| f.expectation.expect_failure)
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(failing, vec!["07_truncated.ar2v"]);
    }

    #[test]
    fn fixtures_are_in_declaration_order() {
        let names = default_fixtures()
            .into_iter()
            .map(|f| f.name)
            .collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
