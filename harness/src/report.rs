//! Human-readable progress output. Advisory only; nothing parses it.

use goldencore::records::SuccessRecord;
use goldencore::telemetry::RunTally;
use std::path::Path;

const RULE_WIDTH: usize = 60;
const PREVIEW_ELEVATIONS: usize = 5;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn banner(filename: &str) {
    println!("\n{}", rule());
    println!("Processing: {}", filename);
    println!("{}", rule());
}

pub fn missing(name: &str) {
    println!("\n  [MISSING] {} - skipping", name);
}

pub fn expected_failure() {
    println!("  [SKIP] This fixture is expected to fail decoding.");
}

pub fn decode_failure(message: &str) {
    println!("  ERROR reading file: {}", message);
}

pub fn format_elevations(elevations: &[f64]) -> String {
    let preview = elevations
        .iter()
        .take(PREVIEW_ELEVATIONS)
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let ellipsis = if elevations.len() > PREVIEW_ELEVATIONS {
        "..."
    } else {
        ""
    };
    format!("[{}]{}", preview, ellipsis)
}

pub fn success(record: &SuccessRecord) {
    let nyquist = record
        .nyquist_velocity_mps
        .map(|v| v.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    println!("  Station:    {}", record.station);
    println!("  Time:       {}", record.time_start);
    println!("  Sweeps:     {}", record.num_sweeps);
    println!("  Rays:       {}", record.num_rays_total);
    println!("  Gates:      {}", record.num_gates);
    println!("  Fields:     {}", record.available_fields.join(", "));
    println!(
        "  Elevations: {}",
        format_elevations(&record.elevation_angles_deg)
    );
    println!("  Nyquist:    {} m/s", nyquist);
    println!("  Golden pts: {}", record.golden_values.len());
}

pub fn wrote(path: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("  Wrote: {}", name);
}

pub fn run_summary(manifest_path: &Path, tally: &RunTally) {
    println!("\n{}", rule());
    println!("Wrote combined manifest: {}", manifest_path.display());
    println!(
        "Processed {} fixtures ({} decoded, {} decode errors, {} expected failures, {} missing).",
        tally.processed(),
        tally.succeeded,
        tally.decode_failed,
        tally.expected_failures,
        tally.missing
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_preview_truncates_after_five() {
        assert_eq!(format_elevations(&[0.5, 0.9]), "[0.5, 0.9]");
        assert_eq!(
            format_elevations(&[0.5, 0.9, 1.3, 1.8, 2.4, 3.1]),
            "[0.5, 0.9, 1.3, 1.8, 2.4]..."
        );
    }
}
