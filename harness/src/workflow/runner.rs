use crate::report;
use crate::workflow::config::{FixtureEntry, DEFAULT_MANIFEST_NAME};
use anyhow::Context;
use goldencore::prelude::VolumeDecoder;
use goldencore::processing::{extract, summarize};
use goldencore::records::{FixtureExpectation, FixtureMetadata, Manifest, SamplePoint, SuccessRecord};
use goldencore::telemetry::{LogManager, Outcome, RunTally};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffixes stripped when a declared compressed fixture is only present decompressed.
const COMPRESSION_SUFFIXES: [&str; 2] = [".gz", ".bz2"];

/// Locates a declared fixture, falling back to its decompressed name.
pub fn resolve_fixture_path(fixtures_dir: &Path, name: &str) -> Option<PathBuf> {
    let primary = fixtures_dir.join(name);
    if primary.is_file() {
        return Some(primary);
    }
    let stripped = COMPRESSION_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))?;
    let fallback = fixtures_dir.join(stripped);
    fallback.is_file().then_some(fallback)
}

/// `<fixture path without extension>.json`
pub fn sidecar_path(fixture_path: &Path) -> PathBuf {
    fixture_path.with_extension("json")
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("serializing {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/// Drives decoding, summarizing and sampling over the declared fixtures.
pub struct Runner<D> {
    decoder: D,
    sample_points: Vec<SamplePoint>,
    manifest_name: String,
    tally: RunTally,
}

impl<D: VolumeDecoder> Runner<D> {
    pub fn new(decoder: D, sample_points: Vec<SamplePoint>) -> Self {
        Self {
            decoder,
            sample_points,
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            tally: RunTally::new(),
        }
    }

    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    pub fn tally(&self) -> RunTally {
        self.tally
    }

    pub fn manifest_path(&self, fixtures_dir: &Path) -> PathBuf {
        fixtures_dir.join(&self.manifest_name)
    }

    /// Processes every fixture in declaration order and writes the sidecars
    /// plus the combined manifest.
    pub fn run(&mut self, fixtures: &[FixtureEntry], fixtures_dir: &Path) -> anyhow::Result<Manifest> {
        let mut manifest = Manifest::new();

        for entry in fixtures {
            let logger = LogManager::new(entry.name.as_str());
            let Some(path) = resolve_fixture_path(fixtures_dir, &entry.name) else {
                logger.warning("fixture not found, skipping");
                report::missing(&entry.name);
                self.tally.record(Outcome::Missing);
                continue;
            };

            let (metadata, outcome) = self.process_fixture(&path, &entry.expectation, &logger);
            self.tally.record(outcome);

            let sidecar = sidecar_path(&path);
            write_json(&sidecar, &metadata)?;
            logger.detail(&format!("wrote {}", sidecar.display()));
            report::wrote(&sidecar);

            manifest.insert(entry.name.clone(), metadata);
        }

        let manifest_path = self.manifest_path(fixtures_dir);
        write_json(&manifest_path, &manifest)?;
        report::run_summary(&manifest_path, &self.tally);
        Ok(manifest)
    }

    /// Produces the outcome record for a fixture that exists on disk.
    pub fn process_fixture(
        &self,
        path: &Path,
        expectation: &FixtureExpectation,
        logger: &LogManager,
    ) -> (FixtureMetadata, Outcome) {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| logger.scope().to_string());
        report::banner(&filename);

        if expectation.expect_failure {
            report::expected_failure();
            logger.record("expected to fail decoding, decoder not invoked");
            return (
                FixtureMetadata::expected_failure(&filename, expectation),
                Outcome::ExpectedFailure,
            );
        }

        let volume = match self.decoder.decode(path, Some(expectation.station.as_str())) {
            Ok(volume) => volume,
            Err(err) => {
                logger.failure(&err);
                report::decode_failure(&err.to_string());
                return (
                    FixtureMetadata::decode_failure(&filename, expectation, err.to_string()),
                    Outcome::DecodeFailed,
                );
            }
        };

        let summary = summarize(&volume);
        let golden_values = self
            .sample_points
            .iter()
            .filter(|point| point.sweep_index < summary.num_sweeps)
            .filter_map(|point| extract(&volume, point))
            .collect::<Vec<_>>();
        logger.record(&format!(
            "{} sweeps, {} golden values",
            summary.num_sweeps,
            golden_values.len()
        ));

        let record = SuccessRecord {
            filename,
            description: expectation.description.clone(),
            station: expectation.station.clone(),
            notes: expectation.notes.clone(),
            site: summary.site,
            time_start: summary.time_start,
            num_sweeps: summary.num_sweeps,
            num_rays_total: summary.num_rays_total,
            num_gates: summary.num_gates,
            elevation_angles_deg: summary.elevation_angles_deg,
            available_fields: summary.available_fields,
            sweep_details: summary.sweep_details,
            nyquist_velocity_mps: summary.nyquist_velocity_mps,
            expected_vcp: expectation.expected_vcp,
            expected_message_type: expectation.expected_message_type,
            golden_values,
        };
        report::success(&record);

        (FixtureMetadata::Success(Box::new(record)), Outcome::Succeeded)
    }
}
