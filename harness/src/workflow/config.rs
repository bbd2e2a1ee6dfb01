use crate::workflow::catalog::{default_fixtures, SAMPLE_POINTS};
use anyhow::Context;
use goldencore::records::{FixtureExpectation, SamplePoint};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MANIFEST_NAME: &str = "fixtures_manifest.json";
pub const DEFAULT_DECODER_PROGRAM: &str = "radar-volume-dump";

/// A declared fixture file and what is known about it in advance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixtureEntry {
    pub name: String,
    #[serde(flatten)]
    pub expectation: FixtureExpectation,
}

/// External program that prints a volume dump for `<args>... <path> [--station ID]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_DECODER_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub fixtures: Vec<FixtureEntry>,
    pub sample_points: Vec<SamplePoint>,
    pub decoder: DecoderConfig,
    pub manifest_name: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            fixtures: default_fixtures(),
            sample_points: SAMPLE_POINTS.to_vec(),
            decoder: DecoderConfig::default(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading harness config {}", path_ref.display()))?;
        let config: HarnessConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing harness config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded configuration.
    pub fn with_overrides(
        mut self,
        decoder_program: Option<String>,
        decoder_args: Vec<String>,
        manifest_name: Option<String>,
    ) -> Self {
        if let Some(program) = decoder_program {
            self.decoder.program = program;
        }
        if !decoder_args.is_empty() {
            self.decoder.args = decoder_args;
        }
        if let Some(name) = manifest_name {
            self.manifest_name = name;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_carry_builtin_tables() {
        let cfg = HarnessConfig::default();
        assert_eq!(cfg.fixtures.len(), 10);
        assert_eq!(cfg.sample_points.len(), 7);
        assert_eq!(cfg.manifest_name, "fixtures_manifest.json");
        assert_eq!(cfg.decoder.program, DEFAULT_DECODER_PROGRAM);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"fixtures:\n  - name: 01_vcp215_standard.ar2v\n    description: Standard VCP 215\n    station: KLWX\n    expected_vcp: 215\n    expected_message_type: 31\n  - name: 07_truncated.ar2v\n    description: Truncated\n    station: KLWX\n    expect_failure: true\nsample_points:\n  - sweep_index: 0\n    azimuth_deg: 0.0\n    range_km: 10.0\ndecoder:\n  program: python3\n  args: [dump_volume.py]\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = HarnessConfig::load(&path).unwrap();
        assert_eq!(cfg.fixtures.len(), 2);
        assert_eq!(cfg.fixtures[0].expectation.expected_vcp, Some(215));
        assert!(cfg.fixtures[1].expectation.expect_failure);
        assert_eq!(cfg.sample_points, vec![SamplePoint::new(0, 0.0, 10.0)]);
        assert_eq!(cfg.decoder.args, vec!["dump_volume.py"]);
        assert_eq!(cfg.manifest_name, DEFAULT_MANIFEST_NAME);
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let cfg = HarnessConfig::default().with_overrides(
            Some("pyart-dump".into()),
            Vec::new(),
            Some("manifest.json".into()),
        );
        assert_eq!(cfg.decoder.program, "pyart-dump");
        assert!(cfg.decoder.args.is_empty());
        assert_eq!(cfg.manifest_name, "manifest.json");
    }
}
