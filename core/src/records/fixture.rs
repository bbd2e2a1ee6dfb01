use crate::records::golden::GoldenValue;
use serde::{Deserialize, Serialize};

pub const EXPECTED_ERROR_LABEL: &str = "DecodeError::Truncated";

pub const DECODE_FAILURE_NOTE: &str = "Failed to decode - investigate manually.";

/// Hand-authored knowledge about a fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureExpectation {
    pub description: String,
    pub station: String,
    #[serde(default)]
    pub expected_vcp: Option<u16>,
    #[serde(default)]
    pub expected_message_type: Option<u8>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub expect_failure: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepDetail {
    pub sweep_index: usize,
    pub elevation_deg: f64,
    pub num_radials: usize,
    pub num_gates: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedFailureRecord {
    pub filename: String,
    pub description: String,
    pub notes: String,
    pub expect_failure: bool,
    pub expected_error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeFailureRecord {
    pub filename: String,
    pub description: String,
    pub error: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessRecord {
    pub filename: String,
    pub description: String,
    pub station: String,
    pub notes: String,
    pub site: SiteInfo,
    pub time_start: String,
    pub num_sweeps: usize,
    pub num_rays_total: usize,
    pub num_gates: usize,
    pub elevation_angles_deg: Vec<f64>,
    pub available_fields: Vec<String>,
    pub sweep_details: Vec<SweepDetail>,
    pub nyquist_velocity_mps: Option<f64>,
    pub expected_vcp: Option<u16>,
    pub expected_message_type: Option<u8>,
    pub golden_values: Vec<GoldenValue>,
}

/// Outcome record for one fixture file.
///
/// Serialized without a tag: each variant is recognizable by its own keys
/// (`expected_error`, `error`, or the volume summary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureMetadata {
    ExpectedFailure(ExpectedFailureRecord),
    DecodeFailure(DecodeFailureRecord),
    Success(Box<SuccessRecord>),
}

impl FixtureMetadata {
    pub fn expected_failure(filename: &str, expectation: &FixtureExpectation) -> Self {
        Self::ExpectedFailure(ExpectedFailureRecord {
            filename: filename.to_string(),
            description: expectation.description.clone(),
            notes: expectation.notes.clone(),
            expect_failure: true,
            expected_error: EXPECTED_ERROR_LABEL.to_string(),
        })
    }

    pub fn decode_failure(filename: &str, expectation: &FixtureExpectation, error: String) -> Self {
        Self::DecodeFailure(DecodeFailureRecord {
            filename: filename.to_string(),
            description: expectation.description.clone(),
            error,
            notes: DECODE_FAILURE_NOTE.to_string(),
        })
    }

    pub fn filename(&self) -> &str {
        match self {
            Self::ExpectedFailure(record) => &record.filename,
            Self::DecodeFailure(record) => &record.filename,
            Self::Success(record) => &record.filename,
        }
    }

    pub fn as_success(&self) -> Option<&SuccessRecord> {
        match self {
            Self::Success(record) => Some(record),
            _ => None,
        }
    }
}
