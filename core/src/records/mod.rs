pub mod fixture;
pub mod golden;
pub mod manifest;

pub use fixture::{
    DecodeFailureRecord, ExpectedFailureRecord, FixtureExpectation, FixtureMetadata, SiteInfo,
    SuccessRecord, SweepDetail, DECODE_FAILURE_NOTE, EXPECTED_ERROR_LABEL,
};
pub use golden::{GoldenValue, SamplePoint};
pub use manifest::Manifest;
