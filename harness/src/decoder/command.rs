use crate::workflow::config::DecoderConfig;
use goldencore::prelude::{DecodeError, DecodeResult, VolumeDecoder};
use goldencore::volume::{RadarVolume, VolumeDump};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Decodes fixtures by running an external reader that prints a volume dump.
#[derive(Debug, Clone)]
pub struct CommandDecoder {
    program: String,
    args: Vec<String>,
}

impl CommandDecoder {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &DecoderConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }
}

impl VolumeDecoder for CommandDecoder {
    fn decode(&self, path: &Path, station: Option<&str>) -> DecodeResult<RadarVolume> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(path);
        if let Some(station) = station {
            command.arg("--station").arg(station);
        }
        debug!("running decoder {:?}", command);

        let output = command
            .output()
            .map_err(|e| DecodeError::Command(format!("failed to run {}: {}", self.program, e)))?;
        if !output.status.success() {
            return Err(DecodeError::Command(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(VolumeDump::from_slice(&output.stdout)?.into_volume()?)
    }
}
