use clap::Parser;
use decoder::CommandDecoder;
use goldencore::prelude::VolumeDecoder;
use goldencore::volume::{SyntheticConfig, SyntheticDecoder};
use std::path::{Path, PathBuf};
use workflow::config::HarnessConfig;
use workflow::runner::Runner;

mod decoder;
mod report;
mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Write golden-value metadata sidecars for radar archive fixtures"
)]
struct Args {
    /// Directory holding the fixture files
    #[arg(default_value = "./test-fixtures")]
    fixtures_dir: PathBuf,
    /// Load fixture expectations and sample points from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// External program that prints a decoded volume as JSON
    #[arg(long)]
    decoder: Option<String>,
    /// Argument passed to the decoder ahead of the fixture path (repeatable)
    #[arg(long = "decoder-arg", allow_hyphen_values = true)]
    decoder_args: Vec<String>,
    /// File name of the combined manifest inside the fixtures directory
    #[arg(long)]
    manifest_name: Option<String>,
    /// Decode every fixture as a seeded synthetic volume (dry run)
    #[arg(long, default_value_t = false)]
    synthetic: bool,
    /// Seed for the synthetic volume
    #[arg(long, default_value_t = 0, requires = "synthetic")]
    synthetic_seed: u64,
}

fn ensure_fixtures_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!(
            "fixtures directory not found: {} (download the fixtures first)",
            dir.display()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    ensure_fixtures_dir(&args.fixtures_dir)?;

    let config = match &args.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    }
    .with_overrides(args.decoder, args.decoder_args, args.manifest_name);

    let decoder: Box<dyn VolumeDecoder> = if args.synthetic {
        log::info!("using synthetic decoder (seed {})", args.synthetic_seed);
        Box::new(SyntheticDecoder::new(SyntheticConfig {
            seed: args.synthetic_seed,
            ..Default::default()
        }))
    } else {
        Box::new(CommandDecoder::from_config(&config.decoder))
    };

    let mut runner = Runner::new(decoder, config.sample_points.clone())
        .with_manifest_name(config.manifest_name.as_str());
    let manifest = runner.run(&config.fixtures, &args.fixtures_dir)?;
    let tally = runner.tally();
    log::info!(
        "manifest holds {} of {} declared fixtures ({} missing)",
        manifest.len(),
        config.fixtures.len(),
        tally.missing
    );

    Ok(())
}
