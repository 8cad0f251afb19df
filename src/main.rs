mod animation;
mod config;
mod generator;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use config::{ConfigError, SpiralConfig};
use generator::FrameGenerator;
use log::{LevelFilter, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a spiral color animation for an LED matrix", long_about = None)]
struct Args {
    #[arg(short, long, help = "Grid width and height in pixels [default: 8]")]
    size: Option<u32>,

    #[arg(short, long, help = "Number of frames to generate [default: 32]")]
    frames: Option<u32>,

    #[arg(short, long, help = "Directory for the hex files and frame images [default: .]")]
    output_dir: Option<PathBuf>,

    #[arg(short, long, help = "YAML file with size, frames and output_dir; flags take precedence")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Log every frame as it is written")]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<SpiralConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SpiralConfig::from_yaml_file(path)?,
            None => SpiralConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_dir(output_dir);
        }
        Ok(config)
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = args.resolve_config().context("failed to load configuration")?;
    let generator = FrameGenerator::new(config).context("invalid configuration")?;
    let summary = generator.run().context("spiral generation failed")?;
    info!("{summary}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("spiralgen").chain(args.iter().copied())).expect("parse failed")
    }

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(parse(&[]).resolve_config().expect("resolve failed"), SpiralConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&["--size", "16", "-f", "4", "-o", "out"]).resolve_config().expect("resolve failed");
        assert_eq!(config, SpiralConfig::new(16, 4).with_output_dir("out"));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().expect("no tempdir");
        let path = dir.path().join("spiral.yaml");
        std::fs::write(&path, "size: 4\nframes: 10\n").expect("write failed");

        let path = path.to_str().expect("non utf8 path");
        let config = parse(&["--config", path, "--frames", "2"]).resolve_config().expect("resolve failed");
        assert_eq!(config, SpiralConfig::new(4, 2));
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(Args::try_parse_from(["spiralgen", "--size", "big"]).is_err());
    }
}
