use crate::animation::Spiral;
use crate::config::{ConfigError, SpiralConfig};
use crate::output::{HexChannelWriter, OutputError, render_frame, save_frame};
use log::{debug, info};
use std::fmt;
use std::path::PathBuf;

/// Errors that can abort a generator run
#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// What a completed run produced
#[derive(Debug)]
pub(crate) struct GenerationSummary {
    /// Lines written to each of the three channel files
    pub lines_per_channel: u64,
    /// Number of frame images saved
    pub frames_written: u32,
    /// Image of the final frame, if any frame was rendered
    pub last_image: Option<PathBuf>,
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrote {} lines per channel and {} frame image(s)", self.lines_per_channel, self.frames_written)?;
        if let Some(path) = &self.last_image {
            write!(f, ", last at {}", path.display())?;
        }
        Ok(())
    }
}

/// Drives the spiral animation over every frame and writes both outputs.
pub(crate) struct FrameGenerator {
    config: SpiralConfig,
}

impl FrameGenerator {
    /// Validate the configuration. Nothing touches the filesystem until [`FrameGenerator::run`].
    pub(crate) fn new(config: SpiralConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate all frames in order: frame, then row, then column.
    ///
    /// The channel streams are held for the whole run and released on every exit
    /// path. Files written before a failure are left in place.
    pub(crate) fn run(&self) -> Result<GenerationSummary, GeneratorError> {
        let SpiralConfig { size, frames, output_dir } = &self.config;
        let (size, frames) = (*size, *frames);

        std::fs::create_dir_all(output_dir)
            .map_err(|source| GeneratorError::OutputDir { path: output_dir.clone(), source })?;
        info!(
            "generating {frames} frame(s) of {size}x{size} pixels ({} lines per channel) into {}",
            self.config.total_pixels(),
            output_dir.display()
        );

        let mut hex = HexChannelWriter::create(output_dir)?;
        let mut last_image = None;
        for frame in 0..frames {
            let img = render_frame(&Spiral, frame, frames, size);
            // Row-major, matching the line order of the channel files
            for pixel in img.pixels() {
                hex.write_pixel(pixel)?;
            }
            let path = save_frame(&img, output_dir, frame)?;
            debug!("frame {frame}: {} lines per channel, saved {}", hex.lines_written(), path.display());
            last_image = Some(path);
        }
        let lines_per_channel = hex.finish()?;
        Ok(GenerationSummary { lines_per_channel, frames_written: frames, last_image })
    }
}
