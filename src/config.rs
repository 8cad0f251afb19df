use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default grid width and height.
pub(crate) const DEFAULT_SIZE: u32 = 8;

/// Default number of frames in one animation cycle.
pub(crate) const DEFAULT_FRAMES: u32 = 32;

/// Smallest grid the normalization `x / (size - 1)` is defined for.
pub(crate) const MIN_SIZE: u32 = 2;

/// Errors that can occur when building or loading a configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(u32),

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parameters for a single generator run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SpiralConfig {
    /// Grid width and height in pixels
    pub size: u32,
    /// Number of frames to generate
    pub frames: u32,
    /// Directory the hex files and frame images are written to
    pub output_dir: PathBuf,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_FRAMES)
    }
}

impl SpiralConfig {
    pub(crate) fn new(size: u32, frames: u32) -> Self {
        Self { size, frames, output_dir: PathBuf::from(".") }
    }

    pub(crate) fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Load a configuration from a YAML file. Missing keys take their default value.
    pub(crate) fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml(&contents).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a map.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Check the invariants the pixel formula relies on.
    ///
    /// A zero frame count is accepted: it produces empty hex files and no images.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::GridTooSmall(self.size));
        }
        Ok(())
    }

    pub(crate) fn pixels_per_frame(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size)
    }

    /// Number of lines each channel file receives over the whole run.
    pub(crate) fn total_pixels(&self) -> u64 {
        u64::from(self.frames) * self.pixels_per_frame()
    }
}
