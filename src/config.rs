use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::loader::NAN_FILL;
use crate::render::plan::MIN_FPS;

/// File the renderer looks for in the working directory.
pub const CONFIG_FILE: &str = "make_videos.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Renderer configuration
// ---------------------------------------------------------------------------

/// Settings for the batch renderer.  Every field may be omitted from the
/// JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spatial mesh, one coordinate per value.
    pub mesh_file: PathBuf,
    /// Directory scanned for `*.txt` series files.
    pub data_dir: PathBuf,
    /// Where videos (and temporary frames) are written.
    pub video_dir: PathBuf,
    /// Wall-clock length of every video, in seconds.
    pub duration_s: f64,
    /// Frame cap per video; longer series are decimated.
    pub max_frames: usize,
    /// Raster resolution of the 7×4 inch frames.
    pub dpi: u32,
    /// Encoder executable.
    pub encoder: String,
    /// Substitute for NaN tokens in the input.
    pub nan_fill: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mesh_file: PathBuf::from("mesh.txt"),
            data_dir: PathBuf::from("results"),
            video_dir: PathBuf::from("videos"),
            duration_s: 10.0,
            max_frames: 200,
            dpi: 100,
            encoder: "ffmpeg".to_string(),
            nan_fill: NAN_FILL,
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: RenderConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.is_file() {
            log::info!("Using configuration from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_s.is_finite() && self.duration_s > 0.0) {
            return Err(ConfigError::Invalid("duration_s must be positive".into()));
        }
        if self.max_frames == 0 {
            return Err(ConfigError::Invalid("max_frames must be non-zero".into()));
        }
        if (self.max_frames as f64) / self.duration_s < MIN_FPS {
            return Err(ConfigError::Invalid(format!(
                "{} frames over {} s is below the minimum frame rate of {MIN_FPS}",
                self.max_frames, self.duration_s
            )));
        }
        if self.dpi == 0 {
            return Err(ConfigError::Invalid("dpi must be non-zero".into()));
        }
        if self.encoder.trim().is_empty() {
            return Err(ConfigError::Invalid("encoder must not be empty".into()));
        }
        Ok(())
    }

    /// Name of the mesh file, lowercased, for excluding it from the scan.
    pub fn mesh_file_name(&self) -> String {
        self.mesh_file
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}
