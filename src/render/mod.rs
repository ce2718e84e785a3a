/// Batch video rendering.
///
/// ```text
///   series.txt ──► plan (stride, fps) ──► frame × N (PNG) ──► encode (MP4)
/// ```
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::loader::LoadError;
use frame::DrawError;

pub mod batch;
pub mod encode;
pub mod frame;
pub mod plan;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{context} {}: {source}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to draw {}: {source}", path.display())]
    Draw {
        path: PathBuf,
        #[source]
        source: DrawError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("frame rate {fps} of {} rounds to zero; shorten duration_s", path.display())]
    FrameRate { path: PathBuf, fps: f64 },

    #[error("failed to spawn encoder '{program}' (is it installed and on PATH?): {source}")]
    EncoderSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("encoder exited with {status}: {stderr}")]
    Encoder { status: String, stderr: String },
}

impl RenderError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| RenderError::Io {
            context,
            path,
            source,
        }
    }
}
