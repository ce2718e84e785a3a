use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::data::loader::{load_matrix, LoadError};
use crate::data::model::{Mesh, Series};
use crate::data::stats;

use super::encode::Encoder;
use super::frame::{frame_file_name, write_frame_png, FrameGeometry, FrameSpec, FRAME_PATTERN};
use super::plan::FramePlan;
use super::RenderError;

/// What happened to one series file.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesOutcome {
    /// Single-frame file; nothing to animate.
    Skipped { source: PathBuf },
    Rendered {
        source: PathBuf,
        video: PathBuf,
        frames: usize,
        fps: f64,
    },
}

// ---------------------------------------------------------------------------
// Input discovery
// ---------------------------------------------------------------------------

/// `*.txt` files in `data_dir` other than the mesh itself, sorted by name.
pub fn eligible_series_files(data_dir: &Path, mesh_name: &str) -> Result<Vec<PathBuf>, RenderError> {
    let entries = fs::read_dir(data_dir).map_err(RenderError::io("failed to list", data_dir))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(RenderError::io("failed to list", data_dir))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".txt") && name.to_lowercase() != mesh_name {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders every series of a data directory against one mesh.
pub struct BatchRenderer {
    config: RenderConfig,
    mesh: Mesh,
    geometry: FrameGeometry,
    encoder: Encoder,
}

impl BatchRenderer {
    /// Validate the configuration and load the mesh.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let mesh = Mesh::load(&config.mesh_file, config.nan_fill)?;
        log::info!("Mesh {} has {} points", config.mesh_file.display(), mesh.len());
        let encoder = Encoder::new(config.encoder.clone());
        log::debug!("Encoding with '{}'", encoder.program());
        Ok(Self {
            geometry: FrameGeometry::from_dpi(config.dpi),
            encoder,
            config,
            mesh,
        })
    }

    /// Render every eligible file in order.  The first failure aborts the
    /// batch.
    pub fn run(&self) -> Result<Vec<SeriesOutcome>, RenderError> {
        let video_dir = &self.config.video_dir;
        fs::create_dir_all(video_dir).map_err(RenderError::io("failed to create", video_dir))?;

        let files = eligible_series_files(&self.config.data_dir, &self.config.mesh_file_name())?;
        if files.is_empty() {
            log::warn!("No series files found in {}", self.config.data_dir.display());
        }

        files.iter().map(|path| self.render_series(path)).collect()
    }

    /// Load one series file and turn it into `<video_dir>/<stem>.mp4`.
    pub fn render_series(&self, path: &Path) -> Result<SeriesOutcome, RenderError> {
        let fname = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!("Processing {fname}...");

        let series = Series::from_matrix(load_matrix(path, self.config.nan_fill)?);
        let frames = match series {
            Series::Single(_) => {
                log::info!("  Skipped: single line file");
                return Ok(SeriesOutcome::Skipped {
                    source: path.to_path_buf(),
                });
            }
            Series::Frames(m) => m,
        };
        if frames.cols != self.mesh.len() {
            return Err(LoadError::MeshMismatch {
                path: path.to_path_buf(),
                expected: self.mesh.len(),
                found: frames.cols,
            }
            .into());
        }

        let plan = FramePlan::new(frames.rows, self.config.max_frames, self.config.duration_s);
        if !plan.has_encodable_rate() {
            return Err(RenderError::FrameRate {
                path: path.to_path_buf(),
                fps: plan.fps,
            });
        }
        if plan.is_decimated() {
            log::info!(
                "  {} frames, keeping every {} ({} frames)",
                plan.total_frames,
                plan.stride,
                plan.len()
            );
        }

        // Axis limits are shared by every frame of this file.
        let retained: Vec<f64> = plan
            .indices
            .iter()
            .flat_map(|&i| frames.row(i).iter().copied())
            .collect();
        let (y_lo, y_hi) = stats::value_range(&retained).unwrap_or((0.0, 1.0));
        let y_range = stats::nonsingular(y_lo, y_hi);
        let x_range = self.mesh.range();

        // Frames left by an earlier failed run would be picked up by the
        // encoder's input pattern.
        let tmp_dir = self.config.video_dir.join(format!("_tmp_{stem}"));
        if tmp_dir.exists() {
            fs::remove_dir_all(&tmp_dir).map_err(RenderError::io("failed to remove", &tmp_dir))?;
        }
        fs::create_dir_all(&tmp_dir).map_err(RenderError::io("failed to create", &tmp_dir))?;

        for (n, &row) in plan.indices.iter().enumerate() {
            let title = format!("{fname} (Frame {}/{})", n + 1, plan.len());
            let spec = FrameSpec {
                title: &title,
                x: &self.mesh.points,
                y: frames.row(row),
                x_range,
                y_range,
            };
            write_frame_png(&tmp_dir.join(frame_file_name(n)), self.geometry, &spec)?;
        }

        let video = self.config.video_dir.join(format!("{stem}.mp4"));
        self.encoder
            .encode(&plan.framerate_arg(), &tmp_dir.join(FRAME_PATTERN), &video)?;

        fs::remove_dir_all(&tmp_dir).map_err(RenderError::io("failed to remove", &tmp_dir))?;
        log::info!("  Saved -> {}", video.display());

        Ok(SeriesOutcome::Rendered {
            source: path.to_path_buf(),
            video,
            frames: plan.len(),
            fps: plan.fps,
        })
    }
}
