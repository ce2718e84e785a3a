use std::time::Duration;

use eframe::egui::Color32;

use crate::color::generate_palette;
use crate::data::model::{Dataset, Variable};
use crate::data::sampling::playback_stride;
use crate::data::stats;

/// Time one pass of automatic playback takes, whatever the frame count.
pub const PLAYBACK_DURATION: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Playback driver
// ---------------------------------------------------------------------------

/// Timer for automatic frame advance.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    /// Frames skipped per step.
    pub stride: usize,
    /// Steps in one full pass.
    pub steps_per_pass: usize,
    /// Time between steps.
    pub interval: Duration,
    elapsed: Duration,
}

impl Playback {
    /// Driver for a variable with `n_frames` frames.
    pub fn for_frames(n_frames: usize) -> Self {
        let stride = playback_stride(n_frames);
        let steps_per_pass = n_frames.max(1).div_ceil(stride);
        Self {
            stride,
            steps_per_pass,
            interval: PLAYBACK_DURATION / steps_per_pass as u32,
            elapsed: Duration::ZERO,
        }
    }

    /// Forget partially elapsed time.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Whole steps due after `dt` more time has passed.
    fn take_steps(&mut self, dt: Duration) -> usize {
        self.elapsed += dt;
        let steps = (self.elapsed.as_nanos() / self.interval.as_nanos().max(1)) as usize;
        self.elapsed -= self.interval * steps as u32;
        steps
    }
}

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer session, independent of rendering.
///
/// `current_frame` is the only notion of "where we are": the slider and the
/// playback driver both read and write it.
pub struct ViewerState {
    /// Mesh and every loaded variable.
    pub dataset: Dataset,

    /// Line colour per variable.
    pub palette: Vec<Color32>,

    /// Index into `dataset.variables`.
    pub current_variable: usize,

    /// Row of the current variable being shown.
    pub current_frame: usize,

    /// Whether automatic playback is suspended.
    pub paused: bool,

    /// Fixed x limits (mesh extent).
    pub x_range: (f64, f64),

    /// Robust y limits of the current variable.
    pub y_range: (f64, f64),

    pub playback: Playback,
}

impl ViewerState {
    /// Start on the first variable, playing from frame 0.
    pub fn new(dataset: Dataset) -> Self {
        assert!(!dataset.is_empty(), "viewer needs at least one variable");
        let palette = generate_palette(dataset.len());
        let x_range = dataset.mesh.range();
        let mut state = Self {
            dataset,
            palette,
            current_variable: 0,
            current_frame: 0,
            paused: false,
            x_range,
            y_range: (0.0, 1.0),
            playback: Playback::for_frames(1),
        };
        state.select_variable(0);
        state
    }

    pub fn current(&self) -> &Variable {
        &self.dataset.variables[self.current_variable]
    }

    pub fn n_frames(&self) -> usize {
        self.current().series.n_frames()
    }

    /// `"<name> <unit>"` of the current variable.
    pub fn title(&self) -> String {
        self.current().info.title()
    }

    pub fn current_color(&self) -> Color32 {
        self.palette[self.current_variable]
    }

    /// Switch variable: rescale y, rewind to frame 0 and retime playback so
    /// a pass still lasts [`PLAYBACK_DURATION`].
    pub fn select_variable(&mut self, idx: usize) {
        if idx >= self.dataset.len() {
            log::warn!("ignoring selection of unknown variable {idx}");
            return;
        }
        self.current_variable = idx;
        let series = &self.dataset.variables[idx].series;
        self.y_range = stats::robust_range(series.values()).unwrap_or((-1.0, 1.0));
        self.playback = Playback::for_frames(series.n_frames());
        self.current_frame = 0;
        log::debug!(
            "selected {} ({} frames, y {:?}, step every {:?})",
            self.title(),
            self.n_frames(),
            self.y_range,
            self.playback.interval
        );
    }

    /// Jump to `frame` (clamped to the last one).  Playback continues from
    /// here.
    pub fn seek(&mut self, frame: usize) {
        self.current_frame = frame.min(self.n_frames() - 1);
    }

    pub fn play(&mut self) {
        self.playback.restart();
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Back to frame 0, paused.
    pub fn reset(&mut self) {
        self.paused = true;
        self.current_frame = 0;
        self.playback.restart();
    }

    /// Advance playback by `dt`.  Returns whether the frame changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.paused {
            return false;
        }
        let steps = self.playback.take_steps(dt) % self.playback.steps_per_pass.max(1);
        let before = self.current_frame;
        for _ in 0..steps {
            self.step();
        }
        self.current_frame != before
    }

    /// One driver step: forward by the stride, wrapping to frame 0.
    fn step(&mut self) {
        let next = self.current_frame + self.playback.stride;
        self.current_frame = if next >= self.n_frames() { 0 } else { next };
    }

    /// `(mesh, value)` pairs of the displayed frame.
    pub fn frame_points(&self) -> Vec<[f64; 2]> {
        let y = self.current().series.frame(self.current_frame);
        self.dataset
            .mesh
            .points
            .iter()
            .zip(y)
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}
