use crate::data::sampling::{decimated_indices, decimation_stride};

/// Lowest rate that survives [`FramePlan::framerate_arg`]'s two decimals.
pub const MIN_FPS: f64 = 0.005;

/// Which frames of a series end up in the video, and how fast they play.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub total_frames: usize,
    pub stride: usize,
    pub indices: Vec<usize>,
    pub fps: f64,
}

impl FramePlan {
    /// Keep every frame up to `max_frames`, otherwise decimate uniformly.
    /// The frame rate is chosen so the video lasts `duration_s`.
    pub fn new(total_frames: usize, max_frames: usize, duration_s: f64) -> Self {
        let stride = decimation_stride(total_frames, max_frames);
        let indices = decimated_indices(total_frames, stride);
        let fps = indices.len() as f64 / duration_s;
        FramePlan {
            total_frames,
            stride,
            indices,
            fps,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_decimated(&self) -> bool {
        self.stride > 1
    }

    pub fn has_encodable_rate(&self) -> bool {
        self.fps >= MIN_FPS
    }

    /// Frame rate as handed to the encoder.
    pub fn framerate_arg(&self) -> String {
        format!("{:.2}", self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_frames_over_ten_seconds() {
        let plan = FramePlan::new(3, 200, 10.0);
        assert_eq!(plan.stride, 1);
        assert_eq!(plan.indices, vec![0, 1, 2]);
        assert!((plan.fps - 0.3).abs() < 1e-12);
        assert_eq!(plan.framerate_arg(), "0.30");
        assert!(!plan.is_decimated());
    }

    #[test]
    fn exactly_at_cap_is_untouched() {
        let plan = FramePlan::new(200, 200, 10.0);
        assert_eq!(plan.len(), 200);
        assert_eq!(plan.framerate_arg(), "20.00");
    }

    #[test]
    fn decimated_plan_keeps_duration() {
        let plan = FramePlan::new(1001, 200, 10.0);
        assert_eq!(plan.stride, 6);
        assert_eq!(plan.len(), 167);
        assert_eq!(plan.indices.last(), Some(&996));
        assert!((plan.fps - 16.7).abs() < 1e-9);
        assert!(plan.is_decimated());
    }

    #[test]
    fn rates_below_two_decimals_are_not_encodable() {
        let slow = FramePlan::new(3, 200, 1000.0);
        assert_eq!(slow.framerate_arg(), "0.00");
        assert!(!slow.has_encodable_rate());

        let ok = FramePlan::new(3, 200, 100.0);
        assert_eq!(ok.framerate_arg(), "0.03");
        assert!(ok.has_encodable_rate());
    }
}
