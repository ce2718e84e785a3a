/// Number of frames the viewer's playback aims to step through per pass.
pub const PLAYBACK_TARGET_FRAMES: usize = 200;

/// Uniform stride that keeps at most `max_frames` of `total` frames.
pub fn decimation_stride(total: usize, max_frames: usize) -> usize {
    if max_frames == 0 || total <= max_frames {
        1
    } else {
        total.div_ceil(max_frames)
    }
}

/// Every `stride`-th index, starting at 0.
pub fn decimated_indices(total: usize, stride: usize) -> Vec<usize> {
    (0..total).step_by(stride.max(1)).collect()
}

/// Stride for automatic playback: roughly [`PLAYBACK_TARGET_FRAMES`] steps.
pub fn playback_stride(total: usize) -> usize {
    (total / PLAYBACK_TARGET_FRAMES).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_keep_every_frame() {
        assert_eq!(decimation_stride(3, 200), 1);
        assert_eq!(decimation_stride(200, 200), 1);
        assert_eq!(decimated_indices(3, 1), vec![0, 1, 2]);
    }

    #[test]
    fn long_series_are_capped() {
        for total in [201, 399, 400, 401, 1000, 12345] {
            let stride = decimation_stride(total, 200);
            let kept = decimated_indices(total, stride);
            assert_eq!(stride, total.div_ceil(200));
            assert_eq!(kept.len(), total.div_ceil(stride));
            assert!(kept.len() <= 200, "{total} -> {}", kept.len());
            assert_eq!(kept[0], 0);
        }
    }

    #[test]
    fn playback_stride_targets_two_hundred_steps() {
        assert_eq!(playback_stride(1), 1);
        assert_eq!(playback_stride(399), 1);
        assert_eq!(playback_stride(400), 2);
        assert_eq!(playback_stride(10_000), 50);
    }
}
