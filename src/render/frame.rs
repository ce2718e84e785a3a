use std::path::Path;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

use super::RenderError;
use crate::data::catalog::{AXIAL_LABEL, VALUE_LABEL};

/// Figure size in inches; the pixel size follows from the DPI.
pub const FIGURE_INCHES: (f64, f64) = (7.0, 4.0);

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("plotting backend: {0}")]
    Backend(String),

    #[error("buffer of {found} bytes does not fit a {width}x{height} frame")]
    BufferSize { width: u32, height: u32, found: usize },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for DrawError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        DrawError::Backend(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
}

impl FrameGeometry {
    /// Pixel size of the figure at `dpi`, rounded up to even dimensions
    /// (yuv420p output needs both to be even).
    pub fn from_dpi(dpi: u32) -> Self {
        let even = |inches: f64| {
            let px = (inches * dpi as f64).round().max(2.0) as u32;
            px + px % 2
        };
        FrameGeometry {
            width: even(FIGURE_INCHES.0),
            height: even(FIGURE_INCHES.1),
            dpi,
        }
    }

    /// Typographic points to pixels.
    fn pt(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    /// Inches to whole pixels.
    fn inch(&self, inches: f64) -> u32 {
        (inches * self.dpi as f64).round() as u32
    }

    fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    fn check_buffer(&self, len: usize) -> Result<(), DrawError> {
        if len == self.buffer_len() {
            Ok(())
        } else {
            Err(DrawError::BufferSize {
                width: self.width,
                height: self.height,
                found: len,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// One plotted frame
// ---------------------------------------------------------------------------

/// Everything drawn on a single video frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameSpec<'a> {
    pub title: &'a str,
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// Rasterize `frame` into an RGB buffer of `geometry`'s size.
pub fn draw_frame(buf: &mut [u8], geometry: FrameGeometry, frame: &FrameSpec<'_>) -> Result<(), DrawError> {
    geometry.check_buffer(buf.len())?;
    let root = BitMapBackend::with_buffer(buf, (geometry.width, geometry.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x0, x1) = frame.x_range;
    let (y0, y1) = frame.y_range;
    let mut chart = ChartBuilder::on(&root)
        .caption(frame.title, ("sans-serif", geometry.pt(12.0)).into_font())
        .margin(geometry.inch(0.15))
        .x_label_area_size(geometry.inch(0.55))
        .y_label_area_size(geometry.inch(0.8))
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(AXIAL_LABEL)
        .y_desc(VALUE_LABEL)
        .label_style(FontDesc::new(
            FontFamily::SansSerif,
            geometry.pt(10.0),
            FontStyle::Normal,
        ))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR))
        .light_line_style(ShapeStyle::from(&WHITE))
        .draw()?;

    let width = geometry.pt(2.0).round().max(1.0) as u32;
    chart.draw_series(LineSeries::new(
        frame.x.iter().copied().zip(frame.y.iter().copied()),
        LINE_COLOR.stroke_width(width),
    ))?;

    root.present()?;
    Ok(())
}

/// Draw `frame` and save it as a PNG at `path`.
pub fn write_frame_png(path: &Path, geometry: FrameGeometry, frame: &FrameSpec<'_>) -> Result<(), RenderError> {
    let draw_err = |source: DrawError| RenderError::Draw {
        path: path.to_path_buf(),
        source,
    };
    let mut buf = vec![0u8; geometry.buffer_len()];
    draw_frame(&mut buf, geometry, frame).map_err(draw_err)?;

    let len = buf.len();
    let img = image::RgbImage::from_raw(geometry.width, geometry.height, buf).ok_or_else(|| {
        draw_err(DrawError::BufferSize {
            width: geometry.width,
            height: geometry.height,
            found: len,
        })
    })?;
    img.save(path).map_err(|source| RenderError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// File name of the `index`-th frame; matches [`FRAME_PATTERN`].
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{index:05}.png")
}

/// printf-style pattern the encoder expands to the frame file names.
pub const FRAME_PATTERN: &str = "frame_%05d.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dpi_gives_seven_by_four_inches() {
        let g = FrameGeometry::from_dpi(100);
        assert_eq!((g.width, g.height), (700, 400));
    }

    #[test]
    fn odd_pixel_sizes_are_rounded_up() {
        let g = FrameGeometry::from_dpi(75);
        assert_eq!((g.width, g.height), (526, 300));
        assert_eq!(g.width % 2, 0);
    }

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_file_name(0), "frame_00000.png");
        assert_eq!(frame_file_name(123), "frame_00123.png");
    }

    #[test]
    fn undersized_buffer_is_rejected_before_drawing() {
        let geometry = FrameGeometry::from_dpi(40);
        let spec = FrameSpec {
            title: "t",
            x: &[0.0, 1.0],
            y: &[0.0, 1.0],
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
        };
        let mut buf = vec![0u8; 12];
        let err = draw_frame(&mut buf, geometry, &spec).unwrap_err();
        assert!(matches!(
            err,
            DrawError::BufferSize {
                width: 280,
                height: 160,
                found: 12
            }
        ));
    }
}
