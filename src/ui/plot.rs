use eframe::egui::{RichText, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::data::catalog::AXIAL_LABEL;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Frame plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current frame of the selected variable.
pub fn frame_plot(ui: &mut Ui, state: &ViewerState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(state.title()).strong());
    });

    let (x0, x1) = state.x_range;
    let (y0, y1) = state.y_range;
    let points: PlotPoints = state.frame_points().into_iter().collect();
    let line = Line::new(points)
        .name(&state.current().info.name)
        .color(state.current_color())
        .width(2.0);

    Plot::new("frame_plot")
        .x_axis_label(AXIAL_LABEL)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x0, y0], [x1, y1]));
            plot_ui.line(line);
        });
}
