use eframe::egui::{self, RichText, Ui};

use crate::state::ViewerState;

const BUTTON_SIZE: [f32; 2] = [120.0, 40.0];
const LABEL_WIDTH: usize = 15;

// ---------------------------------------------------------------------------
// Right side panel – variable selector
// ---------------------------------------------------------------------------

/// Two columns of buttons, one per loaded variable.
pub fn variable_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Variables");
    ui.separator();

    let mut clicked = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("variable_buttons")
                .num_columns(2)
                .spacing([6.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    for (i, var) in state.dataset.variables.iter().enumerate() {
                        let selected = i == state.current_variable;
                        let mut text = RichText::new(wrap_label(&var.info.name, LABEL_WIDTH)).size(11.0);
                        if selected {
                            text = text.strong().color(state.palette[i]);
                        }

                        let button = ui
                            .add_sized(BUTTON_SIZE, egui::SelectableLabel::new(selected, text))
                            .on_hover_text(var.source.display().to_string());
                        if button.clicked() {
                            clicked = Some(i);
                        }
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });

    if let Some(i) = clicked {
        state.select_variable(i);
    }
}

// ---------------------------------------------------------------------------
// Bottom panel – transport controls
// ---------------------------------------------------------------------------

/// Play / Pause / Reset and the time-step slider.
pub fn transport_bar(ui: &mut Ui, state: &mut ViewerState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Play").clicked() {
            state.play();
        }
        if ui.button("Pause").clicked() {
            state.pause();
        }
        if ui.button("Reset").clicked() {
            state.reset();
        }
        ui.separator();

        let last = state.n_frames() - 1;
        let mut frame = state.current_frame;
        ui.spacing_mut().slider_width = (ui.available_width() - 200.0).max(100.0);
        if ui
            .add(egui::Slider::new(&mut frame, 0..=last).text("Time step"))
            .changed()
        {
            state.seek(frame);
        }

        ui.separator();
        let status = if state.paused { "paused" } else { "playing" };
        ui.label(format!("{} / {}  ({status})", state.current_frame + 1, state.n_frames()));
    });
}

/// Greedy word wrap, the way long variable names are broken on buttons.
pub fn wrap_label(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_names_wrap_on_words() {
        assert_eq!(wrap_label("Vapor velocity", 15), "Vapor velocity");
        assert_eq!(
            wrap_label("Wick-vapor interface temperature", 15),
            "Wick-vapor\ninterface\ntemperature"
        );
        assert_eq!(wrap_label("Outer wall heat flux", 15), "Outer wall heat\nflux");
    }
}
