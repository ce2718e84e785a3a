use std::time::Instant;

use eframe::egui;

use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AxialScopeApp {
    pub state: ViewerState,
    last_tick: Instant,
}

impl AxialScopeApp {
    pub fn new(state: ViewerState) -> Self {
        Self {
            state,
            last_tick: Instant::now(),
        }
    }
}

impl eframe::App for AxialScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Advance playback ----
        let now = Instant::now();
        self.state.tick(now - self.last_tick);
        self.last_tick = now;

        // ---- Bottom panel: transport ----
        egui::TopBottomPanel::bottom("transport")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                panels::transport_bar(ui, &mut self.state);
            });

        // ---- Right side panel: variables ----
        egui::SidePanel::right("variable_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::variable_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::frame_plot(ui, &self.state);
        });

        if !self.state.paused {
            ctx.request_repaint_after(self.state.playback.interval);
        }
    }
}
