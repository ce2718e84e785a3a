use std::process;

use axial_scope::app::AxialScopeApp;
use axial_scope::cli::{ViewerArgs, USAGE};
use axial_scope::data::loader::NAN_FILL;
use axial_scope::data::model::Dataset;
use axial_scope::state::ViewerState;
use clap::error::ErrorKind;
use clap::Parser;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let args = match ViewerArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Some(missing) = args.first_missing() {
        eprintln!("Error: file not found -> {}", missing.display());
        process::exit(1);
    }

    let dataset = match Dataset::load(&args.mesh, &args.series, NAN_FILL) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load data: {e}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    log::info!(
        "Loaded {} variables on a {}-point mesh",
        dataset.len(),
        dataset.mesh.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = ViewerState::new(dataset);
    eframe::run_native(
        "Axial Scope",
        options,
        Box::new(move |_cc| Ok(Box::new(AxialScopeApp::new(state)))),
    )
}
