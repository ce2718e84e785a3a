use std::path::Path;

use anyhow::{Context, Result};
use axial_scope::config::{RenderConfig, CONFIG_FILE};
use axial_scope::render::batch::{BatchRenderer, SeriesOutcome};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RenderConfig::load_or_default(Path::new(CONFIG_FILE)).context("loading renderer configuration")?;
    log::debug!("{config:?}");

    let renderer = BatchRenderer::new(config).context("preparing renderer")?;
    let outcomes = renderer.run().context("rendering videos")?;

    let rendered = outcomes
        .iter()
        .filter(|o| matches!(o, SeriesOutcome::Rendered { .. }))
        .count();
    log::info!(
        "{rendered} video(s) written, {} file(s) skipped",
        outcomes.len() - rendered
    );
    log::info!("All videos created successfully.");
    Ok(())
}
