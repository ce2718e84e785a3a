//! Visualisation for 1-D simulation output: per-variable time series
//! sampled along a fixed spatial mesh.
//!
//! Two front-ends share the [`data`] layer:
//! * `axial-scope` – interactive egui viewer ([`app`], [`state`], [`ui`]).
//! * `make-videos` – batch MP4 renderer ([`render`], [`config`]).

pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod render;
pub mod state;
pub mod ui;
