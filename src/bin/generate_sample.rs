use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const N_POINTS: usize = 120;
const N_FRAMES: usize = 600;
const LENGTH_M: f64 = 0.9;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// One line per frame, values separated by spaces.
fn write_series(path: &Path, rows: impl Iterator<Item = Vec<f64>>) -> Result<()> {
    let mut text = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| format!("{v:.6e}")).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let out_dir = Path::new("results");
    fs::create_dir_all(out_dir).context("creating results directory")?;

    let mesh: Vec<f64> = (0..N_POINTS)
        .map(|i| LENGTH_M * i as f64 / (N_POINTS - 1) as f64)
        .collect();
    let mesh_text: String = mesh.iter().map(|x| format!("{x:.6e}\n")).collect();
    fs::write("mesh.txt", mesh_text).context("writing mesh.txt")?;

    // A heat pulse that travels from the evaporator towards the condenser.
    let temperature = |t: usize| -> Vec<f64> {
        let s = t as f64 / N_FRAMES as f64;
        mesh.iter()
            .map(|&x| 600.0 + 150.0 * s + gaussian(x, 0.1 + 0.7 * s, 0.08, 200.0))
            .collect()
    };
    write_series(&out_dir.join("T_v_bulk.txt"), (0..N_FRAMES).map(temperature))?;

    // Velocity starts undefined at the closed ends, as the solver reports it.
    let velocity = |t: usize| -> Vec<f64> {
        let ramp = (t as f64 / 50.0).min(1.0);
        mesh.iter()
            .enumerate()
            .map(|(i, &x)| {
                if t == 0 && (i == 0 || i == N_POINTS - 1) {
                    f64::NAN
                } else {
                    ramp * 40.0 * (std::f64::consts::PI * x / LENGTH_M).sin()
                }
            })
            .collect()
    };
    write_series(&out_dir.join("u_v.txt"), (0..N_FRAMES).map(velocity))?;

    // Steady profile: a single line, skipped by the video renderer.
    write_series(
        &out_dir.join("p_v_initial.txt"),
        std::iter::once(mesh.iter().map(|&x| 1.0e4 - 2.0e3 * x).collect()),
    )?;

    println!(
        "Wrote mesh.txt ({N_POINTS} points) and 3 series to {}",
        out_dir.display()
    );
    Ok(())
}
