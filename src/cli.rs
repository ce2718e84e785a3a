use std::path::{Path, PathBuf};

use clap::Parser;

pub const USAGE: &str = "Usage: axial-scope <mesh_file> <series_file_1> [series_file_2 ...]";

/// Interactive viewer for time series sampled along a mesh.
#[derive(Debug, Parser)]
#[command(name = "axial-scope", version)]
pub struct ViewerArgs {
    /// Mesh coordinates, whitespace separated
    pub mesh: PathBuf,

    /// One file per variable, one frame per line
    #[arg(required = true)]
    pub series: Vec<PathBuf>,
}

impl ViewerArgs {
    /// First named path that is not an existing file.
    pub fn first_missing(&self) -> Option<&Path> {
        std::iter::once(&self.mesh)
            .chain(&self.series)
            .map(PathBuf::as_path)
            .find(|p| !p.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_mesh_and_one_series() {
        assert!(ViewerArgs::try_parse_from(["axial-scope"]).is_err());
        assert!(ViewerArgs::try_parse_from(["axial-scope", "mesh.txt"]).is_err());

        let args = ViewerArgs::try_parse_from(["axial-scope", "mesh.txt", "a.txt", "b.txt"]).unwrap();
        assert_eq!(args.mesh, PathBuf::from("mesh.txt"));
        assert_eq!(args.series, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn reports_first_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mesh = dir.path().join("mesh.txt");
        std::fs::write(&mesh, "0 1 2\n").unwrap();
        let missing = dir.path().join("gone.txt");

        let args = ViewerArgs {
            mesh: mesh.clone(),
            series: vec![mesh.clone(), missing.clone()],
        };
        assert_eq!(args.first_missing(), Some(missing.as_path()));

        let args = ViewerArgs {
            mesh: mesh.clone(),
            series: vec![mesh],
        };
        assert_eq!(args.first_missing(), None);
    }
}
