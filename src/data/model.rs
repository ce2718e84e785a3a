use std::path::{Path, PathBuf};

use super::catalog::{catalog_entry, VariableInfo};
use super::loader::{load_matrix, LoadError};
use super::stats;

// ---------------------------------------------------------------------------
// Matrix – raw numeric table as read from disk
// ---------------------------------------------------------------------------

/// A dense row-major table of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<f64>,
}

impl Matrix {
    /// A single row or a single column reads as a plain vector.
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }
}

// ---------------------------------------------------------------------------
// Mesh – fixed spatial sample points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub points: Vec<f64>,
}

impl Mesh {
    /// Any matrix is flattened in reading order.
    pub fn from_matrix(matrix: Matrix) -> Self {
        Mesh {
            points: matrix.values,
        }
    }

    pub fn load(path: &Path, fill: f64) -> Result<Self, LoadError> {
        load_matrix(path, fill).map(Mesh::from_matrix)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Min/max of the mesh coordinates, widened if they coincide.
    pub fn range(&self) -> (f64, f64) {
        let (lo, hi) = stats::value_range(&self.points).unwrap_or((0.0, 1.0));
        stats::nonsingular(lo, hi)
    }
}

// ---------------------------------------------------------------------------
// Series – one variable's time evolution
// ---------------------------------------------------------------------------

/// Frames × points, or a single frame when the file held a plain vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Single(Vec<f64>),
    Frames(Matrix),
}

impl Series {
    pub fn from_matrix(matrix: Matrix) -> Self {
        if matrix.is_vector() {
            Series::Single(matrix.values)
        } else {
            Series::Frames(matrix)
        }
    }

    /// Load and check that every frame spans the whole mesh.
    pub fn load(path: &Path, mesh: &Mesh, fill: f64) -> Result<Self, LoadError> {
        let series = Series::from_matrix(load_matrix(path, fill)?);
        if series.n_points() != mesh.len() {
            return Err(LoadError::MeshMismatch {
                path: path.to_path_buf(),
                expected: mesh.len(),
                found: series.n_points(),
            });
        }
        Ok(series)
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Series::Single(_))
    }

    pub fn n_frames(&self) -> usize {
        match self {
            Series::Single(_) => 1,
            Series::Frames(m) => m.rows,
        }
    }

    pub fn n_points(&self) -> usize {
        match self {
            Series::Single(v) => v.len(),
            Series::Frames(m) => m.cols,
        }
    }

    /// Row `i`; a single-frame series returns its only row for any index.
    pub fn frame(&self, i: usize) -> &[f64] {
        match self {
            Series::Single(v) => v,
            Series::Frames(m) => m.row(i.min(m.rows - 1)),
        }
    }

    /// Every value of every frame.
    pub fn values(&self) -> &[f64] {
        match self {
            Series::Single(v) => v,
            Series::Frames(m) => &m.values,
        }
    }
}

// ---------------------------------------------------------------------------
// Variable / Dataset – what the viewer holds for the whole session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Variable {
    pub info: VariableInfo,
    pub source: PathBuf,
    pub series: Series,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub mesh: Mesh,
    pub variables: Vec<Variable>,
}

impl Dataset {
    /// Load the mesh and every series file, naming them from the catalog
    /// in argument order.
    pub fn load(mesh_path: &Path, series_paths: &[PathBuf], fill: f64) -> Result<Self, LoadError> {
        let mesh = Mesh::load(mesh_path, fill)?;
        let variables = series_paths
            .iter()
            .enumerate()
            .map(|(i, path)| -> Result<Variable, LoadError> {
                let series = Series::load(path, &mesh, fill)?;
                log::info!(
                    "Loaded {} ({} frames x {} points)",
                    path.display(),
                    series.n_frames(),
                    series.n_points()
                );
                Ok(Variable {
                    info: catalog_entry(i, path),
                    source: path.clone(),
                    series,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset { mesh, variables })
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            values: (0..rows * cols).map(|v| v as f64).collect(),
        }
    }

    #[test]
    fn single_row_or_column_is_one_dimensional() {
        assert!(Series::from_matrix(matrix(1, 5)).is_single());
        assert!(Series::from_matrix(matrix(5, 1)).is_single());
        assert!(!Series::from_matrix(matrix(2, 3)).is_single());
    }

    #[test]
    fn frame_rows_follow_row_major_order() {
        let series = Series::from_matrix(matrix(3, 2));
        assert_eq!(series.n_frames(), 3);
        assert_eq!(series.n_points(), 2);
        assert_eq!(series.frame(1), &[2.0, 3.0]);
    }

    #[test]
    fn single_series_returns_same_row_for_any_frame() {
        let series = Series::from_matrix(matrix(1, 3));
        assert_eq!(series.frame(0), series.frame(7));
        assert_eq!(series.n_frames(), 1);
    }

    #[test]
    fn column_file_becomes_mesh() {
        let mesh = Mesh::from_matrix(matrix(4, 1));
        assert_eq!(mesh.points, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(mesh.range(), (0.0, 3.0));
    }
}
