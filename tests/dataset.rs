use std::fs;
use std::path::PathBuf;

use axial_scope::data::loader::{LoadError, NAN_FILL};
use axial_scope::data::model::Dataset;
use axial_scope::state::ViewerState;

fn write(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn viewer_session_over_real_files() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = write(&dir, "x.txt", "0.0 0.5 1.0\n");
    let velocity = write(&dir, "v.txt", "1 2 3\n-nan(ind) 5 6\n7 8 nan\n");
    let temperature = write(&dir, "t.txt", "300 301 302\n");

    let dataset = Dataset::load(&mesh, &[velocity, temperature], NAN_FILL).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.variables[0].info.title(), "Vapor velocity [m/s]");
    assert_eq!(dataset.variables[1].info.title(), "Vapor bulk temperature [K]");
    assert_eq!(dataset.variables[0].series.frame(1)[0], NAN_FILL);

    let mut state = ViewerState::new(dataset);
    assert_eq!(state.n_frames(), 3);

    state.seek(2);
    state.select_variable(1);
    assert_eq!(state.current_frame, 0);
    assert_eq!(state.n_frames(), 1);
    assert_eq!(state.frame_points(), vec![[0.0, 300.0], [0.5, 301.0], [1.0, 302.0]]);
    assert!(state.y_range.0 < 300.0 && state.y_range.1 > 302.0);
}

#[test]
fn series_must_match_mesh_length() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = write(&dir, "x.txt", "0\n1\n2\n3\n");
    let series = write(&dir, "s.txt", "1 2 3\n4 5 6\n");

    let err = Dataset::load(&mesh, &[series], NAN_FILL).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MeshMismatch {
            expected: 4,
            found: 3,
            ..
        }
    ));
}

#[test]
fn unreadable_series_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = write(&dir, "x.txt", "0 1\n");
    let missing = dir.path().join("missing.txt");

    let err = Dataset::load(&mesh, &[missing], NAN_FILL).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("missing.txt"));
}
