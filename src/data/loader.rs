use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Matrix;

/// Value substituted for invalid simulation output.
pub const NAN_FILL: f64 = -1e9;

/// Spellings the solver writes for invalid values (MSVC prints `-nan(ind)`).
const NAN_TOKENS: [&str; 6] = ["-nan(ind)", "nan(ind)", "-nan", "nan", "NaN", "-NaN"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: '{token}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{}:{line}: expected {expected} columns, found {found}", path.display())]
    Ragged {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}: no numeric data", path.display())]
    Empty { path: PathBuf },

    #[error("{}: {found} points per frame but the mesh has {expected}", path.display())]
    MeshMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a whitespace-delimited numeric text file.
pub fn load_matrix(path: &Path, fill: f64) -> Result<Matrix, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_matrix(&text, path, fill)
}

/// Parse numeric text.  `#` starts a comment, blank lines are skipped and
/// every row must have as many columns as the first one.
pub fn parse_matrix(text: &str, path: &Path, fill: f64) -> Result<Matrix, LoadError> {
    let mut values = Vec::new();
    let mut cols = 0;
    let mut rows = 0;

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("");
        let before = values.len();

        for tok in line.split_whitespace() {
            let v = parse_value(tok, fill).ok_or_else(|| LoadError::Parse {
                path: path.to_path_buf(),
                line: line_no + 1,
                token: tok.to_string(),
            })?;
            values.push(v);
        }

        let found = values.len() - before;
        if found == 0 {
            continue;
        }
        if rows == 0 {
            cols = found;
        } else if found != cols {
            return Err(LoadError::Ragged {
                path: path.to_path_buf(),
                line: line_no + 1,
                expected: cols,
                found,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(Matrix { rows, cols, values })
}

fn parse_value(tok: &str, fill: f64) -> Option<f64> {
    if NAN_TOKENS.contains(&tok) {
        return Some(fill);
    }
    match tok.parse::<f64>() {
        Ok(v) if v.is_nan() => Some(fill),
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Matrix, LoadError> {
        parse_matrix(text, Path::new("test.txt"), NAN_FILL)
    }

    #[test]
    fn nan_tokens_become_fill_value() {
        let m = parse("1.0 nan 3.0\n-nan(ind) NaN 6\n").unwrap();
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 3);
        assert_eq!(m.values, vec![1.0, NAN_FILL, 3.0, NAN_FILL, NAN_FILL, 6.0]);
    }

    #[test]
    fn line_with_only_nan_parses() {
        let m = parse("nan\n").unwrap();
        assert_eq!(m.values, vec![NAN_FILL]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let m = parse("# header\n\n1 2\n  \n3 4 # trailing\n").unwrap();
        assert_eq!((m.rows, m.cols), (2, 2));
        assert_eq!(m.values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn scientific_notation_and_tabs() {
        let m = parse("1e-3\t-2.5E+2\n").unwrap();
        assert_eq!(m.values, vec![1e-3, -250.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse("1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Ragged {
                line: 2,
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn garbage_token_reports_line() {
        let err = parse("1 2\n3 abc\n").unwrap_err();
        match err {
            LoadError::Parse { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse("# nothing\n\n"), Err(LoadError::Empty { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_matrix(Path::new("/definitely/not/here.txt"), NAN_FILL).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("here.txt"));
    }
}
