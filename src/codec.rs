use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Grid;

/// Separator between cell values within a row.
pub const DELIMITER: char = ';';

pub type ParseResult<T> = Result<T, FormatError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("grid source contains no rows")]
    Empty,

    #[error("line {line}: expected 0 or 1, found \"{token}\"")]
    InvalidCell { line: usize, token: String },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("grid file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// Parse the line-oriented grid format.
///
/// One row per line, flags separated by [`DELIMITER`], each flag `0` or `1`
/// after surrounding whitespace is trimmed. Blank lines are ignored, so the
/// newline-terminated output of [`serialize`] parses back unchanged. Rows
/// must all have the length of the first row.
pub fn parse(text: &str) -> ParseResult<Grid> {
    let mut cells = Vec::new();
    let mut cols = None;
    let mut rows = 0;

    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let line_no = number + 1;
        let before = cells.len();

        for token in line.split(DELIMITER) {
            let token = token.trim();

            match token {
                "0" => cells.push(0),
                "1" => cells.push(1),
                _ => {
                    return Err(FormatError::InvalidCell {
                        line: line_no,
                        token: token.to_string(),
                    });
                }
            }
        }

        let found = cells.len() - before;
        let expected = *cols.get_or_insert(found);

        if found != expected {
            return Err(FormatError::RaggedRow {
                line: line_no,
                expected,
                found,
            });
        }

        rows += 1;
    }

    let Some(cols) = cols else {
        return Err(FormatError::Empty);
    };

    Ok(Grid::from_cells(rows, cols, cells))
}

/// Serialize a grid back to the line-oriented format.
///
/// The output is newline-terminated and round-trips through [`parse`].
pub fn serialize(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (2 * grid.cols() + 1));

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if col > 0 {
                out.push(DELIMITER);
            }

            out.push(if grid.is_alive(row, col) { '1' } else { '0' });
        }

        out.push('\n');
    }

    out
}

/// Load and parse a grid file.
///
/// A missing file and malformed content surface as distinct variants so
/// callers can report them separately.
pub fn read_grid(path: &Path) -> Result<Grid, ReadError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ReadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse(&text).map_err(|source| ReadError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist a grid in the same format [`read_grid`] accepts.
pub fn write_grid(grid: &Grid, path: &Path) -> io::Result<()> {
    std::fs::write(path, serialize(grid))
}
