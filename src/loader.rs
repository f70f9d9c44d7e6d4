//! CSV grid loading
//!
//! Reads a delimited text table into a raw grid of cell strings. Rows keep
//! their original field counts (spreadsheet exports are often ragged), and
//! no row is dropped. Normalization happens later in the encoder.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Error type for grid loading failures.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input path could not be opened for reading.
    #[error("cannot open '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The content could not be tokenized into rows and fields.
    #[error("line {line}: {message}")]
    MalformedSource { message: String, line: usize },
}

/// An unnormalized grid: rows of raw cell strings, possibly ragged.
pub type RawGrid = Vec<Vec<String>>;

/// Load a raw grid from a CSV file on disk.
pub fn load_grid(path: &Path) -> Result<RawGrid, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::SourceUnavailable {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_grid(BufReader::new(file))
}

/// Parse a CSV stream into a raw grid.
///
/// Fields are comma-separated and may be wrapped in double quotes, with
/// `""` inside a quoted field standing for a literal quote. No header row
/// is assumed or skipped. A blank line produces an empty row.
///
/// Returns `MalformedSource` if the stream is not valid UTF-8, a read
/// fails mid-stream, or a quoted field is left unterminated.
pub fn parse_grid<R: Read>(reader: R) -> Result<RawGrid, LoadError> {
    let buf_reader = BufReader::new(reader);
    let mut grid = RawGrid::new();

    for (i, line) in buf_reader.lines().enumerate() {
        let line_number = i + 1;
        let line = line.map_err(|e| LoadError::MalformedSource {
            message: e.to_string(),
            line: line_number,
        })?;
        // lines() strips the \n but leaves the \r of CRLF endings behind
        let line = line.strip_suffix('\r').unwrap_or(&line);
        grid.push(split_fields(line, line_number)?);
    }

    Ok(grid)
}

/// Split one CSV record into its fields.
///
/// An empty line is an empty record (no fields), matching common CSV
/// reader behavior. A bare `,` is two empty fields.
fn split_fields(line: &str, line_number: usize) -> Result<Vec<String>, LoadError> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // A quote opens a quoted section only at the start of a field;
            // anywhere else it is a literal character
            '"' if field.is_empty() => {
                // Quoted section: runs until the closing quote
                let mut closed = false;
                while let Some(inner) = chars.next() {
                    if inner == '"' {
                        if chars.peek() == Some(&'"') {
                            // Escaped quote
                            field.push('"');
                            chars.next();
                        } else {
                            closed = true;
                            break;
                        }
                    } else {
                        field.push(inner);
                    }
                }
                if !closed {
                    return Err(LoadError::MalformedSource {
                        message: format!("unterminated quoted field '{}'", field),
                        line: line_number,
                    });
                }
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);

    Ok(fields)
}
