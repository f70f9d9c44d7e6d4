//! Literal delivery and output path generation

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Error type for delivery operations
#[derive(Debug)]
pub struct OutputError {
    pub target: String,
    pub source: io::Error,
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot write '{}': {}", self.target, self.source)
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Deliver the rendered literal.
///
/// With no path the text goes to standard output; with a path it is
/// written to that file, creating parent directories as needed.
pub fn write_literal(text: &str, path: Option<&Path>) -> Result<(), OutputError> {
    match path {
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| OutputError {
                    target: "<stdout>".to_string(),
                    source: e,
                })
        }
        Some(path) => {
            let fail = |e| OutputError {
                target: path.display().to_string(),
                source: e,
            };
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(fail)?;
                }
            }
            fs::write(path, text).map_err(fail)
        }
    }
}

/// Resolve the effective output path.
///
/// `None` means stdout. A path that is an existing directory gets
/// `{input stem}.vhd` appended; anything else is used as-is.
pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> Option<PathBuf> {
    let output = output?;
    if output.is_dir() {
        let stem = input
            .file_stem()
            .map_or_else(|| "sprite".into(), |s| s.to_string_lossy());
        Some(output.join(format!("{}.vhd", stem)))
    } else {
        Some(output.to_path_buf())
    }
}
