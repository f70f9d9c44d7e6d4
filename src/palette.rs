//! Palette index mapping
//!
//! Maps raw cell tokens ("0"-"15", or empty for transparent) to 4-bit
//! binary code strings. The canonical 16-entry table is fixed; a custom
//! table can be loaded from a JSON file for non-standard palettes.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Code used for transparent cells and for anything the table does not know.
pub const TRANSPARENT: &str = "0000";

/// Error type for custom mapping table loading.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("cannot read mapping file '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid mapping file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid code '{code}' for token '{token}': expected 4 binary digits")]
    InvalidCode { token: String, code: String },
}

/// On-disk shape of a custom mapping file: a JSON object of
/// token -> 4-bit binary code.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MappingFile {
    pub entries: HashMap<String, String>,
}

/// Immutable token -> 4-bit code table.
///
/// Lookups trim surrounding whitespace from the token first, so `" 5 "`
/// and `"5"` resolve identically.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteMap {
    codes: HashMap<String, String>,
}

impl Default for PaletteMap {
    /// The canonical table: `""` and `"0"` are transparent, `"1"`..`"15"`
    /// are their 4-bit binary encodings.
    fn default() -> Self {
        let mut codes = HashMap::with_capacity(17);
        codes.insert(String::new(), TRANSPARENT.to_string());
        for index in 0u8..16 {
            codes.insert(index.to_string(), format!("{:04b}", index));
        }
        Self { codes }
    }
}

impl PaletteMap {
    /// Load a custom table from a JSON object of token -> 4-bit binary code.
    ///
    /// Every code is validated. The empty token is always present: if the
    /// file does not define one, it maps to transparent, so padding cells
    /// encode the same way they do with the canonical table.
    pub fn from_json_file(path: &Path) -> Result<Self, PaletteError> {
        let text = std::fs::read_to_string(path).map_err(|e| PaletteError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;
        let file: MappingFile = serde_json::from_str(&text)?;

        let mut codes = HashMap::with_capacity(file.entries.len() + 1);
        for (token, code) in file.entries {
            if !is_valid_code(&code) {
                return Err(PaletteError::InvalidCode { token, code });
            }
            codes.insert(token.trim().to_string(), code);
        }
        codes
            .entry(String::new())
            .or_insert_with(|| TRANSPARENT.to_string());

        Ok(Self { codes })
    }

    /// Look a token up, trimming whitespace. `None` means the token is not
    /// in the table (the encoder decides what that means).
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.codes.get(token.trim()).map(String::as_str)
    }

    /// Map a token to its code, degrading to transparent for anything
    /// unrecognized. Never fails.
    pub fn code_for(&self, token: &str) -> &str {
        self.lookup(token).unwrap_or(TRANSPARENT)
    }
}

fn is_valid_code(code: &str) -> bool {
    code.len() == 4 && code.chars().all(|c| c == '0' || c == '1')
}
