//! Grid normalization and encoding
//!
//! Turns a raw, possibly ragged grid into an exact width x height block of
//! 4-bit codes. This stage is total: oversize input is truncated, undersize
//! input is padded with transparent cells, and unrecognized tokens degrade
//! to transparent. Data loss (truncation, unknown tokens) is reported as
//! warnings; padding is the normal case for sprites smaller than the
//! canvas and is silent.

use crate::loader::RawGrid;
use crate::palette::PaletteMap;
use std::collections::HashSet;

/// Default canvas width in cells.
pub const TARGET_W: usize = 80;

/// Default canvas height in cells.
pub const TARGET_H: usize = 80;

/// A warning generated during encoding
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A normalized sprite: exactly `height` rows of exactly `width` codes.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteGrid {
    rows: Vec<Vec<String>>,
}

impl SpriteGrid {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Encode a raw grid onto a `width` x `height` canvas.
///
/// Each cell is whitespace-trimmed and mapped through the palette table.
/// Output dimensions are invariant regardless of input shape: missing rows
/// and cells encode as transparent, extra rows and cells are cut.
///
/// # Examples
///
/// ```
/// use csv2vhdl::encoder::encode_sprite;
/// use csv2vhdl::palette::PaletteMap;
///
/// let grid = vec![vec!["1".to_string(), "15".to_string()]];
/// let (sprite, warnings) = encode_sprite(&grid, &PaletteMap::default(), 4, 2);
///
/// assert_eq!(sprite.width(), 4);
/// assert_eq!(sprite.height(), 2);
/// assert_eq!(sprite.rows()[0], vec!["0001", "1111", "0000", "0000"]);
/// assert!(warnings.is_empty());
/// ```
pub fn encode_sprite(
    grid: &RawGrid,
    palette: &PaletteMap,
    width: usize,
    height: usize,
) -> (SpriteGrid, Vec<Warning>) {
    let mut warnings = Vec::new();

    if grid.len() > height {
        warnings.push(Warning::new(format!(
            "Grid has {} rows, expected at most {}, truncating",
            grid.len(),
            height
        )));
    }

    // Warn once per distinct unknown token, not once per cell
    let mut unknown_seen: HashSet<String> = HashSet::new();

    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let source = grid.get(y).map_or(&[][..], Vec::as_slice);

        if source.len() > width {
            warnings.push(Warning::new(format!(
                "Row {} has {} cells, expected at most {}, truncating",
                y + 1,
                source.len(),
                width
            )));
        }

        let mut row = Vec::with_capacity(width);
        for x in 0..width {
            let token = source.get(x).map_or("", String::as_str);
            let code = match palette.lookup(token) {
                Some(code) => code,
                None => {
                    let trimmed = token.trim();
                    if unknown_seen.insert(trimmed.to_string()) {
                        warnings.push(Warning::new(format!(
                            "Unknown token '{}' in row {}, using transparent",
                            trimmed,
                            y + 1
                        )));
                    }
                    crate::palette::TRANSPARENT
                }
            };
            row.push(code.to_string());
        }
        rows.push(row);
    }

    (SpriteGrid { rows }, warnings)
}
