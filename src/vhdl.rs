//! VHDL array-constant serialization

use crate::encoder::SpriteGrid;

/// Names used in the rendered constant declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralStyle {
    pub constant: String,
    pub type_name: String,
}

impl Default for LiteralStyle {
    fn default() -> Self {
        Self {
            constant: "SPRITE".to_string(),
            type_name: "sprite_t".to_string(),
        }
    }
}

/// Render a normalized sprite as a VHDL array-constant literal.
///
/// One line per row, four-space indented, in the form
/// `<row> => ("0000", "0001", ...)`. Rows are separated by `,\n`, the last
/// row carries no comma, and the block closes with `);`. Output is
/// byte-for-byte deterministic for a given sprite.
pub fn render_literal(sprite: &SpriteGrid, style: &LiteralStyle) -> String {
    let rows = sprite.rows();
    // Rough capacity: 8 bytes per code plus per-row overhead
    let mut out = String::with_capacity(rows.len() * (sprite.width() * 8 + 16) + 64);

    out.push_str(&format!(
        "CONSTANT {} : {} := (\n",
        style.constant, style.type_name
    ));
    for (y, row) in rows.iter().enumerate() {
        let entries = row
            .iter()
            .map(|code| format!("\"{}\"", code))
            .collect::<Vec<_>>()
            .join(", ");
        let end = if y + 1 < rows.len() { "," } else { "" };
        out.push_str(&format!("    {} => ({}){}\n", y, entries, end));
    }
    out.push_str(");\n");

    out
}
