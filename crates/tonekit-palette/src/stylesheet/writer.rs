//! CSS rendering for palettes.

use std::fmt::Write;

use crate::palette::Palette;

use super::CssOptions;

const INDENT: &str = "  ";

/// Renders every block in order. The output always ends with a newline.
pub(crate) fn write_css(palette: &Palette, options: &CssOptions) -> String {
    let mut out = String::new();

    for block in palette.blocks() {
        if options.theme_comments && !block.theme().is_empty() {
            // String writes are infallible.
            let _ = writeln!(out, "/* {} theme */", block.theme());
        }
        let _ = writeln!(out, "{} {{", block.scope());
        for token in block.tokens() {
            let _ = writeln!(out, "{}{}: {};", INDENT, token.name(), token.color());
        }
        out.push_str("}\n");
    }

    out
}
