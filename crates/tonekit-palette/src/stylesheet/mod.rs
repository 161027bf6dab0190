//! Stylesheet text: writing palettes as CSS and reading them back.
//!
//! The output format is a flat list of rule blocks, one per theme:
//!
//! ```css
//! :root {
//!   --primary-100: oklch(0.9 0.15 260);
//!   ...
//!   --background: oklch(0.98 0 0);
//!   --text: oklch(0.1 0 0);
//! }
//! [data-theme="dark"] {
//!   ...
//! }
//! ```
//!
//! [`parse_stylesheet`] accepts exactly this shape (plus comments and
//! arbitrary whitespace) and rebuilds the [`Palette`](crate::Palette) it came
//! from, which is what drift checking compares against.

mod css_parser;
mod writer;

pub use css_parser::parse_stylesheet;
pub(crate) use writer::write_css;

/// Options for rendering a palette as CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CssOptions {
    /// Emit a `/* <id> theme */` comment before each block.
    pub theme_comments: bool,
}

impl CssOptions {
    pub fn with_theme_comments(mut self, enabled: bool) -> Self {
        self.theme_comments = enabled;
        self
    }
}
