//! The generated palette: an ordered list of scoped token blocks.
//!
//! A [`Palette`] is the in-memory form of a stylesheet. Each [`ThemeBlock`]
//! pairs a [`Scope`] (the selector) with the tokens declared inside it, in
//! emission order. Text rendering happens separately (see
//! [`Palette::to_css`] and [`crate::export`]), which keeps emission order
//! inspectable without parsing strings.

use std::fmt;

use crate::color::Oklch;
use crate::stylesheet::{write_css, CssOptions};

/// The selector under which a theme's tokens become active.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The document root, used by the default theme.
    Root,
    /// `[data-theme="<id>"]`, used by every other theme.
    Theme(String),
}

impl Scope {
    /// The CSS selector text.
    pub fn selector(&self) -> String {
        match self {
            Scope::Root => ":root".to_string(),
            Scope::Theme(id) => format!("[data-theme=\"{}\"]", id),
        }
    }

    /// Returns true for the unscoped root block.
    pub fn is_root(&self) -> bool {
        matches!(self, Scope::Root)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// A single custom property declaration, e.g. `--primary-500: oklch(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    name: String,
    color: Oklch,
}

impl Token {
    /// Creates a token. `name` includes the leading `--`.
    pub fn new(name: impl Into<String>, color: Oklch) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Custom property name, including the leading `--`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared color.
    pub fn color(&self) -> Oklch {
        self.color
    }
}

/// The tokens of one theme under one selector.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeBlock {
    theme: String,
    scope: Scope,
    tokens: Vec<Token>,
}

impl ThemeBlock {
    /// Creates a block.
    pub fn new(theme: impl Into<String>, scope: Scope, tokens: Vec<Token>) -> Self {
        Self {
            theme: theme.into(),
            scope,
            tokens,
        }
    }

    /// Theme id. Empty for a `:root` block read back from CSS, where the id
    /// is not recorded.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Tokens in emission order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Looks up a token's color by name.
    pub fn get(&self, name: &str) -> Option<Oklch> {
        self.tokens
            .iter()
            .find(|token| token.name == name)
            .map(Token::color)
    }
}

/// A complete generated palette.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    blocks: Vec<ThemeBlock>,
}

impl Palette {
    /// Creates a palette from blocks in emission order.
    pub fn new(blocks: Vec<ThemeBlock>) -> Self {
        Self { blocks }
    }

    /// Blocks in emission order.
    pub fn blocks(&self) -> &[ThemeBlock] {
        &self.blocks
    }

    /// Looks up the block of a theme by id.
    pub fn block(&self, theme: &str) -> Option<&ThemeBlock> {
        self.blocks.iter().find(|block| block.theme == theme)
    }

    /// Looks up a block by scope.
    pub fn block_by_scope(&self, scope: &Scope) -> Option<&ThemeBlock> {
        self.blocks.iter().find(|block| &block.scope == scope)
    }

    /// Total number of token declarations across all blocks.
    pub fn token_count(&self) -> usize {
        self.blocks.iter().map(|block| block.tokens.len()).sum()
    }

    /// Renders the palette as a stylesheet.
    pub fn to_css(&self, options: &CssOptions) -> String {
        write_css(self, options)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(&CssOptions::default()))
    }
}
