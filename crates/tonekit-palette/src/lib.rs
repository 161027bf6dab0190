//! # Tonekit Palette - OKLCH Theme Tokens for CSS
//!
//! `tonekit-palette` turns a small table of theme parameters into a complete
//! set of CSS custom properties. Every theme contributes three scalable color
//! axes (`primary`, `secondary`, `neutral`) and two fixed colors
//! (`background`, `text`). A shared shade scale maps shade labels such as
//! `100`..`700` to lightness offsets, so one axis definition expands into a
//! whole ramp of tokens.
//!
//! ## Core Concepts
//!
//! - [`ThemeSpec`] / [`ThemeTable`]: Theme parameters, in emission order
//! - [`ShadeScale`]: Shade labels and their lightness offsets
//! - [`generate`]: Pure, deterministic expansion into a [`Palette`]
//! - [`Palette`]: Ordered `(selector, tokens)` blocks, renderable as CSS
//!
//! The first theme is the default and is emitted under `:root`; every other
//! theme is scoped to `[data-theme="<id>"]` so the cascade switches themes
//! when that attribute is set on an ancestor element.
//!
//! ## Quick Start
//!
//! ```rust
//! use tonekit_palette::{generate_with, GenerateOptions, RangePolicy, ShadeScale, ThemeTable};
//!
//! let table = ThemeTable::reference();
//! let options = GenerateOptions::default().with_range(RangePolicy::Clamp);
//! let palette = generate_with(table.themes(), &ShadeScale::reference(), &options).unwrap();
//!
//! let css = palette.to_string();
//! assert!(css.starts_with(":root {\n  --primary-100: oklch(0.9 0.15 260);\n"));
//! assert!(css.contains("[data-theme=\"forest\"] {\n"));
//! ```
//!
//! ## Beyond Generation
//!
//! - [`ThemeDefinitions`]: Load themes and scale from YAML or JSON files
//! - [`parse_stylesheet`] and [`diff`]: Read a generated stylesheet back and
//!   report [`Drift`] against what would be generated now
//! - [`Palette::to_format`]: JSON, YAML and CSV exports
//! - [`PreferenceStore`]: Persist the user's selected theme
//!
//! All fallible operations return [`PaletteError`]. Nothing is written or
//! returned until the whole input has been validated.

pub mod color;
pub mod definition;
pub mod drift;
pub mod error;
pub mod export;
pub mod generate;
pub mod palette;
pub mod prefs;
pub mod scale;
pub mod stylesheet;
pub mod theme;

pub use color::Oklch;
pub use definition::{DefinitionDocument, ScaleDefinition, ThemeDefinition, ThemeDefinitions};
pub use drift::{diff, Drift};
pub use error::{PaletteError, Result};
pub use export::Format;
pub use generate::{generate, generate_stylesheet, generate_with, GenerateOptions, RangePolicy};
pub use palette::{Palette, Scope, ThemeBlock, Token};
pub use prefs::{preferred_theme, PreferenceStore, THEME_KEY};
pub use scale::ShadeScale;
pub use stylesheet::{parse_stylesheet, CssOptions};
pub use theme::{Axis, ColorAxis, FixedColor, FixedSlot, ThemeSpec, ThemeTable};
