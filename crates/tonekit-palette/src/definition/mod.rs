//! Theme definition files (YAML or JSON).
//!
//! A definition document lists the themes in emission order and, optionally,
//! the shade scale:
//!
//! ```yaml
//! scale:
//!   labels: [100, 200, 300, 400, 500, 600, 700]
//!   offsets: [0.3, 0.2, 0.1, 0, -0.1, -0.2, -0.3]
//! themes:
//!   - id: light
//!     primary:   { hue: 260, chroma: 0.15, lightness_base: 0.6 }
//!     secondary: { hue: 40,  chroma: 0.18, lightness_base: 0.65 }
//!     neutral:   { hue: 0,   chroma: 0,    lightness_base: 0.9 }
//!     background: { hue: 0, chroma: 0, lightness: 0.98 }
//!     text:       { hue: 0, chroma: 0, lightness: 0.1 }
//! ```
//!
//! Without `scale`, the reference 100-700 scale is used. `lightnessBase` is
//! accepted as an alias of `lightness_base`, and `name` as an alias of `id`.
//!
//! # Two phases
//!
//! 1. **Parse**: YAML/JSON into the definition types below. Every field is
//!    optional here, so a document that is merely incomplete still parses.
//! 2. **Build**: definitions into a validated [`ThemeTable`](crate::ThemeTable)
//!    and [`ShadeScale`](crate::ShadeScale). Missing entries are reported as
//!    [`PaletteError::InvalidSpec`](crate::PaletteError::InvalidSpec) naming
//!    the theme and the field.
//!
//! Unknown keys are rejected in the parse phase so typos do not silently
//! fall back to defaults.

mod parser;

pub use parser::ThemeDefinitions;

use serde::{Deserialize, Serialize};

/// A whole definition document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleDefinition>,
    #[serde(default)]
    pub themes: Vec<ThemeDefinition>,
}

/// One theme entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDefinition {
    #[serde(alias = "name")]
    pub id: Option<String>,
    pub primary: Option<AxisDefinition>,
    pub secondary: Option<AxisDefinition>,
    pub neutral: Option<AxisDefinition>,
    pub background: Option<FixedDefinition>,
    pub text: Option<FixedDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisDefinition {
    pub hue: Option<f64>,
    pub chroma: Option<f64>,
    #[serde(alias = "lightnessBase")]
    pub lightness_base: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedDefinition {
    pub hue: Option<f64>,
    pub chroma: Option<f64>,
    pub lightness: Option<f64>,
}

/// Shade labels and their lightness offsets, index aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleDefinition {
    pub labels: Option<Vec<u32>>,
    pub offsets: Option<Vec<f64>>,
}
