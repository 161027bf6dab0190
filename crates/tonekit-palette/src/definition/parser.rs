//! Building validated themes from definition documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PaletteError, Result};
use crate::generate::{generate_with, GenerateOptions};
use crate::palette::Palette;
use crate::scale::ShadeScale;
use crate::theme::{Axis, ColorAxis, FixedColor, FixedSlot, ThemeSpec, ThemeTable};

use super::{AxisDefinition, DefinitionDocument, FixedDefinition, ScaleDefinition, ThemeDefinition};

/// A validated theme table together with the scale it is generated with.
///
/// # Example
///
/// ```rust
/// use tonekit_palette::ThemeDefinitions;
///
/// let defs = ThemeDefinitions::from_yaml(r#"
/// scale:
///   labels: [500]
///   offsets: [0]
/// themes:
///   - id: light
///     primary:   { hue: 260, chroma: 0.15, lightnessBase: 0.6 }
///     secondary: { hue: 40,  chroma: 0.18, lightnessBase: 0.65 }
///     neutral:   { hue: 0,   chroma: 0,    lightnessBase: 0.9 }
///     background: { hue: 0, chroma: 0, lightness: 0.98 }
///     text:       { hue: 0, chroma: 0, lightness: 0.1 }
/// "#).unwrap();
///
/// let palette = defs.generate(&Default::default()).unwrap();
/// assert_eq!(palette.token_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDefinitions {
    table: ThemeTable,
    scale: ShadeScale,
}

impl ThemeDefinitions {
    /// Pairs an already validated table with a scale.
    pub fn new(table: ThemeTable, scale: ShadeScale) -> Self {
        Self { table, scale }
    }

    /// The reference table with the reference scale.
    pub fn reference() -> Self {
        Self::new(ThemeTable::reference(), ShadeScale::reference())
    }

    /// Parses a YAML definition document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        parse_yaml(content, None)
    }

    /// Parses a JSON definition document.
    pub fn from_json(content: &str) -> Result<Self> {
        parse_json(content, None)
    }

    /// Loads a definition file, choosing the format by extension:
    /// `.yaml`/`.yml` for YAML, `.json` for JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PaletteError::Load {
            message: format!("{}: {}", path.display(), e),
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        log::debug!("loading theme definitions from {}", path.display());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => parse_yaml(&content, Some(path)),
            Some("json") => parse_json(&content, Some(path)),
            _ => Err(PaletteError::Load {
                message: format!(
                    "{}: unsupported definition file extension, expected .yaml, .yml or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Builds validated definitions from a parsed document.
    pub fn from_document(document: &DefinitionDocument) -> Result<Self> {
        let themes = document
            .themes
            .iter()
            .enumerate()
            .map(|(index, theme)| build_theme(index, theme))
            .collect::<Result<Vec<_>>>()?;
        let table = ThemeTable::new(themes)?;

        let scale = match &document.scale {
            Some(scale) => scale.to_scale()?,
            None => ShadeScale::reference(),
        };

        Ok(Self { table, scale })
    }

    pub fn table(&self) -> &ThemeTable {
        &self.table
    }

    pub fn scale(&self) -> &ShadeScale {
        &self.scale
    }

    /// Generates the palette for these definitions.
    pub fn generate(&self, options: &GenerateOptions) -> Result<Palette> {
        generate_with(self.table.themes(), &self.scale, options)
    }
}

impl Default for ThemeDefinitions {
    fn default() -> Self {
        Self::reference()
    }
}

fn parse_yaml(content: &str, path: Option<&Path>) -> Result<ThemeDefinitions> {
    let document: DefinitionDocument =
        serde_yaml::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;
    ThemeDefinitions::from_document(&document)
}

fn parse_json(content: &str, path: Option<&Path>) -> Result<ThemeDefinitions> {
    let document: DefinitionDocument =
        serde_json::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;
    ThemeDefinitions::from_document(&document)
}

fn parse_error(path: Option<&Path>, message: String) -> PaletteError {
    PaletteError::Parse {
        path: path.map(PathBuf::from),
        message,
    }
}

fn build_theme(index: usize, def: &ThemeDefinition) -> Result<ThemeSpec> {
    let id = def
        .id
        .as_deref()
        .ok_or_else(|| PaletteError::spec(format!("theme #{}", index + 1), "missing field 'id'"))?;
    let context = format!("theme '{}'", id);

    let mut theme = ThemeSpec::new(id);
    for axis in Axis::ALL {
        let entry = match axis {
            Axis::Primary => &def.primary,
            Axis::Secondary => &def.secondary,
            Axis::Neutral => &def.neutral,
        };
        let entry = entry
            .as_ref()
            .ok_or_else(|| PaletteError::spec(&context, format!("missing axis '{}'", axis)))?;
        theme = theme.with_axis(axis, build_axis(&context, axis, entry)?);
    }

    for slot in FixedSlot::ALL {
        let entry = match slot {
            FixedSlot::Background => &def.background,
            FixedSlot::Text => &def.text,
        };
        let entry = entry.as_ref().ok_or_else(|| {
            PaletteError::spec(&context, format!("missing fixed color '{}'", slot.name()))
        })?;
        theme = theme.with_fixed(slot, build_fixed(&context, slot, entry)?);
    }

    theme.validate()?;
    Ok(theme)
}

fn build_axis(context: &str, axis: Axis, def: &AxisDefinition) -> Result<ColorAxis> {
    let field = |name: &str, value: Option<f64>| {
        value.ok_or_else(|| {
            PaletteError::spec(context, format!("missing field '{}.{}'", axis, name))
        })
    };
    Ok(ColorAxis::new(
        field("hue", def.hue)?,
        field("chroma", def.chroma)?,
        field("lightness_base", def.lightness_base)?,
    ))
}

fn build_fixed(context: &str, slot: FixedSlot, def: &FixedDefinition) -> Result<FixedColor> {
    let field = |name: &str, value: Option<f64>| {
        value.ok_or_else(|| {
            PaletteError::spec(context, format!("missing field '{}.{}'", slot.name(), name))
        })
    };
    Ok(FixedColor::new(
        field("hue", def.hue)?,
        field("chroma", def.chroma)?,
        field("lightness", def.lightness)?,
    ))
}

impl ScaleDefinition {
    /// Builds a validated scale. Both `labels` and `offsets` are required.
    pub fn to_scale(&self) -> Result<ShadeScale> {
        let labels = self
            .labels
            .clone()
            .ok_or_else(|| PaletteError::spec("shade scale", "missing field 'labels'"))?;
        let offsets = self
            .offsets
            .clone()
            .ok_or_else(|| PaletteError::spec("shade scale", "missing field 'offsets'"))?;
        ShadeScale::new(labels, offsets)
    }
}
