//! Project configuration (`tonekit.yaml`).
//!
//! ```yaml
//! output: src/styles/colors.css
//! range: clamp
//! comments: true
//! preferences: .tonekit/preferences.json
//! definitions: themes.yaml      # or inline `themes:` / `scale:`
//! ```
//!
//! Every key is optional. Relative paths are resolved against the directory
//! holding the configuration file. Without a configuration file the built-in
//! reference themes are used and paths are relative to the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tonekit_palette::{
    DefinitionDocument, RangePolicy, ScaleDefinition, ThemeDefinition, ThemeDefinitions,
    ThemeTable,
};

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "tonekit.yaml";
pub const DEFAULT_OUTPUT: &str = "src/styles/colors.css";
pub const DEFAULT_PREFERENCES: &str = ".tonekit/preferences.json";

/// The configuration file as written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub output: Option<PathBuf>,
    pub range: Option<RangePolicy>,
    pub comments: Option<bool>,
    pub preferences: Option<PathBuf>,
    pub definitions: Option<PathBuf>,
    pub scale: Option<ScaleDefinition>,
    pub themes: Option<Vec<ThemeDefinition>>,
}

/// Configuration with defaults applied and definitions loaded.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: PathBuf,
    /// True when `output` came from the configuration file rather than the
    /// built-in default.
    pub output_configured: bool,
    pub range: RangePolicy,
    pub comments: bool,
    pub preferences: PathBuf,
    pub definitions: ThemeDefinitions,
}

impl ProjectConfig {
    /// Parses configuration text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies defaults and loads theme definitions. Relative paths are
    /// joined onto `base`.
    pub fn resolve(self, base: &Path) -> Result<Settings> {
        let definitions = match (&self.definitions, &self.themes) {
            (Some(_), Some(_)) => {
                bail!("configure either `definitions` or inline `themes`, not both")
            }
            (Some(path), None) => {
                if self.scale.is_some() {
                    bail!("`scale` belongs in the definitions file when `definitions` is set");
                }
                let path = base.join(path);
                ThemeDefinitions::from_file(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?
            }
            (None, Some(themes)) => ThemeDefinitions::from_document(&DefinitionDocument {
                scale: self.scale.clone(),
                themes: themes.clone(),
            })?,
            (None, None) => match &self.scale {
                Some(scale) => ThemeDefinitions::new(ThemeTable::reference(), scale.to_scale()?),
                None => ThemeDefinitions::reference(),
            },
        };

        Ok(Settings {
            output_configured: self.output.is_some(),
            output: base.join(self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))),
            range: self.range.unwrap_or_default(),
            comments: self.comments.unwrap_or(false),
            preferences: base.join(
                self.preferences
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES)),
            ),
            definitions,
        })
    }
}

/// Loads settings from `explicit`, or from [`DEFAULT_CONFIG`] when it exists.
///
/// An explicitly named file must exist; the default one is optional.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG), false),
    };

    if !required && !path.exists() {
        log::debug!("no {} found, using the reference themes", DEFAULT_CONFIG);
        return ProjectConfig::default().resolve(Path::new(""));
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = ProjectConfig::from_yaml(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    log::debug!("loaded configuration from {}", path.display());

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.resolve(base)
}
