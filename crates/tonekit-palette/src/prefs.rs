//! Persisted user preferences, most importantly the selected theme.
//!
//! Preferences are a flat string map stored as a JSON object:
//!
//! ```json
//! { "theme": "dark" }
//! ```
//!
//! A missing file is an empty store. The file is only written on
//! [`PreferenceStore::save`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PaletteError, Result};
use crate::theme::ThemeTable;

/// Key under which the selected theme id is stored.
pub const THEME_KEY: &str = "theme";

/// A string key-value store backed by a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Opens the store at `path`. A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// [`PaletteError::Load`] if the file exists but cannot be read, and
    /// [`PaletteError::Preferences`] if it is not a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| PaletteError::Preferences {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no preferences at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                return Err(PaletteError::Load {
                    message: format!("{}: {}", path.display(), e),
                })
            }
        };

        Ok(Self { path, values })
    }

    /// Path the store reads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Writes the store to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| PaletteError::Load {
                    message: format!("{}: {}", parent.display(), e),
                })?;
            }
        }

        let mut content = serde_json::to_string_pretty(&self.values)?;
        content.push('\n');
        fs::write(&self.path, content).map_err(|e| PaletteError::Load {
            message: format!("{}: {}", self.path.display(), e),
        })
    }
}

/// Returns the stored theme id if the table knows it, else the default
/// theme's id.
pub fn preferred_theme<'a>(store: &PreferenceStore, table: &'a ThemeTable) -> &'a str {
    match store.get(THEME_KEY) {
        Some(id) => match table.get(id) {
            Some(theme) => theme.id(),
            None => {
                log::warn!(
                    "stored theme '{}' is not defined, using '{}'",
                    id,
                    table.default_theme().id()
                );
                table.default_theme().id()
            }
        },
        None => table.default_theme().id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_set_save_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = PreferenceStore::open(&path).unwrap();
        store.set(THEME_KEY, "dark");
        store.save().unwrap();

        let reopened = PreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY), Some("dark"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = PreferenceStore::open(dir.path().join("p.json")).unwrap();
        store.set(THEME_KEY, "forest");
        assert_eq!(store.remove(THEME_KEY), Some("forest".to_string()));
        assert_eq!(store.get(THEME_KEY), None);
        assert_eq!(store.remove(THEME_KEY), None);
    }

    #[test]
    fn test_invalid_json_is_preferences_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.json");
        fs::write(&path, "[1, 2").unwrap();
        let err = PreferenceStore::open(&path).unwrap_err();
        assert!(matches!(err, PaletteError::Preferences { .. }));
        assert!(err.to_string().starts_with("failed to parse preferences in "));
    }

    #[test]
    fn test_preferred_theme_known() {
        let dir = TempDir::new().unwrap();
        let mut store = PreferenceStore::open(dir.path().join("p.json")).unwrap();
        store.set(THEME_KEY, "forest");
        assert_eq!(preferred_theme(&store, &ThemeTable::reference()), "forest");
    }

    #[test]
    fn test_preferred_theme_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let mut store = PreferenceStore::open(dir.path().join("p.json")).unwrap();
        let table = ThemeTable::reference();

        assert_eq!(preferred_theme(&store, &table), "light");
        store.set(THEME_KEY, "solarized");
        assert_eq!(preferred_theme(&store, &table), "light");
    }
}
