use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use tonekit_palette::{preferred_theme, PreferenceStore, THEME_KEY};

use crate::config::Settings;

#[derive(Debug, Clone, Default, Args)]
pub struct ThemeArgs {
    /// Theme id to select; prints the current theme when omitted
    pub id: Option<String>,

    /// Forget the stored preference and fall back to the default theme
    #[arg(long, conflicts_with = "id")]
    pub reset: bool,
}

pub fn run(settings: &Settings, args: &ThemeArgs, out: &mut dyn Write) -> Result<()> {
    let table = settings.definitions.table();
    let mut store = PreferenceStore::open(&settings.preferences)?;

    if args.reset {
        if store.remove(THEME_KEY).is_some() {
            store.save()?;
        }
        log::info!("theme reset to '{}'", table.default_theme().id());
        return Ok(());
    }

    match &args.id {
        None => {
            writeln!(out, "{}", preferred_theme(&store, table))?;
        }
        Some(id) => {
            if table.get(id).is_none() {
                let known: Vec<_> = table.ids().collect();
                bail!("unknown theme '{}', expected one of: {}", id, known.join(", "));
            }
            store.set(THEME_KEY, id.as_str());
            store.save()?;
            log::info!("theme set to '{}'", id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use tempfile::TempDir;

    fn show(settings: &Settings) -> String {
        let mut out = Vec::new();
        run(settings, &ThemeArgs::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_set_show_reset() {
        let dir = TempDir::new().unwrap();
        let settings = ProjectConfig::default().resolve(dir.path()).unwrap();
        assert_eq!(show(&settings), "light\n");

        let set = ThemeArgs {
            id: Some("dark".to_string()),
            ..Default::default()
        };
        run(&settings, &set, &mut Vec::new()).unwrap();
        assert_eq!(show(&settings), "dark\n");
        assert!(settings.preferences.exists());

        let reset = ThemeArgs {
            reset: true,
            ..Default::default()
        };
        run(&settings, &reset, &mut Vec::new()).unwrap();
        assert_eq!(show(&settings), "light\n");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let dir = TempDir::new().unwrap();
        let settings = ProjectConfig::default().resolve(dir.path()).unwrap();
        let args = ThemeArgs {
            id: Some("solarized".to_string()),
            ..Default::default()
        };
        let err = run(&settings, &args, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("light, dark, forest"));
        assert!(!settings.preferences.exists());
    }
}
