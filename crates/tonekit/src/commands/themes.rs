use std::io::Write;

use anyhow::Result;
use console::style;
use tonekit_palette::{preferred_theme, PreferenceStore};

use crate::config::Settings;

/// Lists theme ids in emission order. The default theme is listed first and
/// the stored preference is marked with `*`.
pub fn run(settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let table = settings.definitions.table();
    let store = PreferenceStore::open(&settings.preferences)?;
    let preferred = preferred_theme(&store, table);

    for (index, id) in table.ids().enumerate() {
        let marker = if id == preferred { "*" } else { " " };
        if index == 0 {
            writeln!(out, "{} {} {}", marker, id, style("(default)").dim())?;
        } else {
            writeln!(out, "{} {}", marker, id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use tempfile::TempDir;
    use tonekit_palette::THEME_KEY;

    #[test]
    fn test_lists_reference_themes() {
        let dir = TempDir::new().unwrap();
        let settings = ProjectConfig::default().resolve(dir.path()).unwrap();

        let mut out = Vec::new();
        run(&settings, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("* light "));
        assert_eq!(lines[1], "  dark");
        assert_eq!(lines[2], "  forest");
    }

    #[test]
    fn test_marks_preferred_theme() {
        let dir = TempDir::new().unwrap();
        let settings = ProjectConfig::default().resolve(dir.path()).unwrap();
        let mut store = PreferenceStore::open(&settings.preferences).unwrap();
        store.set(THEME_KEY, "forest");
        store.save().unwrap();

        let mut out = Vec::new();
        run(&settings, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.lines().next().unwrap().starts_with("  light "));
        assert!(text.contains("* forest\n"));
    }
}
