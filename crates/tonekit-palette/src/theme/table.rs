//! Ordered theme tables.
//!
//! The table order is significant: the first theme is the default theme and
//! is emitted under `:root`, every other theme is emitted in insertion order
//! under its own `[data-theme="<id>"]` scope.

use std::collections::HashSet;

use crate::error::{PaletteError, Result};

use super::spec::{validate_id, Axis, ColorAxis, FixedColor, FixedSlot, ThemeSpec};

/// A non-empty, ordered list of themes with unique ids.
///
/// Individual themes are not validated here; completeness and numeric
/// domains are checked during generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTable {
    themes: Vec<ThemeSpec>,
}

impl ThemeTable {
    /// Creates a table from themes in emission order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidSpec`] for an empty list, a duplicate
    /// id, or an id that cannot be used in an attribute selector.
    pub fn new(themes: Vec<ThemeSpec>) -> Result<Self> {
        validate_table(&themes)?;
        Ok(Self { themes })
    }

    /// The built-in `light`, `dark` and `forest` themes.
    ///
    /// These values are kept exactly as designed. Note that the `light` and
    /// `dark` neutral axes combined with the reference scale reach lightness
    /// values outside `[0, 1]`, so strict generation rejects this table;
    /// use [`RangePolicy::Clamp`](crate::RangePolicy::Clamp) to generate it.
    pub fn reference() -> Self {
        let themes = vec![
            ThemeSpec::new("light")
                .with_axis(Axis::Primary, ColorAxis::new(260.0, 0.15, 0.6))
                .with_axis(Axis::Secondary, ColorAxis::new(40.0, 0.18, 0.65))
                .with_axis(Axis::Neutral, ColorAxis::new(0.0, 0.0, 0.9))
                .with_fixed(FixedSlot::Background, FixedColor::new(0.0, 0.0, 0.98))
                .with_fixed(FixedSlot::Text, FixedColor::new(0.0, 0.0, 0.1)),
            ThemeSpec::new("dark")
                .with_axis(Axis::Primary, ColorAxis::new(260.0, 0.15, 0.7))
                .with_axis(Axis::Secondary, ColorAxis::new(40.0, 0.18, 0.75))
                .with_axis(Axis::Neutral, ColorAxis::new(0.0, 0.0, 0.2))
                .with_fixed(FixedSlot::Background, FixedColor::new(0.0, 0.0, 0.1))
                .with_fixed(FixedSlot::Text, FixedColor::new(0.0, 0.0, 0.95)),
            ThemeSpec::new("forest")
                .with_axis(Axis::Primary, ColorAxis::new(160.0, 0.12, 0.55))
                .with_axis(Axis::Secondary, ColorAxis::new(20.0, 0.15, 0.6))
                .with_axis(Axis::Neutral, ColorAxis::new(0.0, 0.0, 0.85))
                .with_fixed(FixedSlot::Background, FixedColor::new(160.0, 0.02, 0.95))
                .with_fixed(FixedSlot::Text, FixedColor::new(0.0, 0.0, 0.15)),
        ];
        Self { themes }
    }

    /// Themes in emission order.
    pub fn themes(&self) -> &[ThemeSpec] {
        &self.themes
    }

    /// The default theme (the first one).
    pub fn default_theme(&self) -> &ThemeSpec {
        // Non-empty by construction.
        &self.themes[0]
    }

    /// Looks up a theme by id.
    pub fn get(&self, id: &str) -> Option<&ThemeSpec> {
        self.themes.iter().find(|theme| theme.id() == id)
    }

    /// Looks up a theme by id, falling back to the default theme.
    pub fn get_or_default(&self, id: &str) -> &ThemeSpec {
        self.get(id).unwrap_or_else(|| self.default_theme())
    }

    /// Theme ids in emission order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(ThemeSpec::id)
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// Checks the table-level invariants shared by [`ThemeTable::new`] and the
/// generator, which also accepts plain slices.
pub(crate) fn validate_table(themes: &[ThemeSpec]) -> Result<()> {
    if themes.is_empty() {
        return Err(PaletteError::spec("theme table", "no themes defined"));
    }

    let mut seen = HashSet::new();
    for theme in themes {
        validate_id(theme.id())?;
        if !seen.insert(theme.id()) {
            return Err(PaletteError::spec(
                "theme table",
                format!("duplicate theme id '{}'", theme.id()),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_order() {
        let table = ThemeTable::reference();
        let ids: Vec<_> = table.ids().collect();
        assert_eq!(ids, vec!["light", "dark", "forest"]);
        assert_eq!(table.default_theme().id(), "light");
    }

    #[test]
    fn test_reference_themes_are_complete() {
        for theme in ThemeTable::reference().themes() {
            assert!(theme.validate().is_ok(), "{} should validate", theme.id());
        }
    }

    #[test]
    fn test_get_or_default() {
        let table = ThemeTable::reference();
        assert_eq!(table.get_or_default("forest").id(), "forest");
        assert_eq!(table.get_or_default("solarized").id(), "light");
        assert!(table.get("solarized").is_none());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            ThemeTable::new(vec![]),
            Err(PaletteError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = ThemeTable::new(vec![ThemeSpec::new("dark"), ThemeSpec::new("dark")]).unwrap_err();
        assert!(err.to_string().contains("duplicate theme id 'dark'"));
    }

    #[test]
    fn test_incomplete_themes_accepted_by_table() {
        let table = ThemeTable::new(vec![ThemeSpec::new("draft")]).unwrap();
        assert_eq!(table.len(), 1);
    }
}
