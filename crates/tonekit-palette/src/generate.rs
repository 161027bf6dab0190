//! Palette generation.
//!
//! Generation is a single pure pass over a theme list and a shade scale:
//!
//! 1. Table checks: at least one theme, unique ids usable in a selector.
//! 2. Per theme, in order: completeness and domain checks, then one token per
//!    `(axis, shade)` pair followed by `--background` and `--text`.
//! 3. The first theme is scoped to `:root`, every other theme to
//!    `[data-theme="<id>"]`.
//!
//! Any failure aborts the whole pass, so callers either get a complete
//! [`Palette`] or an error.
//!
//! # Range policy
//!
//! Shade lightness is `lightness_base + offset`. By default a value outside
//! `[0, 1]` fails with [`PaletteError::InvalidRange`](crate::PaletteError::InvalidRange). [`RangePolicy::Clamp`]
//! clamps such values instead and logs a warning for each one; it must be
//! requested explicitly.
//!
//! # Example
//!
//! ```rust
//! use tonekit_palette::{generate, Axis, ColorAxis, FixedColor, FixedSlot, ShadeScale, ThemeSpec};
//!
//! let light = ThemeSpec::new("light")
//!     .with_axis(Axis::Primary, ColorAxis::new(260.0, 0.15, 0.6))
//!     .with_axis(Axis::Secondary, ColorAxis::new(40.0, 0.18, 0.65))
//!     .with_axis(Axis::Neutral, ColorAxis::new(0.0, 0.0, 0.9))
//!     .with_fixed(FixedSlot::Background, FixedColor::new(0.0, 0.0, 0.98))
//!     .with_fixed(FixedSlot::Text, FixedColor::new(0.0, 0.0, 0.1));
//! let scale = ShadeScale::new(vec![500], vec![0.0]).unwrap();
//!
//! let palette = generate(&[light], &scale).unwrap();
//! assert!(palette.to_string().contains("--primary-500: oklch(0.6 0.15 260);"));
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{round_component, Oklch};
use crate::error::Result;
use crate::palette::{Palette, Scope, ThemeBlock, Token};
use crate::scale::ShadeScale;
use crate::stylesheet::CssOptions;
use crate::theme::{lightness_in_range, validate_table, Axis, FixedSlot, ThemeSpec, LIGHTNESS_BOUNDS};

/// What to do with a shade lightness outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Fail with [`PaletteError::InvalidRange`](crate::PaletteError::InvalidRange).
    #[default]
    Reject,
    /// Clamp into `[0, 1]` and log a warning.
    Clamp,
}

/// Options for [`generate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateOptions {
    pub range: RangePolicy,
}

impl GenerateOptions {
    pub fn with_range(mut self, range: RangePolicy) -> Self {
        self.range = range;
        self
    }
}

/// Generates a palette, rejecting out-of-range lightness.
///
/// # Errors
///
/// - [`PaletteError::InvalidSpec`](crate::PaletteError::InvalidSpec) for structural problems
/// - [`PaletteError::InvalidRange`](crate::PaletteError::InvalidRange) for values outside their domain
pub fn generate(themes: &[ThemeSpec], scale: &ShadeScale) -> Result<Palette> {
    generate_with(themes, scale, &GenerateOptions::default())
}

/// Generates a palette and renders it as a stylesheet with default options.
pub fn generate_stylesheet(themes: &[ThemeSpec], scale: &ShadeScale) -> Result<String> {
    Ok(generate(themes, scale)?.to_css(&CssOptions::default()))
}

/// Generates a palette with explicit options.
pub fn generate_with(
    themes: &[ThemeSpec],
    scale: &ShadeScale,
    options: &GenerateOptions,
) -> Result<Palette> {
    validate_table(themes)?;

    let mut blocks = Vec::with_capacity(themes.len());
    for (index, theme) in themes.iter().enumerate() {
        theme.validate()?;

        let scope = if index == 0 {
            Scope::Root
        } else {
            Scope::Theme(theme.id().to_string())
        };

        let mut tokens = Vec::with_capacity(Axis::ALL.len() * scale.len() + FixedSlot::ALL.len());
        for axis in Axis::ALL {
            let def = theme.require_axis(axis)?;
            for (label, offset) in scale.iter() {
                let name = axis.token_name(label);
                let lightness =
                    shade_lightness(theme, &name, def.lightness_base + offset, options.range)?;
                tokens.push(Token::new(name, Oklch::new(lightness, def.chroma, def.hue)));
            }
        }

        for slot in FixedSlot::ALL {
            let def = theme.require_fixed(slot)?;
            tokens.push(Token::new(
                slot.token_name(),
                Oklch::new(def.lightness, def.chroma, def.hue),
            ));
        }

        log::debug!(
            "generated {} tokens for theme '{}' under {}",
            tokens.len(),
            theme.id(),
            scope
        );
        blocks.push(ThemeBlock::new(theme.id(), scope, tokens));
    }

    Ok(Palette::new(blocks))
}

/// Rounds a computed lightness to its emitted value and applies the range
/// policy to it.
fn shade_lightness(theme: &ThemeSpec, token: &str, raw: f64, policy: RangePolicy) -> Result<f64> {
    let value = round_component(raw);
    if lightness_in_range(value) {
        return Ok(value);
    }

    match policy {
        RangePolicy::Reject => Err(theme.out_of_range(
            format!("lightness of {}", token),
            value,
            LIGHTNESS_BOUNDS,
        )),
        RangePolicy::Clamp => {
            let clamped = value.clamp(0.0, 1.0);
            log::warn!(
                "theme '{}': {} lightness {} clamped to {}",
                theme.id(),
                token,
                value,
                clamped
            );
            Ok(clamped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use crate::theme::{ColorAxis, FixedColor, ThemeTable};

    fn theme(id: &str, base: f64) -> ThemeSpec {
        ThemeSpec::new(id)
            .with_axis(Axis::Primary, ColorAxis::new(260.0, 0.15, base))
            .with_axis(Axis::Secondary, ColorAxis::new(40.0, 0.18, base))
            .with_axis(Axis::Neutral, ColorAxis::new(0.0, 0.0, base))
            .with_fixed(FixedSlot::Background, FixedColor::new(0.0, 0.0, 0.98))
            .with_fixed(FixedSlot::Text, FixedColor::new(0.0, 0.0, 0.1))
    }

    fn single_shade() -> ShadeScale {
        ShadeScale::new(vec![500], vec![0.0]).unwrap()
    }

    #[test]
    fn test_first_theme_is_root() {
        let palette = generate(&[theme("light", 0.6), theme("dark", 0.4)], &single_shade()).unwrap();
        let blocks = palette.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].scope(), &Scope::Root);
        assert_eq!(blocks[1].scope(), &Scope::Theme("dark".to_string()));
    }

    #[test]
    fn test_token_order_within_block() {
        let scale = ShadeScale::new(vec![100, 200], vec![0.1, -0.1]).unwrap();
        let palette = generate(&[theme("light", 0.5)], &scale).unwrap();
        let names: Vec<_> = palette.blocks()[0]
            .tokens()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "--primary-100",
                "--primary-200",
                "--secondary-100",
                "--secondary-200",
                "--neutral-100",
                "--neutral-200",
                "--background",
                "--text",
            ]
        );
    }

    #[test]
    fn test_offsets_applied_in_lock_step() {
        let scale = ShadeScale::new(vec![100, 200, 300], vec![0.2, 0.0, -0.2]).unwrap();
        let palette = generate(&[theme("light", 0.5)], &scale).unwrap();
        let block = &palette.blocks()[0];
        assert_eq!(block.get("--primary-100").unwrap().l, 0.7);
        assert_eq!(block.get("--primary-200").unwrap().l, 0.5);
        assert_eq!(block.get("--primary-300").unwrap().l, 0.3);
    }

    #[test]
    fn test_fixed_colors_use_absolute_values() {
        let palette = generate(&[theme("light", 0.5)], &ShadeScale::reference()).unwrap();
        let block = &palette.blocks()[0];
        assert_eq!(block.get("--background"), Some(Oklch::new(0.98, 0.0, 0.0)));
        assert_eq!(block.get("--text"), Some(Oklch::new(0.1, 0.0, 0.0)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = generate(&[theme("light", 0.8)], &ShadeScale::reference()).unwrap_err();
        match err {
            PaletteError::InvalidRange {
                theme,
                field,
                value,
                bounds,
            } => {
                assert_eq!(theme, "light");
                assert_eq!(field, "lightness of --primary-100");
                assert_eq!(value, 1.1);
                assert_eq!(bounds, "[0, 1]");
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_below_zero_rejected() {
        let err = generate(&[theme("dark", 0.2)], &ShadeScale::reference()).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidRange { .. }));
        assert!(err.to_string().contains("--primary-700"));
    }

    #[test]
    fn test_boundary_values_accepted() {
        // 0.7 + 0.3 and 0.3 - 0.3 land exactly on the bounds once rounded.
        let scale = ShadeScale::new(vec![100, 700], vec![0.3, -0.3]).unwrap();
        assert!(generate(&[theme("light", 0.7)], &scale).is_ok());
        assert!(generate(&[theme("light", 0.3)], &scale).is_ok());
    }

    #[test]
    fn test_clamp_policy() {
        let options = GenerateOptions::default().with_range(RangePolicy::Clamp);
        let palette = generate_with(&[theme("light", 0.8)], &ShadeScale::reference(), &options).unwrap();
        let block = &palette.blocks()[0];
        assert_eq!(block.get("--primary-100").unwrap().l, 1.0);
        assert_eq!(block.get("--primary-200").unwrap().l, 1.0);
        assert_eq!(block.get("--primary-300").unwrap().l, 0.9);
    }

    #[test]
    fn test_clamp_does_not_cover_fixed_colors() {
        let bad = theme("light", 0.5).with_fixed(FixedSlot::Text, FixedColor::new(0.0, 0.0, -0.1));
        let options = GenerateOptions::default().with_range(RangePolicy::Clamp);
        assert!(matches!(
            generate_with(&[bad], &ShadeScale::reference(), &options),
            Err(PaletteError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_missing_axis_is_invalid_spec() {
        let incomplete = ThemeSpec::new("light")
            .with_axis(Axis::Primary, ColorAxis::new(260.0, 0.15, 0.6))
            .with_fixed(FixedSlot::Background, FixedColor::new(0.0, 0.0, 0.98))
            .with_fixed(FixedSlot::Text, FixedColor::new(0.0, 0.0, 0.1));
        assert!(matches!(
            generate(&[incomplete], &single_shade()),
            Err(PaletteError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_later_theme_error_yields_no_palette() {
        let themes = [theme("light", 0.5), theme("dark", 0.95)];
        assert!(generate(&themes, &ShadeScale::reference()).is_err());
    }

    #[test]
    fn test_empty_theme_list() {
        assert!(matches!(
            generate(&[], &single_shade()),
            Err(PaletteError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_duplicate_theme_ids() {
        let themes = [theme("light", 0.5), theme("light", 0.5)];
        assert!(matches!(
            generate(&themes, &single_shade()),
            Err(PaletteError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_reference_table_strict_fails_on_light_neutral() {
        let table = ThemeTable::reference();
        let err = generate(table.themes(), &ShadeScale::reference()).unwrap_err();
        match err {
            PaletteError::InvalidRange { theme, field, value, .. } => {
                assert_eq!(theme, "light");
                assert_eq!(field, "lightness of --neutral-100");
                assert_eq!(value, 1.2);
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_table_clamped() {
        let table = ThemeTable::reference();
        let options = GenerateOptions::default().with_range(RangePolicy::Clamp);
        let palette = generate_with(table.themes(), &ShadeScale::reference(), &options).unwrap();
        assert_eq!(palette.token_count(), 3 * (3 * 7 + 2));
        assert_eq!(palette.block("dark").unwrap().get("--neutral-700").unwrap().l, 0.0);
    }

    #[test]
    fn test_generate_stylesheet_scenario() {
        let css = generate_stylesheet(&[theme("light", 0.6)], &single_shade()).unwrap();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --primary-500: oklch(0.6 0.15 260);\n"));
        assert!(!css.contains("[data-theme="));
    }
}
