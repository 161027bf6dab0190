//! Theme specifications: three scalable color axes and two fixed colors.
//!
//! A [`ThemeSpec`] is assembled with a builder and may be incomplete while it
//! is being built. Completeness and numeric domains are checked by
//! [`ThemeSpec::validate`], which the generator calls before producing any
//! token.
//!
//! ```rust
//! use tonekit_palette::{Axis, ColorAxis, FixedColor, FixedSlot, ThemeSpec};
//!
//! let theme = ThemeSpec::new("light")
//!     .with_axis(Axis::Primary, ColorAxis::new(260.0, 0.15, 0.6))
//!     .with_axis(Axis::Secondary, ColorAxis::new(40.0, 0.18, 0.65))
//!     .with_axis(Axis::Neutral, ColorAxis::new(0.0, 0.0, 0.5))
//!     .with_fixed(FixedSlot::Background, FixedColor::new(0.0, 0.0, 0.98))
//!     .with_fixed(FixedSlot::Text, FixedColor::new(0.0, 0.0, 0.1));
//!
//! assert!(theme.validate().is_ok());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Domain description for lightness values.
pub(crate) const LIGHTNESS_BOUNDS: &str = "[0, 1]";
const HUE_BOUNDS: &str = "[0, 360)";
const CHROMA_BOUNDS: &str = "[0, inf)";

/// The scalable color axes, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Primary,
    Secondary,
    Neutral,
}

impl Axis {
    /// All axes in the order their tokens are emitted.
    pub const ALL: [Axis; 3] = [Axis::Primary, Axis::Secondary, Axis::Neutral];

    /// Name used in token names and definition files.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Primary => "primary",
            Axis::Secondary => "secondary",
            Axis::Neutral => "neutral",
        }
    }

    /// Token name for a shade of this axis, e.g. `--primary-500`.
    pub fn token_name(self, label: u32) -> String {
        format!("--{}-{}", self.name(), label)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The unscaled colors, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSlot {
    Background,
    Text,
}

impl FixedSlot {
    /// All fixed slots in the order their tokens are emitted.
    pub const ALL: [FixedSlot; 2] = [FixedSlot::Background, FixedSlot::Text];

    /// Name used in definition files.
    pub fn name(self) -> &'static str {
        match self {
            FixedSlot::Background => "background",
            FixedSlot::Text => "text",
        }
    }

    /// Token name, e.g. `--background`.
    pub fn token_name(self) -> String {
        format!("--{}", self.name())
    }
}

impl fmt::Display for FixedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalable color axis: hue and chroma are shared by every shade, lightness
/// is `lightness_base` plus the shade's offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorAxis {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Chroma, non-negative.
    pub chroma: f64,
    /// Mid-point lightness, `[0, 1]`.
    pub lightness_base: f64,
}

impl ColorAxis {
    pub const fn new(hue: f64, chroma: f64, lightness_base: f64) -> Self {
        Self {
            hue,
            chroma,
            lightness_base,
        }
    }
}

/// An absolute color, emitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedColor {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Chroma, non-negative.
    pub chroma: f64,
    /// Lightness, `[0, 1]`.
    pub lightness: f64,
}

impl FixedColor {
    pub const fn new(hue: f64, chroma: f64, lightness: f64) -> Self {
        Self {
            hue,
            chroma,
            lightness,
        }
    }
}

/// A named theme.
///
/// Every axis and fixed color is optional while building; a theme missing any
/// of them fails validation with [`PaletteError::InvalidSpec`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeSpec {
    id: String,
    primary: Option<ColorAxis>,
    secondary: Option<ColorAxis>,
    neutral: Option<ColorAxis>,
    background: Option<FixedColor>,
    text: Option<FixedColor>,
}

impl ThemeSpec {
    /// Creates an empty theme with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets an axis, returning `self` for chaining.
    pub fn with_axis(mut self, axis: Axis, value: ColorAxis) -> Self {
        *self.axis_slot(axis) = Some(value);
        self
    }

    /// Sets a fixed color, returning `self` for chaining.
    pub fn with_fixed(mut self, slot: FixedSlot, value: FixedColor) -> Self {
        *self.fixed_slot(slot) = Some(value);
        self
    }

    /// Theme identifier, used verbatim in `[data-theme="<id>"]`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the axis definition, if set.
    pub fn axis(&self, axis: Axis) -> Option<&ColorAxis> {
        match axis {
            Axis::Primary => self.primary.as_ref(),
            Axis::Secondary => self.secondary.as_ref(),
            Axis::Neutral => self.neutral.as_ref(),
        }
    }

    /// Returns the fixed color, if set.
    pub fn fixed(&self, slot: FixedSlot) -> Option<&FixedColor> {
        match slot {
            FixedSlot::Background => self.background.as_ref(),
            FixedSlot::Text => self.text.as_ref(),
        }
    }

    fn axis_slot(&mut self, axis: Axis) -> &mut Option<ColorAxis> {
        match axis {
            Axis::Primary => &mut self.primary,
            Axis::Secondary => &mut self.secondary,
            Axis::Neutral => &mut self.neutral,
        }
    }

    fn fixed_slot(&mut self, slot: FixedSlot) -> &mut Option<FixedColor> {
        match slot {
            FixedSlot::Background => &mut self.background,
            FixedSlot::Text => &mut self.text,
        }
    }

    /// Returns the axis or an `InvalidSpec` naming it.
    pub(crate) fn require_axis(&self, axis: Axis) -> Result<&ColorAxis> {
        self.axis(axis).ok_or_else(|| {
            PaletteError::spec(
                format!("theme '{}'", self.id),
                format!("missing axis '{}'", axis),
            )
        })
    }

    /// Returns the fixed color or an `InvalidSpec` naming it.
    pub(crate) fn require_fixed(&self, slot: FixedSlot) -> Result<&FixedColor> {
        self.fixed(slot).ok_or_else(|| {
            PaletteError::spec(
                format!("theme '{}'", self.id),
                format!("missing fixed color '{}'", slot),
            )
        })
    }

    /// Checks that the theme is complete and every configured number lies in
    /// its domain.
    ///
    /// Shade lightness depends on the scale and is checked by the generator.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::InvalidSpec`] for an invalid id or a missing entry
    /// - [`PaletteError::InvalidRange`] for a hue, chroma or lightness outside
    ///   its domain
    pub fn validate(&self) -> Result<()> {
        validate_id(&self.id)?;

        for axis in Axis::ALL {
            let value = self.require_axis(axis)?;
            let name = axis.name();
            self.check_hue(value.hue, name)?;
            self.check_chroma(value.chroma, name)?;
            self.check_lightness(value.lightness_base, &format!("lightness_base of {}", name))?;
        }

        for slot in FixedSlot::ALL {
            let value = self.require_fixed(slot)?;
            let name = slot.name();
            self.check_hue(value.hue, name)?;
            self.check_chroma(value.chroma, name)?;
            self.check_lightness(value.lightness, &format!("lightness of {}", slot.token_name()))?;
        }

        Ok(())
    }

    fn check_hue(&self, hue: f64, name: &str) -> Result<()> {
        if hue.is_finite() && (0.0..360.0).contains(&hue) {
            Ok(())
        } else {
            Err(self.out_of_range(format!("hue of {}", name), hue, HUE_BOUNDS))
        }
    }

    fn check_chroma(&self, chroma: f64, name: &str) -> Result<()> {
        if chroma.is_finite() && chroma >= 0.0 {
            Ok(())
        } else {
            Err(self.out_of_range(format!("chroma of {}", name), chroma, CHROMA_BOUNDS))
        }
    }

    fn check_lightness(&self, lightness: f64, field: &str) -> Result<()> {
        if lightness_in_range(lightness) {
            Ok(())
        } else {
            Err(self.out_of_range(field.to_string(), lightness, LIGHTNESS_BOUNDS))
        }
    }

    pub(crate) fn out_of_range(&self, field: String, value: f64, bounds: &'static str) -> PaletteError {
        PaletteError::InvalidRange {
            theme: self.id.clone(),
            field,
            value,
            bounds,
        }
    }
}

pub(crate) fn lightness_in_range(lightness: f64) -> bool {
    lightness.is_finite() && (0.0..=1.0).contains(&lightness)
}

/// Checks that an id can be used verbatim inside `[data-theme="<id>"]` and
/// inside a `/* <id> theme */` comment.
pub(crate) fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(PaletteError::spec("theme table", "theme id must not be empty"));
    }
    if let Some(bad) = id
        .chars()
        .find(|c| *c == '"' || *c == '\\' || c.is_control())
    {
        return Err(PaletteError::spec(
            format!("theme '{}'", id.escape_debug()),
            format!(
                "id contains {:?}, which cannot appear in an attribute selector",
                bad
            ),
        ));
    }
    if id.contains("*/") {
        return Err(PaletteError::spec(
            format!("theme '{}'", id.escape_debug()),
            "id contains \"*/\", which would end a CSS comment",
        ));
    }
    Ok(())
}
