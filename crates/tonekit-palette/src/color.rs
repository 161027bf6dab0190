//! OKLCH color values and their CSS text form.
//!
//! Colors are kept exactly as configured: no gamut mapping, no conversion to
//! other color spaces. The only transformation is number formatting, which
//! rounds to [`DECIMAL_PLACES`] and prints the shortest representation that
//! round-trips, so `0.6 + 0.3` is written as `0.9` rather than
//! `0.8999999999999999`.
//!
//! # Example
//!
//! ```rust
//! use tonekit_palette::Oklch;
//!
//! let color = Oklch::new(0.6, 0.15, 260.0);
//! assert_eq!(color.to_string(), "oklch(0.6 0.15 260)");
//!
//! let parsed = Oklch::parse("oklch(0.6 0.15 260)").unwrap();
//! assert_eq!(parsed, color);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of decimal places kept when formatting color components.
pub const DECIMAL_PLACES: i32 = 10;

/// Tolerance used when comparing colors for equality after a text round trip.
pub const TOLERANCE: f64 = 1e-9;

/// A color in the OKLCH space: lightness, chroma, hue (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Perceptual lightness, `0.0..=1.0`.
    pub l: f64,
    /// Chroma, non-negative.
    pub c: f64,
    /// Hue angle in degrees, `0.0..360.0`.
    pub h: f64,
}

impl Oklch {
    /// Creates a color from its three components, in CSS argument order.
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Returns the color with every component rounded to [`DECIMAL_PLACES`].
    ///
    /// This is the value that is actually written to a stylesheet.
    pub fn rounded(self) -> Self {
        Self {
            l: round_component(self.l),
            c: round_component(self.c),
            h: round_component(self.h),
        }
    }

    /// Returns true if both colors print identically within [`TOLERANCE`].
    pub fn approx_eq(&self, other: &Oklch) -> bool {
        (self.l - other.l).abs() <= TOLERANCE
            && (self.c - other.c).abs() <= TOLERANCE
            && (self.h - other.h).abs() <= TOLERANCE
    }

    /// Parses the CSS function form `oklch(L C H)`.
    ///
    /// Components are whitespace separated numbers. The `%` and `deg`
    /// suffixes, alpha channels and `none` keywords are not accepted because
    /// the generator never emits them.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let inner = s
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("expected oklch(L C H), got '{}'", s))?;
        Self::parse_components(inner)
    }

    /// Parses the argument list of an `oklch()` function, e.g. `0.6 0.15 260`.
    pub fn parse_components(args: &str) -> Result<Self, String> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(format!(
                "oklch() requires exactly 3 components, got {}",
                parts.len()
            ));
        }

        let mut values = [0.0f64; 3];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part
                .parse::<f64>()
                .map_err(|_| format!("invalid oklch component '{}': expected a number", part))?;
            if !values[i].is_finite() {
                return Err(format!("invalid oklch component '{}': not finite", part));
            }
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({} {} {})",
            format_number(self.l),
            format_number(self.c),
            format_number(self.h)
        )
    }
}

/// Rounds a component to [`DECIMAL_PLACES`], folding negative zero into zero.
pub fn round_component(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats a component the way it appears inside `oklch()`.
pub fn format_number(value: f64) -> String {
    format!("{}", round_component(value))
}
