//! Theme tables and theme specifications.
//!
//! A theme describes a whole color scheme with five entries:
//!
//! | Entry | Kind | Tokens |
//! |-------|------|--------|
//! | `primary` | [`ColorAxis`] | `--primary-<shade>` for every shade |
//! | `secondary` | [`ColorAxis`] | `--secondary-<shade>` for every shade |
//! | `neutral` | [`ColorAxis`] | `--neutral-<shade>` for every shade |
//! | `background` | [`FixedColor`] | `--background` |
//! | `text` | [`FixedColor`] | `--text` |
//!
//! Themes are grouped in a [`ThemeTable`] whose first entry is the default
//! theme. Tables are plain values handed to the generator; nothing in this
//! crate keeps a global theme registry.

mod spec;
mod table;

pub use spec::{Axis, ColorAxis, FixedColor, FixedSlot, ThemeSpec};
pub use table::ThemeTable;

pub(crate) use spec::{lightness_in_range, LIGHTNESS_BOUNDS};
pub(crate) use table::validate_table;
