//! Drift detection between an expected palette and one read from disk.
//!
//! Blocks are matched by [`Scope`], not by theme id, because a `:root` block
//! read back from CSS does not know which theme produced it. Tokens are
//! matched by name and compared with [`Oklch::approx_eq`].
//!
//! Order is reported but not compared: two palettes with the same blocks
//! and tokens in a different order have no drift.

use std::fmt;

use crate::color::Oklch;
use crate::palette::{Palette, Scope, ThemeBlock};

/// A single difference between two palettes.
#[derive(Debug, Clone, PartialEq)]
pub enum Drift {
    /// A block that should exist is absent.
    MissingBlock { scope: Scope },
    /// A block exists that nothing generates.
    UnexpectedBlock { scope: Scope },
    /// A token is absent from an existing block.
    MissingToken { scope: Scope, name: String },
    /// A token exists that nothing generates.
    UnexpectedToken { scope: Scope, name: String },
    /// A token has a different value.
    Changed {
        scope: Scope,
        name: String,
        expected: Oklch,
        actual: Oklch,
    },
}

impl Drift {
    pub fn scope(&self) -> &Scope {
        match self {
            Drift::MissingBlock { scope }
            | Drift::UnexpectedBlock { scope }
            | Drift::MissingToken { scope, .. }
            | Drift::UnexpectedToken { scope, .. }
            | Drift::Changed { scope, .. } => scope,
        }
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drift::MissingBlock { scope } => write!(f, "{}: block missing", scope),
            Drift::UnexpectedBlock { scope } => write!(f, "{}: unexpected block", scope),
            Drift::MissingToken { scope, name } => write!(f, "{} {}: missing", scope, name),
            Drift::UnexpectedToken { scope, name } => {
                write!(f, "{} {}: unexpected", scope, name)
            }
            Drift::Changed {
                scope,
                name,
                expected,
                actual,
            } => write!(f, "{} {}: expected {}, found {}", scope, name, expected, actual),
        }
    }
}

/// Lists every difference between `expected` and `actual`.
///
/// Results follow the block order of `expected`, then unexpected blocks in
/// the order of `actual`. An empty list means the two are equivalent.
pub fn diff(expected: &Palette, actual: &Palette) -> Vec<Drift> {
    let mut drift = Vec::new();

    for block in expected.blocks() {
        match actual.block_by_scope(block.scope()) {
            Some(found) => diff_block(block, found, &mut drift),
            None => drift.push(Drift::MissingBlock {
                scope: block.scope().clone(),
            }),
        }
    }

    for block in actual.blocks() {
        if expected.block_by_scope(block.scope()).is_none() {
            drift.push(Drift::UnexpectedBlock {
                scope: block.scope().clone(),
            });
        }
    }

    drift
}

fn diff_block(expected: &ThemeBlock, actual: &ThemeBlock, drift: &mut Vec<Drift>) {
    let scope = expected.scope();

    for token in expected.tokens() {
        match actual.get(token.name()) {
            Some(color) if color.approx_eq(&token.color()) => {}
            Some(color) => drift.push(Drift::Changed {
                scope: scope.clone(),
                name: token.name().to_string(),
                expected: token.color(),
                actual: color,
            }),
            None => drift.push(Drift::MissingToken {
                scope: scope.clone(),
                name: token.name().to_string(),
            }),
        }
    }

    for token in actual.tokens() {
        if expected.get(token.name()).is_none() {
            drift.push(Drift::UnexpectedToken {
                scope: scope.clone(),
                name: token.name().to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Token;

    fn block(scope: Scope, tokens: &[(&str, f64)]) -> ThemeBlock {
        let theme = match &scope {
            Scope::Root => "light".to_string(),
            Scope::Theme(id) => id.clone(),
        };
        ThemeBlock::new(
            theme,
            scope,
            tokens
                .iter()
                .map(|(name, l)| Token::new(*name, Oklch::new(*l, 0.0, 0.0)))
                .collect(),
        )
    }

    fn dark() -> Scope {
        Scope::Theme("dark".to_string())
    }

    #[test]
    fn test_identical_palettes() {
        let p = Palette::new(vec![block(Scope::Root, &[("--text", 0.1)])]);
        assert!(diff(&p, &p.clone()).is_empty());
    }

    #[test]
    fn test_root_matches_regardless_of_theme_id() {
        let expected = Palette::new(vec![block(Scope::Root, &[("--text", 0.1)])]);
        let actual = Palette::new(vec![ThemeBlock::new(
            "",
            Scope::Root,
            vec![Token::new("--text", Oklch::new(0.1, 0.0, 0.0))],
        )]);
        assert!(diff(&expected, &actual).is_empty());
    }

    #[test]
    fn test_within_tolerance() {
        let expected = Palette::new(vec![block(Scope::Root, &[("--text", 0.1)])]);
        let actual = Palette::new(vec![block(Scope::Root, &[("--text", 0.1 + 1e-12)])]);
        assert!(diff(&expected, &actual).is_empty());
    }

    #[test]
    fn test_changed_value() {
        let expected = Palette::new(vec![block(Scope::Root, &[("--text", 0.1)])]);
        let actual = Palette::new(vec![block(Scope::Root, &[("--text", 0.2)])]);
        let drift = diff(&expected, &actual);
        assert_eq!(
            drift,
            vec![Drift::Changed {
                scope: Scope::Root,
                name: "--text".to_string(),
                expected: Oklch::new(0.1, 0.0, 0.0),
                actual: Oklch::new(0.2, 0.0, 0.0),
            }]
        );
        assert_eq!(
            drift[0].to_string(),
            ":root --text: expected oklch(0.1 0 0), found oklch(0.2 0 0)"
        );
    }

    #[test]
    fn test_missing_and_unexpected_tokens() {
        let expected = Palette::new(vec![block(Scope::Root, &[("--text", 0.1)])]);
        let actual = Palette::new(vec![block(Scope::Root, &[("--background", 0.9)])]);
        let drift = diff(&expected, &actual);
        assert_eq!(drift.len(), 2);
        assert!(matches!(&drift[0], Drift::MissingToken { name, .. } if name == "--text"));
        assert!(matches!(&drift[1], Drift::UnexpectedToken { name, .. } if name == "--background"));
    }

    #[test]
    fn test_missing_and_unexpected_blocks() {
        let expected = Palette::new(vec![
            block(Scope::Root, &[("--text", 0.1)]),
            block(dark(), &[("--text", 0.9)]),
        ]);
        let actual = Palette::new(vec![
            block(Scope::Root, &[("--text", 0.1)]),
            block(Scope::Theme("forest".to_string()), &[("--text", 0.15)]),
        ]);
        let drift = diff(&expected, &actual);
        assert_eq!(
            drift,
            vec![
                Drift::MissingBlock { scope: dark() },
                Drift::UnexpectedBlock {
                    scope: Scope::Theme("forest".to_string())
                },
            ]
        );
        assert_eq!(drift[0].to_string(), "[data-theme=\"dark\"]: block missing");
    }

    #[test]
    fn test_order_is_not_drift() {
        let expected = Palette::new(vec![block(Scope::Root, &[("--a", 0.1), ("--b", 0.2)])]);
        let actual = Palette::new(vec![block(Scope::Root, &[("--b", 0.2), ("--a", 0.1)])]);
        assert!(diff(&expected, &actual).is_empty());
    }

    #[test]
    fn test_empty_actual_reports_every_block() {
        let expected = Palette::new(vec![
            block(Scope::Root, &[("--text", 0.1)]),
            block(dark(), &[("--text", 0.9)]),
        ]);
        let drift = diff(&expected, &Palette::default());
        assert_eq!(drift.len(), 2);
        assert_eq!(drift[1].scope(), &dark());
    }
}
