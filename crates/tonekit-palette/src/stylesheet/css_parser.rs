//! Reading generated stylesheets back into palettes.
//!
//! The reader is built on `cssparser` (the tokenizer used by Firefox), so
//! comments, escapes and whitespace are handled the way a browser would.
//! It only understands the subset of CSS the generator writes:
//!
//! - **Selectors**: `:root` and `[data-theme="<id>"]`, one per rule
//! - **Declarations**: custom properties whose value is `oklch(L C H)`
//!
//! Anything else (other selectors, regular properties, at-rules, nested
//! rules, `!important`) is reported as [`PaletteError::Css`] with its
//! location.
//!
//! Numbers are taken from the source text rather than from the tokenizer's
//! `f32` values, so a round trip through text keeps full `f64` precision.

use std::collections::HashSet;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, ParseErrorKind, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token as CssToken,
};

use crate::color::Oklch;
use crate::error::{PaletteError, Result};
use crate::palette::{Palette, Scope, ThemeBlock, Token};

/// Parses a stylesheet produced by the generator.
///
/// The theme id of the `:root` block is not present in CSS, so that block
/// is returned with an empty id. Blocks keep their source order.
///
/// # Errors
///
/// Returns [`PaletteError::Css`] for unsupported constructs, malformed
/// colors, or two blocks with the same selector.
///
/// # Example
///
/// ```rust
/// use tonekit_palette::{parse_stylesheet, Scope};
///
/// let palette = parse_stylesheet(r#"
/// :root { --text: oklch(0.1 0 0); }
/// [data-theme="dark"] { --text: oklch(0.95 0 0); }
/// "#).unwrap();
///
/// assert_eq!(palette.blocks().len(), 2);
/// assert_eq!(palette.blocks()[1].scope(), &Scope::Theme("dark".into()));
/// ```
pub fn parse_stylesheet(css: &str) -> Result<Palette> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut reader = StylesheetReader;

    let mut blocks: Vec<ThemeBlock> = Vec::new();
    let mut seen = HashSet::new();

    for result in cssparser::StyleSheetParser::new(&mut parser, &mut reader) {
        match result {
            Ok(block) => {
                if !seen.insert(block.scope().clone()) {
                    return Err(PaletteError::css(format!(
                        "duplicate block for {}",
                        block.scope()
                    )));
                }
                blocks.push(block);
            }
            Err((err, slice)) => return Err(describe(err, slice)),
        }
    }

    Ok(Palette::new(blocks))
}

fn describe(err: ParseError<'_, String>, slice: &str) -> PaletteError {
    let detail = match err.kind {
        ParseErrorKind::Custom(message) => message,
        ParseErrorKind::Basic(basic) => format!("{:?}", basic),
    };
    PaletteError::css(format!(
        "line {}, column {}: {} in `{}`",
        err.location.line + 1,
        err.location.column,
        detail,
        slice.trim()
    ))
}

/// Top-level rule parser: one [`ThemeBlock`] per qualified rule.
struct StylesheetReader;

impl<'i> QualifiedRuleParser<'i> for StylesheetReader {
    type Prelude = Scope;
    type QualifiedRule = ThemeBlock;
    type Error = String;

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let location = input.current_source_location();
        let token = input.next()?.clone();

        let scope = match token {
            CssToken::Colon => {
                input.expect_ident_matching("root")?;
                Scope::Root
            }
            CssToken::SquareBracketBlock => {
                let id = input.parse_nested_block(|input| {
                    input.expect_ident_matching("data-theme")?;
                    input.expect_delim('=')?;
                    let id = input.expect_ident_or_string()?.as_ref().to_string();
                    Ok::<_, ParseError<'i, String>>(id)
                })?;
                Scope::Theme(id)
            }
            other => return Err(location.new_unexpected_token_error(other)),
        };

        input.expect_exhausted()?;
        Ok(scope)
    }

    fn parse_block<'t>(
        &mut self,
        scope: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut declarations = TokenDeclarationParser;
        let mut tokens = Vec::new();

        for result in RuleBodyParser::new(input, &mut declarations) {
            match result {
                Ok(token) => tokens.push(token),
                Err((err, _)) => return Err(err),
            }
        }

        let theme = match &scope {
            Scope::Root => String::new(),
            Scope::Theme(id) => id.clone(),
        };
        Ok(ThemeBlock::new(theme, scope, tokens))
    }
}

impl<'i> AtRuleParser<'i> for StylesheetReader {
    type Prelude = ();
    type AtRule = ThemeBlock;
    type Error = String;
}

/// Declaration parser for `--name: oklch(L C H)`.
struct TokenDeclarationParser;

impl<'i> DeclarationParser<'i> for TokenDeclarationParser {
    type Declaration = Token;
    type Error = String;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        if !name.starts_with("--") {
            return Err(input.new_custom_error(format!(
                "unexpected property '{}', only custom properties are supported",
                name.as_ref()
            )));
        }

        input.expect_function_matching("oklch")?;
        let args = input.parse_nested_block(|input| {
            let start = input.position();
            while input.next().is_ok() {}
            Ok::<_, ParseError<'i, String>>(input.slice_from(start).to_string())
        })?;
        input.expect_exhausted()?;

        let color = Oklch::parse_components(&args)
            .map_err(|message| input.new_custom_error(format!("{}: {}", name.as_ref(), message)))?;
        Ok(Token::new(name.as_ref(), color))
    }
}

impl<'i> AtRuleParser<'i> for TokenDeclarationParser {
    type Prelude = ();
    type AtRule = Token;
    type Error = String;
}

impl<'i> QualifiedRuleParser<'i> for TokenDeclarationParser {
    type Prelude = ();
    type QualifiedRule = Token;
    type Error = String;
}

impl<'i> RuleBodyItemParser<'i, Token, String> for TokenDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
