//! Structured exports of a palette.
//!
//! Besides CSS, a palette can be written as JSON, YAML or CSV for design tools
//! and scripts. Numbers are the rounded values that appear in the stylesheet,
//! and every token also carries its CSS `value` text.
//!
//! JSON and YAML share one shape:
//!
//! ```json
//! [
//!   {
//!     "theme": "light",
//!     "selector": ":root",
//!     "tokens": [
//!       { "name": "--primary-100", "l": 0.9, "c": 0.15, "h": 260, "value": "oklch(0.9 0.15 260)" }
//!     ]
//!   }
//! ]
//! ```
//!
//! CSV is flat, one row per token: `theme,selector,token,l,c,h,value`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::palette::{Palette, ThemeBlock, Token};
use crate::stylesheet::CssOptions;

/// Output format for [`Palette::to_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Css,
    Json,
    Yaml,
    Csv,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Css, Format::Json, Format::Yaml, Format::Csv];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Css => "css",
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Format::Css),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "csv" => Ok(Format::Csv),
            other => Err(format!(
                "unknown format '{}', expected one of: css, json, yaml, csv",
                other
            )),
        }
    }
}

#[derive(Serialize)]
struct BlockRecord<'a> {
    theme: &'a str,
    selector: String,
    tokens: Vec<TokenRecord<'a>>,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    name: &'a str,
    l: f64,
    c: f64,
    h: f64,
    value: String,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    theme: &'a str,
    selector: &'a str,
    token: &'a str,
    l: f64,
    c: f64,
    h: f64,
    value: String,
}

impl<'a> TokenRecord<'a> {
    fn from_token(token: &'a Token) -> Self {
        let color = token.color().rounded();
        Self {
            name: token.name(),
            l: color.l,
            c: color.c,
            h: color.h,
            value: color.to_string(),
        }
    }
}

impl<'a> BlockRecord<'a> {
    fn from_block(block: &'a ThemeBlock) -> Self {
        Self {
            theme: block.theme(),
            selector: block.scope().selector(),
            tokens: block.tokens().iter().map(TokenRecord::from_token).collect(),
        }
    }
}

impl Palette {
    /// Renders the palette in the given format.
    ///
    /// `css` only applies to [`Format::Css`].
    pub fn to_format(&self, format: Format, css: &CssOptions) -> Result<String> {
        match format {
            Format::Css => Ok(self.to_css(css)),
            Format::Json => {
                let mut out = serde_json::to_string_pretty(&self.records())?;
                out.push('\n');
                Ok(out)
            }
            Format::Yaml => Ok(serde_yaml::to_string(&self.records())?),
            Format::Csv => self.to_csv(),
        }
    }

    fn records(&self) -> Vec<BlockRecord<'_>> {
        self.blocks().iter().map(BlockRecord::from_block).collect()
    }

    fn to_csv(&self) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        for block in self.blocks() {
            let selector = block.scope().selector();
            for token in block.tokens() {
                let record = TokenRecord::from_token(token);
                wtr.serialize(CsvRow {
                    theme: block.theme(),
                    selector: &selector,
                    token: record.name,
                    l: record.l,
                    c: record.c,
                    h: record.h,
                    value: record.value,
                })?;
            }
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| PaletteError::Serialize(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| PaletteError::Serialize(e.to_string()))
    }
}
