use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use tonekit_palette::{diff, parse_stylesheet, GenerateOptions, RangePolicy};

use crate::config::Settings;

use super::Status;

#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Stylesheet to check [default: from config, else src/styles/colors.css]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Compare against the clamped palette, as written by `generate --clamp`
    #[arg(long)]
    pub clamp: bool,
}

/// Compares the stylesheet on disk with what `generate` would write.
pub fn run(settings: &Settings, args: &CheckArgs, out: &mut dyn Write) -> Result<Status> {
    let path = args.output.as_ref().unwrap_or(&settings.output);
    let range = if args.clamp {
        RangePolicy::Clamp
    } else {
        settings.range
    };

    let expected = settings
        .definitions
        .generate(&GenerateOptions::default().with_range(range))
        .context("failed to generate palette")?;

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            writeln!(
                out,
                "{} {} does not exist, run `tonekit generate`",
                style("stale:").red().bold(),
                path.display()
            )?;
            return Ok(Status::Drift);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    let actual =
        parse_stylesheet(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    let drift = diff(&expected, &actual);

    if drift.is_empty() {
        writeln!(
            out,
            "{} {} is up to date",
            style("ok:").green().bold(),
            path.display()
        )?;
        return Ok(Status::Ok);
    }

    writeln!(
        out,
        "{} {} differs from the generated palette ({} difference{})",
        style("stale:").red().bold(),
        path.display(),
        drift.len(),
        if drift.len() == 1 { "" } else { "s" }
    )?;
    for item in &drift {
        writeln!(out, "  {}", style(item).yellow())?;
    }
    Ok(Status::Drift)
}
