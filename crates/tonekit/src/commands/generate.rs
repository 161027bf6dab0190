use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tempfile::NamedTempFile;
use tonekit_palette::{CssOptions, Format, GenerateOptions, RangePolicy};

use crate::config::Settings;

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Output file [default: from config, else src/styles/colors.css]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Output format: css, json, yaml or csv
    #[arg(short, long, value_name = "FORMAT", default_value_t = Format::Css)]
    pub format: Format,

    /// Emit a comment naming each theme before its block
    #[arg(long)]
    pub comments: bool,

    /// Clamp out-of-range lightness instead of failing
    #[arg(long)]
    pub clamp: bool,
}

pub fn run(settings: &Settings, args: &GenerateArgs, out: &mut dyn Write) -> Result<()> {
    let range = if args.clamp {
        RangePolicy::Clamp
    } else {
        settings.range
    };
    let css = CssOptions::default().with_theme_comments(args.comments || settings.comments);

    let palette = settings
        .definitions
        .generate(&GenerateOptions::default().with_range(range))
        .context("failed to generate palette")?;
    let text = palette.to_format(args.format, &css)?;

    if args.stdout {
        out.write_all(text.as_bytes())?;
        return Ok(());
    }

    let path = output_path(settings, args);
    write_atomic(&path, &text)?;
    log::info!("{} has been generated", path.display());
    Ok(())
}

/// Explicit paths are used as given. The built-in default takes the
/// extension of the requested format.
fn output_path(settings: &Settings, args: &GenerateArgs) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None if settings.output_configured || args.format == Format::Css => settings.output.clone(),
        None => settings.output.with_extension(args.format.name()),
    }
}

/// Writes through a temporary file in the target directory so readers never
/// observe a partial file.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
