//! # tonekit - themed CSS color tokens from the command line
//!
//! ```text
//! tonekit [--config <path>] [-v|-q] <command>
//!   generate [--output <path>] [--stdout] [--format css|json|yaml|csv] [--comments] [--clamp]
//!   check    [--output <path>] [--clamp]
//!   themes
//!   theme    [<id>] [--reset]
//! ```
//!
//! Settings come from `tonekit.yaml` (see [`config`]); command-line flags
//! take precedence over the file, which takes precedence over built-in
//! defaults. The palette itself is produced by [`tonekit_palette`].

pub mod commands;
pub mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::check::CheckArgs;
use commands::generate::GenerateArgs;
use commands::theme::ThemeArgs;
pub use commands::Status;

#[derive(Debug, Parser)]
#[command(name = "tonekit", version, about = "Generate themed OKLCH color tokens for CSS")]
pub struct Cli {
    /// Configuration file [default: ./tonekit.yaml if present]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the palette stylesheet (or an export of it)
    Generate(GenerateArgs),
    /// Verify that the stylesheet on disk matches the current definitions
    Check(CheckArgs),
    /// List available themes
    Themes,
    /// Show or set the preferred theme
    Theme(ThemeArgs),
}

impl Cli {
    /// Log filter implied by `-v`/`-q`. `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Runs a parsed command line, writing command output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<Status> {
    let settings = config::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Generate(args) => commands::generate::run(&settings, args, out)?,
        Command::Check(args) => return commands::check::run(&settings, args, out),
        Command::Themes => commands::themes::run(&settings, out)?,
        Command::Theme(args) => commands::theme::run(&settings, args, out)?,
    }
    Ok(Status::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "tonekit", "generate", "--format", "json", "--comments", "--clamp", "-o", "x.json",
        ])
        .unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.format, tonekit_palette::Format::Json);
                assert!(args.comments && args.clamp);
                assert_eq!(args.output, Some(PathBuf::from("x.json")));
            }
            other => panic!("Expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        assert!(Cli::try_parse_from(["tonekit", "generate", "--stdout", "-o", "x.css"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["tonekit", "generate", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_log_filter() {
        let cli = Cli::try_parse_from(["tonekit", "-v", "themes"]).unwrap();
        assert_eq!(cli.log_filter(), "debug");
        let cli = Cli::try_parse_from(["tonekit", "themes", "--quiet"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");
        let cli = Cli::try_parse_from(["tonekit", "themes"]).unwrap();
        assert_eq!(cli.log_filter(), "info");
    }
}
