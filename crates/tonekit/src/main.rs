use std::io;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tonekit::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match tonekit::run(&cli, &mut io::stdout().lock()) {
        Ok(status) => ExitCode::from(status.code()),
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::from(1)
        }
    }
}
