use std::process::ExitCode;

use clap::Parser;
use showcase_docs::cli::{Cli, execute, logging};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let _log_guard = logging::init(&cli.log_options(&config))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let status = execute(&cli.command, &config, &mut out)?;
    Ok(status.into())
}
