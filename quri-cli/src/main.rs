//! quri CLI - Command-line interface for Redis connection URIs.

use clap::Parser;
use miette::Diagnostic;

use quri_cli::cli::{Cli, Command};
use quri_cli::commands;
use quri_cli::error::CliResult;
use quri_cli::output;

#[tokio::main]
async fn main() {
    quri_resolve::logging::init();

    if let Err(e) = run().await {
        output::newline();
        output::error(&e.to_string());
        if let Some(help) = e.help() {
            output::hint(&help.to_string());
        }
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(args) => commands::resolve::run(args).await,
        Command::Check(args) => commands::check::run(args).await,
        Command::Version => commands::version::run().await,
    }
}
