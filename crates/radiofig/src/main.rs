//! Main entry point for radiofig.

use clap::Parser;
use radiofig::{list_diagrams, run, Cli};
use radiofig_common::init_logging;
use radiofig_graphs::DiagramRegistry;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.logging_config()) {
        eprintln!("radiofig: {err}");
        return ExitCode::FAILURE;
    }

    let registry = DiagramRegistry::builtin();
    if cli.list {
        print!("{}", list_diagrams(&registry));
        return ExitCode::SUCCESS;
    }

    match run(&cli, &registry) {
        Ok(summary) => summary.into(),
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
