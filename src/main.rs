#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! arrowhead — render Arrowhead service-registry records as tables.

mod cli;
mod commands;
mod format;
mod table;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use table::ThemeStore;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let store = ThemeStore::builtin();
    let ctx = OutputCtx::new(
        cli.output,
        cli.json,
        cli.theme_name(),
        cli.no_title,
        cli.debug,
    );

    match commands::dispatch(&cli.command, &store, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_cli_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
