//! `laf-inspect`: resolve a look-and-feel theme and print its defaults.
//!
//! ```text
//! laf-inspect --theme laf.core.DarkLaf resolve --prefix Button.
//! laf-inspect --dir ./themes --theme acme.Flat --output json resolve
//! laf-inspect raw --prefix '*.'
//! laf-inspect themes
//! ```

mod cli;
mod commands;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match commands::run(&cli) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{}", out);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
