use clap::Parser;

mod cli;
mod convert;
mod error;
mod font;
mod manifest;
mod models;
mod rename;
mod utils;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    utils::logging::init_logging(cli.debug);

    if let Err(err) = cli::run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
