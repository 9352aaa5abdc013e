mod cli;
mod config;
mod logging;

use crate::cli::Cli;

fn main() {
    // Parse CLI, init logging, load config, and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("urlkit error: {:#}", err);
        std::process::exit(1);
    }
}
