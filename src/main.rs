use clap::Parser;

use crate::cli::{match_cli, Cli};

pub mod battery;
pub mod block;
pub mod cli;
pub mod command;
pub mod error;
pub mod json;
pub mod urgency;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    // Nothing is printed unless the whole block could be built
    match match_cli(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
