//! lcdcon - text console control for small Linux displays
//!
//! Loads a console font, reports the resulting grid size and moves or
//! clears the cursor on the display's text console.

mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use config::{CliArgs, Config};

fn main() -> ExitCode {
    // Users can set RUST_LOG=debug to see the external commands being run
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Font: {:?}, font directory: {:?}", config.font, config.font_dir);

    match commands::run(&args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("lcdcon: {}", e);
            ExitCode::FAILURE
        }
    }
}
