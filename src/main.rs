#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release profile

use std::process;

use clap::Parser;
use log::error;

use sensor_login::*;

fn run(args: options::Args) -> error::Result<()> {
    // Returns once the user closes the window
    ui::login::gui(args.into())?;
    Ok(())
}

fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("SENSOR_LOGIN_LOG", "warn")
        .write_style("SENSOR_LOGIN_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(options::Args::parse()) {
        error!("{e}");
        process::exit(1);
    }
}
