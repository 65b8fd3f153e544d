use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use plant_catalog::defaults::default_catalog;
use std::sync::Arc;

mod app;
mod catalog_browser;
mod cli;
mod config;
mod error;
mod gui;
mod identification;
mod image_classifier;
mod library;
mod panel;
mod plant_catalog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::from_cli(&cli)?;

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let catalog = default_catalog()?;

    let app = App::new(config, logger.clone(), catalog)?;

    if let Err(e) = app.start(cli.command.unwrap_or(Command::Gui)) {
        let _ = logger.error(&e.to_string());
        return Err(e.into());
    }

    Ok(())
}
