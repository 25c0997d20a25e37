use crate::config::Config;
use crate::console::Console;
use crate::loader::Loader;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::Level;

mod config;
mod console;
mod display;
mod editor;
mod loader;
mod menu;
mod model;
mod search;

#[derive(Parser)]
#[command(version, author, about)]
struct Options {
    /// Use FILE instead of dashboard.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Read and save subjects in FILE instead of the configured data file
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let config = Config::load_or_default(options.config.as_deref())?;
    let loader = Loader::new(options.file.unwrap_or_else(|| config.data_file.clone()));
    let mut catalog = loader.load()?.into_catalog();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    menu::run(&mut console, &mut catalog, &loader, &config)?;
    Ok(())
}
