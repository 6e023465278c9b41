//! regform - A terminal registration form with validation and a confirm flow
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use regform_app::config::{init_config_dir, load_settings};
use regform_core::logging;
use tracing::info;

/// regform - fill in, review and confirm a registration form
#[derive(Parser, Debug)]
#[command(name = "regform")]
#[command(about = "A terminal registration form with validation and a confirm flow", long_about = None)]
struct Args {
    /// Directory holding `.regform/config.toml` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Run in headless mode (NDJSON commands on stdin, events on stdout)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long, conflicts_with = "headless")]
    init_config: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let path = init_config_dir(&base_path)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let log_dir = logging::init()?;
    info!("Log directory: {}", log_dir.display());
    let settings = load_settings(&base_path);
    info!("Config base path: {}", base_path.display());

    if args.headless {
        regform::run_headless(settings)?;
    } else {
        regform_tui::run(settings)?;
    }

    Ok(())
}
