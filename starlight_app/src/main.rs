//! Starlight console frame driver
//!
//! Opens the framebuffer, font and mouse devices, builds the demo desktop
//! and redraws it every frame with a label following the mouse.

mod driver;
mod input;
mod scene;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use starlight::config::{Config, ConfigError};
use starlight::core::config::StarlightConfig;
use starlight::foundation::logging;
use starlight::{Starlight, StarlightError};
use thiserror::Error;

use driver::FrameDriver;
use input::{MouseDevice, Pointer};

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "starlight", about = "Draw the Starlight demo desktop on the framebuffer")]
struct Args {
    /// Configuration file (.toml or .ron)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many frames instead of running forever
    #[arg(short, long)]
    frames: Option<u64>,

    /// Save the last frame as a PNG before exiting
    #[arg(long)]
    capture: Option<PathBuf>,
}

/// Errors that end the driver
#[derive(Error, Debug)]
enum AppError {
    /// Device or rendering failure
    #[error("Device error: {0}")]
    Device(#[from] StarlightError),

    /// Configuration failure
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Load the configuration file if one was given; validation happens when the devices are opened
fn load_config(path: Option<&PathBuf>) -> Result<StarlightConfig, AppError> {
    match path {
        Some(path) => Ok(StarlightConfig::load_from_file(path)?),
        None => Ok(StarlightConfig::default()),
    }
}

fn run(args: &Args, config: &StarlightConfig) -> Result<(), AppError> {
    if let Some(path) = &args.config {
        log::info!("Loaded configuration from {}", path.display());
    }

    let mut ctx = Starlight::open(config)?;

    let mouse = match File::open(&config.devices.mouse) {
        Ok(file) => Some(MouseDevice::new(file)),
        Err(e) => {
            log::warn!("Could not open {}: {}", config.devices.mouse.display(), e);
            None
        }
    };

    let screen = ctx.surface().bounds();
    let desktop = scene::desktop(&screen, ctx.font());
    let pointer_label = scene::pointer(ctx.font());
    let mut driver = FrameDriver::new(desktop, pointer_label, Pointer::new(screen.width, screen.height), mouse);

    driver.run(&mut ctx, args.frames)?;
    log::debug!("Pointer ended at {:?}", driver.pointer().position());

    if let Some(path) = &args.capture {
        ctx.surface().save_png(path)?;
    }

    ctx.shutdown();
    Ok(())
}

fn main() {
    let args = Args::parse();

    // Logging is configured from the file, so load errors can only go to stderr
    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("starlight: {e}");
            std::process::exit(1);
        }
    };
    logging::init_with_level(&config.logging.level);

    if let Err(e) = run(&args, &config) {
        log::error!("{}", e);
        eprintln!("starlight: {e}");
        std::process::exit(1);
    }
}
