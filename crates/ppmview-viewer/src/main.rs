//! ppmview — displays a PPM image as a textured quad and applies 2D affine
//! transforms from the keyboard.
//!
//! Bindings: Q/E rotate, =/- scale, arrows translate, W/S and D/A shear,
//! Escape quits.

mod app;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ppmview_engine::device::GpuInit;
use ppmview_engine::logging::{LoggingConfig, init_logging};
use ppmview_engine::window::{Runtime, RuntimeConfig};
use ppmview_ppm::PpmImage;

use crate::app::ViewerApp;

#[derive(Parser, Debug)]
#[command(name = "ppmview", about = "View a PPM image with interactive 2D transforms")]
struct Args {
    /// Path to a P3 or P6 PPM file.
    image: PathBuf,

    /// Window title (defaults to the file name).
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse();

    // Decode before any window opens; a malformed file exits with a decode
    // error instead of a blank window.
    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("failed to read {}", args.image.display()))?;
    let image = PpmImage::decode(&bytes)
        .with_context(|| format!("failed to decode {}", args.image.display()))?;

    log::info!(
        "loaded {} ({}x{}, max value {})",
        args.image.display(),
        image.width,
        image.height,
        image.max_value
    );

    let title = args.title.unwrap_or_else(|| {
        args.image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ppmview".to_string())
    });

    let config = RuntimeConfig {
        title,
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), ViewerApp::new(&image))
}
