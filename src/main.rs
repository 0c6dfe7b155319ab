use anyhow::{Context, Result};
use clap::Parser;

use dibraster::config::{self, RenderOptions};
use dibraster::graphics::bmp::save_bmp;
use dibraster::render::render;
use dibraster::{logging, Cli};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Config file first, command line overrides it
    let options = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => RenderOptions::default(),
    };
    let options = cli.merge_into_options(options)?;

    logging::init(options.log_level).context("Failed to initialize logging")?;
    log::info!("dibraster starting...");

    log::info!("Configuration:");
    log::info!("  Size: {}x{}", options.width, options.height);
    log::info!("  Depth: {} bits", options.depth);
    log::info!("  Font: {}", options.font.name());
    log::info!("  Output: {}", options.output.display());

    let image = render(&options)?;
    save_bmp(&image, &options.output)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    log::info!("Done");
    Ok(())
}
