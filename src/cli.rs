use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{
    parse_color, parse_depth, parse_font, parse_log_level, parse_size, RenderOptions,
};

/// Render text and shapes into a Windows bitmap file
#[derive(Parser, Debug, Default)]
#[command(name = "dibraster")]
#[command(version = "0.3.0")]
#[command(about = "Software rasterizer writing device-independent bitmaps", long_about = None)]
pub struct Cli {
    /// Image size (e.g., 320x240)
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<String>,

    /// Bits per pixel (1, 24, 32)
    #[arg(short, long, value_name = "BITS")]
    pub depth: Option<String>,

    /// Background color (#rrggbb, 0xVALUE or decimal)
    #[arg(short, long, value_name = "COLOR")]
    pub background: Option<String>,

    /// Foreground color for text and shapes
    #[arg(short, long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Bundled font (small, medium)
    #[arg(short, long, value_name = "FONT")]
    pub font: Option<String>,

    /// Extra pixels between glyphs
    #[arg(long, value_name = "PIXELS")]
    pub spacing: Option<u8>,

    /// Brightness threshold stored on 1-bit images (0-255). The rendered
    /// scene always uses the foreground color; the threshold only applies to
    /// later drawing with real colors
    #[arg(long, value_name = "LEVEL")]
    pub threshold: Option<u8>,

    /// Line of text to draw (can be specified multiple times)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Draw the demo shapes
    #[arg(long)]
    pub shapes: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (nothing, user, error, warning, info, debug, all)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Output bitmap path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Merge CLI arguments into the options struct
    pub fn merge_into_options(&self, mut opts: RenderOptions) -> Result<RenderOptions> {
        if let Some(ref size) = self.size {
            (opts.width, opts.height) = parse_size(size).context("Invalid size format")?;
        }

        if let Some(ref depth) = self.depth {
            opts.depth = parse_depth(depth)?;
        }

        if let Some(ref background) = self.background {
            opts.background = parse_color(background).context("Invalid background color")?;
        }
        if let Some(ref color) = self.color {
            opts.color = parse_color(color).context("Invalid foreground color")?;
        }

        if let Some(ref font) = self.font {
            opts.font = parse_font(font)?;
        }
        if let Some(spacing) = self.spacing {
            opts.spacing = spacing;
        }
        if let Some(threshold) = self.threshold {
            opts.threshold = threshold;
        }

        // command line text replaces the configured lines
        if !self.text.is_empty() {
            opts.text = self.text.clone();
        }

        if self.shapes {
            opts.shapes = true;
        }

        if let Some(ref level) = self.log_level {
            opts.log_level = parse_log_level(level)?;
        }

        if let Some(ref output) = self.output {
            opts.output = output.clone();
        }

        Ok(opts)
    }
}
