use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::graphics::font::BuiltinFont;
use crate::graphics::pixfmt::{BitDepth, Color};
use crate::logging::LogLevel;

/// Rendering options that can be set via CLI or config file
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Bits per pixel: 1, 24 or 32.
    pub depth: u16,
    pub background: Color,
    pub color: Color,
    pub font: BuiltinFont,
    pub spacing: u8,
    /// Threshold for 1-bit images.
    pub threshold: u8,
    /// Lines of text, drawn top to bottom.
    pub text: Vec<String>,
    /// Draw the demo shapes.
    pub shapes: bool,
    pub output: PathBuf,
    pub log_level: LogLevel,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            depth: 24,
            background: Color::BLACK,
            color: Color::WHITE,
            font: BuiltinFont::Small,
            spacing: 1,
            threshold: 0,
            text: Vec::new(),
            shapes: false,
            output: PathBuf::from("out.bmp"),
            log_level: LogLevel::default(),
        }
    }
}

/// Parse a property file string, invoking `handler` for each key-value pair.
///
/// Lines are `key = value`. Whitespace around keys and values is trimmed,
/// `#` starts a comment that runs to the end of the line, and lines without
/// `=` are skipped with a warning. When `prefix` is given it is prepended to
/// every key.
pub fn parse_propfile(data: &str, handler: &mut dyn FnMut(&str, &str), prefix: Option<&str>) {
    for (number, line) in data.lines().enumerate() {
        let line = match line.find('#') {
            Some(at) => &line[..at],
            None => line,
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            log::warn!("Key without value on line {}", number + 1);
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() {
            log::warn!("Value without key on line {}", number + 1);
            continue;
        }

        match prefix {
            Some(pfx) => handler(&format!("{}{}", pfx, key), value),
            None => handler(key, value),
        }
    }
}

/// Load render options from a property file, starting from the defaults.
pub fn load_config(path: &Path) -> Result<RenderOptions> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let mut opts = RenderOptions::default();
    apply_config(&data, &mut opts)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(opts)
}

/// Apply every known key of a property file to `opts`.
///
/// Unknown keys are logged and ignored; the first invalid value fails the
/// whole file.
pub fn apply_config(data: &str, opts: &mut RenderOptions) -> Result<()> {
    let mut first_error = None;
    parse_propfile(
        data,
        &mut |key, value| {
            if first_error.is_some() {
                return;
            }
            if let Err(err) = apply_option(opts, key, value) {
                first_error = Some(err);
            }
        },
        None,
    );
    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn apply_option(opts: &mut RenderOptions, key: &str, value: &str) -> Result<()> {
    match key.to_lowercase().as_str() {
        "width" => opts.width = parse_dimension(value).context("Invalid width")?,
        "height" => opts.height = parse_dimension(value).context("Invalid height")?,
        "size" => (opts.width, opts.height) = parse_size(value)?,
        "depth" => opts.depth = parse_depth(value)?,
        "background" => opts.background = parse_color(value)?,
        "color" => opts.color = parse_color(value)?,
        "font" => opts.font = parse_font(value)?,
        "spacing" => opts.spacing = value.parse().context("Invalid spacing")?,
        "threshold" => opts.threshold = value.parse().context("Invalid threshold")?,
        "text" => opts.text.push(value.to_string()),
        "shapes" => opts.shapes = parse_bool(value)?,
        "output" => opts.output = PathBuf::from(value),
        "log_level" => opts.log_level = parse_log_level(value)?,
        other => log::warn!("Unknown config key: {}", other),
    }
    Ok(())
}

fn parse_dimension(s: &str) -> Result<i32> {
    let value: i32 = s.trim().parse().context("Not a number")?;
    if value <= 0 {
        anyhow::bail!("Dimensions must be positive");
    }
    Ok(value)
}

/// Parse a size string in the format "WIDTHxHEIGHT"
pub fn parse_size(s: &str) -> Result<(i32, i32)> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        anyhow::bail!("Size must be in WIDTHxHEIGHT format");
    }

    let width = parse_dimension(parts[0]).context("Invalid width value")?;
    let height = parse_dimension(parts[1]).context("Invalid height value")?;
    Ok((width, height))
}

/// Parse a color: `#rrggbb`, `0x` followed by the packed hex value, or a
/// packed decimal value.
pub fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Color must be #rrggbb: {}", s);
        }
        let channel = |at: usize| {
            u8::from_str_radix(&hex[at..at + 2], 16).with_context(|| format!("Invalid color: {}", s))
        };
        return Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let raw = u32::from_str_radix(hex, 16).with_context(|| format!("Invalid color: {}", s))?;
        return Ok(Color(raw));
    }
    let raw: u32 = s.parse().with_context(|| format!("Invalid color: {}", s))?;
    Ok(Color(raw))
}

/// Parse a bit depth, accepting only the supported ones.
pub fn parse_depth(s: &str) -> Result<u16> {
    let bits: u16 = s.trim().parse().context("Invalid bit depth")?;
    let depth = BitDepth::from_bits(bits)?;
    Ok(depth.bits())
}

/// Parse a bundled font name (small, medium)
pub fn parse_font(s: &str) -> Result<BuiltinFont> {
    match s.trim().to_lowercase().as_str() {
        "small" => Ok(BuiltinFont::Small),
        "medium" => Ok(BuiltinFont::Medium),
        _ => anyhow::bail!("Invalid font: {}. Valid options: small, medium", s),
    }
}

pub fn parse_log_level(s: &str) -> Result<LogLevel> {
    LogLevel::from_name(s.trim()).with_context(|| {
        format!(
            "Invalid log level: {}. Valid options: nothing, user, error, warning, info, debug, all",
            s
        )
    })
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => anyhow::bail!("Invalid boolean: {}", s),
    }
}
