//! Scene composition for the command line renderer

use anyhow::{Context, Result};

use crate::config::RenderOptions;
use crate::graphics::draw::DrawPrimitive;
use crate::graphics::font::{Font, FontOptions};
use crate::graphics::image::Image;
use crate::graphics::pixfmt::{BitDepth, Color};

/// Distance of the text block from the top left corner.
const TEXT_MARGIN: i32 = 4;

/// Channel-wise midpoint of two colors.
fn blend(a: Color, b: Color) -> Color {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    Color::rgb(
        mid(a.red(), b.red()),
        mid(a.green(), b.green()),
        mid(a.blue(), b.blue()),
    )
}

/// Border, a filled circle and both diagonals.
fn draw_shapes(image: &mut Image<'_>, color: Color, accent: Color) -> Result<()> {
    let (w, h) = (image.width(), image.height().abs());
    image.draw_rect(0, 0, w - 1, h - 1, color)?;

    let (cx, cy) = (w / 2, h / 2);
    let radius = w.min(h) / 4;
    if radius > 0 {
        image.draw_circle(cx, cy, radius, color)?;
    }
    if radius >= 2 && image.bit_depth() != BitDepth::Mono {
        image
            .flood_fill(cx, cy, color, accent)
            .context("Failed to fill circle")?;
    }

    image.draw_line(0, 0, w - 1, h - 1, color)?;
    image.draw_line(0, h - 1, w - 1, 0, color)?;
    Ok(())
}

/// Render the scene described by `options` into a new top-down image.
pub fn render(options: &RenderOptions) -> Result<Image<'static>> {
    let mut image = Image::new(options.width, -options.height, options.depth).with_context(|| {
        format!(
            "Failed to create {}x{} image at {} bits",
            options.width, options.height, options.depth
        )
    })?;

    // 1-bit images draw palette indices; the palette carries the real colors.
    // Index 1 must stay on whatever threshold the caller asked for, so the
    // scene is drawn at threshold 0 and the requested one is stored after.
    let (background, color) = if image.bit_depth() == BitDepth::Mono {
        image.set_palette_color(0, options.background)?;
        image.set_palette_color(1, options.color)?;
        (Color::BLACK, Color::WHITE)
    } else {
        (options.background, options.color)
    };

    image.fill(background)?;

    if options.shapes {
        let accent = blend(background, color);
        draw_shapes(&mut image, color, accent)?;
    }

    if !options.text.is_empty() {
        let font = Font::builtin_with(
            options.font,
            FontOptions {
                spacing: options.spacing,
                invert: false,
            },
        )
        .context("Failed to load bundled font")?;
        let text = options.text.join("\n");
        image.draw_text(
            &font,
            text.as_bytes(),
            None,
            TEXT_MARGIN,
            TEXT_MARGIN,
            color,
        )?;
    }

    image.set_color_threshold(options.threshold);

    log::debug!(
        "rendered {}x{} at {} bits: {} text lines, shapes {}",
        options.width,
        options.height,
        options.depth,
        options.text.len(),
        options.shapes
    );
    Ok(image)
}
