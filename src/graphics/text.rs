//! Text layout and glyph compositing
//!
//! Text is a byte string, one glyph per byte. `'\r'` returns the cursor to
//! the starting column, `'\n'` also moves to the next line. The line
//! direction follows the image scan direction, optionally flipped by the
//! font's invert flag.

use crate::graphics::draw::DrawError;
use crate::graphics::font::{Font, Glyph};
use crate::graphics::image::Image;
use crate::graphics::pixfmt::{Color, Layout};
use crate::graphics::sink::Sink;

/// Measured text extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
}

/// Bytes to lay out: up to `len` bytes, or up to the first zero byte.
fn text_bytes(text: &[u8], len: Option<usize>) -> &[u8] {
    match len {
        Some(n) => &text[..n.min(text.len())],
        None => {
            let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
            &text[..end]
        }
    }
}

/// First and last image row covered by `height` bitmap rows starting at `y`.
fn row_span(y: i32, height: i32, invert: i32) -> (i32, i32) {
    let last = y + invert * (height - 1);
    (y.min(last), y.max(last))
}

/// Whether the whole bitmap box of a glyph placed at `(x, y)` is on the image.
fn glyph_fits(layout: &Layout, glyph: &Glyph<'_>, x: i32, y: i32, invert: i32) -> bool {
    let (top, bottom) = row_span(y, glyph.bbox.height as i32, invert);
    let right = x as i64 + glyph.bbox.width as i64;
    x >= 0 && top >= 0 && right <= layout.width as i64 && (bottom as i64) < layout.height as i64
}

/// Composite one glyph. Bitmap row `r` lands on image row `y + invert * r`.
fn draw_glyph(
    sink: &mut Sink<'_>,
    glyph: &Glyph<'_>,
    x: i32,
    y: i32,
    invert: i32,
    ch: u8,
) -> Result<(), DrawError> {
    for (col, row) in glyph.set_pixels() {
        sink.plot(x + col as i32, y + invert * row as i32, ch)?;
    }
    Ok(())
}

/// Rows between the top of the line cell and the first bitmap row.
fn glyph_top(font: &Font<'_>, glyph: &Glyph<'_>) -> i32 {
    let baseline = font.bbox().height as i32 + font.bbox().yoffset as i32;
    baseline - glyph.extent().1
}

/// Draw `text` with its first line's cell starting at `(x, y)`.
///
/// Lines and glyph rows both advance along the display direction: toward
/// larger `y` on top-down images, toward smaller `y` on bottom-up ones,
/// flipped again by the font's invert flag. With a pixel buffer, glyphs
/// that do not fit entirely on the image are skipped. A pixel callback
/// receives every set bit of every glyph, whether on the image or not, with
/// `ch` set to the character being drawn. Only set bits are painted; the
/// background shows through everywhere else.
pub fn draw_text(
    image: &mut Image<'_>,
    font: &Font<'_>,
    text: &[u8],
    len: Option<usize>,
    x: i32,
    y: i32,
    color: Color,
) -> Result<(), DrawError> {
    let layout = image.layout();
    let invert = if (image.height() > 0) ^ font.is_inverted() { -1 } else { 1 };

    let mut sink = image.sink(color)?;
    let clip = !sink.is_callback();

    let (mut lx, mut ly) = (x, y);
    let mut line_height = 0;

    for &ch in text_bytes(text, len) {
        match ch {
            b'\r' => lx = x,
            b'\n' => {
                lx = x;
                ly += invert * (1 + line_height);
                line_height = 0;
            }
            _ => {
                let glyph = font.glyph(ch);
                let (extent_w, extent_h) = glyph.extent();
                let gx = lx + glyph.bbox.xoffset as i32;
                let gy = ly + invert * glyph_top(font, &glyph);

                if extent_w > 0 && extent_h > 0 {
                    if !clip || glyph_fits(&layout, &glyph, gx, gy, invert) {
                        log::trace!("glyph {:?} at {},{}", ch as char, gx, gy);
                        draw_glyph(&mut sink, &glyph, gx, gy, invert, ch)?;
                    } else {
                        log::debug!("glyph {:?} at {},{} does not fit, skipped", ch as char, gx, gy);
                    }
                }

                lx += font.spacing() + glyph.advance_x as i32;
                line_height = line_height.max(extent_h);
            }
        }
    }
    Ok(())
}

/// Measure `text` without drawing it.
///
/// Uses the same cursor and line arithmetic as [`draw_text`]. The width is
/// the furthest the cursor or any glyph bitmap reaches; `'\r'` returns to
/// the start of the line, so the widest pass wins. Lines advance by their
/// tallest glyph extent plus one pixel, and the height reaches the lowest
/// bitmap row of any line. On a top-down image every pixel drawn at
/// `(x, y)` falls inside `[x, x + width) x [y, y + height)`; bottom-up
/// images mirror the box vertically.
pub fn text_size(font: &Font<'_>, text: &[u8], len: Option<usize>) -> TextSize {
    let mut size = TextSize::default();
    // end of the last glyph's advance on this pass, if any
    let mut cursor: Option<i32> = None;
    let mut line_top = 0;
    let mut line_height = 0;
    let mut line_bottom = 0;

    for &ch in text_bytes(text, len) {
        match ch {
            b'\r' => cursor = None,
            b'\n' => {
                size.height = size.height.max(line_top + line_bottom);
                line_top += 1 + line_height;
                line_height = 0;
                line_bottom = 0;
                cursor = None;
            }
            _ => {
                let glyph = font.glyph(ch);
                let (extent_w, extent_h) = glyph.extent();
                let pos = cursor.map_or(0, |end| end + font.spacing());
                let end = pos + glyph.advance_x as i32;
                size.width = size.width.max(end);

                if extent_w > 0 && extent_h > 0 {
                    let right = pos + glyph.bbox.xoffset as i32 + glyph.bbox.width as i32;
                    let bottom = glyph_top(font, &glyph) + glyph.bbox.height as i32;
                    size.width = size.width.max(right);
                    line_bottom = line_bottom.max(bottom);
                }

                line_height = line_height.max(extent_h);
                line_bottom = line_bottom.max(extent_h);
                cursor = Some(end);
            }
        }
    }

    size.height = size.height.max(line_top + line_bottom);
    size
}
