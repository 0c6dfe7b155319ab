//! Drawing primitives
//!
//! Single pixel access, whole-image fill, lines, rectangle outlines and
//! filled rectangles. Arcs and flood fill live in their own modules but share
//! the error type and the [`DrawPrimitive`] trait defined here.
//!
//! # Clipping rules
//!
//! - `set_pixel` / `get_pixel` reject coordinates outside the image.
//! - Multi-pixel primitives skip the points that fall outside and still
//!   succeed.
//! - `fill_rect` fails when the whole rectangle is off the image.
//!
//! A pixel callback that returns `false` stops the primitive with
//! [`DrawError::Aborted`]; whatever was drawn before stays drawn.

use crate::graphics::font::Font;
use crate::graphics::image::Image;
use crate::graphics::pixfmt::{replicate_rows, BitDepth, Color, Layout};
use crate::graphics::sink::Sink;

/// Errors reported by drawing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("Image has neither pixel storage nor a pixel callback")]
    NoTarget,

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Unsupported bit depth: {0}")]
    UnsupportedDepth(u16),

    #[error("Palette index out of range: {0}")]
    PaletteIndex(usize),

    #[error("Point out of range: {x},{y} in {width}x{height}")]
    OutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("Rectangle {x1},{y1} -> {x2},{y2} lies outside the image")]
    EmptyRect { x1: i32, y1: i32, x2: i32, y2: i32 },

    #[error("Drawing aborted by pixel callback")]
    Aborted,

    #[error("Buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("Allocation failed")]
    AllocationFailed,

    #[error("Allocation is disabled in this build")]
    AllocationDisabled,
}

fn check_point(layout: &Layout, x: i32, y: i32) -> Result<(), DrawError> {
    if layout.contains(x, y) {
        return Ok(());
    }
    log::warn!(
        "Point out of range : {},{} : {}x{}",
        x,
        y,
        layout.width,
        layout.height
    );
    Err(DrawError::OutOfRange {
        x,
        y,
        width: layout.width,
        height: layout.height,
    })
}

/// Set one pixel.
pub fn set_pixel(image: &mut Image<'_>, x: i32, y: i32, color: Color) -> Result<(), DrawError> {
    check_point(&image.layout(), x, y)?;
    image.sink(color)?.plot(x, y, 0)
}

/// Read one pixel from the image storage.
///
/// 1-bit images return the palette color for the stored bit.
pub fn get_pixel(image: &Image<'_>, x: i32, y: i32) -> Result<Color, DrawError> {
    let layout = image.layout();
    let data = image.pixels().ok_or(DrawError::NoTarget)?;
    check_point(&layout, x, y)?;
    Ok(layout.decode(data, x as usize, y as usize, image.palette_entries()))
}

/// Fill the whole image with `color`.
///
/// Buffers get the first scanline painted and then copied down; callbacks
/// receive every pixel in row-major order.
pub fn fill(image: &mut Image<'_>, color: Color) -> Result<(), DrawError> {
    let layout = image.layout();
    let mut sink = image.sink(color)?;

    if let Sink::Buffer { data, layout, pen } = &mut sink {
        pen.fill_row(data, layout, 0);
        replicate_rows(data, 0, layout.stride, layout.stride, layout.height);
        return Ok(());
    }

    for y in 0..layout.height as i32 {
        for x in 0..layout.width as i32 {
            sink.plot(x, y, 0)?;
        }
    }
    Ok(())
}

// ==============================================================================
// Lines
// ==============================================================================

/// Points of a line from `(x1, y1)` to `(x2, y2)`, both ends included.
///
/// Symmetric error-accumulating stepper: both axes accumulate their delta
/// each step and advance when twice the accumulator reaches the step count.
/// Yields exactly `max(|dx|, |dy|) + 1` points and never moves backwards on
/// either axis.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    sx: i32,
    sy: i32,
    dx: i64,
    dy: i64,
    steps: i64,
    mx: i64,
    my: i64,
    remaining: i64,
}

impl LinePoints {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let dx = (x2 as i64 - x1 as i64).abs();
        let dy = (y2 as i64 - y1 as i64).abs();
        let steps = dx.max(dy);
        Self {
            x: x1,
            y: y1,
            sx: if x1 < x2 { 1 } else { -1 },
            sy: if y1 < y2 { 1 } else { -1 },
            dx,
            dy,
            steps,
            mx: 0,
            my: 0,
            remaining: steps + 1,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = (self.x, self.y);
        self.remaining -= 1;

        if self.remaining > 0 {
            self.mx += self.dx;
            if 2 * self.mx >= self.steps {
                self.x += self.sx;
                self.mx -= self.steps;
            }
            self.my += self.dy;
            if 2 * self.my >= self.steps {
                self.y += self.sy;
                self.my -= self.steps;
            }
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Draw a line. Points outside the image are skipped.
pub fn draw_line(
    image: &mut Image<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
) -> Result<(), DrawError> {
    let layout = image.layout();
    let mut sink = image.sink(color)?;
    for (x, y) in LinePoints::new(x1, y1, x2, y2) {
        if layout.contains(x, y) {
            sink.plot(x, y, 0)?;
        }
    }
    Ok(())
}

/// Draw a rectangle outline with four lines.
pub fn draw_rect(
    image: &mut Image<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
) -> Result<(), DrawError> {
    draw_line(image, x1, y1, x2, y1, color)?;
    draw_line(image, x2, y1, x2, y2, color)?;
    draw_line(image, x2, y2, x1, y2, color)?;
    draw_line(image, x1, y2, x1, y1, color)?;
    Ok(())
}

// ==============================================================================
// Filled rectangles
// ==============================================================================

/// Fill the rectangle spanned by two corners, both included.
///
/// Corner order does not matter. The region is clipped to the image; a
/// rectangle with no pixel on the image is an error.
pub fn fill_rect(
    image: &mut Image<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
) -> Result<(), DrawError> {
    let layout = image.layout();
    let (w, h) = (layout.width as i32, layout.height as i32);

    let (left, right) = (x1.min(x2), x1.max(x2));
    let (top, bottom) = (y1.min(y2), y1.max(y2));

    if right < 0 || bottom < 0 || left >= w || top >= h {
        log::warn!(
            "Invalid fill rect : {},{} -> {},{} : {}x{}",
            x1,
            y1,
            x2,
            y2,
            w,
            h
        );
        return Err(DrawError::EmptyRect { x1, y1, x2, y2 });
    }

    let left = left.max(0) as usize;
    let right = right.min(w - 1) as usize;
    let top = top.max(0) as usize;
    let bottom = bottom.min(h - 1) as usize;
    let span = right - left + 1;
    let rows = bottom - top + 1;

    let mut sink = image.sink(color)?;
    if sink.is_callback() {
        for y in top..=bottom {
            for x in left..=right {
                sink.plot(x as i32, y as i32, 0)?;
            }
        }
        return Ok(());
    }

    if let Sink::Buffer { data, layout, pen } = &mut sink {
        if layout.depth == BitDepth::Mono {
            for y in top..=bottom {
                pen.fill_span(data, layout, left, y, span);
            }
        } else {
            pen.fill_span(data, layout, left, top, span);
            let first = layout.offset(left, top);
            let len = span * layout.depth.bytes_per_pixel();
            replicate_rows(data, first, len, layout.stride, rows);
        }
    }
    Ok(())
}

// ==============================================================================
// Primitive trait
// ==============================================================================

/// Drawing operations available on an [`Image`].
///
/// Each method forwards to the free function of the same name.
pub trait DrawPrimitive {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), DrawError>;

    fn get_pixel(&self, x: i32, y: i32) -> Result<Color, DrawError>;

    fn fill(&mut self, color: Color) -> Result<(), DrawError>;

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color)
        -> Result<(), DrawError>;

    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color)
        -> Result<(), DrawError>;

    fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color)
        -> Result<(), DrawError>;

    fn draw_arc(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        start: f64,
        end: f64,
        color: Color,
    ) -> Result<(), DrawError>;

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) -> Result<(), DrawError>;

    fn flood_fill(&mut self, x: i32, y: i32, boundary: Color, color: Color)
        -> Result<(), DrawError>;

    fn draw_text(
        &mut self,
        font: &Font<'_>,
        text: &[u8],
        len: Option<usize>,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), DrawError>;
}

impl DrawPrimitive for Image<'_> {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), DrawError> {
        set_pixel(self, x, y, color)
    }

    fn get_pixel(&self, x: i32, y: i32) -> Result<Color, DrawError> {
        get_pixel(self, x, y)
    }

    fn fill(&mut self, color: Color) -> Result<(), DrawError> {
        fill(self, color)
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color)
        -> Result<(), DrawError> {
        draw_line(self, x1, y1, x2, y2, color)
    }

    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color)
        -> Result<(), DrawError> {
        draw_rect(self, x1, y1, x2, y2, color)
    }

    fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color)
        -> Result<(), DrawError> {
        fill_rect(self, x1, y1, x2, y2, color)
    }

    fn draw_arc(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        start: f64,
        end: f64,
        color: Color,
    ) -> Result<(), DrawError> {
        crate::graphics::arc::draw_arc(self, x, y, radius, start, end, color)
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) -> Result<(), DrawError> {
        crate::graphics::arc::draw_circle(self, x, y, radius, color)
    }

    fn flood_fill(&mut self, x: i32, y: i32, boundary: Color, color: Color)
        -> Result<(), DrawError> {
        crate::graphics::flood::flood_fill(self, x, y, boundary, color)
    }

    fn draw_text(
        &mut self,
        font: &Font<'_>,
        text: &[u8],
        len: Option<usize>,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), DrawError> {
        crate::graphics::text::draw_text(self, font, text, len, x, y, color)
    }
}
