//! Pixel sinks
//!
//! Every primitive resolves its target once, before touching any pixel: a
//! registered callback wins, otherwise the image buffer is written directly.
//! The geometric code then only ever calls [`Sink::plot`].

use crate::graphics::draw::DrawError;
use crate::graphics::pixfmt::{Color, Layout, Pen};

/// User supplied per-pixel writer.
///
/// Receives the coordinate, the color and the character code being drawn
/// (0 outside of text). Returning `false` aborts the running primitive.
/// Pixels drawn before the abort are kept.
pub trait PixelCallback {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color, ch: u8) -> bool;
}

impl<F> PixelCallback for F
where
    F: FnMut(i32, i32, Color, u8) -> bool,
{
    fn set_pixel(&mut self, x: i32, y: i32, color: Color, ch: u8) -> bool {
        self(x, y, color, ch)
    }
}

/// Resolved drawing target for a single primitive call.
pub enum Sink<'s> {
    /// Direct writes into the pixel buffer.
    Buffer {
        data: &'s mut [u8],
        layout: Layout,
        pen: Pen,
    },
    /// Every pixel is forwarded to the user callback.
    Callback {
        callback: &'s mut dyn PixelCallback,
        color: Color,
    },
}

impl<'s> Sink<'s> {
    /// Touch one pixel.
    ///
    /// Buffer writes outside the layout are dropped. Callback sinks see every
    /// coordinate they are given; callers that clip do so before plotting.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, ch: u8) -> Result<(), DrawError> {
        match self {
            Sink::Buffer { data, layout, pen } => {
                if layout.contains(x, y) {
                    pen.put(data, layout, x as usize, y as usize);
                }
                Ok(())
            }
            Sink::Callback { callback, color } => {
                if callback.set_pixel(x, y, *color, ch) {
                    Ok(())
                } else {
                    log::debug!("pixel callback aborted at {},{}", x, y);
                    Err(DrawError::Aborted)
                }
            }
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self, Sink::Callback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::pixfmt::{BitDepth, DEFAULT_ALIGNMENT};

    #[test]
    fn test_buffer_sink_ignores_outside_points() {
        let layout = Layout::new(2, 2, BitDepth::Rgb24, DEFAULT_ALIGNMENT);
        let mut data = vec![0u8; layout.byte_len()];
        let pen = Pen::new(BitDepth::Rgb24, Color::WHITE, 0);
        {
            let mut sink = Sink::Buffer {
                data: &mut data,
                layout,
                pen,
            };
            assert!(sink.plot(-1, 0, 0).is_ok());
            assert!(sink.plot(2, 1, 0).is_ok());
            assert!(sink.plot(1, 1, 0).is_ok());
            assert!(!sink.is_callback());
        }
        assert!(pen.matches(&data, &layout, 1, 1));
        assert!(!pen.matches(&data, &layout, 0, 0));
    }

    #[test]
    fn test_callback_sink_forwards_and_aborts() {
        let mut seen = Vec::new();
        let mut cb = |x: i32, y: i32, c: Color, ch: u8| {
            seen.push((x, y, c, ch));
            x < 3
        };
        let mut sink = Sink::Callback {
            callback: &mut cb,
            color: Color(7),
        };
        assert!(sink.is_callback());
        assert!(sink.plot(1, 2, b'a').is_ok());
        assert!(matches!(sink.plot(3, 0, 0), Err(DrawError::Aborted)));
        drop(sink);
        assert_eq!(seen, vec![(1, 2, Color(7), b'a'), (3, 0, Color(7), 0)]);
    }
}
