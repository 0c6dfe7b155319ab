//! Graphics subsystem
//!
//! Pixel formats, the drawable image, primitives, bitmap fonts and BMP
//! output.

pub mod arc;
pub mod bmp;
pub mod draw;
pub mod flood;
pub mod font;
pub mod image;
pub mod pixfmt;
pub mod sink;
pub mod text;

pub use bmp::{save_bmp, write_bmp, BmpError};
pub use draw::{DrawError, DrawPrimitive, LinePoints};
pub use font::{BuiltinFont, Font, FontError, FontOptions};
pub use image::{Image, ImageHeader};
pub use pixfmt::{BitDepth, Color};
pub use sink::PixelCallback;
pub use text::{text_size, TextSize};
