//! Pixel format handling
//!
//! Everything that depends on the bit depth of an image lives here:
//! - Stride and size computation for 1, 24 and 32 bit images
//! - `Color`, the packed 24-bit color used by every drawing call
//! - `Layout`, which maps a pixel coordinate to a byte offset
//! - `Pen`, a color already encoded for one depth
//!
//! The drawing algorithms never branch on depth themselves. They build a
//! `Pen` once and hand it the buffer, so each depth is described exactly once.

use crate::graphics::draw::DrawError;

/// Row alignment used by device-independent bitmaps.
pub const DEFAULT_ALIGNMENT: usize = 4;

/// Bit masks for the pixels of a 1-bit scanline byte, leftmost first.
const BIT_MASKS: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

// ==============================================================================
// Color
// ==============================================================================

/// Packed color value.
///
/// Channels are stored low byte first: red in bits 0-7, green in 8-15 and
/// blue in 16-23. The high byte is ignored everywhere except 32-bit images,
/// which store the whole word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);

    /// Build a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r as u32 | (g as u32) << 8 | (b as u32) << 16)
    }

    pub const fn red(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    /// Raw packed value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Threshold test used by 1-bit images.
    ///
    /// A color counts as "on" when any channel is strictly greater than
    /// `threshold`.
    pub const fn exceeds(self, threshold: u8) -> bool {
        self.red() > threshold || self.green() > threshold || self.blue() > threshold
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// ==============================================================================
// Bit depth and strides
// ==============================================================================

/// Supported pixel depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 1 bit per pixel, two color palette.
    Mono,
    /// 24 bits per pixel, bytes R, G, B.
    Rgb24,
    /// 32 bits per pixel, one little-endian word.
    Rgba32,
}

impl BitDepth {
    /// Map a bit count onto a supported depth.
    pub fn from_bits(bits: u16) -> Result<Self, DrawError> {
        match bits {
            1 => Ok(BitDepth::Mono),
            24 => Ok(BitDepth::Rgb24),
            32 => Ok(BitDepth::Rgba32),
            other => Err(DrawError::UnsupportedDepth(other)),
        }
    }

    pub const fn bits(self) -> u16 {
        match self {
            BitDepth::Mono => 1,
            BitDepth::Rgb24 => 24,
            BitDepth::Rgba32 => 32,
        }
    }

    /// Number of bytes addressed per pixel (1 for packed mono rows).
    pub const fn bytes_per_pixel(self) -> usize {
        pixel_stride(self.bits() as u32)
    }
}

/// Bytes per pixel for a bit depth: 1 up to 8 bits, `bits / 8` above.
pub const fn pixel_stride(bits: u32) -> usize {
    if bits <= 8 {
        1
    } else {
        (bits / 8) as usize
    }
}

/// Bytes per scanline, padded up to a multiple of `alignment`.
///
/// The sign of `width` is ignored. An alignment of 0 is treated as 1.
pub fn scan_stride(width: i32, bits: u32, alignment: usize) -> usize {
    let alignment = alignment.max(1);
    let bits_per_row = width.unsigned_abs() as usize * bits as usize;
    let bytes = (bits_per_row + 7) / 8;
    (bytes + alignment - 1) / alignment * alignment
}

/// Total image size in bytes, or `None` when the depth is not supported
/// or a dimension is zero.
pub fn image_size(width: i32, height: i32, bits: u32, alignment: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    match bits {
        1 | 24 | 32 => Some(scan_stride(width, bits, alignment) * height.unsigned_abs() as usize),
        _ => None,
    }
}

// ==============================================================================
// Layout
// ==============================================================================

/// Addressing information for one image buffer.
///
/// Always built fresh from the image header; never cache one across images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub depth: BitDepth,
    pub width: usize,
    pub height: usize,
    pub stride: usize,
}

impl Layout {
    /// Layout of a `width` x `height` image with rows padded to `alignment`.
    pub fn new(width: i32, height: i32, depth: BitDepth, alignment: usize) -> Self {
        Self {
            depth,
            width: width.unsigned_abs() as usize,
            height: height.unsigned_abs() as usize,
            stride: scan_stride(width, depth.bits() as u32, alignment),
        }
    }

    /// Bytes covered by this layout.
    pub fn byte_len(&self) -> usize {
        self.stride * self.height
    }

    /// Whether a signed coordinate falls inside the image.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Byte offset of the pixel at `(x, y)`.
    ///
    /// For 1-bit images this is the byte holding the pixel's bit.
    pub fn offset(&self, x: usize, y: usize) -> usize {
        match self.depth {
            BitDepth::Mono => y * self.stride + x / 8,
            BitDepth::Rgb24 | BitDepth::Rgba32 => y * self.stride + x * self.depth.bytes_per_pixel(),
        }
    }

    /// Read back the color stored at `(x, y)`.
    ///
    /// 1-bit pixels are mapped through `palette`; the caller has already
    /// bounds-checked the coordinate.
    pub fn decode(&self, buf: &[u8], x: usize, y: usize, palette: &[Color; 2]) -> Color {
        let at = self.offset(x, y);
        match self.depth {
            BitDepth::Mono => {
                let on = buf[at] & BIT_MASKS[x & 7] != 0;
                palette[on as usize]
            }
            BitDepth::Rgb24 => Color::rgb(buf[at], buf[at + 1], buf[at + 2]),
            BitDepth::Rgba32 => Color(u32::from_le_bytes([
                buf[at],
                buf[at + 1],
                buf[at + 2],
                buf[at + 3],
            ])),
        }
    }
}

// ==============================================================================
// Pen
// ==============================================================================

/// A color encoded for a specific depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pen {
    /// Set (`true`) or clear (`false`) the pixel's bit.
    Bit(bool),
    /// Bytes R, G, B.
    Rgb([u8; 3]),
    /// Full 32-bit word, little-endian.
    Word([u8; 4]),
}

impl Pen {
    /// Encode `color` for `depth`. `threshold` only matters for 1-bit images.
    pub fn new(depth: BitDepth, color: Color, threshold: u8) -> Self {
        match depth {
            BitDepth::Mono => Pen::Bit(color.exceeds(threshold)),
            BitDepth::Rgb24 => Pen::Rgb([color.red(), color.green(), color.blue()]),
            BitDepth::Rgba32 => Pen::Word(color.raw().to_le_bytes()),
        }
    }

    /// Write one pixel.
    pub fn put(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize) {
        let at = layout.offset(x, y);
        match *self {
            Pen::Bit(true) => buf[at] |= BIT_MASKS[x & 7],
            Pen::Bit(false) => buf[at] &= !BIT_MASKS[x & 7],
            Pen::Rgb(bytes) => buf[at..at + 3].copy_from_slice(&bytes),
            Pen::Word(bytes) => buf[at..at + 4].copy_from_slice(&bytes),
        }
    }

    /// Whether the pixel at `(x, y)` already holds this pen's value.
    pub fn matches(&self, buf: &[u8], layout: &Layout, x: usize, y: usize) -> bool {
        let at = layout.offset(x, y);
        match *self {
            Pen::Bit(on) => (buf[at] & BIT_MASKS[x & 7] != 0) == on,
            Pen::Rgb(bytes) => buf[at..at + 3] == bytes,
            Pen::Word(bytes) => buf[at..at + 4] == bytes,
        }
    }

    /// Paint `count` pixels of row `y`, starting at column `x`.
    pub fn fill_span(&self, buf: &mut [u8], layout: &Layout, x: usize, y: usize, count: usize) {
        match *self {
            Pen::Bit(_) => {
                for px in x..x + count {
                    self.put(buf, layout, px, y);
                }
            }
            Pen::Rgb(bytes) => {
                let start = layout.offset(x, y);
                for px in buf[start..start + count * 3].chunks_exact_mut(3) {
                    px.copy_from_slice(&bytes);
                }
            }
            Pen::Word(bytes) => {
                let start = layout.offset(x, y);
                for px in buf[start..start + count * 4].chunks_exact_mut(4) {
                    px.copy_from_slice(&bytes);
                }
            }
        }
    }

    /// Paint a whole scanline including its padding bytes.
    ///
    /// Mono rows are written a byte at a time; other depths paint the
    /// visible pixels and leave padding untouched.
    pub fn fill_row(&self, buf: &mut [u8], layout: &Layout, y: usize) {
        match *self {
            Pen::Bit(on) => {
                let start = y * layout.stride;
                buf[start..start + layout.stride].fill(if on { 0xff } else { 0x00 });
            }
            _ => self.fill_span(buf, layout, 0, y, layout.width),
        }
    }
}

/// Copy `len` bytes starting at `first` into the following `rows - 1` rows.
///
/// This is how whole-image and rectangle fills avoid per-pixel work after
/// the first scanline.
pub fn replicate_rows(buf: &mut [u8], first: usize, len: usize, stride: usize, rows: usize) {
    for row in 1..rows {
        let dst = first + row * stride;
        buf.copy_within(first..first + len, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_pixel_stride() {
        assert_eq!(pixel_stride(1), 1);
        assert_eq!(pixel_stride(8), 1);
        assert_eq!(pixel_stride(24), 3);
        assert_eq!(pixel_stride(32), 4);
    }

    #[rstest]
    #[case(1, 1, 4, 4)]
    #[case(9, 1, 4, 4)]
    #[case(33, 1, 4, 8)]
    #[case(3, 24, 4, 12)]
    #[case(5, 24, 4, 16)]
    #[case(5, 24, 1, 15)]
    #[case(5, 32, 4, 20)]
    #[case(-5, 32, 4, 20)]
    #[case(5, 24, 0, 15)]
    fn test_scan_stride(
        #[case] width: i32,
        #[case] bits: u32,
        #[case] alignment: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(scan_stride(width, bits, alignment), expected);
    }

    #[test]
    fn test_image_size() {
        assert_eq!(image_size(5, 3, 24, 4), Some(48));
        assert_eq!(image_size(5, -3, 24, 4), Some(48));
        assert_eq!(image_size(10, 10, 1, 4), Some(40));
        assert_eq!(image_size(10, 10, 16, 4), None);
        assert_eq!(image_size(0, 10, 24, 4), None);
        assert_eq!(image_size(10, 0, 32, 4), None);
    }

    #[test]
    fn test_color_channels() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.raw(), 0x563412);
        assert_eq!(c.red(), 0x12);
        assert_eq!(c.green(), 0x34);
        assert_eq!(c.blue(), 0x56);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!Color::rgb(10, 10, 10).exceeds(10));
        assert!(Color::rgb(0, 11, 0).exceeds(10));
        assert!(!Color::BLACK.exceeds(0));
        assert!(Color::WHITE.exceeds(254));
        // the high byte is not a channel
        assert!(!Color(0xff000000).exceeds(0));
    }

    #[test]
    fn test_bit_depth_from_bits() {
        assert_eq!(BitDepth::from_bits(1).unwrap(), BitDepth::Mono);
        assert_eq!(BitDepth::from_bits(24).unwrap(), BitDepth::Rgb24);
        assert_eq!(BitDepth::from_bits(32).unwrap(), BitDepth::Rgba32);
        assert!(matches!(BitDepth::from_bits(8), Err(DrawError::UnsupportedDepth(8))));
    }

    #[test]
    fn test_layout_offsets() {
        let mono = Layout::new(20, 2, BitDepth::Mono, DEFAULT_ALIGNMENT);
        assert_eq!(mono.stride, 4);
        assert_eq!(mono.offset(9, 1), 5);

        let rgb = Layout::new(5, 2, BitDepth::Rgb24, DEFAULT_ALIGNMENT);
        assert_eq!(rgb.offset(2, 1), 16 + 6);

        let word = Layout::new(5, 2, BitDepth::Rgba32, DEFAULT_ALIGNMENT);
        assert_eq!(word.offset(4, 1), 20 + 16);
    }

    #[test]
    fn test_pen_mono_set_and_clear() {
        let layout = Layout::new(8, 1, BitDepth::Mono, DEFAULT_ALIGNMENT);
        let mut buf = vec![0u8; layout.byte_len()];
        Pen::new(BitDepth::Mono, Color::WHITE, 0).put(&mut buf, &layout, 1, 0);
        assert_eq!(buf[0], 0x40);
        Pen::new(BitDepth::Mono, Color::BLACK, 0).put(&mut buf, &layout, 1, 0);
        assert_eq!(buf[0], 0x00);
    }

    #[test]
    fn test_pen_word_keeps_high_byte() {
        let layout = Layout::new(1, 1, BitDepth::Rgba32, DEFAULT_ALIGNMENT);
        let mut buf = vec![0u8; 4];
        let color = Color(0x80112233);
        Pen::new(BitDepth::Rgba32, color, 0).put(&mut buf, &layout, 0, 0);
        assert_eq!(buf, vec![0x33, 0x22, 0x11, 0x80]);
        assert_eq!(layout.decode(&buf, 0, 0, &[Color::BLACK; 2]), color);
    }

    #[test]
    fn test_decode_mono_uses_palette() {
        let layout = Layout::new(8, 1, BitDepth::Mono, DEFAULT_ALIGNMENT);
        let buf = vec![0x80, 0, 0, 0];
        let palette = [Color(0x111111), Color(0x222222)];
        assert_eq!(layout.decode(&buf, 0, 0, &palette), Color(0x222222));
        assert_eq!(layout.decode(&buf, 1, 0, &palette), Color(0x111111));
    }

    #[test]
    fn test_fill_row_and_replicate() {
        let layout = Layout::new(3, 3, BitDepth::Rgb24, DEFAULT_ALIGNMENT);
        let mut buf = vec![0u8; layout.byte_len()];
        let pen = Pen::new(BitDepth::Rgb24, Color::rgb(1, 2, 3), 0);
        pen.fill_row(&mut buf, &layout, 0);
        replicate_rows(&mut buf, 0, layout.stride, layout.stride, layout.height);
        for y in 0..3 {
            for x in 0..3 {
                assert!(pen.matches(&buf, &layout, x, y));
            }
        }
    }
}
