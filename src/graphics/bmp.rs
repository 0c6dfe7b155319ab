//! Windows bitmap (BMP) output
//!
//! Writes an image as an uncompressed device-independent bitmap: a 14 byte
//! file header, a 40 byte `BITMAPINFOHEADER`, the two color palette for
//! 1-bit images, then the pixel rows exactly as they sit in memory. The
//! header height keeps its sign, so positive heights are read back
//! bottom-up by viewers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graphics::image::{Image, ImageHeader};
use crate::graphics::pixfmt::BitDepth;

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
const MAGIC: &[u8; 2] = b"BM";

#[derive(Debug, thiserror::Error)]
pub enum BmpError {
    #[error("Image has no pixel data")]
    NoPixelData,

    #[error("Image too large for a bitmap file: {0} bytes")]
    TooLarge(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Computed layout of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpLayout {
    pub palette_entries: u32,
    pub pixel_offset: u32,
    pub file_size: u32,
}

impl BmpLayout {
    pub fn for_header(header: &ImageHeader) -> Result<Self, BmpError> {
        let palette_entries = match header.depth {
            BitDepth::Mono => 2,
            _ => 0,
        };
        let image_size =
            u32::try_from(header.image_size).map_err(|_| BmpError::TooLarge(header.image_size))?;
        let pixel_offset = FILE_HEADER_LEN + INFO_HEADER_LEN + palette_entries * 4;
        let file_size = pixel_offset
            .checked_add(image_size)
            .ok_or(BmpError::TooLarge(header.image_size))?;
        Ok(Self {
            palette_entries,
            pixel_offset,
            file_size,
        })
    }
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn put_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// File header, info header and palette.
fn encode_headers(image: &Image<'_>) -> Result<Vec<u8>, BmpError> {
    let header = image.header();
    let layout = BmpLayout::for_header(&header)?;
    let mut buf = Vec::with_capacity(layout.pixel_offset as usize);

    // BITMAPFILEHEADER
    buf.extend_from_slice(MAGIC);
    put_u32(&mut buf, layout.file_size);
    put_u16(&mut buf, 0);
    put_u16(&mut buf, 0);
    put_u32(&mut buf, layout.pixel_offset);

    // BITMAPINFOHEADER
    put_u32(&mut buf, INFO_HEADER_LEN);
    put_i32(&mut buf, header.width);
    put_i32(&mut buf, header.height);
    put_u16(&mut buf, 1);
    put_u16(&mut buf, header.depth.bits());
    put_u32(&mut buf, 0);
    put_u32(&mut buf, header.image_size as u32);
    put_i32(&mut buf, 0);
    put_i32(&mut buf, 0);
    put_u32(&mut buf, layout.palette_entries);
    put_u32(&mut buf, layout.palette_entries);

    for color in image.palette() {
        put_u32(&mut buf, color.raw());
    }
    Ok(buf)
}

/// Serialize `image` to `out`.
pub fn write_bmp<W: Write>(image: &Image<'_>, mut out: W) -> Result<(), BmpError> {
    let pixels = image.pixels().ok_or(BmpError::NoPixelData)?;
    let headers = encode_headers(image)?;
    out.write_all(&headers)?;
    out.write_all(pixels)?;
    out.flush()?;
    Ok(())
}

/// Write `image` to a file at `path`, replacing any existing file.
pub fn save_bmp<P: AsRef<Path>>(image: &Image<'_>, path: P) -> Result<(), BmpError> {
    let path = path.as_ref();
    if image.pixels().is_none() {
        return Err(BmpError::NoPixelData);
    }
    let file = File::create(path)?;
    write_bmp(image, BufWriter::new(file))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
