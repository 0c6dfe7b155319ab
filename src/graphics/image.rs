//! Image handle
//!
//! An `Image` owns the header of a device-independent bitmap (dimensions,
//! depth, palette, threshold) together with its pixel storage and an
//! optional pixel callback. Storage is one of:
//!
//! - owned: allocated and zeroed here, freed with the image
//! - borrowed: a caller buffer at least `image_size()` bytes long
//! - detached: nothing yet; drawing goes through the callback or fails
//!
//! Dimensions are fixed at creation. Strides are recomputed from the header
//! on every call through [`Image::layout`].

use std::fmt;

use crate::graphics::draw::DrawError;
use crate::graphics::pixfmt::{image_size, BitDepth, Color, Layout, Pen, DEFAULT_ALIGNMENT};
use crate::graphics::sink::{PixelCallback, Sink};

/// Header fields shared with the BMP writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    /// Width in pixels; drawing uses the absolute value.
    pub width: i32,
    /// Height in pixels; the sign selects the scan direction.
    pub height: i32,
    pub depth: BitDepth,
    /// Bytes of pixel data, rows padded to 4 bytes.
    pub image_size: usize,
}

impl ImageHeader {
    fn new(width: i32, height: i32, bits: u16) -> Result<Self, DrawError> {
        if width == 0 || height == 0 {
            return Err(DrawError::InvalidDimensions { width, height });
        }
        let depth = BitDepth::from_bits(bits)?;
        let image_size = image_size(width, height, bits as u32, DEFAULT_ALIGNMENT)
            .ok_or(DrawError::UnsupportedDepth(bits))?;
        Ok(Self {
            width,
            height,
            depth,
            image_size,
        })
    }

    /// Whether rows are stored top-down (negative height).
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}

enum Storage<'a> {
    Owned(Vec<u8>),
    Borrowed(&'a mut [u8]),
    Detached,
}

/// A drawable device-independent bitmap.
pub struct Image<'a> {
    header: ImageHeader,
    palette: [Color; 2],
    threshold: u8,
    storage: Storage<'a>,
    callback: Option<Box<dyn PixelCallback + 'a>>,
}

impl Image<'static> {
    /// Create an image with zeroed storage owned by the image.
    pub fn new(width: i32, height: i32, bits: u16) -> Result<Self, DrawError> {
        let header = ImageHeader::new(width, height, bits)?;
        let data = allocate(header.image_size)?;
        Ok(Self::from_parts(header, Storage::Owned(data)))
    }
}

impl<'a> Image<'a> {
    /// Create an image drawing into a caller buffer.
    pub fn with_buffer(
        width: i32,
        height: i32,
        bits: u16,
        buffer: &'a mut [u8],
    ) -> Result<Self, DrawError> {
        let header = ImageHeader::new(width, height, bits)?;
        check_buffer(&header, buffer)?;
        Ok(Self::from_parts(header, Storage::Borrowed(buffer)))
    }

    /// Create an image without storage.
    ///
    /// Attach a buffer later with [`Image::attach_buffer`] or draw through a
    /// pixel callback.
    pub fn detached(width: i32, height: i32, bits: u16) -> Result<Self, DrawError> {
        let header = ImageHeader::new(width, height, bits)?;
        Ok(Self::from_parts(header, Storage::Detached))
    }

    fn from_parts(header: ImageHeader, storage: Storage<'a>) -> Self {
        Self {
            header,
            palette: [Color::BLACK, Color::WHITE],
            threshold: 0,
            storage,
            callback: None,
        }
    }

    /// Replace the pixel storage with a caller buffer.
    ///
    /// Any owned storage is released.
    pub fn attach_buffer(&mut self, buffer: &'a mut [u8]) -> Result<(), DrawError> {
        check_buffer(&self.header, buffer)?;
        self.storage = Storage::Borrowed(buffer);
        Ok(())
    }

    /// Drop the pixel storage, leaving the image detached.
    pub fn detach_buffer(&mut self) {
        self.storage = Storage::Detached;
    }

    /// Route every drawn pixel through `callback` instead of the buffer.
    pub fn set_pixel_callback<C>(&mut self, callback: C)
    where
        C: PixelCallback + 'a,
    {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_pixel_callback(&mut self) {
        self.callback = None;
    }

    pub fn has_pixel_callback(&self) -> bool {
        self.callback.is_some()
    }

    // --------------------------------------------------------------------------
    // Palette and threshold
    // --------------------------------------------------------------------------

    /// Set palette entry 0 ("off") or 1 ("on").
    pub fn set_palette_color(&mut self, index: usize, color: Color) -> Result<(), DrawError> {
        let slot = self
            .palette
            .get_mut(index)
            .ok_or(DrawError::PaletteIndex(index))?;
        *slot = color;
        Ok(())
    }

    pub fn palette_color(&self, index: usize) -> Result<Color, DrawError> {
        self.palette
            .get(index)
            .copied()
            .ok_or(DrawError::PaletteIndex(index))
    }

    /// The palette as stored in a bitmap file: two entries at 1-bit, none
    /// otherwise.
    pub fn palette(&self) -> &[Color] {
        match self.header.depth {
            BitDepth::Mono => &self.palette,
            _ => &[],
        }
    }

    pub(crate) fn palette_entries(&self) -> &[Color; 2] {
        &self.palette
    }

    /// Threshold for mapping colors onto a 1-bit image.
    pub fn set_color_threshold(&mut self, threshold: u8) {
        self.threshold = threshold;
    }

    pub fn color_threshold(&self) -> u8 {
        self.threshold
    }

    // --------------------------------------------------------------------------
    // Metrics and storage access
    // --------------------------------------------------------------------------

    pub fn header(&self) -> ImageHeader {
        self.header
    }

    pub fn width(&self) -> i32 {
        self.header.width
    }

    pub fn height(&self) -> i32 {
        self.header.height
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.header.depth
    }

    pub fn image_size(&self) -> usize {
        self.header.image_size
    }

    /// Addressing for the pixel buffer, computed from the header.
    pub fn layout(&self) -> Layout {
        Layout::new(
            self.header.width,
            self.header.height,
            self.header.depth,
            DEFAULT_ALIGNMENT,
        )
    }

    /// Pixel data, exactly `image_size()` bytes, if storage is attached.
    pub fn pixels(&self) -> Option<&[u8]> {
        let size = self.header.image_size;
        match &self.storage {
            Storage::Owned(data) => Some(&data[..size]),
            Storage::Borrowed(data) => Some(&data[..size]),
            Storage::Detached => None,
        }
    }

    pub fn pixels_mut(&mut self) -> Option<&mut [u8]> {
        let size = self.header.image_size;
        match &mut self.storage {
            Storage::Owned(data) => Some(&mut data[..size]),
            Storage::Borrowed(data) => Some(&mut data[..size]),
            Storage::Detached => None,
        }
    }

    /// Whether the storage was allocated by the image.
    pub fn owns_buffer(&self) -> bool {
        matches!(self.storage, Storage::Owned(_))
    }

    /// Storage for primitives that need direct access (get pixel, flood fill).
    pub(crate) fn buffer_mut(&mut self) -> Result<(&mut [u8], Layout), DrawError> {
        let layout = self.layout();
        let data = self.pixels_mut().ok_or(DrawError::NoTarget)?;
        Ok((data, layout))
    }

    /// Resolve the target for one primitive call drawing `color`.
    pub(crate) fn sink(&mut self, color: Color) -> Result<Sink<'_>, DrawError> {
        let layout = self.layout();
        let Image {
            header,
            threshold,
            storage,
            callback,
            ..
        } = self;

        if let Some(callback) = callback {
            return Ok(Sink::Callback {
                callback: callback.as_mut(),
                color,
            });
        }

        let size = header.image_size;
        let data = match storage {
            Storage::Owned(data) => &mut data[..size],
            Storage::Borrowed(data) => &mut data[..size],
            Storage::Detached => return Err(DrawError::NoTarget),
        };
        Ok(Sink::Buffer {
            data,
            layout,
            pen: Pen::new(header.depth, color, *threshold),
        })
    }
}

impl fmt::Debug for Image<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("header", &self.header)
            .field("palette", &self.palette)
            .field("threshold", &self.threshold)
            .field("owns_buffer", &self.owns_buffer())
            .field("has_pixels", &self.pixels().is_some())
            .field("has_callback", &self.has_pixel_callback())
            .finish()
    }
}

fn check_buffer(header: &ImageHeader, buffer: &[u8]) -> Result<(), DrawError> {
    if buffer.len() < header.image_size {
        return Err(DrawError::BufferTooSmall {
            needed: header.image_size,
            actual: buffer.len(),
        });
    }
    Ok(())
}

#[cfg(not(feature = "no-alloc"))]
fn allocate(size: usize) -> Result<Vec<u8>, DrawError> {
    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .map_err(|_| DrawError::AllocationFailed)?;
    data.resize(size, 0);
    Ok(data)
}

#[cfg(feature = "no-alloc")]
fn allocate(_size: usize) -> Result<Vec<u8>, DrawError> {
    Err(DrawError::AllocationDisabled)
}
