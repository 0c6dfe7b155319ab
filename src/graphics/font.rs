//! Bitmap fonts
//!
//! Glyph tables are flat byte streams:
//!
//! ```text
//! font bbox   width u8, height u8, xoffset i8, yoffset i8
//! glyph       encoding u8, advance_x i8, advance_y i8,
//!             width u8, height u8, xoffset i8, yoffset i8,
//!             ceil(width * height / 8) bitmap bytes
//! ...         repeated until a zero byte or the end of the table
//! ```
//!
//! Bitmaps are packed one bit per pixel, row-major, most significant bit
//! first, with no padding between rows. The first glyph of a table is the
//! default for every character the table does not define, and may itself
//! use encoding 0.
//!
//! A [`Font`] borrows its table and keeps a 256 entry offset index, so glyph
//! lookup is O(1) and parsing never copies bitmap data.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Bytes in the font bounding box header.
const FONT_HEADER_LEN: usize = 4;

/// Bytes in a glyph record before its bitmap.
const GLYPH_HEADER_LEN: usize = 7;

/// Errors reported while parsing a glyph table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontError {
    #[error("Empty font table")]
    EmptyTable,

    #[error("Font table truncated at byte {offset}")]
    Truncated { offset: usize },
}

// ==============================================================================
// Metrics
// ==============================================================================

/// Bounding box of a font or of a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontBox {
    pub width: u8,
    pub height: u8,
    pub xoffset: i8,
    pub yoffset: i8,
}

impl FontBox {
    fn read(bytes: &[u8]) -> Self {
        Self {
            width: bytes[0],
            height: bytes[1],
            xoffset: bytes[2] as i8,
            yoffset: bytes[3] as i8,
        }
    }

    /// Number of bitmap bytes for a glyph of this size.
    pub fn bitmap_len(&self) -> usize {
        (self.width as usize * self.height as usize + 7) / 8
    }
}

/// One glyph, borrowing its bitmap from the font table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'t> {
    pub encoding: u8,
    /// Pen advance after this glyph, not counting font spacing.
    pub advance_x: i8,
    pub advance_y: i8,
    pub bbox: FontBox,
    bitmap: &'t [u8],
}

impl<'t> Glyph<'t> {
    fn read(table: &'t [u8], offset: usize) -> Self {
        let header = &table[offset..offset + GLYPH_HEADER_LEN];
        let bbox = FontBox::read(&header[3..]);
        let start = offset + GLYPH_HEADER_LEN;
        Self {
            encoding: header[0],
            advance_x: header[1] as i8,
            advance_y: header[2] as i8,
            bbox,
            bitmap: &table[start..start + bbox.bitmap_len()],
        }
    }

    /// Pixel extent from the nominal origin: `(width + xoffset, height + yoffset)`.
    pub fn extent(&self) -> (i32, i32) {
        (
            self.bbox.width as i32 + self.bbox.xoffset as i32,
            self.bbox.height as i32 + self.bbox.yoffset as i32,
        )
    }

    pub fn bitmap(&self) -> &'t [u8] {
        self.bitmap
    }

    /// Whether the bitmap bit at `(col, row)` is set.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        let bit = row * self.bbox.width as usize + col;
        self.bitmap
            .get(bit / 8)
            .map_or(false, |byte| byte & (0x80 >> (bit % 8)) != 0)
    }

    /// Set pixels as `(col, row)` pairs in bitmap order.
    pub fn set_pixels(&self) -> impl Iterator<Item = (usize, usize)> + 't {
        let glyph = *self;
        let (w, h) = (glyph.bbox.width as usize, glyph.bbox.height as usize);
        (0..h)
            .flat_map(move |row| (0..w).map(move |col| (col, row)))
            .filter(move |&(col, row)| glyph.is_set(col, row))
    }
}

// ==============================================================================
// Identity
// ==============================================================================

/// Identity record used to tell fonts apart and order them by size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontIdent {
    /// Short file tag, `DFT<n>` for tables without a supplied identity.
    pub file_id: Cow<'static, str>,
    pub bbx_height: i32,
    pub bbx_yoffset: i32,
    /// Average glyph width in tenths of a pixel, when known.
    pub average_width_tenths: Option<i32>,
}

impl FontIdent {
    fn default_for(number: u8, bbox: &FontBox) -> Self {
        const TAGS: [&str; 10] = [
            "DFT0", "DFT1", "DFT2", "DFT3", "DFT4", "DFT5", "DFT6", "DFT7", "DFT8", "DFT9",
        ];
        let tag = TAGS.get(number as usize).copied().unwrap_or(TAGS[0]);
        Self {
            file_id: Cow::Borrowed(tag),
            bbx_height: bbox.height as i32,
            bbx_yoffset: bbox.yoffset as i32,
            average_width_tenths: None,
        }
    }

    /// Ascent used to rank fonts by size.
    pub fn pixel_size(&self) -> i32 {
        self.bbx_height + self.bbx_yoffset
    }

    /// `"<file id>;<height>;<yoffset>;<average width or ?>"`.
    pub fn id_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FontIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{};", self.file_id, self.bbx_height, self.bbx_yoffset)?;
        match self.average_width_tenths {
            Some(avg) => write!(f, "{}", avg),
            None => f.write_str("?"),
        }
    }
}

/// Order two fonts by pixel size, then by average width.
///
/// An unknown average width sorts before any known one.
pub fn compare_fonts(a: &Font<'_>, b: &Font<'_>) -> Ordering {
    let (a, b) = (a.ident(), b.ident());
    a.pixel_size()
        .cmp(&b.pixel_size())
        .then_with(|| a.average_width_tenths.cmp(&b.average_width_tenths))
}

// ==============================================================================
// Font
// ==============================================================================

/// Rendering options applied on top of a glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOptions {
    /// Extra pixels between glyphs.
    pub spacing: u8,
    /// Flip the line direction relative to the image scan direction.
    pub invert: bool,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            spacing: 1,
            invert: false,
        }
    }
}

/// Fonts bundled with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    /// 5x6 cell, upper case glyphs for both cases.
    Small,
    /// 7x10 cell.
    Medium,
}

impl BuiltinFont {
    pub fn table(self) -> &'static [u8] {
        match self {
            BuiltinFont::Small => FONT_SMALL,
            BuiltinFont::Medium => FONT_MEDIUM,
        }
    }

    fn number(self) -> u8 {
        match self {
            BuiltinFont::Small => 1,
            BuiltinFont::Medium => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinFont::Small => "small",
            BuiltinFont::Medium => "medium",
        }
    }
}

/// A parsed glyph table.
#[derive(Clone)]
pub struct Font<'t> {
    table: &'t [u8],
    bbox: FontBox,
    options: FontOptions,
    ident: FontIdent,
    /// Offset of each character's glyph record in `table`.
    index: [u32; 256],
    glyph_count: usize,
}

impl<'t> Font<'t> {
    /// Parse a glyph table.
    pub fn parse(table: &'t [u8], options: FontOptions) -> Result<Self, FontError> {
        Self::parse_numbered(table, options, 0)
    }

    fn parse_numbered(table: &'t [u8], options: FontOptions, number: u8) -> Result<Self, FontError> {
        if table.len() < FONT_HEADER_LEN {
            return Err(FontError::Truncated { offset: 0 });
        }
        let bbox = FontBox::read(&table[..FONT_HEADER_LEN]);

        let mut index = [u32::MAX; 256];
        let mut first = None;
        let mut glyph_count = 0;
        let mut offset = FONT_HEADER_LEN;

        while offset < table.len() {
            let encoding = table[offset];
            if encoding == 0 && first.is_some() {
                break;
            }
            let header = table
                .get(offset..offset + GLYPH_HEADER_LEN)
                .ok_or(FontError::Truncated { offset })?;
            let end = offset + GLYPH_HEADER_LEN + FontBox::read(&header[3..]).bitmap_len();
            if end > table.len() {
                return Err(FontError::Truncated { offset });
            }
            let at = u32::try_from(offset).map_err(|_| FontError::Truncated { offset })?;

            index[encoding as usize] = at;
            if first.is_none() {
                first = Some(at);
            }
            glyph_count += 1;
            offset = end;
        }

        let first = first.ok_or(FontError::EmptyTable)?;
        for slot in index.iter_mut().filter(|slot| **slot == u32::MAX) {
            *slot = first;
        }

        log::debug!(
            "font parsed: {} glyphs, bbox {}x{}",
            glyph_count,
            bbox.width,
            bbox.height
        );

        Ok(Self {
            table,
            bbox,
            options,
            ident: FontIdent::default_for(number, &bbox),
            index,
            glyph_count,
        })
    }

    /// Replace the generated identity.
    pub fn with_ident(mut self, ident: FontIdent) -> Self {
        self.ident = ident;
        self
    }

    /// Glyph for `ch`, or the default glyph when the table has none.
    pub fn glyph(&self, ch: u8) -> Glyph<'t> {
        Glyph::read(self.table, self.index[ch as usize] as usize)
    }

    /// Whether the table defines `ch` itself.
    pub fn has_glyph(&self, ch: u8) -> bool {
        self.glyph(ch).encoding == ch
    }

    pub fn bbox(&self) -> FontBox {
        self.bbox
    }

    pub fn spacing(&self) -> i32 {
        self.options.spacing as i32
    }

    pub fn is_inverted(&self) -> bool {
        self.options.invert
    }

    pub fn options(&self) -> FontOptions {
        self.options
    }

    pub fn ident(&self) -> &FontIdent {
        &self.ident
    }

    /// Number of glyph records in the table.
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }
}

impl Font<'static> {
    /// Load a bundled font with default options.
    pub fn builtin(font: BuiltinFont) -> Result<Self, FontError> {
        Self::builtin_with(font, FontOptions::default())
    }

    pub fn builtin_with(font: BuiltinFont, options: FontOptions) -> Result<Self, FontError> {
        Self::parse_numbered(font.table(), options, font.number())
    }
}

impl fmt::Debug for Font<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("bbox", &self.bbox)
            .field("options", &self.options)
            .field("ident", &self.ident)
            .field("glyph_count", &self.glyph_count)
            .finish()
    }
}

// ==============================================================================
// Bundled tables
// ==============================================================================

/// 5x6 font.
static FONT_SMALL: &[u8] = &[
    // width, height, xoffset, yoffset
    5, 6, 6, 0,
    // default glyph
    b'.', 1, 0, 1, 6, 0, 0, 0x08,

    // tab
    b'\t', 8, 0, 0, 0, 0, 0,

    // space
    b' ', 3, 0, 0, 0, 0, 0,

    b'!', 1, 0, 1, 6, 0, 0, 0xea,
    b'+', 3, 0, 3, 6, 0, 0, 0x0b, 0xa0, 0x00,
    b'-', 3, 0, 3, 6, 0, 0, 0x03, 0x80, 0x00,
    b'/', 3, 0, 3, 6, 0, 0, 0x25, 0x48, 0x00,
    b'*', 3, 0, 3, 6, 0, 0, 0xab, 0xaa, 0x00,
    b'@', 4, 0, 4, 6, 0, 0, 0x69, 0xbb, 0x87,
    b':', 1, 0, 1, 6, 0, 0, 0x52,
    b'=', 3, 0, 3, 6, 0, 0, 0x1c, 0x70, 0x00,
    b'?', 4, 0, 4, 6, 0, 0, 0x69, 0x24, 0x04,
    b'%', 3, 0, 3, 6, 0, 0, 0x85, 0x28, 0x40,
    b'^', 3, 0, 3, 6, 0, 0, 0x54, 0x00, 0x00,
    b'#', 5, 0, 5, 6, 0, 0, 0x57, 0xd5, 0xf5, 0x00,
    b'$', 5, 0, 5, 6, 0, 0, 0x23, 0xe8, 0xe2, 0xf8,
    b'~', 4, 0, 4, 6, 0, 0, 0x05, 0xa0, 0x00,

    b'0', 3, 0, 3, 6, 0, 0, 0x56, 0xd4, 0x31,
    b'1', 2, 0, 2, 6, 0, 0, 0xd5, 0x42,
    b'2', 4, 0, 4, 6, 0, 0, 0xe1, 0x68, 0xf0,
    b'3', 4, 0, 4, 6, 0, 0, 0xe1, 0x61, 0xe0,
    b'4', 4, 0, 4, 6, 0, 0, 0x89, 0xf1, 0x10,
    b'5', 4, 0, 4, 6, 0, 0, 0xf8, 0xe1, 0xe0,
    b'6', 4, 0, 4, 6, 0, 0, 0x78, 0xe9, 0x60,
    b'7', 4, 0, 4, 6, 0, 0, 0xf1, 0x24, 0x40,
    b'8', 4, 0, 4, 6, 0, 0, 0x69, 0x69, 0x60,
    b'9', 4, 0, 4, 6, 0, 0, 0x69, 0x71, 0x60,

    b'A', 4, 0, 4, 6, 0, 0, 0x69, 0xf9, 0x90,
    b'B', 4, 0, 4, 6, 0, 0, 0xe9, 0xe9, 0xe0,
    b'C', 4, 0, 4, 6, 0, 0, 0x78, 0x88, 0x70,
    b'D', 4, 0, 4, 6, 0, 0, 0xe9, 0x99, 0xe0,
    b'E', 4, 0, 4, 6, 0, 0, 0xf8, 0xe8, 0xf0,
    b'F', 4, 0, 4, 6, 0, 0, 0xf8, 0xe8, 0x80,
    b'G', 4, 0, 4, 6, 0, 0, 0x78, 0xb9, 0x70,
    b'H', 4, 0, 4, 6, 0, 0, 0x99, 0xf9, 0x90,
    b'I', 3, 0, 3, 6, 0, 0, 0xe9, 0x2e, 0x00,
    b'J', 4, 0, 4, 6, 0, 0, 0xf2, 0x2a, 0x40,
    b'K', 4, 0, 4, 6, 0, 0, 0x9a, 0xca, 0x90,
    b'L', 3, 0, 3, 6, 0, 0, 0x92, 0x4e, 0x00,
    b'M', 5, 0, 5, 6, 0, 0, 0x8e, 0xeb, 0x18, 0x80,
    b'N', 4, 0, 4, 6, 0, 0, 0x9d, 0xb9, 0x90,
    b'O', 4, 0, 4, 6, 0, 0, 0x69, 0x99, 0x60,
    b'P', 4, 0, 4, 6, 0, 0, 0xe9, 0xe8, 0x80,
    b'Q', 4, 0, 4, 6, 0, 0, 0x69, 0x9b, 0x70,
    b'R', 4, 0, 4, 6, 0, 0, 0xe9, 0xea, 0x90,
    b'S', 4, 0, 4, 6, 0, 0, 0x78, 0x61, 0xe0,
    b'T', 3, 0, 3, 6, 0, 0, 0xe9, 0x24, 0x00,
    b'U', 4, 0, 4, 6, 0, 0, 0x99, 0x99, 0x60,
    b'V', 4, 0, 4, 6, 0, 0, 0x99, 0x96, 0x60,
    b'W', 5, 0, 5, 6, 0, 0, 0x8c, 0x6b, 0x55, 0x00,
    b'X', 4, 0, 4, 6, 0, 0, 0x99, 0x69, 0x90,
    b'Y', 3, 0, 3, 6, 0, 0, 0xb5, 0x24, 0x00,
    b'Z', 4, 0, 4, 6, 0, 0, 0xf2, 0x48, 0xf0,

    b'a', 4, 0, 4, 6, 0, 0, 0x69, 0xf9, 0x90,
    b'b', 4, 0, 4, 6, 0, 0, 0xe9, 0xe9, 0xe0,
    b'c', 4, 0, 4, 6, 0, 0, 0x78, 0x88, 0x70,
    b'd', 4, 0, 4, 6, 0, 0, 0xe9, 0x99, 0xe0,
    b'e', 4, 0, 4, 6, 0, 0, 0xf8, 0xe8, 0xf0,
    b'f', 4, 0, 4, 6, 0, 0, 0xf8, 0xe8, 0x80,
    b'g', 4, 0, 4, 6, 0, 0, 0x78, 0xb9, 0x70,
    b'h', 4, 0, 4, 6, 0, 0, 0x99, 0xf9, 0x90,
    b'i', 3, 0, 3, 6, 0, 0, 0xe9, 0x2e, 0x00,
    b'j', 4, 0, 4, 6, 0, 0, 0xf2, 0x2a, 0x40,
    b'k', 4, 0, 4, 6, 0, 0, 0x9a, 0xca, 0x90,
    b'l', 3, 0, 3, 6, 0, 0, 0x92, 0x4e, 0x00,
    b'm', 5, 0, 5, 6, 0, 0, 0x8e, 0xeb, 0x18, 0x80,
    b'n', 4, 0, 4, 6, 0, 0, 0x9d, 0xb9, 0x90,
    b'o', 4, 0, 4, 6, 0, 0, 0x69, 0x99, 0x60,
    b'p', 4, 0, 4, 6, 0, 0, 0xe9, 0xe8, 0x80,
    b'q', 4, 0, 4, 6, 0, 0, 0x69, 0x9b, 0x70,
    b'r', 4, 0, 4, 6, 0, 0, 0xe9, 0xea, 0x90,
    b's', 4, 0, 4, 6, 0, 0, 0x78, 0x61, 0xe0,
    b't', 3, 0, 3, 6, 0, 0, 0xe9, 0x24, 0x00,
    b'u', 4, 0, 4, 6, 0, 0, 0x99, 0x99, 0x60,
    b'v', 4, 0, 4, 6, 0, 0, 0x99, 0x96, 0x60,
    b'w', 5, 0, 5, 6, 0, 0, 0x8c, 0x6b, 0x55, 0x00,
    b'x', 4, 0, 4, 6, 0, 0, 0x99, 0x69, 0x90,
    b'y', 3, 0, 3, 6, 0, 0, 0xb5, 0x24, 0x00,
    b'z', 4, 0, 4, 6, 0, 0, 0xf2, 0x48, 0xf0,
    0,
];

/// 7x10 font.
static FONT_MEDIUM: &[u8] = &[
    // width, height, xoffset, yoffset
    7, 10, 10, 0,

    // default glyph
    b'.', 2, 0, 2, 10, 0, 0, 0x00, 0x3c, 0x00,

    // tab
    b'\t', 10, 0, 0, 0, 0, 0,

    // space
    b' ', 2, 0, 0, 0, 0, 0,

    b'!', 1, 0, 1, 10, 0, 0, 0xf6, 0x00,
    b'(', 3, 0, 3, 10, 0, 0, 0x2a, 0x48, 0x88, 0x00,
    b')', 3, 0, 3, 10, 0, 0, 0x88, 0x92, 0xa0, 0x00,
    b',', 2, 0, 2, 10, 0, 0, 0x00, 0x16, 0x00,
    b'-', 3, 0, 3, 10, 0, 0, 0x00, 0x70, 0x00, 0x00,
    b'/', 3, 0, 3, 10, 0, 0, 0x25, 0x25, 0x20, 0x00,
    b'@', 6, 0, 6, 10, 0, 0, 0x7a, 0x19, 0x6b, 0x9a, 0x07, 0x80, 0x00, 0x00,
    b'$', 5, 0, 5, 10, 0, 0, 0x23, 0xab, 0x47, 0x16, 0xae, 0x20, 0x00,
    b'#', 6, 0, 6, 10, 0, 0, 0x49, 0x2f, 0xd2, 0xfd, 0x24, 0x80, 0x00, 0x00,
    b'%', 7, 0, 7, 10, 0, 0, 0x43, 0x49, 0x20, 0x82, 0x49, 0x61, 0x00, 0x00, 0x00,
    b':', 2, 0, 2, 10, 0, 0, 0x3c, 0xf0, 0x00,
    b'^', 3, 0, 3, 10, 0, 0, 0x54, 0x00, 0x00, 0x00,
    b'~', 5, 0, 5, 10, 0, 0, 0x00, 0x11, 0x51, 0x00, 0x00, 0x00, 0x00,

    b'0', 5, 0, 5, 10, 0, 0, 0x74, 0x73, 0x59, 0xc5, 0xc0, 0x00, 0x00,
    b'1', 3, 0, 3, 10, 0, 0, 0xc9, 0x24, 0xb8, 0x00,
    b'2', 5, 0, 5, 10, 0, 0, 0x74, 0x42, 0xe8, 0x43, 0xe0, 0x00, 0x00,
    b'3', 5, 0, 5, 10, 0, 0, 0x74, 0x42, 0xe0, 0xc5, 0xc0, 0x00, 0x00,
    b'4', 5, 0, 5, 10, 0, 0, 0x11, 0x95, 0x2f, 0x88, 0x40, 0x00, 0x00,
    b'5', 5, 0, 5, 10, 0, 0, 0xfc, 0x3c, 0x10, 0xc5, 0xc0, 0x00, 0x00,
    b'6', 5, 0, 5, 10, 0, 0, 0x74, 0x61, 0xe8, 0xc5, 0xc0, 0x00, 0x00,
    b'7', 5, 0, 5, 10, 0, 0, 0xfc, 0x44, 0x42, 0x10, 0x80, 0x00, 0x00,
    b'8', 5, 0, 5, 10, 0, 0, 0x74, 0x62, 0xe8, 0xc5, 0xc0, 0x00, 0x00,
    b'9', 5, 0, 5, 10, 0, 0, 0x74, 0x62, 0xf0, 0xc5, 0xc0, 0x00, 0x00,

    b'A', 6, 0, 6, 10, 0, 0, 0x31, 0x28, 0x7f, 0x86, 0x18, 0x40, 0x00, 0x00,
    b'B', 6, 0, 6, 10, 0, 0, 0xfa, 0x18, 0x7e, 0x86, 0x1f, 0x80, 0x00, 0x00,
    b'C', 6, 0, 6, 10, 0, 0, 0x7a, 0x18, 0x20, 0x82, 0x17, 0x80, 0x00, 0x00,
    b'D', 6, 0, 6, 10, 0, 0, 0xfa, 0x18, 0x61, 0x86, 0x1f, 0x80, 0x00, 0x00,
    b'E', 6, 0, 6, 10, 0, 0, 0xfe, 0x08, 0x3c, 0x82, 0x0f, 0xc0, 0x00, 0x00,
    b'F', 6, 0, 6, 10, 0, 0, 0xfe, 0x08, 0x3c, 0x82, 0x08, 0x00, 0x00, 0x00,
    b'G', 6, 0, 6, 10, 0, 0, 0x7a, 0x18, 0x27, 0x86, 0x17, 0xc0, 0x00, 0x00,
    b'H', 6, 0, 6, 10, 0, 0, 0x86, 0x18, 0x7f, 0x86, 0x18, 0x40, 0x00, 0x00,
    b'I', 3, 0, 3, 10, 0, 0, 0xe9, 0x24, 0xb8, 0x00,
    b'J', 6, 0, 6, 10, 0, 0, 0xfc, 0x41, 0x04, 0x12, 0x46, 0x00, 0x00, 0x00,
    b'K', 5, 0, 5, 10, 0, 0, 0x8c, 0xa9, 0x8a, 0x4a, 0x20, 0x00, 0x00,
    b'L', 4, 0, 4, 10, 0, 0, 0x88, 0x88, 0x88, 0xf0, 0x00,
    b'M', 6, 0, 6, 10, 0, 0, 0x87, 0x3b, 0x61, 0x86, 0x18, 0x40, 0x00, 0x00,
    b'N', 5, 0, 5, 10, 0, 0, 0x8e, 0x6b, 0x38, 0xc6, 0x20, 0x00, 0x00,
    b'O', 6, 0, 6, 10, 0, 0, 0x7a, 0x18, 0x61, 0x86, 0x17, 0x80, 0x00, 0x00,
    b'P', 5, 0, 5, 10, 0, 0, 0xf4, 0x63, 0xe8, 0x42, 0x00, 0x00, 0x00,
    b'Q', 6, 0, 6, 10, 0, 0, 0x7a, 0x18, 0x61, 0x86, 0x57, 0x81, 0x00, 0x00,
    b'R', 5, 0, 5, 10, 0, 0, 0xf4, 0x63, 0xe8, 0xc6, 0x20, 0x00, 0x00,
    b'S', 6, 0, 6, 10, 0, 0, 0x7a, 0x18, 0x1e, 0x06, 0x17, 0x80, 0x00, 0x00,
    b'T', 3, 0, 3, 10, 0, 0, 0xe9, 0x24, 0x90, 0x00,
    b'U', 6, 0, 6, 10, 0, 0, 0x86, 0x18, 0x61, 0x86, 0x17, 0x80, 0x00, 0x00,
    b'V', 6, 0, 6, 10, 0, 0, 0x86, 0x18, 0x61, 0x85, 0x23, 0x00, 0x00, 0x00,
    b'W', 7, 0, 7, 10, 0, 0, 0x83, 0x06, 0x4c, 0x99, 0x35, 0x51, 0x00, 0x00, 0x00,
    b'X', 5, 0, 5, 10, 0, 0, 0x8c, 0x54, 0x45, 0x46, 0x20, 0x00, 0x00,
    b'Y', 5, 0, 5, 10, 0, 0, 0x8c, 0x54, 0x42, 0x10, 0x80, 0x00, 0x00,
    b'Z', 6, 0, 6, 10, 0, 0, 0xfc, 0x10, 0x84, 0x21, 0x0f, 0xc0, 0x00, 0x00,

    b'a', 4, 0, 4, 10, 0, 0, 0x00, 0x61, 0x79, 0x70, 0x00,
    b'b', 4, 0, 4, 10, 0, 0, 0x88, 0xe9, 0x99, 0xe0, 0x00,
    b'c', 4, 0, 4, 10, 0, 0, 0x00, 0x78, 0x88, 0x70, 0x00,
    b'd', 4, 0, 4, 10, 0, 0, 0x11, 0x79, 0x99, 0x70, 0x00,
    b'e', 4, 0, 4, 10, 0, 0, 0x00, 0x69, 0xf8, 0x60, 0x00,
    b'f', 4, 0, 4, 10, 0, 0, 0x25, 0x4e, 0x44, 0x40, 0x00,
    b'g', 4, 0, 4, 10, 0, 0, 0x00, 0x79, 0x99, 0x71, 0x60,
    b'h', 4, 0, 4, 10, 0, 0, 0x88, 0xe9, 0x99, 0x90, 0x00,
    b'i', 1, 0, 1, 10, 0, 0, 0xbe, 0x00,
    b'j', 2, 0, 2, 10, 0, 0, 0x04, 0x55, 0x80,
    b'k', 4, 0, 4, 10, 0, 0, 0x89, 0xac, 0xca, 0x90, 0x00,
    b'l', 3, 0, 3, 10, 0, 0, 0xc9, 0x24, 0x98, 0x00,
    b'm', 5, 0, 5, 10, 0, 0, 0x00, 0x15, 0x5a, 0xd6, 0x20, 0x00, 0x00,
    b'n', 4, 0, 4, 10, 0, 0, 0x00, 0xe9, 0x99, 0x90, 0x00,
    b'o', 4, 0, 4, 10, 0, 0, 0x00, 0x69, 0x99, 0x60, 0x00,
    b'p', 4, 0, 4, 10, 0, 0, 0x00, 0xe9, 0x99, 0xe8, 0x80,
    b'q', 4, 0, 4, 10, 0, 0, 0x00, 0x79, 0x97, 0x11, 0x10,
    b'r', 3, 0, 3, 10, 0, 0, 0x02, 0xe9, 0x20, 0x00,
    b's', 4, 0, 4, 10, 0, 0, 0x00, 0x78, 0x61, 0xe0, 0x00,
    b't', 3, 0, 3, 10, 0, 0, 0x4b, 0xa4, 0x88, 0x00,
    b'u', 4, 0, 4, 10, 0, 0, 0x00, 0x99, 0x99, 0x70, 0x00,
    b'v', 4, 0, 4, 10, 0, 0, 0x00, 0x99, 0x99, 0x60, 0x00,
    b'w', 5, 0, 5, 10, 0, 0, 0x00, 0x23, 0x1a, 0xd5, 0x40, 0x00, 0x00,
    b'x', 5, 0, 5, 10, 0, 0, 0x00, 0x22, 0xa2, 0x2a, 0x20, 0x00, 0x00,
    b'y', 4, 0, 4, 10, 0, 0, 0x00, 0x99, 0x99, 0x71, 0x60,
    b'z', 4, 0, 4, 10, 0, 0, 0x00, 0xf1, 0x24, 0xf0, 0x00,

    0,
];
