use minifont_core::{Bitmap, Error, MAX_FIELD, ROWS, Result, compact_index};

/// A glyph as it comes out of the font source, before any checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGlyph {
    pub code: u32,
    pub width: u8,
    /// Top to bottom, bit `15 - x` is column `x`.
    pub rows: Vec<u16>,
}

impl RawGlyph {
    /// A glyph given as one byte per row, bit `7 - x` being column `x`.
    pub fn from_byte_rows(code: u32, width: u8, rows: &[u8]) -> Self {
        Self {
            code,
            width,
            rows: rows.iter().map(|&row| (row as u16) << 8).collect(),
        }
    }
}

/// A glyph that is ready to encode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub code: u32,
    pub index: u8,
    pub width: u8,
    pub bitmap: Bitmap,
}

impl Glyph {
    /// Check a raw glyph against the font's limits and pad it out to the
    /// full row count.
    pub fn normalize(raw: &RawGlyph) -> Result<Self> {
        let index = compact_index(raw.code)?;

        if raw.rows.len() > ROWS {
            return Err(Error::MalformedGlyph {
                code: raw.code,
                rows: raw.rows.len(),
            });
        }

        if raw.width == 0 || raw.width > MAX_FIELD {
            return Err(Error::WidthOutOfRange {
                code: raw.code,
                width: raw.width,
            });
        }

        Ok(Self {
            code: raw.code,
            index,
            width: raw.width,
            bitmap: Bitmap::from_wide_rows(&raw.rows).cropped(raw.width as usize),
        })
    }

    pub fn has_pixel(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && self.bitmap.get(x, y)
    }
}
