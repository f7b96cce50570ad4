use core::fmt;

use crate::{MAX_COLUMNS, ROWS};

/// A glyph-sized pixel grid.
///
/// Each row is a bitmask read most significant bit first, so column `x` is
/// bit `31 - x`. Source rows are 8 or 16 bits wide and land in the top
/// bits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitmap {
    rows: [u32; ROWS],
}

impl Bitmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bitmap from 8-bit source rows, where bit `7 - x` is column `x`.
    /// Missing rows are blank, extra rows are ignored.
    pub fn from_rows(rows: &[u8]) -> Self {
        let mut bitmap = Self::new();
        for (dst, &src) in bitmap.rows.iter_mut().zip(rows) {
            *dst = (src as u32) << 24;
        }
        bitmap
    }

    /// Build a bitmap from 16-bit source rows, where bit `15 - x` is column `x`.
    pub fn from_wide_rows(rows: &[u16]) -> Self {
        let mut bitmap = Self::new();
        for (dst, &src) in bitmap.rows.iter_mut().zip(rows) {
            *dst = (src as u32) << 16;
        }
        bitmap
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < MAX_COLUMNS && y < ROWS && self.rows[y] & Self::mask(x) != 0
    }

    /// Light a pixel. Pixels off the canvas are dropped.
    pub fn set(&mut self, x: usize, y: usize) {
        if x < MAX_COLUMNS && y < ROWS {
            self.rows[y] |= Self::mask(x);
        }
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for yf in y..y + height {
            for xf in x..x + width {
                self.set(xf, yf);
            }
        }
    }

    /// A copy with every column at or past `width` cleared.
    pub fn cropped(&self, width: usize) -> Self {
        let keep = match width {
            0 => 0,
            w if w >= MAX_COLUMNS => u32::MAX,
            w => !(u32::MAX >> w),
        };

        let mut out = *self;
        for row in out.rows.iter_mut() {
            *row &= keep;
        }
        out
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    pub fn count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    fn mask(x: usize) -> u32 {
        1 << (MAX_COLUMNS - 1 - x)
    }

    /// Formats the first `width` columns as rows of `#` and `.`.
    pub fn display(&self, width: usize) -> impl fmt::Display + '_ {
        Preview {
            bitmap: self,
            width,
        }
    }
}

struct Preview<'a> {
    bitmap: &'a Bitmap,
    width: usize,
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..ROWS {
            for x in 0..self.width {
                f.write_str(if self.bitmap.get(x, y) { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (0..MAX_COLUMNS)
            .rev()
            .find(|&x| (0..ROWS).any(|y| self.get(x, y)))
            .map_or(0, |x| x + 1);

        write!(f, "{}", self.display(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn source_rows_are_msb_first() {
        let bitmap = Bitmap::from_rows(&[0b1010_0000, 0b0100_0000]);
        assert!(bitmap.get(0, 0));
        assert!(!bitmap.get(1, 0));
        assert!(bitmap.get(2, 0));
        assert!(bitmap.get(1, 1));
        assert!(!bitmap.get(0, 4));
        assert_eq!(bitmap.count(), 3);
    }

    #[test]
    fn wide_rows_reach_past_the_first_byte() {
        let bitmap = Bitmap::from_wide_rows(&[0xFFC0, 0x0002]);
        assert_eq!(bitmap.count(), 11);
        assert!(bitmap.get(9, 0));
        assert!(!bitmap.get(10, 0));
        assert!(bitmap.get(14, 1));
        assert_eq!(Bitmap::from_wide_rows(&[0xA000]), Bitmap::from_rows(&[0xA0]));
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut bitmap = Bitmap::new();
        bitmap.fill_rect(30, 3, 4, 4);
        assert_eq!(bitmap.count(), 4);
        assert!(bitmap.get(31, 4));
        assert!(!bitmap.get(32, 4));
    }

    #[test]
    fn cropped_clears_trailing_columns() {
        let bitmap = Bitmap::from_rows(&[0xFF; 5]);
        assert_eq!(bitmap.cropped(3), Bitmap::from_rows(&[0xE0; 5]));
        assert!(bitmap.cropped(0).is_blank());
        assert_eq!(bitmap.cropped(40), bitmap);
    }

    #[test]
    fn display_draws_hashes() {
        let bitmap = Bitmap::from_rows(&[0b1110_0000, 0b1000_0000]);
        assert_eq!(bitmap.to_string(), "###\n#..\n...\n...\n...\n");
    }
}
