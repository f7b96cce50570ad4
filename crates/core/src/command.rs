use crate::{Error, MAX_FIELD, Result};

/// A single drawing instruction.
///
/// Packed into one byte as `width | (height << 4)`. A zero width field marks
/// a skip, in which case the height field holds the number of positions to
/// skip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance the cursor by this many positions without drawing.
    Skip(u8),
    /// Draw a `width` by `height` rectangle at the cursor, then advance the
    /// cursor by `height` positions.
    Fill { width: u8, height: u8 },
}

impl Command {
    /// The width field. Zero for [Command::Skip].
    pub fn width(self) -> u8 {
        match self {
            Command::Skip(_) => 0,
            Command::Fill { width, .. } => width,
        }
    }

    /// The height field, which is also how far the cursor moves.
    pub fn advance(self) -> u8 {
        match self {
            Command::Skip(count) => count,
            Command::Fill { height, .. } => height,
        }
    }

    pub fn to_byte(self) -> u8 {
        (self.width() & 0xF) | ((self.advance() & 0xF) << 4)
    }

    pub fn from_byte(byte: u8) -> Result<Self> {
        let width = byte & 0xF;
        let height = byte >> 4;

        match (width, height) {
            (_, 0) => Err(Error::InvalidCommand(byte)),
            (0, count) => Ok(Command::Skip(count)),
            (width, height) => Ok(Command::Fill { width, height }),
        }
    }

    /// Skip commands covering `count` positions, at most [MAX_FIELD] each.
    pub fn skips(count: usize) -> impl Iterator<Item = Command> {
        let max = MAX_FIELD as usize;
        let full = count / max;
        let rest = count % max;

        core::iter::repeat_n(Command::Skip(MAX_FIELD), full)
            .chain((rest > 0).then_some(Command::Skip(rest as u8)))
    }
}

/// A half-open range of the command stream holding one glyph.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub start: u16,
    pub end: u16,
}

impl Descriptor {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    /// The commands this descriptor refers to, checked against the stream.
    pub fn slice<'a, T>(&self, index: usize, stream: &'a [T]) -> Result<&'a [T]> {
        let (start, end) = (self.start as usize, self.end as usize);

        if start > end || end > stream.len() {
            return Err(Error::DescriptorOutOfBounds {
                index,
                start,
                end,
                len: stream.len(),
            });
        }

        Ok(&stream[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn packs_width_low_and_height_high() {
        assert_eq!(Command::Fill { width: 1, height: 5 }.to_byte(), 0x51);
        assert_eq!(Command::Fill { width: 2, height: 1 }.to_byte(), 0x12);
        assert_eq!(Command::Skip(9).to_byte(), 0x90);
        assert_eq!(Command::Skip(15).to_byte(), 0xF0);
    }

    #[test]
    fn unpacks_bytes() {
        assert_eq!(Command::from_byte(0x55), Ok(Command::Fill { width: 5, height: 5 }));
        assert_eq!(Command::from_byte(0x70), Ok(Command::Skip(7)));
    }

    #[test]
    fn rejects_zero_height() {
        assert_eq!(Command::from_byte(0x00), Err(Error::InvalidCommand(0x00)));
        assert_eq!(Command::from_byte(0x03), Err(Error::InvalidCommand(0x03)));
    }

    #[test]
    fn splits_long_skips() {
        let skips: Vec<_> = Command::skips(37).collect();
        assert_eq!(
            skips,
            [Command::Skip(15), Command::Skip(15), Command::Skip(7)]
        );

        let skips: Vec<_> = Command::skips(30).collect();
        assert_eq!(skips, [Command::Skip(15), Command::Skip(15)]);

        assert_eq!(Command::skips(0).count(), 0);
    }

    #[test]
    fn descriptor_slice_is_bounds_checked() {
        let stream = [1, 2, 3];
        assert_eq!(Descriptor::new(1, 3).slice(0, &stream), Ok(&stream[1..3]));
        assert!(matches!(
            Descriptor::new(2, 4).slice(7, &stream),
            Err(Error::DescriptorOutOfBounds { index: 7, .. })
        ));
        assert!(Descriptor::new(3, 2).slice(0, &stream).is_err());
    }
}
