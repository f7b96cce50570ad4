use crate::codec::{DESCRIPTOR_SIZE, read_descriptor};
use crate::{
    DecodedGlyph, Descriptor, Error, GLYPH_COUNT, REPLACEMENT_CODE, Result, compact_index,
    rasterize_bytes,
};

/// A compiled font, read in place from its descriptor and command bytes.
///
/// Nothing is validated up front; every lookup checks the bytes it touches.
#[derive(Debug, Copy, Clone)]
pub struct FontData<'a> {
    descriptors: &'a [u8],
    commands: &'a [u8],
}

impl<'a> FontData<'a> {
    pub const fn new(descriptors: &'a [u8], commands: &'a [u8]) -> Self {
        Self {
            descriptors,
            commands,
        }
    }

    pub fn descriptor(&self, index: usize) -> Result<Descriptor> {
        if index >= GLYPH_COUNT {
            return Err(Error::DescriptorOutOfBounds {
                index,
                start: 0,
                end: 0,
                len: self.commands.len(),
            });
        }

        let offset = index * DESCRIPTOR_SIZE;
        self.descriptors
            .get(offset..offset + DESCRIPTOR_SIZE)
            .map(read_descriptor)
            .ok_or(Error::MalformedBinaryLayout {
                len: self.descriptors.len(),
                record: DESCRIPTOR_SIZE,
            })
    }

    pub fn commands_for_index(&self, index: usize) -> Result<&'a [u8]> {
        self.descriptor(index)?.slice(index, self.commands)
    }

    pub fn commands_for_char(&self, code: u32) -> Result<&'a [u8]> {
        self.commands_for_index(compact_index(code)? as usize)
    }

    /// Like [FontData::commands_for_char], but characters outside the font
    /// get the replacement glyph.
    pub fn commands_for_char_or_replacement(&self, code: u32) -> Result<&'a [u8]> {
        match self.commands_for_char(code) {
            Err(Error::UnsupportedCharacter { .. }) => self.commands_for_char(REPLACEMENT_CODE),
            other => other,
        }
    }

    pub fn rasterize_index(&self, index: usize) -> Result<DecodedGlyph> {
        rasterize_bytes(self.commands_for_index(index)?)
    }

    pub fn rasterize_char(&self, code: u32) -> Result<DecodedGlyph> {
        rasterize_bytes(self.commands_for_char(code)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bitmap, DescriptorTable};
    use alloc::vec;

    fn sample() -> (alloc::vec::Vec<u8>, [u8; 6]) {
        let mut table = DescriptorTable::new();
        // 'A' is a tall bar with a hat, DEL is the full block.
        table.set(0, Descriptor::new(0, 3)).unwrap();
        table.set(42, Descriptor::new(3, 6)).unwrap();
        (table.to_bytes(), [0x51, 0x12, 0x90, 0x55, 0xF0, 0x50])
    }

    #[test]
    fn looks_up_by_character() {
        let (descriptors, commands) = sample();
        let font = FontData::new(&descriptors, &commands);

        assert_eq!(font.commands_for_char('A' as u32), Ok(&commands[0..3]));

        let glyph = font.rasterize_char('A' as u32).unwrap();
        assert_eq!(glyph.width, 3);
        assert!(glyph.bitmap.get(2, 0));
    }

    #[test]
    fn unsupported_characters_fall_back_to_block() {
        let (descriptors, commands) = sample();
        let font = FontData::new(&descriptors, &commands);

        assert_eq!(
            font.commands_for_char(':' as u32),
            Err(Error::UnsupportedCharacter { code: 0x3A })
        );
        assert_eq!(
            font.commands_for_char_or_replacement(':' as u32),
            Ok(&commands[3..6])
        );

        let block = rasterize_bytes(&commands[3..6]).unwrap();
        assert_eq!(block.bitmap, Bitmap::from_rows(&[0xF8; 5]));
    }

    #[test]
    fn missing_glyphs_are_empty() {
        let (descriptors, commands) = sample();
        let font = FontData::new(&descriptors, &commands);
        assert_eq!(font.commands_for_char('B' as u32), Ok(&[][..]));
    }

    #[test]
    fn rejects_descriptors_past_the_stream() {
        let (descriptors, commands) = sample();
        let font = FontData::new(&descriptors, &commands[..4]);

        assert!(matches!(
            font.commands_for_index(42),
            Err(Error::DescriptorOutOfBounds { index: 42, end: 6, len: 4, .. })
        ));
        assert!(matches!(
            font.commands_for_index(43),
            Err(Error::DescriptorOutOfBounds { index: 43, .. })
        ));
    }

    #[test]
    fn rejects_truncated_descriptor_table() {
        let descriptors = vec![0; 10];
        let font = FontData::new(&descriptors, &[]);

        assert_eq!(font.commands_for_index(1), Ok(&[][..]));
        assert!(matches!(
            font.commands_for_index(2),
            Err(Error::MalformedBinaryLayout { len: 10, .. })
        ));
    }
}
