use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use minifont_core::{
    Command, DecodedGlyph, Descriptor, DescriptorTable, Error, GLYPH_COUNT, REPLACEMENT_CODE,
    Result, commands_to_bytes, compact_index, rasterize,
};

use crate::{CompileError, Glyph, RawGlyph, encode, encode_replacement};

/// Collects glyphs, then encodes them all in slot order.
#[derive(Debug, Default)]
pub struct FontBuilder {
    glyphs: BTreeMap<u8, Glyph>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and queue a glyph. A rejected glyph leaves the builder as
    /// it was.
    pub fn add(&mut self, raw: &RawGlyph) -> Result<()> {
        let glyph = Glyph::normalize(raw)?;

        if self.glyphs.contains_key(&glyph.index) {
            return Err(Error::DuplicateGlyph {
                code: glyph.code,
                index: glyph.index,
            });
        }

        self.glyphs.insert(glyph.index, glyph);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Encode every slot in ascending order into one shared stream.
    ///
    /// Slots with no glyph get an empty descriptor at the current end of the
    /// stream. The replacement slot always gets the full block.
    pub fn build(self) -> Result<CompiledFont> {
        let replacement = compact_index(REPLACEMENT_CODE)?;
        let mut commands = Vec::new();
        let mut descriptors = DescriptorTable::new();

        for index in 0..GLYPH_COUNT as u8 {
            let start = commands.len();

            if index == replacement {
                encode_replacement(&mut commands);
            } else if let Some(glyph) = self.glyphs.get(&index) {
                encode(glyph, &mut commands);
            }

            let end = commands.len();
            descriptors.set(
                index as usize,
                Descriptor::new(stream_offset(start)?, stream_offset(end)?),
            )?;
        }

        debug!(
            "compiled {} glyphs into {} commands",
            self.glyphs.len(),
            commands.len()
        );

        Ok(CompiledFont {
            commands,
            descriptors,
        })
    }
}

fn stream_offset(len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| Error::StreamTooLong(len))
}

/// The encoded command stream and its descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFont {
    pub commands: Vec<Command>,
    pub descriptors: DescriptorTable,
}

impl CompiledFont {
    pub fn command_bytes(&self) -> Vec<u8> {
        commands_to_bytes(&self.commands)
    }

    pub fn descriptor_bytes(&self) -> Vec<u8> {
        self.descriptors.to_bytes()
    }

    pub fn glyph_commands(&self, index: usize) -> Result<&[Command]> {
        let descriptor = self
            .descriptors
            .get(index)
            .ok_or(Error::DescriptorOutOfBounds {
                index,
                start: 0,
                end: 0,
                len: self.commands.len(),
            })?;

        descriptor.slice(index, &self.commands)
    }

    pub fn decode(&self, index: usize) -> Result<DecodedGlyph> {
        Ok(rasterize(self.glyph_commands(index)?))
    }

    /// Write `commands.bin` and `descriptors.bin` into `dir`.
    pub fn write_to(&self, dir: &Path) -> std::result::Result<(), CompileError> {
        fs::write(dir.join("commands.bin"), self.command_bytes())?;
        fs::write(dir.join("descriptors.bin"), self.descriptor_bytes())?;
        Ok(())
    }
}

/// A compiled font plus the glyphs that had to be left out of it.
#[derive(Debug)]
pub struct BuildReport {
    pub font: CompiledFont,
    pub rejected: Vec<Error>,
}

/// Compile every glyph that passes normalization.
///
/// Bad glyphs are logged and collected in the report rather than failing
/// the build; only a stream too long to address is fatal.
pub fn compile_glyphs<'a>(glyphs: impl IntoIterator<Item = &'a RawGlyph>) -> Result<BuildReport> {
    let mut builder = FontBuilder::new();
    let mut rejected = Vec::new();

    for raw in glyphs {
        if let Err(err) = builder.add(raw) {
            warn!("skipping glyph: {}", err);
            rejected.push(err);
        }
    }

    Ok(BuildReport {
        font: builder.build()?,
        rejected,
    })
}

/// Parse a BDF source and compile it.
pub fn compile_bdf(input: &str) -> std::result::Result<BuildReport, CompileError> {
    let glyphs = crate::bdf::parse(input)?;
    Ok(compile_glyphs(&glyphs)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: char, width: u8, rows: &[u8]) -> RawGlyph {
        RawGlyph::from_byte_rows(code as u32, width, rows)
    }

    #[test]
    fn descriptors_follow_slot_order() {
        // Added out of order on purpose.
        let glyphs = [
            raw('B', 1, &[0x80; 5]),
            raw('A', 3, &[0xE0, 0x80, 0x80, 0x80, 0x80]),
        ];
        let report = compile_glyphs(&glyphs).unwrap();
        let font = report.font;

        assert!(report.rejected.is_empty());
        assert_eq!(font.descriptors.get(0), Some(Descriptor::new(0, 3)));
        assert_eq!(font.descriptors.get(1), Some(Descriptor::new(3, 4)));
        assert_eq!(font.descriptors.get(2), Some(Descriptor::new(4, 4)));
        assert_eq!(font.descriptors.get(42), Some(Descriptor::new(4, 7)));
        assert_eq!(font.commands.len(), 7);
    }

    #[test]
    fn replacement_is_always_present() {
        let font = FontBuilder::new().build().unwrap();
        assert_eq!(font.command_bytes(), [0x55, 0xF0, 0x50]);

        let block = font.decode(42).unwrap();
        assert_eq!(block.width, 5);
        assert_eq!(block.bitmap.count(), 25);
    }

    #[test]
    fn source_replacement_glyph_is_ignored() {
        let glyphs = [raw('\u{7f}', 2, &[0x40])];
        let font = compile_glyphs(&glyphs).unwrap().font;
        assert_eq!(font.command_bytes(), [0x55, 0xF0, 0x50]);
    }

    #[test]
    fn bad_glyphs_are_reported_not_fatal() {
        let glyphs = [
            raw(':', 1, &[0x80]),
            raw('A', 0, &[0x80]),
            raw('B', 1, &[0x80; 6]),
            raw('C', 1, &[0x80]),
            raw('C', 2, &[0xC0]),
        ];
        let report = compile_glyphs(&glyphs).unwrap();

        assert_eq!(
            report.rejected,
            [
                Error::UnsupportedCharacter { code: 0x3A },
                Error::WidthOutOfRange { code: 0x41, width: 0 },
                Error::MalformedGlyph { code: 0x42, rows: 6 },
                Error::DuplicateGlyph { code: 0x43, index: 2 },
            ]
        );

        let c = report.font.decode(2).unwrap();
        assert_eq!(c.width, 1);
        assert!(report.font.glyph_commands(0).unwrap().is_empty());
    }

    #[test]
    fn writes_both_artifacts() {
        let dir = std::env::temp_dir().join(format!("minifont-write-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let font = FontBuilder::new().build().unwrap();
        font.write_to(&dir).unwrap();

        assert_eq!(fs::read(dir.join("commands.bin")).unwrap(), [0x55, 0xF0, 0x50]);
        assert_eq!(fs::read(dir.join("descriptors.bin")).unwrap().len(), 172);

        fs::remove_dir_all(&dir).unwrap();
    }
}
