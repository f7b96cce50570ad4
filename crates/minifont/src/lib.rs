#![no_std]

//! `minifont` is a tiny 5-pixel-tall bitmap font for displays on
//! storage-constrained microcontrollers.
//!
//! The font covers uppercase letters, digits, space and `!`, plus a
//! full-block replacement glyph. Glyphs are compiled at build time into a
//! stream of one-byte drawing commands (see [minifont_core]) and decoded on
//! demand, so the whole font costs a few hundred bytes of flash.
//!
//! ```
//! use minifont::{Fallback, MinifontRenderer, Renderer};
//!
//! let pixels = MinifontRenderer::render_text("HI!", Fallback::Replace);
//! assert!(!pixels.is_empty());
//! ```

extern crate alloc;

use alloc::vec::Vec;
pub use minifont_core::{Bitmap, DecodedGlyph, Error, FontData, Point, ROWS, Renderer};

static DESCRIPTORS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/descriptors.bin"));
static COMMANDS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/commands.bin"));

/// Blank columns between glyphs in rendered text.
const LETTER_SPACING: i16 = 1;

/// The font compiled into this crate.
pub fn font() -> FontData<'static> {
    FontData::new(DESCRIPTORS, COMMANDS)
}

/// Decode a single character.
pub fn render_char(ch: char) -> Result<DecodedGlyph, Error> {
    font().rasterize_char(ch as u32)
}

/// What to draw for characters the font does not cover.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Fallback {
    /// Draw the full-block replacement glyph.
    #[default]
    Replace,
    /// Leave the character out entirely.
    Skip,
}

/// A [Renderer] which draws text using the built-in font.
pub struct MinifontRenderer;

impl Renderer<Fallback> for MinifontRenderer {
    fn render_text(text: &str, fallback: Fallback) -> Vec<Point> {
        let font = font();
        let mut result = Vec::new();
        let mut x_idx = 0;

        for character in text.chars() {
            let commands = match fallback {
                Fallback::Replace => font.commands_for_char_or_replacement(character as u32),
                Fallback::Skip => font.commands_for_char(character as u32),
            };

            let Ok(glyph) = commands.and_then(minifont_core::rasterize_bytes) else {
                continue;
            };

            for y in 0..ROWS {
                for x in 0..glyph.width {
                    if glyph.bitmap.get(x, y) {
                        result.push(Point {
                            x: x as i16 + x_idx,
                            y: y as i16,
                        });
                    }
                }
            }
            x_idx += glyph.width as i16 + LETTER_SPACING;
        }

        result
    }
}
