#![no_std]

//! `minifont-core` provides the shared definitions for the `minifont` crates:
//! the packed command format, the per-glyph descriptor table, and the decoder
//! which turns a glyph's commands back into pixels.
//!
//! Glyphs are always [ROWS] pixels tall. A glyph is stored as a run of
//! one-byte [Command]s which are replayed against a cursor that walks the
//! glyph column by column, top to bottom. Both the encoder and the decoder
//! move this [Cursor] in exactly the same way, which is what lets the decoder
//! get away without any bookkeeping of its own.

extern crate alloc;

use alloc::vec::Vec;

mod bitmap;
mod charmap;
mod codec;
mod command;
mod decode;
mod error;
mod font;

pub use bitmap::Bitmap;
pub use charmap::{compact_index, compact_index_for_char};
pub use codec::{DescriptorTable, commands_from_bytes, commands_to_bytes};
pub use command::{Command, Descriptor};
pub use decode::{Cursor, DecodedGlyph, rasterize, rasterize_bytes};
pub use error::{Error, Result};
pub use font::FontData;

/// Number of pixel rows in every glyph.
pub const ROWS: usize = 5;

/// Largest value either 4-bit command field can hold.
pub const MAX_FIELD: u8 = 15;

/// Number of slots in the descriptor table.
pub const GLYPH_COUNT: usize = 43;

/// Character code of the full-block replacement glyph.
pub const REPLACEMENT_CODE: u32 = 0x7F;

/// Width of the canvas the decoder draws into.
pub const MAX_COLUMNS: usize = 32;

/// A lit pixel in rendered text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

/// Allows rendering text into lit pixels.
///
/// Implementors may define their own mapping for characters the font
/// cannot represent.
pub trait Renderer<Mapping> {
    /// Render the given text string to the set of lit pixels,
    /// using the given mapping.
    fn render_text(text: &str, mapping: Mapping) -> Vec<Point>;
}
