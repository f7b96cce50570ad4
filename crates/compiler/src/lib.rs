//! `minifont-compiler` turns 5-row bitmap glyphs into the packed command
//! stream and descriptor table read by `minifont-core`.
//!
//! The usual entry point is [compile_bdf], which reads a BDF font, encodes
//! every glyph it can, and reports the ones it had to skip:
//!
//! ```
//! let source = "ENCODING 73\nDWIDTH 1\nBITMAP\n80\n80\n80\n80\n80\nENDCHAR\n";
//! let report = minifont_compiler::compile_bdf(source).unwrap();
//!
//! let glyph = report.font.decode(8).unwrap();
//! assert_eq!(glyph.width, 1);
//! assert_eq!(&report.font.command_bytes()[..1], &[0x51]);
//! ```

pub mod bdf;
mod builder;
mod encoder;
mod error;
mod glyph;

pub use builder::{BuildReport, CompiledFont, FontBuilder, compile_bdf, compile_glyphs};
pub use encoder::{encode, encode_replacement};
pub use error::CompileError;
pub use glyph::{Glyph, RawGlyph};
