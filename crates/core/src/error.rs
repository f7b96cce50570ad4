use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("character code {code:#x} has no glyph slot")]
    UnsupportedCharacter { code: u32 },

    #[error("glyph {code:#x} has {rows} rows, expected at most 5")]
    MalformedGlyph { code: u32, rows: usize },

    #[error("glyph {code:#x} has width {width}, expected 1..=15")]
    WidthOutOfRange { code: u32, width: u8 },

    #[error("glyph {code:#x} is a second definition for slot {index}")]
    DuplicateGlyph { code: u32, index: u8 },

    #[error("descriptor {index} ({start}..{end}) is outside a stream of {len} commands")]
    DescriptorOutOfBounds {
        index: usize,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("{len} bytes is not a valid layout for {record}-byte records")]
    MalformedBinaryLayout { len: usize, record: usize },

    #[error("byte {0:#04x} is not a valid command")]
    InvalidCommand(u8),

    #[error("command stream of {0} entries cannot be addressed by 16-bit descriptors")]
    StreamTooLong(usize),
}
