use crate::{Bitmap, Command, Result, ROWS};

/// Position within a glyph, walked column by column.
///
/// `y` is the fast axis: advancing past the bottom row wraps back to the top
/// of the next column.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, positions: usize) {
        let flat = self.y + positions;
        self.x += flat / ROWS;
        self.y = flat % ROWS;
    }
}

/// The pixels drawn by one glyph's commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecodedGlyph {
    pub bitmap: Bitmap,
    /// Column the cursor finished on, i.e. one past the last column.
    pub width: usize,
}

/// Draw-and-advance state machine shared by both entry points.
#[derive(Debug, Default)]
struct Rasterizer {
    bitmap: Bitmap,
    cursor: Cursor,
}

impl Rasterizer {
    fn step(&mut self, command: Command) {
        if let Command::Fill { width, height } = command {
            let height = (height as usize).min(ROWS - self.cursor.y);
            self.bitmap
                .fill_rect(self.cursor.x, self.cursor.y, width as usize, height);
        }
        self.cursor.advance(command.advance() as usize);
    }

    fn finish(self) -> DecodedGlyph {
        DecodedGlyph {
            bitmap: self.bitmap,
            width: self.cursor.x,
        }
    }
}

/// Replay a glyph's commands.
///
/// Every command draws (if it is a fill) and then moves the cursor by its
/// height field, nothing more. Columns at or past `width` in the result are
/// left as drawn and should be ignored.
pub fn rasterize(commands: &[Command]) -> DecodedGlyph {
    let mut rasterizer = Rasterizer::default();
    for &command in commands {
        rasterizer.step(command);
    }
    rasterizer.finish()
}

/// Replay a glyph's packed command bytes.
pub fn rasterize_bytes(bytes: &[u8]) -> Result<DecodedGlyph> {
    let mut rasterizer = Rasterizer::default();
    for &byte in bytes {
        rasterizer.step(Command::from_byte(byte)?);
    }
    Ok(rasterizer.finish())
}
