//! Greedy glyph to command compiler.
//!
//! The glyph is walked with the same [Cursor] the decoder uses. Whenever the
//! walk reaches a lit pixel that no earlier fill has covered, one fill is
//! emitted: a single column running down, or a single row running right,
//! whichever covers more. Every other position becomes part of a skip.
//!
//! A row fill only moves the cursor by one position, so the cells it drew to
//! the right are still ahead of the cursor. They are marked in a `used` mask
//! and skipped when the walk reaches them, which keeps the decoder's cursor
//! in step without it ever needing the mask.

use log::debug;
use minifont_core::{Bitmap, Command, Cursor, MAX_FIELD, ROWS};

use crate::Glyph;

/// Append the commands for `glyph` to `out`.
pub fn encode(glyph: &Glyph, out: &mut Vec<Command>) {
    debug!(
        "encoding {:#x} (slot {}, width {})\n{}",
        glyph.code,
        glyph.index,
        glyph.width,
        glyph.bitmap.display(glyph.width as usize)
    );

    let width = glyph.width as usize;
    let mut used = Bitmap::new();
    let mut cursor = Cursor::new();
    let mut skip = 0;

    while cursor.x < width {
        let Cursor { x, y } = cursor;

        if !glyph.has_pixel(x, y) || used.get(x, y) {
            skip += 1;
            cursor.advance(1);
            continue;
        }

        flush_skip(&mut skip, out);

        let fill_right = fill_right(glyph, &used, x, y);
        let fill_down = fill_down(glyph, &used, x, y);

        // Ties go down: a column fill advances by exactly the cells it used.
        let command = if fill_right > fill_down {
            for x2 in x..x + fill_right {
                used.set(x2, y);
            }
            Command::Fill {
                width: fill_right as u8,
                height: 1,
            }
        } else {
            for y2 in y..y + fill_down {
                used.set(x, y2);
            }
            Command::Fill {
                width: 1,
                height: fill_down as u8,
            }
        };

        debug!("- draw rectangle {:?} at ({}, {})", command, x, y);
        out.push(command);
        cursor.advance(command.advance() as usize);
    }

    flush_skip(&mut skip, out);
}

/// The fixed command sequence for the full-block replacement glyph.
///
/// One fill draws the whole block but only moves the cursor down one
/// column, so two skips carry it over the other four.
pub fn encode_replacement(out: &mut Vec<Command>) {
    let size = ROWS as u8;
    out.push(Command::Fill {
        width: size,
        height: size,
    });
    out.extend(Command::skips(ROWS * (ROWS - 1)));
}

fn flush_skip(skip: &mut usize, out: &mut Vec<Command>) {
    if *skip > 0 {
        debug!("- skip {} positions", skip);
        out.extend(Command::skips(*skip));
        *skip = 0;
    }
}

/// Length of the lit, unused run going right from `(x, y)`.
///
/// The run stops short of any column whose pixel in the row directly above
/// is lit, leaving that column for a later downward fill.
fn fill_right(glyph: &Glyph, used: &Bitmap, x: usize, y: usize) -> usize {
    let max = (glyph.width as usize).min(x + MAX_FIELD as usize);
    let mut run = 1;

    for x2 in x + 1..max {
        if used.get(x2, y) || !glyph.has_pixel(x2, y) {
            break;
        }
        if y > 0 && glyph.has_pixel(x2, y - 1) {
            break;
        }
        run += 1;
    }

    run
}

/// Length of the lit, unused run going down from `(x, y)`.
fn fill_down(glyph: &Glyph, used: &Bitmap, x: usize, y: usize) -> usize {
    let mut run = 1;

    for y2 in y + 1..ROWS {
        if used.get(x, y2) || !glyph.has_pixel(x, y2) {
            break;
        }
        run += 1;
    }

    run
}
