//! Reader for the small subset of BDF the font source uses.
//!
//! Only `ENCODING`, `DWIDTH`, `BBX`, `BITMAP` and `ENDCHAR` matter. Each
//! bitmap line is one or two bytes of hex, first column in the top bit. It
//! is shifted right by the `BBX` x offset and then left-aligned into a
//! 16-bit row.

use crate::{CompileError, RawGlyph};

#[derive(Debug, Default)]
struct PendingGlyph {
    code: Option<u32>,
    width: Option<u8>,
    shift: u32,
    rows: Option<Vec<u16>>,
}

fn parse_field<T: std::str::FromStr>(
    parts: &[&str],
    idx: usize,
    what: &str,
    line: usize,
) -> Result<T, CompileError> {
    parts
        .get(idx)
        .ok_or_else(|| CompileError::syntax(line, format!("missing {}", what)))?
        .parse()
        .map_err(|_| CompileError::syntax(line, format!("invalid {}", what)))
}

fn is_hex(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_row(word: &str, shift: u32, line: usize) -> Result<u16, CompileError> {
    if !is_hex(word) {
        return Err(CompileError::syntax(
            line,
            format!("invalid bitmap row {:?}", word),
        ));
    }
    if word.len() > 4 {
        return Err(CompileError::syntax(
            line,
            format!("bitmap row {:?} is wider than 16 columns", word),
        ));
    }

    let value = u32::from_str_radix(word, 16)
        .map_err(|_| CompileError::syntax(line, format!("invalid bitmap row {:?}", word)))?;
    let bits = word.len() as u32 * 4;

    Ok((value.checked_shr(shift).unwrap_or(0) << (16 - bits)) as u16)
}

pub fn parse(input: &str) -> Result<Vec<RawGlyph>, CompileError> {
    let mut glyphs = Vec::new();
    let mut current = PendingGlyph::default();

    for (lineno, line) in input.lines().enumerate() {
        let line_no = lineno + 1;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "ENCODING" => {
                current.code = Some(parse_field(&parts, 1, "ENCODING value", line_no)?);
            }

            "DWIDTH" => {
                current.width = Some(parse_field(&parts, 1, "DWIDTH value", line_no)?);
            }

            "BBX" => {
                let offset: i32 = parse_field(&parts, 3, "BBX x offset", line_no)?;
                current.shift = u32::try_from(offset)
                    .map_err(|_| CompileError::syntax(line_no, "negative BBX x offset"))?;
            }

            "BITMAP" => {
                current.rows = Some(Vec::new());
            }

            "ENDCHAR" => {
                let pending = std::mem::take(&mut current);

                let code = pending
                    .code
                    .ok_or_else(|| CompileError::syntax(line_no, "ENDCHAR without ENCODING"))?;
                let width = pending
                    .width
                    .ok_or_else(|| CompileError::syntax(line_no, "ENDCHAR without DWIDTH"))?;
                let rows = pending
                    .rows
                    .ok_or_else(|| CompileError::syntax(line_no, "ENDCHAR without BITMAP"))?;

                glyphs.push(RawGlyph { code, width, rows });
            }

            word => match current.rows.as_mut() {
                Some(rows) => rows.push(parse_row(word, current.shift, line_no)?),
                None if parts.len() == 1 && is_hex(word) => {
                    return Err(CompileError::syntax(
                        line_no,
                        format!("bitmap row {:?} outside BITMAP", word),
                    ));
                }
                None => {}
            },
        }
    }

    if current.rows.is_some() {
        return Err(CompileError::syntax(
            input.lines().count(),
            "unterminated BITMAP",
        ));
    }

    Ok(glyphs)
}
