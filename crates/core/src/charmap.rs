use crate::{Error, GLYPH_COUNT, Result};

const LETTERS: u8 = 0;
const DIGITS: u8 = LETTERS + 26;
const PUNCTUATION: u8 = DIGITS + 10;
const RESERVED: u8 = PUNCTUATION + 2;

/// Map a character code to its slot in the descriptor table.
///
/// The font only covers uppercase letters, digits, space, `!`, and the
/// five codes from `{` up to DEL. Anything else is rejected.
pub fn compact_index(code: u32) -> Result<u8> {
    let index = match code {
        0x41..=0x5A => code - 0x41 + LETTERS as u32,
        0x30..=0x39 => code - 0x30 + DIGITS as u32,
        0x20..=0x21 => code - 0x20 + PUNCTUATION as u32,
        0x7B.. => code - 0x7B + RESERVED as u32,
        _ => return Err(Error::UnsupportedCharacter { code }),
    };

    if index as usize >= GLYPH_COUNT {
        return Err(Error::UnsupportedCharacter { code });
    }

    Ok(index as u8)
}

pub fn compact_index_for_char(ch: char) -> Result<u8> {
    compact_index(ch as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::REPLACEMENT_CODE;

    #[test]
    fn maps_each_range() {
        assert_eq!(compact_index_for_char('A'), Ok(0));
        assert_eq!(compact_index_for_char('Z'), Ok(25));
        assert_eq!(compact_index_for_char('0'), Ok(26));
        assert_eq!(compact_index_for_char('9'), Ok(35));
        assert_eq!(compact_index_for_char(' '), Ok(36));
        assert_eq!(compact_index_for_char('!'), Ok(37));
        assert_eq!(compact_index_for_char('{'), Ok(38));
        assert_eq!(compact_index(REPLACEMENT_CODE), Ok(42));
    }

    #[test]
    fn rejects_unmapped_codes() {
        for code in [0x3A, 0x22, 0x40, 0x61, 0x7A, 0x1F, 0x80, 0x2588] {
            assert_eq!(
                compact_index(code),
                Err(Error::UnsupportedCharacter { code })
            );
        }
    }

    #[test]
    fn indices_are_dense() {
        let mut seen = [false; GLYPH_COUNT];
        for code in 0..0x100 {
            if let Ok(index) = compact_index(code) {
                assert!(!seen[index as usize]);
                seen[index as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
