use alloc::vec::Vec;

use crate::{Command, Descriptor, Error, GLYPH_COUNT, Result};

/// Size of one packed descriptor: two big-endian `u16`s.
pub(crate) const DESCRIPTOR_SIZE: usize = 4;

pub fn commands_to_bytes(commands: &[Command]) -> Vec<u8> {
    commands.iter().map(|command| command.to_byte()).collect()
}

pub fn commands_from_bytes(bytes: &[u8]) -> Result<Vec<Command>> {
    bytes.iter().map(|&byte| Command::from_byte(byte)).collect()
}

/// One descriptor per glyph slot, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorTable {
    entries: [Descriptor; GLYPH_COUNT],
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self {
            entries: [Descriptor::default(); GLYPH_COUNT],
        }
    }
}

impl DescriptorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Descriptor> {
        self.entries.get(index).copied()
    }

    /// Store the descriptor for slot `index`, which must be below
    /// [GLYPH_COUNT].
    pub fn set(&mut self, index: usize, descriptor: Descriptor) -> Result<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(Error::DescriptorOutOfBounds {
                index,
                start: descriptor.start as usize,
                end: descriptor.end as usize,
                len,
            })?;

        *entry = descriptor;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.entries.iter()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(GLYPH_COUNT * DESCRIPTOR_SIZE);
        for descriptor in &self.entries {
            out.extend_from_slice(&descriptor.start.to_be_bytes());
            out.extend_from_slice(&descriptor.end.to_be_bytes());
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        check_layout(bytes)?;

        let mut table = Self::new();
        for (entry, record) in table
            .entries
            .iter_mut()
            .zip(bytes.chunks_exact(DESCRIPTOR_SIZE))
        {
            *entry = read_descriptor(record);
        }
        Ok(table)
    }
}

fn check_layout(bytes: &[u8]) -> Result<()> {
    if bytes.len() != GLYPH_COUNT * DESCRIPTOR_SIZE {
        return Err(Error::MalformedBinaryLayout {
            len: bytes.len(),
            record: DESCRIPTOR_SIZE,
        });
    }
    Ok(())
}

pub(crate) fn read_descriptor(record: &[u8]) -> Descriptor {
    Descriptor {
        start: u16::from_be_bytes([record[0], record[1]]),
        end: u16::from_be_bytes([record[2], record[3]]),
    }
}
