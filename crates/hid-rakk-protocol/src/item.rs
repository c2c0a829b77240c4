//! Minimal HID short-item walker.
//!
//! The fixups in [`crate::rdesc`] intentionally work on raw byte offsets for
//! compatibility with the shipped firmware behavior. This walker exists next
//! to them so tests and embedders can check that a descriptor (original,
//! patched, or replacement) is still structurally sound: every item prefix
//! has the payload bytes it declares and no long items appear.
//!
//! Item encoding per the USB HID specification 1.11, section 6.2.2.2:
//! prefix bits 0..2 are the payload size (0/1/2/4 bytes), bits 2..4 the item
//! type, bits 4..8 the tag. Prefix `0xFE` introduces a long item, which no
//! mouse firmware in this family emits.

#![deny(static_mut_refs)]

use thiserror::Error;

/// Structural faults the walker can report.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RdescError {
    #[error("truncated item at offset {offset}: {needed} data bytes declared, {available} remain")]
    TruncatedItem {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("long item at offset {offset} is not supported")]
    LongItem { offset: usize },
}

/// Short-item type from prefix bits 2..4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Main,
    Global,
    Local,
    /// Type value 3 on a non-long-item prefix. Reserved by the HID spec;
    /// passed through rather than rejected.
    Reserved,
}

/// One decoded short item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortItem {
    /// Byte offset of the prefix within the descriptor.
    pub offset: usize,
    /// The raw prefix byte.
    pub prefix: u8,
    pub item_type: ItemType,
    /// Tag from prefix bits 4..8.
    pub tag: u8,
    /// Payload, zero-extended from the little-endian data bytes.
    pub data: u32,
    /// Declared payload length in bytes (0, 1, 2, or 4).
    pub data_len: usize,
}

const LONG_ITEM_PREFIX: u8 = 0xFE;

const fn payload_len(prefix: u8) -> usize {
    match prefix & 0x03 {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => 4,
    }
}

const fn item_type(prefix: u8) -> ItemType {
    match (prefix >> 2) & 0x03 {
        0 => ItemType::Main,
        1 => ItemType::Global,
        2 => ItemType::Local,
        _ => ItemType::Reserved,
    }
}

/// Iterator over the short items of a report descriptor.
///
/// Yields `Err` once on the first structural fault, then terminates.
pub struct ShortItems<'a> {
    remaining: &'a [u8],
    offset: usize,
}

impl<'a> ShortItems<'a> {
    pub fn new(rdesc: &'a [u8]) -> Self {
        Self {
            remaining: rdesc,
            offset: 0,
        }
    }
}

impl<'a> Iterator for ShortItems<'a> {
    type Item = Result<ShortItem, RdescError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&prefix, rest) = self.remaining.split_first()?;
        let offset = self.offset;

        if prefix == LONG_ITEM_PREFIX {
            self.remaining = &[];
            return Some(Err(RdescError::LongItem { offset }));
        }

        let needed = payload_len(prefix);
        if rest.len() < needed {
            self.remaining = &[];
            return Some(Err(RdescError::TruncatedItem {
                offset,
                needed,
                available: rest.len(),
            }));
        }

        let (payload, tail) = rest.split_at(needed);
        let mut data: u32 = 0;
        for (index, &byte) in payload.iter().enumerate() {
            data |= u32::from(byte) << (8 * index);
        }

        self.remaining = tail;
        self.offset = offset + 1 + needed;
        Some(Ok(ShortItem {
            offset,
            prefix,
            item_type: item_type(prefix),
            tag: prefix >> 4,
            data,
            data_len: needed,
        }))
    }
}

/// Walk a descriptor end to end, surfacing the first structural fault.
pub fn validate(rdesc: &[u8]) -> Result<(), RdescError> {
    for item in ShortItems::new(rdesc) {
        item?;
    }
    Ok(())
}
