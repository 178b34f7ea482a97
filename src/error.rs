//! Errors produced while decoding a FRU record.

use thiserror::Error;

use crate::format::FieldName;

/// Every decode failure is scoped: a header or area error aborts one record,
/// a field error aborts one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("header invalid: checksum sums to {sum:#04x}, expected 0x00")]
    HeaderInvalid { sum: u8 },
    #[error("product info checksum fail at offset {offset:#x}: sums to {sum:#04x}")]
    AreaInvalid { offset: u32, sum: u8 },
    #[error("field {name} at {address:#04x} (length {length}) is not valid UTF-8")]
    FieldDecode {
        name: FieldName,
        address: u32,
        length: u8,
    },
    #[error("truncated buffer: {needed} bytes needed at offset {offset:#x}, {available} available")]
    Truncated {
        offset: u32,
        needed: u32,
        available: usize,
    },
}

impl DecodeError {
    pub(crate) fn truncated(buf: &[u8], offset: u32, needed: u32) -> Self {
        DecodeError::Truncated {
            offset,
            needed,
            available: buf.len(),
        }
    }
}
