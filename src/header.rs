//! Common header: the fixed 8-byte block at the start of every FRU record.
//!
//! Byte 0 is the format version, bytes 1..=5 are area offsets in 8-byte
//! units, byte 6 is padding and byte 7 is the zero-sum checksum.

use log::debug;

use crate::checksum::{byte_sum, is_checksum_valid};
use crate::error::DecodeError;
use crate::format::{AreaKind, AREA_MULTIPLIER, COMMON_HEADER_LEN};

/// Parsed common header. Offsets are absolute byte offsets from the start of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonHeader {
    version: u8,
    /// Indexed like [`AreaKind::ALL`]; `None` when the header did not validate.
    offsets: Option<[u32; 5]>,
    valid: bool,
    sum: u8,
}

impl CommonHeader {
    /// Decode the first 8 bytes of `buf`. Never fails: a short buffer or a bad
    /// checksum yields a header with `is_valid() == false` and no offsets.
    #[must_use]
    pub fn from_bytes(buf: &[u8]) -> Self {
        let valid = is_checksum_valid(buf, COMMON_HEADER_LEN);
        let head = &buf[..buf.len().min(COMMON_HEADER_LEN)];
        let offsets = if valid { Some(read_offsets(head)) } else { None };
        let header = CommonHeader {
            version: head.first().copied().unwrap_or(0),
            offsets,
            valid,
            sum: byte_sum(head),
        };
        debug!("common header: valid={} offsets={:?}", header.valid, header.offsets);
        header
    }

    /// Decode the first 8 bytes of `buf`, populating offsets even when the
    /// checksum fails. Only a buffer shorter than the header is an error.
    pub fn from_bytes_unchecked(buf: &[u8]) -> Result<Self, DecodeError> {
        let head = buf
            .get(..COMMON_HEADER_LEN)
            .ok_or_else(|| DecodeError::truncated(buf, 0, COMMON_HEADER_LEN as u32))?;
        Ok(CommonHeader {
            version: head[0],
            offsets: Some(read_offsets(head)),
            valid: is_checksum_valid(head, COMMON_HEADER_LEN),
            sum: byte_sum(head),
        })
    }

    /// Format version byte. Informational; any value is accepted.
    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Wrapping sum of the header bytes; zero for a valid header.
    #[must_use]
    pub fn checksum_sum(&self) -> u8 {
        self.sum
    }

    /// Byte offset of `kind` from the start of the record.
    pub fn area_offset(&self, kind: AreaKind) -> Result<u32, DecodeError> {
        let offsets = self
            .offsets
            .ok_or(DecodeError::HeaderInvalid { sum: self.sum })?;
        Ok(offsets[kind.header_index() - 1])
    }

    /// Byte offset of the Product Info Area.
    pub fn product_info_base_offset(&self) -> Result<u32, DecodeError> {
        self.area_offset(AreaKind::Product)
    }

    /// All five area offsets, in header order. Empty for an invalid header.
    #[must_use]
    pub fn area_offsets(&self) -> Vec<(AreaKind, u32)> {
        match self.offsets {
            Some(offsets) => AreaKind::ALL.into_iter().zip(offsets).collect(),
            None => Vec::new(),
        }
    }
}

fn read_offsets(head: &[u8]) -> [u32; 5] {
    AreaKind::ALL.map(|kind| u32::from(head[kind.header_index()]) * AREA_MULTIPLIER)
}

/// Decode and validate the common header at the start of `buf`.
pub fn decode_common_header(buf: &[u8]) -> Result<CommonHeader, DecodeError> {
    let header = CommonHeader::from_bytes(buf);
    if !header.is_valid() {
        return Err(DecodeError::HeaderInvalid { sum: header.sum });
    }
    Ok(header)
}
