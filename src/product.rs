//! Product Info Area: checksum gate, field cursor, and lazy field access.
//!
//! The area starts with format version, length (8-byte units) and language
//! code, followed by type/length-prefixed fields in [`FieldName::ALL`] order.
//! Field text is only decoded when asked for, so one bad field never hides
//! the others. If the cursor runs off the end of the record, the fields it
//! could not reach fail on access and the ones before it still decode.

use log::{debug, warn};

use crate::checksum::{byte_sum, is_checksum_valid};
use crate::error::DecodeError;
use crate::format::{
    FieldName, FieldSlot, FieldValue, AREA_MULTIPLIER, PRODUCT_FIELDS_START, TYPE_LENGTH_MASK,
};

/// View over a Product Info Area inside a borrowed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfoArea<'a> {
    buf: &'a [u8],
    base_offset: u32,
    declared_length: u32,
    valid: bool,
    cursor: FieldCursor,
}

impl<'a> ProductInfoArea<'a> {
    /// Decode the area at `base_offset`, rejecting it unless its declared
    /// length fits in `buf` and checksums to zero.
    pub fn decode(buf: &'a [u8], base_offset: u32) -> Result<Self, DecodeError> {
        let declared_length = read_declared_length(buf, base_offset)?;
        let area = area_range(buf, base_offset, declared_length)
            .ok_or_else(|| DecodeError::truncated(buf, base_offset, declared_length))?;
        if !is_checksum_valid(area, area.len()) {
            return Err(DecodeError::AreaInvalid {
                offset: base_offset,
                sum: byte_sum(area),
            });
        }

        Ok(ProductInfoArea {
            buf,
            base_offset,
            declared_length,
            valid: true,
            cursor: FieldCursor::walk(buf, base_offset),
        })
    }

    /// Decode the area at `base_offset` without the checksum gate. The result
    /// still records whether the checksum held; only an unreadable length
    /// byte is an error.
    pub fn decode_unchecked(buf: &'a [u8], base_offset: u32) -> Result<Self, DecodeError> {
        let declared_length = read_declared_length(buf, base_offset)?;
        let valid = match area_range(buf, base_offset, declared_length) {
            Some(area) => {
                let ok = is_checksum_valid(area, area.len());
                if !ok {
                    warn!(
                        "product info at {:#x}: checksum sums to {:#04x}, decoding anyway",
                        base_offset,
                        byte_sum(area)
                    );
                }
                ok
            }
            None => {
                warn!(
                    "product info at {:#x}: declared length {} runs past {}-byte buffer, \
                     decoding anyway",
                    base_offset,
                    declared_length,
                    buf.len()
                );
                false
            }
        };

        Ok(ProductInfoArea {
            buf,
            base_offset,
            declared_length,
            valid,
            cursor: FieldCursor::walk(buf, base_offset),
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Absolute offset of the area within the record.
    #[must_use]
    pub fn base_offset(&self) -> u32 {
        self.base_offset
    }

    /// Area length in bytes, as declared by byte 1 of the area.
    #[must_use]
    pub fn declared_length(&self) -> u32 {
        self.declared_length
    }

    /// Byte 0 of the area, uninterpreted.
    #[must_use]
    pub fn format_version(&self) -> u8 {
        self.buf[self.base_offset as usize]
    }

    /// Byte 2 of the area, uninterpreted. `None` if the buffer ends first.
    #[must_use]
    pub fn language_code(&self) -> Option<u8> {
        self.buf.get(self.base_offset as usize + 2).copied()
    }

    /// Where the field cursor placed `name`. `None` when the cursor ran off
    /// the record before reaching the field's type/length byte.
    #[must_use]
    pub fn slot(&self, name: FieldName) -> Option<FieldSlot> {
        self.cursor.slots[name.index()]
    }

    /// Address of the first type/length byte the cursor could not read.
    #[must_use]
    pub fn cursor_overrun(&self) -> Option<u32> {
        self.cursor.overrun
    }

    /// Raw data bytes of `name`.
    pub fn field_bytes(&self, name: FieldName) -> Result<&'a [u8], DecodeError> {
        let slot = self.reachable_slot(name)?;
        let start = slot.address as usize;
        let end = start + usize::from(slot.length);
        self.buf
            .get(start..end)
            .ok_or_else(|| DecodeError::truncated(self.buf, slot.address, u32::from(slot.length)))
    }

    /// Decode `name` as UTF-8 text.
    pub fn get_field(&self, name: FieldName) -> Result<FieldValue, DecodeError> {
        let slot = self.reachable_slot(name)?;
        let bytes = self.field_bytes(name)?;
        let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::FieldDecode {
            name,
            address: slot.address,
            length: slot.length,
        })?;
        Ok(FieldValue {
            name,
            address: slot.address,
            length: slot.length,
            text: text.to_string(),
        })
    }

    /// Every field in cursor order, each decoded independently.
    pub fn fields(
        &self,
    ) -> impl Iterator<Item = (FieldName, Result<FieldValue, DecodeError>)> + '_ {
        FieldName::ALL
            .into_iter()
            .map(move |name| (name, self.get_field(name)))
    }

    /// Unreached fields all report the address where the cursor stopped.
    fn reachable_slot(&self, name: FieldName) -> Result<FieldSlot, DecodeError> {
        self.slot(name).ok_or_else(|| {
            let stopped_at = self.cursor.overrun.unwrap_or(u32::MAX);
            DecodeError::truncated(self.buf, stopped_at, 1)
        })
    }
}

/// Decode and validate the Product Info Area at `base_offset`.
pub fn decode_product_info(
    buf: &[u8],
    base_offset: u32,
) -> Result<ProductInfoArea<'_>, DecodeError> {
    ProductInfoArea::decode(buf, base_offset)
}

/// Decode one field of an already validated area.
pub fn get_field(area: &ProductInfoArea<'_>, name: FieldName) -> Result<FieldValue, DecodeError> {
    area.get_field(name)
}

fn read_declared_length(buf: &[u8], base_offset: u32) -> Result<u32, DecodeError> {
    let length_index = (base_offset as usize).saturating_add(1);
    let units = buf
        .get(length_index)
        .ok_or_else(|| DecodeError::truncated(buf, base_offset, 2))?;
    Ok(u32::from(*units) * AREA_MULTIPLIER)
}

fn area_range(buf: &[u8], base_offset: u32, declared_length: u32) -> Option<&[u8]> {
    let start = base_offset as usize;
    buf.get(start..start.checked_add(declared_length as usize)?)
}

/// Field cursor: each field begins right after the previous field's data.
/// A bad length byte shifts every later field; that is how the format works.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldCursor {
    slots: [Option<FieldSlot>; FieldName::COUNT],
    overrun: Option<u32>,
}

impl FieldCursor {
    fn walk(buf: &[u8], base_offset: u32) -> Self {
        let mut cursor = FieldCursor {
            slots: [None; FieldName::COUNT],
            overrun: None,
        };
        let mut addr = base_offset.saturating_add(PRODUCT_FIELDS_START);

        for name in FieldName::ALL {
            let Some(type_length) = buf.get(addr as usize) else {
                debug!(
                    "{name}: type/length byte at {addr:#x} is past the {}-byte record",
                    buf.len()
                );
                cursor.overrun = Some(addr);
                break;
            };
            let slot = FieldSlot {
                address: addr + 1,
                length: type_length & TYPE_LENGTH_MASK,
            };
            debug!(
                "{name}: type/length {type_length:#04x} at {addr:#x}, data at {:#x} len {}",
                slot.address, slot.length
            );
            cursor.slots[name.index()] = Some(slot);
            addr = slot.end();
        }

        cursor
    }
}
