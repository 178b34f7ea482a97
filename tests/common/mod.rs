//! Shared fixtures: real FRU EEPROM dumps and a builder for synthetic records.

#![allow(dead_code)]

use fru::{byte_sum, FieldName};

/// 3Y Power YM-1151D power supply.
pub const YM1151_DUMP: [u8; 144] = [
    0x01, 0x00, 0x00, 0x00, 0x01, 0x0b, 0x00, 0xf3, 0x01, 0x0a, 0x19, 0xc8, 0x33, 0x59, 0x20, 0x50,
    0x4f, 0x57, 0x45, 0x52, 0xca, 0x55, 0x52, 0x4d, 0x31, 0x41, 0x31, 0x35, 0x31, 0x41, 0x4d, 0xc8,
    0x59, 0x4d, 0x2d, 0x31, 0x31, 0x35, 0x31, 0x44, 0xc4, 0x41, 0x30, 0x33, 0x52, 0xd2, 0x53, 0x41,
    0x30, 0x36, 0x30, 0x50, 0x31, 0x35, 0x32, 0x30, 0x32, 0x35, 0x30, 0x30, 0x30, 0x38, 0x32, 0x31,
    0x03, 0x14, 0x06, 0x1b, 0xc9, 0x50, 0x32, 0x43, 0x33, 0x30, 0x33, 0x41, 0x30, 0x32, 0xc3, 0x41,
    0x30, 0x36, 0xc1, 0x00, 0x00, 0x00, 0x00, 0x55, 0x00, 0x02, 0x18, 0x68, 0x7e, 0x96, 0x00, 0xb4,
    0x00, 0x19, 0x01, 0x28, 0x23, 0x20, 0x67, 0x00, 0x00, 0x00, 0x00, 0x2f, 0x3f, 0x11, 0x1f, 0xb4,
    0x10, 0x00, 0x00, 0x00, 0x00, 0x01, 0x82, 0x0d, 0x67, 0x09, 0x01, 0xb0, 0x04, 0x8c, 0x04, 0xd4,
    0x04, 0x78, 0x00, 0x00, 0x00, 0xd4, 0x30, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// 3Y Power YM-2651Y power supply.
pub const YM2651_DUMP: [u8; 160] = [
    0x01, 0x00, 0x00, 0x00, 0x01, 0x0b, 0x00, 0xf3, 0x01, 0x0a, 0x19, 0xc8, 0x33, 0x59, 0x20, 0x50,
    0x4f, 0x57, 0x45, 0x52, 0xca, 0x53, 0x50, 0x52, 0x49, 0x4e, 0x36, 0x35, 0x31, 0x41, 0x4d, 0xc8,
    0x59, 0x4d, 0x2d, 0x32, 0x36, 0x35, 0x31, 0x59, 0xc4, 0x42, 0x52, 0x20, 0x20, 0xd2, 0x53, 0x41,
    0x31, 0x36, 0x30, 0x4e, 0x30, 0x39, 0x31, 0x35, 0x33, 0x39, 0x30, 0x34, 0x36, 0x35, 0x36, 0x35,
    0x03, 0x0f, 0x0a, 0x15, 0xc9, 0x50, 0x33, 0x43, 0x33, 0x30, 0x30, 0x41, 0x30, 0x34, 0xc3, 0x41,
    0x31, 0x36, 0xc1, 0x00, 0x00, 0x00, 0x00, 0x1d, 0x00, 0x02, 0x18, 0x4c, 0x9a, 0x8a, 0x02, 0x0c,
    0x03, 0x3c, 0x05, 0x28, 0x23, 0x90, 0x33, 0x00, 0x00, 0x00, 0x00, 0x2f, 0x3f, 0x0e, 0x1f, 0x3c,
    0xf3, 0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x0d, 0x0e, 0xe2, 0x01, 0xb0, 0x04, 0x8c, 0x04, 0xd4,
    0x04, 0x78, 0x00, 0xe8, 0x03, 0xa4, 0xce, 0x01, 0x82, 0x0d, 0x59, 0x17, 0x82, 0xf4, 0x01, 0xdb,
    0x01, 0x0d, 0x02, 0x32, 0x00, 0x64, 0x00, 0xa0, 0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// AcBel FSF045 power supply; its asset field is not valid UTF-8.
pub const ACBEL_DUMP: [u8; 144] = [
    0x01, 0x00, 0x00, 0x00, 0x01, 0x0b, 0x00, 0xf3, 0x01, 0x0a, 0x19, 0xc8, 0x41, 0x43, 0x42, 0x45,
    0x4c, 0x50, 0x53, 0x55, 0xca, 0x46, 0x53, 0x46, 0x30, 0x34, 0x35, 0x2d, 0x36, 0x31, 0x31, 0xc8,
    0x46, 0x53, 0x46, 0x30, 0x34, 0x35, 0x20, 0x20, 0xc4, 0x36, 0x31, 0x31, 0x47, 0xd2, 0x46, 0x53,
    0x46, 0x30, 0x34, 0x35, 0x31, 0x39, 0x31, 0x32, 0x30, 0x30, 0x30, 0x35, 0x36, 0x38, 0x20, 0x20,
    0x03, 0x60, 0x7b, 0xba, 0xc9, 0x34, 0x35, 0x2d, 0x36, 0x31, 0x31, 0x47, 0x20, 0x20, 0xc3, 0x30,
    0x31, 0x20, 0xc1, 0x00, 0x00, 0x00, 0x00, 0xf6, 0x00, 0x02, 0x18, 0x66, 0x80, 0x8a, 0x02, 0x8a,
    0x02, 0x28, 0x01, 0x28, 0x23, 0x90, 0x33, 0x00, 0x00, 0x00, 0x00, 0x2f, 0x3f, 0x0c, 0x1f, 0x8a,
    0x28, 0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x0d, 0x0e, 0xe2, 0x01, 0xb0, 0x04, 0x8c, 0x04, 0xd4,
    0x04, 0x78, 0x00, 0xe8, 0x03, 0xa4, 0xce, 0x01, 0x82, 0x0d, 0x45, 0x2b, 0x82, 0xf4, 0x01, 0xdb,
];

/// Value that makes `bytes` plus itself sum to zero mod 256.
pub fn zero_checksum(bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(byte_sum(bytes))
}

/// Recompute the checksum byte (last byte) of `buf[start..start + len]`.
pub fn fix_checksum(buf: &mut [u8], start: usize, len: usize) {
    let last = start + len - 1;
    buf[last] = zero_checksum(&buf[start..last]);
}

/// Builds a record holding a common header at 0 and a Product Info Area at 8.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    fields: [Vec<u8>; FieldName::COUNT],
    language_code: u8,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self {
            fields: [
                b"ACME".to_vec(),
                b"WIDGET".to_vec(),
                b"WX-100".to_vec(),
                b"A01".to_vec(),
                b"SN0001".to_vec(),
                b"ASSET7".to_vec(),
                b"FRU1".to_vec(),
            ],
            language_code: 0x19,
        }
    }
}

impl RecordBuilder {
    pub const PRODUCT_OFFSET: usize = 8;

    pub fn field(mut self, name: FieldName, bytes: &[u8]) -> Self {
        assert!(bytes.len() <= 63, "field too long for a type/length byte");
        self.fields[name.index()] = bytes.to_vec();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut area = vec![0x01, 0x00, self.language_code];
        for bytes in &self.fields {
            area.push(0xC0 | bytes.len() as u8);
            area.extend_from_slice(bytes);
        }
        area.push(0xC1);
        // Room for the checksum, then pad to a multiple of 8.
        let len = (area.len() + 1).div_ceil(8) * 8;
        area.resize(len, 0x00);
        area[1] = (len / 8) as u8;
        area[len - 1] = zero_checksum(&area[..len - 1]);

        let mut header = vec![0x01, 0x00, 0x00, 0x00, (Self::PRODUCT_OFFSET / 8) as u8, 0x00, 0x00];
        header.push(zero_checksum(&header));

        header.extend(area);
        header
    }

    /// Byte offset of the type/length byte preceding `name`.
    pub fn type_length_offset(&self, name: FieldName) -> usize {
        Self::PRODUCT_OFFSET
            + 3
            + self.fields[..name.index()]
                .iter()
                .map(|f| f.len() + 1)
                .sum::<usize>()
    }

    pub fn area_len(&self) -> usize {
        self.build()[Self::PRODUCT_OFFSET + 1] as usize * 8
    }
}
