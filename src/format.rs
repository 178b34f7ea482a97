//! FRU binary layout constants and the typed names used to address it.
//!
//! Covers the common header and the Product Info Area only. Offsets in the
//! header and the area length are stored in 8-byte units.

use std::fmt;
use std::str::FromStr;

/// Length of the common header in bytes (including its checksum byte).
pub const COMMON_HEADER_LEN: usize = 8;

/// Header offsets and area lengths are multiples of this many bytes.
pub const AREA_MULTIPLIER: u32 = 8;

/// Low 6 bits of a type/length byte hold the field length.
pub const TYPE_LENGTH_MASK: u8 = 0x3F;

/// First type/length byte of the Product Info Area, relative to the area start.
/// Bytes 0..3 are format version, length, and language code.
pub const PRODUCT_FIELDS_START: u32 = 3;

/// Areas whose offsets the common header declares, in header byte order (bytes 1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AreaKind {
    Internal,
    Chassis,
    Board,
    Product,
    MultiRecord,
}

impl AreaKind {
    pub const ALL: [AreaKind; 5] = [
        AreaKind::Internal,
        AreaKind::Chassis,
        AreaKind::Board,
        AreaKind::Product,
        AreaKind::MultiRecord,
    ];

    /// Index of the multiplier byte for this area within the common header.
    #[must_use]
    pub fn header_index(self) -> usize {
        match self {
            AreaKind::Internal => 1,
            AreaKind::Chassis => 2,
            AreaKind::Board => 3,
            AreaKind::Product => 4,
            AreaKind::MultiRecord => 5,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AreaKind::Internal => "internal",
            AreaKind::Chassis => "chassis",
            AreaKind::Board => "board",
            AreaKind::Product => "product",
            AreaKind::MultiRecord => "multirecord",
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Product Info Area fields, in the order the field cursor walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldName {
    Manufacturer,
    Product,
    Model,
    Version,
    Serial,
    Asset,
    FruId,
}

impl FieldName {
    /// Number of fields the cursor decodes.
    pub const COUNT: usize = 7;

    /// Fixed cursor order. Each field starts where the previous one ends.
    pub const ALL: [FieldName; Self::COUNT] = [
        FieldName::Manufacturer,
        FieldName::Product,
        FieldName::Model,
        FieldName::Version,
        FieldName::Serial,
        FieldName::Asset,
        FieldName::FruId,
    ];

    /// Position of this field in [`FieldName::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Manufacturer => "manufacturer",
            FieldName::Product => "product",
            FieldName::Model => "model",
            FieldName::Version => "version",
            FieldName::Serial => "serial",
            FieldName::Asset => "asset",
            FieldName::FruId => "fru_id",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string does not name a Product Info field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field name: {0}")]
pub struct UnknownFieldName(pub String);

impl FromStr for FieldName {
    type Err = UnknownFieldName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase().replace('-', "_");
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == lower)
            .ok_or_else(|| UnknownFieldName(s.to_string()))
    }
}

/// Location of one field's data bytes, produced by the field cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSlot {
    /// Absolute byte offset of the first data byte within the record.
    pub address: u32,
    /// Data length in bytes (0..=63), from the low 6 bits of the type/length byte.
    pub length: u8,
}

impl FieldSlot {
    /// Address one past the last data byte; where the next type/length byte sits.
    #[must_use]
    pub fn end(&self) -> u32 {
        self.address + u32::from(self.length)
    }
}

/// A decoded field: where it lives and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldValue {
    pub name: FieldName,
    pub address: u32,
    pub length: u8,
    pub text: String,
}

impl FieldValue {
    /// Address formatted for display, e.g. `0x0c`.
    #[must_use]
    pub fn address_hex(&self) -> String {
        format!("{:#04x}", self.address)
    }
}
