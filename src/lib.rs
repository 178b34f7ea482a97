//! IPMI FRU decoder: common header and Product Info Area from raw EEPROM images.
//!
//! This crate provides:
//! - **Format types** (`format`): layout constants, `AreaKind`, `FieldName`, `FieldSlot`,
//!   `FieldValue`.
//! - **Checksum** (`checksum`): the zero-sum check shared by the header and every area.
//! - **Header** (`header`): `decode_common_header(bytes)` and per-area offsets.
//! - **Product info** (`product`): `decode_product_info(bytes, offset)` and
//!   `get_field(area, name)`.
//! - **Parse** (`parse`): `parse(bytes, &ParseOptions)` composing the above.
//! - **Sources** (`source`): block-chunked reads from files or any `Read + Seek`.
//! - **Report** (`report`): table / JSON rendering that skips undecodable fields.
//! - **Dump tool** (binary `fru-dump`, feature `serde`): decode an image file from the
//!   command line.
//!
//! Decoding borrows the input buffer and never mutates it; every view is
//! independent, so separate records can be decoded from separate threads.

pub mod checksum;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod format;
pub mod header;
pub mod parse;
pub mod product;
pub mod report;
pub mod source;

pub use checksum::{byte_sum, is_checksum_valid};
#[cfg(feature = "serde")]
pub use config::{ConfigError, DumpConfig, OutputFormat};
pub use error::DecodeError;
pub use format::{
    AreaKind, FieldName, FieldSlot, FieldValue, UnknownFieldName, AREA_MULTIPLIER,
    COMMON_HEADER_LEN, PRODUCT_FIELDS_START, TYPE_LENGTH_MASK,
};
pub use header::{decode_common_header, CommonHeader};
pub use parse::{parse, ParseOptions};
pub use product::{decode_product_info, get_field, ProductInfoArea};
pub use report::{Report, ReportRow};
pub use source::{
    read_record, ByteSource, FileSource, ReaderSource, SourceError, DEFAULT_BLOCK_SIZE,
};
