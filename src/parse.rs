//! One-call decode of a raw record: common header, then Product Info Area.

use log::{debug, warn};

use crate::error::DecodeError;
use crate::header::CommonHeader;
use crate::product::ProductInfoArea;

/// Options for [`parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Proceed past header and area checksum failures. For inspecting
    /// corrupted records; decoded fields are not trustworthy.
    pub ignore_checksum_errors: bool,
    /// Decode the Product Info Area at this offset and skip the common header.
    pub base_offset: Option<u32>,
}

/// Decode the Product Info Area of `buf`.
pub fn parse<'a>(
    buf: &'a [u8],
    options: &ParseOptions,
) -> Result<ProductInfoArea<'a>, DecodeError> {
    let base_offset = match options.base_offset {
        Some(offset) => {
            debug!("using explicit product info offset {offset:#x}");
            offset
        }
        None => product_offset(buf, options.ignore_checksum_errors)?,
    };

    if options.ignore_checksum_errors {
        ProductInfoArea::decode_unchecked(buf, base_offset)
    } else {
        ProductInfoArea::decode(buf, base_offset)
    }
}

fn product_offset(buf: &[u8], ignore_checksum_errors: bool) -> Result<u32, DecodeError> {
    if !ignore_checksum_errors {
        return crate::header::decode_common_header(buf)?.product_info_base_offset();
    }

    let header = CommonHeader::from_bytes_unchecked(buf)?;
    if !header.is_valid() {
        warn!(
            "common header checksum sums to {:#04x}, decoding anyway",
            header.checksum_sum()
        );
    }
    header.product_info_base_offset()
}
