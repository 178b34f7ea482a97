//! Zero-sum checksum used by the common header and every FRU area.
//!
//! A range is valid when all of its bytes, checksum byte included, add up to
//! zero modulo 256.

/// Wrapping sum of every byte in `buf`.
#[must_use]
pub fn byte_sum(buf: &[u8]) -> u8 {
    buf.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// True iff the first `length` bytes of `buf` sum to zero mod 256.
/// A `length` past the end of `buf` is never valid.
#[must_use]
pub fn is_checksum_valid(buf: &[u8], length: usize) -> bool {
    match buf.get(..length) {
        Some(range) => byte_sum(range) == 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_is_valid() {
        assert!(is_checksum_valid(&[], 0));
        assert!(is_checksum_valid(&[0x12], 0));
    }

    #[test]
    fn length_past_end_is_invalid() {
        assert!(!is_checksum_valid(&[0x00, 0x00], 3));
    }

    #[test]
    fn only_the_prefix_is_summed() {
        // 0x80 + 0x80 wraps to zero; the trailing byte is outside the range.
        assert!(is_checksum_valid(&[0x80, 0x80, 0x01], 2));
        assert!(!is_checksum_valid(&[0x80, 0x80, 0x01], 3));
    }
}
