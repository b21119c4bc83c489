//! Unsigned variable-length integers as used by multiformats
//!
//! Little-endian base-128 groups, high bit set on every byte but the last.
//! Values are limited to 63 bits (9 bytes) and must be minimally encoded.

use crate::core::error::*;

/// Longest accepted encoding in bytes
pub const MAX_VARINT_LEN: usize = 9;

/// Encode `value` into `out`
pub fn write_uvarint(mut value: u64, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Decode a varint at the start of `bytes`, returning it with the bytes consumed
pub fn read_uvarint(bytes: &[u8], field: &str) -> Result<(u64, usize)> {
    let mut value: u64 = 0;

    for (i, byte) in bytes.iter().take(MAX_VARINT_LEN).enumerate() {
        value |= u64::from(byte & 0x7f) << (7 * i);

        if byte & 0x80 == 0 {
            if *byte == 0 && i > 0 {
                return Err(VerifierError::malformed_identifier(format!(
                    "{} varint is not minimally encoded",
                    field
                )));
            }
            return Ok((value, i + 1));
        }
    }

    if bytes.len() < MAX_VARINT_LEN {
        Err(VerifierError::malformed_identifier(format!(
            "{} varint is truncated",
            field
        )))
    } else {
        Err(VerifierError::malformed_identifier(format!(
            "{} varint exceeds {} bytes",
            field, MAX_VARINT_LEN
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        let mut out = Vec::new();
        write_uvarint(0xf101, &mut out);
        assert_eq!(out, vec![0x81, 0xe2, 0x03]);

        out.clear();
        write_uvarint(0x1012, &mut out);
        assert_eq!(out, vec![0x92, 0x20]);

        out.clear();
        write_uvarint(32, &mut out);
        assert_eq!(out, vec![0x20]);
    }

    #[test]
    fn test_read_consumes_prefix_only() {
        let (value, used) = read_uvarint(&[0x81, 0xe2, 0x03, 0xff], "codec").unwrap();
        assert_eq!(value, 0xf101);
        assert_eq!(used, 3);
    }

    #[test]
    fn test_rejects_non_minimal() {
        // 0x01 padded with an empty continuation group
        assert!(read_uvarint(&[0x81, 0x00], "codec").is_err());
        assert_eq!(read_uvarint(&[0x00], "codec").unwrap(), (0, 1));
    }

    #[test]
    fn test_rejects_truncated_and_oversized() {
        assert!(read_uvarint(&[], "codec").is_err());
        assert!(read_uvarint(&[0x80, 0x80], "codec").is_err());
        assert!(read_uvarint(&[0xff; 10], "codec").is_err());
    }

    #[test]
    fn test_max_value_roundtrip() {
        let max = (1u64 << 63) - 1;
        let mut out = Vec::new();
        write_uvarint(max, &mut out);
        assert_eq!(out.len(), MAX_VARINT_LEN);
        assert_eq!(read_uvarint(&out, "codec").unwrap(), (max, MAX_VARINT_LEN));
    }
}
