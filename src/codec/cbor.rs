//! Deterministic CBOR primitives for proof records
//!
//! Only unsigned integers, byte strings and definite-length arrays are
//! supported. Every argument is written in its shortest form and decoding
//! rejects any other form, so each logical value has exactly one encoding.

use crate::codec::cursor::ByteReader;
use crate::core::error::*;
use std::fmt;

/// CBOR major types used by proof records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorType {
    UnsignedInt,
    NegativeInt,
    ByteString,
    TextString,
    Array,
    Map,
    Tag,
    Simple,
}

impl MajorType {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => MajorType::UnsignedInt,
            1 => MajorType::NegativeInt,
            2 => MajorType::ByteString,
            3 => MajorType::TextString,
            4 => MajorType::Array,
            5 => MajorType::Map,
            6 => MajorType::Tag,
            _ => MajorType::Simple,
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            MajorType::UnsignedInt => 0,
            MajorType::NegativeInt => 1,
            MajorType::ByteString => 2,
            MajorType::TextString => 3,
            MajorType::Array => 4,
            MajorType::Map => 5,
            MajorType::Tag => 6,
            MajorType::Simple => 7,
        }
    }

    fn name(self) -> &'static str {
        match self {
            MajorType::UnsignedInt => "unsigned integer",
            MajorType::NegativeInt => "negative integer",
            MajorType::ByteString => "byte string",
            MajorType::TextString => "text string",
            MajorType::Array => "array",
            MajorType::Map => "map",
            MajorType::Tag => "tag",
            MajorType::Simple => "simple value",
        }
    }
}

impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes a major type and its argument in shortest form.
pub fn write_head(out: &mut Vec<u8>, major: MajorType, value: u64) {
    let major = major.to_bits() << 5;
    if value < 24 {
        out.push(major | value as u8);
    } else if value <= u64::from(u8::MAX) {
        out.push(major | 24);
        out.push(value as u8);
    } else if value <= u64::from(u16::MAX) {
        out.push(major | 25);
        out.extend_from_slice(&(value as u16).to_be_bytes());
    } else if value <= u64::from(u32::MAX) {
        out.push(major | 26);
        out.extend_from_slice(&(value as u32).to_be_bytes());
    } else {
        out.push(major | 27);
        out.extend_from_slice(&value.to_be_bytes());
    }
}

/// Reads a head, rejecting indefinite lengths and non-shortest arguments.
pub fn read_head(reader: &mut ByteReader<'_>, field: &'static str) -> Result<(MajorType, u64)> {
    let initial = reader.read_u8(field)?;
    let major = MajorType::from_bits(initial >> 5);
    let info = initial & 0x1f;

    let (value, minimum) = match info {
        0..=23 => return Ok((major, u64::from(info))),
        24 => (u64::from(reader.read_u8(field)?), 24),
        25 => (
            u64::from(u16::from_be_bytes(reader.read_array::<2>(field)?)),
            u64::from(u8::MAX) + 1,
        ),
        26 => (
            u64::from(u32::from_be_bytes(reader.read_array::<4>(field)?)),
            u64::from(u16::MAX) + 1,
        ),
        27 => (
            u64::from_be_bytes(reader.read_array::<8>(field)?),
            u64::from(u32::MAX) + 1,
        ),
        // reserved (28..=30) and indefinite length (31)
        _ => return Err(VerifierError::non_canonical(field)),
    };

    if value < minimum {
        return Err(VerifierError::non_canonical(field));
    }
    Ok((major, value))
}

fn expect_head(
    reader: &mut ByteReader<'_>,
    expected: MajorType,
    field: &'static str,
) -> Result<u64> {
    let (major, value) = read_head(reader, field)?;
    if major != expected {
        return Err(VerifierError::unexpected_type(
            field,
            expected.name(),
            major.to_string(),
        ));
    }
    Ok(value)
}

/// Writes an unsigned integer.
pub fn write_uint(out: &mut Vec<u8>, value: u64) {
    write_head(out, MajorType::UnsignedInt, value);
}

/// Reads an unsigned integer.
pub fn read_uint(reader: &mut ByteReader<'_>, field: &'static str) -> Result<u64> {
    expect_head(reader, MajorType::UnsignedInt, field)
}

/// Writes a byte string.
pub fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_head(out, MajorType::ByteString, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

/// Reads a byte string that must be exactly `N` bytes long.
pub fn read_fixed_bytes<const N: usize>(
    reader: &mut ByteReader<'_>,
    field: &'static str,
) -> Result<[u8; N]> {
    let declared = expect_head(reader, MajorType::ByteString, field)?;
    let len = checked_len(declared, reader.remaining(), field)?;
    if len != N {
        return Err(VerifierError::InvalidFieldLength {
            field,
            expected: N,
            actual: len,
        });
    }
    reader.read_array::<N>(field)
}

/// Writes a definite-length array header.
pub fn write_array_header(out: &mut Vec<u8>, len: usize) {
    write_head(out, MajorType::Array, len as u64);
}

/// Reads an array header whose length must equal `expected`.
pub fn read_array_exact(
    reader: &mut ByteReader<'_>,
    expected: usize,
    field: &'static str,
) -> Result<()> {
    let declared = expect_head(reader, MajorType::Array, field)?;
    if declared != expected as u64 {
        return Err(VerifierError::unexpected_type(
            field,
            "array of fixed arity",
            format!("array of {} elements", declared),
        ));
    }
    Ok(())
}

/// Reads an array header and returns its length.
///
/// Every element occupies at least one byte, so a count larger than the
/// remaining input is reported as truncation before anything is allocated.
pub fn read_array_len(reader: &mut ByteReader<'_>, field: &'static str) -> Result<usize> {
    let declared = expect_head(reader, MajorType::Array, field)?;
    checked_len(declared, reader.remaining(), field)
}

fn checked_len(declared: u64, remaining: usize, field: &'static str) -> Result<usize> {
    match usize::try_from(declared) {
        Ok(len) if len <= remaining => Ok(len),
        _ => Err(VerifierError::truncated(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_uint(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        write_uint(&mut out, value);
        out
    }

    #[test]
    fn test_shortest_form_boundaries() {
        assert_eq!(encode_uint(0), vec![0x00]);
        assert_eq!(encode_uint(23), vec![0x17]);
        assert_eq!(encode_uint(24), vec![0x18, 0x18]);
        assert_eq!(encode_uint(255), vec![0x18, 0xff]);
        assert_eq!(encode_uint(256), vec![0x19, 0x01, 0x00]);
        assert_eq!(encode_uint(65536), vec![0x1a, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(
            encode_uint(u64::MAX),
            vec![0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn test_read_uint_roundtrip_boundaries() {
        for value in [0, 23, 24, 255, 256, 65535, 65536, u32::MAX as u64, u64::MAX] {
            let bytes = encode_uint(value);
            let mut reader = ByteReader::new(&bytes);
            assert_eq!(read_uint(&mut reader, "value").unwrap(), value);
            assert!(reader.ensure_consumed().is_ok());
        }
    }

    #[test]
    fn test_rejects_non_shortest() {
        // 5 written with a one-byte argument
        let mut reader = ByteReader::new(&[0x18, 0x05]);
        assert!(matches!(
            read_uint(&mut reader, "index"),
            Err(VerifierError::NonCanonicalEncoding { field: "index" })
        ));

        // 255 written with a two-byte argument
        let mut reader = ByteReader::new(&[0x19, 0x00, 0xff]);
        assert!(read_uint(&mut reader, "index").is_err());
    }

    #[test]
    fn test_rejects_indefinite_and_reserved() {
        let mut reader = ByteReader::new(&[0x9f, 0xff]);
        assert!(matches!(
            read_array_len(&mut reader, "path"),
            Err(VerifierError::NonCanonicalEncoding { .. })
        ));

        let mut reader = ByteReader::new(&[0x1c]);
        assert!(read_uint(&mut reader, "index").is_err());
    }

    #[test]
    fn test_wrong_major_type() {
        let mut reader = ByteReader::new(&[0x41, 0x00]);
        assert!(matches!(
            read_uint(&mut reader, "index"),
            Err(VerifierError::UnexpectedFieldType { field: "index", .. })
        ));
    }

    #[test]
    fn test_fixed_bytes_checks() {
        let mut out = Vec::new();
        write_bytes(&mut out, &[7u8; 16]);
        let mut reader = ByteReader::new(&out);
        assert_eq!(read_fixed_bytes::<16>(&mut reader, "leaf").unwrap(), [7u8; 16]);

        let mut reader = ByteReader::new(&out);
        assert!(matches!(
            read_fixed_bytes::<32>(&mut reader, "root"),
            Err(VerifierError::InvalidFieldLength {
                expected: 32,
                actual: 16,
                ..
            })
        ));

        // declared 16 bytes, only 3 present
        let mut reader = ByteReader::new(&[0x50, 1, 2, 3]);
        assert!(matches!(
            read_fixed_bytes::<16>(&mut reader, "leaf"),
            Err(VerifierError::TruncatedRecord { .. })
        ));
    }

    #[test]
    fn test_array_len_bounded_by_input() {
        // claims 2^32 elements with nothing following
        let mut reader = ByteReader::new(&[0x9b, 0, 0, 0, 1, 0, 0, 0, 0]);
        assert!(matches!(
            read_array_len(&mut reader, "entries"),
            Err(VerifierError::TruncatedRecord { .. })
        ));
    }
}
