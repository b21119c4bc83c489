//! Input position tracking for record decoding
//!
//! Reads never run past the end of the buffer; running out of input is a
//! `TruncatedRecord` naming the field being read.

use crate::core::error::*;

/// Forward-only view over an encoded record
#[derive(Debug)]
pub struct ByteReader<'a> {
    rest: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        let [byte] = self.read_array::<1>(field)?;
        Ok(byte)
    }

    /// Take the next `N` bytes; on truncation nothing is consumed
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        if self.rest.len() < N {
            return Err(VerifierError::truncated(field));
        }
        let (head, tail) = self.rest.split_at(N);
        self.rest = tail;

        let mut out = [0u8; N];
        out.copy_from_slice(head);
        Ok(out)
    }

    /// Error with the leftover count unless the record filled the buffer
    pub fn ensure_consumed(&self) -> Result<()> {
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(VerifierError::TrailingBytes {
                count: self.rest.len(),
            })
        }
    }
}
