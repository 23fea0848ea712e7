//! Bit-level read cursor with bounded operations.

use crate::error::{BitError, BitResult};

/// A read cursor over a byte buffer supporting unaligned field extraction.
///
/// Bit order is least-significant-bit first: bit `k` of the stream is bit
/// `k % 8` of byte `k / 8`, and the first bit read becomes the least
/// significant bit of the extracted value. Byte-aligned multi-byte fields
/// therefore decode as little-endian integers.
///
/// All read operations are bounds-checked and return errors on failure.
/// The cursor never panics on malformed input and never mutates the
/// underlying buffer; only its internal position advances.
#[derive(Debug)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitCursor<'a> {
    /// Creates a new `BitCursor` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub const fn remaining_bits(&self) -> usize {
        self.data
            .len()
            .saturating_mul(8)
            .saturating_sub(self.bit_pos)
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining_bits() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Returns `true` if the cursor sits on a byte boundary.
    #[must_use]
    pub const fn at_byte_boundary(&self) -> bool {
        self.bit_pos % 8 == 0
    }

    /// Reads a single bit as a boolean.
    pub fn read_bool(&mut self) -> BitResult<bool> {
        Ok(self.read_unsigned(1)? != 0)
    }

    /// Reads `width` bits as an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `width` is 0 or above 64.
    /// Returns [`BitError::OutOfRange`] if fewer than `width` bits remain.
    pub fn read_unsigned(&mut self, width: u8) -> BitResult<u64> {
        if width == 0 || width > 64 {
            return Err(BitError::InvalidBitCount {
                bits: width,
                max_bits: 64,
            });
        }
        if width as usize > self.remaining_bits() {
            return Err(BitError::OutOfRange {
                requested: width as usize,
                available: self.remaining_bits(),
            });
        }

        let mut value = 0u64;
        for i in 0..width {
            let byte = self.data[self.bit_pos / 8];
            let bit = (byte >> (self.bit_pos % 8)) & 1;
            value |= u64::from(bit) << i;
            self.bit_pos += 1;
        }
        Ok(value)
    }

    /// Reads `width` bits as a two's-complement signed integer.
    ///
    /// The top bit of the extracted field is the sign bit and is extended
    /// to the full 64-bit result.
    pub fn read_signed(&mut self, width: u8) -> BitResult<i64> {
        let raw = self.read_unsigned(width)?;
        if width < 64 && raw >> (width - 1) & 1 == 1 {
            // Sign-extend: set every bit above the field width.
            return Ok((raw | !0u64 << width) as i64);
        }
        Ok(raw as i64)
    }
}
