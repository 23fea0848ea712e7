//! Bit-level writer for encoding packed binary data.

use crate::error::{BitError, BitResult};

/// A bit-level writer producing the same wire layout [`BitCursor`] reads.
///
/// Bits accumulate least-significant-bit first into a growable internal
/// buffer that the writer exclusively owns. Call [`finish`](Self::finish)
/// to take the final byte buffer; a trailing partial byte is padded with
/// zero bits.
///
/// [`BitCursor`]: crate::BitCursor
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Total number of bits written; `bit_pos % 8` indexes into the last byte.
    bit_pos: usize,
}

impl BitWriter {
    /// Creates a new empty `BitWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `BitWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            bit_pos: 0,
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub const fn bits_written(&self) -> usize {
        self.bit_pos
    }

    /// Returns `true` if the writer sits on a byte boundary.
    #[must_use]
    pub const fn at_byte_boundary(&self) -> bool {
        self.bit_pos % 8 == 0
    }

    /// Writes a single bit.
    pub fn write_bool(&mut self, value: bool) {
        let bit_idx = self.bit_pos % 8;
        if bit_idx == 0 {
            self.bytes.push(0);
        }
        if value {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << bit_idx;
        }
        self.bit_pos += 1;
    }

    /// Writes `width` bits from an unsigned integer, low bit first.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `width` is 0 or above 64.
    /// Returns [`BitError::ValueOutOfRange`] if `value` does not fit in
    /// `width` bits.
    pub fn write_unsigned(&mut self, value: u64, width: u8) -> BitResult<()> {
        if width == 0 || width > 64 {
            return Err(BitError::InvalidBitCount {
                bits: width,
                max_bits: 64,
            });
        }
        if width < 64 && value >= 1u64 << width {
            return Err(BitError::ValueOutOfRange { value, bits: width });
        }
        self.write_raw(value, width);
        Ok(())
    }

    /// Writes `width` bits from a two's-complement signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `width` is 0 or above 64.
    /// Returns [`BitError::SignedValueOutOfRange`] if `value` is outside
    /// `-2^(width-1) ..= 2^(width-1) - 1`.
    pub fn write_signed(&mut self, value: i64, width: u8) -> BitResult<()> {
        if width == 0 || width > 64 {
            return Err(BitError::InvalidBitCount {
                bits: width,
                max_bits: 64,
            });
        }
        if width < 64 {
            let min = -(1i64 << (width - 1));
            let max = (1i64 << (width - 1)) - 1;
            if value < min || value > max {
                return Err(BitError::SignedValueOutOfRange { value, bits: width });
            }
        }
        let mask = if width == 64 { !0u64 } else { (1u64 << width) - 1 };
        self.write_raw(value as u64 & mask, width);
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    ///
    /// A trailing partial byte has already been zero-padded.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    fn write_raw(&mut self, value: u64, width: u8) {
        for i in 0..width {
            self.write_bool((value >> i) & 1 == 1);
        }
    }
}
