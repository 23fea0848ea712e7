//! Error types for bitstream operations.

use std::fmt;

/// Result type for bitstream operations.
pub type BitResult<T> = Result<T, BitError>;

/// Errors that can occur during bit-level encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// Attempted to read past the end of the buffer.
    OutOfRange {
        /// Number of bits requested.
        requested: usize,
        /// Number of bits available.
        available: usize,
    },

    /// Invalid bit count for the operation.
    InvalidBitCount {
        /// The invalid bit count provided.
        bits: u8,
        /// Maximum allowed bits for this operation.
        max_bits: u8,
    },

    /// Unsigned value exceeds the range representable by the field width.
    ValueOutOfRange {
        /// The value that was out of range.
        value: u64,
        /// Field width in bits.
        bits: u8,
    },

    /// Signed value exceeds the two's-complement range of the field width.
    SignedValueOutOfRange {
        /// The value that was out of range.
        value: i64,
        /// Field width in bits.
        bits: u8,
    },
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bits but only {available} bits available"
                )
            }
            Self::InvalidBitCount { bits, max_bits } => {
                write!(f, "invalid bit count {bits}, maximum allowed is {max_bits}")
            }
            Self::ValueOutOfRange { value, bits } => {
                write!(f, "value {value} cannot be represented in {bits} bits")
            }
            Self::SignedValueOutOfRange { value, bits } => {
                write!(
                    f,
                    "signed value {value} cannot be represented in {bits} bits"
                )
            }
        }
    }
}

impl std::error::Error for BitError {}
