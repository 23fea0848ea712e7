//! Error types for record codec operations.

use std::fmt;

use schema::FieldKind;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during record encoding/decoding.
///
/// All failures are deterministic pure-function failures; none are retried
/// internally and none leave partial output behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Bitstream error (read past end, value too wide for its field).
    Bitstream(bitstream::BitError),

    /// Schema error (enum code/name lookup miss, invalid layout).
    Schema(schema::SchemaError),

    /// Declared and actual byte counts disagree.
    LengthMismatch {
        /// Name of the record being decoded.
        record: &'static str,
        /// Expected byte count.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },

    /// Decode finished with unconsumed bits left in the buffer.
    TrailingData {
        /// Name of the record being decoded.
        record: &'static str,
        /// Number of residual bits.
        remaining_bits: usize,
    },

    /// Content discriminator outside the valid range.
    InvalidDiscriminator {
        /// The discriminator byte found.
        found: u8,
    },

    /// A decoded field's numeric value has no symbolic name.
    UnknownEnumCode {
        /// Name of the field.
        field: &'static str,
        /// The unmappable code.
        code: u64,
    },

    /// Encode called without a field the schema requires.
    MissingField {
        /// Name of the record being encoded.
        record: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A supplied value's kind disagrees with the field's declared kind.
    WrongKind {
        /// Name of the field.
        field: &'static str,
        /// The kind the schema declares.
        expected: FieldKind,
        /// The kind of the supplied value.
        found: &'static str,
    },

    /// An element list exceeds the one-byte count prefix.
    TooManyElements {
        /// Name of the record being encoded.
        record: &'static str,
        /// Number of elements supplied.
        count: usize,
        /// Maximum representable element count.
        max: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::Schema(e) => write!(f, "schema error: {e}"),
            Self::LengthMismatch {
                record,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "`{record}` record length mismatch: expected {expected} bytes, got {actual}"
                )
            }
            Self::TrailingData {
                record,
                remaining_bits,
            } => {
                write!(
                    f,
                    "`{record}` record left {remaining_bits} bits unconsumed"
                )
            }
            Self::InvalidDiscriminator { found } => {
                write!(f, "invalid content discriminator {found}, expected 0-2")
            }
            Self::UnknownEnumCode { field, code } => {
                write!(f, "field `{field}` has no name for code {code}")
            }
            Self::MissingField { record, field } => {
                write!(f, "`{record}` record is missing field `{field}`")
            }
            Self::WrongKind {
                field,
                expected,
                found,
            } => {
                write!(
                    f,
                    "field `{field}` expects a {} value, got {found}",
                    expected.name()
                )
            }
            Self::TooManyElements { record, count, max } => {
                write!(
                    f,
                    "`{record}` record has {count} elements, maximum is {max}"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(e) => Some(e),
            Self::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}

impl From<schema::SchemaError> for CodecError {
    fn from(err: schema::SchemaError) -> Self {
        Self::Schema(err)
    }
}
