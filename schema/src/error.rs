//! Error types for schema construction and enum resolution.

use std::fmt;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while building a schema or resolving enum codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field declares a bit width outside the supported range.
    InvalidBitWidth {
        /// Name of the offending field.
        field: &'static str,
        /// The declared width.
        bits: u8,
    },

    /// Two fields in one schema share a name.
    DuplicateFieldName {
        /// The duplicated name.
        name: &'static str,
    },

    /// A fixed record schema does not end on a byte boundary.
    NotByteAligned {
        /// Name of the schema.
        schema: &'static str,
        /// Total declared bits.
        total_bits: usize,
    },

    /// A numeric code has no entry in the enum mapping.
    CodeOutOfRange {
        /// Name of the mapping.
        mapping: &'static str,
        /// The code that was looked up.
        code: u64,
        /// Number of entries in the mapping.
        count: usize,
    },

    /// A symbolic name has no entry in the enum mapping.
    UnknownName {
        /// Name of the mapping.
        mapping: &'static str,
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitWidth { field, bits } => {
                write!(f, "field `{field}` has invalid bit width {bits}")
            }
            Self::DuplicateFieldName { name } => {
                write!(f, "duplicate field name `{name}` in schema")
            }
            Self::NotByteAligned { schema, total_bits } => {
                write!(
                    f,
                    "schema `{schema}` totals {total_bits} bits, not a whole number of bytes"
                )
            }
            Self::CodeOutOfRange {
                mapping,
                code,
                count,
            } => {
                write!(
                    f,
                    "code {code} out of range for `{mapping}` mapping with {count} entries"
                )
            }
            Self::UnknownName { mapping, name } => {
                write!(f, "name `{name}` not present in `{mapping}` mapping")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
