//! Record schema definitions and validation.

use std::collections::HashSet;

use crate::error::{SchemaError, SchemaResult};
use crate::{BitField, FieldKind};

/// An ordered, immutable description of one record type's fields.
///
/// A schema is constructed once per record type and reused across every
/// decode/encode call; it is never mutated after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<BitField>,
    total_bits: usize,
}

impl RecordSchema {
    /// Creates a schema from ordered fields after validation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidBitWidth`] if a field width is 0 or
    /// above 64 (booleans must be exactly 1 bit),
    /// [`SchemaError::DuplicateFieldName`] if two fields share a name, and
    /// [`SchemaError::NotByteAligned`] if the widths do not sum to a whole
    /// number of bytes.
    pub fn new(name: &'static str, fields: Vec<BitField>) -> SchemaResult<Self> {
        let mut seen = HashSet::new();
        let mut total_bits = 0usize;
        for field in &fields {
            validate_field(field)?;
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateFieldName { name: field.name() });
            }
            total_bits += usize::from(field.width());
        }
        if total_bits % 8 != 0 {
            return Err(SchemaError::NotByteAligned {
                schema: name,
                total_bits,
            });
        }
        Ok(Self {
            name,
            fields,
            total_bits,
        })
    }

    /// Returns the schema name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the ordered fields.
    #[must_use]
    pub fn fields(&self) -> &[BitField] {
        &self.fields
    }

    /// Returns the total declared bit count.
    #[must_use]
    pub const fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Returns the record length in whole bytes.
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.total_bits / 8
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&BitField> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

fn validate_field(field: &BitField) -> SchemaResult<()> {
    let valid = match field.kind() {
        FieldKind::Bool => field.width() == 1,
        FieldKind::UInt | FieldKind::SInt => field.width() >= 1 && field.width() <= 64,
    };
    if valid {
        Ok(())
    } else {
        Err(SchemaError::InvalidBitWidth {
            field: field.name(),
            bits: field.width(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_construction() {
        let schema = RecordSchema::new(
            "update_rate",
            vec![
                BitField::uint("moving_update_rate", 32),
                BitField::uint("stationary_update_rate", 32),
            ],
        )
        .unwrap();
        assert_eq!(schema.name(), "update_rate");
        assert_eq!(schema.total_bits(), 64);
        assert_eq!(schema.byte_len(), 8);
        assert_eq!(schema.fields().len(), 2);
    }

    #[test]
    fn field_lookup() {
        let schema = RecordSchema::new(
            "pair",
            vec![BitField::uint("first", 8), BitField::sint("second", 8)],
        )
        .unwrap();
        assert_eq!(schema.field("second").unwrap().kind(), FieldKind::SInt);
        assert!(schema.field("third").is_none());
    }

    #[test]
    fn rejects_zero_width() {
        let err = RecordSchema::new("bad", vec![BitField::uint("empty", 0)]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidBitWidth { bits: 0, .. }));
    }

    #[test]
    fn rejects_width_above_64() {
        let err = RecordSchema::new("bad", vec![BitField::uint("wide", 65)]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidBitWidth { bits: 65, .. }));
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let err = RecordSchema::new(
            "bad",
            vec![BitField::uint("quality", 8), BitField::uint("quality", 8)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::DuplicateFieldName { name: "quality" }
        ));
    }

    #[test]
    fn rejects_non_byte_aligned_total() {
        let err = RecordSchema::new(
            "bad",
            vec![BitField::bool("flag"), BitField::uint("rest", 4)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::NotByteAligned { total_bits: 5, .. }
        ));
    }

    #[test]
    fn padding_fields_are_explicit() {
        // A mixed-width layout only validates when reserved bits are named.
        let schema = RecordSchema::new(
            "mode",
            vec![
                BitField::uint("device_type", 1),
                BitField::uint("uwb_mode", 2),
                BitField::bool("initiator"),
                BitField::uint("reserved", 4),
            ],
        )
        .unwrap();
        assert_eq!(schema.byte_len(), 1);
    }

    #[test]
    fn empty_schema_is_zero_bytes() {
        let schema = RecordSchema::new("empty", vec![]).unwrap();
        assert_eq!(schema.byte_len(), 0);
    }
}
