//! Consistency checks run at codec boundaries.

use bitstream::BitCursor;
use schema::{FieldKind, RecordSchema};

use crate::error::{CodecError, CodecResult};
use crate::record::{Record, Value};

/// Confirms, post-decode, that the cursor consumed the buffer exactly.
pub(crate) fn fully_consumed(record: &'static str, cursor: &BitCursor<'_>) -> CodecResult<()> {
    if cursor.is_empty() {
        Ok(())
    } else {
        Err(CodecError::TrailingData {
            record,
            remaining_bits: cursor.remaining_bits(),
        })
    }
}

/// Confirms, pre-encode, that every schema field is present with the right
/// kind and that enum-mapped codes are resolvable.
///
/// Runs before any byte is emitted so a failed encode produces no partial
/// output. The numeric code is authoritative; symbolic names carried by
/// the record are ignored here and re-derived from the code.
pub(crate) fn encodable(schema: &RecordSchema, record: &Record) -> CodecResult<()> {
    for field in schema.fields() {
        let value = record.get(field.name()).ok_or(CodecError::MissingField {
            record: schema.name(),
            field: field.name(),
        })?;

        let kind_matches = matches!(
            (field.kind(), value),
            (FieldKind::UInt, Value::UInt(_))
                | (FieldKind::SInt, Value::SInt(_))
                | (FieldKind::Bool, Value::Bool(_))
        );
        if !kind_matches {
            return Err(CodecError::WrongKind {
                field: field.name(),
                expected: field.kind(),
                found: value.kind_name(),
            });
        }

        if let (Some(mapping), Value::UInt(code)) = (field.mapping(), value) {
            if mapping.resolve(code).is_err() {
                return Err(CodecError::UnknownEnumCode {
                    field: field.name(),
                    code,
                });
            }
        }
    }
    Ok(())
}
