//! Schema-driven codec for fixed-length records.

use bitstream::{BitCursor, BitWriter};
use schema::{FieldKind, RecordSchema};

use crate::error::{CodecError, CodecResult};
use crate::record::{Record, Value};
use crate::validate;

/// Decodes a fixed-length record according to its schema.
///
/// Fields are extracted in schema order; enum-mapped fields get their
/// symbolic name attached to the record.
///
/// # Errors
///
/// Returns [`CodecError::LengthMismatch`] if the buffer length disagrees
/// with the schema's declared bit total, and
/// [`CodecError::UnknownEnumCode`] if a mapped field's value has no
/// symbolic name. No partial record is ever returned.
pub fn decode_fixed(schema: &RecordSchema, bytes: &[u8]) -> CodecResult<Record> {
    if bytes.len() * 8 != schema.total_bits() {
        return Err(CodecError::LengthMismatch {
            record: schema.name(),
            expected: schema.byte_len(),
            actual: bytes.len(),
        });
    }

    let mut cursor = BitCursor::new(bytes);
    let mut record = Record::new(schema.name());
    for field in schema.fields() {
        let value = match field.kind() {
            FieldKind::UInt => Value::UInt(cursor.read_unsigned(field.width())?),
            FieldKind::SInt => Value::SInt(cursor.read_signed(field.width())?),
            FieldKind::Bool => Value::Bool(cursor.read_bool()?),
        };
        if let (Some(mapping), Value::UInt(code)) = (field.mapping(), value) {
            let symbol = mapping
                .resolve(code)
                .map_err(|_| CodecError::UnknownEnumCode {
                    field: field.name(),
                    code,
                })?;
            record.insert_symbol(field.name(), symbol);
        }
        record.insert(field.name(), value);
    }

    validate::fully_consumed(schema.name(), &cursor)?;
    Ok(record)
}

/// Encodes a record into its fixed-length byte layout.
///
/// # Errors
///
/// Returns [`CodecError::MissingField`] if a schema field is absent,
/// [`CodecError::WrongKind`] if a value's kind disagrees with its field,
/// and [`CodecError::UnknownEnumCode`] if an enum-mapped field holds an
/// unmappable code. All validation runs before any byte is emitted.
pub fn encode_fixed(schema: &RecordSchema, record: &Record) -> CodecResult<Vec<u8>> {
    validate::encodable(schema, record)?;

    let mut writer = BitWriter::with_capacity(schema.byte_len());
    for field in schema.fields() {
        // Presence was confirmed by encodable() above.
        let value = record.get(field.name()).ok_or(CodecError::MissingField {
            record: schema.name(),
            field: field.name(),
        })?;
        match value {
            Value::UInt(v) => writer.write_unsigned(v, field.width())?,
            Value::SInt(v) => writer.write_signed(v, field.width())?,
            Value::Bool(v) => writer.write_bool(v),
        }
    }
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::{BitField, EnumMapping};

    const STATES: EnumMapping = EnumMapping::new("state", &["Idle", "Busy"]);

    fn sample_schema() -> RecordSchema {
        RecordSchema::new(
            "status",
            vec![
                BitField::uint("state", 8).with_mapping(STATES),
                BitField::sint("offset", 16),
                BitField::bool("active"),
                BitField::uint("reserved", 7),
            ],
        )
        .unwrap()
    }

    #[test]
    fn decode_attaches_symbols() {
        let bytes = [0x01, 0xFE, 0xFF, 0x01];
        let record = decode_fixed(&sample_schema(), &bytes).unwrap();
        assert_eq!(record.get("state"), Some(Value::UInt(1)));
        assert_eq!(record.symbol("state"), Some("Busy"));
        assert_eq!(record.get("offset"), Some(Value::SInt(-2)));
        assert_eq!(record.get("active"), Some(Value::Bool(true)));
        assert_eq!(record.get("reserved"), Some(Value::UInt(0)));
    }

    #[test]
    fn decode_rejects_short_buffer() {
        let err = decode_fixed(&sample_schema(), &[0x00]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::LengthMismatch {
                expected: 4,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn decode_rejects_long_buffer() {
        let err = decode_fixed(&sample_schema(), &[0x00; 5]).unwrap_err();
        assert!(matches!(err, CodecError::LengthMismatch { actual: 5, .. }));
    }

    #[test]
    fn decode_rejects_unmappable_code() {
        let bytes = [0x07, 0x00, 0x00, 0x00];
        let err = decode_fixed(&sample_schema(), &bytes).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnknownEnumCode {
                field: "state",
                code: 7,
            }
        ));
    }

    #[test]
    fn encode_decode_roundtrip() {
        let record = Record::new("status")
            .with_value("state", 0u64)
            .with_value("offset", -300i64)
            .with_value("active", false)
            .with_value("reserved", 0u64);
        let bytes = encode_fixed(&sample_schema(), &record).unwrap();
        assert_eq!(bytes.len(), 4);
        let decoded = decode_fixed(&sample_schema(), &bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn decode_encode_is_byte_exact() {
        let bytes = [0x01, 0x34, 0x12, 0x55];
        let record = decode_fixed(&sample_schema(), &bytes).unwrap();
        let encoded = encode_fixed(&sample_schema(), &record).unwrap();
        assert_eq!(encoded, bytes);
    }

    #[test]
    fn encode_missing_field_emits_nothing() {
        let record = Record::new("status").with_value("state", 0u64);
        let err = encode_fixed(&sample_schema(), &record).unwrap_err();
        assert!(matches!(err, CodecError::MissingField { .. }));
    }

    #[test]
    fn encode_rejects_oversized_value() {
        let record = Record::new("status")
            .with_value("state", 0u64)
            .with_value("offset", 40_000i64)
            .with_value("active", false)
            .with_value("reserved", 0u64);
        let err = encode_fixed(&sample_schema(), &record).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Bitstream(bitstream::BitError::SignedValueOutOfRange { .. })
        ));
    }

    #[test]
    fn stale_symbol_is_not_trusted() {
        // Decode, then change the numeric code; the symbol must follow the
        // code, not the other way around.
        let bytes = [0x00, 0x00, 0x00, 0x00];
        let record = decode_fixed(&sample_schema(), &bytes).unwrap();
        assert_eq!(record.symbol("state"), Some("Idle"));

        let updated = record.with_value("state", 1u64);
        let encoded = encode_fixed(&sample_schema(), &updated).unwrap();
        let decoded = decode_fixed(&sample_schema(), &encoded).unwrap();
        assert_eq!(decoded.symbol("state"), Some("Busy"));
    }
}
