//! Record layout and enum mapping definitions for the uwrec record codec.
//!
//! This crate defines how device records are described for decoding:
//! - [`BitField`] and [`FieldKind`] for individual fields
//! - [`RecordSchema`] for validated, ordered record layouts
//! - [`EnumMapping`] for symbolic name resolution of small integer codes
//!
//! # Design Principles
//!
//! - **Declarative layouts** - Decode/encode logic lives elsewhere and is
//!   driven entirely by the schema, never duplicated per record type.
//! - **Immutable after construction** - Schemas and mappings validate once
//!   and are shared freely across threads.
//! - **Explicit padding** - Reserved bits are named fields, so declared
//!   widths always account for every bit of a record.

mod enums;
mod error;
mod field;
mod schema;

pub use enums::EnumMapping;
pub use error::{SchemaError, SchemaResult};
pub use field::{BitField, FieldKind};
pub use schema::RecordSchema;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let field = BitField::uint("code", 8);
        let _ = field.kind();
        let mapping = EnumMapping::new("m", &["A"]);
        let _ = mapping.resolve(0);
        let schema = RecordSchema::new("r", vec![field]).unwrap();
        let _: SchemaResult<()> = Ok(());
        assert_eq!(schema.byte_len(), 1);
    }

    #[test]
    fn schema_with_mapped_field() {
        const STATES: EnumMapping = EnumMapping::new("state", &["Idle", "Busy"]);
        let schema = RecordSchema::new(
            "status",
            vec![BitField::uint("state", 8).with_mapping(STATES)],
        )
        .unwrap();
        let mapping = schema.field("state").unwrap().mapping().unwrap();
        assert_eq!(mapping.resolve(1).unwrap(), "Busy");
    }
}
