//! Field definitions within a record schema.

use crate::EnumMapping;

/// The value kind of a field (representation only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Unsigned integer with fixed bit width.
    UInt,

    /// Two's-complement signed integer with fixed bit width.
    SInt,

    /// Boolean (1 bit).
    Bool,
}

impl FieldKind {
    /// Returns a short human-readable name for the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UInt => "unsigned",
            Self::SInt => "signed",
            Self::Bool => "bool",
        }
    }
}

/// One field within a record layout.
///
/// Padding and reserved bits are explicit named fields, never implicit
/// gaps, so the sum of field widths always equals the record's bit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    name: &'static str,
    width: u8,
    kind: FieldKind,
    mapping: Option<EnumMapping>,
}

impl BitField {
    /// Creates an unsigned integer field.
    #[must_use]
    pub const fn uint(name: &'static str, width: u8) -> Self {
        Self {
            name,
            width,
            kind: FieldKind::UInt,
            mapping: None,
        }
    }

    /// Creates a signed integer field.
    #[must_use]
    pub const fn sint(name: &'static str, width: u8) -> Self {
        Self {
            name,
            width,
            kind: FieldKind::SInt,
            mapping: None,
        }
    }

    /// Creates a single-bit boolean field.
    #[must_use]
    pub const fn bool(name: &'static str) -> Self {
        Self {
            name,
            width: 1,
            kind: FieldKind::Bool,
            mapping: None,
        }
    }

    /// Attaches an enum mapping used to derive a symbolic name on decode.
    #[must_use]
    pub const fn with_mapping(mut self, mapping: EnumMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Returns the field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field width in bits.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns the field kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns the attached enum mapping, if any.
    #[must_use]
    pub const fn mapping(&self) -> Option<EnumMapping> {
        self.mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint_field_construction() {
        let field = BitField::uint("network_id", 16);
        assert_eq!(field.name(), "network_id");
        assert_eq!(field.width(), 16);
        assert_eq!(field.kind(), FieldKind::UInt);
        assert!(field.mapping().is_none());
    }

    #[test]
    fn sint_field_construction() {
        let field = BitField::sint("x_position", 32);
        assert_eq!(field.kind(), FieldKind::SInt);
        assert_eq!(field.width(), 32);
    }

    #[test]
    fn bool_field_is_one_bit() {
        let field = BitField::bool("initiator");
        assert_eq!(field.width(), 1);
        assert_eq!(field.kind(), FieldKind::Bool);
    }

    #[test]
    fn mapping_attachment() {
        const MODES: EnumMapping = EnumMapping::new("mode", &["Off", "On"]);
        let field = BitField::uint("mode", 1).with_mapping(MODES);
        let mapping = field.mapping().unwrap();
        assert_eq!(mapping.name(), "mode");
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn kind_names() {
        assert_eq!(FieldKind::UInt.name(), "unsigned");
        assert_eq!(FieldKind::SInt.name(), "signed");
        assert_eq!(FieldKind::Bool.name(), "bool");
    }
}
