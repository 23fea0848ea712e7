//! Decoded record values with copy-on-write updates.

use std::collections::BTreeMap;

/// A decoded field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Unsigned integer.
    UInt(u64),

    /// Two's-complement signed integer.
    SInt(i64),

    /// Boolean flag.
    Bool(bool),
}

impl Value {
    /// Returns a short name for the value's kind, used in error reports.
    #[must_use]
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::UInt(_) => "unsigned",
            Self::SInt(_) => "signed",
            Self::Bool(_) => "bool",
        }
    }

    /// Returns the unsigned payload, if this is a `UInt`.
    #[must_use]
    pub const fn as_uint(self) -> Option<u64> {
        match self {
            Self::UInt(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the signed payload, if this is a `SInt`.
    #[must_use]
    pub const fn as_sint(self) -> Option<i64> {
        match self {
            Self::SInt(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(value),
            _ => None,
        }
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::SInt(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A decoded record: an ordered mapping from field name to value, plus
/// symbolic names derived from enum-mapped fields.
///
/// Records are created fresh by decode and never mutated in place.
/// [`with_value`](Self::with_value) produces a new record, which prevents
/// aliasing between a record read from hardware and one about to be
/// written back. The numeric code is always authoritative: derived
/// symbols are dropped on update and re-derived during encode validation,
/// and they do not participate in equality.
#[derive(Debug, Clone, Default)]
pub struct Record {
    name: &'static str,
    values: BTreeMap<&'static str, Value>,
    symbols: BTreeMap<&'static str, &'static str>,
}

impl Record {
    /// Creates an empty record with the given record-type name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: BTreeMap::new(),
            symbols: BTreeMap::new(),
        }
    }

    /// Returns the record-type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the record holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks up a field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<Value> {
        self.values.get(field).copied()
    }

    /// Returns the derived symbolic name for an enum-mapped field.
    #[must_use]
    pub fn symbol(&self, field: &str) -> Option<&'static str> {
        self.symbols.get(field).copied()
    }

    /// Iterates over fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Value)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }

    /// Returns a new record with `field` set to `value`.
    ///
    /// Any stale symbolic name for the field is dropped; the symbol is
    /// re-derived from the numeric code when the record is next encoded.
    #[must_use]
    pub fn with_value(&self, field: &'static str, value: impl Into<Value>) -> Self {
        let mut updated = self.clone();
        updated.values.insert(field, value.into());
        updated.symbols.remove(field);
        updated
    }

    pub(crate) fn insert(&mut self, field: &'static str, value: Value) {
        self.values.insert(field, value);
    }

    pub(crate) fn insert_symbol(&mut self, field: &'static str, symbol: &'static str) {
        self.symbols.insert(field, symbol);
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        // Symbols are derived data; equality is over name and values only.
        self.name == other.name && self.values == other.values
    }
}

impl Eq for Record {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record() {
        let record = Record::new("test");
        assert_eq!(record.name(), "test");
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert!(record.get("anything").is_none());
    }

    #[test]
    fn with_value_does_not_mutate_original() {
        let original = Record::new("test").with_value("code", 1u64);
        let updated = original.with_value("code", 2u64);

        assert_eq!(original.get("code"), Some(Value::UInt(1)));
        assert_eq!(updated.get("code"), Some(Value::UInt(2)));
    }

    #[test]
    fn with_value_drops_stale_symbol() {
        let mut record = Record::new("test");
        record.insert("mode", Value::UInt(0));
        record.insert_symbol("mode", "Off");
        assert_eq!(record.symbol("mode"), Some("Off"));

        let updated = record.with_value("mode", 1u64);
        assert_eq!(updated.symbol("mode"), None);
        assert_eq!(updated.get("mode"), Some(Value::UInt(1)));
    }

    #[test]
    fn equality_ignores_symbols() {
        let mut with_symbol = Record::new("test");
        with_symbol.insert("mode", Value::UInt(0));
        with_symbol.insert_symbol("mode", "Off");

        let without_symbol = Record::new("test").with_value("mode", 0u64);
        assert_eq!(with_symbol, without_symbol);
    }

    #[test]
    fn equality_respects_name_and_values() {
        let a = Record::new("a").with_value("x", 1u64);
        let b = Record::new("b").with_value("x", 1u64);
        let c = Record::new("a").with_value("x", 2u64);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn value_accessors() {
        assert_eq!(Value::UInt(7).as_uint(), Some(7));
        assert_eq!(Value::UInt(7).as_sint(), None);
        assert_eq!(Value::SInt(-7).as_sint(), Some(-7));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Bool(true).as_uint(), None);
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(Value::UInt(0).kind_name(), "unsigned");
        assert_eq!(Value::SInt(0).kind_name(), "signed");
        assert_eq!(Value::Bool(false).kind_name(), "bool");
    }

    #[test]
    fn value_from_conversions() {
        assert_eq!(Value::from(3u64), Value::UInt(3));
        assert_eq!(Value::from(-3i64), Value::SInt(-3));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn iteration_is_name_ordered() {
        let record = Record::new("test")
            .with_value("zeta", 1u64)
            .with_value("alpha", 2u64);
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
