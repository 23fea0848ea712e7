//! Symbolic name mappings for small integer codes.

use crate::error::{SchemaError, SchemaResult};

/// An ordered list of symbolic names indexed by integer code.
///
/// Mappings are immutable configuration data, constructed once (usually in
/// a `const`) and shared. Lookup in either direction fails rather than
/// substituting a default when the code or name is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMapping {
    name: &'static str,
    names: &'static [&'static str],
}

impl EnumMapping {
    /// Creates a mapping from an ordered list of symbolic names.
    #[must_use]
    pub const fn new(name: &'static str, names: &'static [&'static str]) -> Self {
        Self { name, names }
    }

    /// Returns the mapping's name, used in error reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolves a numeric code to its symbolic name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::CodeOutOfRange`] if `code` has no entry.
    pub fn resolve(&self, code: u64) -> SchemaResult<&'static str> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.names.get(index).copied())
            .ok_or(SchemaError::CodeOutOfRange {
                mapping: self.name,
                code,
                count: self.names.len(),
            })
    }

    /// Translates a symbolic name back to its numeric code.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownName`] if `name` is not in the mapping.
    pub fn reverse(&self, name: &str) -> SchemaResult<u64> {
        self.names
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| index as u64)
            .ok_or_else(|| SchemaError::UnknownName {
                mapping: self.name,
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE_TYPE: EnumMapping = EnumMapping::new("device_type", &["Tag", "Anchor"]);

    #[test]
    fn resolve_valid_codes() {
        assert_eq!(DEVICE_TYPE.resolve(0).unwrap(), "Tag");
        assert_eq!(DEVICE_TYPE.resolve(1).unwrap(), "Anchor");
    }

    #[test]
    fn resolve_out_of_range_code() {
        let err = DEVICE_TYPE.resolve(5).unwrap_err();
        assert_eq!(
            err,
            SchemaError::CodeOutOfRange {
                mapping: "device_type",
                code: 5,
                count: 2,
            }
        );
    }

    #[test]
    fn resolve_huge_code() {
        let err = DEVICE_TYPE.resolve(u64::MAX).unwrap_err();
        assert!(matches!(err, SchemaError::CodeOutOfRange { .. }));
    }

    #[test]
    fn reverse_valid_names() {
        assert_eq!(DEVICE_TYPE.reverse("Tag").unwrap(), 0);
        assert_eq!(DEVICE_TYPE.reverse("Anchor").unwrap(), 1);
    }

    #[test]
    fn reverse_unknown_name() {
        let err = DEVICE_TYPE.reverse("Gateway").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownName { .. }));
        assert!(err.to_string().contains("Gateway"));
    }

    #[test]
    fn reverse_is_case_sensitive() {
        assert!(DEVICE_TYPE.reverse("tag").is_err());
    }

    #[test]
    fn resolve_reverse_are_inverse() {
        for code in 0..DEVICE_TYPE.len() as u64 {
            let name = DEVICE_TYPE.resolve(code).unwrap();
            assert_eq!(DEVICE_TYPE.reverse(name).unwrap(), code);
        }
    }

    #[test]
    fn empty_mapping() {
        const EMPTY: EnumMapping = EnumMapping::new("empty", &[]);
        assert!(EMPTY.is_empty());
        assert!(EMPTY.resolve(0).is_err());
    }
}
