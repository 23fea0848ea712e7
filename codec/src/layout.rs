//! Concrete record layouts and enum mappings for the network node service.
//!
//! Each fixed record type has exactly one schema, built on first use and
//! shared for the life of the process; decode/encode calls never allocate
//! schema data.

use std::sync::OnceLock;

use schema::{BitField, EnumMapping, RecordSchema};

/// Device type codes: tags move, anchors are surveyed in place.
pub const DEVICE_TYPE: EnumMapping = EnumMapping::new("device_type", &["Tag", "Anchor"]);

/// UWB radio mode codes.
pub const UWB_MODE: EnumMapping = EnumMapping::new("uwb_mode", &["Off", "Passive", "Active"]);

/// Firmware generation codes.
pub const FW_VERSION: EnumMapping = EnumMapping::new("fw_version", &["1", "2"]);

/// Location data mode codes; the location data record's content
/// discriminator shares this three-way mapping.
pub const LOCATION_DATA_MODE: EnumMapping = EnumMapping::new(
    "location_data_mode",
    &["Position", "Distances", "Position and distances"],
);

fn schema(
    cell: &'static OnceLock<RecordSchema>,
    name: &'static str,
    fields: fn() -> Vec<BitField>,
) -> &'static RecordSchema {
    cell.get_or_init(|| {
        RecordSchema::new(name, fields()).expect("record layout is statically valid")
    })
}

/// The 2-byte operating mode record.
pub fn operating_mode() -> &'static RecordSchema {
    static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
    schema(&SCHEMA, "operating_mode", || {
        vec![
            BitField::uint("device_type", 1).with_mapping(DEVICE_TYPE),
            BitField::uint("uwb_mode", 2).with_mapping(UWB_MODE),
            BitField::uint("fw_version", 1).with_mapping(FW_VERSION),
            BitField::bool("accelerometer_enable"),
            BitField::bool("led_enable"),
            BitField::bool("fw_update_enable"),
            BitField::uint("reserved_01", 1),
            BitField::bool("initiator"),
            BitField::bool("low_power_mode"),
            BitField::bool("location_engine"),
            // The vendor docs list a 4-bit trailing reserve but the record
            // is two whole bytes; the remaining bit is part of the field.
            BitField::uint("reserved_02", 5),
        ]
    })
}

/// The 25-byte device identity record.
pub fn device_identity() -> &'static RecordSchema {
    static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
    schema(&SCHEMA, "device_identity", || {
        vec![
            BitField::uint("node_id", 64),
            BitField::uint("hw_version", 32),
            BitField::uint("fw1_version", 32),
            BitField::uint("fw2_version", 32),
            BitField::uint("fw1_checksum", 32),
            BitField::uint("fw2_checksum", 32),
            BitField::bool("bridge"),
            BitField::uint("unused", 7),
        ]
    })
}

/// The 2-byte network id record.
pub fn network_id() -> &'static RecordSchema {
    static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
    schema(&SCHEMA, "network_id", || {
        vec![BitField::uint("network_id", 16)]
    })
}

/// The 1-byte location data mode record.
pub fn location_data_mode() -> &'static RecordSchema {
    static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
    schema(&SCHEMA, "location_data_mode", || {
        vec![BitField::uint("location_data_mode", 8).with_mapping(LOCATION_DATA_MODE)]
    })
}

/// The 8-byte tag update rate record.
pub fn update_rate() -> &'static RecordSchema {
    static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
    schema(&SCHEMA, "update_rate", || {
        vec![
            BitField::uint("moving_update_rate", 32),
            BitField::uint("stationary_update_rate", 32),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operating_mode_is_two_bytes() {
        let schema = operating_mode();
        assert_eq!(schema.total_bits(), 16);
        assert_eq!(schema.byte_len(), 2);
        assert_eq!(schema.fields().len(), 11);
    }

    #[test]
    fn device_identity_is_twenty_five_bytes() {
        assert_eq!(device_identity().byte_len(), 25);
    }

    #[test]
    fn network_id_is_two_bytes() {
        assert_eq!(network_id().byte_len(), 2);
    }

    #[test]
    fn location_data_mode_is_one_byte() {
        assert_eq!(location_data_mode().byte_len(), 1);
    }

    #[test]
    fn update_rate_is_eight_bytes() {
        assert_eq!(update_rate().byte_len(), 8);
    }

    #[test]
    fn schemas_are_shared() {
        assert!(std::ptr::eq(operating_mode(), operating_mode()));
    }

    #[test]
    fn operating_mode_mappings_attached() {
        let schema = operating_mode();
        assert!(schema.field("device_type").unwrap().mapping().is_some());
        assert!(schema.field("uwb_mode").unwrap().mapping().is_some());
        assert!(schema.field("fw_version").unwrap().mapping().is_some());
        assert!(schema.field("initiator").unwrap().mapping().is_none());
    }

    #[test]
    fn mappings_resolve_documented_names() {
        assert_eq!(DEVICE_TYPE.resolve(0).unwrap(), "Tag");
        assert_eq!(UWB_MODE.resolve(2).unwrap(), "Active");
        assert_eq!(FW_VERSION.resolve(1).unwrap(), "2");
        assert_eq!(
            LOCATION_DATA_MODE.resolve(2).unwrap(),
            "Position and distances"
        );
    }
}
