//! Record type identifiers.

use schema::RecordSchema;

use crate::layout;

/// Identifies one characteristic record exchanged with a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordType {
    OperatingMode,
    DeviceIdentity,
    NetworkId,
    LocationDataMode,
    UpdateRate,
    LocationData,
    ProxyPositions,
    AnchorIds,
    PersistedPosition,
}

impl RecordType {
    /// All record types, in documentation order.
    pub const ALL: [Self; 9] = [
        Self::OperatingMode,
        Self::DeviceIdentity,
        Self::NetworkId,
        Self::LocationDataMode,
        Self::UpdateRate,
        Self::LocationData,
        Self::ProxyPositions,
        Self::AnchorIds,
        Self::PersistedPosition,
    ];

    /// Returns the record type's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OperatingMode => "operating_mode",
            Self::DeviceIdentity => "device_identity",
            Self::NetworkId => "network_id",
            Self::LocationDataMode => "location_data_mode",
            Self::UpdateRate => "update_rate",
            Self::LocationData => "location_data",
            Self::ProxyPositions => "proxy_positions",
            Self::AnchorIds => "anchor_ids",
            Self::PersistedPosition => "persisted_position",
        }
    }

    /// Returns the shared schema for fixed-length record types, or `None`
    /// for variable-shape types.
    #[must_use]
    pub fn fixed_schema(self) -> Option<&'static RecordSchema> {
        match self {
            Self::OperatingMode => Some(layout::operating_mode()),
            Self::DeviceIdentity => Some(layout::device_identity()),
            Self::NetworkId => Some(layout::network_id()),
            Self::LocationDataMode => Some(layout::location_data_mode()),
            Self::UpdateRate => Some(layout::update_rate()),
            Self::LocationData
            | Self::ProxyPositions
            | Self::AnchorIds
            | Self::PersistedPosition => None,
        }
    }
}
