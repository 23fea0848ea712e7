//! Transport abstraction and the characteristic table of the network node
//! service.

use std::fmt;

use codec::RecordType;

/// UUID of the network node service every positioning node exposes.
pub const NETWORK_NODE_SERVICE_UUID: &str = "680c21d9-c946-4c1f-9c11-baa1c21329e7";

/// Returns the characteristic UUID carrying a record type.
#[must_use]
pub const fn characteristic_uuid(record_type: RecordType) -> &'static str {
    match record_type {
        RecordType::OperatingMode => "3f0afd88-7770-46b0-b5e7-9fc099598964",
        RecordType::DeviceIdentity => "1e63b1eb-d4ed-444e-af54-c1e965192501",
        RecordType::NetworkId => "80f9d8bc-3bff-45bb-a181-2d6a37991208",
        RecordType::LocationDataMode => "a02b947e-df97-4516-996a-1882521e0ead",
        RecordType::UpdateRate => "7bd47f30-5602-4389-b069-8305731308b6",
        RecordType::LocationData => "003bbdf2-c634-4b3d-ab56-7ec889b89a37",
        RecordType::ProxyPositions => "f4a67d7d-379d-4183-9c03-4b6ea5103291",
        RecordType::AnchorIds => "5b10c428-af2f-486f-aee1-9dbd79b6bccb",
        RecordType::PersistedPosition => "f0f26c9b-2c8c-49ac-ab60-fe03def1b40c",
    }
}

/// Errors a transport may report.
///
/// The codec layer treats these as opaque and never retries; retry policy
/// belongs to whichever layer owns the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The connection to the device dropped.
    ConnectionLost,

    /// The operation did not complete in time.
    Timeout,

    /// Any other transport-specific failure.
    Other(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionLost => write!(f, "connection lost"),
            Self::Timeout => write!(f, "operation timed out"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// A byte-level channel to one device's characteristics.
///
/// Implementations wrap whatever link reaches the hardware (a BLE
/// peripheral handle, a serial bridge, a test double). They move raw
/// buffers only; all interpretation happens in the codec.
pub trait Transport {
    /// Reads the raw bytes of one characteristic record.
    fn read(&mut self, record_type: RecordType) -> Result<Vec<u8>, TransportError>;

    /// Writes the raw bytes of one characteristic record.
    fn write(&mut self, record_type: RecordType, bytes: &[u8]) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_record_type_has_a_uuid() {
        let mut uuids: Vec<_> = RecordType::ALL
            .iter()
            .map(|r| characteristic_uuid(*r))
            .collect();
        uuids.sort_unstable();
        uuids.dedup();
        assert_eq!(uuids.len(), RecordType::ALL.len(), "UUIDs must be distinct");
    }

    #[test]
    fn uuids_are_well_formed() {
        for record_type in RecordType::ALL {
            let uuid = characteristic_uuid(record_type);
            assert_eq!(uuid.len(), 36);
            assert_eq!(uuid.matches('-').count(), 4);
        }
    }

    #[test]
    fn transport_error_display() {
        assert_eq!(TransportError::ConnectionLost.to_string(), "connection lost");
        assert_eq!(TransportError::Timeout.to_string(), "operation timed out");
        assert_eq!(
            TransportError::Other("gatt failure".to_string()).to_string(),
            "gatt failure"
        );
    }
}
