//! An in-memory transport double for exercising device operations
//! without hardware.

use std::collections::HashMap;

use codec::RecordType;

use crate::transport::{Transport, TransportError};

/// A fake device backed by per-characteristic byte buffers.
///
/// Reads return the stored buffer for the record type; writes are
/// recorded and also replace the stored buffer, so a read-modify-write
/// sequence observes its own writes the way real hardware does.
#[derive(Debug, Clone, Default)]
pub struct FakeDevice {
    records: HashMap<RecordType, Vec<u8>>,
    writes: HashMap<RecordType, Vec<u8>>,
    fail_next: Option<TransportError>,
}

impl FakeDevice {
    /// Creates a device with no stored records; every read fails until
    /// buffers are seeded with [`set`](Self::set).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a device preloaded with plausible tag defaults: operating
    /// mode Tag/Active, a joined network, a position fix, and no anchor
    /// list.
    #[must_use]
    pub fn tag_defaults() -> Self {
        let mut device = Self::new();
        // Tag, Active, fw 2, accelerometer on, location engine on.
        device.set(RecordType::OperatingMode, vec![0x1C, 0x04]);

        let mut identity = Vec::with_capacity(25);
        identity.extend_from_slice(&0xDECA_0123_4567_89ABu64.to_le_bytes());
        identity.extend_from_slice(&1u32.to_le_bytes());
        identity.extend_from_slice(&0x0001_0203u32.to_le_bytes());
        identity.extend_from_slice(&0x0004_0506u32.to_le_bytes());
        identity.extend_from_slice(&0xAAAA_AAAAu32.to_le_bytes());
        identity.extend_from_slice(&0xBBBB_BBBBu32.to_le_bytes());
        identity.push(0x00);
        device.set(RecordType::DeviceIdentity, identity);

        device.set(RecordType::NetworkId, 0x1234u16.to_le_bytes().to_vec());
        device.set(RecordType::LocationDataMode, vec![0x00]);

        let mut location = vec![0x00];
        location.extend_from_slice(&1000i32.to_le_bytes());
        location.extend_from_slice(&2000i32.to_le_bytes());
        location.extend_from_slice(&0i32.to_le_bytes());
        location.push(85);
        device.set(RecordType::LocationData, location);

        device.set(RecordType::ProxyPositions, Vec::new());
        device.set(RecordType::AnchorIds, Vec::new());

        let mut rate = Vec::with_capacity(8);
        rate.extend_from_slice(&100u32.to_le_bytes());
        rate.extend_from_slice(&1000u32.to_le_bytes());
        device.set(RecordType::UpdateRate, rate);

        device
    }

    /// Stores the raw bytes behind a record type.
    pub fn set(&mut self, record_type: RecordType, bytes: Vec<u8>) {
        self.records.insert(record_type, bytes);
    }

    /// Returns the bytes most recently written to a record type, if any.
    #[must_use]
    pub fn written(&self, record_type: RecordType) -> Option<Vec<u8>> {
        self.writes.get(&record_type).cloned()
    }

    /// Makes the next transport call fail with the given error.
    pub fn fail_next(&mut self, error: TransportError) {
        self.fail_next = Some(error);
    }

    fn take_failure(&mut self) -> Result<(), TransportError> {
        match self.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Transport for FakeDevice {
    fn read(&mut self, record_type: RecordType) -> Result<Vec<u8>, TransportError> {
        self.take_failure()?;
        self.records.get(&record_type).cloned().ok_or_else(|| {
            TransportError::Other(format!("no stored record for {}", record_type.name()))
        })
    }

    fn write(&mut self, record_type: RecordType, bytes: &[u8]) -> Result<(), TransportError> {
        self.take_failure()?;
        self.writes.insert(record_type, bytes.to_vec());
        self.records.insert(record_type, bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_of_unseeded_record_fails() {
        let mut device = FakeDevice::new();
        assert!(device.read(RecordType::OperatingMode).is_err());
    }

    #[test]
    fn writes_are_recorded_and_readable_back() {
        let mut device = FakeDevice::new();
        device.write(RecordType::NetworkId, &[0xEF, 0xBE]).unwrap();
        assert_eq!(device.written(RecordType::NetworkId), Some(vec![0xEF, 0xBE]));
        assert_eq!(device.read(RecordType::NetworkId).unwrap(), vec![0xEF, 0xBE]);
    }

    #[test]
    fn injected_failure_fires_once() {
        let mut device = FakeDevice::tag_defaults();
        device.fail_next(TransportError::Timeout);
        assert_eq!(
            device.read(RecordType::NetworkId),
            Err(TransportError::Timeout)
        );
        assert!(device.read(RecordType::NetworkId).is_ok());
    }

    #[test]
    fn tag_defaults_cover_every_record_type_but_persisted_position() {
        let mut device = FakeDevice::tag_defaults();
        for record_type in RecordType::ALL {
            if record_type == RecordType::PersistedPosition {
                assert!(device.read(record_type).is_err());
            } else {
                assert!(device.read(record_type).is_ok());
            }
        }
    }
}
