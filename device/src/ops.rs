//! Typed read/write operations over a transport.
//!
//! Each helper pairs one characteristic with its codec: it moves raw
//! bytes across the [`Transport`] and converts them at the boundary, so
//! callers never touch wire buffers.

use codec::{
    decode_anchor_ids, decode_fixed, decode_location_data, decode_proxy_positions, encode_fixed,
    encode_position, layout, LocationData, Position, ProxyPosition, Record, RecordType,
};

use crate::error::DeviceResult;
use crate::transport::Transport;

/// Everything readable from one device in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSnapshot {
    pub operating_mode: Record,
    pub device_identity: Record,
    pub network_id: Option<Record>,
    pub location_data_mode: Record,
    pub location_data: LocationData,
    pub proxy_positions: Option<Vec<ProxyPosition>>,
    pub anchor_ids: Option<Vec<u16>>,
    pub update_rate: Record,
}

/// Reads and decodes the operating mode record.
pub fn read_operating_mode<T: Transport>(transport: &mut T) -> DeviceResult<Record> {
    let bytes = transport.read(RecordType::OperatingMode)?;
    Ok(decode_fixed(layout::operating_mode(), &bytes)?)
}

/// Encodes and writes the operating mode record.
pub fn write_operating_mode<T: Transport>(transport: &mut T, record: &Record) -> DeviceResult<()> {
    let bytes = encode_fixed(layout::operating_mode(), record)?;
    transport.write(RecordType::OperatingMode, &bytes)?;
    Ok(())
}

/// Reads and decodes the device identity record.
pub fn read_device_identity<T: Transport>(transport: &mut T) -> DeviceResult<Record> {
    let bytes = transport.read(RecordType::DeviceIdentity)?;
    Ok(decode_fixed(layout::device_identity(), &bytes)?)
}

/// Reads the network id record.
///
/// A node that has not joined a network reports an empty characteristic;
/// that decodes to `None` rather than an error.
pub fn read_network_id<T: Transport>(transport: &mut T) -> DeviceResult<Option<Record>> {
    let bytes = transport.read(RecordType::NetworkId)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(decode_fixed(layout::network_id(), &bytes)?))
}

/// Encodes and writes the network id record.
pub fn write_network_id<T: Transport>(transport: &mut T, record: &Record) -> DeviceResult<()> {
    let bytes = encode_fixed(layout::network_id(), record)?;
    transport.write(RecordType::NetworkId, &bytes)?;
    Ok(())
}

/// Reads and decodes the location data mode record.
pub fn read_location_data_mode<T: Transport>(transport: &mut T) -> DeviceResult<Record> {
    let bytes = transport.read(RecordType::LocationDataMode)?;
    Ok(decode_fixed(layout::location_data_mode(), &bytes)?)
}

/// Encodes and writes the location data mode record.
pub fn write_location_data_mode<T: Transport>(
    transport: &mut T,
    record: &Record,
) -> DeviceResult<()> {
    let bytes = encode_fixed(layout::location_data_mode(), record)?;
    transport.write(RecordType::LocationDataMode, &bytes)?;
    Ok(())
}

/// Reads and decodes the location data record.
pub fn read_location_data<T: Transport>(transport: &mut T) -> DeviceResult<LocationData> {
    let bytes = transport.read(RecordType::LocationData)?;
    Ok(decode_location_data(&bytes)?)
}

/// Reads and decodes the proxy positions record.
pub fn read_proxy_positions<T: Transport>(
    transport: &mut T,
) -> DeviceResult<Option<Vec<ProxyPosition>>> {
    let bytes = transport.read(RecordType::ProxyPositions)?;
    Ok(decode_proxy_positions(&bytes)?)
}

/// Reads and decodes the anchor id list record.
pub fn read_anchor_ids<T: Transport>(transport: &mut T) -> DeviceResult<Option<Vec<u16>>> {
    let bytes = transport.read(RecordType::AnchorIds)?;
    Ok(decode_anchor_ids(&bytes)?)
}

/// Reads and decodes the update rate record.
pub fn read_update_rate<T: Transport>(transport: &mut T) -> DeviceResult<Record> {
    let bytes = transport.read(RecordType::UpdateRate)?;
    Ok(decode_fixed(layout::update_rate(), &bytes)?)
}

/// Encodes and writes the update rate record.
pub fn write_update_rate<T: Transport>(transport: &mut T, record: &Record) -> DeviceResult<()> {
    let bytes = encode_fixed(layout::update_rate(), record)?;
    transport.write(RecordType::UpdateRate, &bytes)?;
    Ok(())
}

/// Encodes and writes the persisted position record.
///
/// The characteristic is write-only on hardware; there is no matching
/// read helper.
pub fn write_persisted_position<T: Transport>(
    transport: &mut T,
    position: &Position,
) -> DeviceResult<()> {
    let bytes = encode_position(position)?;
    transport.write(RecordType::PersistedPosition, &bytes)?;
    Ok(())
}

/// Reads every readable record of one device.
pub fn read_all<T: Transport>(transport: &mut T) -> DeviceResult<DeviceSnapshot> {
    Ok(DeviceSnapshot {
        operating_mode: read_operating_mode(transport)?,
        device_identity: read_device_identity(transport)?,
        network_id: read_network_id(transport)?,
        location_data_mode: read_location_data_mode(transport)?,
        location_data: read_location_data(transport)?,
        proxy_positions: read_proxy_positions(transport)?,
        anchor_ids: read_anchor_ids(transport)?,
        update_rate: read_update_rate(transport)?,
    })
}
