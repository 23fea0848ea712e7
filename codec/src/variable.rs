//! Codec for variable-shape records: location data, proxy positions, and
//! anchor lists.
//!
//! All three follow the same conventions: a completely empty buffer means
//! "not present" (distinct from a present-but-empty list), sub-records are
//! byte-aligned, and decode must consume the buffer exactly. Count bytes
//! are always computed from the elements supplied on encode, never taken
//! as separate input.

use bitstream::{BitCursor, BitWriter};

use crate::error::{CodecError, CodecResult};
use crate::validate;

/// Maximum elements representable by the one-byte count prefix.
const MAX_LIST_ELEMENTS: usize = u8::MAX as usize;

/// Byte length of a position sub-record.
pub const POSITION_LEN: usize = 13;

/// A position sub-record: three signed coordinates plus a quality byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub quality: u8,
}

/// One measured distance to another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    pub node_id: u16,
    pub distance: u32,
    pub quality: u8,
}

/// A position relayed on behalf of another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProxyPosition {
    pub node_id: u16,
    pub position: Position,
}

/// The content discriminator of a location data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationContent {
    /// Position sub-record only.
    Position,
    /// Distance list only.
    Distances,
    /// Both position and distance list.
    PositionAndDistances,
}

impl LocationContent {
    /// Returns the wire code for this content kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Position => 0,
            Self::Distances => 1,
            Self::PositionAndDistances => 2,
        }
    }

    /// Returns the symbolic name shared with the location-data-mode record.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "Position",
            Self::Distances => "Distances",
            Self::PositionAndDistances => "Position and distances",
        }
    }
}

/// A decoded location data record.
///
/// A device that has not yet produced a location fix reports an empty
/// buffer, which decodes to both parts absent; this is a valid state, not
/// an error. Absent parts are never zero-filled placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationData {
    pub position: Option<Position>,
    pub distances: Option<Vec<Distance>>,
}

impl LocationData {
    /// Returns the content discriminator implied by which parts are
    /// present, or `None` when the record is empty.
    #[must_use]
    pub fn content(&self) -> Option<LocationContent> {
        match (&self.position, &self.distances) {
            (Some(_), Some(_)) => Some(LocationContent::PositionAndDistances),
            (Some(_), None) => Some(LocationContent::Position),
            (None, Some(_)) => Some(LocationContent::Distances),
            (None, None) => None,
        }
    }
}

/// Decodes a location data record.
///
/// # Errors
///
/// Returns [`CodecError::InvalidDiscriminator`] if the leading byte is
/// above 2, and [`CodecError::TrailingData`] or a bitstream error if the
/// buffer length disagrees with the discriminator and count.
pub fn decode_location_data(bytes: &[u8]) -> CodecResult<LocationData> {
    if bytes.is_empty() {
        return Ok(LocationData::default());
    }

    let mut cursor = BitCursor::new(bytes);
    let discriminator = cursor.read_unsigned(8)? as u8;
    if discriminator > 2 {
        return Err(CodecError::InvalidDiscriminator {
            found: discriminator,
        });
    }

    let position = if discriminator == 0 || discriminator == 2 {
        Some(read_position(&mut cursor)?)
    } else {
        None
    };

    let distances = if discriminator == 1 || discriminator == 2 {
        let count = cursor.read_unsigned(8)?;
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            entries.push(Distance {
                node_id: cursor.read_unsigned(16)? as u16,
                distance: cursor.read_unsigned(32)? as u32,
                quality: cursor.read_unsigned(8)? as u8,
            });
        }
        Some(entries)
    } else {
        None
    };

    validate::fully_consumed("location_data", &cursor)?;
    Ok(LocationData {
        position,
        distances,
    })
}

/// Encodes a location data record, deriving the discriminator from which
/// parts are present. An empty record encodes to an empty buffer.
///
/// # Errors
///
/// Returns [`CodecError::TooManyElements`] if the distance list exceeds
/// the one-byte count prefix.
pub fn encode_location_data(data: &LocationData) -> CodecResult<Vec<u8>> {
    let Some(content) = data.content() else {
        return Ok(Vec::new());
    };

    let mut writer = BitWriter::new();
    writer.write_unsigned(u64::from(content.code()), 8)?;
    if let Some(position) = &data.position {
        write_position(&mut writer, position)?;
    }
    if let Some(distances) = &data.distances {
        write_count(&mut writer, "location_data", distances.len())?;
        for entry in distances {
            writer.write_unsigned(u64::from(entry.node_id), 16)?;
            writer.write_unsigned(u64::from(entry.distance), 32)?;
            writer.write_unsigned(u64::from(entry.quality), 8)?;
        }
    }
    Ok(writer.finish())
}

/// Decodes a proxy positions record.
///
/// An empty buffer means "no list present" and decodes to `None`; a zero
/// count byte decodes to `Some` of an empty list. The two round-trip
/// distinctly.
pub fn decode_proxy_positions(bytes: &[u8]) -> CodecResult<Option<Vec<ProxyPosition>>> {
    if bytes.is_empty() {
        return Ok(None);
    }

    let mut cursor = BitCursor::new(bytes);
    let count = cursor.read_unsigned(8)?;
    let mut positions = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let node_id = cursor.read_unsigned(16)? as u16;
        let position = read_position(&mut cursor)?;
        positions.push(ProxyPosition { node_id, position });
    }

    validate::fully_consumed("proxy_positions", &cursor)?;
    Ok(Some(positions))
}

/// Encodes a proxy positions record; `None` encodes to an empty buffer.
pub fn encode_proxy_positions(positions: Option<&[ProxyPosition]>) -> CodecResult<Vec<u8>> {
    let Some(positions) = positions else {
        return Ok(Vec::new());
    };

    let mut writer = BitWriter::new();
    write_count(&mut writer, "proxy_positions", positions.len())?;
    for proxy in positions {
        writer.write_unsigned(u64::from(proxy.node_id), 16)?;
        write_position(&mut writer, &proxy.position)?;
    }
    Ok(writer.finish())
}

/// Decodes an anchor id list record.
///
/// Follows the same absent-versus-empty convention as proxy positions.
pub fn decode_anchor_ids(bytes: &[u8]) -> CodecResult<Option<Vec<u16>>> {
    if bytes.is_empty() {
        return Ok(None);
    }

    let mut cursor = BitCursor::new(bytes);
    let count = cursor.read_unsigned(8)?;
    let mut ids = Vec::with_capacity(count as usize);
    for _ in 0..count {
        ids.push(cursor.read_unsigned(16)? as u16);
    }

    validate::fully_consumed("anchor_ids", &cursor)?;
    Ok(Some(ids))
}

/// Encodes an anchor id list record; `None` encodes to an empty buffer.
pub fn encode_anchor_ids(ids: Option<&[u16]>) -> CodecResult<Vec<u8>> {
    let Some(ids) = ids else {
        return Ok(Vec::new());
    };

    let mut writer = BitWriter::new();
    write_count(&mut writer, "anchor_ids", ids.len())?;
    for id in ids {
        writer.write_unsigned(u64::from(*id), 16)?;
    }
    Ok(writer.finish())
}

/// Decodes a standalone 13-byte position record.
///
/// The persisted-position characteristic is write-only on hardware, but
/// decode is provided for symmetry; it reuses the position element layout
/// of the location data record.
pub fn decode_position(bytes: &[u8]) -> CodecResult<Position> {
    if bytes.len() != POSITION_LEN {
        return Err(CodecError::LengthMismatch {
            record: "position",
            expected: POSITION_LEN,
            actual: bytes.len(),
        });
    }
    let mut cursor = BitCursor::new(bytes);
    let position = read_position(&mut cursor)?;
    validate::fully_consumed("position", &cursor)?;
    Ok(position)
}

/// Encodes a standalone 13-byte position record.
pub fn encode_position(position: &Position) -> CodecResult<Vec<u8>> {
    let mut writer = BitWriter::with_capacity(POSITION_LEN);
    write_position(&mut writer, position)?;
    Ok(writer.finish())
}

fn read_position(cursor: &mut BitCursor<'_>) -> CodecResult<Position> {
    Ok(Position {
        x: cursor.read_signed(32)? as i32,
        y: cursor.read_signed(32)? as i32,
        z: cursor.read_signed(32)? as i32,
        quality: cursor.read_unsigned(8)? as u8,
    })
}

fn write_position(writer: &mut BitWriter, position: &Position) -> CodecResult<()> {
    writer.write_signed(i64::from(position.x), 32)?;
    writer.write_signed(i64::from(position.y), 32)?;
    writer.write_signed(i64::from(position.z), 32)?;
    writer.write_unsigned(u64::from(position.quality), 8)?;
    Ok(())
}

fn write_count(writer: &mut BitWriter, record: &'static str, count: usize) -> CodecResult<()> {
    if count > MAX_LIST_ELEMENTS {
        return Err(CodecError::TooManyElements {
            record,
            count,
            max: MAX_LIST_ELEMENTS,
        });
    }
    writer.write_unsigned(count as u64, 8)?;
    Ok(())
}
