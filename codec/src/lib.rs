//! Fixed and variable record encoding/decoding for UWB positioning nodes.
//!
//! This is the main codec crate. It ties together bitstream and schema to
//! translate the byte buffers read from (and written to) a node's
//! characteristics into structured records:
//!
//! - Schema-driven [`decode_fixed`]/[`encode_fixed`] for constant-length
//!   records (operating mode, device identity, network id, location data
//!   mode, update rate)
//! - Typed codecs for the variable-shape records (location data, proxy
//!   positions, anchor ids) and the standalone persisted position
//! - The shared protocol layouts and enum mappings in [`layout`]
//!
//! # Design Principles
//!
//! - **Pure functions** - No I/O, no retries; given these exact bytes,
//!   produce this exact record, or fail deterministically.
//! - **Strict validation** - Declared and consumed lengths must agree;
//!   malformed input surfaces as a typed error, never a default.
//! - **Byte-exact round-trips** - Decode preserves every bit, including
//!   reserved fields, so re-encoding reproduces the input buffer.

mod error;
mod fixed;
pub mod layout;
mod record;
mod types;
mod validate;
mod variable;

pub use error::{CodecError, CodecResult};
pub use fixed::{decode_fixed, encode_fixed};
pub use record::{Record, Value};
pub use types::RecordType;
pub use variable::{
    decode_anchor_ids, decode_location_data, decode_position, decode_proxy_positions,
    encode_anchor_ids, encode_location_data, encode_position, encode_proxy_positions, Distance,
    LocationContent, LocationData, Position, ProxyPosition, POSITION_LEN,
};
