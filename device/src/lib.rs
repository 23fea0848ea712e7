//! Typed access to the characteristic records of a UWB positioning node.
//!
//! This crate sits above `codec`: it maps each record type to the GATT
//! characteristic that carries it, moves bytes over a pluggable
//! [`Transport`], and exposes read/write helpers plus read-modify-write
//! configuration updates.
//!
//! # Design Principles
//!
//! - **Transport-agnostic.** The [`Transport`] trait is the only seam to
//!   hardware; BLE stacks, serial bridges, and test doubles all plug in
//!   the same way.
//! - **Bytes stop at the boundary.** Every helper decodes on read and
//!   encodes on write; callers only see [`Record`](codec::Record)s and
//!   typed structs.
//! - **Partial updates never clobber.** Configuration setters read the
//!   current record, change only the requested fields, and write the
//!   result back.
//!
//! # Example
//!
//! ```
//! use device::testing::FakeDevice;
//! use device::{ops, OperatingModeUpdate};
//!
//! let mut transport = FakeDevice::tag_defaults();
//! let update = OperatingModeUpdate::new().device_type("Anchor").initiator(true);
//! device::set_operating_mode(&mut transport, &update)?;
//!
//! let mode = ops::read_operating_mode(&mut transport)?;
//! assert_eq!(mode.symbol("device_type"), Some("Anchor"));
//! # Ok::<(), device::DeviceError>(())
//! ```

pub mod configure;
mod error;
pub mod ops;
pub mod source;
pub mod testing;
mod transport;

pub use configure::{
    set_config, set_location_data_mode, set_network_id, set_operating_mode,
    set_persisted_position, set_update_rate, OperatingModeUpdate, PositionUpdate, UpdateRateUpdate,
};
pub use error::{DeviceError, DeviceResult};
pub use ops::DeviceSnapshot;
pub use source::{configure_target, ConfigSource, MapConfigSource, Setting, TargetSettings, TargetUpdate};
pub use transport::{characteristic_uuid, Transport, TransportError, NETWORK_NODE_SERVICE_UUID};
