//! Partial configuration updates applied read-modify-write.
//!
//! Each update struct carries only the fields the caller wants to change;
//! the current record is read from the device, the changes are applied
//! copy-on-write, and the result is written back. Symbolic mode names are
//! translated to numeric codes before anything touches the transport, so
//! an unknown name fails without a write.

use codec::{layout, Position, Record};

use crate::error::DeviceResult;
use crate::ops;
use crate::transport::Transport;

/// Quality assigned when seeding a persisted position on a device with no
/// location fix.
const DEFAULT_SEED_QUALITY: u8 = 100;

/// A partial update of the operating mode record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatingModeUpdate {
    pub device_type: Option<String>,
    pub uwb_mode: Option<String>,
    pub accelerometer_enable: Option<bool>,
    pub led_enable: Option<bool>,
    pub initiator: Option<bool>,
    pub low_power_mode: Option<bool>,
    pub location_engine: Option<bool>,
}

impl OperatingModeUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device type by symbolic name ("Tag" or "Anchor").
    #[must_use]
    pub fn device_type(mut self, name: impl Into<String>) -> Self {
        self.device_type = Some(name.into());
        self
    }

    /// Sets the UWB mode by symbolic name ("Off", "Passive", "Active").
    #[must_use]
    pub fn uwb_mode(mut self, name: impl Into<String>) -> Self {
        self.uwb_mode = Some(name.into());
        self
    }

    /// Sets the accelerometer enable flag.
    #[must_use]
    pub const fn accelerometer_enable(mut self, enabled: bool) -> Self {
        self.accelerometer_enable = Some(enabled);
        self
    }

    /// Sets the LED enable flag.
    #[must_use]
    pub const fn led_enable(mut self, enabled: bool) -> Self {
        self.led_enable = Some(enabled);
        self
    }

    /// Sets the initiator flag.
    #[must_use]
    pub const fn initiator(mut self, enabled: bool) -> Self {
        self.initiator = Some(enabled);
        self
    }

    /// Sets the low power mode flag.
    #[must_use]
    pub const fn low_power_mode(mut self, enabled: bool) -> Self {
        self.low_power_mode = Some(enabled);
        self
    }

    /// Sets the location engine flag.
    #[must_use]
    pub const fn location_engine(mut self, enabled: bool) -> Self {
        self.location_engine = Some(enabled);
        self
    }

    /// Applies the update to a record, returning the updated copy.
    ///
    /// # Errors
    ///
    /// Fails with an unknown-name error if a symbolic mode name is not in
    /// its mapping; the input record is untouched.
    pub fn apply(&self, record: &Record) -> DeviceResult<Record> {
        let mut updated = record.clone();
        if let Some(name) = &self.device_type {
            let code = layout::DEVICE_TYPE.reverse(name)?;
            updated = updated.with_value("device_type", code);
        }
        if let Some(name) = &self.uwb_mode {
            let code = layout::UWB_MODE.reverse(name)?;
            updated = updated.with_value("uwb_mode", code);
        }
        for (field, flag) in [
            ("accelerometer_enable", self.accelerometer_enable),
            ("led_enable", self.led_enable),
            ("initiator", self.initiator),
            ("low_power_mode", self.low_power_mode),
            ("location_engine", self.location_engine),
        ] {
            if let Some(value) = flag {
                updated = updated.with_value(field, value);
            }
        }
        Ok(updated)
    }
}

/// A partial update of the tag update rate record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateRateUpdate {
    pub moving_update_rate: Option<u32>,
    pub stationary_update_rate: Option<u32>,
}

impl UpdateRateUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            moving_update_rate: None,
            stationary_update_rate: None,
        }
    }

    /// Sets the moving update rate in milliseconds.
    #[must_use]
    pub const fn moving(mut self, rate_ms: u32) -> Self {
        self.moving_update_rate = Some(rate_ms);
        self
    }

    /// Sets the stationary update rate in milliseconds.
    #[must_use]
    pub const fn stationary(mut self, rate_ms: u32) -> Self {
        self.stationary_update_rate = Some(rate_ms);
        self
    }

    /// Applies the update to a record, returning the updated copy.
    #[must_use]
    pub fn apply(&self, record: &Record) -> Record {
        let mut updated = record.clone();
        if let Some(rate) = self.moving_update_rate {
            updated = updated.with_value("moving_update_rate", u64::from(rate));
        }
        if let Some(rate) = self.stationary_update_rate {
            updated = updated.with_value("stationary_update_rate", u64::from(rate));
        }
        updated
    }
}

/// A partial update of an anchor's persisted position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionUpdate {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub z: Option<i32>,
    pub quality: Option<u8>,
}

impl PositionUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: None,
            y: None,
            z: None,
            quality: None,
        }
    }

    /// Sets the x coordinate.
    #[must_use]
    pub const fn x(mut self, value: i32) -> Self {
        self.x = Some(value);
        self
    }

    /// Sets the y coordinate.
    #[must_use]
    pub const fn y(mut self, value: i32) -> Self {
        self.y = Some(value);
        self
    }

    /// Sets the z coordinate.
    #[must_use]
    pub const fn z(mut self, value: i32) -> Self {
        self.z = Some(value);
        self
    }

    /// Sets the position quality.
    #[must_use]
    pub const fn quality(mut self, value: u8) -> Self {
        self.quality = Some(value);
        self
    }

    /// Applies the update to a base position.
    #[must_use]
    pub fn apply(&self, base: Position) -> Position {
        Position {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            z: self.z.unwrap_or(base.z),
            quality: self.quality.unwrap_or(base.quality),
        }
    }
}

/// Reads the operating mode, applies the update, and writes it back.
pub fn set_operating_mode<T: Transport>(
    transport: &mut T,
    update: &OperatingModeUpdate,
) -> DeviceResult<()> {
    let current = ops::read_operating_mode(transport)?;
    let updated = update.apply(&current)?;
    ops::write_operating_mode(transport, &updated)
}

/// Reads the update rate, applies the update, and writes it back.
pub fn set_update_rate<T: Transport>(
    transport: &mut T,
    update: &UpdateRateUpdate,
) -> DeviceResult<()> {
    let current = ops::read_update_rate(transport)?;
    let updated = update.apply(&current);
    ops::write_update_rate(transport, &updated)
}

/// Writes the location data mode by symbolic name.
pub fn set_location_data_mode<T: Transport>(transport: &mut T, name: &str) -> DeviceResult<()> {
    let code = layout::LOCATION_DATA_MODE.reverse(name)?;
    let record = Record::new("location_data_mode").with_value("location_data_mode", code);
    ops::write_location_data_mode(transport, &record)
}

/// Writes the network id.
pub fn set_network_id<T: Transport>(transport: &mut T, network_id: u16) -> DeviceResult<()> {
    let record = Record::new("network_id").with_value("network_id", u64::from(network_id));
    ops::write_network_id(transport, &record)
}

/// Updates the persisted position, seeding from the device's current
/// location fix, or from the origin with a default quality when the
/// device has no fix yet.
pub fn set_persisted_position<T: Transport>(
    transport: &mut T,
    update: &PositionUpdate,
) -> DeviceResult<()> {
    let location = ops::read_location_data(transport)?;
    let base = location.position.unwrap_or(Position {
        x: 0,
        y: 0,
        z: 0,
        quality: DEFAULT_SEED_QUALITY,
    });
    ops::write_persisted_position(transport, &update.apply(base))
}

/// Applies a whole-device configuration in one pass: operating mode,
/// update rate, and persisted position.
pub fn set_config<T: Transport>(
    transport: &mut T,
    operating_mode: &OperatingModeUpdate,
    update_rate: &UpdateRateUpdate,
    position: &PositionUpdate,
) -> DeviceResult<()> {
    set_operating_mode(transport, operating_mode)?;
    set_update_rate(transport, update_rate)?;
    set_persisted_position(transport, position)?;
    Ok(())
}
