//! Configuration sources: named bundles of desired device settings.
//!
//! A [`ConfigSource`] answers "which targets do I know about, and what
//! should each look like?" as a plain name-to-value mapping. The mapping
//! is translated into partial updates before anything touches a
//! transport, so a typo in a setting key or a wrong-typed value fails
//! without a write.

use std::collections::BTreeMap;

use crate::configure::{self, OperatingModeUpdate, PositionUpdate, UpdateRateUpdate};
use crate::error::{DeviceError, DeviceResult};
use crate::transport::Transport;

/// One desired setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    /// A symbolic name, e.g. a device type or UWB mode.
    Text(String),

    /// An unsigned quantity, e.g. an update rate or network id.
    Unsigned(u64),

    /// A signed quantity, e.g. a position coordinate.
    Signed(i64),

    /// A boolean flag.
    Flag(bool),
}

impl From<&str> for Setting {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<u64> for Setting {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<i64> for Setting {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<bool> for Setting {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Desired settings for one target, keyed by setting name.
pub type TargetSettings = BTreeMap<String, Setting>;

/// A provider of per-target desired settings.
///
/// Implementations own the storage format (a CSV file, a database, a
/// hard-coded table in a test); this crate only reads the mapping.
pub trait ConfigSource {
    /// Names of all targets this source knows about.
    fn target_names(&self) -> Vec<String>;

    /// The desired settings for one target, or `None` if unknown.
    fn target_settings(&self, name: &str) -> Option<TargetSettings>;
}

/// An in-memory config source backed by a name-to-settings map.
#[derive(Debug, Clone, Default)]
pub struct MapConfigSource {
    targets: BTreeMap<String, TargetSettings>,
}

impl MapConfigSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a target's settings.
    pub fn insert(&mut self, name: impl Into<String>, settings: TargetSettings) {
        self.targets.insert(name.into(), settings);
    }
}

impl ConfigSource for MapConfigSource {
    fn target_names(&self) -> Vec<String> {
        self.targets.keys().cloned().collect()
    }

    fn target_settings(&self, name: &str) -> Option<TargetSettings> {
        self.targets.get(name).cloned()
    }
}

/// The partial updates distilled from one target's settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetUpdate {
    pub operating_mode: OperatingModeUpdate,
    pub update_rate: UpdateRateUpdate,
    pub position: PositionUpdate,
    pub network_id: Option<u16>,
    pub location_data_mode: Option<String>,
}

impl TargetUpdate {
    /// Translates a settings mapping into typed partial updates.
    ///
    /// # Errors
    ///
    /// Fails with [`DeviceError::InvalidSetting`] on an unrecognized key,
    /// a wrong-typed value, or a value outside its field's range.
    pub fn from_settings(settings: &TargetSettings) -> DeviceResult<Self> {
        let mut update = Self::default();
        for (key, value) in settings {
            match key.as_str() {
                "device_type" => {
                    update.operating_mode.device_type = Some(text(key, value)?);
                }
                "uwb_mode" => {
                    update.operating_mode.uwb_mode = Some(text(key, value)?);
                }
                "accelerometer_enable" => {
                    update.operating_mode.accelerometer_enable = Some(flag(key, value)?);
                }
                "led_enable" => {
                    update.operating_mode.led_enable = Some(flag(key, value)?);
                }
                "initiator" => {
                    update.operating_mode.initiator = Some(flag(key, value)?);
                }
                "low_power_mode" => {
                    update.operating_mode.low_power_mode = Some(flag(key, value)?);
                }
                "location_engine" => {
                    update.operating_mode.location_engine = Some(flag(key, value)?);
                }
                "moving_update_rate" => {
                    update.update_rate.moving_update_rate = Some(unsigned_u32(key, value)?);
                }
                "stationary_update_rate" => {
                    update.update_rate.stationary_update_rate = Some(unsigned_u32(key, value)?);
                }
                "x" => update.position.x = Some(signed_i32(key, value)?),
                "y" => update.position.y = Some(signed_i32(key, value)?),
                "z" => update.position.z = Some(signed_i32(key, value)?),
                "quality" => update.position.quality = Some(unsigned_u8(key, value)?),
                "network_id" => update.network_id = Some(unsigned_u16(key, value)?),
                "location_data_mode" => {
                    update.location_data_mode = Some(text(key, value)?);
                }
                _ => {
                    return Err(DeviceError::InvalidSetting {
                        key: key.clone(),
                        reason: "unrecognized setting",
                    })
                }
            }
        }
        Ok(update)
    }

    /// Applies every present update to a device.
    pub fn apply<T: Transport>(&self, transport: &mut T) -> DeviceResult<()> {
        if let Some(network_id) = self.network_id {
            configure::set_network_id(transport, network_id)?;
        }
        if let Some(name) = &self.location_data_mode {
            configure::set_location_data_mode(transport, name)?;
        }
        if self.operating_mode != OperatingModeUpdate::default() {
            configure::set_operating_mode(transport, &self.operating_mode)?;
        }
        if self.update_rate != UpdateRateUpdate::default() {
            configure::set_update_rate(transport, &self.update_rate)?;
        }
        if self.position != PositionUpdate::default() {
            configure::set_persisted_position(transport, &self.position)?;
        }
        Ok(())
    }
}

/// Looks up a target in a source and applies its settings to a device.
///
/// # Errors
///
/// Fails with [`DeviceError::InvalidSetting`] when the target is unknown
/// to the source or any of its settings does not translate; nothing is
/// written in that case.
pub fn configure_target<T: Transport, S: ConfigSource>(
    transport: &mut T,
    source: &S,
    target: &str,
) -> DeviceResult<()> {
    let settings = source
        .target_settings(target)
        .ok_or_else(|| DeviceError::InvalidSetting {
            key: target.to_string(),
            reason: "unknown target name",
        })?;
    TargetUpdate::from_settings(&settings)?.apply(transport)
}

fn text(key: &str, value: &Setting) -> DeviceResult<String> {
    match value {
        Setting::Text(name) => Ok(name.clone()),
        _ => Err(invalid(key, "expected a symbolic name")),
    }
}

fn flag(key: &str, value: &Setting) -> DeviceResult<bool> {
    match value {
        Setting::Flag(flag) => Ok(*flag),
        _ => Err(invalid(key, "expected a boolean")),
    }
}

fn unsigned_u32(key: &str, value: &Setting) -> DeviceResult<u32> {
    match value {
        Setting::Unsigned(raw) => {
            u32::try_from(*raw).map_err(|_| invalid(key, "expected a 32-bit unsigned value"))
        }
        _ => Err(invalid(key, "expected an unsigned value")),
    }
}

fn unsigned_u16(key: &str, value: &Setting) -> DeviceResult<u16> {
    match value {
        Setting::Unsigned(raw) => {
            u16::try_from(*raw).map_err(|_| invalid(key, "expected a 16-bit unsigned value"))
        }
        _ => Err(invalid(key, "expected an unsigned value")),
    }
}

fn unsigned_u8(key: &str, value: &Setting) -> DeviceResult<u8> {
    match value {
        Setting::Unsigned(raw) => {
            u8::try_from(*raw).map_err(|_| invalid(key, "expected an 8-bit unsigned value"))
        }
        _ => Err(invalid(key, "expected an unsigned value")),
    }
}

fn signed_i32(key: &str, value: &Setting) -> DeviceResult<i32> {
    match value {
        Setting::Signed(raw) => {
            i32::try_from(*raw).map_err(|_| invalid(key, "expected a 32-bit signed value"))
        }
        _ => Err(invalid(key, "expected a signed value")),
    }
}

fn invalid(key: &str, reason: &'static str) -> DeviceError {
    DeviceError::InvalidSetting {
        key: key.to_string(),
        reason,
    }
}
