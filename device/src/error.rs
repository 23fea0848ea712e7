//! Error types for device operations.

use std::fmt;

use crate::transport::TransportError;

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors that can occur while reading or configuring a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The transport failed; opaque to this crate and never retried here.
    Transport(TransportError),

    /// The record codec rejected the bytes or the record.
    Codec(codec::CodecError),

    /// A configuration setting did not translate to a device field.
    InvalidSetting {
        key: String,
        reason: &'static str,
    },
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport error: {e}"),
            Self::Codec(e) => write!(f, "codec error: {e}"),
            Self::InvalidSetting { key, reason } => {
                write!(f, "setting '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Codec(e) => Some(e),
            Self::InvalidSetting { .. } => None,
        }
    }
}

impl From<TransportError> for DeviceError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<codec::CodecError> for DeviceError {
    fn from(err: codec::CodecError) -> Self {
        Self::Codec(err)
    }
}

impl From<schema::SchemaError> for DeviceError {
    fn from(err: schema::SchemaError) -> Self {
        Self::Codec(codec::CodecError::Schema(err))
    }
}
