//! Low-level bit packing primitives for the uwrec record codec.
//!
//! This crate provides [`BitCursor`] and [`BitWriter`] for bit-level decoding
//! and encoding of the little-endian, LSB-first field layout used by UWB
//! positioning node records.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about records,
//!   schemas, or devices.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::{BitWriter, BitCursor};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bool(true);
//! writer.write_unsigned(42, 7).unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut cursor = BitCursor::new(&bytes);
//! assert!(cursor.read_bool().unwrap());
//! assert_eq!(cursor.read_unsigned(7).unwrap(), 42);
//! ```

mod cursor;
mod error;
mod writer;

pub use cursor::BitCursor;
pub use error::{BitError, BitResult};
pub use writer::BitWriter;
