//! Integration tests exercising record-shaped bit sequences.

use bitstream::{BitCursor, BitError, BitWriter};

/// Packs the field layout of a 2-byte mode record and reads it back.
#[test]
fn mode_record_shaped_sequence() {
    let mut writer = BitWriter::new();
    writer.write_unsigned(1, 1).unwrap(); // device type
    writer.write_unsigned(2, 2).unwrap(); // radio mode
    writer.write_unsigned(1, 1).unwrap(); // firmware generation
    writer.write_bool(true); // accelerometer
    writer.write_bool(false); // led
    writer.write_bool(false); // fw update
    writer.write_unsigned(0, 1).unwrap(); // reserved
    writer.write_bool(true); // initiator
    writer.write_bool(false); // low power
    writer.write_bool(true); // location engine
    writer.write_unsigned(0, 5).unwrap(); // reserved
    let bytes = writer.finish();

    assert_eq!(bytes.len(), 2);
    // byte 0: bits 0..8 = 1, 0b10, 1, 1, 0, 0, 0 -> 0x1D
    // byte 1: bits 0..8 = 1, 0, 1, 00000 -> 0x05
    assert_eq!(bytes, vec![0x1D, 0x05]);

    let mut cursor = BitCursor::new(&bytes);
    assert_eq!(cursor.read_unsigned(1).unwrap(), 1);
    assert_eq!(cursor.read_unsigned(2).unwrap(), 2);
    assert_eq!(cursor.read_unsigned(1).unwrap(), 1);
    assert!(cursor.read_bool().unwrap());
    assert!(!cursor.read_bool().unwrap());
    assert!(!cursor.read_bool().unwrap());
    assert_eq!(cursor.read_unsigned(1).unwrap(), 0);
    assert!(cursor.read_bool().unwrap());
    assert!(!cursor.read_bool().unwrap());
    assert!(cursor.read_bool().unwrap());
    assert_eq!(cursor.read_unsigned(5).unwrap(), 0);
    assert!(cursor.is_empty());
}

/// Packs a position element: three signed 32-bit coordinates and a quality byte.
#[test]
fn position_element_sequence() {
    let mut writer = BitWriter::new();
    writer.write_signed(1500, 32).unwrap();
    writer.write_signed(-2000, 32).unwrap();
    writer.write_signed(0, 32).unwrap();
    writer.write_unsigned(87, 8).unwrap();
    let bytes = writer.finish();

    assert_eq!(bytes.len(), 13);
    assert_eq!(&bytes[0..4], &1500i32.to_le_bytes());
    assert_eq!(&bytes[4..8], &(-2000i32).to_le_bytes());
    assert_eq!(&bytes[8..12], &0i32.to_le_bytes());
    assert_eq!(bytes[12], 87);

    let mut cursor = BitCursor::new(&bytes);
    assert_eq!(cursor.read_signed(32).unwrap(), 1500);
    assert_eq!(cursor.read_signed(32).unwrap(), -2000);
    assert_eq!(cursor.read_signed(32).unwrap(), 0);
    assert_eq!(cursor.read_unsigned(8).unwrap(), 87);
    assert!(cursor.is_empty());
}

#[test]
fn truncated_buffer_reports_available_bits() {
    let bytes = vec![0xAA, 0xBB, 0xCC];
    let mut cursor = BitCursor::new(&bytes);
    cursor.read_unsigned(16).unwrap();
    let err = cursor.read_unsigned(16).unwrap_err();
    assert_eq!(
        err,
        BitError::OutOfRange {
            requested: 16,
            available: 8,
        }
    );
}

#[test]
fn sixty_four_bit_identifier_roundtrip() {
    let node_id: u64 = 0xDECA_0123_4567_89AB;
    let mut writer = BitWriter::new();
    writer.write_unsigned(node_id, 64).unwrap();
    let bytes = writer.finish();
    assert_eq!(bytes, node_id.to_le_bytes());

    let mut cursor = BitCursor::new(&bytes);
    assert_eq!(cursor.read_unsigned(64).unwrap(), node_id);
}
