//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! Tests for the low-level access functions of [`RomData`].
//!
//! [`RomData`]: crate::rom::RomData

use crate::binary::ReadBytes;
use crate::error::GLibError;

use super::*;

#[test]
fn test_header_detection() {

    // No header: it gets a blank one, and loses it again on export.
    let data = vec![0x78, 0x18, 0x01, 0x02];
    let rom = RomData::new(data.to_vec());
    assert!(!rom.is_headered());
    assert_eq!(rom.len(), HEADER_SIZE + 4);
    assert_eq!(&rom.data()[HEADER_SIZE..], &data[..]);
    assert_eq!(rom.into_bytes(), data);

    // With header: untouched.
    let data = vec![0x00; 0x20];
    let rom = RomData::new(data.to_vec());
    assert!(rom.is_headered());
    assert_eq!(rom.len(), 0x20);
    assert_eq!(rom.into_bytes(), data);

    assert!(RomData::new(vec![]).is_empty());
}

#[test]
fn test_read_write_wide() {
    let mut rom = RomData::new(vec![0; 0x20]);

    rom.write_wide(0x00, 0xAB, 1).unwrap();
    rom.write_wide(0x01, 0x1234, 2).unwrap();
    rom.write_wide(0x03, 0x563412, 3).unwrap();
    rom.write_wide(0x06, 0xDEADBEEF, 4).unwrap();
    assert_eq!(&rom.data()[..0x0A], &[0xAB, 0x34, 0x12, 0x12, 0x34, 0x56, 0xEF, 0xBE, 0xAD, 0xDE]);

    assert_eq!(rom.read_wide(0x00, 1).unwrap(), 0xAB);
    assert_eq!(rom.read_wide(0x01, 2).unwrap(), 0x1234);
    assert_eq!(rom.read_wide(0x03, 3).unwrap(), 0x563412);
    assert_eq!(rom.read_wide(0x06, 4).unwrap(), 0xDEADBEEF);

    // Bits that don't fit are lost.
    rom.write_wide(0x10, 0x12345, 2).unwrap();
    assert_eq!(rom.read_wide(0x10, 2).unwrap(), 0x2345);
    assert_eq!(rom.read_wide(0x12, 1).unwrap(), 0);
}

#[test]
fn test_read_write_wide_errors() {
    let mut rom = RomData::new(vec![0; 0x20]);
    assert!(matches!(rom.read_wide(0x00, 0), Err(GLibError::UnsupportedWideIntegerWidth(0))));
    assert!(matches!(rom.read_wide(0x00, 5), Err(GLibError::UnsupportedWideIntegerWidth(5))));
    assert!(matches!(rom.read_wide(0x1F, 2), Err(GLibError::AddressOutOfBounds(0x1F, 2, 0x20))));
    assert!(matches!(rom.write_wide(0x1E, 1, 4), Err(GLibError::AddressOutOfBounds(0x1E, 4, 0x20))));
    assert!(matches!(rom.write_wide(usize::MAX, 1, 4), Err(GLibError::AddressOutOfBounds(_, 4, 0x20))));
}

#[test]
fn test_flags() {
    let mut rom = RomData::new(vec![0; 0x20]);
    rom.set_bit(0x05, 7, true).unwrap();
    rom.set_bit(0x05, 0, true).unwrap();
    assert_eq!(rom.data()[0x05], 0x81);
    assert!(rom.flag(0x05, 7).unwrap());
    assert!(!rom.flag(0x05, 6).unwrap());

    rom.set_bit(0x05, 7, false).unwrap();
    assert_eq!(rom.data()[0x05], 0x01);

    assert!(matches!(rom.flag(0x05, 8), Err(GLibError::InvalidBitIndex(8))));
    assert!(matches!(rom.set_bit(0x20, 0, true), Err(GLibError::AddressOutOfBounds(0x20, 1, 0x20))));
}

#[test]
fn test_inject() {
    let mut rom = RomData::new(vec![0; 0x20]);
    rom.inject(0x1C, &[1, 2, 3, 4]).unwrap();
    assert_eq!(&rom.data()[0x1C..], &[1, 2, 3, 4]);

    let before = rom.clone();
    assert!(matches!(rom.inject(0x1D, &[1, 2, 3, 4]), Err(GLibError::AddressOutOfBounds(0x1D, 4, 0x20))));
    assert_eq!(rom, before);
}

#[test]
fn test_readers() {
    let rom = RomData::new((0..0x20).collect());

    let mut reader = rom.reader_at(0x1E).unwrap();
    assert_eq!(reader.read_u8().unwrap(), 0x1E);
    assert_eq!(reader.read_u8().unwrap(), 0x1F);
    assert!(reader.read_u8().is_err());

    // Bounded readers can't read past their end.
    let mut reader = rom.reader_range(0x04, 0x06).unwrap();
    assert_eq!(reader.read_u16().unwrap(), 0x0504);
    assert!(reader.is_at_end().unwrap());
    assert!(reader.read_u8().is_err());

    assert!(rom.reader_range(0x06, 0x06).unwrap().is_at_end().unwrap());
    assert!(matches!(rom.reader_range(0x06, 0x04), Err(GLibError::InvalidRange(0x06, 0x04))));
    assert!(matches!(rom.reader_range(0x10, 0x21), Err(GLibError::AddressOutOfBounds(0x10, 0x11, 0x20))));
    assert!(matches!(rom.reader_at(0x21), Err(GLibError::AddressOutOfBounds(0x21, 0, 0x20))));
}
