//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
This module contains [RomData], the in-memory copy of the rom, and all the low-level ways to access it.

Every address used by this crate is an absolute offset into a rom **with** a 0x200-byte copier header.
Roms without it are padded with a blank one when loaded, and the padding is removed again on [RomData::into_bytes].

```rust
use gamingway_lib::rom::RomData;

let mut rom = RomData::new(vec![0; 0x400]);
rom.write_wide(0x10, 0x1234, 2).unwrap();

assert_eq!(rom.read_wide(0x10, 2).unwrap(), 0x1234);
assert_eq!(rom.flag(0x11, 4).unwrap(), true);
```
!*/

use byteorder::{ByteOrder, LittleEndian};
use getset::*;

use std::io::Cursor;

use crate::error::{GLibError, Result};

use self::layout::RomLayout;

pub mod categories;
pub mod layout;

#[cfg(test)] mod categories_test;
#[cfg(test)] mod layout_test;
#[cfg(test)] mod rom_test;

/// Size of the copier header.
pub const HEADER_SIZE: usize = 0x200;

/// First two bytes of a rom without copier header.
const UNHEADERED_SIGNATURE: [u8; 2] = [0x78, 0x18];

/// Maximum width, in bytes, of the integers [RomData::read_wide] and [RomData::write_wide] support.
const MAX_WIDE_INTEGER_WIDTH: usize = 4;

//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This struct represents an entire rom in memory, along with the layout of its data.
#[derive(PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters)]
pub struct RomData {

    /// Raw data of the rom, header included.
    data: Vec<u8>,

    /// If the rom came with its own copier header.
    headered: bool,

    /// Where each category of data lives.
    #[getset(get = "pub", get_mut = "pub", set = "pub")]
    layout: RomLayout,
}

//---------------------------------------------------------------------------//
//                           Implementation of RomData
//---------------------------------------------------------------------------//

impl RomData {

    /// This function creates a `RomData` from the raw bytes of a rom, using the vanilla layout.
    pub fn new(data: Vec<u8>) -> Self {
        Self::with_layout(data, RomLayout::default())
    }

    /// This function creates a `RomData` from the raw bytes of a rom, using a custom layout.
    pub fn with_layout(data: Vec<u8>, layout: RomLayout) -> Self {
        let headered = !data.starts_with(&UNHEADERED_SIGNATURE);
        let data = if headered {
            data
        } else {
            let mut padded = vec![0; HEADER_SIZE];
            padded.extend_from_slice(&data);
            padded
        };

        Self {
            data,
            headered,
            layout,
        }
    }

    /// This function returns the raw bytes of the rom, without the padding we added if it had no header.
    pub fn into_bytes(self) -> Vec<u8> {
        if self.headered {
            self.data
        } else {
            self.data[HEADER_SIZE..].to_vec()
        }
    }

    /// This function returns if the rom came with its own copier header.
    pub fn is_headered(&self) -> bool {
        self.headered
    }

    /// This function returns the raw bytes of the rom, header included.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// This function returns the length of the rom, header included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// This function returns if the rom has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// This function checks that `width` bytes starting at `address` are inside the rom.
    pub fn check_range(&self, address: usize, width: usize) -> Result<()> {
        match address.checked_add(width) {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(GLibError::AddressOutOfBounds(address, width, self.data.len())),
        }
    }

    /// This function returns a reader starting at `address` and going until the end of the rom.
    pub fn reader_at(&self, address: usize) -> Result<Cursor<&[u8]>> {
        self.check_range(address, 0)?;
        Ok(Cursor::new(&self.data[address..]))
    }

    /// This function returns a reader over the `start..finish` region of the rom.
    ///
    /// Decoders reading from it can't go past `finish`.
    pub fn reader_range(&self, start: usize, finish: usize) -> Result<Cursor<&[u8]>> {
        if finish < start {
            return Err(GLibError::InvalidRange(start, finish));
        }

        self.check_range(start, finish - start)?;
        Ok(Cursor::new(&self.data[start..finish]))
    }

    /// This function reads a little endian unsigned integer of `width` bytes (1 to 4) at `address`.
    pub fn read_wide(&self, address: usize, width: usize) -> Result<u32> {
        check_wide_integer_width(width)?;
        self.check_range(address, width)?;
        Ok(LittleEndian::read_uint(&self.data[address..], width) as u32)
    }

    /// This function writes `value` as a little endian unsigned integer of `width` bytes (1 to 4) at `address`.
    ///
    /// Bits of `value` that don't fit in `width` bytes are discarded.
    pub fn write_wide(&mut self, address: usize, value: u32, width: usize) -> Result<()> {
        check_wide_integer_width(width)?;
        self.check_range(address, width)?;

        let mask = u64::MAX >> (64 - width * 8);
        LittleEndian::write_uint(&mut self.data[address..], u64::from(value) & mask, width);
        Ok(())
    }

    /// This function returns the state of the bit `bit` (0-7) of the byte at `address`.
    pub fn flag(&self, address: usize, bit: u8) -> Result<bool> {
        check_bit_index(bit)?;
        self.check_range(address, 1)?;
        Ok(self.data[address] & (1 << bit) != 0)
    }

    /// This function sets the bit `bit` (0-7) of the byte at `address` to `value`.
    pub fn set_bit(&mut self, address: usize, bit: u8, value: bool) -> Result<()> {
        check_bit_index(bit)?;
        self.check_range(address, 1)?;
        if value {
            self.data[address] |= 1 << bit;
        } else {
            self.data[address] &= !(1 << bit);
        }

        Ok(())
    }

    /// This function copies `bytes` into the rom, starting at `address`.
    pub fn inject(&mut self, address: usize, bytes: &[u8]) -> Result<()> {
        self.check_range(address, bytes.len())?;
        self.data[address..address + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

fn check_wide_integer_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_WIDE_INTEGER_WIDTH {
        Err(GLibError::UnsupportedWideIntegerWidth(width))
    } else {
        Ok(())
    }
}

fn check_bit_index(bit: u8) -> Result<()> {
    if bit > 7 {
        Err(GLibError::InvalidBitIndex(bit))
    } else {
        Ok(())
    }
}
