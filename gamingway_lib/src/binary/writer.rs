//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! Module with the [`WriteBytes`] trait, to write bytes from known types to a [`Writer`].
//!
//! [`Writer`]: std::io::Write

use byteorder::{LittleEndian, WriteBytesExt};

use std::io::Write;

use crate::error::{GLibError, Result};

use super::TERMINATOR;

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allow us to easily write all kind of data types to something that implements [`Write`].
pub trait WriteBytes: Write {

    /// This function tries to write a byte value to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use gamingway_lib::binary::WriteBytes;
    ///
    /// let mut data: Vec<u8> = vec![];
    /// assert!(data.write_u8(10).is_ok());
    /// assert_eq!(data, vec![10]);
    /// ```
    fn write_u8(&mut self, value: u8) -> Result<()> {
        WriteBytesExt::write_u8(self, value).map_err(From::from)
    }

    /// This function tries to write an u16 value to `self`.
    ///
    /// It may fail if `self` cannot be written to.
    ///
    /// ```rust
    /// use gamingway_lib::binary::WriteBytes;
    ///
    /// let mut data: Vec<u8> = vec![];
    /// assert!(data.write_u16(258).is_ok());
    /// assert_eq!(data, vec![2, 1]);
    /// ```
    fn write_u16(&mut self, integer: u16) -> Result<()> {
        WriteBytesExt::write_u16::<LittleEndian>(self, integer).map_err(From::from)
    }

    /// This function tries to write a list of bytes followed by an FF terminator to `self`.
    ///
    /// If the list has exactly `max_count` items, the terminator is not written.
    ///
    /// It may fail if `self` cannot be written to, if the list is longer than `max_count`,
    /// or if one of the items is the terminator itself.
    ///
    /// ```rust
    /// use gamingway_lib::binary::WriteBytes;
    ///
    /// let mut data: Vec<u8> = vec![];
    /// assert!(data.write_terminated_list_u8(&[5, 6], 3).is_ok());
    /// assert!(data.write_terminated_list_u8(&[7, 8], 2).is_ok());
    /// assert_eq!(data, vec![5, 6, 0xFF, 7, 8]);
    /// ```
    fn write_terminated_list_u8(&mut self, list: &[u8], max_count: usize) -> Result<()> {
        if list.len() > max_count {
            return Err(GLibError::EncodingTerminatedListTooLong(list.len(), max_count));
        }

        if list.contains(&TERMINATOR) {
            return Err(GLibError::EncodingTerminatedListReservedValue(TERMINATOR));
        }

        self.write_all(list)?;
        if list.len() < max_count {
            self.write_u8(TERMINATOR)?;
        }

        Ok(())
    }
}

/// Size in bytes a list written by [`WriteBytes::write_terminated_list_u8`] takes.
pub fn terminated_list_len(items: usize, max_count: usize) -> usize {
    if items < max_count {
        items + 1
    } else {
        items
    }
}

// Automatic implementation for everything that implements `Write`.
impl<W: Write> WriteBytes for W {}
