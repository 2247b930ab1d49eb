//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! Module with the [`ReadBytes`] trait, to read bytes to known types.

use byteorder::{LittleEndian, ReadBytesExt};

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::error::{Result, GLibError};

use super::TERMINATOR;

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allow us to easily read all kind of data from a source that implements [`Read`] + [`Seek`].
pub trait ReadBytes: Read + Seek {

    /// This function returns the lenght of the data we're reading.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use gamingway_lib::binary::ReadBytes;
    ///
    /// let data = vec![1, 2, 3, 4];
    /// let mut cursor = Cursor::new(data);
    /// let len = cursor.len().unwrap();
    /// assert_eq!(len, 4);
    /// ```
    fn len(&mut self) -> Result<u64> {
        let old_pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;

        // Avoid seeking a third time when we were already at the end of the stream.
        if old_pos != len {
            self.seek(SeekFrom::Start(old_pos))?;
        }
        Ok(len)
    }

    /// This function returns if the data is empty.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use gamingway_lib::binary::ReadBytes;
    ///
    /// let data: Vec<u8> = vec![];
    /// let mut cursor = Cursor::new(data);
    /// assert!(ReadBytes::is_empty(&mut cursor).unwrap());
    /// ```
    fn is_empty(&mut self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }

    /// This function returns if there are no more bytes left to read after the current position.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use gamingway_lib::binary::ReadBytes;
    ///
    /// let mut cursor = Cursor::new(vec![1]);
    /// assert!(!cursor.is_at_end().unwrap());
    /// cursor.read_u8().unwrap();
    /// assert!(cursor.is_at_end().unwrap());
    /// ```
    fn is_at_end(&mut self) -> Result<bool> {
        let pos = self.stream_position()?;
        self.len().map(|len| pos >= len)
    }

    /// This function returns the amount of bytes specified in the `size` argument as a [`Vec<u8>`].
    ///
    /// If `rewind` is true, the cursor will be reset to its original position once the data is returned.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use gamingway_lib::binary::ReadBytes;
    ///
    /// let data = vec![1, 2, 3, 4];
    /// let mut cursor = Cursor::new(data.to_vec());
    /// let data_read = cursor.read_slice(4, false).unwrap();
    /// assert_eq!(data, data_read);
    ///
    /// # assert_eq!(ReadBytes::read_slice(&mut Cursor::new([1, 2, 3, 4]), 4, false).unwrap(), vec![1, 2, 3, 4]);
    /// # assert_eq!(ReadBytes::read_slice(&mut Cursor::new(vec![0u8; 0]), 0, false).unwrap(), vec![0u8; 0]);
    /// # assert_eq!(ReadBytes::read_slice(&mut Cursor::new([0u8; 0]), 4, false).is_err(), true);
    /// ```
    fn read_slice(&mut self, size: usize, rewind: bool) -> Result<Vec<u8>> {
        let mut data = vec![0; size];

        // If len is 0, just return.
        if size == 0 {
            return Ok(data)
        }

        self.read_exact(&mut data).map_err(eof_as_no_more_bytes)?;

        if rewind {
            self.seek(SeekFrom::Current(-(size as i64)))?;
        }

        Ok(data)
    }

    /// This function tries to read an unsigned byte value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use gamingway_lib::binary::ReadBytes;
    ///
    /// let data = vec![10];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_u8().unwrap();
    ///
    /// assert_eq!(data, 10);
    /// assert_eq!(cursor.read_u8().is_err(), true);
    /// ```
    fn read_u8(&mut self) -> Result<u8> {
        ReadBytesExt::read_u8(self).map_err(eof_as_no_more_bytes)
    }

    /// This function tries to read an u16 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use gamingway_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0, 10];
    /// let mut cursor = Cursor::new(data);
    /// let data = cursor.read_u16().unwrap();
    ///
    /// assert_eq!(data, 10);
    /// assert_eq!(cursor.read_u16().is_err(), true);
    /// ```
    fn read_u16(&mut self) -> Result<u16> {
        ReadBytesExt::read_u16::<LittleEndian>(self).map_err(eof_as_no_more_bytes)
    }

    /// This function tries to read a list of bytes terminated by an FF byte from `self`.
    ///
    /// The list ends either when an FF byte is read (the FF is consumed, but not returned), or when `max_count`
    /// items have been read, in which case there is no FF byte to consume.
    ///
    /// It may fail if the data ends before either of those conditions are met.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use gamingway_lib::binary::ReadBytes;
    ///
    /// let mut cursor = Cursor::new(vec![5, 6, 0xFF, 7, 8, 9]);
    /// assert_eq!(cursor.read_terminated_list_u8(4).unwrap(), vec![5, 6]);
    /// assert_eq!(cursor.read_terminated_list_u8(2).unwrap(), vec![7, 8]);
    /// assert!(cursor.read_terminated_list_u8(2).is_err());
    /// ```
    fn read_terminated_list_u8(&mut self, max_count: usize) -> Result<Vec<u8>> {
        let mut list = Vec::with_capacity(max_count);
        while list.len() < max_count {
            let item = match self.read_u8() {
                Ok(item) => item,
                Err(GLibError::DecodingNotMoreBytesToDecode) => return Err(GLibError::DecodingTerminatedListNoTerminator(max_count)),
                Err(error) => return Err(error),
            };

            if item == TERMINATOR {
                break;
            }

            list.push(item);
        }

        Ok(list)
    }
}

/// Running out of data mid-record means the data is malformed, not that the source failed.
fn eof_as_no_more_bytes(error: std::io::Error) -> GLibError {
    if error.kind() == ErrorKind::UnexpectedEof {
        GLibError::DecodingNotMoreBytesToDecode
    } else {
        GLibError::IOError(error)
    }
}

// Automatic implementation for everything that implements `Read + Seek`.
impl<R: Read + Seek> ReadBytes for R {}
