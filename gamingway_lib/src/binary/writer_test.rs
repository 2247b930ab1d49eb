//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! Tests for the [`WriteBytes`] trait.
//!
//! [`WriteBytes`]: crate::binary::WriteBytes

use crate::error::GLibError;

use super::{terminated_list_len, WriteBytes};

/// Test for WriteBytes::write_u8().
#[test]
fn write_u8() {

    // Check the writer works properly.
    let mut data: Vec<u8> = vec![];
    assert!(data.write_u8(10).is_ok());
    assert_eq!(data, vec![10]);
}

/// Test for WriteBytes::write_u16().
#[test]
fn write_u16() {

    // Check the writer works properly.
    let mut data: Vec<u8> = vec![];
    assert!(data.write_u16(258).is_ok());
    assert_eq!(data, vec![2, 1]);
}

/// Test for WriteBytes::write_terminated_list_u8().
#[test]
fn write_terminated_list_u8() {

    // Short list gets a terminator.
    let mut data: Vec<u8> = vec![];
    assert!(data.write_terminated_list_u8(&[1, 2, 3], 24).is_ok());
    assert_eq!(data, vec![1, 2, 3, 0xFF]);
    assert_eq!(terminated_list_len(3, 24), data.len());

    // Empty list is just the terminator.
    let mut data: Vec<u8> = vec![];
    assert!(data.write_terminated_list_u8(&[], 24).is_ok());
    assert_eq!(data, vec![0xFF]);

    // Full list doesn't.
    let full = (0..24).collect::<Vec<u8>>();
    let mut data: Vec<u8> = vec![];
    assert!(data.write_terminated_list_u8(&full, 24).is_ok());
    assert_eq!(data, full);
    assert_eq!(terminated_list_len(24, 24), 24);

    // Too long or containing the terminator fails, and nothing is written.
    let mut data: Vec<u8> = vec![];
    assert!(matches!(data.write_terminated_list_u8(&[0; 25], 24), Err(GLibError::EncodingTerminatedListTooLong(25, 24))));
    assert!(matches!(data.write_terminated_list_u8(&[1, 0xFF], 24), Err(GLibError::EncodingTerminatedListReservedValue(0xFF))));
    assert!(data.is_empty());
}
