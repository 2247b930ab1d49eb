//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! This module contains the traits [`ReadBytes`] and [`WriteBytes`], used to read binary data
//! from the rom into usable data and write it back to binary.
//!
//! # Simple types
//!
//! The rom only uses a handful of simple types (always using LittleEndian):
//!
//! | Type | Bytes | Binary Format | Example | Explanation |
//! | ---- | ----- | ------------- | ------- | ----------- |
//! | **[u8]**  | 1    | ```05```            | 5       | Unsigned Integer. |
//! | **[u16]** | 2    | ```05 00```         | 5       | Unsigned Integer. Used by all pointer tables. |
//!
//! # Complex types
//!
//! Apart of these, there is one more complex type shared by several records:
//!
//! | Type | Bytes | Binary Format | Example | Explanation |
//! | ---- | ----- | ------------- | ------- | ----------- |
//! | **Terminated List** | Up to Max Count + 1 | ```05 06 07 FF``` | [5, 6, 7] | A list of bytes that ends with an FF byte. If the list has exactly the max amount of items, there is no FF after it. |
//!
//! The rest of the formats (RLE tiles, launchers, triggers,...) are explained in their respective record's documentation.

mod reader;
mod writer;

#[cfg(test)] mod writer_test;

pub use self::reader::ReadBytes;
pub use self::writer::{WriteBytes, terminated_list_len};

/// Byte used to mark the end of most variable-length lists in the rom.
pub const TERMINATOR: u8 = 0xFF;
