//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! This module contains the variable-length records of the rom, and the traits used to decode/encode them.
//!
//! # Known record types
//!
//! | Record Type      | Decoding Supported | Encoding Supported | Stored through          |
//! | ---------------- | ------------------ | ------------------ | ----------------------- |
//! | [`TileMap`]      | Yes                | Yes                | Pointer table (shared)  |
//! | [`Overworld`]    | Yes                | Yes                | Row pointer table       |
//! | [`Spellbook`]    | Yes                | Yes                | Sequential lists        |
//! | [`Launcher`]     | Yes                | Yes                | Bracketed pointer table |
//! | [`TriggerSet`]   | Yes                | Yes                | Bracketed pointer table |
//! | [`Monster`]      | Yes                | Yes                | Pointer table           |
//!
//! Fixed-size records (stats, equipment, spell parameters,...) are not handled here.
//!
//! For more information about specific record types, including their binary format, please
//! **check their respective documentation**.
//!
//! [`TileMap`]: crate::records::tilemap::TileMap
//! [`Overworld`]: crate::records::overworld::Overworld
//! [`Spellbook`]: crate::records::spellbook::Spellbook
//! [`Launcher`]: crate::records::launcher::Launcher
//! [`TriggerSet`]: crate::records::trigger::TriggerSet
//! [`Monster`]: crate::records::monster::Monster

use getset::{Getters, Setters};

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;

pub mod launcher;
pub mod monster;
pub mod overworld;
pub mod spellbook;
pub mod tilemap;
pub mod trigger;

//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

/// This is a generic struct to easily pass additional data to a [Decodeable::decode] method.
#[derive(Clone, Debug, Default, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
pub struct DecodeableExtraData {

    /// Index of the record within its table. Only used to give context to errors.
    record_index: usize,
}

/// This is a generic struct to easily pass additional data to a [Encodeable::encode] method.
#[derive(Clone, Debug, Default, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
pub struct EncodeableExtraData {

    /// Index of the record within its table. Only used to give context to errors.
    record_index: usize,
}

//---------------------------------------------------------------------------//
//                           Trait Definitions
//---------------------------------------------------------------------------//

/// A generic trait to implement decoding logic from anything implementing [ReadBytes](crate::binary::ReadBytes) into structured types.
pub trait Decodeable: Send + Sync {

    /// This method provides a generic and expandable way to decode anything implementing [ReadBytes](crate::binary::ReadBytes)
    /// into the implementor's structure.
    ///
    /// Records whose end is not self-described (launchers, triggers) read until the end of `data`, so `data` must be
    /// bounded to the record's region.
    ///
    /// The parameter `extra_data` contains arguments that can be used to provide additional data needed for the decoding process.
    fn decode<R: ReadBytes>(data: &mut R, extra_data: &Option<DecodeableExtraData>) -> Result<Self> where Self: Sized;
}

/// A generic trait to implement encoding logic from structured types into anything implementing [WriteBytes](crate::binary::WriteBytes).
pub trait Encodeable: Send + Sync {

    /// This method provides a generic and expandable way to encode any implementor's structure into anything
    /// implementing [WriteBytes](crate::binary::WriteBytes)
    ///
    /// The parameter `extra_data` contains arguments that can be used to provide additional data needed for the encoding process.
    fn encode<W: WriteBytes>(&self, buffer: &mut W, extra_data: &Option<EncodeableExtraData>) -> Result<()>;
}

/// A record stored through a table of 16-bit pointers.
///
/// The [PointerTable](crate::pointer_table::PointerTable) uses this to check if a whole table fits in its region
/// before writing anything, and to know which records have no data of their own.
pub trait PointerRecord: Decodeable + Encodeable + Default {

    /// Amount of bytes this record takes once encoded.
    fn size_needed(&self) -> usize;

    /// If this record has no data of its own and reuses the data of the record before it.
    ///
    /// Only records of tables that allow sharing can return true here.
    fn is_shared(&self) -> bool {
        false
    }
}
