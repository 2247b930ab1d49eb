//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! This module contains the error type shared by every codec, table and rom operation of this crate.

use thiserror::Error;

/// Custom `Result` type, to always return our custom error.
pub type Result<T, E = GLibError> = core::result::Result<T, E>;

/// Custom error type for the lib.
#[derive(Error, Debug)]
pub enum GLibError {

    #[error("Error trying to access the address {0:#X} with a width of {1} bytes: the rom is only {2:#X} bytes long.")]
    AddressOutOfBounds(usize, usize, usize),

    #[error("Error trying to read a wide integer: a width of {0} bytes is not supported.")]
    UnsupportedWideIntegerWidth(usize),

    #[error("Error trying to access the bit {0} of a byte.")]
    InvalidBitIndex(u8),

    #[error("The range {0:#X}..{1:#X} is not a valid region of the rom.")]
    InvalidRange(usize, usize),

    #[error("There are no more bytes to decode in the data you provided.")]
    DecodingNotMoreBytesToDecode,

    #[error("Error trying to decode a terminated list: found neither a terminator nor {0} items before the data ended.")]
    DecodingTerminatedListNoTerminator(usize),

    #[error("Error trying to decode a TileMap: a run of {0} tiles at tile {1} overflows the {2} tiles of the map.")]
    DecodingTileMapRunOverflow(usize, usize, usize),

    #[error("Error trying to decode the overworld row {0}: it has more than {1} tiles or it has no terminator.")]
    DecodingOverworldRowOverflow(usize, usize),

    #[error("Error trying to decode the spell progression: no level terminator found.")]
    DecodingSpellProgressionNoTerminator,

    #[error("Error trying to decode the Launcher {0}: its last component has conditions but no event.")]
    DecodingLauncherIncompleteComponent(usize),

    #[error("Error trying to decode the Launcher {0}: the data ends right after a {1:#04X} marker.")]
    DecodingLauncherTruncatedMarker(usize, u8),

    #[error("Error trying to decode the triggers of the map {0}: {1} leftover bytes don't form a full 5-byte trigger.")]
    DecodingTriggerTruncated(usize, usize),

    #[error("Not enough room for {0}: {1} bytes needed but only {2} bytes available ({3} bytes over).")]
    EncodingNotEnoughRoom(String, usize, usize, usize),

    #[error("Error trying to encode a pointer for the record {0}: the address {1:#X} can't be reached with a 16-bit pointer from this table.")]
    EncodingPointerOutOfRange(usize, usize),

    #[error("Error trying to encode the tile {0:#04X}: tiles must be between 0x00 and 0x7F.")]
    EncodingTileOutOfRange(u8),

    #[error("Error trying to encode a TileMap: expected {0} rows of {1} tiles, but the row {2} has {3} tiles.")]
    EncodingTileMapBadShape(usize, usize, usize, usize),

    #[error("Error trying to encode a TileMap: expected {0} rows, found {1}.")]
    EncodingTileMapBadRowCount(usize, usize),

    #[error("Error trying to encode the overworld: expected {0} rows, found {1}.")]
    EncodingOverworldBadRowCount(usize, usize),

    #[error("Error trying to encode the overworld: the row {0} has {1} tiles, but a row can't have more than {2}.")]
    EncodingOverworldRowTooLong(usize, usize, usize),

    #[error("Error trying to encode a terminated list: it has {0} items, but the maximum is {1}.")]
    EncodingTerminatedListTooLong(usize, usize),

    #[error("Error trying to encode a terminated list: the item {0:#04X} is the terminator byte.")]
    EncodingTerminatedListReservedValue(u8),

    #[error("The level {0} is not a valid level for learning spells (1-99).")]
    SpellbookInvalidLevel(u8),

    #[error("Error trying to teach the spell {0}: the starting spells list is already full ({1} spells).")]
    SpellbookStartingSpellsFull(u8, usize),

    #[error("Error trying to encode the Launcher {0}: the component {1} has no event.")]
    EncodingLauncherMissingEvent(usize, usize),

    #[error("Error trying to encode a Launcher: the flag {0:#04X} is a reserved marker and can't be required to be ON.")]
    EncodingLauncherReservedFlag(u8),

    #[error("Error trying to encode a teleport trigger: {0:#04X} is not a valid destination map.")]
    EncodingTriggerInvalidDestination(u8),

    #[error("Error trying to encode a teleport trigger to the map {0:#04X}: the field {1} is {2}, but the maximum is {3}.")]
    EncodingTriggerFieldOutOfRange(u8, String, u8, u8),

    #[error("Error trying to encode a treasure trigger: the formation {0} is over the maximum of {1}.")]
    EncodingTriggerInvalidFormation(u8, u8),

    #[error("Error trying to encode the record {0} of {1}: a shared record needs a record with data before it.")]
    EncodingSharedRecordWithoutPrevious(usize, String),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Represents all other cases of `ron::Error`.
    #[error(transparent)]
    RonError(#[from] ron::Error),

    /// Represents all other cases of `ron::error::SpannedError`.
    #[error(transparent)]
    RonSpannedError(#[from] ron::error::SpannedError),

    /// Represents all other cases of `log::SetLoggerError`.
    #[cfg(feature = "integration_log")]
    #[error(transparent)]
    SetLoggerError(#[from] log::SetLoggerError),
}
