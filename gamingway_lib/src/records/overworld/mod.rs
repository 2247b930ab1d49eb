//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
Module with all the code to interact with the Overworld map.

The overworld is a grid of 256 rows, each one of them stored as its own run-length encoded record,
with a pointer table pointing to the start of each row.

# Row Structure

Each row is a sequence of the following items, ended by an FF byte:

| Bytes | Type | Data                                                                      |
| ----- | ---- | ------------------------------------------------------------------------- |
| 1     | u8   | Chunk: 00, 10, 20 or 30. Expands to 4 tiles (see below).                   |
| 1     | u8   | Single tile: high bit unset, any other value below 80.                    |
| 2     | u8   | Run: high bit set, the low 7 bits are the tile. Followed by the byte below. |
|       | u8   | Extra repeats of the tile. A run is this value + 1 tiles long.            |

The chunk tiles (mountains, mostly) are always followed by the same three tiles, so the game stores
them as a single byte: the tile `t` expands to `t, 70 + (t >> 4) * 3, 71 + (t >> 4) * 3, 72 + (t >> 4) * 3`.

Tile 7F can't be written as a run, as its run byte would be FF, the row terminator.
!*/

use getset::*;
use serde_derive::{Serialize, Deserialize};

use std::iter::repeat;

use crate::binary::{ReadBytes, WriteBytes, TERMINATOR};
use crate::error::{GLibError, Result};
use crate::records::{Decodeable, DecodeableExtraData, Encodeable, EncodeableExtraData, PointerRecord};
use crate::records::tilemap::{RUN_FLAG, TILE_MASK};

/// Amount of rows in the overworld.
pub const ROWS: usize = 256;

/// Maximum amount of tiles in a row.
pub const ROW_WIDTH: usize = 256;

/// Tiles that expand into a 4-tile chunk.
const CHUNK_TILES: [u8; 4] = [0x00, 0x10, 0x20, 0x30];

/// First tile of the suffix of the first chunk.
const CHUNK_SUFFIX_BASE: u8 = 0x70;


//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This holds the entire overworld grid decoded in memory.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Overworld {
    rows: Vec<OverworldRow>,
}

/// This holds a single row of the overworld.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct OverworldRow {
    tiles: Vec<u8>,
}

//---------------------------------------------------------------------------//
//                           Implementation of Overworld
//---------------------------------------------------------------------------//

impl Overworld {

    /// This function creates an Overworld from its rows.
    pub fn new(rows: Vec<OverworldRow>) -> Self {
        Self { rows }
    }

    /// This function returns the tile at the provided coordinates, if any.
    pub fn tile(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.tiles.get(x)).copied()
    }

    /// This function returns the amount of bytes the entire overworld takes once encoded.
    pub fn size_needed(&self) -> usize {
        self.rows.iter().map(|row| row.size_needed()).sum()
    }

    /// This function checks the overworld has the amount of rows the game expects.
    pub fn validate(&self) -> Result<()> {
        if self.rows.len() != ROWS {
            return Err(GLibError::EncodingOverworldBadRowCount(ROWS, self.rows.len()));
        }

        Ok(())
    }
}

/// The rows are decoded one after another from the start of `data`.
impl Decodeable for Overworld {

    fn decode<R: ReadBytes>(data: &mut R, _extra_data: &Option<DecodeableExtraData>) -> Result<Self> {
        let mut rows = Vec::with_capacity(ROWS);
        for index in 0..ROWS {
            let mut extra_data = DecodeableExtraData::default();
            extra_data.set_record_index(index);
            rows.push(OverworldRow::decode(data, &Some(extra_data))?);
        }

        Ok(Self::new(rows))
    }
}

impl Encodeable for Overworld {

    fn encode<W: WriteBytes>(&self, buffer: &mut W, _extra_data: &Option<EncodeableExtraData>) -> Result<()> {
        self.validate()?;
        for (index, row) in self.rows.iter().enumerate() {
            let mut extra_data = EncodeableExtraData::default();
            extra_data.set_record_index(index);
            row.encode(buffer, &Some(extra_data))?;
        }

        Ok(())
    }
}

//---------------------------------------------------------------------------//
//                         Implementation of OverworldRow
//---------------------------------------------------------------------------//

impl OverworldRow {

    /// This function creates a row from its tiles.
    pub fn new(tiles: Vec<u8>) -> Self {
        Self { tiles }
    }

    /// This function run-length encodes the row, terminator included, without validating it.
    fn rle(&self) -> Vec<u8> {
        let mut encoded = vec![];
        let mut index = 0;
        while index < self.tiles.len() {
            let tile = self.tiles[index];
            if let Some(suffix) = chunk_suffix(tile) {
                if self.tiles[index + 1..].starts_with(&suffix) {
                    encoded.push(tile);
                    index += 4;
                    continue;
                }
            }

            let count = self.tiles[index..].iter().take_while(|next| **next == tile).count();

            // A chunk tile on its own would be expanded, so it has to go as a run even if it's a single tile.
            if tile == TILE_MASK {
                encoded.extend(repeat(tile).take(count));
            } else if count > 1 || chunk_suffix(tile).is_some() {
                encoded.push(tile | RUN_FLAG);
                encoded.push((count - 1) as u8);
            } else {
                encoded.push(tile);
            }

            index += count;
        }

        encoded.push(TERMINATOR);
        encoded
    }
}

impl Decodeable for OverworldRow {

    fn decode<R: ReadBytes>(data: &mut R, extra_data: &Option<DecodeableExtraData>) -> Result<Self> {
        let index = extra_data.as_ref().map(|extra_data| *extra_data.record_index()).unwrap_or_default();
        let overflow = || GLibError::DecodingOverworldRowOverflow(index, ROW_WIDTH);

        let mut tiles = Vec::with_capacity(ROW_WIDTH);
        loop {
            let byte = data.read_u8().map_err(|_| overflow())?;
            if byte == TERMINATOR {
                break;
            }

            if let Some(suffix) = chunk_suffix(byte) {
                tiles.push(byte);
                tiles.extend_from_slice(&suffix);
            } else if byte & RUN_FLAG != 0 {
                let count = usize::from(data.read_u8().map_err(|_| overflow())?) + 1;
                tiles.extend(repeat(byte & TILE_MASK).take(count));
            } else {
                tiles.push(byte);
            }

            if tiles.len() > ROW_WIDTH {
                return Err(overflow());
            }
        }

        Ok(Self::new(tiles))
    }
}

impl Encodeable for OverworldRow {

    fn encode<W: WriteBytes>(&self, buffer: &mut W, extra_data: &Option<EncodeableExtraData>) -> Result<()> {
        let index = extra_data.as_ref().map(|extra_data| *extra_data.record_index()).unwrap_or_default();
        if self.tiles.len() > ROW_WIDTH {
            return Err(GLibError::EncodingOverworldRowTooLong(index, self.tiles.len(), ROW_WIDTH));
        }

        if let Some(tile) = self.tiles.iter().find(|tile| **tile > TILE_MASK) {
            return Err(GLibError::EncodingTileOutOfRange(*tile));
        }

        buffer.write_all(&self.rle())?;
        Ok(())
    }
}

impl PointerRecord for OverworldRow {

    fn size_needed(&self) -> usize {
        self.rle().len()
    }
}

/// This function returns the three tiles that follow a chunk tile, or None if the tile doesn't start a chunk.
fn chunk_suffix(tile: u8) -> Option<[u8; 3]> {
    if CHUNK_TILES.contains(&tile) {
        let base = CHUNK_SUFFIX_BASE + (tile >> 4) * 3;
        Some([base, base + 1, base + 2])
    } else {
        None
    }
}
