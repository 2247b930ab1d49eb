//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
Module with all the code to interact with TileMaps.

A TileMap is the 32x32 grid of tiles of a town or dungeon floor. It's a separate thing from the map
itself because several maps can use the same TileMap, in which case the grid is stored only once
and all those maps point to it.

# TileMap Structure

The grid is stored as a run-length encoded sequence of bytes, read until 0x400 tiles have been decoded.
There is no terminator.

| Bytes | Type | Data                                                                    |
| ----- | ---- | ----------------------------------------------------------------------- |
| 1     | u8   | Single tile: high bit unset, the low 7 bits are the tile.               |
| 2     | u8   | Run: high bit set, the low 7 bits are the tile. Followed by the byte below. |
|       | u8   | Extra repeats of the tile. A run is this value + 1 tiles long, but FF counts as FE. |

Because FF counts as FE, a single run can't be longer than 0xFF tiles. Longer runs are split.
!*/

use getset::*;
use itertools::Itertools;
use serde_derive::{Serialize, Deserialize};

use std::iter::repeat;

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{GLibError, Result};
use crate::records::{Decodeable, DecodeableExtraData, Encodeable, EncodeableExtraData, PointerRecord};

/// Width of a TileMap, in tiles.
pub const WIDTH: usize = 32;

/// Height of a TileMap, in tiles.
pub const HEIGHT: usize = 32;

/// Amount of tiles in a TileMap.
pub const TILE_COUNT: usize = WIDTH * HEIGHT;

/// Bit marking a byte as the start of a run.
pub(crate) const RUN_FLAG: u8 = 0x80;

/// Mask to get the tile out of a byte.
pub(crate) const TILE_MASK: u8 = 0x7F;

/// Longest run, in tiles. Run bytes FE and FF both mean this many.
const MAX_RUN_TILES: usize = 0xFF;


//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This holds an entire TileMap decoded in memory.
///
/// A TileMap without rows has no data of its own: it uses the data of the TileMap before it.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct TileMap {
    tiles: Vec<Vec<u8>>,
}

//---------------------------------------------------------------------------//
//                           Implementation of TileMap
//---------------------------------------------------------------------------//

impl TileMap {

    /// This function creates a TileMap from its rows.
    pub fn new(tiles: Vec<Vec<u8>>) -> Self {
        Self { tiles }
    }

    /// This function creates a TileMap filled with a single tile.
    pub fn filled(tile: u8) -> Self {
        Self::new(vec![vec![tile; WIDTH]; HEIGHT])
    }

    /// This function returns the tile at the provided coordinates, if any.
    pub fn tile(&self, x: usize, y: usize) -> Option<u8> {
        self.tiles.get(y).and_then(|row| row.get(x)).copied()
    }

    /// This function checks the grid can be encoded: either empty, or 32 rows of 32 tiles, all of them below 0x80.
    fn validate(&self) -> Result<()> {
        if self.tiles.is_empty() {
            return Ok(());
        }

        if self.tiles.len() != HEIGHT {
            return Err(GLibError::EncodingTileMapBadRowCount(HEIGHT, self.tiles.len()));
        }

        for (index, row) in self.tiles.iter().enumerate() {
            if row.len() != WIDTH {
                return Err(GLibError::EncodingTileMapBadShape(HEIGHT, WIDTH, index, row.len()));
            }

            if let Some(tile) = row.iter().find(|tile| **tile > TILE_MASK) {
                return Err(GLibError::EncodingTileOutOfRange(*tile));
            }
        }

        Ok(())
    }

    /// This function run-length encodes the grid, without validating it.
    fn rle(&self) -> Vec<u8> {
        let mut encoded = vec![];
        for (count, tile) in self.tiles.iter().flatten().copied().dedup_with_count() {
            let mut count = count;
            while count > MAX_RUN_TILES {
                encoded.push(tile | RUN_FLAG);
                encoded.push(u8::MAX);
                count -= MAX_RUN_TILES;
            }

            if count > 1 {
                encoded.push(tile | RUN_FLAG);
                encoded.push((count - 1) as u8);
            } else if count == 1 {
                encoded.push(tile);
            }
        }

        encoded
    }
}

impl Decodeable for TileMap {

    fn decode<R: ReadBytes>(data: &mut R, _extra_data: &Option<DecodeableExtraData>) -> Result<Self> {
        let mut tiles = Vec::with_capacity(TILE_COUNT);
        while tiles.len() < TILE_COUNT {
            let byte = data.read_u8()?;
            let tile = byte & TILE_MASK;
            let count = if byte & RUN_FLAG != 0 {
                (usize::from(data.read_u8()?) + 1).min(MAX_RUN_TILES)
            } else {
                1
            };

            if tiles.len() + count > TILE_COUNT {
                return Err(GLibError::DecodingTileMapRunOverflow(count, tiles.len(), TILE_COUNT));
            }

            tiles.extend(repeat(tile).take(count));
        }

        Ok(Self::new(tiles.chunks(WIDTH).map(<[u8]>::to_vec).collect()))
    }
}

impl Encodeable for TileMap {

    fn encode<W: WriteBytes>(&self, buffer: &mut W, _extra_data: &Option<EncodeableExtraData>) -> Result<()> {
        self.validate()?;
        buffer.write_all(&self.rle())?;
        Ok(())
    }
}

impl PointerRecord for TileMap {

    fn size_needed(&self) -> usize {
        self.rle().len()
    }

    fn is_shared(&self) -> bool {
        self.tiles.is_empty()
    }
}
