//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
This crate is the `Gamingway` lib, a lib to decode/encode the variable-length data of a classic SNES RPG rom.

The rom is loaded in memory as a [RomData](crate::rom::RomData), and each category of data (spellbooks, tilemaps,
the overworld, launchers, map triggers and monsters) can be read from it into structured types, edited, and written back.

```rust
use gamingway_lib::rom::RomData;
use gamingway_lib::records::tilemap::TileMap;

let mut rom = RomData::new(vec![0; 0x100200]);
let mut tilemaps = rom.read_tilemaps().unwrap();
tilemaps[3] = TileMap::filled(0x12);

rom.write_tilemaps(&tilemaps).unwrap();
assert_eq!(rom.read_tilemaps().unwrap()[3], TileMap::filled(0x12));
```

Writes are all-or-nothing: if a category doesn't fit in its region of the rom, nothing of it is written and
an [EncodingNotEnoughRoom](crate::error::GLibError::EncodingNotEnoughRoom) error is returned.

# Features

- `integration_log`: logs what the lib writes through the `log` crate, and provides a terminal logger. Enabled by default.
!*/

pub mod binary;
pub mod error;
pub mod integrations;
pub mod pointer_table;
pub mod records;
pub mod rom;
