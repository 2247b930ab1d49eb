//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! This module contains the [RomLayout], the map of where each category of data lives in the rom.
//!
//! All addresses assume a rom with a 0x200-byte copier header. The default layout is the one of the vanilla
//! rom. Hacks that relocate data can describe their layout in a RON file and load it with [RomLayout::load].

use getset::*;
use ron::de::from_bytes;
use ron::ser::{to_string_pretty, PrettyConfig};
use serde_derive::{Serialize, Deserialize};

use std::fs::{DirBuilder, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;

//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This struct holds the addresses, counts and pointer bonuses of every category of variable-length data.
///
/// Pointer bonuses are the value added to a 16-bit pointer to get the address it points to.
#[derive(PartialEq, Eq, Clone, Debug, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct RomLayout {
    monster_pointers_start: usize,
    monster_data_start: usize,
    monster_data_end: usize,
    monster_pointer_bonus: usize,
    total_monsters: usize,

    spell_progressions_start: usize,
    spell_progressions_end: usize,
    starting_spells_start: usize,
    starting_spells_end: usize,
    total_spellbooks: usize,

    launcher_pointers_start: usize,
    launcher_data_start: usize,
    launcher_data_end: usize,
    total_launchers: usize,

    trigger_pointers_start: usize,
    trigger_data_start: usize,
    trigger_data_end: usize,
    trigger_pointer_bonus: usize,
    total_maps: usize,

    overworld_pointers_start: usize,
    overworld_data_start: usize,
    overworld_data_end: usize,

    tilemap_pointers_start: usize,
    tilemap_data_start: usize,
    tilemap_data_end: usize,
    tilemap_pointer_bonus: usize,
    total_tilemaps: usize,
}

//---------------------------------------------------------------------------//
//                       Enum & Structs Implementations
//---------------------------------------------------------------------------//

impl Default for RomLayout {
    fn default() -> Self {
        Self {
            monster_pointers_start: 0x728A0,
            monster_data_start: 0x72A60,
            monster_data_end: 0x738C0,
            monster_pointer_bonus: 0x68200,
            total_monsters: 224,

            spell_progressions_start: 0x7C900,
            spell_progressions_end: 0x7CAC0,
            starting_spells_start: 0x7CAC0,
            starting_spells_end: 0x7CC00,
            total_spellbooks: 13,

            launcher_pointers_start: 0x97460,
            launcher_data_start: 0x97660,
            launcher_data_end: 0x9FF00,
            total_launchers: 254,

            // The first 2 bytes of the trigger data are the end pointer of the table.
            trigger_pointers_start: 0xA8200,
            trigger_data_start: 0xA8502,
            trigger_data_end: 0xA9820,
            trigger_pointer_bonus: 0xA8500,
            total_maps: 0x180,

            overworld_pointers_start: 0xB0200,
            overworld_data_start: 0xB0680,
            overworld_data_end: 0xB7E60,

            tilemap_pointers_start: 0xB8200,
            tilemap_data_start: 0xB8500,
            tilemap_data_end: 0xC0200,
            tilemap_pointer_bonus: 0xB8200,
            total_tilemaps: 0x100,
        }
    }
}

impl RomLayout {

    /// This function loads a `RomLayout` from a RON file.
    ///
    /// Missing fields take their vanilla value.
    pub fn load(path: &Path) -> Result<Self> {
        let mut file = BufReader::new(File::open(path)?);
        let mut data = Vec::with_capacity(file.get_ref().metadata()?.len() as usize);
        file.read_to_end(&mut data)?;
        from_bytes(&data).map_err(From::from)
    }

    /// This function saves a `RomLayout` to a RON file, creating its parent folders if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent_folder) = path.parent() {
            DirBuilder::new().recursive(true).create(parent_folder)?;
        }

        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(self.to_ron_string()?.as_bytes())?;
        Ok(())
    }

    /// This function parses a `RomLayout` from a RON string.
    pub fn from_ron_str(data: &str) -> Result<Self> {
        ron::from_str(data).map_err(From::from)
    }

    /// This function serializes a `RomLayout` to a pretty RON string.
    pub fn to_ron_string(&self) -> Result<String> {
        to_string_pretty(self, PrettyConfig::default()).map_err(From::from)
    }

    /// Bytes available for monster data.
    pub fn monster_room(&self) -> usize {
        self.monster_data_end.saturating_sub(self.monster_data_start)
    }

    /// Bytes available for spell progressions.
    pub fn spell_progressions_room(&self) -> usize {
        self.spell_progressions_end.saturating_sub(self.spell_progressions_start)
    }

    /// Bytes available for starting spells.
    pub fn starting_spells_room(&self) -> usize {
        self.starting_spells_end.saturating_sub(self.starting_spells_start)
    }

    /// Bytes available for launcher data.
    pub fn launcher_room(&self) -> usize {
        self.launcher_data_end.saturating_sub(self.launcher_data_start)
    }

    /// Bytes available for trigger data.
    pub fn trigger_room(&self) -> usize {
        self.trigger_data_end.saturating_sub(self.trigger_data_start)
    }

    /// Bytes available for overworld rows.
    pub fn overworld_room(&self) -> usize {
        self.overworld_data_end.saturating_sub(self.overworld_data_start)
    }

    /// Bytes available for tilemap data.
    pub fn tilemap_room(&self) -> usize {
        self.tilemap_data_end.saturating_sub(self.tilemap_data_start)
    }
}
