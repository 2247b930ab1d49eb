//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
This module contains the functions to read and write entire categories of records from/to a [RomData].

Every write here is all-or-nothing: if anything fails (a record can't be encoded, or the category doesn't fit in
its region) the rom is left untouched.

| Category     | Read                          | Write                          |
| ------------ | ----------------------------- | ------------------------------ |
| Spellbooks   | [RomData::read_spellbooks]    | [RomData::write_spellbooks]    |
| TileMaps     | [RomData::read_tilemaps]      | [RomData::write_tilemaps]      |
| Overworld    | [RomData::read_overworld]     | [RomData::write_overworld]     |
| Launchers    | [RomData::read_launchers]     | [RomData::write_launchers]     |
| Map triggers | [RomData::read_map_triggers]  | [RomData::write_map_triggers]  |
| Monsters     | [RomData::read_monsters]      | [RomData::write_monsters]      |
!*/

#[cfg(feature = "integration_log")] use log::info;

use crate::error::Result;
use crate::pointer_table::{check_room, PointerTable};
use crate::records::Decodeable;
use crate::records::launcher::Launcher;
use crate::records::monster::Monster;
use crate::records::overworld::Overworld;
use crate::records::spellbook::Spellbook;
use crate::records::tilemap::TileMap;
use crate::records::trigger::TriggerSet;

use super::RomData;

//---------------------------------------------------------------------------//
//                       Implementation of RomData
//---------------------------------------------------------------------------//

impl RomData {

    /// This function returns the pointer table of the TileMaps.
    pub fn tilemap_table(&self) -> PointerTable {
        PointerTable::new(
            "tilemaps",
            *self.layout.tilemap_pointers_start(),
            *self.layout.tilemap_pointer_bonus(),
            *self.layout.tilemap_data_start(),
            *self.layout.tilemap_data_end(),
        ).with_shared_records()
    }

    /// This function returns the pointer table of the overworld rows.
    pub fn overworld_table(&self) -> PointerTable {
        PointerTable::new(
            "overworld",
            *self.layout.overworld_pointers_start(),
            *self.layout.overworld_data_start(),
            *self.layout.overworld_data_start(),
            *self.layout.overworld_data_end(),
        )
    }

    /// This function returns the pointer table of the Launchers.
    pub fn launcher_table(&self) -> PointerTable {
        PointerTable::new(
            "launchers",
            *self.layout.launcher_pointers_start(),
            *self.layout.launcher_data_start(),
            *self.layout.launcher_data_start(),
            *self.layout.launcher_data_end(),
        ).with_end_pointer()
    }

    /// This function returns the pointer table of the map triggers.
    pub fn trigger_table(&self) -> PointerTable {
        PointerTable::new(
            "map triggers",
            *self.layout.trigger_pointers_start(),
            *self.layout.trigger_pointer_bonus(),
            *self.layout.trigger_data_start(),
            *self.layout.trigger_data_end(),
        ).with_end_pointer()
    }

    /// This function returns the pointer table of the Monsters.
    pub fn monster_table(&self) -> PointerTable {
        PointerTable::new(
            "monsters",
            *self.layout.monster_pointers_start(),
            *self.layout.monster_pointer_bonus(),
            *self.layout.monster_data_start(),
            *self.layout.monster_data_end(),
        )
    }

    /// This function reads all the Spellbooks of the rom.
    pub fn read_spellbooks(&self) -> Result<Vec<Spellbook>> {
        let mut starting_spells = self.reader_range(*self.layout.starting_spells_start(), *self.layout.starting_spells_end())?;
        let mut progressions = self.reader_range(*self.layout.spell_progressions_start(), *self.layout.spell_progressions_end())?;

        let mut spellbooks = Vec::with_capacity(*self.layout.total_spellbooks());
        for _ in 0..*self.layout.total_spellbooks() {
            let mut spellbook = Spellbook::default();
            spellbook.read_starting_spells(&mut starting_spells)?;
            spellbook.read_spell_progression(&mut progressions)?;
            spellbooks.push(spellbook);
        }

        Ok(spellbooks)
    }

    /// This function writes all the Spellbooks to the rom.
    ///
    /// Both the starting spells and the spell progressions must fit in their regions, or neither of them is written.
    pub fn write_spellbooks(&mut self, spellbooks: &[Spellbook]) -> Result<()> {
        let starting_room = self.layout.starting_spells_room();
        let progressions_room = self.layout.spell_progressions_room();

        check_room("starting spells", spellbooks.iter().map(|book| book.starting_spells_size()).sum(), starting_room)?;
        check_room("spell progressions", spellbooks.iter().map(|book| book.spell_progression_size()).sum(), progressions_room)?;

        let mut starting_spells: Vec<u8> = vec![];
        let mut progressions: Vec<u8> = vec![];
        for spellbook in spellbooks {
            spellbook.write_starting_spells(&mut starting_spells)?;
            spellbook.write_spell_progression(&mut progressions)?;
        }

        self.check_range(*self.layout.starting_spells_start(), starting_spells.len())?;
        self.check_range(*self.layout.spell_progressions_start(), progressions.len())?;
        self.inject(*self.layout.starting_spells_start(), &starting_spells)?;
        self.inject(*self.layout.spell_progressions_start(), &progressions)?;

        #[cfg(feature = "integration_log")] {
            info!("Wrote {} spellbooks: {} of {} bytes of starting spells, {} of {} bytes of progressions.",
                spellbooks.len(), starting_spells.len(), starting_room, progressions.len(), progressions_room);
        }

        Ok(())
    }

    /// This function reads all the TileMaps of the rom.
    ///
    /// TileMaps sharing the data of the one before them are returned empty.
    pub fn read_tilemaps(&self) -> Result<Vec<TileMap>> {
        self.tilemap_table().read_all(self, *self.layout.total_tilemaps())
    }

    /// This function writes all the TileMaps to the rom. Empty TileMaps reuse the data of the one before them.
    ///
    /// Returns the amount of bytes of data written. Same for the rest of the writes of this module.
    pub fn write_tilemaps(&mut self, tilemaps: &[TileMap]) -> Result<usize> {
        let used = self.tilemap_table().write_all(self, tilemaps)?;

        #[cfg(feature = "integration_log")] {
            info!("Wrote {} tilemaps: {} of {} bytes used.", tilemaps.len(), used, self.layout.tilemap_room());
        }

        Ok(used)
    }

    /// This function reads the overworld of the rom.
    pub fn read_overworld(&self) -> Result<Overworld> {
        let mut data = self.reader_range(*self.layout.overworld_data_start(), *self.layout.overworld_data_end())?;
        Overworld::decode(&mut data, &None)
    }

    /// This function writes the overworld to the rom, along with the pointers to each one of its rows.
    pub fn write_overworld(&mut self, overworld: &Overworld) -> Result<usize> {
        overworld.validate()?;
        let used = self.overworld_table().write_all(self, overworld.rows())?;

        #[cfg(feature = "integration_log")] {
            info!("Wrote the overworld: {} of {} bytes used.", used, self.layout.overworld_room());
        }

        Ok(used)
    }

    /// This function reads all the Launchers of the rom.
    pub fn read_launchers(&self) -> Result<Vec<Launcher>> {
        self.launcher_table().read_all_bounded(self, *self.layout.total_launchers())
    }

    /// This function writes all the Launchers to the rom, along with the pointer marking the end of the last one.
    pub fn write_launchers(&mut self, launchers: &[Launcher]) -> Result<usize> {
        let used = self.launcher_table().write_all(self, launchers)?;

        #[cfg(feature = "integration_log")] {
            info!("Wrote {} launchers: {} of {} bytes used.", launchers.len(), used, self.layout.launcher_room());
        }

        Ok(used)
    }

    /// This function reads the triggers of every map of the rom.
    pub fn read_map_triggers(&self) -> Result<Vec<TriggerSet>> {
        self.trigger_table().read_all_bounded(self, *self.layout.total_maps())
    }

    /// This function writes the triggers of every map to the rom, along with the pointer marking the end of the last map.
    pub fn write_map_triggers(&mut self, triggers: &[TriggerSet]) -> Result<usize> {
        let used = self.trigger_table().write_all(self, triggers)?;

        #[cfg(feature = "integration_log")] {
            info!("Wrote the triggers of {} maps: {} of {} bytes used.", triggers.len(), used, self.layout.trigger_room());
        }

        Ok(used)
    }

    /// This function reads all the Monsters of the rom.
    pub fn read_monsters(&self) -> Result<Vec<Monster>> {
        self.monster_table().read_all(self, *self.layout.total_monsters())
    }

    /// This function writes all the Monsters to the rom.
    pub fn write_monsters(&mut self, monsters: &[Monster]) -> Result<usize> {
        let used = self.monster_table().write_all(self, monsters)?;

        #[cfg(feature = "integration_log")] {
            info!("Wrote {} monsters: {} of {} bytes used.", monsters.len(), used, self.layout.monster_room());
        }

        Ok(used)
    }
}
