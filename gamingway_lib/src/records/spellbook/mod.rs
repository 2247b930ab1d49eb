//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
Module with all the code to interact with Spellbooks.

A Spellbook is the list of spells a character knows from the start, plus the spells it learns when
reaching certain levels. Each one of those lists lives in a different region of the rom, and the
spellbooks are stored one after another in both of them, without pointers.

# Starting Spells Structure

Up to 24 spell ids, ended by an FF byte. If there are exactly 24 spells, there is no terminator.

# Spell Progression Structure

A sequence of the following pairs, ended by an FF byte in place of a level:

| Bytes | Type | Data                  |
| ----- | ---- | --------------------- |
| 1     | u8   | Level (1-99).         |
| 1     | u8   | Spell learned at it.  |

A level may appear more than once, one pair per spell.
!*/

use getset::*;
use serde_derive::{Serialize, Deserialize};

use std::collections::BTreeMap;

use crate::binary::{ReadBytes, WriteBytes, TERMINATOR, terminated_list_len};
use crate::error::{GLibError, Result};

/// Maximum amount of spells a Spellbook can start with.
pub const MAX_STARTING_SPELLS: usize = 24;

/// Maximum level at which a spell can be learned.
pub const MAX_LEVEL: u8 = 99;

#[cfg(test)] mod spellbook_test;

//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This holds an entire Spellbook decoded in memory.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Spellbook {

    /// Spells known from the start, in order.
    starting_spells: Vec<u8>,

    /// Spells learned at each level, in the order they're learned.
    learned_spells: BTreeMap<u8, Vec<u8>>,
}

//---------------------------------------------------------------------------//
//                           Implementation of Spellbook
//---------------------------------------------------------------------------//

impl Spellbook {

    /// This function returns the spells known at a level. Level 0 means the starting spells.
    pub fn spells_at(&self, level: u8) -> &[u8] {
        if level == 0 {
            &self.starting_spells
        } else {
            self.learned_spells.get(&level).map(|spells| &spells[..]).unwrap_or_default()
        }
    }

    /// This function adds a spell to the ones learned at a level, or to the starting spells if the level is 0.
    ///
    /// Teaching a spell already known at that level does nothing.
    pub fn teach_spell(&mut self, level: u8, spell: u8) -> Result<()> {
        if level > MAX_LEVEL {
            return Err(GLibError::SpellbookInvalidLevel(level));
        }

        let spells = if level == 0 {
            if !self.starting_spells.contains(&spell) && self.starting_spells.len() >= MAX_STARTING_SPELLS {
                return Err(GLibError::SpellbookStartingSpellsFull(spell, MAX_STARTING_SPELLS));
            }

            &mut self.starting_spells
        } else {
            self.learned_spells.entry(level).or_default()
        };

        if !spells.contains(&spell) {
            spells.push(spell);
        }

        Ok(())
    }

    /// This function removes all the spells of a level. Level 0 means the starting spells.
    pub fn clear_level(&mut self, level: u8) {
        if level == 0 {
            self.starting_spells.clear();
        } else {
            self.learned_spells.remove(&level);
        }
    }

    /// This function removes all the spells of the Spellbook.
    pub fn clear(&mut self) {
        self.starting_spells.clear();
        self.learned_spells.clear();
    }

    /// This function reads the starting spells of this Spellbook from `data`, replacing the current ones.
    pub fn read_starting_spells<R: ReadBytes>(&mut self, data: &mut R) -> Result<()> {
        self.starting_spells = data.read_terminated_list_u8(MAX_STARTING_SPELLS)?;
        Ok(())
    }

    /// This function reads the spell progression of this Spellbook from `data`, replacing the current one.
    pub fn read_spell_progression<R: ReadBytes>(&mut self, data: &mut R) -> Result<()> {
        let mut learned_spells: BTreeMap<u8, Vec<u8>> = BTreeMap::new();
        loop {
            let level = data.read_u8().map_err(|_| GLibError::DecodingSpellProgressionNoTerminator)?;
            if level == TERMINATOR {
                break;
            }

            let spell = data.read_u8().map_err(|_| GLibError::DecodingSpellProgressionNoTerminator)?;
            learned_spells.entry(level).or_default().push(spell);
        }

        self.learned_spells = learned_spells;
        Ok(())
    }

    /// This function writes the starting spells of this Spellbook to `buffer`.
    pub fn write_starting_spells<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        buffer.write_terminated_list_u8(&self.starting_spells, MAX_STARTING_SPELLS)
    }

    /// This function writes the spell progression of this Spellbook to `buffer`, ordered by level.
    ///
    /// Levels without spells are skipped.
    pub fn write_spell_progression<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        if let Some(level) = self.learned_spells.iter()
            .filter(|(_, spells)| !spells.is_empty())
            .map(|(level, _)| *level)
            .find(|level| *level == 0 || *level > MAX_LEVEL) {
            return Err(GLibError::SpellbookInvalidLevel(level));
        }

        for (level, spells) in &self.learned_spells {
            for spell in spells {
                buffer.write_u8(*level)?;
                buffer.write_u8(*spell)?;
            }
        }

        buffer.write_u8(TERMINATOR)
    }

    /// This function returns the amount of bytes the starting spells take once encoded.
    pub fn starting_spells_size(&self) -> usize {
        terminated_list_len(self.starting_spells.len(), MAX_STARTING_SPELLS)
    }

    /// This function returns the amount of bytes the spell progression takes once encoded.
    pub fn spell_progression_size(&self) -> usize {
        self.learned_spells.values().map(|spells| spells.len() * 2).sum::<usize>() + 1
    }
}
