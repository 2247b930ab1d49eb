//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
Module with all the code to interact with Monsters.

# Monster Structure

| Bytes | Type           | Data                                                        |
| ----- | -------------- | ----------------------------------------------------------- |
| 1     | u8             | Level in the low 7 bits. The high bit marks bosses.         |
| 2     | u16            | HP.                                                         |
| 1     | u8             | Attack index.                                               |
| 1     | u8             | Defense index.                                              |
| 1     | u8             | Magic defense index.                                        |
| 1     | u8             | Speed index.                                                |
| 1     | u8             | Drop table in the low 6 bits, drop rate in the high 2.      |
| 1     | u8             | Behaviour.                                                  |
| 1     | [MonsterSections] | Which of the optional sections below follow.             |
| 3     | [u8; 3]        | Attributes. Optional.                                       |
| 3     | [u8; 3]        | Resistances. Optional.                                      |
| 1     | u8             | Weaknesses. Optional.                                       |
| 1     | u8             | Magic power. Optional.                                      |
| 1     | u8             | Races. Optional.                                            |
| 1     | u8             | Reaction. Optional.                                         |

Optional sections not present in the data are decoded as 0, and are not written back unless their flag is set.
!*/

use bitflags::bitflags;
use getset::*;
use serde_derive::{Serialize, Deserialize};

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;
use crate::records::{Decodeable, DecodeableExtraData, Encodeable, EncodeableExtraData, PointerRecord};

/// Size of the fixed part of a monster.
pub const FIXED_SIZE: usize = 10;

const LEVEL_MASK: u8 = 0x7F;
const BOSS_BIT: u8 = 0x80;
const DROP_TABLE_MASK: u8 = 0x3F;
const DROP_RATE_SHIFT: u8 = 6;


//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This holds an entire Monster decoded in memory.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Monster {
    boss: bool,
    level: u8,
    hp: u16,
    attack_index: u8,
    defense_index: u8,
    magic_defense_index: u8,
    speed_index: u8,
    drop_table: u8,
    drop_rate: u8,
    behaviour: u8,
    sections: MonsterSections,
    attributes: [u8; 3],
    resistances: [u8; 3],
    weaknesses: u8,
    magic_power: u8,
    races: u8,
    reaction: u8,
}

bitflags! {

    /// This represents the optional sections a monster has after its fixed part.
    ///
    /// The low two bits have no known use, but they're kept as they are.
    #[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
    pub struct MonsterSections: u8 {
        const ATTRIBUTES = 0b1000_0000;
        const RESISTANCES = 0b0100_0000;
        const WEAKNESSES = 0b0010_0000;
        const MAGIC_POWER = 0b0001_0000;
        const RACES = 0b0000_1000;
        const REACTION = 0b0000_0100;
    }
}

//---------------------------------------------------------------------------//
//                           Implementation of Monster
//---------------------------------------------------------------------------//

impl Decodeable for Monster {

    fn decode<R: ReadBytes>(data: &mut R, _extra_data: &Option<DecodeableExtraData>) -> Result<Self> {
        let mut monster = Self::default();

        let level = data.read_u8()?;
        monster.level = level & LEVEL_MASK;
        monster.boss = level & BOSS_BIT != 0;
        monster.hp = data.read_u16()?;
        monster.attack_index = data.read_u8()?;
        monster.defense_index = data.read_u8()?;
        monster.magic_defense_index = data.read_u8()?;
        monster.speed_index = data.read_u8()?;

        let drop = data.read_u8()?;
        monster.drop_table = drop & DROP_TABLE_MASK;
        monster.drop_rate = drop >> DROP_RATE_SHIFT;
        monster.behaviour = data.read_u8()?;
        monster.sections = MonsterSections::from_bits_retain(data.read_u8()?);

        if monster.sections.contains(MonsterSections::ATTRIBUTES) {
            monster.attributes.copy_from_slice(&data.read_slice(3, false)?);
        }

        if monster.sections.contains(MonsterSections::RESISTANCES) {
            monster.resistances.copy_from_slice(&data.read_slice(3, false)?);
        }

        if monster.sections.contains(MonsterSections::WEAKNESSES) {
            monster.weaknesses = data.read_u8()?;
        }

        if monster.sections.contains(MonsterSections::MAGIC_POWER) {
            monster.magic_power = data.read_u8()?;
        }

        if monster.sections.contains(MonsterSections::RACES) {
            monster.races = data.read_u8()?;
        }

        if monster.sections.contains(MonsterSections::REACTION) {
            monster.reaction = data.read_u8()?;
        }

        Ok(monster)
    }
}

impl Encodeable for Monster {

    fn encode<W: WriteBytes>(&self, buffer: &mut W, _extra_data: &Option<EncodeableExtraData>) -> Result<()> {
        let boss = if self.boss { BOSS_BIT } else { 0 };
        buffer.write_u8((self.level & LEVEL_MASK) | boss)?;
        buffer.write_u16(self.hp)?;
        buffer.write_u8(self.attack_index)?;
        buffer.write_u8(self.defense_index)?;
        buffer.write_u8(self.magic_defense_index)?;
        buffer.write_u8(self.speed_index)?;
        buffer.write_u8((self.drop_table & DROP_TABLE_MASK) | (self.drop_rate << DROP_RATE_SHIFT))?;
        buffer.write_u8(self.behaviour)?;
        buffer.write_u8(self.sections.bits())?;

        if self.sections.contains(MonsterSections::ATTRIBUTES) {
            buffer.write_all(&self.attributes)?;
        }

        if self.sections.contains(MonsterSections::RESISTANCES) {
            buffer.write_all(&self.resistances)?;
        }

        if self.sections.contains(MonsterSections::WEAKNESSES) {
            buffer.write_u8(self.weaknesses)?;
        }

        if self.sections.contains(MonsterSections::MAGIC_POWER) {
            buffer.write_u8(self.magic_power)?;
        }

        if self.sections.contains(MonsterSections::RACES) {
            buffer.write_u8(self.races)?;
        }

        if self.sections.contains(MonsterSections::REACTION) {
            buffer.write_u8(self.reaction)?;
        }

        Ok(())
    }
}

impl PointerRecord for Monster {

    fn size_needed(&self) -> usize {
        let sections: [(MonsterSections, usize); 6] = [
            (MonsterSections::ATTRIBUTES, 3),
            (MonsterSections::RESISTANCES, 3),
            (MonsterSections::WEAKNESSES, 1),
            (MonsterSections::MAGIC_POWER, 1),
            (MonsterSections::RACES, 1),
            (MonsterSections::REACTION, 1),
        ];

        FIXED_SIZE + sections.iter()
            .filter(|(section, _)| self.sections.contains(*section))
            .map(|(_, size)| size)
            .sum::<usize>()
    }
}
