//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
Module with all the code to interact with map triggers.

Each map has a list of triggers: tiles that teleport the player somewhere else, give them a treasure, or
start a [Launcher](crate::records::launcher::Launcher) when stepped on.

# TriggerSet Structure

A TriggerSet has no length or terminator. It ends where the triggers of the next map start, so it can only
be decoded from a slice bounded by its own pointer and the next one. Inside that slice, triggers are 5 bytes each:

| Bytes | Type | Data                                    |
| ----- | ---- | --------------------------------------- |
| 1     | u8   | X coordinate of the trigger.            |
| 1     | u8   | Y coordinate of the trigger.            |
| 1     | u8   | Kind: FF for Launchers, FE for treasures, anything else is the destination map of a teleport. |
| 2     | u8   | Payload. Depends on the kind (see below). |

## Teleport payload

| Bytes | Type | Data                                                                               |
| ----- | ---- | ---------------------------------------------------------------------------------- |
| 1     | u8   | For inner maps, X in the low 5 bits and facing in the high 3. For world maps (FB+), the whole X. |
| 1     | u8   | Y.                                                                                 |

## Treasure payload

| Bytes | Type | Data                                                                  |
| ----- | ---- | --------------------------------------------------------------------- |
| 1     | u8   | Formation fought on opening in the low 5 bits, [TreasureFlags] in the high 3. |
| 1     | u8   | Item, or amount of money.                                             |

## Launcher payload

| Bytes | Type | Data                       |
| ----- | ---- | -------------------------- |
| 1     | u8   | Launcher to run.           |
| 1     | u8   | Unused.                    |
!*/

use bitflags::bitflags;
use getset::*;
use serde_derive::{Serialize, Deserialize};

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{GLibError, Result};
use crate::records::{Decodeable, DecodeableExtraData, Encodeable, EncodeableExtraData, PointerRecord};

/// Size of a single trigger, in bytes.
pub const TRIGGER_SIZE: usize = 5;

/// First map id that is a world map. Teleports to these store the whole X coordinate.
pub const FIRST_WORLD_MAP: u8 = 0xFB;

const LAUNCHER_KIND: u8 = 0xFF;
const TREASURE_KIND: u8 = 0xFE;

/// Mask for the X coordinate or the formation in the 4th byte of a trigger.
const LOW_BITS_MASK: u8 = 0x1F;
const HIGH_BITS_SHIFT: u8 = 5;
const MAX_FACING: u8 = 0x07;


//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This holds all the triggers of a map.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct TriggerSet {
    triggers: Vec<Trigger>,
}

/// This represents a single trigger of a map.
#[derive(PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Trigger {
    x: u8,
    y: u8,
    kind: TriggerKind,
}

/// This represents the different things a trigger can do.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub enum TriggerKind {
    Teleport(Teleport),
    Treasure(Treasure),
    Launcher(LauncherCall),
}

/// Payload of a trigger that moves the player to another map.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Teleport {

    /// Destination map. FE and FF are not valid here, as they mark the other kinds of triggers.
    map: u8,
    x: u8,
    y: u8,

    /// Direction the player faces after teleporting. Only 3 bits, and always 0 when teleporting to world maps.
    facing: u8,
}

/// Payload of a trigger that gives the player a treasure.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Treasure {

    /// Formation to fight if the treasure is trapped. Only 5 bits.
    formation: u8,
    flags: TreasureFlags,

    /// Item id, or money.
    contents: u8,
}

/// Payload of a trigger that runs a Launcher.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct LauncherCall {
    launcher: u8,

    /// Last byte of the trigger. The game ignores it, but we keep it to not alter the data.
    unused: u8,
}

bitflags! {

    /// This represents the bitmasks the high bits of a treasure payload can have.
    ///
    /// Unknown bits are kept as they are.
    #[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
    pub struct TreasureFlags: u8 {
        const TRAPPED = 0b0100_0000;
        const ITEM = 0b1000_0000;
    }
}

//---------------------------------------------------------------------------//
//                           Implementation of TriggerSet
//---------------------------------------------------------------------------//

impl TriggerSet {

    /// This function creates a TriggerSet from its triggers.
    pub fn new(triggers: Vec<Trigger>) -> Self {
        Self { triggers }
    }
}

impl Decodeable for TriggerSet {

    fn decode<R: ReadBytes>(data: &mut R, extra_data: &Option<DecodeableExtraData>) -> Result<Self> {
        let index = extra_data.as_ref().map(|extra_data| *extra_data.record_index()).unwrap_or_default();
        let len = data.len()?;
        let mut triggers = vec![];

        loop {
            let remaining = (len - data.stream_position()?) as usize;
            if remaining == 0 {
                break;
            }

            if remaining < TRIGGER_SIZE {
                return Err(GLibError::DecodingTriggerTruncated(index, remaining));
            }

            triggers.push(Trigger::decode(data, extra_data)?);
        }

        Ok(Self::new(triggers))
    }
}

impl Encodeable for TriggerSet {

    fn encode<W: WriteBytes>(&self, buffer: &mut W, extra_data: &Option<EncodeableExtraData>) -> Result<()> {
        for trigger in &self.triggers {
            trigger.encode(buffer, extra_data)?;
        }

        Ok(())
    }
}

impl PointerRecord for TriggerSet {

    fn size_needed(&self) -> usize {
        self.triggers.len() * TRIGGER_SIZE
    }
}

//---------------------------------------------------------------------------//
//                           Implementation of Trigger
//---------------------------------------------------------------------------//

impl Trigger {

    /// This function creates a trigger at the provided coordinates.
    pub fn new(x: u8, y: u8, kind: TriggerKind) -> Self {
        Self {
            x,
            y,
            kind,
        }
    }
}

impl Decodeable for Trigger {

    fn decode<R: ReadBytes>(data: &mut R, _extra_data: &Option<DecodeableExtraData>) -> Result<Self> {
        let x = data.read_u8()?;
        let y = data.read_u8()?;
        let kind_byte = data.read_u8()?;
        let payload = data.read_u8()?;
        let last = data.read_u8()?;

        let kind = match kind_byte {
            LAUNCHER_KIND => TriggerKind::Launcher(LauncherCall {
                launcher: payload,
                unused: last,
            }),

            TREASURE_KIND => TriggerKind::Treasure(Treasure {
                formation: payload & LOW_BITS_MASK,
                flags: TreasureFlags::from_bits_retain(payload & !LOW_BITS_MASK),
                contents: last,
            }),

            map if map < FIRST_WORLD_MAP => TriggerKind::Teleport(Teleport {
                map,
                x: payload & LOW_BITS_MASK,
                y: last,
                facing: payload >> HIGH_BITS_SHIFT,
            }),

            map => TriggerKind::Teleport(Teleport {
                map,
                x: payload,
                y: last,
                facing: 0,
            }),
        };

        Ok(Self::new(x, y, kind))
    }
}

impl Encodeable for Trigger {

    fn encode<W: WriteBytes>(&self, buffer: &mut W, _extra_data: &Option<EncodeableExtraData>) -> Result<()> {
        let (kind_byte, payload, last) = match &self.kind {
            TriggerKind::Launcher(call) => (LAUNCHER_KIND, call.launcher, call.unused),
            TriggerKind::Treasure(treasure) => {
                if treasure.formation > LOW_BITS_MASK {
                    return Err(GLibError::EncodingTriggerInvalidFormation(treasure.formation, LOW_BITS_MASK));
                }

                (
                    TREASURE_KIND,
                    treasure.formation | (treasure.flags.bits() & !LOW_BITS_MASK),
                    treasure.contents
                )
            },
            TriggerKind::Teleport(teleport) => {
                if teleport.map == LAUNCHER_KIND || teleport.map == TREASURE_KIND {
                    return Err(GLibError::EncodingTriggerInvalidDestination(teleport.map));
                }

                let payload = if teleport.map < FIRST_WORLD_MAP {
                    check_field(teleport.map, "x", teleport.x, LOW_BITS_MASK)?;
                    check_field(teleport.map, "facing", teleport.facing, MAX_FACING)?;
                    teleport.x | (teleport.facing << HIGH_BITS_SHIFT)
                } else {
                    check_field(teleport.map, "facing", teleport.facing, 0)?;
                    teleport.x
                };

                (teleport.map, payload, teleport.y)
            },
        };

        buffer.write_u8(self.x)?;
        buffer.write_u8(self.y)?;
        buffer.write_u8(kind_byte)?;
        buffer.write_u8(payload)?;
        buffer.write_u8(last)
    }
}

/// Teleport fields packed into a shared byte must fit in their bits.
fn check_field(map: u8, field: &str, value: u8, max: u8) -> Result<()> {
    if value > max {
        return Err(GLibError::EncodingTriggerFieldOutOfRange(map, field.to_owned(), value, max));
    }

    Ok(())
}

//---------------------------------------------------------------------------//
//                     Implementation of the trigger payloads
//---------------------------------------------------------------------------//

impl Teleport {

    /// This function creates a teleport to the provided map and coordinates.
    pub fn new(map: u8, x: u8, y: u8, facing: u8) -> Self {
        Self {
            map,
            x,
            y,
            facing,
        }
    }

    /// This function returns if the destination is a world map.
    pub fn is_world_map(&self) -> bool {
        self.map >= FIRST_WORLD_MAP
    }
}

impl Treasure {

    /// This function creates a treasure.
    pub fn new(formation: u8, flags: TreasureFlags, contents: u8) -> Self {
        Self {
            formation,
            flags,
            contents,
        }
    }

    /// This function returns if the treasure contains money instead of an item.
    pub fn has_money(&self) -> bool {
        !self.flags.contains(TreasureFlags::ITEM)
    }

    /// This function returns if opening the treasure starts a fight.
    pub fn is_trapped(&self) -> bool {
        self.flags.contains(TreasureFlags::TRAPPED)
    }
}

impl LauncherCall {

    /// This function creates a call to a Launcher.
    pub fn new(launcher: u8) -> Self {
        Self {
            launcher,
            unused: 0,
        }
    }
}
