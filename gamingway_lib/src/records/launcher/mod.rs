//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
Module with all the code to interact with Launchers.

A Launcher decides which event runs when the player steps on a trigger or talks to someone. It's a list of
components, each one of them being a list of flag conditions plus the event to run if all of them match.
The game checks the components in order, and runs the event of the first one that matches.

# Launcher Structure

A Launcher has no length or terminator. It ends where the next one starts, so it can only be decoded
from a slice bounded by its own pointer and the next one. Inside that slice, each component is:

| Bytes | Type | Data                                                         |
| ----- | ---- | ------------------------------------------------------------ |
| 1     | u8   | Flag that must be ON. Any value except FE and FF.            |
| 2     | u8   | FE, followed by a flag that must be OFF.                     |
| 2     | u8   | FF, followed by the event to run. Closes the component.      |

We always write the ON conditions of a component first, then the OFF ones, then the event.
!*/

use getset::*;
use serde_derive::{Serialize, Deserialize};

use std::mem;

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{GLibError, Result};
use crate::records::{Decodeable, DecodeableExtraData, Encodeable, EncodeableExtraData, PointerRecord};

/// Marker before the event of a component.
const EVENT_MARKER: u8 = 0xFF;

/// Marker before a flag that must be OFF.
const OFF_MARKER: u8 = 0xFE;


//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This holds an entire Launcher decoded in memory.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Launcher {
    components: Vec<LauncherComponent>,
}

/// This holds a list of conditions and the event to run if all of them match.
#[derive(Default, PartialEq, Eq, Clone, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct LauncherComponent {
    conditions: Vec<EventCondition>,

    /// Event to run. Every component must have one in order to be encoded.
    event: Option<u8>,
}

/// This represents a flag that must have a specific state.
#[derive(Default, PartialEq, Eq, Clone, Copy, Debug, Getters, MutGetters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct EventCondition {
    flag: u8,

    /// True if the flag must be ON, false if it must be OFF.
    required: bool,
}

//---------------------------------------------------------------------------//
//                           Implementation of Launcher
//---------------------------------------------------------------------------//

impl Launcher {

    /// This function creates a Launcher from its components.
    pub fn new(components: Vec<LauncherComponent>) -> Self {
        Self { components }
    }

    /// This function returns the amount of bytes this Launcher takes once encoded.
    pub fn length(&self) -> usize {
        self.components.iter().map(|component| component.length()).sum()
    }

    /// This function returns the event of the first component whose conditions all match `flag_state`.
    ///
    /// `flag_state` must return if the flag it receives is currently ON.
    pub fn resolve_event<F: Fn(u8) -> bool>(&self, flag_state: F) -> Option<u8> {
        self.components.iter()
            .filter(|component| component.event.is_some())
            .find(|component| component.conditions.iter().all(|condition| flag_state(condition.flag) == condition.required))
            .and_then(|component| component.event)
    }
}

impl Decodeable for Launcher {

    fn decode<R: ReadBytes>(data: &mut R, extra_data: &Option<DecodeableExtraData>) -> Result<Self> {
        let index = extra_data.as_ref().map(|extra_data| *extra_data.record_index()).unwrap_or_default();
        let mut launcher = Self::default();
        let mut component = LauncherComponent::default();

        while !data.is_at_end()? {
            match data.read_u8()? {
                EVENT_MARKER => {
                    component.event = Some(read_marked_byte(data, index, EVENT_MARKER)?);
                    launcher.components.push(mem::take(&mut component));
                },
                OFF_MARKER => {
                    let flag = read_marked_byte(data, index, OFF_MARKER)?;
                    component.conditions.push(EventCondition::new(flag, false));
                },
                flag => component.conditions.push(EventCondition::new(flag, true)),
            }
        }

        if !component.conditions.is_empty() {
            return Err(GLibError::DecodingLauncherIncompleteComponent(index));
        }

        Ok(launcher)
    }
}

impl Encodeable for Launcher {

    fn encode<W: WriteBytes>(&self, buffer: &mut W, extra_data: &Option<EncodeableExtraData>) -> Result<()> {
        let index = extra_data.as_ref().map(|extra_data| *extra_data.record_index()).unwrap_or_default();
        for (component_index, component) in self.components.iter().enumerate() {
            let event = component.event.ok_or(GLibError::EncodingLauncherMissingEvent(index, component_index))?;

            for condition in component.conditions.iter().filter(|condition| condition.required) {
                if condition.flag == OFF_MARKER || condition.flag == EVENT_MARKER {
                    return Err(GLibError::EncodingLauncherReservedFlag(condition.flag));
                }

                buffer.write_u8(condition.flag)?;
            }

            for condition in component.conditions.iter().filter(|condition| !condition.required) {
                buffer.write_u8(OFF_MARKER)?;
                buffer.write_u8(condition.flag)?;
            }

            buffer.write_u8(EVENT_MARKER)?;
            buffer.write_u8(event)?;
        }

        Ok(())
    }
}

impl PointerRecord for Launcher {

    fn size_needed(&self) -> usize {
        self.length()
    }
}

//---------------------------------------------------------------------------//
//                     Implementation of LauncherComponent
//---------------------------------------------------------------------------//

impl LauncherComponent {

    /// This function creates a component from its conditions and event.
    pub fn new(conditions: Vec<EventCondition>, event: u8) -> Self {
        Self {
            conditions,
            event: Some(event),
        }
    }

    /// This function returns the amount of bytes this component takes once encoded.
    pub fn length(&self) -> usize {
        let conditions: usize = self.conditions.iter().map(|condition| if condition.required { 1 } else { 2 }).sum();
        conditions + 2
    }
}

impl EventCondition {

    /// This function creates a condition for a flag.
    pub fn new(flag: u8, required: bool) -> Self {
        Self {
            flag,
            required,
        }
    }
}

/// This function reads the byte after a marker, failing if the data ends right after it.
fn read_marked_byte<R: ReadBytes>(data: &mut R, index: usize, marker: u8) -> Result<u8> {
    data.read_u8().map_err(|error| match error {
        GLibError::DecodingNotMoreBytesToDecode => GLibError::DecodingLauncherTruncatedMarker(index, marker),
        error => error,
    })
}
