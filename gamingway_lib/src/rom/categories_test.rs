//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! Tests for reading/writing entire categories of records from/to a [`RomData`].
//!
//! They use a blank rom with the vanilla layout.
//!
//! [`RomData`]: crate::rom::RomData

use crate::error::GLibError;
use crate::records::launcher::{EventCondition, Launcher, LauncherComponent};
use crate::records::monster::{Monster, MonsterSections};
use crate::records::overworld::{Overworld, OverworldRow, ROWS, ROW_WIDTH};
use crate::records::spellbook::Spellbook;
use crate::records::tilemap::TileMap;
use crate::records::trigger::{LauncherCall, Teleport, Treasure, TreasureFlags, Trigger, TriggerKind, TriggerSet};

use super::*;

/// Size of a vanilla rom, header included.
const ROM_SIZE: usize = 0x100200;

fn blank_rom() -> RomData {
    RomData::new(vec![0; ROM_SIZE])
}

fn sample_spellbooks(count: usize) -> Vec<Spellbook> {
    (0..count).map(|index| {
        let mut spellbook = Spellbook::default();
        spellbook.teach_spell(0, index as u8).unwrap();
        spellbook.teach_spell(10, 0x20 + index as u8).unwrap();
        spellbook.teach_spell(12, 0x40).unwrap();
        spellbook
    }).collect()
}

#[test]
fn test_spellbooks() {
    let mut rom = blank_rom();
    let spellbooks = sample_spellbooks(13);

    rom.write_spellbooks(&spellbooks).unwrap();
    assert_eq!(&rom.data()[0x7CAC0..0x7CAC4], &[0x00, 0xFF, 0x01, 0xFF]);
    assert_eq!(&rom.data()[0x7C900..0x7C906], &[10, 0x20, 12, 0x40, 0xFF, 10]);

    assert_eq!(rom.read_spellbooks().unwrap(), spellbooks);
}

#[test]
fn test_spellbooks_not_enough_room() {
    let mut rom = blank_rom();
    let before = rom.clone();

    // 14 full starting lists take 336 bytes, and there are only 320.
    let mut spellbooks = sample_spellbooks(14);
    for spellbook in &mut spellbooks {
        for spell in 0..24 {
            spellbook.teach_spell(0, spell).unwrap();
        }
    }

    assert!(matches!(rom.write_spellbooks(&spellbooks), Err(GLibError::EncodingNotEnoughRoom(_, 336, 320, 16))));
    assert_eq!(rom, before);

    // Progressions too big: the starting spells must not be written either.
    let mut spellbooks = sample_spellbooks(13);
    for level in 1..=99 {
        for spell in 0..3 {
            spellbooks[0].teach_spell(level, spell).unwrap();
        }
    }

    let result = rom.write_spellbooks(&spellbooks);
    assert!(matches!(&result, Err(GLibError::EncodingNotEnoughRoom(name, _, 448, _)) if name == "spell progressions"));
    assert_eq!(rom, before);
}

#[test]
fn test_tilemaps() {
    let mut rom = blank_rom();
    let mut tilemaps = vec![TileMap::default(); 0x100];
    tilemaps[0] = TileMap::filled(1);
    tilemaps[2] = TileMap::filled(2);
    tilemaps[200] = TileMap::filled(3);

    assert_eq!(rom.write_tilemaps(&tilemaps).unwrap(), 30);
    assert_eq!(rom.read_wide(0xB8200, 2).unwrap(), 0x300);
    assert_eq!(rom.read_wide(0xB8202, 2).unwrap(), 0x300);
    assert_eq!(rom.read_wide(0xB8204, 2).unwrap(), 0x30A);
    assert_eq!(rom.read_wide(0xB8206, 2).unwrap(), 0x30A);

    assert_eq!(rom.read_tilemaps().unwrap(), tilemaps);
}

#[test]
fn test_tilemaps_blank_rom() {

    // All pointers are 0, so there's one map of 0x400 zeros, and the rest share it.
    let tilemaps = blank_rom().read_tilemaps().unwrap();
    assert_eq!(tilemaps[0], TileMap::filled(0));
    assert!(tilemaps[1..].iter().all(|tilemap| *tilemap == TileMap::default()));
}

#[test]
fn test_overworld() {
    let mut rom = blank_rom();
    let rows = (0..ROWS).map(|y| {
        let mut tiles = vec![0x10, 0x73, 0x74, 0x75];
        tiles.extend(vec![(y % 0x30) as u8 + 0x40; 12]);
        OverworldRow::new(tiles)
    }).collect::<Vec<_>>();
    let overworld = Overworld::new(rows);

    // Each row is a chunk, a run and the terminator.
    assert_eq!(rom.write_overworld(&overworld).unwrap(), ROWS * 4);
    assert_eq!(rom.read_wide(0xB0200, 2).unwrap(), 0);
    assert_eq!(rom.read_wide(0xB0202, 2).unwrap(), 4);
    assert_eq!(rom.read_overworld().unwrap(), overworld);
}

#[test]
fn test_overworld_not_enough_room() {
    let mut rom = blank_rom();
    let before = rom.clone();

    // No runs at all: 257 bytes per row.
    let rows = (0..ROWS).map(|_| OverworldRow::new((0..ROW_WIDTH).map(|x| 0x40 + (x % 2) as u8).collect())).collect::<Vec<_>>();
    let overworld = Overworld::new(rows);

    assert!(matches!(rom.write_overworld(&overworld), Err(GLibError::EncodingNotEnoughRoom(_, 65792, 0x77E0, _))));
    assert_eq!(rom, before);

    assert!(matches!(rom.write_overworld(&Overworld::default()), Err(GLibError::EncodingOverworldBadRowCount(256, 0))));
}

#[test]
fn test_launchers() {
    let mut rom = blank_rom();
    let mut launchers = vec![Launcher::default(); 254];
    launchers[0] = Launcher::new(vec![LauncherComponent::new(vec![EventCondition::new(3, true), EventCondition::new(5, false)], 7)]);
    launchers[100] = Launcher::new(vec![LauncherComponent::new(vec![], 1), LauncherComponent::new(vec![], 2)]);

    assert_eq!(rom.write_launchers(&launchers).unwrap(), 9);
    assert_eq!(&rom.data()[0x97660..0x97665], &[0x03, 0xFE, 0x05, 0xFF, 0x07]);

    // End pointer.
    assert_eq!(rom.read_wide(0x97460 + 254 * 2, 2).unwrap(), 9);

    assert_eq!(rom.read_launchers().unwrap(), launchers);
}

#[test]
fn test_map_triggers() {
    let mut rom = blank_rom();
    let mut triggers = vec![TriggerSet::default(); 0x180];
    triggers[0] = TriggerSet::new(vec![
        Trigger::new(10, 20, TriggerKind::Treasure(Treasure::new(3, TreasureFlags::TRAPPED | TreasureFlags::ITEM, 0x42))),
        Trigger::new(1, 2, TriggerKind::Teleport(Teleport::new(0x10, 5, 9, 3))),
    ]);
    triggers[0x17F] = TriggerSet::new(vec![Trigger::new(4, 5, TriggerKind::Launcher(LauncherCall::new(0x30)))]);

    assert_eq!(rom.write_map_triggers(&triggers).unwrap(), 15);

    // Pointers are relative to the end pointer slot, so the first map starts at 2.
    assert_eq!(rom.read_wide(0xA8200, 2).unwrap(), 2);
    assert_eq!(rom.read_wide(0xA8500, 2).unwrap(), 17);
    assert_eq!(&rom.data()[0xA8502..0xA8507], &[10, 20, 0xFE, 0xC3, 0x42]);

    assert_eq!(rom.read_map_triggers().unwrap(), triggers);
}

#[test]
fn test_monsters() {
    let mut rom = blank_rom();
    let monsters = (0..224).map(|index| {
        let mut monster = Monster::default();
        monster.set_level(index as u8 % 100);
        monster.set_hp(index * 10);
        if index % 2 == 0 {
            monster.set_sections(MonsterSections::WEAKNESSES | MonsterSections::RACES);
            monster.set_weaknesses(0x04);
        }

        monster
    }).collect::<Vec<_>>();

    assert_eq!(rom.write_monsters(&monsters).unwrap(), 224 * 10 + 112 * 2);
    assert_eq!(rom.read_wide(0x728A0, 2).unwrap(), 0x72A60 - 0x68200);
    assert_eq!(rom.read_monsters().unwrap(), monsters);
}

#[test]
fn test_unheadered_rom() {
    let mut data = vec![0; ROM_SIZE - HEADER_SIZE];
    data[0] = 0x78;
    data[1] = 0x18;

    let mut rom = RomData::new(data);
    rom.write_spellbooks(&sample_spellbooks(13)).unwrap();

    let data = rom.into_bytes();
    assert_eq!(data.len(), ROM_SIZE - HEADER_SIZE);
    assert_eq!(&data[0x7CAC0 - HEADER_SIZE..0x7CAC0 - HEADER_SIZE + 2], &[0x00, 0xFF]);
}

#[test]
fn test_custom_layout() {
    let mut layout = RomLayout::default();
    layout.set_monster_data_end(*layout.monster_data_start() + 20);

    let mut rom = RomData::with_layout(vec![0; ROM_SIZE], layout);
    let monsters = vec![Monster::default(); 3];
    assert!(matches!(rom.write_monsters(&monsters), Err(GLibError::EncodingNotEnoughRoom(_, 30, 20, 10))));
    assert!(rom.write_monsters(&monsters[..2]).is_ok());
}
