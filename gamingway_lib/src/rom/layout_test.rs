//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! Tests for loading and saving a [`RomLayout`].
//!
//! [`RomLayout`]: crate::rom::layout::RomLayout

use std::env::temp_dir;

use super::layout::RomLayout;

#[test]
fn test_vanilla_layout() {
    let layout = RomLayout::default();
    assert_eq!(*layout.total_monsters(), 224);
    assert_eq!(*layout.total_maps(), 0x180);
    assert_eq!(*layout.trigger_data_start(), 0xA8502);
    assert_eq!(layout.tilemap_room(), 0x7D00);
    assert_eq!(layout.starting_spells_room(), 0x140);
    assert_eq!(layout.spell_progressions_room(), 0x1C0);
    assert_eq!(layout.monster_room(), 0xE60);
}

#[test]
fn test_layout_ron() {
    let mut layout = RomLayout::default();
    layout.set_launcher_data_end(0xA0000);

    let ron = layout.to_ron_string().unwrap();
    assert_eq!(RomLayout::from_ron_str(&ron).unwrap(), layout);

    // Missing fields take their vanilla value.
    let partial = RomLayout::from_ron_str("(total_monsters: 10, monster_data_end: 480000)").unwrap();
    assert_eq!(*partial.total_monsters(), 10);
    assert_eq!(*partial.monster_data_end(), 480000);
    assert_eq!(*partial.total_tilemaps(), 0x100);

    assert!(RomLayout::from_ron_str("(total_monsters: \"ten\")").is_err());
}

#[test]
fn test_layout_save_load() {
    let path = temp_dir().join("gamingway_lib_layout_test").join("layout.ron");
    let mut layout = RomLayout::default();
    layout.set_total_spellbooks(14);

    layout.save(&path).unwrap();
    assert_eq!(RomLayout::load(&path).unwrap(), layout);
}
