//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! Module containing tests for decoding/encoding `Spellbook` records.

use std::io::Cursor;

use crate::error::GLibError;

use super::*;

#[test]
fn test_decode_spellbook() {
    let mut book = Spellbook::default();
    book.read_starting_spells(&mut Cursor::new(vec![0x01, 0x02, 0xFF])).unwrap();
    book.read_spell_progression(&mut Cursor::new(vec![0x03, 0x10, 0x0A, 0x11, 0x03, 0x12, 0xFF])).unwrap();

    assert_eq!(book.spells_at(0), &[0x01, 0x02]);
    assert_eq!(book.spells_at(3), &[0x10, 0x12]);
    assert_eq!(book.spells_at(10), &[0x11]);
    assert!(book.spells_at(50).is_empty());
}

#[test]
fn test_encode_spellbook() {
    let mut book = Spellbook::default();
    book.teach_spell(0, 0x05).unwrap();
    book.teach_spell(20, 0x30).unwrap();
    book.teach_spell(2, 0x21).unwrap();
    book.teach_spell(20, 0x31).unwrap();

    let mut starting: Vec<u8> = vec![];
    let mut progression: Vec<u8> = vec![];
    book.write_starting_spells(&mut starting).unwrap();
    book.write_spell_progression(&mut progression).unwrap();

    assert_eq!(starting, vec![0x05, 0xFF]);
    assert_eq!(progression, vec![2, 0x21, 20, 0x30, 20, 0x31, 0xFF]);
    assert_eq!(book.starting_spells_size(), starting.len());
    assert_eq!(book.spell_progression_size(), progression.len());

    // Decoding what we encoded must give back the same book, and encoding it again the same bytes.
    let mut decoded = Spellbook::default();
    decoded.read_starting_spells(&mut Cursor::new(starting.to_vec())).unwrap();
    decoded.read_spell_progression(&mut Cursor::new(progression.to_vec())).unwrap();
    assert_eq!(decoded, book);

    let mut progression_again: Vec<u8> = vec![];
    decoded.write_spell_progression(&mut progression_again).unwrap();
    assert_eq!(progression_again, progression);
}

#[test]
fn test_encode_spellbook_full_starting_spells() {
    let mut book = Spellbook::default();
    for spell in 0..MAX_STARTING_SPELLS as u8 {
        book.teach_spell(0, spell).unwrap();
    }

    // Full list, so no terminator.
    let mut starting: Vec<u8> = vec![];
    book.write_starting_spells(&mut starting).unwrap();
    assert_eq!(starting.len(), MAX_STARTING_SPELLS);
    assert_eq!(book.starting_spells_size(), MAX_STARTING_SPELLS);

    assert!(matches!(book.teach_spell(0, 0x40), Err(GLibError::SpellbookStartingSpellsFull(0x40, 24))));

    // Known spells are not an error.
    assert!(book.teach_spell(0, 0x03).is_ok());
    assert_eq!(book.spells_at(0).len(), MAX_STARTING_SPELLS);
}

#[test]
fn test_spellbook_helpers() {
    let mut book = Spellbook::default();
    book.teach_spell(5, 0x10).unwrap();
    book.teach_spell(5, 0x10).unwrap();
    book.teach_spell(6, 0x11).unwrap();
    book.teach_spell(0, 0x01).unwrap();
    assert_eq!(book.spells_at(5), &[0x10]);

    assert!(matches!(book.teach_spell(100, 0x10), Err(GLibError::SpellbookInvalidLevel(100))));

    book.clear_level(5);
    assert!(book.spells_at(5).is_empty());
    assert_eq!(book.spells_at(6), &[0x11]);

    // Empty levels are skipped.
    book.learned_spells_mut().insert(40, vec![]);
    let mut progression: Vec<u8> = vec![];
    book.write_spell_progression(&mut progression).unwrap();
    assert_eq!(progression, vec![6, 0x11, 0xFF]);

    book.clear_level(0);
    assert!(book.spells_at(0).is_empty());

    book.clear();
    assert_eq!(book, Spellbook::default());
}

#[test]
fn test_spellbook_errors() {
    let mut book = Spellbook::default();
    assert!(matches!(book.read_spell_progression(&mut Cursor::new(vec![0x03, 0x10])), Err(GLibError::DecodingSpellProgressionNoTerminator)));
    assert!(matches!(book.read_spell_progression(&mut Cursor::new(vec![0x03])), Err(GLibError::DecodingSpellProgressionNoTerminator)));

    book.learned_spells_mut().insert(0, vec![0x01]);
    assert!(matches!(book.write_spell_progression(&mut Vec::<u8>::new()), Err(GLibError::SpellbookInvalidLevel(0))));
}
