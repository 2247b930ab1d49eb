//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
This module contains the [PointerTable], used to read and write any list of [PointerRecord]s.

A pointer table is a list of 16-bit little endian pointers, one per record, followed somewhere else by the data of
those records, one after another. The address of a record is its pointer plus the table's bonus.

Some tables have one more pointer than records, marking where the data of the last record ends. Records without
length or terminator (launchers, triggers) need it to know where they end, as each one of them ends where the next one starts.

Some tables let consecutive records share data: if a record has no data of its own, its pointer is the same as
the one of the last record that had data.

# Writing

Writing a table is all-or-nothing. Everything is encoded and checked in memory first, and the rom is only touched
once we know the whole table fits in its region, and all of its pointers fit in 16 bits.
!*/

use getset::*;

#[cfg(feature = "integration_log")] use log::warn;

use crate::error::{GLibError, Result};
use crate::records::{DecodeableExtraData, EncodeableExtraData, PointerRecord};
use crate::rom::RomData;

/// Size of a pointer, in bytes.
pub const POINTER_SIZE: usize = 2;


//---------------------------------------------------------------------------//
//                              Enum & Structs
//---------------------------------------------------------------------------//

/// This struct describes where a pointer table and its data live, and how to read its pointers.
#[derive(PartialEq, Eq, Clone, Debug, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
pub struct PointerTable {

    /// Name of the category of the records. Used in errors and logs.
    name: String,

    /// Address of the first pointer.
    table_start: usize,

    /// Value added to a pointer to get the address of its record.
    bonus: usize,

    /// First address available for record data.
    data_start: usize,

    /// First address after the region available for record data.
    data_end: usize,

    /// If records without data reuse the pointer of the record before them.
    shared_records: bool,

    /// If the table has an extra pointer after the last one, marking the end of the data.
    end_pointer: bool,
}

//---------------------------------------------------------------------------//
//                         Implementation of PointerTable
//---------------------------------------------------------------------------//

impl PointerTable {

    /// This function creates a new table description, without shared records or end pointer.
    pub fn new(name: &str, table_start: usize, bonus: usize, data_start: usize, data_end: usize) -> Self {
        Self {
            name: name.to_owned(),
            table_start,
            bonus,
            data_start,
            data_end,
            shared_records: false,
            end_pointer: false,
        }
    }

    /// This function marks the table as one where records without data reuse the pointer of the record before them.
    pub fn with_shared_records(mut self) -> Self {
        self.shared_records = true;
        self
    }

    /// This function marks the table as one with an extra pointer marking the end of the data.
    pub fn with_end_pointer(mut self) -> Self {
        self.end_pointer = true;
        self
    }

    /// This function returns the amount of bytes available for record data.
    pub fn room(&self) -> usize {
        self.data_end.saturating_sub(self.data_start)
    }

    /// This function returns the address of the pointer of the record `index`.
    pub fn pointer_address(&self, index: usize) -> usize {
        self.table_start + index * POINTER_SIZE
    }

    /// This function returns the address the pointer of the record `index` points to.
    pub fn record_address(&self, rom: &RomData, index: usize) -> Result<usize> {
        Ok(rom.read_wide(self.pointer_address(index), POINTER_SIZE)? as usize + self.bonus)
    }

    /// This function decodes `count` records whose end is known by their own data.
    ///
    /// If the table allows shared records, a record pointing to the same address as the one before it is returned as
    /// a shared record instead of being decoded again.
    pub fn read_all<T: PointerRecord>(&self, rom: &RomData, count: usize) -> Result<Vec<T>> {
        let mut records = Vec::with_capacity(count);
        let mut last_address = None;

        for index in 0..count {
            let address = self.record_address(rom, index)?;
            if self.shared_records && last_address == Some(address) {
                records.push(T::default());
                continue;
            }

            let mut data = rom.reader_at(address)?;
            records.push(T::decode(&mut data, &Some(decodeable_extra_data(index)))?);
            last_address = Some(address);
        }

        Ok(records)
    }

    /// This function decodes `count` records, each one bounded by its own pointer and the next one.
    ///
    /// This reads `count + 1` pointers, so the last record needs either an end pointer or a record after it.
    pub fn read_all_bounded<T: PointerRecord>(&self, rom: &RomData, count: usize) -> Result<Vec<T>> {
        let mut records = Vec::with_capacity(count);
        if count == 0 {
            return Ok(records);
        }

        let mut start = self.record_address(rom, 0)?;
        for index in 0..count {
            let finish = self.record_address(rom, index + 1)?;
            let mut data = rom.reader_range(start, finish)?;
            records.push(T::decode(&mut data, &Some(decodeable_extra_data(index)))?);
            start = finish;
        }

        Ok(records)
    }

    /// This function encodes `records` and writes them, along with their pointers, to the rom.
    ///
    /// Nothing is written if any record fails to encode, if the records don't fit in the data region,
    /// if any pointer doesn't fit in 16 bits, or if a shared record has no record with data before it.
    ///
    /// Returns the amount of bytes of record data written.
    pub fn write_all<T: PointerRecord>(&self, rom: &mut RomData, records: &[T]) -> Result<usize> {
        let room = self.room();
        let needed = records.iter()
            .filter(|record| !(self.shared_records && record.is_shared()))
            .map(|record| record.size_needed())
            .sum::<usize>();

        check_room(&self.name, needed, room)?;

        // First pass: encode everything and calculate the pointers.
        let mut pointers = Vec::with_capacity(records.len() + 1);
        let mut encoded = vec![];
        let mut address = self.data_start;
        let mut last_address = None;

        for (index, record) in records.iter().enumerate() {
            if self.shared_records && record.is_shared() {
                let shared_address = last_address.ok_or_else(|| GLibError::EncodingSharedRecordWithoutPrevious(index, self.name.to_owned()))?;
                pointers.push(self.pointer_to(index, shared_address)?);
                continue;
            }

            let mut data: Vec<u8> = vec![];
            record.encode(&mut data, &Some(encodeable_extra_data(index)))?;

            let len = data.len();
            pointers.push(self.pointer_to(index, address)?);
            encoded.push((address, data));
            last_address = Some(address);
            address += len;
        }

        if self.end_pointer {
            pointers.push(self.pointer_to(records.len(), address)?);
        }

        let used = address - self.data_start;
        check_room(&self.name, used, room)?;
        rom.check_range(self.table_start, pointers.len() * POINTER_SIZE)?;
        rom.check_range(self.data_start, used)?;

        // Second pass: commit.
        for (index, pointer) in pointers.iter().enumerate() {
            rom.write_wide(self.pointer_address(index), u32::from(*pointer), POINTER_SIZE)?;
        }

        for (address, data) in &encoded {
            rom.inject(*address, data)?;
        }

        Ok(used)
    }

    /// This function returns the pointer to `address`, failing if it doesn't fit in 16 bits.
    fn pointer_to(&self, index: usize, address: usize) -> Result<u16> {
        address.checked_sub(self.bonus)
            .and_then(|pointer| u16::try_from(pointer).ok())
            .ok_or(GLibError::EncodingPointerOutOfRange(index, address))
    }
}

/// This function checks that `needed` bytes of `name` data fit in `room` bytes.
pub(crate) fn check_room(name: &str, needed: usize, room: usize) -> Result<()> {
    if needed > room {
        #[cfg(feature = "integration_log")] {
            warn!("Refusing to write {}: {} bytes needed, {} bytes available.", name, needed, room);
        }

        return Err(GLibError::EncodingNotEnoughRoom(name.to_owned(), needed, room, needed - room));
    }

    Ok(())
}

fn decodeable_extra_data(index: usize) -> DecodeableExtraData {
    let mut extra_data = DecodeableExtraData::default();
    extra_data.set_record_index(index);
    extra_data
}

fn encodeable_extra_data(index: usize) -> EncodeableExtraData {
    let mut extra_data = EncodeableExtraData::default();
    extra_data.set_record_index(index);
    extra_data
}
