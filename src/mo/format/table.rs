//! # Descriptor Table Parsing
//!
//! A catalog stores two tables of `(length, offset)` descriptors, one for the
//! original strings and one for the translations, indexed in lockstep. This
//! module checks that both tables fit in the buffer and then copies every
//! referenced string pair into a [`Catalog`].
//!
//! Extraction stops at the first descriptor pointing outside the buffer. The
//! entries committed before that point are returned alongside the error.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::{debug, trace, warn};

use crate::mo::types::error::{MoError, TableKind};
use crate::mo::types::models::{
    Catalog, Descriptor, Endianness, MoHeader, ParseOutcome, DESCRIPTOR_SIZE,
};
use crate::mo::utils;

/// Extracts all entries described by `header` from `buf`.
pub fn parse_entries(buf: &[u8], header: &MoHeader) -> ParseOutcome {
    match header.byte_order {
        Endianness::Little => parse_entries_with::<LittleEndian>(buf, header),
        Endianness::Big => parse_entries_with::<BigEndian>(buf, header),
    }
}

fn parse_entries_with<B: ByteOrder>(buf: &[u8], header: &MoHeader) -> ParseOutcome {
    if let Err(e) = check_table_bounds(buf, header) {
        return ParseOutcome::failed(Catalog::with_capacity(0, header.byte_order), e);
    }

    // Both tables fit, so the entry count is bounded by the buffer size
    let mut catalog = Catalog::with_capacity(header.entry_count as usize, header.byte_order);

    for index in 0..header.entry_count {
        match read_entry::<B>(buf, header, index) {
            Ok((msgid, msgstr)) => {
                if !catalog.insert(msgid.to_vec(), msgstr.to_vec()) {
                    debug!("Entry {}: duplicate message id ignored", index);
                }
            }
            Err(e) => {
                warn!(
                    "Catalog truncated at entry {} of {}: keeping {} entries",
                    index,
                    header.entry_count,
                    catalog.len()
                );
                return ParseOutcome::failed(catalog, e);
            }
        }
    }

    ParseOutcome::complete(catalog)
}

/// Resolves entry `index` to its `(msgid, msgstr)` byte ranges.
fn read_entry<'a, B: ByteOrder>(
    buf: &'a [u8],
    header: &MoHeader,
    index: u32,
) -> Result<(&'a [u8], &'a [u8]), MoError> {
    let original = read_descriptor::<B>(buf, header.original_table_offset, index)
        .ok_or_else(|| table_overrun(buf, header, TableKind::Original))?;
    let translated = read_descriptor::<B>(buf, header.translated_table_offset, index)
        .ok_or_else(|| table_overrun(buf, header, TableKind::Translated))?;
    trace!("Entry {}: original={:?}, translated={:?}", index, original, translated);

    let msgid = slice_string(buf, original, index, TableKind::Original)?;
    let msgstr = slice_string(buf, translated, index, TableKind::Translated)?;
    Ok((msgid, msgstr))
}

/// Verifies both descriptor tables lie entirely inside the buffer.
fn check_table_bounds(buf: &[u8], header: &MoHeader) -> Result<(), MoError> {
    let table_len = u64::from(header.entry_count) * DESCRIPTOR_SIZE;

    for (table, offset) in [
        (TableKind::Original, header.original_table_offset),
        (TableKind::Translated, header.translated_table_offset),
    ] {
        if utils::region_end(offset, table_len, buf.len()).is_none() {
            return Err(table_overrun(buf, header, table));
        }
    }

    Ok(())
}

fn table_overrun(buf: &[u8], header: &MoHeader, table: TableKind) -> MoError {
    let offset = match table {
        TableKind::Original => header.original_table_offset,
        TableKind::Translated => header.translated_table_offset,
    };
    MoError::TruncatedTableHeader {
        table,
        offset,
        entry_count: header.entry_count,
        size: buf.len(),
    }
}

/// Reads descriptor `index` from the table starting at `table_offset`.
fn read_descriptor<B: ByteOrder>(buf: &[u8], table_offset: u32, index: u32) -> Option<Descriptor> {
    let pos = u64::from(table_offset) + u64::from(index) * DESCRIPTOR_SIZE;
    let pos = usize::try_from(pos).ok()?;
    Some(Descriptor {
        length: utils::read_u32::<B>(buf, pos)?,
        offset: utils::read_u32::<B>(buf, pos.checked_add(4)?)?,
    })
}

/// Borrows the bytes a descriptor points at, failing if they run past the buffer.
fn slice_string(
    buf: &[u8],
    descriptor: Descriptor,
    index: u32,
    table: TableKind,
) -> Result<&[u8], MoError> {
    utils::region_end(descriptor.offset, u64::from(descriptor.length), buf.len())
        .and_then(|end| buf.get(descriptor.offset as usize..end))
        .ok_or(MoError::TruncatedString {
            index,
            table,
            offset: descriptor.offset,
            length: descriptor.length,
            size: buf.len(),
        })
}
