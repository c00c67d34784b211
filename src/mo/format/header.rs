//! .mo file header parsing.
//!
//! This module handles:
//! - Checking the buffer can hold the fixed header
//! - Recognising the magic number and the byte order it implies
//! - Validating the format revision

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::{debug, trace};
use crate::mo::types::{
    error::{MoError, Result},
    models::{Endianness, MoHeader, EXTENDED_HEADER_SIZE, HEADER_SIZE, MAGIC},
};

/// Parses the fixed header from the start of a catalog buffer.
///
/// # Header Structure
/// ```text
/// [0..4]   magic               0x950412de (byte order of the whole file)
/// [4..8]   version             0 or 1
/// [8..12]  entry count         N
/// [12..16] original table      offset of N (length, offset) pairs
/// [16..20] translated table    offset of N (length, offset) pairs
/// [20..28] hash table          size and offset (optional, informational)
/// ```
pub fn parse(buf: &[u8]) -> Result<MoHeader> {
    if buf.len() < HEADER_SIZE {
        return Err(MoError::TooSmall {
            size: buf.len(),
            expected: HEADER_SIZE,
        });
    }

    // The magic is compared in little-endian; a big-endian writer produces the swapped value
    let magic = LittleEndian::read_u32(&buf[0..4]);
    let byte_order = Endianness::from_magic(magic).ok_or(MoError::BadMagic {
        found: magic,
        expected: MAGIC,
    })?;
    trace!("Magic {:#010x}, byte order {:?}", magic, byte_order);

    let header = match byte_order {
        Endianness::Little => read_fields::<LittleEndian>(buf, byte_order),
        Endianness::Big => read_fields::<BigEndian>(buf, byte_order),
    };

    if header.version != 0 && header.version != 1 {
        return Err(MoError::UnsupportedVersion(header.version));
    }

    debug!(
        "Header: version={}, entries={}, original_table={:#x}, translated_table={:#x}, hash_table={:?}",
        header.version,
        header.entry_count,
        header.original_table_offset,
        header.translated_table_offset,
        header.hash_table
    );

    Ok(header)
}

/// Decodes the header fields; the caller has already checked the buffer holds `HEADER_SIZE` bytes.
fn read_fields<B: ByteOrder>(buf: &[u8], byte_order: Endianness) -> MoHeader {
    let hash_table = if buf.len() >= EXTENDED_HEADER_SIZE {
        Some((B::read_u32(&buf[20..24]), B::read_u32(&buf[24..28])))
    } else {
        None
    };

    MoHeader {
        byte_order,
        version: B::read_u32(&buf[4..8]),
        entry_count: B::read_u32(&buf[8..12]),
        original_table_offset: B::read_u32(&buf[12..16]),
        translated_table_offset: B::read_u32(&buf[16..20]),
        hash_table,
    }
}
