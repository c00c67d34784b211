//! Core data structures for .mo catalog components.
//!
//! This module defines the types shared by the parser layers:
//! - The transient file header and string descriptors
//! - The owned [`Catalog`] produced by a parse
//! - The [`ParseOutcome`] that pairs a catalog with the error that stopped it

use std::collections::HashMap;
use super::error::{MoError, Result};

/// Magic number of a catalog written in little-endian byte order.
pub const MAGIC: u32 = 0x9504_12de;

/// The same magic number as it reads when the catalog was written big-endian.
pub const MAGIC_SWAPPED: u32 = 0xde12_0495;

/// Size of the mandatory header: magic, version, count and two table offsets.
pub const HEADER_SIZE: usize = 20;

/// Size of the header including the hash table size and offset fields.
pub const EXTENDED_HEADER_SIZE: usize = 28;

/// Size of one `(length, offset)` descriptor.
pub const DESCRIPTOR_SIZE: u64 = 8;

/// Byte order of every 32-bit field in a catalog, inferred from the magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

impl Endianness {
    /// Maps the first four bytes, read little-endian, to the file's byte order.
    pub fn from_magic(magic_le: u32) -> Option<Self> {
        match magic_le {
            MAGIC => Some(Self::Little),
            MAGIC_SWAPPED => Some(Self::Big),
            _ => None,
        }
    }
}

/// Parsed fixed header of a .mo file.
///
/// Only lives for the duration of a parse; offsets are relative to the start
/// of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoHeader {
    pub byte_order: Endianness,
    pub version: u32,
    pub entry_count: u32,
    pub original_table_offset: u32,
    pub translated_table_offset: u32,
    /// Hash table size and offset, present when the buffer holds the 28-byte header.
    /// Read for diagnostics only; lookups never go through the hash table.
    pub hash_table: Option<(u32, u32)>,
}

/// A `(length, offset)` pair locating one string within the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub length: u32,
    pub offset: u32,
}

/// The message-id to translation mapping extracted from one catalog.
///
/// Keys and values are opaque byte strings. Entries iterate in table order,
/// and when the same message id appears twice the first one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    index: HashMap<Vec<u8>, usize>,
    byte_order: Endianness,
}

impl Catalog {
    pub(crate) fn with_capacity(capacity: usize, byte_order: Endianness) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            byte_order,
        }
    }

    /// Stores an entry unless its message id is already present.
    ///
    /// Returns `false` when the entry was a duplicate and got dropped.
    pub(crate) fn insert(&mut self, msgid: Vec<u8>, msgstr: Vec<u8>) -> bool {
        if self.index.contains_key(&msgid) {
            return false;
        }
        self.index.insert(msgid.clone(), self.entries.len());
        self.entries.push((msgid, msgstr));
        true
    }

    /// Number of distinct message ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the translation for a message id.
    pub fn get(&self, msgid: &[u8]) -> Option<&[u8]> {
        self.index
            .get(msgid)
            .map(|&i| self.entries[i].1.as_slice())
    }

    pub fn contains_key(&self, msgid: &[u8]) -> bool {
        self.index.contains_key(msgid)
    }

    /// Iterates over `(msgid, msgstr)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    /// Iterates over message ids in table order.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.entries.iter().map(|(k, _)| k.as_slice())
    }

    /// Byte order of the file this catalog was read from.
    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }
}

/// Result of a parse that keeps whatever entries were extracted before a failure.
///
/// `error` is `None` only when the whole catalog was read. When it is set,
/// `catalog` holds the entries committed before the failing descriptor, which
/// is empty for header-level failures.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub catalog: Catalog,
    pub error: Option<MoError>,
}

impl ParseOutcome {
    pub(crate) fn complete(catalog: Catalog) -> Self {
        Self { catalog, error: None }
    }

    pub(crate) fn failed(catalog: Catalog, error: MoError) -> Self {
        Self { catalog, error: Some(error) }
    }

    /// Returns `true` when the catalog was read to the end without error.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Discards any partial catalog and surfaces the error, if one occurred.
    pub fn into_result(self) -> Result<Catalog> {
        match self.error {
            None => Ok(self.catalog),
            Some(err) => Err(err),
        }
    }
}
