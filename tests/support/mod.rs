#![allow(dead_code)]

// Builds .mo buffers in memory so tests can describe catalogs as data and
// then corrupt individual fields.

pub const MAGIC: u32 = 0x9504_12de;

/// Byte positions of the sections inside a built catalog.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub header_size: usize,
    pub original_table: usize,
    pub translated_table: usize,
    pub strings: usize,
}

#[derive(Debug, Clone)]
pub struct MoBuilder {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    version: u32,
    big_endian: bool,
    extended_header: bool,
}

impl Default for MoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            version: 0,
            big_endian: false,
            extended_header: true,
        }
    }

    pub fn entry(mut self, msgid: impl AsRef<[u8]>, msgstr: impl AsRef<[u8]>) -> Self {
        self.entries
            .push((msgid.as_ref().to_vec(), msgstr.as_ref().to_vec()));
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    /// Omit the hash table fields and emit only the 20-byte header.
    pub fn short_header(mut self) -> Self {
        self.extended_header = false;
        self
    }

    pub fn layout(&self) -> Layout {
        let n = self.entries.len();
        let header_size = if self.extended_header { 28 } else { 20 };
        Layout {
            header_size,
            original_table: header_size,
            translated_table: header_size + 8 * n,
            strings: header_size + 16 * n,
        }
    }

    /// Lays out the header, both tables and NUL-terminated string data, like msgfmt does.
    pub fn build(&self) -> Vec<u8> {
        let layout = self.layout();
        let n = self.entries.len() as u32;

        let mut original = Vec::new();
        let mut translated = Vec::new();
        let mut strings = Vec::new();
        for (msgid, msgstr) in &self.entries {
            original.push((msgid.len() as u32, (layout.strings + strings.len()) as u32));
            strings.extend_from_slice(msgid);
            strings.push(0);
            translated.push((msgstr.len() as u32, (layout.strings + strings.len()) as u32));
            strings.extend_from_slice(msgstr);
            strings.push(0);
        }

        let mut buf = Vec::new();
        let push = |buf: &mut Vec<u8>, v: u32| {
            if self.big_endian {
                buf.extend_from_slice(&v.to_be_bytes());
            } else {
                buf.extend_from_slice(&v.to_le_bytes());
            }
        };
        push(&mut buf, MAGIC);
        push(&mut buf, self.version);
        push(&mut buf, n);
        push(&mut buf, layout.original_table as u32);
        push(&mut buf, layout.translated_table as u32);
        if self.extended_header {
            push(&mut buf, 0);
            push(&mut buf, 0);
        }
        for (len, off) in original.iter().chain(translated.iter()) {
            push(&mut buf, *len);
            push(&mut buf, *off);
        }
        buf.extend_from_slice(&strings);
        buf
    }
}

/// Overwrites the little-endian u32 at `pos`.
pub fn put_u32_le(buf: &mut [u8], pos: usize, value: u32) {
    buf[pos..pos + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn catalog_pairs(catalog: &mo_dump::Catalog) -> Vec<(Vec<u8>, Vec<u8>)> {
    catalog
        .iter()
        .map(|(k, v)| (k.to_vec(), v.to_vec()))
        .collect()
}
