//! Text rendering of a catalog for terminal output.
//!
//! Keys and values are arbitrary bytes, so everything here writes bytes and
//! never assumes UTF-8.

use std::io::{self, Write};
use std::str::FromStr;

use super::types::models::Catalog;

/// Program name shown in the usage text when the real one is unavailable.
pub const DEFAULT_PROGRAM_NAME: &str = "mo_dump";

/// What to print for each catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Message ids only.
    Keys,
    /// Message ids with their translations.
    Pairs,
}

impl FromStr for ListingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keys" => Ok(Self::Keys),
            "pairs" => Ok(Self::Pairs),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}

/// Wraps a byte string in double quotes, escaping newline, tab, NUL, quote and backslash.
///
/// All other bytes are copied verbatim, including invalid UTF-8.
pub fn quote_escape(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 2);
    out.push(b'"');
    for &b in bytes {
        match b {
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0 => out.extend_from_slice(b"\\0"),
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            _ => out.push(b),
        }
    }
    out.push(b'"');
    out
}

/// Writes the `Read <N> entries:` summary line.
pub fn write_summary<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Read {} entries:", catalog.len())
}

/// Writes one indented line per entry, in catalog order.
pub fn write_entries<W: Write>(out: &mut W, catalog: &Catalog, mode: ListingMode) -> io::Result<()> {
    for (msgid, msgstr) in catalog.iter() {
        out.write_all(b"  ")?;
        out.write_all(&quote_escape(msgid))?;
        if mode == ListingMode::Pairs {
            out.write_all(b" -> ")?;
            out.write_all(&quote_escape(msgstr))?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes the complete listing: summary line, one line per entry and a closing empty line.
pub fn render_listing<W: Write>(out: &mut W, catalog: &Catalog, mode: ListingMode) -> io::Result<()> {
    write_summary(out, catalog)?;
    write_entries(out, catalog, mode)?;
    writeln!(out)
}

/// Renders the usage text for the given program name.
pub fn usage(program: Option<&str>) -> String {
    let prog = program.unwrap_or(DEFAULT_PROGRAM_NAME);
    format!(
        "Usage:\n  {prog} mo-filename keys\n  {prog} mo-filename pairs\n\n",
        prog = prog
    )
}
