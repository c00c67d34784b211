use std::fs::File;
use std::io::Read;
use std::path::Path;
use log::{debug, info};

use super::format;
use super::types::error::{MoError, Result};
use super::types::models::{Catalog, ParseOutcome};

/// Parses a catalog buffer, failing on the first structural problem.
///
/// Use [`parse_partial`] to keep the entries read before a corrupt descriptor.
///
/// # Errors
/// Returns an error if:
/// - The buffer is shorter than the 20-byte header
/// - The magic number is not recognised
/// - The format revision is not 0 or 1
/// - A descriptor table or string runs past the end of the buffer
pub fn parse(buf: &[u8]) -> Result<Catalog> {
    parse_partial(buf).into_result()
}

/// Parses a catalog buffer, keeping every entry extracted before a failure.
///
/// Header failures leave the catalog empty. A descriptor pointing outside the
/// buffer stops the walk, and the entries before it stay in the outcome.
pub fn parse_partial(buf: &[u8]) -> ParseOutcome {
    debug!("Parsing catalog buffer of {} bytes", buf.len());

    let header = match format::header::parse(buf) {
        Ok(header) => header,
        Err(e) => return ParseOutcome::failed(Catalog::default(), e),
    };

    let outcome = format::table::parse_entries(buf, &header);
    if outcome.is_complete() {
        info!(
            "Catalog parsed: {} entries ({} descriptors, {:?}-endian)",
            outcome.catalog.len(),
            header.entry_count,
            header.byte_order
        );
    }
    outcome
}

/// Reads the whole file into memory. The handle is closed before returning.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| MoError::from_io(path, e))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(|e| MoError::from_io(path, e))?;
    debug!("Read {} bytes from {}", buf.len(), path.display());
    Ok(buf)
}

/// Loads and parses a catalog file, failing on any I/O or structural problem.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
    load_partial(path).into_result()
}

/// Loads a catalog file, keeping whatever could be extracted.
///
/// A file that cannot be opened or read yields an empty catalog; the outcome
/// then carries [`MoError::FileNotFound`] or [`MoError::FileUnreadable`]
/// rather than a parse error.
pub fn load_partial(path: impl AsRef<Path>) -> ParseOutcome {
    let path = path.as_ref();
    info!("Opening catalog file: {}", path.display());
    match read_file(path) {
        Ok(buf) => parse_partial(&buf),
        Err(e) => ParseOutcome::failed(Catalog::default(), e),
    }
}
