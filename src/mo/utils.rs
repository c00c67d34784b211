//! Low-level byte reading utilities

use byteorder::ByteOrder;

/// Read a 32-bit number at `pos` in the byte order `B`.
///
/// Returns `None` instead of panicking when fewer than four bytes remain.
pub fn read_u32<B: ByteOrder>(buf: &[u8], pos: usize) -> Option<u32> {
    let end = pos.checked_add(4)?;
    buf.get(pos..end).map(B::read_u32)
}

/// Returns the exclusive end of a `len`-byte region at `offset` if it fits in
/// a buffer of `size` bytes.
///
/// The sum is taken in 64 bits from 32-bit inputs, so corrupt fields close to
/// `u32::MAX` cannot wrap around into a passing check.
pub fn region_end(offset: u32, len: u64, size: usize) -> Option<usize> {
    let end = u64::from(offset).checked_add(len)?;
    if end > size as u64 {
        return None;
    }
    usize::try_from(end).ok()
}
