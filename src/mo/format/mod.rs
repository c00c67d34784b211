//! Binary layout parsing for .mo catalogs.
//!
//! # Module Organization
//!
//! - [`header`]: Validates the fixed header and detects the byte order
//! - [`table`]: Walks the two descriptor tables and extracts string pairs
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────────┐
//! │  Header (20/28 B)    │ ← header::parse()
//! ├──────────────────────┤
//! │  Original table      │ ┐
//! │  N × (len, offset)   │ │
//! ├──────────────────────┤ ├ table::parse_entries()
//! │  Translated table    │ │
//! │  N × (len, offset)   │ ┘
//! ├──────────────────────┤
//! │  String data         │
//! └──────────────────────┘
//! ```
//!
//! Table positions come from the header, so the sections need not appear in
//! this order.

pub mod header;
pub mod table;
