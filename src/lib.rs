//! # mo-dump
//!
//! A reader for compiled gettext message catalogs (`.mo` files).
//! Catalogs written in either byte order are supported; message ids and
//! translations are returned as raw bytes, with no charset conversion.
//!
//! **Note:** plural forms and `msgctxt` prefixes are not decoded. They appear
//! in keys and values exactly as stored.
pub mod mo;

// Re-export the main types for convenience
pub use mo::{
    load,
    load_partial,
    parse,
    parse_partial,
    MoError,
    Result,
    display::{quote_escape, ListingMode},
    types::models::{
        Catalog,
        Endianness,
        ParseOutcome,
    },
};
