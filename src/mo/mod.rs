//! Core .mo catalog reader module

pub mod display;
pub mod format;
pub mod reader;
pub mod types;
mod utils;

pub use reader::{load, load_partial, parse, parse_partial, read_file};
pub use types::error::{MoError, Result, TableKind};
