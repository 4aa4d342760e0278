//! Input boundary: raw field bags extracted from game-report pages.
//!
//! A [`RawGame`] is a flat map of named values (single strings or string lists)
//! plus the repeated event, shootout and lineup records. Files hold either one
//! game object or an array of them.

pub mod discovery;
pub mod error;
pub mod fields;
pub mod loader;
pub mod raw;

pub use discovery::{list_json_files, resolve_inputs};
pub use error::{IngestError, Result};
pub use loader::{LoadedFile, load_raw_games, parse_raw_games};
pub use raw::{RawEvent, RawGame, RawLine, RawLineup, RawShootoutAttempt, RawValue};
