//! Decoding raw game files.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::fields::GAME_ID;
use crate::raw::RawGame;

/// Games decoded from one file.
///
/// An entry that is not a valid raw game is reported in `rejected` and does not
/// stop the rest of the file from loading.
#[derive(Debug, Default)]
pub struct LoadedFile {
    pub games: Vec<RawGame>,
    pub rejected: Vec<IngestError>,
}

/// Natural id of an undecodable entry, when one can still be read.
fn entry_game_id(entry: &Value) -> Option<String> {
    match entry.get(GAME_ID)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Decodes raw games from JSON text: either one object or an array of objects.
///
/// Text that is not JSON at all fails the whole file; a single bad entry only
/// rejects that entry.
pub fn parse_raw_games(text: &str, path: &Path) -> Result<LoadedFile> {
    let decoded: Value = serde_json::from_str(text).map_err(|e| IngestError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    let entries = match decoded {
        Value::Array(entries) => entries,
        single => vec![single],
    };

    let mut loaded = LoadedFile::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let game_id = entry_game_id(&entry);
        match serde_json::from_value::<RawGame>(entry) {
            Ok(game) => loaded.games.push(game),
            Err(source) => {
                warn!(
                    path = %path.display(),
                    index,
                    game_id = game_id.as_deref().unwrap_or("unknown"),
                    error = %source,
                    "raw game rejected"
                );
                loaded.rejected.push(IngestError::GameDecode {
                    path: path.to_path_buf(),
                    index,
                    game_id,
                    source,
                });
            }
        }
    }
    Ok(loaded)
}

/// Loads every raw game stored in one file.
pub fn load_raw_games(path: &Path) -> Result<LoadedFile> {
    if !path.exists() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let loaded = parse_raw_games(&text, path)?;
    debug!(
        path = %path.display(),
        games = loaded.games.len(),
        rejected = loaded.rejected.len(),
        "loaded raw games"
    );
    Ok(loaded)
}
