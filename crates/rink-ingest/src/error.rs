//! Error types for loading raw game files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or decoding raw game files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path does not exist.
    #[error("input not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// File is not a raw game object or an array of them.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// One entry of a file could not be read as a raw game.
    #[error(
        "failed to decode game #{index} (game_id {}) in {path}: {source}",
        .game_id.as_deref().unwrap_or("unknown")
    )]
    GameDecode {
        path: PathBuf,
        index: usize,
        game_id: Option<String>,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::NotFound {
            path: PathBuf::from("/path/to/games"),
        };
        assert_eq!(err.to_string(), "input not found: /path/to/games");
    }

    #[test]
    fn game_decode_names_the_entry() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = IngestError::GameDecode {
            path: PathBuf::from("games.json"),
            index: 2,
            game_id: None,
            source,
        };
        assert!(err.to_string().starts_with("failed to decode game #2 (game_id unknown) in games.json"));
    }
}
