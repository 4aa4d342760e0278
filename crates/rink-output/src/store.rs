//! Row sinks and the per-game transactional store.
//!
//! The projector writes through [`RowSink`]. A [`GameStore`] hands out a staging
//! sink for one game and makes its rows visible only if every insertion
//! succeeded.

use std::collections::{BTreeMap, BTreeSet};

use rink_model::{GameId, Row, RowKey, TableName};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{table} has no column {column:?}")]
    UnknownColumn { table: TableName, column: String },

    #[error("row for {table} rejected: {message}")]
    Rejected { table: TableName, message: String },
}

/// Destination of projected rows.
pub trait RowSink {
    /// Insert one row and return its key.
    ///
    /// For tables with a surrogate key column the sink assigns the key and writes
    /// it into that column; the projector uses the returned value to link child
    /// rows.
    fn insert(&mut self, row: Row) -> Result<RowKey, StoreError>;
}

/// Result of a [`GameStore::write_game`] call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome<T> {
    Committed(T),
    /// The game id is already stored; nothing was written.
    Duplicate,
}

/// A store that accepts one game at a time, atomically.
pub trait GameStore {
    /// Run `write` against a staging sink and commit its rows if it returns `Ok`.
    ///
    /// A game whose natural id is already present is not written again.
    fn write_game<T, F>(&mut self, game_id: &GameId, write: F) -> Result<WriteOutcome<T>, StoreError>
    where
        F: FnOnce(&mut dyn RowSink) -> Result<T, StoreError>;
}

/// Staging sink: validates rows and assigns keys continuing from the store's
/// current row counts.
#[derive(Debug, Default)]
pub struct RowBuffer {
    next_keys: BTreeMap<TableName, u64>,
    rows: BTreeMap<TableName, Vec<Row>>,
}

impl RowBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn starting_at(next_keys: BTreeMap<TableName, u64>) -> Self {
        Self {
            next_keys,
            rows: BTreeMap::new(),
        }
    }

    pub fn rows(&self, table: TableName) -> &[Row] {
        self.rows.get(&table).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_rows(self) -> BTreeMap<TableName, Vec<Row>> {
        self.rows
    }
}

impl RowSink for RowBuffer {
    fn insert(&mut self, mut row: Row) -> Result<RowKey, StoreError> {
        let table = row.table;
        if let Some(column) = row.cells.keys().find(|column| table.column(column).is_none()) {
            return Err(StoreError::UnknownColumn {
                table,
                column: column.clone(),
            });
        }
        let next = self.next_keys.entry(table).or_insert(1);
        let key = RowKey::new(*next);
        *next += 1;
        if let Some(key_column) = table.key_column() {
            row.set(key_column, key);
        }
        self.rows.entry(table).or_default().push(row);
        Ok(key)
    }
}

/// In-process store: one row vector per table plus the set of stored game ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: BTreeMap<TableName, Vec<Row>>,
    games: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, table: TableName) -> &[Row] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn row_count(&self, table: TableName) -> usize {
        self.rows(table).len()
    }

    pub fn contains_game(&self, game_id: &GameId) -> bool {
        self.games.contains(game_id.as_str())
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    fn next_keys(&self) -> BTreeMap<TableName, u64> {
        self.tables
            .iter()
            .map(|(table, rows)| (*table, rows.len() as u64 + 1))
            .collect()
    }
}

impl GameStore for MemoryStore {
    fn write_game<T, F>(&mut self, game_id: &GameId, write: F) -> Result<WriteOutcome<T>, StoreError>
    where
        F: FnOnce(&mut dyn RowSink) -> Result<T, StoreError>,
    {
        if self.contains_game(game_id) {
            debug!(game_id = %game_id, "game already stored");
            return Ok(WriteOutcome::Duplicate);
        }

        let mut buffer = RowBuffer::starting_at(self.next_keys());
        let value = write(&mut buffer)?;

        let staged = buffer.len();
        for (table, rows) in buffer.into_rows() {
            self.tables.entry(table).or_default().extend(rows);
        }
        self.games.insert(game_id.as_str().to_string());
        debug!(game_id = %game_id, rows = staged, "game committed");
        Ok(WriteOutcome::Committed(value))
    }
}
