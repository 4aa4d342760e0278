#![deny(unsafe_code)]

//! Relational layout of the projected rows.
//!
//! Eight tables, each with a fixed column list. `game_events` is the only table
//! with a storage-assigned surrogate key; `plus_minus` references it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;
use crate::ids::RowKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableName {
    Games,
    Lines,
    Refs,
    StatsByPeriod,
    GoalieStats,
    GameEvents,
    PlusMinus,
    Shootouts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Int,
    Float,
    Bool,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "TEXT",
            ColumnType::Int => "INT",
            ColumnType::Float => "FLOAT",
            ColumnType::Bool => "BOOL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
}

const fn text(name: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        ty: ColumnType::Text,
    }
}

const fn int(name: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        ty: ColumnType::Int,
    }
}

const fn float(name: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        ty: ColumnType::Float,
    }
}

const fn boolean(name: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        ty: ColumnType::Bool,
    }
}

const GAMES: &[ColumnDef] = &[
    text("game_id"),
    text("event_url"),
    text("line_up_url"),
    text("date_time"),
    text("league"),
    text("arena"),
    text("home_name"),
    text("home_name_abbrev"),
    text("away_name"),
    text("away_name_abbrev"),
    int("spectators"),
    int("score_home"),
    int("score_away"),
    int("shots_total_home"),
    int("shots_total_away"),
    int("saves_total_home"),
    int("saves_total_away"),
    int("pim_total_home"),
    int("pim_total_away"),
    text("pp_time_home"),
    text("pp_time_away"),
    float("pp_perc_home"),
    float("pp_perc_away"),
];

const LINES: &[ColumnDef] = &[
    text("game_id"),
    text("side"),
    text("line_name"),
    int("jersey_number"),
    text("last_name"),
    text("first_name"),
    boolean("starting"),
];

const REFS: &[ColumnDef] = &[text("game_id"), text("role"), text("name")];

const STATS_BY_PERIOD: &[ColumnDef] = &[
    text("game_id"),
    text("side"),
    text("stat"),
    int("period"),
    int("value"),
];

const GOALIE_STATS: &[ColumnDef] = &[
    text("game_id"),
    text("side"),
    text("team"),
    int("jersey_number"),
    text("last_name"),
    text("first_name"),
    int("saves"),
    int("shots"),
];

const GAME_EVENTS: &[ColumnDef] = &[
    int("event_id"),
    text("game_id"),
    int("seq"),
    text("time"),
    int("period"),
    text("event"),
    text("team"),
    text("side"),
    int("player_number"),
    text("player_last_name"),
    text("player_first_name"),
    int("assist_1_number"),
    text("assist_1_last_name"),
    text("assist_1_first_name"),
    int("assist_2_number"),
    text("assist_2_last_name"),
    text("assist_2_first_name"),
    text("event_type"),
    text("penalty_type"),
    text("penalty_start"),
    text("penalty_end"),
    text("ps_outcome"),
    int("ps_goalie_number"),
    text("note"),
];

const PLUS_MINUS: &[ColumnDef] = &[
    int("event_id"),
    text("game_id"),
    text("side"),
    text("on_ice"),
    int("jersey_number"),
];

const SHOOTOUTS: &[ColumnDef] = &[
    text("game_id"),
    int("attempt"),
    text("outcome"),
    int("score_home"),
    int("score_away"),
    text("team"),
    text("side"),
    int("shooter_number"),
    text("shooter_last_name"),
    text("shooter_first_name"),
    int("goalie_number"),
    text("goalie_last_name"),
    text("goalie_first_name"),
];

impl TableName {
    /// All tables in projection order.
    pub const ALL: [TableName; 8] = [
        TableName::Games,
        TableName::Lines,
        TableName::Refs,
        TableName::StatsByPeriod,
        TableName::GoalieStats,
        TableName::GameEvents,
        TableName::PlusMinus,
        TableName::Shootouts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Games => "games",
            TableName::Lines => "lines",
            TableName::Refs => "refs",
            TableName::StatsByPeriod => "stats_by_period",
            TableName::GoalieStats => "goalie_stats",
            TableName::GameEvents => "game_events",
            TableName::PlusMinus => "plus_minus",
            TableName::Shootouts => "shootouts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TableName::Games => "One row per game, keyed by the external game id",
            TableName::Lines => "Roster rows per line, coaches under reserved numbers",
            TableName::Refs => "Referees and linesmen",
            TableName::StatsByPeriod => "Shots, saves, penalty minutes and goals per period",
            TableName::GoalieStats => "Saves and shots faced per goalie",
            TableName::GameEvents => "Classified game events with a surrogate key",
            TableName::PlusMinus => "On-ice players credited for or against a goal",
            TableName::Shootouts => "Game-winning-shots attempts",
        }
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        match self {
            TableName::Games => GAMES,
            TableName::Lines => LINES,
            TableName::Refs => REFS,
            TableName::StatsByPeriod => STATS_BY_PERIOD,
            TableName::GoalieStats => GOALIE_STATS,
            TableName::GameEvents => GAME_EVENTS,
            TableName::PlusMinus => PLUS_MINUS,
            TableName::Shootouts => SHOOTOUTS,
        }
    }

    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        self.columns().iter().find(|column| column.name == name)
    }

    /// Column filled by the store on insertion, if the table has one.
    pub fn key_column(&self) -> Option<&'static str> {
        match self {
            TableName::GameEvents => Some("event_id"),
            _ => None,
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        TableName::ALL
            .into_iter()
            .find(|table| table.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownTable(s.to_string()))
    }
}

/// A single cell. Serializes as the bare JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(value) => Some(*value),
            CellValue::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<RowKey> for CellValue {
    fn from(value: RowKey) -> Self {
        CellValue::Int(i64::try_from(value.get()).unwrap_or(i64::MAX))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

/// One row insertion: a table plus column-name/value pairs.
///
/// Columns not set explicitly read as `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub table: TableName,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(table: TableName) -> Self {
        Self {
            table,
            cells: BTreeMap::new(),
        }
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: &str, value: impl Into<CellValue>) {
        debug_assert!(
            self.table.column(column).is_some(),
            "{column} is not a column of {}",
            self.table
        );
        self.cells.insert(column.to_string(), value.into());
    }

    pub fn get(&self, column: &str) -> &CellValue {
        const NULL: &CellValue = &CellValue::Null;
        self.cells.get(column).unwrap_or(NULL)
    }

    /// Values in schema column order.
    pub fn values(&self) -> impl Iterator<Item = (&'static str, &CellValue)> {
        self.table
            .columns()
            .iter()
            .map(|column| (column.name, self.get(column.name)))
    }
}
