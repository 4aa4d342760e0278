use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::issues::{Issue, IssueKind};
use crate::schema::TableName;

/// What happened to one game of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// All rows committed.
    Stored,
    /// The finished-game gate failed or the game id was unusable.
    Skipped,
    /// The natural id was already present in the store.
    Duplicate,
    /// The store rejected the game; nothing of it is visible.
    Failed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Stored => "stored",
            GameStatus::Skipped => "skipped",
            GameStatus::Duplicate => "duplicate",
            GameStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameReport {
    pub game_id: String,
    pub status: GameStatus,
    pub rows: BTreeMap<TableName, usize>,
    pub issues: Vec<Issue>,
    pub error: Option<String>,
}

impl GameReport {
    pub fn new(game_id: impl Into<String>, status: GameStatus) -> Self {
        Self {
            game_id: game_id.into(),
            status,
            rows: BTreeMap::new(),
            issues: Vec::new(),
            error: None,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.values().sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub games: Vec<GameReport>,
}

impl BatchReport {
    pub fn count(&self, status: GameStatus) -> usize {
        self.games.iter().filter(|game| game.status == status).count()
    }

    pub fn rows_per_table(&self) -> BTreeMap<TableName, usize> {
        let mut totals: BTreeMap<TableName, usize> =
            TableName::ALL.into_iter().map(|table| (table, 0)).collect();
        for game in &self.games {
            for (table, count) in &game.rows {
                *totals.entry(*table).or_default() += count;
            }
        }
        totals
    }

    pub fn issue_counts(&self) -> BTreeMap<IssueKind, usize> {
        let mut counts: BTreeMap<IssueKind, usize> =
            IssueKind::ALL.into_iter().map(|kind| (kind, 0)).collect();
        for issue in self.games.iter().flat_map(|game| game.issues.iter()) {
            *counts.entry(issue.kind).or_default() += 1;
        }
        counts
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.games.iter().flat_map(|game| game.issues.iter())
    }

    pub fn has_failures(&self) -> bool {
        self.count(GameStatus::Failed) > 0
    }
}
