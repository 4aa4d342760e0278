//! Data-quality warnings raised while turning a raw game into rows.
//!
//! Nothing here is fatal. Each issue names the game and the offending field so a
//! warning can be traced back to the source page.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A single raw value did not parse into its expected shape.
    MalformedField,
    /// Event detail cells matched no classifier rule.
    UnclassifiableEvent,
    /// The game-finished gate failed; the game was skipped.
    IncompleteGame,
    /// Values that should agree with each other do not.
    StructuralInconsistency,
}

impl IssueKind {
    pub const ALL: [IssueKind; 4] = [
        IssueKind::MalformedField,
        IssueKind::UnclassifiableEvent,
        IssueKind::IncompleteGame,
        IssueKind::StructuralInconsistency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MalformedField => "malformed_field",
            IssueKind::UnclassifiableEvent => "unclassifiable_event",
            IssueKind::IncompleteGame => "incomplete_game",
            IssueKind::StructuralInconsistency => "structural_inconsistency",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub game_id: String,
    /// Raw field name, e.g. `shots_by_period_home` or `game_events[4].details_2`.
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] game {} field {}: {}",
            self.kind, self.game_id, self.field, self.message
        )
    }
}

/// Per-game collector. Every recorded issue is also emitted as a `warn!` event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueLog {
    game_id: String,
    issues: Vec<Issue>,
}

impl IssueLog {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            issues: Vec::new(),
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn record(&mut self, kind: IssueKind, field: impl Into<String>, message: impl Into<String>) {
        let issue = Issue {
            game_id: self.game_id.clone(),
            field: field.into(),
            kind,
            message: message.into(),
        };
        warn!(
            game_id = %issue.game_id,
            field = %issue.field,
            kind = %issue.kind,
            "{}",
            issue.message
        );
        self.issues.push(issue);
    }

    pub fn malformed(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.record(IssueKind::MalformedField, field, message);
    }

    pub fn unclassifiable(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.record(IssueKind::UnclassifiableEvent, field, message);
    }

    pub fn incomplete(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.record(IssueKind::IncompleteGame, field, message);
    }

    pub fn inconsistent(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.record(IssueKind::StructuralInconsistency, field, message);
    }

    /// Take over issues collected elsewhere (e.g. by a nested stage).
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
