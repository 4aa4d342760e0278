//! The raw field bag handed over by the page-selection layer.
//!
//! Values are kept exactly as extracted. Nothing here trims, splits or parses; that
//! is the job of `rink-normalization` and `rink-transform`.

use std::collections::BTreeMap;

use rink_model::Side;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single extracted value: one string, an ordered list of strings, or nothing.
///
/// Numbers and booleans are accepted on input and kept as their JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    List(Vec<String>),
    Absent,
}

impl RawValue {
    /// The value as one string; list items are joined with a space.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Text(text) => text.clone(),
            RawValue::List(items) => items.join(" "),
            RawValue::Absent => String::new(),
        }
    }

    /// The value as a list; a single string is a one-item list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            RawValue::Text(text) => vec![text.clone()],
            RawValue::List(items) => items.clone(),
            RawValue::Absent => Vec::new(),
        }
    }

    pub fn is_absent(&self) -> bool {
        match self {
            RawValue::Absent => true,
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

/// Scalar JSON value as text; `None` for arrays and objects.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(RawValue::Absent),
            Value::Array(items) => items
                .into_iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .map(RawValue::List)
                .ok_or_else(|| D::Error::custom("list items must be strings, numbers or booleans")),
            Value::Object(_) => Err(D::Error::custom(
                "expected a string, number, boolean or list, found an object",
            )),
            scalar => scalar_text(scalar)
                .map(RawValue::Text)
                .ok_or_else(|| D::Error::custom("expected a scalar value")),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(value: Vec<String>) -> Self {
        RawValue::List(value)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(value: Vec<&str>) -> Self {
        RawValue::List(value.into_iter().map(ToString::to_string).collect())
    }
}

/// One row of the event table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    pub time: Option<String>,
    /// Event label, e.g. "Goal (PS)" or "2 min".
    pub event: Option<String>,
    pub team: Option<String>,
    pub player: Option<String>,
    pub assist_1: Option<String>,
    pub assist_2: Option<String>,
    pub details_1: Option<String>,
    pub details_2: Option<String>,
}

impl RawEvent {
    pub fn new(time: &str, event: &str, team: &str) -> Self {
        Self {
            time: Some(time.to_string()),
            event: Some(event.to_string()),
            team: Some(team.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_player(mut self, player: &str) -> Self {
        self.player = Some(player.to_string());
        self
    }

    #[must_use]
    pub fn with_assists(mut self, first: &str, second: &str) -> Self {
        self.assist_1 = Some(first.to_string());
        self.assist_2 = Some(second.to_string());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details_1: &str, details_2: &str) -> Self {
        self.details_1 = Some(details_1.to_string());
        self.details_2 = Some(details_2.to_string());
        self
    }
}

/// One row of the game-winning-shots table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawShootoutAttempt {
    /// "Scored" or "Missed".
    pub scored: Option<String>,
    /// Running score, e.g. "1 - 0".
    pub score: Option<String>,
    pub team: Option<String>,
    pub player: Option<String>,
    pub goalie: Option<String>,
}

impl RawShootoutAttempt {
    pub fn is_empty(&self) -> bool {
        [
            &self.scored,
            &self.score,
            &self.team,
            &self.player,
            &self.goalie,
        ]
        .into_iter()
        .all(|cell| cell.as_deref().is_none_or(|text| text.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLine {
    pub line_name: String,
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLineup {
    pub refs: Vec<String>,
    pub linesmen: Vec<String>,
    pub home_coaches: Vec<String>,
    pub away_coaches: Vec<String>,
    pub home_lines: Vec<RawLine>,
    pub away_lines: Vec<RawLine>,
    /// Name tokens of the players marked as starting.
    pub home_starting: Vec<String>,
    pub away_starting: Vec<String>,
}

impl RawLineup {
    pub fn coaches(&self, side: Side) -> &[String] {
        match side {
            Side::Home => &self.home_coaches,
            Side::Away => &self.away_coaches,
        }
    }

    pub fn lines(&self, side: Side) -> &[RawLine] {
        match side {
            Side::Home => &self.home_lines,
            Side::Away => &self.away_lines,
        }
    }

    pub fn starting(&self, side: Side) -> &[String] {
        match side {
            Side::Home => &self.home_starting,
            Side::Away => &self.away_starting,
        }
    }
}

/// Everything extracted for one game, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGame {
    #[serde(default)]
    pub events: Vec<RawEvent>,
    #[serde(default)]
    pub shootout: Vec<RawShootoutAttempt>,
    #[serde(default)]
    pub lineup: RawLineup,
    /// Scalar and list fields keyed by name (see [`crate::fields`]).
    #[serde(flatten)]
    pub fields: BTreeMap<String, RawValue>,
}

impl RawGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.fields.get(field)
    }

    /// Field as one string; empty when absent.
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(RawValue::to_text).unwrap_or_default()
    }

    /// Field as a list; empty when absent.
    pub fn list(&self, field: &str) -> Vec<String> {
        self.get(field).map(RawValue::to_list).unwrap_or_default()
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some_and(|value| !value.is_absent())
    }

    /// Natural id as printed, for log context before the game is assembled.
    pub fn id_hint(&self) -> String {
        self.text(crate::fields::GAME_ID).trim().to_string()
    }

    #[must_use]
    pub fn with_field(mut self, field: &str, value: impl Into<RawValue>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_event(mut self, event: RawEvent) -> Self {
        self.events.push(event);
        self
    }

    #[must_use]
    pub fn with_shootout(mut self, attempt: RawShootoutAttempt) -> Self {
        self.shootout.push(attempt);
        self
    }

    #[must_use]
    pub fn with_lineup(mut self, lineup: RawLineup) -> Self {
        self.lineup = lineup;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_accept_strings_lists_and_null() {
        let json = r#"{
            "game_id": "1001",
            "goalies_names": ["30. Holm, Anders", "1. Berg, Olle"],
            "arena": null,
            "events": [{"time": "12:01", "event": "2 min", "team": "HV71"}]
        }"#;
        let game: RawGame = serde_json::from_str(json).expect("decode raw game");
        assert_eq!(game.text("game_id"), "1001");
        assert_eq!(game.list("goalies_names").len(), 2);
        assert_eq!(game.get("arena"), Some(&RawValue::Absent));
        assert!(!game.has("arena"));
        assert_eq!(game.events[0].team.as_deref(), Some("HV71"));
        assert!(game.events[0].details_1.is_none());
        assert!(game.shootout.is_empty());
    }

    #[test]
    fn values_accept_numbers_and_booleans() {
        let json = r#"{
            "game_id": 1001,
            "spectators": 5432,
            "pp_perc_home": 12.5,
            "overtime": false,
            "goalies_saves": ["23/24", 28]
        }"#;
        let game: RawGame = serde_json::from_str(json).expect("decode raw game");
        assert_eq!(game.text("game_id"), "1001");
        assert_eq!(game.text("spectators"), "5432");
        assert_eq!(game.text("pp_perc_home"), "12.5");
        assert_eq!(game.text("overtime"), "false");
        assert_eq!(game.list("goalies_saves"), vec!["23/24".to_string(), "28".to_string()]);
    }

    #[test]
    fn nested_objects_are_rejected() {
        let err = serde_json::from_str::<RawGame>(r#"{"arena": {"name": "Husqvarna Garden"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn list_joins_as_text() {
        let value = RawValue::from(vec!["Final Score", "(3 - 2)"]);
        assert_eq!(value.to_text(), "Final Score (3 - 2)");
        assert_eq!(RawValue::from("x").to_list(), vec!["x".to_string()]);
    }

    #[test]
    fn empty_shootout_rows() {
        assert!(RawShootoutAttempt::default().is_empty());
        let attempt = RawShootoutAttempt {
            scored: Some(" ".to_string()),
            player: Some("12. Ek, Jon".to_string()),
            ..RawShootoutAttempt::default()
        };
        assert!(!attempt.is_empty());
    }
}
