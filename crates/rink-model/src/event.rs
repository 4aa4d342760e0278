//! Game events and their classified detail.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::Side;
use crate::player::PlayerIdentity;

/// Result of a single free attempt (penalty shot or shootout attempt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotOutcome {
    Scored,
    Missed,
}

impl ShotOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotOutcome::Scored => "scored",
            ShotOutcome::Missed => "missed",
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified meaning of an event's two detail cells.
///
/// Exactly one kind is active per event. `Goal` and `PenaltyShot` never coexist:
/// a goal scored on a penalty shot is a `PenaltyShot` with `Scored` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventDetail {
    Goal {
        on_ice_plus: Vec<u32>,
        on_ice_minus: Vec<u32>,
    },
    Penalty {
        penalty_type: String,
        start_time: String,
        end_time: String,
    },
    PenaltyShot {
        outcome: ShotOutcome,
        goalie_number: Option<u32>,
    },
    Note {
        text: String,
    },
    Empty,
}

impl EventDetail {
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            EventDetail::Goal { .. } => Some(EventType::Goal),
            EventDetail::Penalty { .. } => Some(EventType::Penalty),
            EventDetail::PenaltyShot { .. } => Some(EventType::PenaltyShot),
            EventDetail::Note { .. } => Some(EventType::Note),
            EventDetail::Empty => None,
        }
    }

    /// Number of on-ice participants a goal credits; zero for every other kind.
    pub fn on_ice_count(&self) -> usize {
        match self {
            EventDetail::Goal {
                on_ice_plus,
                on_ice_minus,
            } => on_ice_plus.len() + on_ice_minus.len(),
            _ => 0,
        }
    }
}

/// Type tag written to the `event_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    Penalty,
    PenaltyShot,
    Note,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Goal => "goal",
            EventType::Penalty => "penalty",
            EventType::PenaltyShot => "penalty_shot",
            EventType::Note => "note",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the game's event table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Game clock as printed, e.g. "43:12".
    pub time: String,
    /// 1-3 regulation, 4+ overtime. `None` when the clock could not be read.
    pub period: Option<u32>,
    pub label: String,
    /// Team token as printed in the event row.
    pub team: String,
    pub side: Option<Side>,
    /// Absent for team-level events (timeouts, bench penalties).
    pub player: Option<PlayerIdentity>,
    pub assist_1: Option<PlayerIdentity>,
    pub assist_2: Option<PlayerIdentity>,
    pub detail: EventDetail,
}

impl GameEvent {
    pub fn event_type(&self) -> Option<EventType> {
        self.detail.event_type()
    }

    pub fn is_overtime(&self) -> bool {
        self.period.is_some_and(|period| period > 3)
    }
}
