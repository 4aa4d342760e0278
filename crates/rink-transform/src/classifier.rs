//! Classification of an event row's two detail cells.
//!
//! The report reuses the same pair of cells for very different things: on-ice
//! lists for goals, a time range for penalties, the goalie for a missed penalty
//! shot, or free text. Which one applies is decided by a fixed precedence:
//!
//! 1. `details_2` opens with `(` : penalty, `details_1` is the penalty type
//! 2. `details_1` starts with `Pos` : goal, on-ice lists from both cells
//! 3. `details_1` starts with `Missed` : missed penalty shot, goalie in `details_2`
//! 4. anything else in `details_1` : note
//! 5. nothing : empty
//!
//! A goal whose label carries `(PS)` is re-tagged as a scored penalty shot
//! afterwards (see [`retag_penalty_shot`]).

use rink_model::{EventDetail, IssueKind, PlayerIdentity, ShotOutcome};
use rink_normalization::{normalize, parse_on_ice_list, parse_player, strip_parens};

/// Label suffix of an event decided by a penalty shot.
pub const PENALTY_SHOT_MARKER: &str = "(PS)";
const PLUS_MARKER: &str = "Pos";
const MINUS_MARKER: &str = "Neg";
const MISSED_MARKER: &str = "Missed";
const SAVED_BY_PREFIX: &str = "Saved By ";

/// Cells of one event row that take part in classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventCells<'a> {
    pub label: &'a str,
    pub details_1: &'a str,
    pub details_2: &'a str,
    /// Primary player, already parsed from the player cell.
    pub player: Option<&'a PlayerIdentity>,
}

/// Something odd the classifier noticed while still producing a detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierWarning {
    pub kind: IssueKind,
    /// Raw cell the warning is about (`event`, `player`, `details_1`, `details_2`).
    pub field: &'static str,
    pub message: String,
}

impl ClassifierWarning {
    fn malformed(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::MalformedField,
            field,
            message: message.into(),
        }
    }

    fn unclassifiable(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::UnclassifiableEvent,
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub detail: EventDetail,
    pub warnings: Vec<ClassifierWarning>,
}

pub fn has_penalty_shot_marker(label: &str) -> bool {
    label.contains(PENALTY_SHOT_MARKER)
}

/// Classify one event row. Never fails; odd input degrades to `Note`/`Empty`
/// or to a partially filled detail plus warnings.
pub fn classify(cells: &EventCells<'_>) -> Classification {
    let details_1 = normalize(cells.details_1);
    let details_2 = normalize(cells.details_2);
    let mut warnings = Vec::new();

    let candidate = if details_2.starts_with('(') {
        penalty(&details_1, &details_2, &mut warnings)
    } else if details_1.starts_with(PLUS_MARKER) {
        goal(&details_1, &details_2, &mut warnings)
    } else if details_1.starts_with(MISSED_MARKER) {
        missed_penalty_shot(&details_2, &mut warnings)
    } else if !details_1.is_empty() {
        warnings.push(ClassifierWarning::unclassifiable(
            "details_1",
            format!("no rule matches {details_1:?}, kept as note"),
        ));
        EventDetail::Note { text: details_1 }
    } else {
        EventDetail::Empty
    };

    let detail = if has_penalty_shot_marker(cells.label) {
        if !matches!(
            candidate,
            EventDetail::Goal { .. } | EventDetail::PenaltyShot { .. }
        ) {
            warnings.push(ClassifierWarning::unclassifiable(
                "event",
                "penalty-shot label without shot details",
            ));
        }
        retag_penalty_shot(candidate)
    } else {
        candidate
    };

    if matches!(detail, EventDetail::PenaltyShot { .. }) && cells.player.is_none() {
        warnings.push(ClassifierWarning::malformed(
            "player",
            "penalty shot without a shooter",
        ));
    }

    Classification { detail, warnings }
}

/// Correction pass for events labelled with the penalty-shot marker.
///
/// A goal-shaped detail becomes `PenaltyShot { Scored }`. The goalie is the
/// first number of the defending (minus) list, and the on-ice lists are
/// consumed so no plus/minus credit is derived from a penalty shot. Any other
/// detail is returned unchanged.
pub fn retag_penalty_shot(detail: EventDetail) -> EventDetail {
    match detail {
        EventDetail::Goal { on_ice_minus, .. } => EventDetail::PenaltyShot {
            outcome: ShotOutcome::Scored,
            goalie_number: on_ice_minus.first().copied(),
        },
        other => other,
    }
}

fn penalty(
    details_1: &str,
    details_2: &str,
    warnings: &mut Vec<ClassifierWarning>,
) -> EventDetail {
    let range = strip_parens(details_2);
    let times: Vec<&str> = range.split('-').map(str::trim).collect();
    let (start_time, end_time) = match times.as_slice() {
        [start, end] => ((*start).to_string(), (*end).to_string()),
        _ => {
            warnings.push(ClassifierWarning::malformed(
                "details_2",
                format!("expected a start-end time range, found {details_2:?}"),
            ));
            let start = times.first().copied().unwrap_or_default();
            (start.to_string(), String::new())
        }
    };
    EventDetail::Penalty {
        penalty_type: details_1.to_string(),
        start_time,
        end_time,
    }
}

fn goal(details_1: &str, details_2: &str, warnings: &mut Vec<ClassifierWarning>) -> EventDetail {
    let on_ice_plus = parse_on_ice_list(details_1);
    if on_ice_plus.is_empty() {
        warnings.push(ClassifierWarning::malformed(
            "details_1",
            format!("on-ice marker without jersey numbers in {details_1:?}"),
        ));
    }
    let on_ice_minus = if details_2.starts_with(MINUS_MARKER) {
        parse_on_ice_list(details_2)
    } else {
        if !details_2.is_empty() {
            warnings.push(ClassifierWarning::malformed(
                "details_2",
                format!("expected the negative on-ice list, found {details_2:?}"),
            ));
        }
        Vec::new()
    };
    EventDetail::Goal {
        on_ice_plus,
        on_ice_minus,
    }
}

fn missed_penalty_shot(details_2: &str, warnings: &mut Vec<ClassifierWarning>) -> EventDetail {
    let goalie = match details_2.strip_prefix(SAVED_BY_PREFIX) {
        Some(rest) => rest,
        None => {
            if !details_2.is_empty() {
                warnings.push(ClassifierWarning::malformed(
                    "details_2",
                    format!("missed shot without {SAVED_BY_PREFIX:?} prefix: {details_2:?}"),
                ));
            }
            details_2
        }
    };
    let goalie_number = match parse_player(goalie) {
        Ok(player) => player.and_then(|player| player.number),
        Err(err) => {
            warnings.push(ClassifierWarning::malformed("details_2", err.to_string()));
            None
        }
    };
    EventDetail::PenaltyShot {
        outcome: ShotOutcome::Missed,
        goalie_number,
    }
}
