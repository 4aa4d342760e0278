//! Goal events against the final score.

use rink_model::{EventDetail, Game, PerSide, ShotOutcome, Side};

use super::Inconsistency;

fn goals_by_side(game: &Game) -> PerSide<u32> {
    let mut goals = PerSide::new(0, 0);
    for event in &game.events {
        let scored = match &event.detail {
            EventDetail::Goal { .. } => true,
            EventDetail::PenaltyShot { outcome, .. } => *outcome == ShotOutcome::Scored,
            _ => false,
        };
        if let (true, Some(side)) = (scored, event.side) {
            *goals.get_mut(side) += 1;
        }
    }
    goals
}

pub fn check(game: &Game) -> Vec<Inconsistency> {
    let Some((home, away)) = game.final_score else {
        return Vec::new();
    };
    // Team tokens that did not resolve make the count meaningless.
    let unresolved = game.events.iter().any(|event| {
        event.side.is_none() && matches!(event.detail, EventDetail::Goal { .. })
    });
    if game.events.is_empty() || unresolved || game.has_shootout() {
        return Vec::new();
    }
    let goals = goals_by_side(game);
    let mut issues = Vec::new();
    for (side, expected) in [(Side::Home, home), (Side::Away, away)] {
        let found = *goals.get(side);
        if found != expected {
            issues.push(Inconsistency::new(
                "events",
                format!("{found} {side} goal events, final score says {expected}"),
            ));
        }
    }
    issues
}
