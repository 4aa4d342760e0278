//! Printed totals against per-period sums.

use rink_model::{Game, Side, StatKind, TeamTotals};

use super::Inconsistency;

fn printed_total(totals: &TeamTotals, kind: StatKind) -> Option<u32> {
    match kind {
        StatKind::Shots => totals.shots,
        StatKind::Saves => totals.saves,
        StatKind::PenaltyMinutes => totals.penalty_minutes,
        StatKind::Score => None,
    }
}

pub fn check(game: &Game) -> Vec<Inconsistency> {
    let mut issues = Vec::new();
    for side in Side::BOTH {
        let totals = game.totals.get(side);
        for kind in StatKind::SERIES {
            let (Some(printed), Some(series)) =
                (printed_total(totals, kind), game.series(kind, side))
            else {
                continue;
            };
            let summed = series.total();
            if summed != u64::from(printed) {
                issues.push(Inconsistency::new(
                    format!("{kind}_total_{side}"),
                    format!("total {printed} but periods sum to {summed}"),
                ));
            }
        }
    }
    issues
}
