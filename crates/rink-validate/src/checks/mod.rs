//! Validation check modules.
//!
//! Each module performs one kind of cross-field check and returns its findings.

mod events;
mod goalies;
mod lineup;
mod periods;
mod score;
mod totals;

use rink_model::Game;

/// One cross-field disagreement, attributed to the field that looks wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    pub field: String,
    pub message: String,
}

impl Inconsistency {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Run all checks on a game.
pub fn run_all(game: &Game) -> Vec<Inconsistency> {
    let mut findings = Vec::new();

    // 1. Period counts agree across series and sides
    findings.extend(periods::check(game));

    // 2. Printed totals match the per-period sums
    findings.extend(totals::check(game));

    // 3. Score by period adds up to the final score
    findings.extend(score::check(game));

    // 4. Goalie saves never exceed shots faced
    findings.extend(goalies::check(game));

    // 5. Goal events per side match the final score
    findings.extend(events::check(game));

    // 6. Starting players are on the roster
    findings.extend(lineup::check(game));

    findings
}
