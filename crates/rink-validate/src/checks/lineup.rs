//! Starting players against the roster.

use rink_model::{Game, Side};

use super::Inconsistency;

pub fn check(game: &Game) -> Vec<Inconsistency> {
    let mut issues = Vec::new();
    for side in Side::BOTH {
        let team = game.lineup.teams.get(side);
        if team.lines.is_empty() {
            continue;
        }
        for number in &team.starting {
            let rostered = team.players().any(|player| player.number == Some(*number));
            if !rostered {
                issues.push(Inconsistency::new(
                    format!("{side}_starting"),
                    format!("starting player #{number} is not on the {side} roster"),
                ));
            }
        }
    }
    issues
}
