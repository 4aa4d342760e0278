use rink_model::Game;

use super::Inconsistency;

pub fn check(game: &Game) -> Vec<Inconsistency> {
    game.goalies
        .iter()
        .filter(|goalie| goalie.saves > goalie.shots)
        .map(|goalie| {
            Inconsistency::new(
                "goalies_saves",
                format!(
                    "{} has {} saves on {} shots",
                    goalie.player, goalie.saves, goalie.shots
                ),
            )
        })
        .collect()
}
