//! Score-by-period against the final score.

use rink_model::Game;

use super::Inconsistency;

pub fn check(game: &Game) -> Vec<Inconsistency> {
    let Some((home, away)) = game.final_score else {
        return Vec::new();
    };
    // The shootout winner's goal is in the final score but in no period.
    if game.score_by_period.is_empty() || game.has_shootout() {
        return Vec::new();
    }
    let summed_home: u64 = game
        .score_by_period
        .iter()
        .map(|(home, _)| u64::from(*home))
        .sum();
    let summed_away: u64 = game
        .score_by_period
        .iter()
        .map(|(_, away)| u64::from(*away))
        .sum();
    if (summed_home, summed_away) == (u64::from(home), u64::from(away)) {
        return Vec::new();
    }
    vec![Inconsistency::new(
        "score_by_period",
        format!("periods sum to {summed_home}-{summed_away}, final score is {home}-{away}"),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::tests::game_with;

    #[test]
    fn sum_matches_final() {
        let mut game = game_with(vec![(1, 0), (0, 1), (3, 0)]);
        game.final_score = Some((4, 1));
        assert!(check(&game).is_empty());
        game.final_score = Some((4, 2));
        assert_eq!(check(&game)[0].field, "score_by_period");
    }

    #[test]
    fn huge_period_scores_are_reported() {
        let mut game = game_with(vec![(4_000_000_000, 0), (4_000_000_000, 0)]);
        game.final_score = Some((1, 0));
        let issues = check(&game);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("periods sum to 8000000000-0"));
    }
}
