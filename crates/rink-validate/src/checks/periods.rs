//! Period count agreement.
//!
//! Every per-period series of a game describes the same periods, so their lengths
//! should match each other and the score-by-period line.

use rink_model::{Game, Side, StatKind};

use super::Inconsistency;

pub fn check(game: &Game) -> Vec<Inconsistency> {
    let mut issues = Vec::new();

    let expected = if game.score_by_period.is_empty() {
        game.series(StatKind::Shots, Side::Home)
            .map(|series| series.period_count())
    } else {
        Some(game.score_by_period.len())
    };
    let Some(expected) = expected else {
        return issues;
    };

    for series in &game.period_series {
        let found = series.period_count();
        if found != expected {
            issues.push(Inconsistency::new(
                format!("{}_by_period_{}", series.kind, series.side),
                format!("{found} periods, expected {expected}"),
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::tests::game_with;
    use rink_model::PeriodSeries;

    #[test]
    fn mismatched_series_is_flagged() {
        let mut game = game_with(vec![(1, 0), (0, 1), (2, 0)]);
        game.period_series = vec![
            PeriodSeries::new(StatKind::Shots, Side::Home, vec![10, 9, 12]),
            PeriodSeries::new(StatKind::Saves, Side::Away, vec![9, 8, 10, 1]),
        ];
        let issues = check(&game);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "saves_by_period_away");
    }

    #[test]
    fn shots_set_the_count_without_score_line() {
        let mut game = game_with(Vec::new());
        game.period_series = vec![
            PeriodSeries::new(StatKind::Shots, Side::Home, vec![10, 9, 12]),
            PeriodSeries::new(StatKind::Shots, Side::Away, vec![10, 9]),
        ];
        let issues = check(&game);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "shots_by_period_away");
    }
}
