pub mod error;
pub mod event;
pub mod game;
pub mod ids;
pub mod issues;
pub mod lineup;
pub mod player;
pub mod processing;
pub mod schema;
pub mod shootout;

pub use error::{ModelError, Result};
pub use event::{EventDetail, EventType, GameEvent, ShotOutcome};
pub use game::{
    Game, GoalieStat, PerSide, PeriodSeries, PeriodStat, Side, StatKind, TeamSide, TeamTotals,
};
pub use ids::{GameId, RowKey};
pub use issues::{Issue, IssueKind, IssueLog};
pub use lineup::{Line, Lineup, TeamLineup};
pub use player::PlayerIdentity;
pub use processing::{BatchReport, GameReport, GameStatus};
pub use schema::{CellValue, ColumnDef, ColumnType, Row, TableName};
pub use shootout::ShootoutAttempt;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_log_counts_by_kind() {
        let mut log = IssueLog::new("1001");
        log.malformed("spectators", "not a number");
        log.malformed("pp_perc_home", "not a percentage");
        log.inconsistent("saves_by_period_away", "3 periods vs 4");
        assert_eq!(log.len(), 3);
        assert_eq!(log.count(IssueKind::MalformedField), 2);
        assert_eq!(log.count(IssueKind::IncompleteGame), 0);
        assert!(log.issues().iter().all(|issue| issue.game_id == "1001"));
    }

    #[test]
    fn report_serializes() {
        let report = GameReport::new("1001", GameStatus::Skipped);
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: GameReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.game_id, "1001");
        assert_eq!(round.status, GameStatus::Skipped);
    }
}
