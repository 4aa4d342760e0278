//! The per-game aggregate and its team/statistics value types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::event::GameEvent;
use crate::ids::GameId;
use crate::lineup::Lineup;
use crate::player::PlayerIdentity;
use crate::shootout::ShootoutAttempt;

/// Which team a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value held once per team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Iterate `(side, value)` pairs, home first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Home, &self.home), (Side::Away, &self.away)].into_iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSide {
    /// Short name as used in the event table (e.g. "HV71").
    pub abbrev: String,
    pub name: String,
}

impl TeamSide {
    pub fn new(abbrev: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abbrev: abbrev.into(),
            name: name.into(),
        }
    }

    fn matches(&self, team: &str) -> bool {
        (!self.abbrev.is_empty() && self.abbrev.eq_ignore_ascii_case(team))
            || (!self.name.is_empty() && self.name.eq_ignore_ascii_case(team))
    }
}

impl PerSide<TeamSide> {
    /// Resolve a team token from an event/goalie/shootout row to a side.
    ///
    /// Matches abbreviation first, then full name, both case-insensitively.
    pub fn resolve(&self, team: &str) -> Option<Side> {
        let team = team.trim();
        if team.is_empty() {
            return None;
        }
        Side::BOTH
            .into_iter()
            .find(|side| self.get(*side).matches(team))
    }
}

/// Counter kinds reported per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Shots,
    Saves,
    PenaltyMinutes,
    /// Goals per period, derived from the score-by-period line.
    Score,
}

impl StatKind {
    /// Kinds that arrive as their own colon-separated series.
    pub const SERIES: [StatKind; 3] = [StatKind::Shots, StatKind::Saves, StatKind::PenaltyMinutes];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Shots => "shots",
            StatKind::Saves => "saves",
            StatKind::PenaltyMinutes => "pim",
            StatKind::Score => "score",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One counter for one side in one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStat {
    pub kind: StatKind,
    pub side: Side,
    /// 1-based.
    pub period: u32,
    pub value: u32,
}

/// An ordered per-period series; period `n` is `values[n - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSeries {
    pub kind: StatKind,
    pub side: Side,
    pub values: Vec<u32>,
}

impl PeriodSeries {
    pub fn new(kind: StatKind, side: Side, values: Vec<u32>) -> Self {
        Self { kind, side, values }
    }

    pub fn period_count(&self) -> usize {
        self.values.len()
    }

    pub fn total(&self) -> u64 {
        self.values.iter().map(|value| u64::from(*value)).sum()
    }

    pub fn stats(&self) -> impl Iterator<Item = PeriodStat> + '_ {
        self.values.iter().zip(1u32..).map(|(value, period)| PeriodStat {
            kind: self.kind,
            side: self.side,
            period,
            value: *value,
        })
    }
}

/// Summary counters printed next to each team's period series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamTotals {
    pub shots: Option<u32>,
    pub saves: Option<u32>,
    pub penalty_minutes: Option<u32>,
    /// Power-play time as printed (e.g. "04:12").
    pub power_play_time: Option<String>,
    /// Power-play efficiency in percent. `None` means "not reported", not zero.
    pub power_play_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalieStat {
    pub side: Option<Side>,
    pub team: String,
    pub player: PlayerIdentity,
    pub saves: u32,
    pub shots: u32,
}

/// A finished game, fully parsed and classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub teams: PerSide<TeamSide>,
    pub event_url: Option<String>,
    pub line_up_url: Option<String>,
    pub date_time: Option<NaiveDateTime>,
    pub league: String,
    pub arena: String,
    pub spectators: Option<u32>,
    pub final_score: Option<(u32, u32)>,
    pub totals: PerSide<TeamTotals>,
    pub period_series: Vec<PeriodSeries>,
    /// `(home, away)` goals per period.
    pub score_by_period: Vec<(u32, u32)>,
    pub goalies: Vec<GoalieStat>,
    pub events: Vec<GameEvent>,
    pub shootout: Vec<ShootoutAttempt>,
    pub lineup: Lineup,
}

impl Game {
    pub fn series(&self, kind: StatKind, side: Side) -> Option<&PeriodSeries> {
        self.period_series
            .iter()
            .find(|series| series.kind == kind && series.side == side)
    }

    /// Per-side goal series derived from the score-by-period pairs.
    pub fn score_series(&self, side: Side) -> PeriodSeries {
        let values = self
            .score_by_period
            .iter()
            .map(|(home, away)| match side {
                Side::Home => *home,
                Side::Away => *away,
            })
            .collect();
        PeriodSeries::new(StatKind::Score, side, values)
    }

    /// Every period counter of the game, score included.
    pub fn period_stats(&self) -> Vec<PeriodStat> {
        let mut stats: Vec<PeriodStat> = self
            .period_series
            .iter()
            .flat_map(PeriodSeries::stats)
            .collect();
        for side in Side::BOTH {
            stats.extend(self.score_series(side).stats());
        }
        stats
    }

    pub fn has_shootout(&self) -> bool {
        self.shootout.len() > 1
    }
}
