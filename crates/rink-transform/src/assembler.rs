//! Composition of one [`Game`] from a [`RawGame`].
//!
//! Parsing is delegated to `rink-normalization` and the classifier; this module
//! only decides what a parse failure means (a warning and an absent value) and
//! wires the pieces together.

use std::collections::BTreeSet;
use std::fmt;

use rink_ingest::{RawEvent, RawGame, RawLineup, RawShootoutAttempt, fields};
use rink_model::{
    Game, GameEvent, GameId, GoalieStat, IssueLog, Line, Lineup, PerSide, PeriodSeries,
    PlayerIdentity, ShootoutAttempt, ShotOutcome, Side, StatKind, TeamLineup, TeamSide,
    TeamTotals,
};
use rink_normalization::{
    digits_only, is_placeholder, normalize, parse_clock, parse_count, parse_period_series,
    parse_player, parse_power_play_percentage, parse_saves_shots, parse_score,
    parse_score_by_period, period_of_clock,
};
use tracing::{debug, info_span};

use crate::classifier::{EventCells, classify};
use crate::datetime::parse_game_datetime;

/// Status phrases that mark a game as finished.
pub const DEFAULT_COMPLETION_PHRASES: [&str; 3] =
    ["Final Score", "Game Finished", "Game Winning Shots ended"];

/// Options for [`assemble`].
#[derive(Debug, Clone)]
pub struct AssemblyOptions {
    /// A game is assembled only if its status contains one of these.
    pub completion_phrases: Vec<String>,
    /// Run the structural checks of `rink-validate` on the assembled game.
    pub run_checks: bool,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            completion_phrases: DEFAULT_COMPLETION_PHRASES
                .iter()
                .map(ToString::to_string)
                .collect(),
            run_checks: true,
        }
    }
}

impl AssemblyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_completion_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completion_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_checks(mut self, run_checks: bool) -> Self {
        self.run_checks = run_checks;
        self
    }

    pub fn is_finished(&self, status: &str) -> bool {
        self.completion_phrases
            .iter()
            .any(|phrase| !phrase.is_empty() && status.contains(phrase.as_str()))
    }
}

/// Why a game was not assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingGameId,
    Unfinished { status: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingGameId => f.write_str("missing or invalid game id"),
            SkipReason::Unfinished { status } => write!(f, "game not finished: {status:?}"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AssemblyOutcome {
    Assembled(Box<Game>),
    Skipped(SkipReason),
}

/// Result of [`assemble`]: the game (or why there is none) plus every warning.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub outcome: AssemblyOutcome,
    pub issues: IssueLog,
}

impl Assembly {
    pub fn game(&self) -> Option<&Game> {
        match &self.outcome {
            AssemblyOutcome::Assembled(game) => Some(game),
            AssemblyOutcome::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, AssemblyOutcome::Skipped(_))
    }

    pub fn game_id(&self) -> &str {
        self.issues.game_id()
    }
}

/// Assemble one game.
///
/// Unfinished games and games without a usable id are skipped; everything else
/// is assembled, with unreadable fields left empty and reported in the log.
pub fn assemble(raw: &RawGame, options: &AssemblyOptions) -> Assembly {
    let id_hint = raw.id_hint();
    let span = info_span!("assemble", game_id = %id_hint);
    let _guard = span.enter();
    let mut log = IssueLog::new(id_hint.clone());

    let id = match GameId::new(id_hint.as_str()) {
        Ok(id) => id,
        Err(err) => {
            log.malformed(fields::GAME_ID, err.to_string());
            return skipped(SkipReason::MissingGameId, log);
        }
    };

    let status = normalize(&raw.text(fields::GAME_STATUS));
    if !options.is_finished(&status) {
        log.incomplete(
            fields::GAME_STATUS,
            format!("no completion phrase in status {status:?}"),
        );
        return skipped(SkipReason::Unfinished { status }, log);
    }

    let mut builder = GameBuilder { raw, log };
    let game = builder.build(id);
    let mut log = builder.log;

    if options.run_checks {
        rink_validate::validate_game(&game, &mut log);
    }
    debug!(
        events = game.events.len(),
        shootout = game.shootout.len(),
        issues = log.len(),
        "game assembled"
    );
    Assembly {
        outcome: AssemblyOutcome::Assembled(Box::new(game)),
        issues: log,
    }
}

fn skipped(reason: SkipReason, log: IssueLog) -> Assembly {
    debug!(%reason, "game skipped");
    Assembly {
        outcome: AssemblyOutcome::Skipped(reason),
        issues: log,
    }
}

struct GameBuilder<'a> {
    raw: &'a RawGame,
    log: IssueLog,
}

impl GameBuilder<'_> {
    fn build(&mut self, id: GameId) -> Game {
        let teams = self.teams();
        let score_by_period = self.score_by_period();
        let events = self.events(&teams);
        let shootout = self.shootout(&teams);
        let goalies = self.goalies(&teams);
        Game {
            id,
            event_url: self.optional_text(fields::EVENT_URL),
            line_up_url: self.optional_text(fields::LINE_UP_URL),
            date_time: self.date_time(),
            league: normalize(&self.raw.text(fields::LEAGUE)),
            arena: normalize(&self.raw.text(fields::ARENA)),
            spectators: self.spectators(),
            final_score: self.final_score(),
            totals: PerSide::new(self.totals(Side::Home), self.totals(Side::Away)),
            period_series: self.period_series(),
            score_by_period,
            goalies,
            events,
            shootout,
            lineup: self.lineup(),
            teams,
        }
    }

    fn optional_text(&self, field: &str) -> Option<String> {
        let text = normalize(&self.raw.text(field));
        (!is_placeholder(&text)).then_some(text)
    }

    /// Player cell; a malformed token is reported and read as absent.
    fn player(&mut self, field: &str, token: Option<&str>) -> Option<PlayerIdentity> {
        match parse_player(token.unwrap_or_default()) {
            Ok(player) => player,
            Err(err) => {
                self.log.malformed(field, err.to_string());
                None
            }
        }
    }

    /// Resolve a team token; an unknown non-empty token is reported.
    fn side(&mut self, teams: &PerSide<TeamSide>, field: &str, team: &str) -> Option<Side> {
        let side = teams.resolve(team);
        if side.is_none() && !team.is_empty() {
            self.log
                .malformed(field, format!("team {team:?} is neither home nor away"));
        }
        side
    }

    fn teams(&mut self) -> PerSide<TeamSide> {
        let mut team = |side: Side| {
            let abbrev = normalize(&self.raw.text(&fields::name_abbrev(side)));
            let name = normalize(&self.raw.text(&fields::name(side)));
            if abbrev.is_empty() && name.is_empty() {
                self.log
                    .malformed(fields::name_abbrev(side), format!("no {side} team name"));
            }
            TeamSide::new(abbrev, name)
        };
        PerSide::new(team(Side::Home), team(Side::Away))
    }

    fn date_time(&mut self) -> Option<chrono::NaiveDateTime> {
        let text = normalize(&self.raw.text(fields::DATE_TIME));
        if text.is_empty() {
            return None;
        }
        let parsed = parse_game_datetime(&text);
        if parsed.is_none() {
            self.log
                .malformed(fields::DATE_TIME, format!("unreadable date/time {text:?}"));
        }
        parsed
    }

    fn spectators(&mut self) -> Option<u32> {
        let digits = digits_only(&self.raw.text(fields::SPECTATORS));
        if digits.is_empty() {
            return None;
        }
        match digits.parse::<u32>() {
            Ok(count) => Some(count),
            Err(err) => {
                self.log
                    .malformed(fields::SPECTATORS, format!("{digits:?}: {err}"));
                None
            }
        }
    }

    fn final_score(&mut self) -> Option<(u32, u32)> {
        match parse_score(&self.raw.text(fields::SCORE)) {
            Ok(score) => score,
            Err(err) => {
                self.log.malformed(fields::SCORE, err.to_string());
                None
            }
        }
    }

    fn count(&mut self, field: &str) -> Option<u32> {
        match parse_count(&self.raw.text(field)) {
            Ok(count) => count,
            Err(err) => {
                self.log.malformed(field, err.to_string());
                None
            }
        }
    }

    fn totals(&mut self, side: Side) -> TeamTotals {
        let pp_field = fields::pp_perc(side);
        let pp_text = normalize(&self.raw.text(&pp_field));
        let power_play_percentage = parse_power_play_percentage(&pp_text);
        if power_play_percentage.is_none() && !is_placeholder(&pp_text) {
            self.log
                .malformed(pp_field, format!("unreadable percentage {pp_text:?}"));
        }
        TeamTotals {
            shots: self.count(&fields::total(StatKind::Shots, side)),
            saves: self.count(&fields::total(StatKind::Saves, side)),
            penalty_minutes: self.count(&fields::total(StatKind::PenaltyMinutes, side)),
            power_play_time: self.optional_text(&fields::pp_time(side)),
            power_play_percentage,
        }
    }

    fn period_series(&mut self) -> Vec<PeriodSeries> {
        let mut series = Vec::new();
        for side in Side::BOTH {
            for kind in StatKind::SERIES {
                let field = fields::by_period(kind, side);
                if !self.raw.has(&field) {
                    continue;
                }
                match parse_period_series(&self.raw.text(&field)) {
                    Ok(values) => series.push(PeriodSeries::new(kind, side, values)),
                    Err(err) => self.log.malformed(field, err.to_string()),
                }
            }
        }
        series
    }

    fn score_by_period(&mut self) -> Vec<(u32, u32)> {
        match parse_score_by_period(&self.raw.text(fields::SCORE_BY_PERIOD)) {
            Ok(periods) => periods,
            Err(err) => {
                self.log.malformed(fields::SCORE_BY_PERIOD, err.to_string());
                Vec::new()
            }
        }
    }

    /// Goalie rows arrive as three parallel lists and are zipped by position.
    fn goalies(&mut self, teams: &PerSide<TeamSide>) -> Vec<GoalieStat> {
        let non_blank = |field: &str| -> Vec<String> {
            self.raw
                .list(field)
                .iter()
                .map(|item| normalize(item))
                .filter(|item| !item.is_empty())
                .collect()
        };
        let team_list = non_blank(fields::GOALIES_TEAMS);
        let names = non_blank(fields::GOALIES_NAMES);
        let saves = non_blank(fields::GOALIES_SAVES);
        if team_list.len() != names.len() || names.len() != saves.len() {
            self.log.inconsistent(
                fields::GOALIES_NAMES,
                format!(
                    "{} teams, {} names, {} saves entries",
                    team_list.len(),
                    names.len(),
                    saves.len()
                ),
            );
        }

        let mut goalies = Vec::new();
        for (index, ((team, name), saves)) in team_list.iter().zip(&names).zip(&saves).enumerate() {
            let name_field = format!("{}[{index}]", fields::GOALIES_NAMES);
            let Some(player) = self.player(&name_field, Some(name.as_str())) else {
                continue;
            };
            let (saves, shots) = match parse_saves_shots(saves) {
                Ok(pair) => pair,
                Err(err) => {
                    self.log.malformed(
                        format!("{}[{index}]", fields::GOALIES_SAVES),
                        err.to_string(),
                    );
                    continue;
                }
            };
            let side = self.side(teams, &format!("{}[{index}]", fields::GOALIES_TEAMS), team);
            goalies.push(GoalieStat {
                side,
                team: team.clone(),
                player,
                saves,
                shots,
            });
        }
        goalies
    }

    fn events(&mut self, teams: &PerSide<TeamSide>) -> Vec<GameEvent> {
        let raw = self.raw;
        raw.events
            .iter()
            .enumerate()
            .filter(|(_, event)| !is_blank_event(event))
            .map(|(index, event)| self.event(teams, index, event))
            .collect()
    }

    fn event(&mut self, teams: &PerSide<TeamSide>, index: usize, raw: &RawEvent) -> GameEvent {
        let prefix = format!("game_events[{index}]");
        let field = |cell: &str| format!("{prefix}.{cell}");

        let time = normalize(raw.time.as_deref().unwrap_or_default());
        let period = if time.is_empty() {
            None
        } else {
            match parse_clock(&time) {
                Ok(seconds) => Some(period_of_clock(seconds)),
                Err(err) => {
                    self.log.malformed(field("time"), err.to_string());
                    None
                }
            }
        };
        let label = normalize(raw.event.as_deref().unwrap_or_default());
        let team = normalize(raw.team.as_deref().unwrap_or_default());
        let side = self.side(teams, &field("team"), &team);
        let player = self.player(&field("player"), raw.player.as_deref());
        let assist_1 = self.player(&field("assist_1"), raw.assist_1.as_deref());
        let assist_2 = self.player(&field("assist_2"), raw.assist_2.as_deref());

        let classification = classify(&EventCells {
            label: &label,
            details_1: raw.details_1.as_deref().unwrap_or_default(),
            details_2: raw.details_2.as_deref().unwrap_or_default(),
            player: player.as_ref(),
        });
        for warning in classification.warnings {
            self.log
                .record(warning.kind, field(warning.field), warning.message);
        }

        GameEvent {
            time,
            period,
            label,
            team,
            side,
            player,
            assist_1,
            assist_2,
            detail: classification.detail,
        }
    }

    fn shootout(&mut self, teams: &PerSide<TeamSide>) -> Vec<ShootoutAttempt> {
        let raw = self.raw;
        raw.shootout
            .iter()
            .enumerate()
            .filter(|(_, attempt)| !attempt.is_empty())
            .filter_map(|(index, attempt)| self.shootout_attempt(teams, index, attempt))
            .collect()
    }

    fn shootout_attempt(
        &mut self,
        teams: &PerSide<TeamSide>,
        index: usize,
        raw: &RawShootoutAttempt,
    ) -> Option<ShootoutAttempt> {
        let field = |cell: &str| format!("shootout[{index}].{cell}");

        let scored = normalize(raw.scored.as_deref().unwrap_or_default());
        let outcome = if scored.eq_ignore_ascii_case("scored") {
            ShotOutcome::Scored
        } else if scored.eq_ignore_ascii_case("missed") {
            ShotOutcome::Missed
        } else {
            self.log.malformed(
                field("scored"),
                format!("expected Scored or Missed, found {scored:?}"),
            );
            return None;
        };
        let score = match parse_score(raw.score.as_deref().unwrap_or_default()) {
            Ok(score) => score,
            Err(err) => {
                self.log.malformed(field("score"), err.to_string());
                None
            }
        };
        let team = normalize(raw.team.as_deref().unwrap_or_default());
        let side = self.side(teams, &field("team"), &team);
        Some(ShootoutAttempt {
            outcome,
            score,
            side,
            shooter: self.player(&field("player"), raw.player.as_deref()),
            goalie: self.player(&field("goalie"), raw.goalie.as_deref()),
            team,
        })
    }

    fn lineup(&mut self) -> Lineup {
        let game = self.raw;
        let raw = &game.lineup;
        let names = |list: &[String]| -> Vec<String> {
            list.iter()
                .map(|name| normalize(name))
                .filter(|name| !name.is_empty())
                .collect()
        };
        Lineup {
            refs: names(&raw.refs),
            linesmen: names(&raw.linesmen),
            teams: PerSide::new(
                self.team_lineup(raw, Side::Home),
                self.team_lineup(raw, Side::Away),
            ),
        }
    }

    fn team_lineup(&mut self, raw: &RawLineup, side: Side) -> TeamLineup {
        let coaches = raw
            .coaches(side)
            .iter()
            .enumerate()
            .filter_map(|(index, token)| {
                self.player(&format!("{side}_coaches[{index}]"), Some(token.as_str()))
            })
            .collect();

        let mut lines = Vec::new();
        for (line_index, raw_line) in raw.lines(side).iter().enumerate() {
            let players = raw_line
                .players
                .iter()
                .enumerate()
                .filter_map(|(index, token)| {
                    self.player(
                        &format!("{side}_lines[{line_index}].players[{index}]"),
                        Some(token.as_str()),
                    )
                })
                .collect();
            lines.push(Line {
                name: normalize(&raw_line.line_name),
                players,
            });
        }

        let mut starting = BTreeSet::new();
        for (index, token) in raw.starting(side).iter().enumerate() {
            if let Some(number) = self.starting_number(side, index, token) {
                starting.insert(number);
            }
        }

        TeamLineup {
            coaches,
            lines,
            starting,
        }
    }

    /// Starting players are marked by name token or by bare jersey number.
    fn starting_number(&mut self, side: Side, index: usize, token: &str) -> Option<u32> {
        let field = format!("{side}_starting[{index}]");
        if let Ok(Some(number)) = parse_count(token) {
            return Some(number);
        }
        match parse_player(token) {
            Ok(Some(player)) if player.number.is_some() => player.number,
            Ok(None) => None,
            Ok(Some(player)) => {
                self.log
                    .malformed(field, format!("starting player {player} has no number"));
                None
            }
            Err(err) => {
                self.log.malformed(field, err.to_string());
                None
            }
        }
    }
}

fn is_blank_event(event: &RawEvent) -> bool {
    [
        &event.time,
        &event.event,
        &event.team,
        &event.player,
        &event.assist_1,
        &event.assist_2,
        &event.details_1,
        &event.details_2,
    ]
    .into_iter()
    .all(|cell| cell.as_deref().is_none_or(|text| text.trim().is_empty()))
}
