//! Projection of a [`Game`] into rows of the eight output tables.
//!
//! Tables are written in a fixed order. A `game_events` row is always inserted
//! before its `plus_minus` children, which reference the key the sink returned
//! for it.

use std::collections::BTreeMap;

use rink_model::{
    EventDetail, EventType, Game, GameEvent, IssueLog, PlayerIdentity, Row, RowKey, ShootoutAttempt, Side,
    TableName,
};
use tracing::debug;

use crate::store::{RowSink, StoreError};

/// Jersey number given to the head coach's roster row.
pub const HEAD_COACH_NUMBER: u32 = 1000;
/// Jersey number given to the assistant coach's roster row.
pub const ASSISTANT_COACH_NUMBER: u32 = 1001;
pub const COACHES_LINE: &str = "Coaches";

const COACH_NUMBERS: [u32; 2] = [HEAD_COACH_NUMBER, ASSISTANT_COACH_NUMBER];
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Rows written per table for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionSummary {
    pub rows: BTreeMap<TableName, usize>,
}

impl ProjectionSummary {
    pub fn count(&self, table: TableName) -> usize {
        self.rows.get(&table).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.rows.values().sum()
    }
}

struct Emitter<'s, S: ?Sized> {
    sink: &'s mut S,
    summary: ProjectionSummary,
}

impl<S: RowSink + ?Sized> Emitter<'_, S> {
    fn emit(&mut self, row: Row) -> Result<RowKey, StoreError> {
        let table = row.table;
        let key = self.sink.insert(row)?;
        *self.summary.rows.entry(table).or_default() += 1;
        Ok(key)
    }
}

/// Project one game into `sink`.
///
/// Stops at the first sink error; callers wrap this in a store transaction so a
/// partial game never becomes visible.
pub fn project<S>(game: &Game, sink: &mut S, log: &mut IssueLog) -> Result<ProjectionSummary, StoreError>
where
    S: RowSink + ?Sized,
{
    let mut out = Emitter {
        sink,
        summary: ProjectionSummary::default(),
    };

    out.emit(game_row(game))?;
    project_lines(game, &mut out, log)?;
    project_refs(game, &mut out)?;
    project_period_stats(game, &mut out)?;
    project_goalies(game, &mut out)?;
    project_events(game, &mut out)?;
    project_shootout(game, &mut out)?;

    debug!(game_id = %game.id, rows = out.summary.total(), "game projected");
    Ok(out.summary)
}

fn game_row(game: &Game) -> Row {
    let mut row = Row::new(TableName::Games)
        .with("game_id", game.id.as_str())
        .with("event_url", game.event_url.as_deref())
        .with("line_up_url", game.line_up_url.as_deref())
        .with(
            "date_time",
            game.date_time
                .map(|date_time| date_time.format(DATE_TIME_FORMAT).to_string()),
        )
        .with("league", game.league.as_str())
        .with("arena", game.arena.as_str())
        .with("spectators", game.spectators)
        .with("score_home", game.final_score.map(|(home, _)| home))
        .with("score_away", game.final_score.map(|(_, away)| away));

    for (side, team) in game.teams.iter() {
        row.set(&format!("{side}_name"), team.name.as_str());
        row.set(&format!("{side}_name_abbrev"), team.abbrev.as_str());
    }
    for (side, totals) in game.totals.iter() {
        row.set(&format!("shots_total_{side}"), totals.shots);
        row.set(&format!("saves_total_{side}"), totals.saves);
        row.set(&format!("pim_total_{side}"), totals.penalty_minutes);
        row.set(&format!("pp_time_{side}"), totals.power_play_time.as_deref());
        row.set(&format!("pp_perc_{side}"), totals.power_play_percentage);
    }
    row
}

fn roster_row(game: &Game, side: Side, line_name: &str, player: &PlayerIdentity, starting: bool) -> Row {
    Row::new(TableName::Lines)
        .with("game_id", game.id.as_str())
        .with("side", side.as_str())
        .with("line_name", line_name)
        .with("jersey_number", player.number)
        .with("last_name", player.last_name.as_str())
        .with("first_name", player.first_name.as_str())
        .with("starting", starting)
}

fn project_lines<S: RowSink + ?Sized>(
    game: &Game,
    out: &mut Emitter<'_, S>,
    log: &mut IssueLog,
) -> Result<(), StoreError> {
    for (side, team) in game.lineup.teams.iter() {
        for line in &team.lines {
            for player in &line.players {
                out.emit(roster_row(game, side, &line.name, player, team.is_starting(player)))?;
            }
        }

        if team.coaches.len() > COACH_NUMBERS.len() {
            log.inconsistent(
                format!("{side}_coaches"),
                format!(
                    "{} coaches listed, only the first {} are stored",
                    team.coaches.len(),
                    COACH_NUMBERS.len()
                ),
            );
        }
        for (coach, number) in team.coaches.iter().zip(COACH_NUMBERS) {
            let coach = PlayerIdentity {
                number: Some(number),
                ..coach.clone()
            };
            out.emit(roster_row(game, side, COACHES_LINE, &coach, false))?;
        }
    }
    Ok(())
}

fn project_refs<S: RowSink + ?Sized>(game: &Game, out: &mut Emitter<'_, S>) -> Result<(), StoreError> {
    let officials = game
        .lineup
        .refs
        .iter()
        .map(|name| ("referee", name))
        .chain(game.lineup.linesmen.iter().map(|name| ("linesman", name)));
    for (role, name) in officials {
        out.emit(
            Row::new(TableName::Refs)
                .with("game_id", game.id.as_str())
                .with("role", role)
                .with("name", name.as_str()),
        )?;
    }
    Ok(())
}

fn project_period_stats<S: RowSink + ?Sized>(
    game: &Game,
    out: &mut Emitter<'_, S>,
) -> Result<(), StoreError> {
    for stat in game.period_stats() {
        out.emit(
            Row::new(TableName::StatsByPeriod)
                .with("game_id", game.id.as_str())
                .with("side", stat.side.as_str())
                .with("stat", stat.kind.as_str())
                .with("period", stat.period)
                .with("value", stat.value),
        )?;
    }
    Ok(())
}

fn project_goalies<S: RowSink + ?Sized>(game: &Game, out: &mut Emitter<'_, S>) -> Result<(), StoreError> {
    for goalie in &game.goalies {
        out.emit(
            Row::new(TableName::GoalieStats)
                .with("game_id", game.id.as_str())
                .with("side", goalie.side.as_ref().map(Side::as_str))
                .with("team", goalie.team.as_str())
                .with("jersey_number", goalie.player.number)
                .with("last_name", goalie.player.last_name.as_str())
                .with("first_name", goalie.player.first_name.as_str())
                .with("saves", goalie.saves)
                .with("shots", goalie.shots),
        )?;
    }
    Ok(())
}

/// Sets `<prefix>_number`, `<prefix>_last_name` and `<prefix>_first_name`.
fn set_player(row: &mut Row, prefix: &str, player: Option<&PlayerIdentity>) {
    row.set(&format!("{prefix}_number"), player.and_then(|player| player.number));
    row.set(
        &format!("{prefix}_last_name"),
        player.map(|player| player.last_name.as_str()),
    );
    row.set(
        &format!("{prefix}_first_name"),
        player.map(|player| player.first_name.as_str()),
    );
}

fn event_row(game: &Game, seq: usize, event: &GameEvent) -> Row {
    let mut row = Row::new(TableName::GameEvents)
        .with("game_id", game.id.as_str())
        .with("seq", seq)
        .with("time", event.time.as_str())
        .with("period", event.period)
        .with("event", event.label.as_str())
        .with("team", event.team.as_str())
        .with("side", event.side.as_ref().map(Side::as_str))
        .with("event_type", event.event_type().as_ref().map(EventType::as_str));
    set_player(&mut row, "player", event.player.as_ref());
    set_player(&mut row, "assist_1", event.assist_1.as_ref());
    set_player(&mut row, "assist_2", event.assist_2.as_ref());

    match &event.detail {
        EventDetail::Penalty {
            penalty_type,
            start_time,
            end_time,
        } => {
            row.set("penalty_type", penalty_type.as_str());
            row.set("penalty_start", start_time.as_str());
            row.set("penalty_end", end_time.as_str());
        }
        EventDetail::PenaltyShot {
            outcome,
            goalie_number,
        } => {
            row.set("ps_outcome", outcome.as_str());
            row.set("ps_goalie_number", *goalie_number);
        }
        EventDetail::Note { text } => row.set("note", text.as_str()),
        EventDetail::Goal { .. } | EventDetail::Empty => {}
    }
    row
}

fn plus_minus_row(game: &Game, event_id: RowKey, side: Option<Side>, on_ice: &str, number: u32) -> Row {
    Row::new(TableName::PlusMinus)
        .with("event_id", event_id)
        .with("game_id", game.id.as_str())
        .with("side", side.as_ref().map(Side::as_str))
        .with("on_ice", on_ice)
        .with("jersey_number", number)
}

fn project_events<S: RowSink + ?Sized>(game: &Game, out: &mut Emitter<'_, S>) -> Result<(), StoreError> {
    for (index, event) in game.events.iter().enumerate() {
        // Parent first: the children need the key the sink assigns.
        let event_id = out.emit(event_row(game, index + 1, event))?;

        let EventDetail::Goal {
            on_ice_plus,
            on_ice_minus,
        } = &event.detail
        else {
            continue;
        };
        let scoring = event.side;
        let defending = event.side.map(Side::opposite);
        for number in on_ice_plus {
            out.emit(plus_minus_row(game, event_id, scoring, "plus", *number))?;
        }
        for number in on_ice_minus {
            out.emit(plus_minus_row(game, event_id, defending, "minus", *number))?;
        }
    }
    Ok(())
}

fn shootout_row(game: &Game, attempt_number: usize, attempt: &ShootoutAttempt) -> Row {
    let mut row = Row::new(TableName::Shootouts)
        .with("game_id", game.id.as_str())
        .with("attempt", attempt_number)
        .with("outcome", attempt.outcome.as_str())
        .with("score_home", attempt.score.map(|(home, _)| home))
        .with("score_away", attempt.score.map(|(_, away)| away))
        .with("team", attempt.team.as_str())
        .with("side", attempt.side.as_ref().map(Side::as_str));
    set_player(&mut row, "shooter", attempt.shooter.as_ref());
    set_player(&mut row, "goalie", attempt.goalie.as_ref());
    row
}

fn project_shootout<S: RowSink + ?Sized>(game: &Game, out: &mut Emitter<'_, S>) -> Result<(), StoreError> {
    // A single attempt is the placeholder row of a game without a shootout.
    if !game.has_shootout() {
        return Ok(());
    }
    for (index, attempt) in game.shootout.iter().enumerate() {
        out.emit(shootout_row(game, index + 1, attempt))?;
    }
    Ok(())
}
