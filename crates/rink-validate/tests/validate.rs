use std::collections::BTreeSet;

use rink_model::{
    EventDetail, Game, GameEvent, GameId, GoalieStat, IssueKind, IssueLog, Line, Lineup, PerSide,
    PeriodSeries, PlayerIdentity, ShootoutAttempt, ShotOutcome, Side, StatKind, TeamLineup,
    TeamSide, TeamTotals,
};
use rink_validate::{run_all, validate_game};

fn player(number: u32, last: &str) -> PlayerIdentity {
    PlayerIdentity::new(Some(number), last, "Test")
}

fn goal(side: Side, scorer: u32) -> GameEvent {
    GameEvent {
        time: "10:00".to_string(),
        period: Some(1),
        label: "Goal".to_string(),
        team: side.as_str().to_string(),
        side: Some(side),
        player: Some(player(scorer, "Scorer")),
        assist_1: None,
        assist_2: None,
        detail: EventDetail::Goal {
            on_ice_plus: vec![scorer],
            on_ice_minus: vec![1],
        },
    }
}

fn base_game() -> Game {
    Game {
        id: GameId::new("394785").expect("valid id"),
        teams: PerSide::new(TeamSide::new("HV71", "HV71"), TeamSide::new("FBK", "Färjestad")),
        event_url: None,
        line_up_url: None,
        date_time: None,
        league: "SHL".to_string(),
        arena: "Husqvarna Garden".to_string(),
        spectators: Some(6900),
        final_score: Some((2, 1)),
        totals: PerSide::new(
            TeamTotals {
                shots: Some(30),
                ..TeamTotals::default()
            },
            TeamTotals::default(),
        ),
        period_series: vec![
            PeriodSeries::new(StatKind::Shots, Side::Home, vec![10, 10, 10]),
            PeriodSeries::new(StatKind::Shots, Side::Away, vec![8, 9, 7]),
        ],
        score_by_period: vec![(1, 0), (0, 1), (1, 0)],
        goalies: vec![GoalieStat {
            side: Some(Side::Home),
            team: "HV71".to_string(),
            player: player(30, "Holm"),
            saves: 23,
            shots: 24,
        }],
        events: vec![goal(Side::Home, 21), goal(Side::Away, 14), goal(Side::Home, 9)],
        shootout: Vec::new(),
        lineup: Lineup {
            refs: vec!["Lindqvist Mikael".to_string()],
            linesmen: Vec::new(),
            teams: PerSide::new(
                TeamLineup {
                    coaches: Vec::new(),
                    lines: vec![Line {
                        name: "1st Line".to_string(),
                        players: vec![player(21, "Andersson"), player(9, "Berg")],
                    }],
                    starting: BTreeSet::from([21]),
                },
                TeamLineup::default(),
            ),
        },
    }
}

#[test]
fn consistent_game_is_clean() {
    assert_eq!(run_all(&base_game()), Vec::new());
}

#[test]
fn findings_become_structural_warnings() {
    let mut game = base_game();
    game.final_score = Some((3, 1));
    game.goalies[0].saves = 25;
    game.lineup.teams.home.starting.insert(99);

    let mut log = IssueLog::new(game.id.as_str());
    let count = validate_game(&game, &mut log);

    let fields: Vec<&str> = log.issues().iter().map(|issue| issue.field.as_str()).collect();
    assert_eq!(count, log.len());
    assert!(fields.contains(&"score_by_period"));
    assert!(fields.contains(&"goalies_saves"));
    assert!(fields.contains(&"events"));
    assert!(fields.contains(&"home_starting"));
    assert_eq!(log.count(IssueKind::StructuralInconsistency), count);
    assert!(log.issues().iter().all(|issue| issue.game_id == "394785"));
}

#[test]
fn shootout_games_skip_score_sums() {
    let mut game = base_game();
    game.final_score = Some((3, 1));
    let attempt = ShootoutAttempt {
        outcome: ShotOutcome::Scored,
        score: Some((1, 0)),
        team: "HV71".to_string(),
        side: Some(Side::Home),
        shooter: Some(player(21, "Andersson")),
        goalie: None,
    };
    game.shootout = vec![attempt.clone(), attempt];
    assert!(run_all(&game).is_empty());
}

#[test]
fn penalty_shot_goals_count_towards_the_score() {
    let mut game = base_game();
    game.events[2].detail = EventDetail::PenaltyShot {
        outcome: ShotOutcome::Scored,
        goalie_number: Some(1),
    };
    assert!(run_all(&game).is_empty());
}
