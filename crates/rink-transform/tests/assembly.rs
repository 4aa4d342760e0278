//! End-to-end assembly of raw games.

use rink_ingest::{RawEvent, RawGame, RawLine, RawLineup, RawShootoutAttempt};
use rink_model::{EventDetail, IssueKind, ShotOutcome, Side, StatKind};
use rink_transform::{AssemblyOptions, AssemblyOutcome, SkipReason, assemble};

fn finished_game() -> RawGame {
    RawGame::new()
        .with_field("game_id", "394785")
        .with_field("game_status", "Final Score")
        .with_field("event_url", "https://stats.example.org/Game/Events/394785")
        .with_field("home_name_abbrev", "HV71")
        .with_field("away_name_abbrev", "FBK")
        .with_field("home_name", "HV71")
        .with_field("away_name", "Färjestad BK")
        .with_field("date_time", "2022-03-01 19:00")
        .with_field("league", "SHL")
        .with_field("arena", " Husqvarna   Garden ")
        .with_field("spectators", "Spectators: 6 912")
        .with_field("score", "2 - 1")
        .with_field("score_by_period", "(1-0,0-1,1-0)")
        .with_field("shots_total_home", "30")
        .with_field("shots_by_period_home", "(10:10:10)")
        .with_field("shots_by_period_away", "(8:9:7)")
        .with_field("saves_by_period_home", "(8:8:7)")
        .with_field("pp_perc_home", "12,5%")
        .with_field("pp_perc_away", "-")
        .with_field("goalies_teams", vec!["HV71", "FBK"])
        .with_field("goalies_names", vec!["30. Holm, Anders", "1. Berg, Olle"])
        .with_field("goalies_saves", vec!["23/24", "28/30"])
        .with_event(
            RawEvent::new("05:12", "Goal", "HV71")
                .with_player("21. Andersson, Erik")
                .with_assists("9. Berg, Jon", "")
                .with_details("Pos:21,9,4,5,30", "Neg:1,14,17,3,6"),
        )
        .with_event(
            RawEvent::new("22:40", "2 min", "FBK")
                .with_player("14. Ek, Nils")
                .with_details("Tripping", "(22:40 - 24:40)"),
        )
        .with_event(
            RawEvent::new("39:01", "Goal", "FBK")
                .with_player("14. Ek, Nils")
                .with_details("Pos:14,17,3", "Neg:21,4,30"),
        )
        .with_event(
            RawEvent::new("51:30", "Goal (PS)", "HV71")
                .with_player("7. Lind, Per")
                .with_details("Pos:7,12", "Neg:3"),
        )
        .with_lineup(RawLineup {
            refs: vec!["Lindqvist Mikael".to_string(), " ".to_string()],
            linesmen: vec!["Sjöberg Ola".to_string()],
            home_coaches: vec!["Johansson, Per".to_string()],
            home_lines: vec![RawLine {
                line_name: "1st Line".to_string(),
                players: vec!["21. Andersson, Erik".to_string(), "9. Berg, Jon".to_string()],
            }],
            home_starting: vec!["21. Andersson, Erik".to_string()],
            ..RawLineup::default()
        })
}

#[test]
fn finished_game_is_assembled() {
    let assembly = assemble(&finished_game(), &AssemblyOptions::default());
    let game = assembly.game().expect("assembled");

    assert_eq!(game.id.as_str(), "394785");
    assert_eq!(game.arena, "Husqvarna Garden");
    assert_eq!(game.spectators, Some(6912));
    assert_eq!(game.final_score, Some((2, 1)));
    assert_eq!(game.totals.home.power_play_percentage, Some(12.5));
    assert_eq!(game.totals.away.power_play_percentage, None);
    assert_eq!(
        game.series(StatKind::Shots, Side::Away).map(|series| series.values.clone()),
        Some(vec![8, 9, 7])
    );
    assert_eq!(game.goalies.len(), 2);
    assert_eq!(game.goalies[1].side, Some(Side::Away));
    assert_eq!(game.lineup.refs, vec!["Lindqvist Mikael".to_string()]);
    assert!(game.lineup.teams.home.starting.contains(&21));
    assert_eq!(game.lineup.teams.home.coaches[0].number, None);

    assert_eq!(game.events.len(), 4);
    assert_eq!(game.events[1].period, Some(2));
    assert_eq!(game.events[1].side, Some(Side::Away));
    assert_eq!(game.events[0].assist_2, None);
    assert_eq!(
        game.events[3].detail,
        EventDetail::PenaltyShot {
            outcome: ShotOutcome::Scored,
            goalie_number: Some(3),
        }
    );
    assert!(assembly.issues.is_empty(), "{:?}", assembly.issues.issues());
}

#[test]
fn unfinished_game_is_skipped_with_one_warning() {
    let raw = finished_game().with_field("game_status", "2nd period");
    let assembly = assemble(&raw, &AssemblyOptions::default());

    assert!(assembly.is_skipped());
    assert!(matches!(
        assembly.outcome,
        AssemblyOutcome::Skipped(SkipReason::Unfinished { .. })
    ));
    assert_eq!(assembly.issues.len(), 1);
    assert_eq!(assembly.issues.count(IssueKind::IncompleteGame), 1);
    assert_eq!(assembly.issues.issues()[0].game_id, "394785");
}

#[test]
fn completion_phrases_are_configurable() {
    let raw = finished_game().with_field("game_status", "Slutresultat");
    let options = AssemblyOptions::new().with_completion_phrases(["Slutresultat"]);
    assert!(!assemble(&raw, &options).is_skipped());
    assert!(assemble(&raw, &AssemblyOptions::default()).is_skipped());
}

#[test]
fn missing_game_id_is_skipped() {
    let raw = finished_game().with_field("game_id", "  ");
    let assembly = assemble(&raw, &AssemblyOptions::default());
    assert!(matches!(
        assembly.outcome,
        AssemblyOutcome::Skipped(SkipReason::MissingGameId)
    ));
    assert_eq!(assembly.issues.count(IssueKind::MalformedField), 1);
}

#[test]
fn malformed_fields_degrade_to_absent_values() {
    let raw = finished_game()
        .with_field("shots_by_period_home", "(10:x:10)")
        .with_field("pp_perc_home", "n/a")
        .with_event(
            RawEvent::new("55:00", "Goal", "MIF")
                .with_player("Andersson")
                .with_details("Pos:8", ""),
        );
    let assembly = assemble(&raw, &AssemblyOptions::default().with_checks(false));
    let game = assembly.game().expect("assembled despite bad fields");

    assert!(game.series(StatKind::Shots, Side::Home).is_none());
    assert_eq!(game.totals.home.power_play_percentage, None);
    assert_eq!(game.events[4].side, None);
    assert_eq!(game.events[4].player, None);

    let fields: Vec<&str> = assembly
        .issues
        .issues()
        .iter()
        .map(|issue| issue.field.as_str())
        .collect();
    assert!(fields.contains(&"shots_by_period_home"));
    assert!(fields.contains(&"pp_perc_home"));
    assert!(fields.contains(&"game_events[4].team"));
    assert!(fields.contains(&"game_events[4].player"));
    assert_eq!(assembly.issues.count(IssueKind::MalformedField), 4);
}

#[test]
fn shootout_attempts_are_read() {
    let raw = finished_game()
        .with_field("game_status", "Game Winning Shots ended")
        .with_shootout(RawShootoutAttempt {
            scored: Some("Scored".to_string()),
            score: Some("1 - 0".to_string()),
            team: Some("HV71".to_string()),
            player: Some("21. Andersson, Erik".to_string()),
            goalie: Some("1. Berg, Olle".to_string()),
        })
        .with_shootout(RawShootoutAttempt {
            scored: Some("Missed".to_string()),
            score: Some("1 - 0".to_string()),
            team: Some("FBK".to_string()),
            player: Some("14. Ek, Nils".to_string()),
            goalie: Some("30. Holm, Anders".to_string()),
        })
        .with_shootout(RawShootoutAttempt::default());
    let assembly = assemble(&raw, &AssemblyOptions::default());
    let game = assembly.game().expect("assembled");

    assert_eq!(game.shootout.len(), 2);
    assert!(game.has_shootout());
    assert_eq!(game.shootout[1].outcome, ShotOutcome::Missed);
    assert_eq!(game.shootout[1].side, Some(Side::Away));
    assert_eq!(game.shootout[0].score, Some((1, 0)));
}

#[test]
fn structural_mismatches_are_warnings_only() {
    let raw = finished_game().with_field("saves_by_period_home", "(8:8:7:1)");
    let assembly = assemble(&raw, &AssemblyOptions::default());
    assert!(assembly.game().is_some());
    assert_eq!(
        assembly.issues.count(IssueKind::StructuralInconsistency),
        1
    );
}

#[test]
fn assist_only_rows_are_kept() {
    let raw = finished_game()
        .with_event(RawEvent::new("", "", "").with_assists("9. Berg, Jon", ""))
        .with_event(RawEvent::new(" ", "", "").with_assists("", " "));
    let assembly = assemble(&raw, &AssemblyOptions::default().with_checks(false));
    let game = assembly.game().expect("assembled");

    assert_eq!(game.events.len(), 5);
    let kept = &game.events[4];
    assert_eq!(kept.assist_1.as_ref().and_then(|player| player.number), Some(9));
    assert_eq!(kept.side, None);
}

#[test]
fn huge_period_values_are_reported_not_fatal() {
    let raw = finished_game()
        .with_field("shots_total_home", "1")
        .with_field("shots_by_period_home", "(4000000000:4000000000)")
        .with_field("score_by_period", "(4000000000-0,4000000000-0)");
    let assembly = assemble(&raw, &AssemblyOptions::default());
    assert!(assembly.game().is_some());
    assert!(assembly.issues.count(IssueKind::StructuralInconsistency) >= 2);
}
