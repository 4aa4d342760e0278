#![allow(dead_code)]

use rink_ingest::{RawEvent, RawGame, RawLine, RawLineup, RawShootoutAttempt};
use rink_model::Game;
use rink_transform::{AssemblyOptions, assemble};

pub fn raw_game(id: &str) -> RawGame {
    RawGame::new()
        .with_field("game_id", id)
        .with_field("game_status", "Final Score")
        .with_field("home_name_abbrev", "HV71")
        .with_field("away_name_abbrev", "FBK")
        .with_field("home_name", "HV71")
        .with_field("away_name", "Färjestad BK")
        .with_field("date_time", "2022-03-01 19:00")
        .with_field("score", "2 - 1")
        .with_field("score_by_period", "(1-0,0-1,1-0)")
        .with_field("shots_by_period_home", "(10:10:10)")
        .with_field("shots_by_period_away", "(8:9:7)")
        .with_field("goalies_teams", vec!["HV71"])
        .with_field("goalies_names", vec!["30. Holm, Anders"])
        .with_field("goalies_saves", vec!["23/24"])
        .with_event(
            RawEvent::new("05:12", "Goal", "HV71")
                .with_player("21. Andersson, Erik")
                .with_details("Pos:21,9,4", "Neg:1,14"),
        )
        .with_event(
            RawEvent::new("22:40", "2 min", "FBK")
                .with_player("14. Ek, Nils")
                .with_details("Tripping", "(22:40 - 24:40)"),
        )
        .with_event(
            RawEvent::new("39:01", "Goal", "FBK")
                .with_player("14. Ek, Nils")
                .with_details("Pos:14,17", "Neg:21,4,30"),
        )
        .with_event(
            RawEvent::new("51:30", "Goal (PS)", "HV71")
                .with_player("7. Lind, Per")
                .with_details("Pos:7,12", "Neg:3"),
        )
        .with_lineup(RawLineup {
            refs: vec!["Lindqvist Mikael".to_string()],
            linesmen: vec!["Sjöberg Ola".to_string(), "Nyman Kalle".to_string()],
            home_coaches: vec![
                "Johansson, Per".to_string(),
                "Svensson, Ulf".to_string(),
                "Karlsson, Bo".to_string(),
            ],
            home_lines: vec![RawLine {
                line_name: "1st Line".to_string(),
                players: vec!["21. Andersson, Erik".to_string(), "9. Berg, Jon".to_string()],
            }],
            home_starting: vec!["21".to_string()],
            ..RawLineup::default()
        })
}

pub fn with_shootout(raw: RawGame, attempts: usize) -> RawGame {
    (0..attempts).fold(raw, |raw, index| {
        raw.with_shootout(RawShootoutAttempt {
            scored: Some(if index % 2 == 0 { "Scored" } else { "Missed" }.to_string()),
            score: Some("1 - 0".to_string()),
            team: Some(if index % 2 == 0 { "HV71" } else { "FBK" }.to_string()),
            player: Some("21. Andersson, Erik".to_string()),
            goalie: Some("1. Berg, Olle".to_string()),
        })
    })
}

pub fn game(raw: &RawGame) -> Game {
    let assembly = assemble(raw, &AssemblyOptions::default());
    assembly.game().cloned().expect("game assembles")
}
