//! Tests for discovering and loading raw game files.

use std::fs;
use std::path::Path;

use rink_ingest::{IngestError, list_json_files, load_raw_games, resolve_inputs};

const GAME: &str = r#"{
    "game_id": "394785",
    "game_status": "Final Score",
    "home_name_abbrev": "HV71",
    "away_name_abbrev": "FBK",
    "shots_by_period_home": "(12:8:10)",
    "lineup": {"refs": ["Lindqvist Mikael"], "home_lines": [{"line_name": "1st Line", "players": ["21. Andersson, Erik"]}]}
}"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

#[test]
fn lists_json_files_sorted() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "b.json", GAME);
    write(dir.path(), "a.JSON", GAME);
    write(dir.path(), "notes.txt", "ignored");
    fs::create_dir(dir.path().join("nested.json")).expect("create dir");

    let files = list_json_files(dir.path()).expect("list json");
    let names: Vec<_> = files
        .iter()
        .filter_map(|path| path.file_name()?.to_str())
        .collect();
    assert_eq!(names, vec!["a.JSON", "b.json"]);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = list_json_files(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, IngestError::NotFound { .. }));
}

#[test]
fn loads_single_object_and_array() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "one.json", GAME);
    write(dir.path(), "many.json", &format!("[{GAME}, {GAME}]"));

    let one = load_raw_games(&dir.path().join("one.json"))
        .expect("load one")
        .games;
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].text("game_id"), "394785");
    assert_eq!(one[0].lineup.home_lines[0].players.len(), 1);
    assert_eq!(one[0].lineup.refs, vec!["Lindqvist Mikael".to_string()]);

    let many = load_raw_games(&dir.path().join("many.json")).expect("load many");
    assert_eq!(many.games.len(), 2);
    assert!(many.rejected.is_empty());
}

#[test]
fn one_bad_game_does_not_reject_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let numeric = r#"{"game_id": "394786", "game_status": "Final Score", "spectators": 5432}"#;
    let broken = r#"{"game_id": 394787, "events": 5}"#;
    write(
        dir.path(),
        "mixed.json",
        &format!("[{GAME}, {broken}, {numeric}, \"not a game\"]"),
    );

    let loaded = load_raw_games(&dir.path().join("mixed.json")).expect("file loads");
    let ids: Vec<String> = loaded.games.iter().map(|game| game.text("game_id")).collect();
    assert_eq!(ids, vec!["394785".to_string(), "394786".to_string()]);
    assert_eq!(loaded.games[1].text("spectators"), "5432");

    assert_eq!(loaded.rejected.len(), 2);
    assert!(matches!(
        &loaded.rejected[0],
        IngestError::GameDecode { index: 1, game_id: Some(id), .. } if id == "394787"
    ));
    assert!(matches!(
        &loaded.rejected[1],
        IngestError::GameDecode { index: 3, game_id: None, .. }
    ));
    let message = loaded.rejected[0].to_string();
    assert!(message.contains("mixed.json"));
    assert!(message.contains("game #1 (game_id 394787)"));
}

#[test]
fn malformed_json_reports_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "broken.json", "{\"game_id\": ");
    let err = load_raw_games(&dir.path().join("broken.json")).unwrap_err();
    assert!(matches!(err, IngestError::Decode { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn resolve_inputs_mixes_files_and_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sub = dir.path().join("games");
    fs::create_dir(&sub).expect("create dir");
    write(&sub, "x.json", GAME);
    write(&sub, "y.json", GAME);
    write(dir.path(), "z.json", GAME);

    let files = resolve_inputs(&[sub, dir.path().join("z.json")]).expect("resolve");
    assert_eq!(files.len(), 3);
    assert!(resolve_inputs(&[dir.path().join("nope.json")]).is_err());
}
