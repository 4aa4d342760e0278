mod common;

use rink_model::{CellValue, GameId, IssueLog, Row, TableName};
use rink_output::{GameStore, MemoryStore, StoreError, WriteOutcome, project};

#[test]
fn failed_game_leaves_nothing_behind() {
    let mut store = MemoryStore::new();
    let game_id = GameId::new("394785").expect("id");

    let result = store.write_game(&game_id, |sink| {
        sink.insert(Row::new(TableName::Games).with("game_id", "394785"))?;
        sink.insert(Row::new(TableName::Refs).with("game_id", "394785"))?;
        let mut broken = Row::new(TableName::PlusMinus);
        broken
            .cells
            .insert("goal_id".to_string(), CellValue::from(1_i64));
        sink.insert(broken)
    });

    assert!(matches!(result, Err(StoreError::UnknownColumn { .. })));
    assert_eq!(store.row_count(TableName::Games), 0);
    assert_eq!(store.row_count(TableName::Refs), 0);
    assert!(!store.contains_game(&game_id));
}

#[test]
fn duplicate_game_is_not_written_twice() {
    let game = common::game(&common::raw_game("394785"));
    let mut store = MemoryStore::new();

    let mut first_log = IssueLog::new(game.id.as_str());
    let first = store
        .write_game(&game.id, |sink| project(&game, sink, &mut first_log))
        .expect("first write");
    assert!(matches!(first, WriteOutcome::Committed(_)));
    let events = store.row_count(TableName::GameEvents);

    let mut called = false;
    let second = store
        .write_game(&game.id, |_| {
            called = true;
            Ok(())
        })
        .expect("second write");
    assert_eq!(second, WriteOutcome::Duplicate);
    assert!(!called);
    assert_eq!(store.row_count(TableName::GameEvents), events);
    assert_eq!(store.game_count(), 1);
}

#[test]
fn second_game_keys_do_not_collide() {
    let mut store = MemoryStore::new();
    for id in ["1", "2"] {
        let game = common::game(&common::raw_game(id));
        let mut log = IssueLog::new(id);
        store
            .write_game(&game.id, |sink| project(&game, sink, &mut log))
            .expect("write");
    }
    let mut keys: Vec<_> = store
        .rows(TableName::GameEvents)
        .iter()
        .filter_map(|row| row.get("event_id").as_int())
        .collect();
    let total = keys.len();
    keys.dedup();
    assert_eq!(keys.len(), total);
    assert_eq!(total, 8);

    // Every plus/minus row points at a goal of its own game.
    for row in store.rows(TableName::PlusMinus) {
        let parent = store
            .rows(TableName::GameEvents)
            .iter()
            .find(|event| event.get("event_id") == row.get("event_id"))
            .expect("parent event");
        assert_eq!(parent.get("game_id"), row.get("game_id"));
        assert_eq!(parent.get("event_type").as_text(), Some("goal"));
    }
}
