use blockfall::core::{GameEvent, GameState};
use blockfall::types::{Command, RunState, ShapeKind};
use serde::Serialize;
use serde_json::{json, Value};

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

#[test]
fn snapshot_serializes_board_and_meta() {
    let mut game = GameState::new(1);
    let locked = match game.apply_command(Command::HardDrop).first() {
        Some(GameEvent::Locked { kind, .. }) => *kind,
        other => panic!("expected a lock, got {:?}", other),
    };

    let v: Value = serde_json::to_value(game.snapshot()).unwrap();

    let board = v["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    assert!(board.iter().all(|row| row.as_array().unwrap().len() == 10));
    let ids: Vec<u64> = board
        .iter()
        .flat_map(|row| row.as_array().unwrap().iter())
        .filter_map(Value::as_u64)
        .filter(|id| *id != 0)
        .collect();
    assert_eq!(ids, vec![locked.id() as u64; 4]);

    assert_eq!(v["score"], json!(0));
    assert_eq!(v["level"], json!(1));
    assert_eq!(v["lines"], json!(0));
    assert_eq!(v["run_state"], json!("running"));
    assert_eq!(v["drop_interval_ms"], json!(1000));
    assert_eq!(v["active"]["x"], json!(4));
    assert_eq!(v["active"]["y"], json!(0));
    assert!(v["next"]["kind"].is_string());
}

#[test]
fn snapshot_serializes_active_shape() {
    let game = GameState::new(1);
    let snap = game.snapshot();
    let v: Value = serde_json::to_value(snap).unwrap();

    let shape = &v["active"]["shape"];
    assert_eq!(shape["width"], json!(snap.active.shape.width()));
    assert_eq!(shape["height"], json!(snap.active.shape.height()));
    assert_eq!(v["active"]["kind"], json!(snap.active.kind.as_str()));
}

#[test]
fn events_serialize_with_type_tag() {
    let locked = serde_json::to_value(GameEvent::Locked {
        kind: ShapeKind::T,
        x: 3,
        y: 18,
    })
    .unwrap();
    assert_eq!(locked, json!({ "type": "locked", "kind": "T", "x": 3, "y": 18 }));

    let cleared = serde_json::to_value(GameEvent::LinesCleared {
        count: 2,
        points: 400,
    })
    .unwrap();
    assert_eq!(cleared["type"], json!("linesCleared"));

    let over = serde_json::to_value(GameEvent::GameOver { final_score: 900 }).unwrap();
    assert_eq!(over, json!({ "type": "gameOver", "final_score": 900 }));
}

#[test]
fn public_types_serialize_for_export() {
    assert_eq!(to_json(&RunState::GameOver), json!("gameOver"));
    assert_eq!(to_json(&RunState::Paused), json!("paused"));
    assert_eq!(to_json(&Command::HardDrop), json!("HardDrop"));
    assert_eq!(to_json(&ShapeKind::L), json!("L"));
    assert_eq!(
        to_json(&ShapeKind::L.color()),
        json!({ "r": 0xff, "g": 0xa5, "b": 0x00 })
    );

    let snap = GameState::new(3).snapshot();
    let v = to_json(&snap);
    assert_eq!(v["landing_y"], json!(snap.landing_y));
    assert_eq!(v["next"], to_json(&snap.next));
}
