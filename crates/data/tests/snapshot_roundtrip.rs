use canasta_core::{
    EventBus, GameConfig, PlayerSeat, RoundInput, Session, SideEntry,
};
use canasta_data::{load_session, save_session};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("canasta-{}-{}.json", name, std::process::id()))
}

fn played_session() -> Session {
    let mut session = Session::new(GameConfig::standard());
    let mut events = EventBus::default();
    session
        .seat_table(
            vec!["Us".to_string(), "Them".to_string()],
            vec![
                PlayerSeat {
                    name: "Ada".to_string(),
                    side: "Us".to_string(),
                },
                PlayerSeat {
                    name: "Bo".to_string(),
                    side: "Them".to_string(),
                },
            ],
            &mut events,
        )
        .expect("seat table");
    let input = RoundInput {
        entries: [
            (
                "Us".to_string(),
                SideEntry {
                    meld: 120,
                    natural_canastas: 1,
                    ..SideEntry::default()
                },
            ),
            (
                "Them".to_string(),
                SideEntry {
                    meld: 45,
                    hand_penalty: 30,
                    ..SideEntry::default()
                },
            ),
        ]
        .into_iter()
        .collect(),
        went_out: Some("Us".to_string()),
        ..RoundInput::default()
    };
    session.submit_round(input, &mut events).expect("round");
    session
}

#[test]
fn saved_session_round_trips() {
    let session = played_session();
    let path = temp_path("roundtrip");
    save_session(&session.state, &path).expect("save");
    let restored = load_session(&path).expect("load");
    std::fs::remove_file(&path).ok();

    assert_eq!(restored, session.state);
    assert_eq!(restored.total("Us"), 720);
    assert_eq!(restored.total("Them"), 15);
    assert_eq!(restored.dealer_index, 1);
    assert_eq!(restored.history.len(), 1);
}

#[test]
fn version_mismatch_rejected() {
    let session = played_session();
    let path = temp_path("version");
    save_session(&session.state, &path).expect("save");
    let body = std::fs::read_to_string(&path).expect("read back");
    let tampered = body.replacen("\"version\": 1", "\"version\": 9", 1);
    std::fs::write(&path, tampered).expect("tamper");

    let err = load_session(&path).expect_err("must reject");
    std::fs::remove_file(&path).ok();
    assert!(err.to_string().contains("unsupported save version"));
}

#[test]
fn missing_snapshot_is_an_error() {
    assert!(load_session(&temp_path("missing-never-written")).is_err());
}
