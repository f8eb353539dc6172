use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;
use tileworld::{
    FileStore, MemoryStore, SaveStore, Session, SessionError, Signal, Status, StringInput,
    interact_with_input_string,
};

fn run(input: &str, store: &mut dyn SaveStore) -> (Session, Signal) {
    let mut session = Session::new();
    let signal = session.run(&mut StringInput::new(input), store).expect("run should succeed");
    (session, signal)
}

fn hash_of(session: &Session) -> Option<u64> {
    session.world().map(|world| world.snapshot_hash())
}

#[test]
fn file_store_save_and_load_reproduces_state() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("save_data.txt"));

    let (_, signal) = run("N123SW:Q", &mut store);
    assert_eq!(signal, Signal::SavedAndQuit);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "N123SW");

    let loaded = interact_with_input_string("L", &mut store).unwrap();
    let straight = interact_with_input_string("N123SW", &mut MemoryStore::default()).unwrap();
    assert_eq!(loaded, straight);
}

#[test]
fn split_session_matches_continuous_session() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("save_data.txt"));

    run("N123SSS:Q", &mut store);
    let (resumed, _) = run("LWW", &mut store);
    let (straight, _) = run("N123SSSWW", &mut MemoryStore::default());

    assert_eq!(resumed.log(), straight.log());
    assert_eq!(hash_of(&resumed), hash_of(&straight));
}

#[test]
fn quitting_without_saving_keeps_previous_save() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("save_data.txt"));

    run("N1SDD:Q", &mut store);
    let (_, signal) = run("N2SWWQ", &mut store);
    assert_eq!(signal, Signal::Quit);
    assert_eq!(store.load().unwrap().as_deref(), Some("N1SDD"));
}

#[test]
fn loading_with_no_save_file_is_reported() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("missing").join("save_data.txt"));
    let mut session = Session::new();

    let err = session.run(&mut StringInput::new("L"), &mut store).unwrap_err();
    assert!(matches!(err, SessionError::NoSaveData));
    assert_eq!(session.status(), Status::Start);
}

fn play_keys() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![Just('W'), Just('A'), Just('S'), Just('D'), Just('P'), Just('O')],
        0..40,
    )
    .prop_map(|keys| keys.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn saving_and_loading_anywhere_is_invisible(
        seed in 0_u64..1_000_000,
        before in play_keys(),
        after in play_keys(),
    ) {
        let prefix = format!("N{seed}S{before}");
        let mut store = MemoryStore::default();

        let (_, signal) = run(&format!("{prefix}:Q"), &mut store);
        prop_assert_eq!(signal, Signal::SavedAndQuit);
        let (resumed, _) = run(&format!("L{after}"), &mut store);
        let (straight, _) = run(&format!("{prefix}{after}"), &mut MemoryStore::default());

        prop_assert_eq!(resumed.log(), straight.log());
        prop_assert_eq!(hash_of(&resumed), hash_of(&straight));
    }
}
