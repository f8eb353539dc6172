use std::error::Error as _;
use std::fs;

use tempfile::tempdir;

use super::*;

#[test]
fn missing_file_loads_as_none() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("save_data.txt"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn save_then_load_returns_log_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("save_data.txt");
    let mut store = FileStore::new(&path);

    store.save("N123SWWPD").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("N123SWWPD"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "N123SWWPD");

    let tmp_path = path.with_extension("txt.tmp");
    assert!(!tmp_path.exists());
}

#[test]
fn save_overwrites_previous_log() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("save_data.txt"));

    store.save("N1SWWWW").unwrap();
    store.save("N2S").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("N2S"));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("save_data.txt");
    let mut store = FileStore::new(&path);

    store.save("N9S").unwrap();
    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn unreadable_path_reports_read_error_with_path() {
    let dir = tempdir().unwrap();
    // A directory cannot be read as a text file.
    let store = FileStore::new(dir.path());

    let err = store.load().unwrap_err();
    assert!(matches!(err, SaveError::Read { .. }));
    assert!(err.to_string().contains(&dir.path().display().to_string()));
    assert!(err.source().is_some());
}

#[test]
fn memory_store_round_trips() {
    let mut store = MemoryStore::default();
    assert_eq!(store.load().unwrap(), None);

    store.save("N5SD").unwrap();
    assert_eq!(store.contents(), Some("N5SD"));
    assert_eq!(MemoryStore::with_contents("N5SD").load().unwrap().as_deref(), Some("N5SD"));
}
