use crate::{SessionStore, SimError};

use ts_core::{PathType, Session};

use googletest::prelude::*;
use tempfile::TempDir;

fn session() -> Session {
    Session {
        id: String::from("1704067200000"),
        username: String::from("asha"),
        path_type: Some(PathType::Anomaly),
    }
}

#[test]
fn given_no_file_when_load_then_none() {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("session.json"));

    assert_that!(store.load().unwrap(), none());
}

#[test]
fn given_saved_session_when_load_then_same_session() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("nested").join("session.json"));

    // When
    store.save(&session()).unwrap();

    // Then
    assert_that!(store.load().unwrap(), some(eq(&session())));
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert_that!(raw.contains("\"pathType\": \"anomaly\""), eq(true));
}

#[test]
fn given_malformed_file_when_load_then_session_error() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = SessionStore::new(path);

    // When
    let result = store.load();

    // Then
    assert!(matches!(result, Err(SimError::Session { .. })));
}

#[test]
fn given_session_when_clear_then_removed_once() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(temp.path().join("session.json"));
    store.save(&session()).unwrap();

    // When
    let first = store.clear().unwrap();
    let second = store.clear().unwrap();

    // Then
    assert_that!(first, eq(true));
    assert_that!(second, eq(false));
    assert_that!(store.load().unwrap(), none());
}
