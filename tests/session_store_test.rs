//! Integration test: Session persistence
//!
//! Exercises the session store against a real profile file: sign-in,
//! high score updates, restart recovery, logout and damaged records.

use flappy::session::{FileStorage, ScoreSink, SessionState, SessionStore};
use flappy::AppConfig;
use std::fs;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> SessionStore {
    let config = AppConfig::with_data_dir(dir.path());
    SessionStore::new(FileStorage::new(config.profile_path()))
}

#[test]
fn test_profile_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut first = store_in(&dir);
    first.restore();
    let user = first.register("Goose", "goose@topgun.mil", "secret");
    assert!(first.record_score_if_higher(7));

    // A fresh store over the same file sees the same player and score.
    let mut second = store_in(&dir);
    assert!(second.is_loading());
    second.restore();
    let restored = second.user().expect("restored user");
    assert_eq!(restored.id, user.id);
    assert_eq!(restored.name, "Goose");
    assert_eq!(restored.high_score, 7);
}

#[test]
fn test_record_uses_camel_case_fields() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(dir.path());
    let mut store = store_in(&dir);
    store.restore();
    store.login("ice@topgun.mil", "pw");
    store.record_score_if_higher(3);

    let raw = fs::read_to_string(config.profile_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["highScore"], 3);
    assert_eq!(value["name"], "ice");
    assert_eq!(value["email"], "ice@topgun.mil");
    assert!(value["id"].as_str().unwrap().starts_with("user_"));
}

#[test]
fn test_lower_score_leaves_record_untouched() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(dir.path());
    let mut store = store_in(&dir);
    store.restore();
    store.login("a@b", "");
    store.record_score_if_higher(10);
    let before = fs::read_to_string(config.profile_path()).unwrap();

    assert!(!store.record_score_if_higher(9));
    assert!(!store.record_score_if_higher(10));

    assert_eq!(store.high_score(), 10);
    assert_eq!(fs::read_to_string(config.profile_path()).unwrap(), before);
}

#[test]
fn test_logout_deletes_record() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(dir.path());
    let mut store = store_in(&dir);
    store.restore();
    store.login("a@b", "");
    assert!(config.profile_path().exists());

    store.logout();
    assert_eq!(store.state(), &SessionState::Anonymous);
    assert!(!config.profile_path().exists());

    let mut reopened = store_in(&dir);
    assert_eq!(reopened.restore(), &SessionState::Anonymous);
}

#[test]
fn test_logout_when_anonymous_is_harmless() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.restore();
    store.logout();
    assert_eq!(store.state(), &SessionState::Anonymous);
    assert!(!store.is_in_memory_only());
}

#[test]
fn test_record_score_while_anonymous_is_noop() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(dir.path());
    let mut store = store_in(&dir);
    store.restore();

    assert!(!store.record_score_if_higher(42));
    assert_eq!(store.high_score(), 0);
    assert!(!config.profile_path().exists());
}

#[test]
fn test_malformed_record_is_discarded() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(dir.path());
    fs::write(config.profile_path(), "{not json").unwrap();

    let mut store = store_in(&dir);
    assert_eq!(store.restore(), &SessionState::Anonymous);
    assert!(!config.profile_path().exists());
    assert!(!store.is_in_memory_only());
}

#[test]
fn test_missing_data_dir_is_created_on_save() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(dir.path().join("nested").join("home"));
    let mut store = SessionStore::new(FileStorage::new(config.profile_path()));
    store.restore();
    store.login("a@b", "");
    assert!(config.profile_path().exists());
}
