#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rmi() -> Command {
    cargo_bin_cmd!("rminutes")
}

/// Create a unique storage path inside the system temp dir and remove any existing file
pub fn setup_test_storage(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rminutes.json", name));
    let storage = path.to_string_lossy().to_string();
    fs::remove_file(&storage).ok();
    storage
}

/// Run a command against `storage` and return its stdout.
pub fn run_ok(storage: &str, args: &[&str]) -> String {
    let mut full = vec!["--storage", storage];
    full.extend_from_slice(args);
    let out = rmi().args(&full).output().expect("failed to run rminutes");
    assert!(
        out.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Add a few rows useful for many tests: Bob +1t 30min, Ann -45min, Name1 0
pub fn init_storage_with_data(storage: &str) {
    run_ok(storage, &["add", "--name", "bob", "--plus-hours", "1", "--plus-minutes", "30"]);
    run_ok(storage, &["add", "--name", "ann", "--minus-minutes", "45"]);
    run_ok(storage, &["add"]);
}

/// Parse the saved slot out of the storage file.
pub fn read_slot(storage: &str) -> serde_json::Value {
    let content = fs::read_to_string(storage).expect("storage file");
    let map: serde_json::Value = serde_json::from_str(&content).expect("storage json");
    let slot = map["minutesTrackerData"].as_str().expect("slot present");
    serde_json::from_str(slot).expect("slot json")
}
