#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use moveup::store::RecordStore;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fresh, empty directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("moveup_tests");
    path.push(name);
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Record store rooted in a fresh `<name>/data` directory (not created yet)
pub fn setup_store(name: &str) -> RecordStore {
    RecordStore::new(setup_test_dir(name).join("data"))
}

/// CLI command isolated from the real home directory and config file
pub fn moveup(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("moveup");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RUST_LOG");
    cmd
}

pub fn read_json(path: PathBuf) -> serde_json::Value {
    let content = fs::read_to_string(&path).expect("read record");
    serde_json::from_str(&content).expect("valid json")
}
