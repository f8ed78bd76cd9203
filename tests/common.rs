#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static HOME_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Binary under test, with `HOME` pointing at a fresh empty directory so no
/// real configuration file is picked up.
pub fn edemo() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!(
        "employes_demo_home_{}_{}",
        std::process::id(),
        HOME_SEQ.fetch_add(1, Ordering::SeqCst)
    ));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create test home");
    edemo_with_home(&home.to_string_lossy())
}

/// Binary under test with an explicit `HOME`
pub fn edemo_with_home(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("employes-demo");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("employes_demo_{}", name));
    path.push("employes_demo.db");
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("employes_demo_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run the default create flow against `db_path`
pub fn create_db(db_path: &str) {
    edemo().args(["--db", db_path, "create"]).assert().success();
}

/// Open a connection for direct inspection of the generated file
pub fn open(db_path: &str) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}
