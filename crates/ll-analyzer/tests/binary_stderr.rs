//! Runs the `loglens` binary and checks what lands on stderr and in the
//! exit status.

use std::process::{Command, Output};

fn loglens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loglens"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn loglens")
}

#[test]
fn missing_file_reports_once_and_exits_one() {
    let out = loglens(&["/definitely/not/here.log"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("Error during analysis").count(), 1, "{stderr}");
    assert!(stderr.contains("/definitely/not/here.log"));
}

#[test]
fn progress_notice_visible_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("app.log");
    std::fs::write(&log, "one\ntwo\nthree\nfour\nfive\n").unwrap();
    let config = dir.path().join("loglens.toml");
    std::fs::write(&config, "progress_interval = 2\n").unwrap();

    let out = loglens(&[
        "--config",
        config.to_str().unwrap(),
        log.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("processed 2 lines"), "{stderr}");
    assert!(stderr.contains("processed 4 lines"), "{stderr}");
    assert!(!stderr.contains("processed 5 lines"), "{stderr}");

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["summary"]["total_lines_processed"], 5);
}
