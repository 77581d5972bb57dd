//! CLI command integration tests.
//! Each test runs in its own temp directory and ignores any ambient ZHESI_CONFIG.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zhesi_cmd(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("zhesi").unwrap();
    cmd.current_dir(dir.path());
    cmd.env_remove("ZHESI_CONFIG");
    cmd
}

#[test]
fn ask_same_question_twice_goes_deeper() {
    let dir = TempDir::new().unwrap();
    zhesi_cmd(&dir)
        .args(["ask", "人为什么存在？", "人为什么存在？"])
        .assert()
        .success()
        .stdout(predicate::str::contains("depth:     1"))
        .stdout(predicate::str::contains("depth:     2"))
        .stdout(predicate::str::contains("自我意识的觉醒与存在的自证"))
        .stdout(predicate::str::contains("「本体存在」与「社会存在」"));
}

#[test]
fn ask_reports_rejections_and_keeps_going() {
    let dir = TempDir::new().unwrap();
    zhesi_cmd(&dir)
        .args(["ask", "黎曼猜想的证明是什么？存在的意义是什么？", "意识是什么？"])
        .assert()
        .success()
        .stdout(predicate::str::contains("error: blocked topic"))
        .stdout(predicate::str::contains("[黎曼猜想]"))
        .stdout(predicate::str::contains("depth:     1"));
}

#[test]
fn ask_export_then_inspect() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("trace.json");

    zhesi_cmd(&dir)
        .args(["ask", "何为自由？", "什么是真理？", "今天吃什么", "--export"])
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported 2 records"));

    let text = std::fs::read_to_string(&export_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["session"]["recordCount"], 2);
    assert_eq!(value["records"][1]["question"], "什么是真理？");

    zhesi_cmd(&dir)
        .arg("inspect")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("records:   2"))
        .stdout(predicate::str::contains("[1] think_"))
        .stdout(predicate::str::contains("depth=2 什么是真理？"));
}

#[test]
fn ask_export_with_empty_trace_fails() {
    let dir = TempDir::new().unwrap();
    zhesi_cmd(&dir)
        .args(["ask", "hello", "--export", "out.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("trace is empty").count(1));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn inspect_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    zhesi_cmd(&dir)
        .args(["inspect", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read absent.json"));
}

#[test]
fn repl_session_with_export_on_exit() {
    let dir = TempDir::new().unwrap();
    zhesi_cmd(&dir)
        .write_stdin("人为什么存在？\n/pause\n自由？\n/resume\n/stats\n退出\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("recording is paused"))
        .stdout(predicate::str::contains("records:   1"))
        .stdout(predicate::str::contains("session ended: 1 thoughts"))
        .stdout(predicate::str::contains("exported 1 records"));

    assert!(dir.path().join("zhesi_blackbox_records.json").exists());
}

#[test]
fn repl_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("zhesi.toml");
    std::fs::write(
        &config,
        "exit_words = [\"bye\"]\nexport_on_exit = \"always\"\nexport_path = \"custom.json\"\n",
    )
    .unwrap();

    zhesi_cmd(&dir)
        .arg("repl")
        .arg("--config")
        .arg(&config)
        .write_stdin("本心是什么？\nexit\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unsupported domain"))
        .stdout(predicate::str::contains("session ended: 1 thoughts"));

    assert!(dir.path().join("custom.json").exists());
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    zhesi_cmd(&dir)
        .args(["repl", "--config", "nope.toml"])
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn config_flag_is_only_for_repl() {
    let dir = TempDir::new().unwrap();
    zhesi_cmd(&dir)
        .args(["ask", "--config", "missing.toml", "意识是什么？"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn config_from_environment() {
    let dir = TempDir::new().unwrap();
    zhesi_cmd(&dir)
        .env("ZHESI_CONFIG", dir.path().join("absent.toml"))
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
