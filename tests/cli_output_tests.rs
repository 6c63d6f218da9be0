//! CLI output integration tests.

mod support;

use predicates::prelude::*;
use support::{json_stdout, traderisk, Sandbox};

#[test]
fn test_help() {
    traderisk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("traderisk"))
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("defaults"))
        .stdout(predicate::str::contains("tutorial"));
}

#[test]
fn test_version() {
    traderisk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("traderisk"));
}

#[test]
fn test_calc_prints_margin_and_risk() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["calc", "--stop-loss", "2", "--risk", "10", "--capital", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5,000.00"))
        .stdout(predicate::str::contains("$100.00"));
}

#[test]
fn test_calc_json_document() {
    let sandbox = Sandbox::new();
    let doc = json_stdout(sandbox.cmd().args(["calc", "-s", "2", "-r", "10", "--capital", "1000"]));

    assert_eq!(doc["command"], "calc");
    assert_eq!(doc["risk_amount"], 100.0);
    assert_eq!(doc["margin_amount"], 5000.0);
    assert_eq!(doc["display"]["margin"], "$5,000.00");
    assert_eq!(doc["display"]["risk"], "$100.00");
    assert_eq!(doc["inputs"]["stop_loss_pct"], "2");
}

#[test]
fn test_calc_sanitizes_like_keystrokes() {
    let sandbox = Sandbox::new();
    let doc = json_stdout(sandbox.cmd().args([
        "calc",
        "-s",
        "2%",
        "-r",
        "1.0.5",
        "--capital",
        "$10,000",
    ]));

    assert_eq!(doc["inputs"]["stop_loss_pct"], "2");
    assert_eq!(doc["inputs"]["risk_pct"], "1.05");
    assert_eq!(doc["inputs"]["capital"], "10000");
    assert_eq!(doc["display"]["risk"], "$105.00");
}

#[test]
fn test_calc_zero_stop_loss_falls_back_to_risk_amount() {
    let sandbox = Sandbox::new();
    let doc = json_stdout(sandbox.cmd().args(["calc", "-s", "0", "-r", "10", "--capital", "1000"]));

    assert_eq!(doc["risk_amount"], 100.0);
    assert_eq!(doc["margin_amount"], 100.0);
}

#[test]
fn test_calc_with_nothing_entered_shows_zero() {
    let sandbox = Sandbox::new();
    let doc = json_stdout(sandbox.cmd().arg("calc"));

    assert_eq!(doc["display"]["margin"], "$0.00");
    assert_eq!(doc["display"]["risk"], "$0.00");
    assert!(doc["risk_amount"].is_null());
}

#[test]
fn test_calc_quiet_prints_only_results() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--quiet", "calc", "-s", "2", "-r", "10", "--capital", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Margin"))
        .stdout(predicate::str::contains("$5,000.00"))
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("Stoploss").not())
        .stdout(predicate::str::contains("traderisk").not());
}

#[test]
fn test_saved_defaults_fill_calc() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["defaults", "set-capital", "$25,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default Capital set to 25000"));
    sandbox
        .cmd()
        .args(["defaults", "set-risk", "2"])
        .assert()
        .success();

    let stored = sandbox.read_store();
    assert_eq!(stored["defCapital"], "25000");
    assert_eq!(stored["defRiskPct"], "2");

    let doc = json_stdout(sandbox.cmd().args(["calc", "-s", "4"]));
    assert_eq!(doc["risk_amount"], 500.0);
    assert_eq!(doc["margin_amount"], 12500.0);
}

#[test]
fn test_calc_hints_show_defaults() {
    let sandbox = Sandbox::new();
    sandbox.write_store(r#"{"defCapital":"1234.5","defRiskPct":"1.5"}"#);

    sandbox
        .cmd()
        .args(["calc", "-s", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default: 1.5%"))
        .stdout(predicate::str::contains("Default: $1,234.50"));
}

#[test]
fn test_calc_no_defaults_ignores_saved_values() {
    let sandbox = Sandbox::new();
    sandbox.write_store(r#"{"defCapital":"1000","defRiskPct":"10"}"#);

    let doc = json_stdout(sandbox.cmd().args(["calc", "-s", "2", "--no-defaults"]));
    assert_eq!(doc["inputs"]["capital"], "");
    assert_eq!(doc["display"]["risk"], "$0.00");
}

#[test]
fn test_defaults_set_rejects_empty_value() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["defaults", "set-risk", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("type a value first"));
    assert!(!sandbox.store_path().exists());
}

#[test]
fn test_defaults_clear_removes_both_keys() {
    let sandbox = Sandbox::new();
    sandbox.write_store(r#"{"defCapital":"1000","defRiskPct":"10","appTheme":"light"}"#);

    sandbox
        .cmd()
        .args(["defaults", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    let stored = sandbox.read_store();
    assert!(stored.get("defCapital").is_none());
    assert!(stored.get("defRiskPct").is_none());
    assert_eq!(stored["appTheme"], "light");

    let doc = json_stdout(sandbox.cmd().args(["defaults", "show"]));
    assert!(doc["default_capital"].is_null());
    assert!(doc["default_risk_pct"].is_null());
}

#[test]
fn test_theme_toggle_round_trip() {
    let sandbox = Sandbox::new();

    let doc = json_stdout(sandbox.cmd().args(["theme", "show"]));
    assert_eq!(doc["theme"], "dark");

    let doc = json_stdout(sandbox.cmd().args(["theme", "toggle"]));
    assert_eq!(doc["theme"], "light");
    assert_eq!(sandbox.read_store()["appTheme"], "light");

    let doc = json_stdout(sandbox.cmd().args(["theme", "toggle"]));
    assert_eq!(doc["theme"], "dark");
}

#[test]
fn test_unknown_stored_theme_reads_as_dark() {
    let sandbox = Sandbox::new();
    sandbox.write_store(r#"{"appTheme":"sepia"}"#);

    let doc = json_stdout(sandbox.cmd().args(["theme", "show"]));
    assert_eq!(doc["theme"], "dark");
}

#[test]
fn test_corrupt_store_does_not_block_calc() {
    let sandbox = Sandbox::new();
    sandbox.write_store("not json at all");

    let doc = json_stdout(sandbox.cmd().args(["calc", "-s", "2", "-r", "10", "--capital", "1000"]));
    assert_eq!(doc["margin_amount"], 5000.0);
}

#[test]
fn test_saving_default_repairs_corrupt_store() {
    let sandbox = Sandbox::new();
    sandbox.write_store("not json at all");

    sandbox
        .cmd()
        .args(["defaults", "set-capital", "500"])
        .assert()
        .success();

    assert_eq!(sandbox.read_store()["defCapital"], "500");
    let doc = json_stdout(sandbox.cmd().args(["defaults", "show"]));
    assert_eq!(doc["default_capital"], "500");
}

#[test]
fn test_tutorial_show_marks_seen_and_reset_clears() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["tutorial", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Tutorial"));
    assert_eq!(sandbox.read_store()["hasSeenTutorial_v1"], "1");

    sandbox
        .cmd()
        .args(["tutorial", "reset"])
        .assert()
        .success();
    assert!(sandbox.read_store().get("hasSeenTutorial_v1").is_none());
}

#[test]
fn test_tutorial_show_json_lists_four_steps() {
    let sandbox = Sandbox::new();
    let doc = json_stdout(sandbox.cmd().args(["tutorial", "show"]));
    let steps = doc["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[3]["is_last"], true);
}

#[test]
fn test_menu_lists_entries() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rate Us"))
        .stdout(predicate::str::contains("Clear Defaults"))
        .stdout(predicate::str::contains("Special Thanks").not());
}

#[test]
fn test_menu_about_expands_group() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["menu", "--about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Special Thanks"))
        .stdout(predicate::str::contains("/sidebar_items/about/privacy-policy"));
}

#[test]
fn test_menu_json_qa_entry() {
    let sandbox = Sandbox::new();
    let doc = json_stdout(sandbox.cmd().args(["menu", "--qa"]));
    let labels: Vec<&str> = doc["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .filter_map(|e| e["label"].as_str())
        .collect();
    assert!(labels.contains(&"Reset Tutorial (QA)"));
    assert_eq!(labels.last(), Some(&"Clear Defaults"));
}

#[test]
fn test_run_refuses_json_mode() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--json", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"type\":\"error\""));
}

#[test]
fn test_ephemeral_writes_nothing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--ephemeral", "theme", "toggle"])
        .assert()
        .success();
    assert!(!sandbox.store_path().exists());
}

#[test]
fn test_store_env_override() {
    let sandbox = Sandbox::new();
    let env_store = sandbox.path().join("from-env.json");

    traderisk()
        .env("TRADERISK_STORE", &env_store)
        .args(["--color", "never", "--config"])
        .arg(sandbox.config_path())
        .args(["defaults", "set-risk", "3"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&env_store).expect("store written at env path");
    assert!(raw.contains("defRiskPct"));
}
