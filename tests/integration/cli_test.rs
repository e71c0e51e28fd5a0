//! End-to-end tests of the pitchdesk binary

use std::fs;

use chrono::Local;
use predicates::prelude::*;

use crate::helpers::{fixture, Sandbox};

#[test]
fn help_lists_every_command() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("results")
                .and(predicate::str::contains("export"))
                .and(predicate::str::contains("columns"))
                .and(predicate::str::contains("pitch"))
                .and(predicate::str::contains("completions")),
        );
}

#[test]
fn results_filters_by_tier() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["results", "--tier", "Nano", "--tier", "top"])
        .arg(fixture("evaluation.json"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Task: 春季草坪推广")
                .and(predicate::str::contains("Rows: 3 of 5"))
                .and(predicate::str::contains("UC_alpha"))
                .and(predicate::str::contains("UC_gamma"))
                .and(predicate::str::contains("UC_beta").not()),
        );
}

#[test]
fn results_with_no_match_says_so() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["ls", "--quality", "gt:99"])
        .arg(fixture("evaluation.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No rows match the current filters."));
}

#[test]
fn invalid_range_is_a_usage_error() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["results", "--quality", "above:3"])
        .arg(fixture("evaluation.json"))
        .assert()
        .code(2);
}

#[test]
fn missing_result_file_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["results", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn export_writes_dated_csv_into_configured_directory() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["export", "--country", "US"])
        .arg(fixture("evaluation.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 rows"));

    let today = Local::now().date_naive().format("%Y-%m-%d");
    let expected = format!("评估结果_春季草坪推广_{}.csv", today);
    assert_eq!(sandbox.exported_files(), vec![expected.clone()]);

    let contents = fs::read_to_string(sandbox.out_dir().join(expected)).unwrap();
    assert!(contents.starts_with('\u{feff}'));
    assert!(contents.contains("\"@UC_gamma\""));
    assert!(!contents.contains("UC_beta"));
}

#[test]
fn export_of_search_results_uses_search_sheet() {
    let sandbox = Sandbox::new();
    let target = sandbox.home.path().join("elsewhere");
    fs::create_dir(&target).unwrap();

    sandbox
        .cmd()
        .args(["export", "--out"])
        .arg(&target)
        .arg(fixture("search.json"))
        .assert()
        .success();

    let names: Vec<String> = fs::read_dir(&target)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("搜索结果_割草机 KOL_"));
    assert!(sandbox.exported_files().is_empty());
}

#[test]
fn export_into_missing_directory_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["export", "--out"])
        .arg(sandbox.home.path().join("nowhere"))
        .arg(fixture("evaluation.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export failed"));
}

#[test]
fn column_profile_persists_between_runs() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["columns", "remove", "estimated_cpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Column 'estimated_cpm' removed."));

    sandbox
        .cmd()
        .args(["results"])
        .arg(fixture("evaluation.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("预估CPM").not());

    sandbox
        .cmd()
        .args(["columns", "remove", "country"])
        .assert()
        .success()
        .stdout(predicate::str::contains("required"));

    sandbox
        .cmd()
        .args(["columns", "add", "not_a_column"])
        .assert()
        .failure();

    sandbox
        .cmd()
        .args(["columns", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("estimated_cpm"));
}

#[test]
fn pitch_workflow_add_lookup_export() {
    let sandbox = Sandbox::new();
    let file = fixture("evaluation.json");

    sandbox
        .cmd()
        .args(["pitch", "add"])
        .arg(&file)
        .args(["UC_alpha", "@UC_beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 candidate(s)."));

    sandbox
        .cmd()
        .args(["pitch", "add", "--all", "--country", "GB"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 0 candidate(s), 1 already on the list."));

    sandbox
        .cmd()
        .args(["pitch", "add"])
        .arg(&file)
        .arg("UC_missing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("UC_missing"));

    sandbox
        .cmd()
        .args(["pitch", "lookup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 of 2"));

    sandbox
        .cmd()
        .args(["pitch", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contact.alpha.lawn@gmail.com"));

    sandbox
        .cmd()
        .args(["pitch", "lookup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No candidates waiting"));

    sandbox
        .cmd()
        .args(["pitch", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 candidate(s)"));

    let today = Local::now().date_naive().format("%Y-%m-%d");
    assert_eq!(
        sandbox.exported_files(),
        vec![format!("联络列表_{}.csv", today)]
    );

    // Candidates show up as such in the evaluation table
    sandbox
        .cmd()
        .args(["results", "--tier", "Nano"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("已加入"));
}

#[test]
fn pitch_remove_and_clear() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["pitch", "add", "--all"])
        .arg(fixture("evaluation.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 5 candidate(s)."));

    sandbox
        .cmd()
        .args(["pitch", "remove", "UC_delta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'UC_delta'"));

    sandbox
        .cmd()
        .args(["pitch", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 4 candidate(s)."));

    sandbox
        .cmd()
        .args(["pitch", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outreach list is empty."));
}

#[test]
fn malformed_pitch_state_starts_empty() {
    let sandbox = Sandbox::new();
    fs::create_dir_all(sandbox.state_dir()).unwrap();
    fs::write(sandbox.state_dir().join("pitch-storage.json"), "{oops").unwrap();

    sandbox
        .cmd()
        .args(["pitch", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outreach list is empty."));
}

#[test]
fn status_reports_state() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("State directory:"));
}

#[test]
fn invalid_config_is_rejected() {
    let sandbox = Sandbox::new();
    let path = sandbox
        .home
        .path()
        .join(".config")
        .join("pitchdesk")
        .join("config.toml");
    fs::write(&path, "[email_lookup]\nhit_rate = 2.0\n").unwrap();

    sandbox
        .cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Invalid [email_lookup] section")
                .and(predicate::str::contains("hit_rate")),
        );
}

#[test]
fn completions_are_generated() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pitchdesk"));
}
