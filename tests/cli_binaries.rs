use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn vcfilter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vcfilter"))
}

#[test]
fn vcfilter_help_lists_usage() {
    vcfilter()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Usage: vcfilter"));
}

#[test]
fn vcfilter_classifies_operands() {
    vcfilter()
        .args(["--include", "*.c", "foo.c", "foo.h"])
        .assert()
        .success()
        .stdout("included\tfoo.c\nmaybe\tfoo.h\n");
}

#[test]
fn vcfilter_reads_paths_from_stdin() {
    vcfilter()
        .args(["--ignore", "*.tmp"])
        .write_stdin("x.tmp\nx.txt\n")
        .assert()
        .success()
        .stdout("ignored\tx.tmp\nimplied\tx.txt\n");
}

#[test]
fn vcfilter_accepted_only_acts_as_a_filter() {
    vcfilter()
        .args(["--accepted-only", "--anywhere", "--exclude", "Debug/**"])
        .write_stdin("src/main.c\nfoo/Debug/bar.txt\nREADME\n")
        .assert()
        .success()
        .stdout("src/main.c\nREADME\n");
}

#[test]
fn vcfilter_loads_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("settings.ini");
    fs::write(&settings, "[site]\nignores = node_modules\n").expect("write settings");

    vcfilter()
        .arg("--settings")
        .arg(&settings)
        .args(["--repo", "site", "--anywhere", "--recursive"])
        .args(["web/node_modules/x.js", "web/index.js"])
        .assert()
        .success()
        .stdout("ignored\tweb/node_modules/x.js\nimplied\tweb/index.js\n");
}

#[test]
fn vcfilter_reports_missing_pattern_file() {
    vcfilter()
        .args(["--exclude-from", "/nonexistent/vcfilter-patterns.txt", "a"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("vcfilter: "))
        .stderr(predicate::str::contains("vcfilter-patterns.txt"));
}

#[test]
fn vcfilter_rejects_unknown_flag() {
    vcfilter()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--definitely-not-a-flag"));
}
