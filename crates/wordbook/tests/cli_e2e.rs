#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

struct Env {
    temp: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    fn data_dir(&self) -> std::path::PathBuf {
        self.temp.path().join("data")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("wordbook"));
        cmd.env("WORDBOOK_CONFIG", self.temp.path().join("wordbook.toml"))
            .env_remove("WORDBOOK_DATA_DIR")
            .env_remove("WORDBOOK_DEFAULT_SORT")
            .env_remove("WORDBOOK_LOG")
            .arg("--data")
            .arg(self.data_dir());
        cmd
    }

    fn add(&self, english: &str, meaning: &str) {
        self.cmd()
            .args(["add", english, "-m", meaning])
            .assert()
            .success();
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().unwrap();
        assert!(output.status.success(), "{:?} failed", args);
        String::from_utf8(output.stdout).unwrap()
    }
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not in output:\n{}", needle, haystack))
}

fn stored_file(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join("bible-translation-words.json")
}

#[test]
fn empty_store_shows_onboarding_hint() {
    let env = Env::new();
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No words saved yet"));
}

#[test]
fn bare_invocation_lists_words() {
    let env = Env::new();
    env.add("Grace", "অনুগ্রহ");
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 word"))
        .stdout(predicate::str::contains("Grace"));
}

#[test]
fn add_persists_camel_case_json() {
    let env = Env::new();
    env.cmd()
        .args([
            "add",
            "  Grace ",
            "-m",
            "অনুগ্রহ",
            "-m",
            " ",
            "-n",
            "unmerited favour",
            "--verse",
            "Ephesians 2:8",
            "--chosen",
            "অনুগ্রহ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word saved: Grace"));

    let raw = std::fs::read_to_string(stored_file(&env.data_dir())).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let word = &json[0];
    assert_eq!(word["englishWord"], "Grace");
    assert_eq!(word["bengaliMeanings"], serde_json::json!(["অনুগ্রহ"]));
    assert_eq!(word["notes"], "unmerited favour");
    assert_eq!(word["verses"][0]["reference"], "Ephesians 2:8");
    assert_eq!(word["verses"][0]["chosenMeaning"], "অনুগ্রহ");
    assert!(word["createdAt"].is_string());
}

#[test]
fn add_without_meaning_is_rejected() {
    let env = Env::new();
    env.cmd()
        .args(["add", "Grace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please add at least one Bengali meaning",
        ));
    assert!(!stored_file(&env.data_dir()).exists());
}

#[test]
fn show_by_word_and_by_index() {
    let env = Env::new();
    env.add("Grace", "অনুগ্রহ");
    env.add("Faith", "বিশ্বাস");

    env.cmd()
        .args(["show", "faith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Faith"))
        .stdout(predicate::str::contains("বিশ্বাস"))
        .stdout(predicate::str::contains("Added "));

    env.cmd()
        .args(["show", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"englishWord\": \"Grace\""));
}

#[test]
fn show_unknown_word_fails() {
    let env = Env::new();
    env.add("Grace", "অনুগ্রহ");
    env.cmd()
        .args(["show", "hope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No word found matching"));
}

#[test]
fn search_matches_meanings_and_reports_found() {
    let env = Env::new();
    env.add("Grace", "অনুগ্রহ");
    env.add("Faith", "বিশ্বাস");

    let out = env.stdout(&["search", "বিশ্বাস"]);
    assert!(out.contains("1 of 2 words found"));
    assert!(out.contains("Faith"));
    assert!(!out.contains("Grace"));

    env.cmd()
        .args(["list", "-s", "hope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn sort_modes_order_the_list() {
    let env = Env::new();
    env.add("Zeal", "উদ্যম");
    env.add("Grace", "অনুগ্রহ");
    env.add("apple", "আপেল");

    let alpha = env.stdout(&["list"]);
    assert!(position(&alpha, "apple") < position(&alpha, "Grace"));
    assert!(position(&alpha, "Grace") < position(&alpha, "Zeal"));

    let oldest = env.stdout(&["list", "--sort", "oldest"]);
    assert!(position(&oldest, "Zeal") < position(&oldest, "Grace"));
    assert!(position(&oldest, "Grace") < position(&oldest, "apple"));

    // Indexes follow insertion order whatever the sort.
    assert!(alpha.contains("3. apple"));
}

#[test]
fn default_sort_comes_from_environment() {
    let env = Env::new();
    env.add("Zeal", "উদ্যম");
    env.add("apple", "আপেল");

    let output = env
        .cmd()
        .env("WORDBOOK_DEFAULT_SORT", "oldest")
        .arg("list")
        .output()
        .unwrap();
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(position(&out, "Zeal") < position(&out, "apple"));
}

#[test]
fn verse_and_meaning_editing() {
    let env = Env::new();
    env.add("Grace", "অনুগ্রহ");

    env.cmd()
        .args([
            "verse",
            "add",
            "grace",
            "Ephesians 2:8",
            "--text",
            "For by grace are ye saved",
            "--chosen",
            "অনুগ্রহ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verse added"));

    env.cmd()
        .args(["meaning", "add", "grace", "কৃপা"])
        .assert()
        .success();

    let list = env.stdout(&["list"]);
    assert!(list.contains("অনুগ্রহ, কৃপা"));
    assert!(list.contains("1 verse"));

    env.cmd()
        .args(["verse", "rm", "grace", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verse removed"));

    env.cmd()
        .args(["meaning", "rm", "grace", "কৃপা"])
        .assert()
        .success();
    env.cmd()
        .args(["meaning", "rm", "grace", "অনুগ্রহ"])
        .assert()
        .failure();

    let list = env.stdout(&["list"]);
    assert!(list.contains("0 verses"));
    assert!(!list.contains("কৃপা"));
}

#[test]
fn edit_and_delete() {
    let env = Env::new();
    env.add("Grace", "অনুগ্রহ");
    env.add("Faith", "বিশ্বাস");

    env.cmd()
        .args(["edit", "faith", "--notes", "trust", "--english", "Belief"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word updated: Belief"));

    env.cmd()
        .args(["delete", "grace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word deleted (1): Grace"));

    let out = env.stdout(&["list"]);
    assert!(out.contains("1 of 1 word"));
    assert!(out.contains("1. Belief"));
    assert!(out.contains("trust"));
}

#[test]
fn stats_counts_everything() {
    let env = Env::new();
    env.add("Grace", "অনুগ্রহ");
    env.cmd()
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 word saved, 1 meaning, 0 verses"));
}

#[test]
fn corrupt_store_starts_empty() {
    let env = Env::new();
    std::fs::create_dir_all(env.data_dir()).unwrap();
    std::fs::write(stored_file(&env.data_dir()), "{ not json").unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No words saved yet"));
}

#[test]
fn config_reports_paths() {
    let env = Env::new();
    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default sort: alphabetical"))
        .stdout(predicate::str::contains("not found"));

    env.cmd()
        .args(["config", "--template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_sort"));
}
