use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::tempdir;

fn pelagic(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("pelagic"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CLIENT_URL")
        .env_remove("PREVIEW_SECRET");
    cmd
}

fn write_project(root: &Path) {
    fs::create_dir_all(root.join("data/uploads/hero")).unwrap();
    fs::write(root.join("data/uploads/hero/hero-01.jpg"), b"jpg").unwrap();
    fs::write(
        root.join("data/data.json"),
        r#"{
            "homePage": {
                "seo": { "metaTitle": "Pelagic", "metaDescription": "Ocean" },
                "sections": [
                    { "__component": "sections.hero", "heroCopy": "Blue", "desktopHeroImage": "hero/hero-01.jpg" },
                    { "__component": "sections.faqs", "title": "FAQ", "items": [{ "question": "Why?" }] }
                ]
            }
        }"#,
    )
    .unwrap();
}

#[test]
fn test_main_with_help_flag() {
    let tmp = tempdir().unwrap();
    pelagic(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pelagic"));
}

#[test]
fn test_main_without_command_fails_with_usage() {
    let tmp = tempdir().unwrap();
    pelagic(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_init_writes_config_once() {
    let tmp = tempdir().unwrap();
    pelagic(tmp.path()).arg("init").assert().success();
    assert!(tmp.path().join("pelagic.json").is_file());

    pelagic(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_seed_then_skip() {
    let tmp = tempdir().unwrap();
    write_project(tmp.path());

    pelagic(tmp.path())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seed data import complete"));

    pelagic(tmp.path())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("already been imported"));

    assert!(tmp.path().join(".pelagic/store.json").is_file());
    assert!(tmp.path().join(".pelagic/uploads/hero-01.jpg").is_file());
}

#[test]
fn test_seed_exits_nonzero_on_missing_media() {
    let tmp = tempdir().unwrap();
    write_project(tmp.path());
    fs::remove_file(tmp.path().join("data/uploads/hero/hero-01.jpg")).unwrap();

    pelagic(tmp.path())
        .arg("seed")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_seed_exits_nonzero_on_invalid_fixture() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("data")).unwrap();
    fs::write(
        tmp.path().join("data/data.json"),
        r#"{ "homePage": { "sections": [ { "title": "no tag" } ] } }"#,
    )
    .unwrap();

    pelagic(tmp.path())
        .arg("seed")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid seed fixture"));
}

#[test]
fn test_seed_dry_run_leaves_no_store() {
    let tmp = tempdir().unwrap();
    write_project(tmp.path());

    pelagic(tmp.path())
        .args(["seed", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!tmp.path().join(".pelagic").exists());
}

#[test]
fn test_status_reports_fixture_and_store() {
    let tmp = tempdir().unwrap();
    write_project(tmp.path());

    pelagic(tmp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("sections.hero"))
        .stdout(predicate::str::contains("not created yet"));

    pelagic(tmp.path()).arg("seed").assert().success();

    pelagic(tmp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded:"));
}

#[test]
fn test_preview_for_unknown_document() {
    let tmp = tempdir().unwrap();
    write_project(tmp.path());
    pelagic(tmp.path()).arg("seed").assert().success();

    pelagic(tmp.path())
        .args([
            "preview",
            "--uid",
            "api::home-page.home-page",
            "--document-id",
            "missing",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No preview available"));
}

#[test]
fn test_middleware_prints_stack_and_csp() {
    let tmp = tempdir().unwrap();
    pelagic(tmp.path())
        .arg("middleware")
        .assert()
        .success()
        .stdout(predicate::str::contains("poweredBy"))
        .stdout(predicate::str::contains("img-src 'self' data: blob:"));
}
