use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn bin() -> Command {
    Command::cargo_bin("kodegen_bundler_package").unwrap()
}

#[test]
fn help_lists_flags() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn unknown_kind_fails() {
    let out = tempfile::tempdir().unwrap();
    bin()
        .arg("--config")
        .arg(fixture("package.toml"))
        .arg("--output")
        .arg(out.path())
        .args(["--kind", "dmg"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid kind: dmg"));
}

#[test]
fn placeholder_kind_fails_without_building() {
    let tmp = tempfile::tempdir().unwrap();
    let build = tmp.path().join("build");
    bin()
        .arg("--config")
        .arg(fixture("package.toml"))
        .arg("--output")
        .arg(tmp.path().join("out"))
        .arg("--build-dir")
        .arg(&build)
        .args(["--kind", "deb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deb packages are not implemented"));

    assert!(!build.exists());
}

#[test]
fn dry_run_prints_manifest_and_command() {
    let tmp = tempfile::tempdir().unwrap();
    let build = tmp.path().join("build");
    bin()
        .arg("--config")
        .arg(fixture("package.toml"))
        .arg("--output")
        .arg(tmp.path().join("out"))
        .arg("--build-dir")
        .arg(&build)
        .args(["--arch", "arm64", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[general]"))
        .stdout(predicate::str::contains("platform = \"arm64\""))
        .stdout(predicate::str::contains("install_scope = \"perUser\""))
        .stdout(predicate::str::contains("value = \"[INSTALLDIR]\""))
        .stdout(predicate::str::contains("$ simple-msi build -c "))
        .stdout(predicate::str::contains("HelloWorld-arm64.msi"));

    assert!(!build.exists());
}

#[test]
fn missing_config_reports_path() {
    let tmp = tempfile::tempdir().unwrap();
    bin()
        .arg("--config")
        .arg(tmp.path().join("absent.toml"))
        .arg("--output")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn dry_run_checks_referenced_files() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("package.toml");
    let text = std::fs::read_to_string(fixture("package.toml")).unwrap();
    std::fs::write(
        &config,
        text.replace(
            "start_command = \"hello\"",
            "start_command = \"hello\"\nlicense_file = \"NOPE.txt\"",
        ),
    )
    .unwrap();

    bin()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(tmp.path().join("out"))
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("license file not found"))
        .stdout(predicate::str::contains("[general]").not());
}
