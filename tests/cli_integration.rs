use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

fn cwd_tree() -> Command {
    Command::cargo_bin("cwd-tree").unwrap()
}

#[test]
fn shows_help() {
    cwd_tree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("indented tree"));
}

#[test]
fn shows_version() {
    cwd_tree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_positional_path() {
    cwd_tree()
        .arg("/tmp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn prints_banner_for_empty_directory() {
    let dir = TempDir::new().unwrap();

    cwd_tree()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Directory Tree of the Current Directory:\n");
}

#[test]
fn prints_tree_of_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/bin")).unwrap();
    File::create(dir.path().join("src/bin/main.rs")).unwrap();

    cwd_tree()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(
            "Directory Tree of the Current Directory:\n\
             └── src\n    \
             └── bin\n        \
             └── main.rs\n",
        );
}

#[test]
fn runs_are_identical() {
    let dir = TempDir::new().unwrap();
    for name in ["a", "b", "c"] {
        fs::create_dir(dir.path().join(name)).unwrap();
        File::create(dir.path().join(name).join("file.txt")).unwrap();
    }

    let first = cwd_tree().current_dir(dir.path()).output().unwrap();
    let second = cwd_tree().current_dir(dir.path()).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("only.txt")).unwrap();

    cwd_tree()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("-vv")
        .assert()
        .success()
        .stdout(predicate::str::contains("└── only.txt"))
        .stdout(predicate::str::contains("Listed directory").not())
        .stderr(predicate::str::contains("Listed directory"));
}

#[test]
fn ascii_charset_from_config_file() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("only.txt")).unwrap();

    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("cwd-tree.toml");
    File::create(&config_path)
        .unwrap()
        .write_all(b"[output]\ncharset = \"ascii\"\nbanner = false\n")
        .unwrap();

    cwd_tree()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout("`-- only.txt\n");
}

#[test]
fn invalid_config_path_fails() {
    let dir = TempDir::new().unwrap();

    cwd_tree()
        .current_dir(dir.path())
        .args(["--config", "/nonexistent/path.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_listed_as_leaf() {
    let dir = TempDir::new().unwrap();
    std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("broken")).unwrap();

    cwd_tree()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("└── broken\n"));
}
