//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive prompts are bypassed via `PASSVAULT_PASSPHRASE`, so
//! whole flows (init → add → list → export → import) run headless.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MASTER: &str = "Correct-Horse1!";

/// Helper: get a Command pointing at the passvault binary, rooted in
/// `dir`, with the master passphrase injected via the environment.
fn passvault(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("passvault").expect("binary should exist");
    cmd.current_dir(dir.path());
    cmd.env("PASSVAULT_PASSPHRASE", MASTER);
    cmd
}

/// Helper: a temp working dir with cheap Argon2 settings so each CLI
/// invocation stays fast.
fn workdir() -> TempDir {
    let tmp = TempDir::new().expect("temp dir");
    std::fs::write(
        tmp.path().join(".passvault.toml"),
        "argon2_memory_kib = 8192\nargon2_iterations = 1\nargon2_parallelism = 1\n",
    )
    .expect("write config");
    tmp
}

#[test]
fn help_flag_shows_usage() {
    let tmp = workdir();
    passvault(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local-first encrypted password vault"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("wipe"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = workdir();
    passvault(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_help() {
    let tmp = workdir();
    passvault(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn init_add_list_flow() {
    let tmp = workdir();

    passvault(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created"));

    passvault(&tmp)
        .args(["add", "--title", "Gmail", "--username", "a@b.com", "--generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Gmail'"));

    passvault(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gmail"))
        .stdout(predicate::str::contains("a@b.com"));
}

#[test]
fn init_twice_fails() {
    let tmp = workdir();

    passvault(&tmp).arg("init").assert().success();
    passvault(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("account already exists"));
}

#[test]
fn init_rejects_weak_env_passphrase() {
    let tmp = workdir();

    passvault(&tmp)
        .arg("init")
        .env("PASSVAULT_PASSPHRASE", "weakpw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Weak passphrase"));
}

#[test]
fn wrong_passphrase_is_rejected() {
    let tmp = workdir();

    passvault(&tmp).arg("init").assert().success();
    passvault(&tmp)
        .arg("list")
        .env("PASSVAULT_PASSPHRASE", "Not-The-Master1!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong master passphrase"));
}

#[test]
fn list_without_account_fails() {
    let tmp = workdir();

    passvault(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No account found"));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let tmp = workdir();

    let output = passvault(&tmp)
        .args(["generate", "--length", "20"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let password = String::from_utf8(output).unwrap();
    assert_eq!(password.trim_end_matches('\n').len(), 20);
}

#[test]
fn export_and_merge_import_between_vaults() {
    let tmp = workdir();

    // Vault A: one entry, exported to a backup file.
    passvault(&tmp).args(["--vault-dir", "a", "init"]).assert().success();
    passvault(&tmp)
        .args(["--vault-dir", "a", "add", "--title", "Gmail", "--username", "a@b.com", "--generate"])
        .assert()
        .success();
    passvault(&tmp)
        .args(["--vault-dir", "a", "export", "backup.pv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted backup written"));

    // Vault B: its own entry, then merge the backup in.
    passvault(&tmp).args(["--vault-dir", "b", "init"]).assert().success();
    passvault(&tmp)
        .args(["--vault-dir", "b", "add", "--title", "Bank", "--username", "c@d.com", "--generate"])
        .assert()
        .success();
    passvault(&tmp)
        .args(["--vault-dir", "b", "import", "backup.pv", "--merge", "--keep-master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merged"));

    passvault(&tmp)
        .args(["--vault-dir", "b", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank"))
        .stdout(predicate::str::contains("Gmail"));
}

#[test]
fn import_with_wrong_backup_passphrase_fails() {
    let tmp = workdir();

    passvault(&tmp).arg("init").assert().success();
    passvault(&tmp)
        .args(["export", "backup.pv"])
        .assert()
        .success();

    passvault(&tmp)
        .args(["import", "backup.pv"])
        .env("PASSVAULT_IMPORT_PASSPHRASE", "Not-The-Backup1!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid backup"));
}

#[test]
fn wipe_deletes_everything() {
    let tmp = workdir();

    passvault(&tmp).arg("init").assert().success();
    passvault(&tmp)
        .args(["add", "--title", "Gmail", "--username", "a@b.com", "--generate"])
        .assert()
        .success();

    passvault(&tmp)
        .args(["wipe", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    passvault(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No account found"));
}
