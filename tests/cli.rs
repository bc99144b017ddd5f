//! End-to-end tests driving the tally binary against a scratch data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CLI_DATA_DIR", data_dir.path());
    cmd.env_remove("TALLY_USERNAME");
    cmd.env_remove("TALLY_PASSWORD");
    cmd
}

#[test]
fn init_creates_database_file() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized tally at:"));

    assert!(dir.path().join("data").join("tally.db").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn signup_then_signin() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["signup", "alice", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created."));

    tally(&dir)
        .args(["signin", "alice", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as alice."));
}

#[test]
fn signin_with_wrong_password_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["signup", "alice", "--password", "hunter2"])
        .assert()
        .success();

    tally(&dir)
        .args(["signin", "alice", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn duplicate_signup_is_reported() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["signup", "alice", "--password", "hunter2"])
        .assert()
        .success();

    tally(&dir)
        .args(["signup", "alice", "--password", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Username already taken: alice"));
}

#[test]
fn add_and_show_roundtrip() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["signup", "alice", "--password", "hunter2"])
        .assert()
        .success();

    tally(&dir)
        .args([
            "add",
            "--kind",
            "expense",
            "--date",
            "2024-05-03",
            "--category",
            "Food",
            "--amount",
            "12.50",
            "--username",
            "alice",
            "--password",
            "hunter2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved transaction."));

    tally(&dir)
        .args([
            "show",
            "2024-05",
            "--username",
            "alice",
            "--password",
            "hunter2",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Food").and(predicate::str::contains("$12.50")),
        );

    // A different month lists nothing.
    tally(&dir)
        .args([
            "show",
            "2024-06",
            "--username",
            "alice",
            "--password",
            "hunter2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn add_rejects_bad_kind() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["signup", "alice", "--password", "hunter2"])
        .assert()
        .success();

    tally(&dir)
        .args([
            "add",
            "--kind",
            "transfer",
            "--category",
            "Food",
            "--amount",
            "10",
            "--username",
            "alice",
            "--password",
            "hunter2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction kind"));
}

#[test]
fn budget_and_alerts_roundtrip() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["signup", "alice", "--password", "hunter2"])
        .assert()
        .success();

    let auth = ["--username", "alice", "--password", "hunter2"];

    for (date, amount) in [("2024-05-03", "50"), ("2024-05-10", "60")] {
        tally(&dir)
            .args([
                "add", "--kind", "expense", "--date", date, "--category", "Food", "--amount",
                amount,
            ])
            .args(auth)
            .assert()
            .success();
    }

    tally(&dir)
        .args(["budget", "set", "2024-05", "Food", "100"])
        .args(auth)
        .assert()
        .success();

    tally(&dir)
        .args(["summary", "2024-05"])
        .args(auth)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Expense:")
                .and(predicate::str::contains("$110.00")),
        );

    tally(&dir)
        .args(["alerts", "2024-05"])
        .args(auth)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "OVER BUDGET: Food spent 110.00 / limit 100.00",
        ));

    // Raising the limit and lowering the threshold downgrades to a warning.
    tally(&dir)
        .args(["budget", "set", "2024-05", "Food", "200"])
        .args(auth)
        .assert()
        .success();

    tally(&dir)
        .args(["alerts", "2024-05", "--threshold", "0.5"])
        .args(auth)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "WARNING: Food spent 110.00 / limit 200.00 (55%)",
        ));
}
