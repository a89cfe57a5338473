//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn brain_cell() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("brain-cell").unwrap()
}

#[test]
fn console_all_correct() {
    brain_cell()
        .args(["--mode", "console"])
        .write_stdin("3\n2\n2\n4\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Brain Cell"))
        .stdout(predicate::str::contains("1) Hexagon"))
        .stdout(predicate::str::contains("Your final score: 50/50"));
}

#[test]
fn console_reprompts_on_bad_input() {
    brain_cell()
        .args(["--mode", "console"])
        .write_stdin("x\n9\n3\n1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a number between 1 and 4.",
        ))
        .stdout(predicate::str::contains("Your final score: 20/50"));
}

#[test]
fn console_skip_policy() {
    brain_cell()
        .args(["--mode", "console", "--on-invalid", "skip"])
        .write_stdin("x\n2\n2\n4\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Skipping question."))
        .stdout(predicate::str::contains("Your final score: 40/50"));
}

#[test]
fn console_json_with_award() {
    brain_cell()
        .args(["--mode", "console", "--json", "--award", "1"])
        .write_stdin("3\n2\n2\n4\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("{\"score\":5,\"max_score\":5}\n"));
}

#[test]
fn console_input_closed() {
    brain_cell()
        .args(["--mode", "console"])
        .write_stdin("3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed after 1 of 5 questions"));
}

#[test]
fn zero_award_rejected() {
    brain_cell()
        .args(["--mode", "console", "--award", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("award must be at least 1"));
}

#[test]
fn help_lists_modes() {
    brain_cell()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--on-invalid"));
}

#[test]
fn overflowing_award_rejected() {
    brain_cell()
        .args(["--mode", "console", "--award", "18446744073709551615"])
        .write_stdin("3\n2\n2\n4\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("award per correct answer"));
}

#[test]
fn console_skip_negative_number_is_wrong_answer() {
    brain_cell()
        .args(["--mode", "console", "--on-invalid", "skip"])
        .write_stdin("-1\n2\n2\n4\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping question").not())
        .stdout(predicate::str::contains("Your final score: 40/50"));
}
