#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn hoi() -> Command {
    Command::cargo_bin("hoi").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_opens_with_round_prompt() {
    hoi()
        .args(["play", "--delay-ms", "0", "--seed", "1"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("じゃんけんをしてください")
                .and(predicate::str::contains("Score:")),
        );
}

#[test]
fn play_english_locale() {
    hoi()
        .args(["play", "--delay-ms", "0", "--locale", "en"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Let's play rock-paper-scissors!"));
}

#[test]
fn play_quiet_suppresses_narration() {
    hoi()
        .args(["play", "--delay-ms", "0", "--quiet"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("じゃんけんをしてください").not());
}

#[test]
fn play_rejects_unknown_hand() {
    hoi()
        .args(["play", "--delay-ms", "0"])
        .write_stdin("lizard\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown hand: lizard"));
}

#[test]
fn play_direction_during_janken_is_not_a_hand() {
    hoi()
        .args(["play", "--delay-ms", "0"])
        .write_stdin("up\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown hand: up"));
}

#[test]
fn play_hand_is_chanted() {
    hoi()
        .args(["play", "--delay-ms", "0", "--seed", "3"])
        .write_stdin("rock\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("じゃんけんグー！"));
}

#[test]
fn play_next_refused_mid_round() {
    hoi()
        .args(["play", "--delay-ms", "0"])
        .write_stdin("next\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("the round is still in play"));
}

#[test]
fn play_help_lists_commands() {
    hoi()
        .args(["play", "--delay-ms", "0"])
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("zero the score and restart")
                .and(predicate::str::contains("グー/チョキ/パー"))
                .and(predicate::str::contains("左/右/上/下")),
        );
}

#[test]
fn play_ends_on_eof() {
    hoi()
        .args(["play", "--delay-ms", "0"])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn play_unknown_locale_fails() {
    hoi()
        .args(["play", "--locale", "fr"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown locale"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_summary() {
    hoi()
        .args(["simulate", "--rounds", "10", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Player wins")
                .and(predicate::str::contains("No decision"))
                .and(predicate::str::contains("Final score:")),
        );
}

#[test]
fn simulate_json_is_consistent() {
    let output = hoi()
        .args(["simulate", "--rounds", "25", "--seed", "11", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["rounds"], 25);
    assert_eq!(report["seed"], 11);

    let tally = &report["tally"];
    let decided = tally["player_wins"].as_u64().unwrap()
        + tally["player_losses"].as_u64().unwrap()
        + tally["no_decisions"].as_u64().unwrap();
    assert_eq!(decided, 25);

    let last = &report["last_round"];
    assert_eq!(last["phase"], "deciding");
    assert_eq!(last["locked"], false);
    assert_eq!(last["player_score"], tally["player_wins"]);
    assert_eq!(last["cpu_score"], tally["player_losses"]);

    let leader = match tally["player_wins"].as_u64().cmp(&tally["player_losses"].as_u64()) {
        std::cmp::Ordering::Greater => serde_json::json!("player"),
        std::cmp::Ordering::Less => serde_json::json!("cpu"),
        std::cmp::Ordering::Equal => serde_json::Value::Null,
    };
    assert_eq!(report["leader"], leader);
}

#[test]
fn simulate_is_deterministic() {
    let run = || {
        hoi()
            .args(["simulate", "--rounds", "30", "--seed", "99", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn simulate_events_lists_rounds() {
    hoi()
        .args(["simulate", "--rounds", "3", "--events"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[round   3]"));
}

// ---------------------------------------------------------------------------
// phrases
// ---------------------------------------------------------------------------

#[test]
fn phrases_lists_both_locales() {
    hoi()
        .arg("phrases")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("あっちむいてほい")
                .and(predicate::str::contains("Look that way!"))
                .and(predicate::str::contains("no-decision")),
        );
}
