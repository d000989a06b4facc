//! End-to-end tests that drive the garage binary over scripted stdin.
//!
//! Each test spawns the compiled binary, feeds it a menu script, and asserts
//! on the transcript and exit status.
use std::io::Write;
use std::process::{Command, Stdio};

struct SessionOutput {
    stdout: String,
    status: Option<i32>,
}

fn run_session(args: &[&str], script: &str) -> SessionOutput {
    let mut child = Command::new(env!("CARGO_BIN_EXE_garage"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn garage binary");

    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(script.as_bytes())
        .expect("write menu script");

    let output = child.wait_with_output().expect("wait for garage");
    SessionOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        status: output.status.code(),
    }
}

#[test]
fn car_session_prints_confirmation_drive_refuel_and_listing() {
    let result = run_session(&[], "1\nToyota\nCorolla\ngasoline\n5\n6\n");
    assert_eq!(result.status, Some(0));
    assert!(result.stdout.contains("Menu:"));
    assert!(result
        .stdout
        .contains("Created: Car: Toyota Corolla, Fuel: gasoline"));
    assert!(result
        .stdout
        .contains("Car Toyota Corolla is driving down the road."));
    assert!(result
        .stdout
        .contains("Car Toyota Corolla is refueling (gasoline)."));
    // The listing repeats the summary after the confirmation.
    let first = result.stdout.find("Car: Toyota Corolla").expect("summary");
    let last = result.stdout.rfind("Car: Toyota Corolla").expect("summary");
    assert!(first < last);
}

#[test]
fn truck_session_uses_fixed_diesel_refuel_text() {
    let result = run_session(&[], "3\n5000\n3\n6\n");
    assert_eq!(result.status, Some(0));
    assert!(result.stdout.contains("Created: Truck: 5000 kg, Axles: 3"));
    assert!(result.stdout.contains("The truck is refueling with diesel."));
}

#[test]
fn empty_listing_prints_fixed_message() {
    let result = run_session(&[], "5\n6\n");
    assert_eq!(result.status, Some(0));
    assert!(result.stdout.contains("No vehicles created yet."));
}

#[test]
fn invalid_choice_recovers_to_menu() {
    let result = run_session(&[], "9\n6\n");
    assert_eq!(result.status, Some(0));
    assert!(result.stdout.contains("Invalid choice."));
    assert!(result.stdout.contains("Exiting..."));
}

#[test]
fn malformed_integer_aborts_with_nonzero_status() {
    let result = run_session(&[], "2\nsport\nabc\n");
    assert_ne!(result.status, Some(0));
    assert!(!result.stdout.contains("Created:"));
}

#[test]
fn lenient_numbers_reprompt_and_recover() {
    let result = run_session(&["--lenient-numbers"], "2\nsport\nabc\n600\n6\n");
    assert_eq!(result.status, Some(0));
    assert!(result.stdout.contains("Not a valid integer"));
    assert!(result
        .stdout
        .contains("Created: Motorcycle: sport, Engine: 600cc"));
}

#[test]
fn json_listing_emits_tagged_summaries() {
    let result = run_session(&["--json"], "4\n40\n7A\n5\n6\n");
    assert_eq!(result.status, Some(0));
    assert!(result.stdout.contains("\"kind\": \"bus\""));
    assert!(result.stdout.contains("\"route\": \"7A\""));
    assert!(result.stdout.contains("\"seats\": 40"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let result = run_session(&[], "");
    assert_eq!(result.status, Some(0));
    assert!(result.stdout.contains("Exiting..."));
}
