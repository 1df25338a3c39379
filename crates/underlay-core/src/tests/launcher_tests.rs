//! Tests for detached command launching
//!
//! Launch failures must never propagate or take the process down; the
//! launcher returns immediately and never waits on the child.

use crate::launcher::{CommandLauncher, spawn_detached};

#[test]
fn test_launch_returns_immediately() {
    let launcher = CommandLauncher::new();

    // A sleeping child must not block the caller
    let start = std::time::Instant::now();
    launcher.launch("sleep 5");
    assert!(start.elapsed().as_secs() < 5);
}

#[test]
fn test_launch_nonexistent_command_does_not_propagate() {
    let launcher = CommandLauncher::new();

    // The shell spawns fine and fails internally; either way the call
    // returns normally and the process survives
    launcher.launch("nonexistent-binary-xyz");
}

#[test]
fn test_spawn_detached_succeeds_for_trivial_command() {
    assert!(spawn_detached("true").is_ok());
}

#[test]
fn test_spawn_detached_empty_command_line() {
    // `sh -c ""` is a valid no-op
    assert!(spawn_detached("").is_ok());
}

#[test]
fn test_launcher_is_copy() {
    let launcher = CommandLauncher::new();
    let copy = launcher;
    copy.launch("true");
    launcher.launch("true");
}
