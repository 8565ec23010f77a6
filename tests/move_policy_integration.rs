//! Failure-policy behavior against the real filesystem.
//! A destination that does not exist makes every rename fail, which is
//! enough to tell Stop and Continue apart end to end.

use batch_move::{run_move, LocalStorage, MoveError, MoveRequest, OnError};
use std::fs;
use tempfile::tempdir;

#[test]
fn stop_policy_reports_first_entry_in_plan_order() {
    let td = tempdir().unwrap();
    let source = td.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.txt"), "a").unwrap();
    fs::write(source.join("b.txt"), "b").unwrap();
    let dest = td.path().join("missing").join("dest");

    let request = MoveRequest::new(&source, &dest);
    let err = run_move(&LocalStorage, &request).unwrap_err();

    match err.downcast_ref::<MoveError>() {
        Some(MoveError::MoveFailed { source_path, .. }) => {
            // Children are listed sorted, so a.txt is the entry reported.
            assert_eq!(source_path, &source.join("a.txt"));
        }
        other => panic!("expected MoveFailed, got {other:?}"),
    }
    // Nothing was moved.
    assert!(source.join("a.txt").exists());
    assert!(source.join("b.txt").exists());
}

#[test]
fn continue_policy_records_every_failure_and_succeeds() {
    let td = tempdir().unwrap();
    let source = td.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.txt"), "a").unwrap();
    fs::write(source.join("b.txt"), "b").unwrap();
    let dest = td.path().join("missing").join("dest");

    let request = MoveRequest::new(&source, &dest).with_policy(OnError::Continue);
    let result = run_move(&LocalStorage, &request).unwrap();

    assert!(!result.aborted);
    assert_eq!(result.attempted.len(), 2);
    assert_eq!(result.failed(), 2);
    for failure in result.failures() {
        assert!(failure.cause().is_some());
    }
    assert!(source.join("a.txt").exists());
    assert!(source.join("b.txt").exists());
}

#[test]
fn continue_policy_moves_the_entries_that_can_move() {
    let td = tempdir().unwrap();
    let source = td.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.txt"), "a").unwrap();
    let dest = td.path().join("dest");
    fs::create_dir_all(&dest).unwrap();

    let request = MoveRequest::new(&source, &dest).with_policy(OnError::Continue);
    let result = run_move(&LocalStorage, &request).unwrap();

    assert_eq!(result.succeeded(), 1);
    assert_eq!(result.failed(), 0);
    assert!(dest.join("a.txt").exists());
}
