//! Single-file mode against the real filesystem.

use batch_move::{run_move, LocalStorage, MoveError, MoveRequest};
use std::fs;
use tempfile::tempdir;

#[test]
fn single_file_moves_to_literal_destination() -> Result<(), Box<dyn std::error::Error>> {
    let src_dir = tempdir()?;
    let dst_dir = tempdir()?;
    let src = src_dir.path().join("a.txt");
    fs::write(&src, "hello")?;
    let dest = dst_dir.path().join("a.txt");

    let request = MoveRequest::new(&src, &dest);
    let result = run_move(&LocalStorage, &request)?;

    assert!(!result.aborted);
    assert_eq!(result.attempted.len(), 1);
    assert!(!result.attempted[0].failed());
    assert!(!src.exists());
    assert_eq!(fs::read_to_string(&dest)?, "hello");
    Ok(())
}

#[test]
fn single_file_can_be_renamed_on_the_way() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("a.txt");
    fs::write(&src, "x")?;
    let dest = td.path().join("renamed.txt");

    run_move(&LocalStorage, &MoveRequest::new(&src, &dest))?;

    assert!(!src.exists());
    assert!(dest.exists());
    Ok(())
}

#[test]
fn missing_destination_parent_fails_with_move_failed() {
    let src_dir = tempdir().unwrap();
    let src = src_dir.path().join("a.txt");
    fs::write(&src, "x").unwrap();
    let dest = src_dir.path().join("no-such-dir").join("a.txt");

    let err = run_move(&LocalStorage, &MoveRequest::new(&src, &dest)).unwrap_err();
    let me = err.downcast_ref::<MoveError>().expect("typed error");
    assert_eq!(me.code(), "move_failed");
    // A failed rename makes no partial change.
    assert!(src.exists());
}

#[test]
fn missing_source_fails_with_source_not_found() {
    let td = tempdir().unwrap();
    let src = td.path().join("nope.txt");
    let dest = td.path().join("dest.txt");

    let err = run_move(&LocalStorage, &MoveRequest::new(&src, &dest)).unwrap_err();
    let me = err.downcast_ref::<MoveError>().expect("typed error");
    assert_eq!(me.code(), "source_not_found");
}
