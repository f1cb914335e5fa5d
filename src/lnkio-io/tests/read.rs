use std::fs;

use lnkio_io::{read_file, read_files, Arena, Executor, ReadError};
use tempfile::TempDir;

#[test]
fn read_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.o");
    fs::write(&path, b"\x7fELF object").unwrap();

    let arena = Arena::new();
    let buf = read_file(&arena, &path).unwrap();

    assert_eq!(&*buf, b"\x7fELF object");
    assert_eq!(arena.allocated_bytes(), buf.len());
}

#[test]
fn read_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.o");
    fs::write(&path, b"").unwrap();

    let arena = Arena::new();
    let buf = read_file(&arena, &path).unwrap();

    assert!(buf.is_empty());
}

#[test]
fn read_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.o");

    let arena = Arena::new();
    let err = read_file(&arena, &path).unwrap_err();

    assert!(matches!(err, ReadError::Open { .. }));
    assert_eq!(err.path(), path);
}

#[test]
fn read_directory() {
    let dir = TempDir::new().unwrap();

    let arena = Arena::new();
    assert!(read_file(&arena, dir.path()).is_err());
}

#[test]
fn single_matches_batch_of_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lib.a");
    fs::write(&path, b"!<arch>\nsome members").unwrap();

    let arena = Arena::new();
    let single = read_file(&arena, &path).unwrap();

    for ex in [Executor::current(), Executor::with_threads(2).unwrap()] {
        let seq = read_files(&ex, &arena, &[&path]);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.buffer(0), Some(single));
    }
}
