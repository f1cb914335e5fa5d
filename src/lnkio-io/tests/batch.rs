use std::{
    fs,
    path::{Path, PathBuf},
};

use lnkio_io::{read_file, read_files, Arena, Executor, ReadError, INLINE_THRESHOLD};
use tempfile::TempDir;

fn contents(i: usize) -> Vec<u8> {
    // Vary the sizes so that reads finish in a different order than
    // they were submitted in.
    let len = (i * 7919) % 4096;
    (0..len).map(|b| (b ^ i) as u8).collect()
}

fn make_inputs(dir: &Path, n: usize) -> Vec<PathBuf> {
    (0..n)
        .map(|i| {
            let path = dir.join(format!("input{i}.o"));
            fs::write(&path, contents(i)).unwrap();
            path
        })
        .collect()
}

#[test]
fn preserves_order() {
    let dir = TempDir::new().unwrap();
    let mut paths = make_inputs(dir.path(), 200);
    paths.reverse();

    let ex = Executor::with_threads(4).unwrap();
    let arena = Arena::new();
    let seq = read_files(&ex, &arena, &paths);

    assert_eq!(seq.len(), paths.len());
    assert!(!seq.has_failures());
    for (i, path) in paths.iter().enumerate() {
        let expected = read_file(&arena, path).unwrap();
        assert_eq!(seq.buffer(i), Some(expected), "slot {i} out of order");
    }
}

#[test]
fn current_thread() {
    let dir = TempDir::new().unwrap();
    let paths = make_inputs(dir.path(), 32);

    let ex = Executor::current();
    let arena = Arena::new();
    let seq = read_files(&ex, &arena, &paths);

    assert_eq!(seq.len(), 32);
    for (i, buf) in seq.buffers().enumerate() {
        assert_eq!(&*buf, contents(i).as_slice());
    }
}

#[test]
fn failure_is_contained() {
    let dir = TempDir::new().unwrap();
    let mut paths = make_inputs(dir.path(), 16);
    paths.insert(5, dir.path().join("does-not-exist.o"));

    let ex = Executor::with_threads(4).unwrap();
    let arena = Arena::new();
    let seq = read_files(&ex, &arena, &paths);

    assert_eq!(seq.len(), 17);

    let failures: Vec<_> = seq.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, 5);
    assert!(matches!(failures[0].1, ReadError::Open { .. }));
    assert_eq!(failures[0].1.path(), paths[5]);

    for (i, slot) in seq.iter().enumerate() {
        if i == 5 {
            continue;
        }

        let data = if i < 5 { contents(i) } else { contents(i - 1) };
        assert_eq!(&**slot.as_ref().unwrap(), data.as_slice());
    }
}

#[test]
fn empty_batch_skips_executor() {
    let ex = Executor::with_threads(2).unwrap();
    let arena = Arena::new();

    let seq = read_files::<PathBuf>(&ex, &arena, &[]);

    assert!(seq.is_empty());
    assert_eq!(ex.batches(), 0);
    assert_eq!(arena.allocated_bytes(), 0);
}

#[test]
fn small_batch_reads_inline() {
    let dir = TempDir::new().unwrap();
    let paths = make_inputs(dir.path(), INLINE_THRESHOLD - 1);

    let ex = Executor::with_threads(2).unwrap();
    let arena = Arena::new();
    let seq = read_files(&ex, &arena, &paths);

    assert_eq!(seq.len(), paths.len());
    assert_eq!(ex.batches(), 0);

    let seq = read_files(&ex, &arena, &make_inputs(dir.path(), INLINE_THRESHOLD));
    assert_eq!(seq.len(), INLINE_THRESHOLD);
    assert_eq!(ex.batches(), 1);
}

#[test]
fn total_size() {
    let dir = TempDir::new().unwrap();
    let paths = make_inputs(dir.path(), 10);

    let ex = Executor::with_threads(3).unwrap();
    let arena = Arena::new();
    let seq = read_files(&ex, &arena, &paths);

    let expected: usize = (0..10).map(|i| contents(i).len()).sum();
    assert_eq!(seq.total_size(), expected as u64);
}
