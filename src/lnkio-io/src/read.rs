use std::{
    io::{self, Read},
    iter,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{fs, Arena, Buffer, BufferSequence, Executor, ReadResult};

/// Batches with fewer paths than this are read on the calling thread.
///
/// Dispatching a handful of reads onto the workers costs more than
/// the parallelism gains back.
pub const INLINE_THRESHOLD: usize = 4;

/// Errors that occur when reading a file into memory.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to query size of '{}'", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is too large to fit in memory ({size} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64 },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("short read from '{}': expected {expected} bytes, got {actual}", path.display())]
    Truncated {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

impl ReadError {
    /// The path of the file which failed to read.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Metadata { path, .. }
            | Self::TooLarge { path, .. }
            | Self::Io { path, .. }
            | Self::Truncated { path, .. } => path,
        }
    }
}

/// Reads the whole file at `path` into a buffer from `arena`.
///
/// The buffer is exactly as large as the file was when its size was
/// probed. When the file shrinks before all of it could be read, the
/// read fails with [`ReadError::Truncated`]. Any bytes past the
/// probed size are ignored.
///
/// The buffer is zeroed before the file contents are read into it,
/// which costs one extra pass over its memory.
///
/// The file handle is closed before this returns, no matter the
/// outcome.
pub fn read_file<'a>(arena: &'a Arena, path: impl AsRef<Path>) -> ReadResult<'a> {
    let path = path.as_ref();

    let mut file = fs::open_read(path).map_err(|source| ReadError::Open {
        path: path.to_owned(),
        source,
    })?;

    let size = file
        .metadata()
        .map_err(|source| ReadError::Metadata {
            path: path.to_owned(),
            source,
        })?
        .len();
    let expected = usize::try_from(size).map_err(|_| ReadError::TooLarge {
        path: path.to_owned(),
        size,
    })?;

    read_exact_into(arena, &mut file, expected, path)
}

/// Reads exactly `expected` bytes from `reader` into a buffer from
/// `arena`. Fewer bytes than that make the read fail.
fn read_exact_into<'a, R: Read>(
    arena: &'a Arena,
    reader: &mut R,
    expected: usize,
    path: &Path,
) -> ReadResult<'a> {
    let buf = arena.alloc_zeroed(expected);
    let actual = fs::fill(reader, &mut *buf).map_err(|source| ReadError::Io {
        path: path.to_owned(),
        source,
    })?;

    if actual < expected {
        return Err(ReadError::Truncated {
            path: path.to_owned(),
            expected,
            actual,
        });
    }

    log::trace!("Read {expected} bytes from '{}'", path.display());
    Ok(Buffer::new(buf))
}

/// Reads all files in `paths` into buffers from `arena`, distributing
/// the reads over the workers of `executor`.
///
/// The resulting sequence has one slot per path in the same order,
/// regardless of the order in which the reads complete. A failed read
/// is recorded in its slot and does not affect any other.
///
/// Blocks until every read has finished.
pub fn read_files<'a, P>(
    executor: &Executor,
    arena: &'a Arena,
    paths: &[P],
) -> BufferSequence<'a>
where
    P: AsRef<Path> + Sync,
{
    if paths.is_empty() {
        return BufferSequence::default();
    }

    if paths.len() < INLINE_THRESHOLD {
        log::debug!("Reading {} files inline", paths.len());
        let slots = paths.iter().map(|p| read_file(arena, p)).collect();
        return BufferSequence::from_slots(slots);
    }

    log::debug!(
        "Reading {} files on {} workers",
        paths.len(),
        executor.workers()
    );

    let mut slots: Vec<ReadResult<'a>> = iter::repeat_with(|| Ok(Buffer::EMPTY))
        .take(paths.len())
        .collect();

    // Every task owns exactly one slot, so no two tasks ever touch the
    // same memory. The scope only returns when all of them are done.
    executor.scope(|s| {
        for (slot, path) in slots.iter_mut().zip(paths) {
            s.spawn(move || *slot = read_file(arena, path));
        }
    });

    let seq = BufferSequence::from_slots(slots);
    log::debug!(
        "Read {} bytes in total, {} files failed",
        seq.total_size(),
        seq.failures().count()
    );

    seq
}
