use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::fs;

/// Errors that occur when writing a file.
///
/// A failed write leaves the output in an unspecified, partially
/// written state. Nothing is retried.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create '{}'", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write chunk {index} to '{}' after {written} bytes", path.display())]
    Chunk {
        path: PathBuf,
        index: usize,
        written: u64,
        #[source]
        source: io::Error,
    },

    #[error("failed to finish writing '{}'", path.display())]
    Finish {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// The path of the file which failed to write.
    pub fn path(&self) -> &Path {
        match self {
            Self::Create { path, .. } | Self::Chunk { path, .. } | Self::Finish { path, .. } => {
                path
            }
        }
    }
}

/// Options for how output files get written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// The file mode for newly created files on UNIX platforms,
    /// before the process umask applies.
    pub mode: u32,
    /// Whether to flush file contents to the storage device before
    /// returning.
    pub sync: bool,
    /// Whether to mark the file executable wherever it is readable.
    pub executable: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            mode: 0o666,
            sync: false,
            executable: false,
        }
    }
}

impl WriteOptions {
    /// Sets the file mode for newly created files.
    pub fn mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Configures whether the contents are synced to disk.
    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Configures whether the file is made executable.
    pub fn executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }
}

/// Writes `data` verbatim to a file at `path`, replacing any previous
/// contents.
///
/// Parent directories are not created.
pub fn write_buffer(path: impl AsRef<Path>, data: &[u8]) -> Result<(), WriteError> {
    write_buffer_with(path, data, WriteOptions::default())
}

/// Like [`write_buffer`], but with explicit [`WriteOptions`].
pub fn write_buffer_with(
    path: impl AsRef<Path>,
    data: &[u8],
    options: WriteOptions,
) -> Result<(), WriteError> {
    write_chunks_with(path, [data], options).map(drop)
}

/// Writes every chunk back-to-back to a file at `path`, replacing any
/// previous contents.
///
/// The chunks are consumed in a single pass and written in iteration
/// order, so the file ends up holding their concatenation. Writing
/// stops at the first chunk that fails.
///
/// Returns the total number of bytes written.
pub fn write_chunks<I>(path: impl AsRef<Path>, chunks: I) -> Result<u64, WriteError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    write_chunks_with(path, chunks, WriteOptions::default())
}

/// Like [`write_chunks`], but with explicit [`WriteOptions`].
pub fn write_chunks_with<I>(
    path: impl AsRef<Path>,
    chunks: I,
    options: WriteOptions,
) -> Result<u64, WriteError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let path = path.as_ref();

    let mut file = fs::create_write(path, options.mode).map_err(|source| WriteError::Create {
        path: path.to_owned(),
        source,
    })?;

    let mut written = 0;
    for (index, chunk) in chunks.into_iter().enumerate() {
        let chunk = chunk.as_ref();
        file.write_all(chunk).map_err(|source| WriteError::Chunk {
            path: path.to_owned(),
            index,
            written,
            source,
        })?;

        written += chunk.len() as u64;
    }

    let finish = |source: io::Error| WriteError::Finish {
        path: path.to_owned(),
        source,
    };

    if options.executable {
        fs::make_executable(&file).map_err(finish)?;
    }
    if options.sync {
        file.sync_all().map_err(finish)?;
    }

    log::debug!("Wrote {written} bytes to '{}'", path.display());
    Ok(written)
}
