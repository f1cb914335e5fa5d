use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Context;
use lnkio_io::{Arena, ChunkList, Executor, WriteOptions};

use super::Command;
use crate::cli;

/// Reads many input files and writes their ordered concatenation
/// into one output file.
#[derive(Debug, Args)]
pub struct Cat {
    /// The input files to concatenate, in order.
    ///
    /// UNIX glob patterns are supported to specify many files; their
    /// matches are sorted alphabetically.
    #[clap(required = true)]
    inputs: Vec<String>,

    /// The output file to create or replace.
    #[clap(short, long)]
    output: PathBuf,

    /// Marks the output file as executable.
    #[clap(long)]
    executable: bool,

    /// Flushes the output to the storage device before exiting.
    #[clap(long)]
    sync: bool,
}

impl Command for Cat {
    fn handle(self, ex: &Executor) -> eyre::Result<()> {
        let inputs = cli::expand_inputs(&self.inputs)?;
        let options = WriteOptions::default()
            .executable(self.executable)
            .sync(self.sync);

        let written = concatenate(ex, &inputs, &self.output, options)?;
        log::info!(
            "Wrote {written} bytes from {} inputs to '{}'",
            inputs.len(),
            self.output.display()
        );

        Ok(())
    }
}

/// Concatenates all `inputs` into `output`.
///
/// Nothing is written when any of the inputs fails to read.
pub fn concatenate(
    ex: &Executor,
    inputs: &[PathBuf],
    output: &Path,
    options: WriteOptions,
) -> eyre::Result<u64> {
    let arena = Arena::new();
    let seq = lnkio_io::read_files(ex, &arena, inputs);
    cli::report_failures(&seq)?;

    let mut chunks = ChunkList::with_capacity(seq.len());
    chunks.push_sequence(&seq);

    lnkio_io::write_chunks_with(output, &chunks, options)
        .with_context(|| format!("failed to write output to '{}'", output.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn concatenates_in_order() {
        let dir = TempDir::new().unwrap();
        let inputs: Vec<_> = ["crt0.o", "main.o", "libc.a", "crtn.o"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                fs::write(&path, format!("[{name}]")).unwrap();
                path
            })
            .collect();

        let out = dir.path().join("a.out");
        let ex = Executor::with_threads(2).unwrap();
        let written = concatenate(&ex, &inputs, &out, WriteOptions::default()).unwrap();

        let expected = "[crt0.o][main.o][libc.a][crtn.o]";
        assert_eq!(written, expected.len() as u64);
        assert_eq!(fs::read_to_string(&out).unwrap(), expected);
    }

    #[test]
    fn failed_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("main.o");
        fs::write(&present, b"main").unwrap();

        let inputs = vec![present, dir.path().join("missing.o")];
        let out = dir.path().join("a.out");
        let ex = Executor::current();

        assert!(concatenate(&ex, &inputs, &out, WriteOptions::default()).is_err());
        assert!(!out.exists());
    }
}
