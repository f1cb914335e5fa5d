use clap::Args;
use lnkio_io::{Arena, Executor};

use super::Command;
use crate::cli;

/// Reads many input files and prints their sizes.
#[derive(Debug, Args)]
pub struct Stat {
    /// The input files to read.
    ///
    /// UNIX glob patterns are supported to specify many files.
    #[clap(required = true)]
    inputs: Vec<String>,
}

impl Command for Stat {
    fn handle(self, ex: &Executor) -> eyre::Result<()> {
        let inputs = cli::expand_inputs(&self.inputs)?;

        let arena = Arena::new();
        let seq = lnkio_io::read_files(ex, &arena, &inputs);

        for (path, slot) in inputs.iter().zip(&seq) {
            if let Ok(buf) = slot {
                println!("{:>12}  {}", buf.len(), path.display());
            }
        }
        println!("{:>12}  total", seq.total_size());

        cli::report_failures(&seq)
    }
}
