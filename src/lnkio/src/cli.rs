use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::*;

mod io;
pub use io::*;

/// The CLI interface for the lnkio application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: LnkioCommand,

    #[clap(flatten)]
    pub verbosity: Verbosity,

    #[clap(flatten)]
    pub jobs: Jobs,
}

/// The top-level commands supported by lnkio.
#[derive(Debug, Subcommand)]
pub enum LnkioCommand {
    Cat(cat::Cat),
    Stat(stat::Stat),
}

impl Command for LnkioCommand {
    fn handle(self, ex: &lnkio_io::Executor) -> eyre::Result<()> {
        match self {
            Self::Cat(cat) => cat.handle(ex),
            Self::Stat(stat) => stat.handle(ex),
        }
    }
}
