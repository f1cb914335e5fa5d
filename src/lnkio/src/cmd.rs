use lnkio_io::Executor;

pub mod cat;
pub mod stat;

/// A command that can be executed by the CLI.
pub trait Command {
    /// Handles the command, performing all file I/O on `ex`.
    fn handle(self, ex: &Executor) -> eyre::Result<()>;
}
