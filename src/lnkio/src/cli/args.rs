use clap::{ArgAction, Args};
use lnkio_io::Executor;

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Configures the log verbosity of lnkio.
    ///
    /// `-v` is Debug, `-vv` is Trace.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Configures the global logger based on the settings.
    pub fn setup(self) {
        let level = self.log_level();
        // Only fails when a logger was already installed.
        let _ = simple_logger::init_with_level(level);
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Configures the number of worker threads for file I/O.
#[derive(Clone, Copy, Debug, Args)]
pub struct Jobs {
    /// The number of worker threads to read inputs with.
    ///
    /// Defaults to the value of the `LNKIO_WORKER_THREADS` environment
    /// variable, or the available parallelism of the system when that
    /// is unset. A value of 1 reads everything on the main thread.
    #[clap(short, long, global = true)]
    pub jobs: Option<usize>,
}

impl Jobs {
    /// Creates the executor for the configured thread count.
    pub fn executor(self) -> eyre::Result<Executor> {
        let ex = match self.jobs {
            Some(n) => Executor::with_threads(n)?,
            None => Executor::get()?,
        };

        log::debug!("Using {} worker threads", ex.workers());
        Ok(ex)
    }
}
