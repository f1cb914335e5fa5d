use std::{env, marker::PhantomData, thread};

use thiserror::Error;

mod current;
use current::Current;

mod threaded;
use threaded::Threaded;

const LNKIO_WORKER_THREADS: &str = "LNKIO_WORKER_THREADS";

/// Errors from configuring an [`Executor`].
#[derive(Debug, Error)]
pub enum BadConfiguration {
    #[error("invalid value in {}; must be a natural number", LNKIO_WORKER_THREADS)]
    ThreadCount,

    #[error("failed to spawn worker threads")]
    Spawn(#[from] rayon::ThreadPoolBuildError),
}

fn parse_threads(value: Option<&str>) -> Result<usize, BadConfiguration> {
    match value {
        Some(value) => value.trim().parse().map_err(|_| BadConfiguration::ThreadCount),

        None => Ok(thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1)),
    }
}

fn available_threads() -> Result<usize, BadConfiguration> {
    parse_threads(env::var(LNKIO_WORKER_THREADS).ok().as_deref())
}

/// An executor for independent units of file I/O work.
///
/// Configuration is possible with the `LNKIO_WORKER_THREADS`
/// environment variable specifying the number of threads to use.
/// If not set, falls back to [`thread::available_parallelism`].
///
/// The API is the same for both flavors of execution and users
/// should not need to worry about any execution flavor details.
pub enum Executor {
    /// A single-threaded executor on the current thread.
    Current(Current),
    /// A multithreaded executor performing work on background threads.
    Threaded(Threaded),
}

impl Executor {
    /// Creates a single-threaded executor on the current thread.
    #[inline]
    pub fn current() -> Self {
        Self::Current(Current::new())
    }

    /// Creates an executor with a fixed number of worker threads.
    ///
    /// Zero or one threads select the current-thread flavor.
    pub fn with_threads(nthreads: usize) -> Result<Self, BadConfiguration> {
        match nthreads {
            0 | 1 => Ok(Self::current()),
            n => Ok(Self::Threaded(Threaded::new(n)?)),
        }
    }

    /// Gets the preferred executor for the configuration of available
    /// worker threads on the system.
    #[inline]
    pub fn get() -> Result<Self, BadConfiguration> {
        Self::with_threads(available_threads()?)
    }

    /// The number of threads that carry out work.
    pub fn workers(&self) -> usize {
        match self {
            Self::Current(..) => 1,
            Self::Threaded(t) => t.workers(),
        }
    }

    /// The number of [`Executor::scope`] calls completed so far.
    pub fn batches(&self) -> usize {
        match self {
            Self::Current(c) => c.batches(),
            Self::Threaded(t) => t.batches(),
        }
    }

    /// Opens a group of work and blocks until all work spawned into
    /// it has completed.
    ///
    /// Spawned work may borrow from the surrounding stack frame, as
    /// nothing outlives the call.
    pub fn scope<'scope, F, R>(&self, f: F) -> R
    where
        F: for<'a> FnOnce(&'a Scope<'a, 'scope>) -> R + Send,
        R: Send,
    {
        match self {
            Self::Current(c) => c.scope(|| f(&Scope::Current(PhantomData))),
            Self::Threaded(t) => t.scope(|s| f(&Scope::Threaded(s))),
        }
    }
}

/// A group of work opened by [`Executor::scope`].
pub enum Scope<'a, 'scope> {
    Current(PhantomData<&'a rayon::Scope<'scope>>),
    Threaded(&'a rayon::Scope<'scope>),
}

impl<'scope> Scope<'_, 'scope> {
    /// Submits an independent unit of work.
    ///
    /// On the current-thread flavor, `task` runs to completion before
    /// this returns. Otherwise it is queued onto the worker pool in no
    /// particular order relative to other work.
    pub fn spawn<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'scope,
    {
        match self {
            Self::Current(..) => task(),
            Self::Threaded(s) => s.spawn(move |_| task()),
        }
    }
}
