use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

const WORKER_NAME: &str = "lnkio-worker";
const WORKER_STACK: usize = 1_048_576;

fn make_worker_pool(nthreads: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(nthreads)
        .thread_name(|i| format!("{WORKER_NAME}-{i}"))
        .stack_size(WORKER_STACK)
        .build()
}

/// An executor flavor which processes tasks on background threads.
pub struct Threaded {
    pool: ThreadPool,
    batches: AtomicUsize,
}

impl Threaded {
    pub(super) fn new(nthreads: usize) -> Result<Self, ThreadPoolBuildError> {
        log::debug!("Spawning {nthreads} worker threads");

        Ok(Self {
            pool: make_worker_pool(nthreads)?,
            batches: AtomicUsize::new(0),
        })
    }

    pub(super) fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub(super) fn batches(&self) -> usize {
        self.batches.load(Ordering::Relaxed)
    }

    pub(super) fn scope<'scope, F, R>(&self, f: F) -> R
    where
        F: FnOnce(&rayon::Scope<'scope>) -> R + Send,
        R: Send,
    {
        // Blocks until every task spawned into the scope has finished,
        // including tasks spawned by other tasks.
        let res = self.pool.scope(f);
        self.batches.fetch_add(1, Ordering::Relaxed);

        res
    }
}
