use std::sync::atomic::{AtomicUsize, Ordering};

/// An executor flavor which carries out every task on the
/// current thread in sequential order.
pub struct Current {
    batches: AtomicUsize,
}

impl Current {
    #[inline]
    pub(super) fn new() -> Self {
        Self {
            batches: AtomicUsize::new(0),
        }
    }

    pub(super) fn batches(&self) -> usize {
        self.batches.load(Ordering::Relaxed)
    }

    pub(super) fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let res = f();
        self.batches.fetch_add(1, Ordering::Relaxed);

        res
    }
}
