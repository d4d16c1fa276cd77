//! Cross-thread primitives for ancillary background tasks (file watchers
//! and similar). The emulation core itself is single-threaded and uses
//! neither of these.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// One-shot wait/signal synchronization primitive.
///
/// `wait()` blocks until `fire()` has been called; once fired, all current
/// and future waiters return immediately.
#[derive(Default)]
pub struct SignalEvent {
    fired: Mutex<bool>,
    condvar: Condvar,
}

impl SignalEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait(&self) {
        let fired = self.fired.lock().unwrap();
        let _guard = self.condvar.wait_while(fired, |fired| !*fired).unwrap();
    }

    pub fn fire(&self) {
        let mut fired = self.fired.lock().unwrap();
        *fired = true;
        self.condvar.notify_all();
    }
}

/// Bounded thread-safe FIFO queue. When full, `push` drops the oldest
/// element rather than blocking the producer.
pub struct SyncQueue<T> {
    inner: Mutex<VecDeque<T>>,
    capacity: usize,
}

impl<T> SyncQueue<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be non-zero");
        Self {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, value: T) {
        let mut queue = self.inner.lock().unwrap();
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(value);
    }

    pub fn try_pop(&self) -> Option<T> {
        self.inner.lock().unwrap().pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}
