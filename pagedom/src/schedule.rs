use std::time::Instant;

/// Handle to a scheduled task, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    handle: TaskHandle,
    due: Instant,
    payload: T,
}

/// One-shot deadline scheduler with explicit cancellation.
///
/// Owners drive it with `poll(now)`; pending tasks die with the scheduler,
/// which is exactly page-unload semantics.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a payload to fire at `due`.
    pub fn schedule(&mut self, due: Instant, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            due,
            payload,
        });
        handle
    }

    /// Cancel a pending task. Returns true if it was still pending.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drain every task due at or before `now`, in deadline order.
    /// Tasks sharing a deadline fire in scheduling order.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut remaining: Vec<Entry<T>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        // Stable sort: handle order is scheduling order
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.handle.0.cmp(&b.handle.0)));
        due.into_iter().map(|e| e.payload).collect()
    }

    /// Drop all pending tasks.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
