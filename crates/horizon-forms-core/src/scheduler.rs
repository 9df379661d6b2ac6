//! Deferred one-shot scheduling for widget layout passes.
//!
//! Widgets sometimes need to act "a little later": after the host has laid
//! out the view, for example. A [`Scheduler<T>`] stores such deferred work as
//! plain payload values keyed by the instant they become due. The owning
//! widget drains due payloads with [`Scheduler::take_ready`] when the host
//! pumps it, and applies them to itself.
//!
//! Because the scheduler is owned by the widget, dropping the widget drops
//! every pending entry. [`Scheduler::shutdown`] additionally cancels pending
//! entries and refuses new ones, for hosts that keep a widget value alive
//! after its view is gone.
//!
//! All methods take the current instant explicitly so hosts (and tests) stay
//! in control of the clock.
//!
//! # Example
//!
//! ```
//! use horizon_forms_core::Scheduler;
//! use std::time::{Duration, Instant};
//!
//! let mut scheduler = Scheduler::new();
//! let start = Instant::now();
//!
//! scheduler.schedule_after(start, Duration::from_millis(100), "settle").unwrap();
//! assert!(scheduler.take_ready(start).is_empty());
//! assert_eq!(scheduler.take_ready(start + Duration::from_millis(100)), vec!["settle"]);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, SchedulerError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a scheduled entry.
    pub struct ScheduledTaskId;
}

/// An entry in the scheduler queue (min-heap by due time, then insertion order).
#[derive(Debug, Clone, Copy)]
struct SchedulerQueueEntry {
    id: ScheduledTaskId,
    run_time: Instant,
    sequence: u64,
}

impl PartialEq for SchedulerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.run_time == other.run_time && self.sequence == other.sequence
    }
}

impl Eq for SchedulerQueueEntry {}

impl PartialOrd for SchedulerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchedulerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other
            .run_time
            .cmp(&self.run_time)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A queue of deferred one-shot payloads.
pub struct Scheduler<T> {
    /// Pending payloads. Cancelled entries are removed here; their queue
    /// entries are skipped lazily.
    tasks: SlotMap<ScheduledTaskId, T>,
    /// Priority queue of pending entries.
    queue: BinaryHeap<SchedulerQueueEntry>,
    /// Monotonic insertion counter for stable ordering of equal due times.
    next_sequence: u64,
    /// Set once the owner has been torn down.
    shut_down: bool,
}

impl<T> Scheduler<T> {
    /// Create a new, empty scheduler.
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            queue: BinaryHeap::new(),
            next_sequence: 0,
            shut_down: false,
        }
    }

    /// Schedule `payload` to become due at `instant`.
    ///
    /// Fails with [`SchedulerError::ShutDown`] after [`shutdown`](Self::shutdown).
    pub fn schedule_at(&mut self, instant: Instant, payload: T) -> Result<ScheduledTaskId> {
        if self.shut_down {
            return Err(SchedulerError::ShutDown.into());
        }

        let id = self.tasks.insert(payload);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(SchedulerQueueEntry {
            id,
            run_time: instant,
            sequence,
        });

        tracing::trace!(target: targets::SCHEDULER, ?id, "scheduled deferred entry");
        Ok(id)
    }

    /// Schedule `payload` to become due `delay` after `now`.
    pub fn schedule_after(
        &mut self,
        now: Instant,
        delay: Duration,
        payload: T,
    ) -> Result<ScheduledTaskId> {
        self.schedule_at(now + delay, payload)
    }

    /// Cancel a pending entry, returning its payload.
    pub fn cancel(&mut self, id: ScheduledTaskId) -> Result<T> {
        self.tasks
            .remove(id)
            .ok_or_else(|| SchedulerError::InvalidTaskId.into())
    }

    /// Cancel every pending entry.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
        self.queue.clear();
    }

    /// Cancel every pending entry and refuse new ones.
    pub fn shutdown(&mut self) {
        self.cancel_all();
        self.shut_down = true;
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Check if an entry is still pending.
    pub fn is_active(&self, id: ScheduledTaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Get the duration from `now` until the next entry is due, if any.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        self.discard_cancelled();
        self.queue
            .peek()
            .map(|entry| entry.run_time.saturating_duration_since(now))
    }

    /// Remove and return every payload due at or before `now`, in due order.
    #[tracing::instrument(skip(self), target = "horizon_forms_core::scheduler", level = "trace")]
    pub fn take_ready(&mut self, now: Instant) -> Vec<T> {
        let mut ready = Vec::new();

        while let Some(entry) = self.queue.peek() {
            if entry.run_time > now {
                break;
            }
            let Some(entry) = self.queue.pop() else {
                break;
            };
            // Cancelled entries have no payload left.
            if let Some(payload) = self.tasks.remove(entry.id) {
                ready.push(payload);
            }
        }

        if !ready.is_empty() {
            tracing::trace!(target: targets::SCHEDULER, count = ready.len(), "deferred entries due");
        }
        ready
    }

    fn discard_cancelled(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.tasks.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Scheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.tasks.len())
            .field("shut_down", &self.shut_down)
            .finish()
    }
}
