//! Bounded ready queue.
//!
//! A fixed-capacity ring of process handles. `cursor` is the head slot and
//! the occupied slots are `(cursor + i) % capacity` for `i < size`. Ordering
//! is strict FIFO; schedulers wanting priorities keep one queue per level.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use ossim_api::config::QueueConfig;
use ossim_api::{Error, ProcessQueue, Result};

/// Enqueue rejected because the queue is at capacity.
///
/// Carries the rejected handle back to the caller, who decides whether to
/// drop it, retry later or escalate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueFull<T> {
    /// The handle that was not queued
    pub proc: T,
    /// Capacity of the queue that rejected it
    pub capacity: usize,
}

impl<T> QueueFull<T> {
    /// Recover the rejected handle
    pub fn into_inner(self) -> T {
        self.proc
    }
}

impl<T> fmt::Display for QueueFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ready queue full (capacity {})", self.capacity)
    }
}

impl<T> From<QueueFull<T>> for Error {
    fn from(err: QueueFull<T>) -> Self {
        Error::QueueFull { capacity: err.capacity }
    }
}

/// Bounded FIFO of process handles
#[derive(Debug)]
pub struct ReadyQueue<T> {
    slots: Vec<Option<T>>,
    cursor: usize,
    size: usize,
    timeslot: i32,
}

impl<T> ReadyQueue<T> {
    pub fn new(config: QueueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: QueueConfig) -> Self {
        let mut slots = Vec::with_capacity(config.capacity);
        slots.resize_with(config.capacity, || None);
        Self {
            slots,
            cursor: 0,
            size: 0,
            timeslot: config.timeslot,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(QueueConfig::default().with_capacity(capacity))
    }

    #[inline]
    fn slot(&self, i: usize) -> usize {
        (self.cursor + i) % self.slots.len()
    }

    pub fn enqueue(&mut self, proc: T) -> core::result::Result<(), QueueFull<T>> {
        if self.is_full() {
            log::warn!("ready queue full (capacity {}), rejecting process", self.capacity());
            return Err(QueueFull { proc, capacity: self.capacity() });
        }
        let idx = self.slot(self.size);
        self.slots[idx] = Some(proc);
        self.size += 1;
        Ok(())
    }

    /// Take the process queued earliest. `None` when nothing is queued.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let proc = self.slots[self.cursor].take();
        self.cursor = self.slot(1);
        self.size -= 1;
        self.timeslot = self.timeslot.saturating_sub(1);
        proc
    }

    /// Like [`ReadyQueue::dequeue`], but reports an empty queue as an error
    pub fn try_dequeue(&mut self) -> Result<T> {
        self.dequeue().ok_or(Error::QueueEmpty)
    }

    pub fn peek(&self) -> Option<&T> {
        if self.size == 0 {
            return None;
        }
        self.slots[self.cursor].as_ref()
    }

    /// Queued handles, head first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.size).filter_map(move |i| self.slots[self.slot(i)].as_ref())
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.cursor = 0;
        self.size = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Head slot index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Remaining timeslot counter
    pub fn timeslot(&self) -> i32 {
        self.timeslot
    }

    /// Refill the timeslot counter, typically at the start of a quantum
    pub fn set_timeslot(&mut self, timeslot: i32) {
        self.timeslot = timeslot;
    }
}

impl<T> Default for ReadyQueue<T> {
    fn default() -> Self {
        Self::build(QueueConfig::default())
    }
}

impl<T> ProcessQueue<T> for ReadyQueue<T> {
    fn push(&mut self, proc: T) -> Result<()> {
        self.enqueue(proc).map_err(Error::from)
    }

    fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        self.size
    }
}

/// True for an absent queue or one with nothing queued
pub fn queue_empty<T>(queue: Option<&ReadyQueue<T>>) -> bool {
    queue.is_none_or(ReadyQueue::is_empty)
}
