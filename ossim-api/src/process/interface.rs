//! Process queue interface

use crate::error::Result;

/// Trait for a queue of runnable process handles
///
/// The scheduler owns the handles; a queue only orders them.
pub trait ProcessQueue<T> {
    /// Adds a process, failing when the queue is at capacity
    fn push(&mut self, proc: T) -> Result<()>;

    /// Removes the next process, `None` when nothing is queued
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of queued processes
    fn len(&self) -> usize;

    /// Returns true when nothing is queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
