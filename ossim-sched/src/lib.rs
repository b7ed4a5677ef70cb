//! OSSIM Scheduler
//!
//! Ready queues consumed by the simulated CPU scheduler. Each queue is a
//! bounded FIFO of process handles with a timeslot counter; priority levels
//! are built by keeping one queue per level.

#![no_std]
#![warn(clippy::all)]

extern crate alloc;

pub use ossim_api::*;

pub mod queue;

pub use queue::{queue_empty, QueueFull, ReadyQueue};
