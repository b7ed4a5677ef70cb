//! Simulator configuration
//!
//! The C simulator fixes page size and queue capacity at compile time. Here
//! they are defaults that every component accepts as construction-time
//! parameters, so tests can build tiny devices and queues.

use static_assertions::const_assert;

use crate::core::types::{AccessMode, Size};
use crate::error::{Error, Result};

/// Default page (frame) size in bytes
pub const PAGING_PAGESZ: Size = 256;
/// Default ready queue capacity
pub const MAX_QUEUE_SIZE: usize = 10;
/// Default RAM device size in bytes
pub const DEFAULT_MEMPHY_SIZE: Size = 0x10000;
/// Default initial timeslot of a ready queue
pub const DEFAULT_TIMESLOT: i32 = 2;

const_assert!(PAGING_PAGESZ > 0);
const_assert!(DEFAULT_MEMPHY_SIZE % PAGING_PAGESZ == 0);
const_assert!(DEFAULT_MEMPHY_SIZE / PAGING_PAGESZ > 0);
const_assert!(MAX_QUEUE_SIZE > 0);

/// Physical memory device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemPhyConfig {
    /// Device size in bytes
    pub max_size: Size,
    /// Frame size used when the device is formatted
    pub page_size: Size,
    /// Access mode, fixed for the device lifetime
    pub mode: AccessMode,
}

impl MemPhyConfig {
    /// Random access device of `max_size` bytes with the default page size
    pub const fn random(max_size: Size) -> Self {
        Self {
            max_size,
            page_size: PAGING_PAGESZ,
            mode: AccessMode::Random,
        }
    }

    /// Sequential access device of `max_size` bytes with the default page size
    pub const fn sequential(max_size: Size) -> Self {
        Self {
            max_size,
            page_size: PAGING_PAGESZ,
            mode: AccessMode::Sequential,
        }
    }

    /// Overrides the frame size
    pub const fn with_page_size(mut self, page_size: Size) -> Self {
        self.page_size = page_size;
        self
    }

    /// Number of whole frames this configuration yields
    pub const fn frame_count(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.max_size / self.page_size
        }
    }

    /// Checks the configuration can back a device.
    ///
    /// A page size that yields no frame is not rejected here: the device is
    /// still created, only frame-less.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::InvalidConfig("memory device size must be non-zero"));
        }
        Ok(())
    }
}

impl Default for MemPhyConfig {
    fn default() -> Self {
        Self::random(DEFAULT_MEMPHY_SIZE)
    }
}

/// Ready queue configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum number of queued processes
    pub capacity: usize,
    /// Initial timeslot counter
    pub timeslot: i32,
}

impl QueueConfig {
    /// Overrides the capacity
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Overrides the initial timeslot
    pub const fn with_timeslot(mut self, timeslot: i32) -> Self {
        self.timeslot = timeslot;
        self
    }

    /// Checks the configuration can back a queue
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfig("queue capacity must be non-zero"));
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_QUEUE_SIZE,
            timeslot: DEFAULT_TIMESLOT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memphy_config() {
        let config = MemPhyConfig::default();
        assert_eq!(config.max_size, DEFAULT_MEMPHY_SIZE);
        assert_eq!(config.page_size, PAGING_PAGESZ);
        assert_eq!(config.frame_count(), DEFAULT_MEMPHY_SIZE / PAGING_PAGESZ);

        let config = MemPhyConfig::sequential(1024).with_page_size(64);
        assert_eq!(config.mode, AccessMode::Sequential);
        assert_eq!(config.frame_count(), 16);
        assert!(config.validate().is_ok());

        assert_eq!(MemPhyConfig::random(100).with_page_size(0).frame_count(), 0);
        assert!(MemPhyConfig::random(0).validate().is_err());
    }

    #[test]
    fn test_queue_config() {
        let config = QueueConfig::default();
        assert_eq!(config.capacity, MAX_QUEUE_SIZE);
        assert_eq!(config.timeslot, DEFAULT_TIMESLOT);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.with_capacity(0).validate(),
            Err(Error::InvalidConfig("queue capacity must be non-zero"))
        );
    }
}
