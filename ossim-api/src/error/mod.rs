//! Error handling module for the simulator core

use core::fmt;

use crate::core::types::{AccessMode, FrameNum, PhysAddr, Size};

/// Common error type used by every simulator component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No store is registered under the given id
    InvalidStore(usize),
    /// A primitive was invoked against a device of the other access mode
    ModeMismatch {
        /// Mode the primitive requires
        expected: AccessMode,
        /// Mode the device was created with
        actual: AccessMode,
    },
    /// Byte address outside the device
    AddressOutOfRange {
        /// Requested address
        addr: PhysAddr,
        /// Device size in bytes
        size: Size,
    },
    /// Free frame list is empty
    OutOfFrames,
    /// Page size does not yield at least one whole frame
    FormatUnfit {
        /// Device size in bytes
        max_size: Size,
        /// Requested page size
        page_size: Size,
    },
    /// Frame number outside the formatted frame range
    InvalidFrame {
        /// Requested frame number
        fpn: FrameNum,
        /// Number of formatted frames
        frames: usize,
    },
    /// Frame released while it was not allocated
    FrameNotInUse(FrameNum),
    /// Enqueue attempted on a full queue
    QueueFull {
        /// Queue capacity
        capacity: usize,
    },
    /// No process is queued
    QueueEmpty,
    /// Configuration rejected at construction time
    InvalidConfig(&'static str),
    /// Invalid argument
    InvalidArgument(&'static str),
}

impl Error {
    /// Returns true for conditions a caller is expected to handle routinely
    /// (evict a page, apply backpressure, poll again) rather than treat as a bug.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Error::OutOfFrames | Error::QueueFull { .. } | Error::QueueEmpty)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStore(id) => write!(f, "Invalid store: no memory device registered as {}", id),
            Error::ModeMismatch { expected, actual } => {
                write!(f, "Mode mismatch: {} access on a {} device", expected, actual)
            }
            Error::AddressOutOfRange { addr, size } => {
                write!(f, "Address out of range: {:#x} (device size {:#x})", addr, size)
            }
            Error::OutOfFrames => write!(f, "Out of frames"),
            Error::FormatUnfit { max_size, page_size } => write!(
                f,
                "Format unfit: page size {} yields no frame in {} bytes",
                page_size, max_size
            ),
            Error::InvalidFrame { fpn, frames } => {
                write!(f, "Invalid frame: {} (device has {} frames)", fpn, frames)
            }
            Error::FrameNotInUse(fpn) => write!(f, "Frame not in use: {}", fpn),
            Error::QueueFull { capacity } => write!(f, "Queue full: capacity {}", capacity),
            Error::QueueEmpty => write!(f, "Queue empty"),
            Error::InvalidConfig(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for operations that can fail
pub type Result<T> = core::result::Result<T, Error>;
