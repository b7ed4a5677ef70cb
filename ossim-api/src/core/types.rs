//! Core types used throughout the simulator

use core::fmt;

/// Byte address inside a physical memory device
pub type PhysAddr = usize;

/// Physical frame number
pub type FrameNum = usize;

/// Size type
pub type Size = usize;

/// How a memory device may be accessed.
///
/// The mode is fixed when the device is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessMode {
    /// Any address may be read or written directly
    #[default]
    Random,
    /// Every access first walks the device cursor to the target address
    Sequential,
}

impl AccessMode {
    /// Maps the C-style `rdmflg` integer flag onto a mode (non-zero is random).
    pub const fn from_flag(flag: i32) -> Self {
        if flag != 0 {
            AccessMode::Random
        } else {
            AccessMode::Sequential
        }
    }

    /// Returns true for a random access device
    pub const fn is_random(self) -> bool {
        matches!(self, AccessMode::Random)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Random => write!(f, "random"),
            AccessMode::Sequential => write!(f, "sequential"),
        }
    }
}
