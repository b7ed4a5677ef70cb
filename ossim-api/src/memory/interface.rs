//! Memory device interface

use crate::core::types::{AccessMode, FrameNum, PhysAddr, Size};
use crate::error::Result;

/// Trait for frame allocator
///
/// Implemented by physical devices that hand out whole frames to the
/// virtual memory layer.
pub trait FrameAllocator {
    /// Allocates a frame
    fn alloc_frame(&self) -> Result<FrameNum>;

    /// Returns a frame to the free list
    fn free_frame(&self, fpn: FrameNum) -> Result<()>;

    /// Returns number of free frames
    fn free_frames(&self) -> usize;

    /// Returns total number of frames
    fn total_frames(&self) -> usize;

    /// Returns frame size
    fn page_size(&self) -> Size;
}

/// Trait for byte addressable memory device
pub trait MemoryDevice {
    /// Reads one byte
    fn read_byte(&self, addr: PhysAddr) -> Result<u8>;

    /// Writes one byte
    fn write_byte(&self, addr: PhysAddr, value: u8) -> Result<()>;

    /// Returns device size in bytes
    fn size(&self) -> Size;

    /// Returns device access mode
    fn mode(&self) -> AccessMode;
}
