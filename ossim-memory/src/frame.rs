//! Physical frame accounting
//!
//! Frames are tracked by number only. The free list is a LIFO stack whose
//! top is the list head, so the most recently released frame is handed out
//! first. Allocated frames live in a set, which keeps every frame number in
//! exactly one of the two collections.

extern crate alloc;

use alloc::vec::Vec;
use hashbrown::HashSet;

use ossim_api::{Error, FrameNum, Result};

/// Free and used frame lists of one device
#[derive(Debug, Clone, Default)]
pub struct FrameList {
    /// Free frames, head of the list at the end of the vector
    free: Vec<FrameNum>,
    /// Allocated frames
    used: HashSet<FrameNum>,
    /// Number of formatted frames
    total: usize,
}

impl FrameList {
    /// Create a frame-less list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list of `total` free frames with frame 0 at the head
    pub fn formatted(total: usize) -> Self {
        Self {
            free: (0..total).rev().collect(),
            used: HashSet::with_capacity(total),
            total,
        }
    }

    /// Take the head of the free list and mark it used
    pub fn pop_free(&mut self) -> Result<FrameNum> {
        let fpn = self.free.pop().ok_or(Error::OutOfFrames)?;
        self.used.insert(fpn);
        Ok(fpn)
    }

    /// Put a used frame back at the head of the free list
    pub fn push_free(&mut self, fpn: FrameNum) -> Result<()> {
        if fpn >= self.total {
            return Err(Error::InvalidFrame { fpn, frames: self.total });
        }
        if !self.used.remove(&fpn) {
            return Err(Error::FrameNotInUse(fpn));
        }
        self.free.push(fpn);
        Ok(())
    }

    /// Number of formatted frames
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of free frames
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Number of allocated frames
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Whether `fpn` is currently allocated
    pub fn is_used(&self, fpn: FrameNum) -> bool {
        self.used.contains(&fpn)
    }

    /// Free frames in allocation order, list head first
    pub fn free_iter(&self) -> impl Iterator<Item = FrameNum> + '_ {
        self.free.iter().rev().copied()
    }

    /// Allocated frames in ascending order
    pub fn used_sorted(&self) -> Vec<FrameNum> {
        let mut used: Vec<FrameNum> = self.used.iter().copied().collect();
        used.sort_unstable();
        used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_formatted_order() {
        let list = FrameList::formatted(4);
        assert_eq!(list.total(), 4);
        assert_eq!(list.free_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(list.used_count(), 0);
    }

    #[test]
    fn test_pop_push_lifo() {
        let mut list = FrameList::formatted(3);
        assert_eq!(list.pop_free(), Ok(0));
        assert_eq!(list.pop_free(), Ok(1));
        assert!(list.is_used(1));
        list.push_free(0).unwrap();
        assert_eq!(list.free_iter().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(list.pop_free(), Ok(0));
        assert_eq!(list.used_sorted(), vec![0, 1]);
    }

    #[test]
    fn test_exhaustion_and_bad_release() {
        let mut list = FrameList::formatted(1);
        assert_eq!(list.pop_free(), Ok(0));
        assert_eq!(list.pop_free(), Err(Error::OutOfFrames));
        assert_eq!(list.push_free(5), Err(Error::InvalidFrame { fpn: 5, frames: 1 }));
        list.push_free(0).unwrap();
        assert_eq!(list.push_free(0), Err(Error::FrameNotInUse(0)));
        assert_eq!(list.free_count(), 1);
    }

    #[test]
    fn test_frameless() {
        let mut list = FrameList::new();
        assert_eq!(list.total(), 0);
        assert_eq!(list.pop_free(), Err(Error::OutOfFrames));
    }
}
