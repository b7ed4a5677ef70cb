//! Physical memory device (MEMPHY)
//!
//! A fixed-size byte store formatted into page frames. A device is either
//! random access, where any address is read or written directly, or
//! sequential, where every access first walks an internal cursor from
//! position 0 to the target address.
//!
//! All state sits behind one `spin::Mutex` per device, so frame accounting,
//! cursor movement and raw storage access for a device are serialized.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use spin::{Mutex, MutexGuard};

use ossim_api::config::MemPhyConfig;
use ossim_api::{AccessMode, Error, FrameAllocator, FrameNum, MemoryDevice, PhysAddr, Result, Size};

use crate::frame::FrameList;

/// Mutable device state, guarded by the device lock
pub(crate) struct MemPhyInner {
    pub(crate) storage: Vec<u8>,
    pub(crate) frames: FrameList,
    pub(crate) page_size: Size,
    pub(crate) cursor: usize,
    pub(crate) seek_steps: u64,
}

impl MemPhyInner {
    fn format(&mut self, page_size: Size) -> Result<usize> {
        let max_size = self.storage.len();
        let frames = if page_size == 0 { 0 } else { max_size / page_size };
        if frames == 0 {
            self.frames = FrameList::new();
            return Err(Error::FormatUnfit { max_size, page_size });
        }
        self.frames = FrameList::formatted(frames);
        self.page_size = page_size;
        Ok(frames)
    }

    /// Walk the cursor from 0 towards `offset`, one position per step.
    fn move_cursor(&mut self, offset: usize) -> usize {
        let max_size = self.storage.len();
        let mut steps = 0;
        self.cursor = 0;
        while steps < offset && steps < max_size {
            self.cursor = (self.cursor + 1) % max_size;
            steps += 1;
        }
        self.seek_steps += steps as u64;
        log::trace!("memphy: cursor moved to {:#x} in {} steps", self.cursor, steps);
        steps
    }

    pub(crate) fn load(&mut self, mode: AccessMode, addr: PhysAddr) -> u8 {
        if mode == AccessMode::Sequential {
            self.move_cursor(addr);
        }
        self.storage[addr]
    }

    pub(crate) fn store(&mut self, mode: AccessMode, addr: PhysAddr, value: u8) {
        if mode == AccessMode::Sequential {
            self.move_cursor(addr);
        }
        self.storage[addr] = value;
    }

    fn frame_base(&self, fpn: FrameNum) -> Result<PhysAddr> {
        if fpn >= self.frames.total() {
            return Err(Error::InvalidFrame { fpn, frames: self.frames.total() });
        }
        Ok(fpn * self.page_size)
    }
}

/// Snapshot of frame accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemPhyStats {
    /// Device size in bytes
    pub max_size: Size,
    /// Frame size in bytes
    pub page_size: Size,
    /// Number of formatted frames
    pub total_frames: usize,
    /// Number of frames on the free list
    pub free_frames: usize,
    /// Number of allocated frames
    pub used_frames: usize,
}

/// A physical memory device
pub struct MemPhy {
    inner: Mutex<MemPhyInner>,
    max_size: Size,
    mode: AccessMode,
}

impl MemPhy {
    /// Create and format a device.
    ///
    /// A page size that yields no whole frame leaves the device frame-less;
    /// raw reads and writes still work.
    pub fn new(config: MemPhyConfig) -> Result<Self> {
        config.validate()?;

        let mut inner = MemPhyInner {
            storage: vec![0; config.max_size],
            frames: FrameList::new(),
            page_size: config.page_size,
            cursor: 0,
            seek_steps: 0,
        };
        match inner.format(config.page_size) {
            Ok(frames) => log::info!(
                "memphy: {} device of {} bytes formatted into {} frames of {} bytes",
                config.mode,
                config.max_size,
                frames,
                config.page_size
            ),
            Err(err) => log::warn!("memphy: {} device left frame-less: {}", config.mode, err),
        }

        Ok(Self {
            inner: Mutex::new(inner),
            max_size: config.max_size,
            mode: config.mode,
        })
    }

    /// Create a device with the default page size, mirroring `init_memphy(mp, size, rdmflg)`
    pub fn with_size(max_size: Size, mode: AccessMode) -> Result<Self> {
        let config = match mode {
            AccessMode::Random => MemPhyConfig::random(max_size),
            AccessMode::Sequential => MemPhyConfig::sequential(max_size),
        };
        Self::new(config)
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, MemPhyInner> {
        self.inner.lock()
    }

    /// Device size in bytes
    pub fn max_size(&self) -> Size {
        self.max_size
    }

    /// Device access mode
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Current frame size
    pub fn page_size(&self) -> Size {
        self.lock().page_size
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.lock().cursor
    }

    /// Total cursor steps taken since creation
    pub fn seek_steps(&self) -> u64 {
        self.lock().seek_steps
    }

    /// Re-format the device into frames of `page_size` bytes.
    ///
    /// Every frame returns to the free list. On failure the device is left
    /// frame-less.
    pub fn format(&self, page_size: Size) -> Result<usize> {
        let frames = self.lock().format(page_size).inspect_err(|err| {
            log::warn!("memphy: format failed: {}", err);
        })?;
        log::info!("memphy: formatted into {} frames of {} bytes", frames, page_size);
        Ok(frames)
    }

    /// Move the cursor to `offset`, starting from 0. Returns the steps taken.
    pub fn move_cursor(&self, offset: usize) -> usize {
        self.lock().move_cursor(offset)
    }

    fn check_addr(&self, addr: PhysAddr) -> Result<()> {
        if addr >= self.max_size {
            return Err(Error::AddressOutOfRange { addr, size: self.max_size });
        }
        Ok(())
    }

    fn require_mode(&self, expected: AccessMode) -> Result<()> {
        if self.mode != expected {
            return Err(Error::ModeMismatch { expected, actual: self.mode });
        }
        Ok(())
    }

    /// Read through the cursor; only valid on a sequential device
    pub fn seq_read(&self, addr: PhysAddr) -> Result<u8> {
        self.require_mode(AccessMode::Sequential)?;
        self.check_addr(addr)?;
        Ok(self.lock().load(AccessMode::Sequential, addr))
    }

    /// Write through the cursor; only valid on a sequential device
    pub fn seq_write(&self, addr: PhysAddr, value: u8) -> Result<()> {
        self.require_mode(AccessMode::Sequential)?;
        self.check_addr(addr)?;
        self.lock().store(AccessMode::Sequential, addr, value);
        Ok(())
    }

    /// Indexed read; only valid on a random access device
    pub fn direct_read(&self, addr: PhysAddr) -> Result<u8> {
        self.require_mode(AccessMode::Random)?;
        self.check_addr(addr)?;
        Ok(self.lock().load(AccessMode::Random, addr))
    }

    /// Indexed write; only valid on a random access device
    pub fn direct_write(&self, addr: PhysAddr, value: u8) -> Result<()> {
        self.require_mode(AccessMode::Random)?;
        self.check_addr(addr)?;
        self.lock().store(AccessMode::Random, addr, value);
        Ok(())
    }

    /// Read one byte using the device's access mode
    pub fn read(&self, addr: PhysAddr) -> Result<u8> {
        match self.mode {
            AccessMode::Random => self.direct_read(addr),
            AccessMode::Sequential => self.seq_read(addr),
        }
    }

    /// Write one byte using the device's access mode
    pub fn write(&self, addr: PhysAddr, value: u8) -> Result<()> {
        match self.mode {
            AccessMode::Random => self.direct_write(addr, value),
            AccessMode::Sequential => self.seq_write(addr, value),
        }
    }

    /// Take a frame off the free list. The frame content is left as is.
    pub fn get_free_frame(&self) -> Result<FrameNum> {
        let fpn = self.lock().frames.pop_free()?;
        log::debug!("memphy: allocated frame {}", fpn);
        Ok(fpn)
    }

    /// Return a frame to the head of the free list
    pub fn put_free_frame(&self, fpn: FrameNum) -> Result<()> {
        self.lock().frames.push_free(fpn).inspect_err(|err| {
            log::warn!("memphy: rejected release of frame {}: {}", fpn, err);
        })?;
        log::debug!("memphy: released frame {}", fpn);
        Ok(())
    }

    /// Byte address of the first byte of frame `fpn`
    pub fn frame_base(&self, fpn: FrameNum) -> Result<PhysAddr> {
        self.lock().frame_base(fpn)
    }

    /// Copy out one whole frame under a single lock acquisition
    pub fn read_frame(&self, fpn: FrameNum) -> Result<Vec<u8>> {
        let mut inner = self.lock();
        let base = inner.frame_base(fpn)?;
        let page_size = inner.page_size;
        Ok((base..base + page_size).map(|addr| inner.load(self.mode, addr)).collect())
    }

    /// Overwrite one whole frame; `data` must be exactly one page long
    pub fn write_frame(&self, fpn: FrameNum, data: &[u8]) -> Result<()> {
        let mut inner = self.lock();
        let base = inner.frame_base(fpn)?;
        if data.len() != inner.page_size {
            return Err(Error::InvalidArgument("frame data length differs from page size"));
        }
        for (offset, &value) in data.iter().enumerate() {
            inner.store(self.mode, base + offset, value);
        }
        Ok(())
    }

    /// Frame accounting snapshot
    pub fn stats(&self) -> MemPhyStats {
        let inner = self.lock();
        MemPhyStats {
            max_size: self.max_size,
            page_size: inner.page_size,
            total_frames: inner.frames.total(),
            free_frames: inner.frames.free_count(),
            used_frames: inner.frames.used_count(),
        }
    }
}

impl FrameAllocator for MemPhy {
    fn alloc_frame(&self) -> Result<FrameNum> {
        self.get_free_frame()
    }

    fn free_frame(&self, fpn: FrameNum) -> Result<()> {
        self.put_free_frame(fpn)
    }

    fn free_frames(&self) -> usize {
        self.lock().frames.free_count()
    }

    fn total_frames(&self) -> usize {
        self.lock().frames.total()
    }

    fn page_size(&self) -> Size {
        MemPhy::page_size(self)
    }
}

impl MemoryDevice for MemPhy {
    fn read_byte(&self, addr: PhysAddr) -> Result<u8> {
        self.read(addr)
    }

    fn write_byte(&self, addr: PhysAddr, value: u8) -> Result<()> {
        self.write(addr, value)
    }

    fn size(&self) -> Size {
        self.max_size
    }

    fn mode(&self) -> AccessMode {
        self.mode
    }
}
