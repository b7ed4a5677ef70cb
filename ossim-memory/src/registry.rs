//! Global memory device registry
//!
//! Devices are registered once and referred to by id afterwards, which is
//! how the surrounding VM layer and CPU threads share the RAM and swap
//! devices. An id that was never handed out is reported as
//! [`Error::InvalidStore`].

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use spin::Mutex;

use ossim_api::config::MemPhyConfig;
use ossim_api::{Error, FrameNum, PhysAddr, Result, Size};

use crate::diag::MemPhyStatus;
use crate::memphy::MemPhy;

struct MemPhyRegistry {
    devices: Vec<Arc<MemPhy>>,
}

impl MemPhyRegistry {
    const fn new() -> Self {
        Self { devices: Vec::new() }
    }
}

static MEMPHY_REGISTRY: Mutex<MemPhyRegistry> = Mutex::new(MemPhyRegistry::new());

/// Create a device and register it globally
pub fn memphy_create(config: MemPhyConfig) -> Result<usize> {
    let device = MemPhy::new(config)?;
    Ok(memphy_register(Arc::new(device)))
}

/// Register an existing device and return its id
pub fn memphy_register(device: Arc<MemPhy>) -> usize {
    let mut registry = MEMPHY_REGISTRY.lock();
    let id = registry.devices.len();
    registry.devices.push(device);
    log::debug!("memphy: registered device {}", id);
    id
}

/// Look up a registered device
pub fn memphy_get(id: usize) -> Result<Arc<MemPhy>> {
    // Clone the handle so the registry lock is dropped before the device lock is taken.
    MEMPHY_REGISTRY
        .lock()
        .devices
        .get(id)
        .cloned()
        .ok_or(Error::InvalidStore(id))
}

/// Run `f` against a registered device
pub fn with_memphy<F, R>(id: usize, f: F) -> Result<R>
where
    F: FnOnce(&MemPhy) -> R,
{
    let device = memphy_get(id)?;
    Ok(f(&device))
}

/// Read a byte from a registered device
pub fn memphy_read(id: usize, addr: PhysAddr) -> Result<u8> {
    memphy_get(id)?.read(addr)
}

/// Write a byte to a registered device
pub fn memphy_write(id: usize, addr: PhysAddr, value: u8) -> Result<()> {
    memphy_get(id)?.write(addr, value)
}

/// Format a registered device
pub fn memphy_format(id: usize, page_size: Size) -> Result<usize> {
    memphy_get(id)?.format(page_size)
}

/// Allocate a frame from a registered device
pub fn memphy_get_freefp(id: usize) -> Result<FrameNum> {
    memphy_get(id)?.get_free_frame()
}

/// Release a frame to a registered device
pub fn memphy_put_freefp(id: usize, fpn: FrameNum) -> Result<()> {
    memphy_get(id)?.put_free_frame(fpn)
}

/// Status of a registered device
pub fn memphy_status(id: usize) -> Result<MemPhyStatus> {
    Ok(memphy_get(id)?.status())
}
