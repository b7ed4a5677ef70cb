//! OSSIM Memory
//!
//! This crate provides the physical memory device of the simulator's paging
//! memory manager: a byte store formatted into fixed-size frames, with free
//! and used frame accounting and random or sequential access semantics.
//!
//! # Usage
//!
//! ```rust
//! use ossim_api::config::MemPhyConfig;
//! use ossim_memory::MemPhy;
//!
//! let ram = MemPhy::new(MemPhyConfig::random(1024).with_page_size(64))?;
//! let fpn = ram.get_free_frame()?;
//! let base = ram.frame_base(fpn)?;
//! ram.write(base, b'A')?;
//! assert_eq!(ram.read(base)?, b'A');
//! ram.put_free_frame(fpn)?;
//! # Ok::<(), ossim_api::Error>(())
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

extern crate alloc;

#[cfg(test)]
extern crate std;

// Re-export API types
pub use ossim_api::*;

pub mod frame;
pub mod memphy;
pub mod diag;
pub mod registry;
pub mod swap;

pub use frame::FrameList;
pub use memphy::{MemPhy, MemPhyStats};
pub use diag::MemPhyStatus;
pub use registry::{
    memphy_create, memphy_format, memphy_get, memphy_get_freefp, memphy_put_freefp, memphy_read,
    memphy_register, memphy_status, memphy_write, with_memphy,
};
pub use swap::copy_frame;
