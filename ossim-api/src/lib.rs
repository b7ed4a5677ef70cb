//! OSSIM API - Core interfaces and types for the OS simulator core
//!
//! This crate provides the vocabulary shared by the simulator components:
//! the physical memory device (`ossim-memory`) and the scheduler ready queue
//! (`ossim-sched`). Neither component depends on the other; both depend on
//! the types defined here.
//!
//! # Architecture
//!
//! - **Core**: address and frame number types, device access modes
//! - **Error**: the common error type and `Result` alias
//! - **Config**: compile-time defaults and construction-time configuration
//! - **Memory**: frame allocator and byte device interfaces
//! - **Process**: process queue interface
//!
//! # Usage
//!
//! ```rust
//! use ossim_api::config::MemPhyConfig;
//! use ossim_api::AccessMode;
//!
//! let config = MemPhyConfig::sequential(1024).with_page_size(64);
//! assert_eq!(config.mode, AccessMode::Sequential);
//! assert!(config.validate().is_ok());
//! ```

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

// Core modules
pub mod core;
pub mod error;
pub mod config;
pub mod memory;
pub mod process;

// Re-export commonly used types
pub use crate::core::types::*;
pub use crate::error::{Error, Result};
pub use crate::memory::interface::{FrameAllocator, MemoryDevice};
pub use crate::process::interface::ProcessQueue;
