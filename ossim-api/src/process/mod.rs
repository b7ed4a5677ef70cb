//! Process management module

pub mod interface;

pub use interface::*;
