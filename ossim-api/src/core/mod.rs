//! Core types shared by simulator components

pub mod types;

pub use types::*;
