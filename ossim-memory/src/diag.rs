//! Debug views of a memory device
//!
//! Nothing here touches frame accounting or the cursor.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use ossim_api::{AccessMode, FrameNum, Size};

use crate::memphy::MemPhy;

/// Point-in-time view of a device, rendered as the RAM STATUS block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemPhyStatus {
    /// Device size in bytes
    pub max_size: Size,
    /// Frame size in bytes
    pub page_size: Size,
    /// Access mode
    pub mode: AccessMode,
    /// Number of formatted frames
    pub total_frames: usize,
    /// Free list, head first
    pub free_list: Vec<FrameNum>,
    /// Allocated frames, ascending
    pub used_frames: Vec<FrameNum>,
    /// Cursor position
    pub cursor: usize,
    /// Cursor steps taken since creation
    pub seek_steps: u64,
}

fn write_frames(f: &mut fmt::Formatter<'_>, frames: &[FrameNum], sep: &str) -> fmt::Result {
    for (i, fpn) in frames.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", fpn)?;
    }
    Ok(())
}

impl fmt::Display for MemPhyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------------------- RAM STATUS --------------------------------")?;
        writeln!(f, "Ram size: {} byte", self.max_size)?;
        write!(f, "Free list in ram: ")?;
        write_frames(f, &self.free_list, " -> ")?;
        writeln!(f)?;
        write!(f, "Used frames in ram: ")?;
        write_frames(f, &self.used_frames, ", ")?;
        writeln!(f)?;
        write!(f, "-------------------------------------------------------------------------")
    }
}

impl MemPhy {
    /// Raw content, one frame per line. Zero bytes print as `_`.
    pub fn dump(&self) -> String {
        let inner = self.lock();
        let mut out = String::new();
        for fpn in 0..inner.frames.total() {
            let base = fpn * inner.page_size;
            for &byte in &inner.storage[base..base + inner.page_size] {
                let c = if byte == 0 { '_' } else { byte as char };
                out.push(c);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Emit [`MemPhy::dump`] at debug level
    pub fn log_dump(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        log::debug!("RAM DUMP");
        for line in self.dump().lines() {
            log::debug!("{}", line);
        }
    }

    /// Current status snapshot
    pub fn status(&self) -> MemPhyStatus {
        let inner = self.lock();
        MemPhyStatus {
            max_size: self.max_size(),
            page_size: inner.page_size,
            mode: self.mode(),
            total_frames: inner.frames.total(),
            free_list: inner.frames.free_iter().collect(),
            used_frames: inner.frames.used_sorted(),
            cursor: inner.cursor,
            seek_steps: inner.seek_steps,
        }
    }

    /// Emit [`MemPhy::status`] at info level
    pub fn show_status(&self) {
        let mut text = String::new();
        if write!(text, "{}", self.status()).is_ok() {
            for line in text.lines() {
                log::info!("{}", line);
            }
        }
    }
}
