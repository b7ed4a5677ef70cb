//! Frame copy between devices
//!
//! Used by the VM layer to move a page between RAM and a swap device.

use ossim_api::{Error, FrameNum, Result};

use crate::memphy::MemPhy;

/// Copy frame `src_fpn` of `src` into frame `dst_fpn` of `dst`.
///
/// Both devices must use the same page size. The source frame is read in
/// full before the destination is locked, so `src` and `dst` may be the same
/// device.
pub fn copy_frame(src: &MemPhy, src_fpn: FrameNum, dst: &MemPhy, dst_fpn: FrameNum) -> Result<()> {
    if src.page_size() != dst.page_size() {
        return Err(Error::InvalidArgument("page size differs between devices"));
    }
    let page = src.read_frame(src_fpn)?;
    dst.write_frame(dst_fpn, &page)?;
    log::debug!("memphy: copied frame {} -> {}", src_fpn, dst_fpn);
    Ok(())
}
