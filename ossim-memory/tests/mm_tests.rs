//! Memory device tests

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use proptest::prelude::*;

use ossim_memory::config::MemPhyConfig;
use ossim_memory::{AccessMode, Error, FrameAllocator, MemPhy};

fn device(mode: AccessMode, size: usize, page_size: usize) -> MemPhy {
    let config = match mode {
        AccessMode::Random => MemPhyConfig::random(size),
        AccessMode::Sequential => MemPhyConfig::sequential(size),
    };
    MemPhy::new(config.with_page_size(page_size)).unwrap()
}

#[test]
fn test_sixteen_frame_scenario() {
    let mp = device(AccessMode::Random, 1024, 64);
    let status = mp.status();
    assert_eq!(status.free_list, (0..16).collect::<Vec<_>>());

    let frames: Vec<_> = (0..16).map(|_| mp.get_free_frame().unwrap()).collect();
    assert_eq!(frames, (0..16).collect::<Vec<_>>());
    assert_eq!(mp.get_free_frame(), Err(Error::OutOfFrames));
    assert!(mp.status().free_list.is_empty());
    assert_eq!(mp.status().used_frames, frames);
}

#[test]
fn test_default_page_size() {
    let mp = MemPhy::with_size(1024, AccessMode::Sequential).unwrap();
    assert_eq!(mp.page_size(), ossim_memory::config::PAGING_PAGESZ);
    assert_eq!(mp.total_frames(), 4);
    assert_eq!(mp.cursor(), 0);
}

#[test]
fn test_page_larger_than_device() {
    let mp = device(AccessMode::Random, 100, 256);
    assert_eq!(mp.format(256), Err(Error::FormatUnfit { max_size: 100, page_size: 256 }));
    assert!(mp.status().free_list.is_empty());
    assert_eq!(mp.get_free_frame(), Err(Error::OutOfFrames));
}

#[test]
fn test_sequential_cursor_resets_each_access() {
    let mp = device(AccessMode::Sequential, 256, 64);
    for addr in [200, 3, 255, 0, 128] {
        mp.read(addr).unwrap();
        assert_eq!(mp.cursor(), addr);
    }
    assert_eq!(mp.seek_steps(), 200 + 3 + 255 + 128);
}

#[test]
fn test_concurrent_allocation() {
    let mp = Arc::new(device(AccessMode::Random, 64 * 256, 64));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mp = Arc::clone(&mp);
            thread::spawn(move || {
                let mut mine = Vec::new();
                while let Ok(fpn) = mp.get_free_frame() {
                    mp.write(mp.frame_base(fpn).unwrap(), 1).unwrap();
                    mine.push(fpn);
                }
                mine
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for fpn in handle.join().unwrap() {
            assert!(seen.insert(fpn), "frame {} handed out twice", fpn);
        }
    }
    assert_eq!(seen.len(), 256);
    assert_eq!(mp.stats().used_frames, 256);
}

#[derive(Debug, Clone)]
enum Op {
    Alloc,
    Release(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Alloc), (0usize..32).prop_map(Op::Release)]
}

proptest! {
    #[test]
    fn prop_no_double_allocation(ops in prop::collection::vec(op(), 0..200)) {
        let mp = device(AccessMode::Random, 16 * 32, 16);
        let mut outstanding: Vec<usize> = Vec::new();
        for op in ops {
            match op {
                Op::Alloc => match mp.get_free_frame() {
                    Ok(fpn) => {
                        prop_assert!(!outstanding.contains(&fpn));
                        outstanding.push(fpn);
                    }
                    Err(err) => {
                        prop_assert_eq!(err, Error::OutOfFrames);
                        prop_assert_eq!(outstanding.len(), 32);
                    }
                },
                Op::Release(i) => {
                    if outstanding.is_empty() {
                        continue;
                    }
                    let fpn = outstanding.remove(i % outstanding.len());
                    mp.put_free_frame(fpn).unwrap();
                    // Most recently released frame comes back first.
                    let again = mp.get_free_frame().unwrap();
                    prop_assert_eq!(again, fpn);
                    mp.put_free_frame(again).unwrap();
                }
            }
            let stats = mp.stats();
            prop_assert_eq!(stats.used_frames, outstanding.len());
            prop_assert_eq!(stats.free_frames + stats.used_frames, stats.total_frames);
        }
    }

    #[test]
    fn prop_round_trip(random in any::<bool>(), writes in prop::collection::vec((0usize..512, any::<u8>()), 1..64)) {
        let mode = if random { AccessMode::Random } else { AccessMode::Sequential };
        let mp = device(mode, 512, 64);
        for (addr, value) in writes {
            mp.write(addr, value).unwrap();
            prop_assert_eq!(mp.read(addr).unwrap(), value);
            if mode == AccessMode::Sequential {
                prop_assert_eq!(mp.cursor(), addr);
            }
        }
    }
}
