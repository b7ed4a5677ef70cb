//! API tests

use ossim_api::config::{MemPhyConfig, QueueConfig, DEFAULT_TIMESLOT, MAX_QUEUE_SIZE, PAGING_PAGESZ};
use ossim_api::{AccessMode, Error};

#[test]
fn test_config_builders() {
    let ram = MemPhyConfig::random(4096);
    assert_eq!(ram.mode, AccessMode::Random);
    assert_eq!(ram.page_size, PAGING_PAGESZ);
    assert_eq!(ram.frame_count(), 4096 / PAGING_PAGESZ);

    let swap = MemPhyConfig::sequential(1024).with_page_size(64);
    assert_eq!(swap.mode, AccessMode::Sequential);
    assert_eq!(swap.frame_count(), 16);

    let queue = QueueConfig::default().with_capacity(3).with_timeslot(7);
    assert_eq!(queue.capacity, 3);
    assert_eq!(queue.timeslot, 7);
    assert_eq!(QueueConfig::default().capacity, MAX_QUEUE_SIZE);
    assert_eq!(QueueConfig::default().timeslot, DEFAULT_TIMESLOT);
}

#[test]
fn test_frameless_config_is_valid() {
    // A page larger than the device leaves it frame-less but still usable.
    let config = MemPhyConfig::random(128).with_page_size(256);
    assert_eq!(config.frame_count(), 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_error_equality() {
    assert_eq!(Error::InvalidStore(2), Error::InvalidStore(2));
    assert_ne!(Error::InvalidStore(2), Error::InvalidStore(3));
    assert_eq!(
        Error::FormatUnfit { max_size: 64, page_size: 128 }.to_string(),
        "Format unfit: page size 128 yields no frame in 64 bytes"
    );
}
