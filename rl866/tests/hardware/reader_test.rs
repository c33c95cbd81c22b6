#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use rl866::prelude::*;
use serial_test::serial;

// These tests require a real reader on the port named by RL866_PORT. They
// are marked `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// RL866_PORT=/dev/ttyUSB0 cargo test -p rl866 --test hardware --features serial -- --ignored

#[test]
#[ignore]
#[serial]
fn resync_and_read_first_config_block() -> Result<()> {
    let Some(mut session) = common::open_synchronized_session()? else {
        return Ok(());
    };
    let cfg = session.read_system_configuration(ConfigSource::Ram, 0, 1)?;
    assert_eq!(cfg.blocks_read(), 1);
    assert_eq!(cfg.data().len(), 14);
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn full_inventory_completes() -> Result<()> {
    let Some(mut session) = common::open_synchronized_session()? else {
        return Ok(());
    };
    let req = InventoryRequest::new()
        .with_antennas(AntennaSelection::single())
        .with_stop_trigger(StopTrigger::new(StopTriggerType::TimeoutOnly, 1000, 0));
    let tags = session.inventory_all(&req)?;
    for tag in &tags {
        assert!(tag.serial_number.is_some() || tag.memory.is_some() || tag.antenna_id.is_some());
    }
    Ok(())
}
