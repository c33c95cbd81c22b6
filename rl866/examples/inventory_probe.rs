#![cfg(feature = "serial")]

//! Probe an RL866 reader: resync, dump configuration block 0 and list every
//! tag in range.
//!
//! Usage:
//!   cargo run -p rl866 --example inventory_probe --features serial -- /dev/ttyUSB0

use rl866::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    let mut session = SessionBuilder::new().with_serial_port(&path)?.build()?;
    println!("Synchronized with reader on {}", path);

    let cfg = session.read_system_configuration(ConfigSource::Ram, 0, 1)?;
    for (i, block) in cfg.blocks().enumerate() {
        println!("config block {}: {}", i, block.to_hex());
    }

    let req = InventoryRequest::new()
        .with_antennas(AntennaSelection::single())
        .with_stop_trigger(StopTrigger::new(StopTriggerType::NoNewTagWithin, 2000, 300));
    let tags = session.inventory_all(&req)?;
    println!("{} tag(s) found", tags.len());

    for (i, tag) in tags.iter().enumerate() {
        let serial = tag
            .serial_number
            .as_ref()
            .map(|s| s.to_hex())
            .unwrap_or_else(|| "-".to_string());
        let protocol = tag
            .air_protocol
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  #{} antenna={:?} protocol={} serial={}",
            i, tag.antenna_id, protocol, serial
        );
        if let Some(mem) = &tag.memory {
            println!("     memory {} bits: {}", mem.bit_count(), mem.to_hex());
        }
    }

    Ok(())
}
