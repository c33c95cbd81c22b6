#[path = "../common/mod.rs"]
mod common;

use rl866::protocol::{Command, InventoryRequest};
use rl866::types::{AirProtocol, AirProtocolParameter, AntennaSelection, StopTrigger, StopTriggerType};
use rl866::{ConfigSource, ProtocolError};

#[test]
fn read_config_from_rom() {
    let cmd = Command::ReadSystemConfigurationBlock {
        source: ConfigSource::Rom,
        address: 5,
        count: 3,
    };
    assert_eq!(cmd.encode().unwrap(), vec![0x01, 0x85, 0x03]);
}

#[test]
fn read_config_address_out_of_range() {
    let cmd = Command::ReadSystemConfigurationBlock {
        source: ConfigSource::Ram,
        address: 64,
        count: 1,
    };
    assert!(matches!(
        cmd.encode(),
        Err(ProtocolError::InvalidParameter(_))
    ));
}

#[test]
fn inventory_with_all_supported_subfields() {
    let req = InventoryRequest::new()
        .with_antennas(AntennaSelection::new(2).select(2).unwrap())
        .with_stop_trigger(StopTrigger::new(StopTriggerType::TimeoutOnly, 3000, 0))
        .with_new_inventory(true);
    let inf = Command::TagInventory(req).encode().unwrap();
    // flags 0x0d: antennas, stop trigger, new inventory
    assert_eq!(hex::encode(&inf), "310d020203b80b00000000");
}

#[test]
fn minimal_inventory() {
    let inf = Command::TagInventory(InventoryRequest::new()).encode().unwrap();
    assert_eq!(inf, vec![0x31, 0x00]);
}

#[test]
fn continuation_sets_bit_three_and_keeps_subfields() {
    let req = InventoryRequest::new().with_antennas(AntennaSelection::single());
    let next = req.continuation();
    assert_eq!(next.flags(), 0x09);
    assert_eq!(next.antennas, req.antennas);
}

#[test]
fn air_protocol_parameters_unsupported() {
    let mut req = InventoryRequest::new();
    req.air_protocol_parameters.push(AirProtocolParameter {
        protocol: AirProtocol::Iso18000_6C,
        antenna_interface: 0,
        parameter: vec![0x01],
    });
    match Command::TagInventory(req).encode() {
        Err(ProtocolError::Unsupported("air_protocol_parameters")) => {}
        other => panic!("expected Unsupported, got {:?}", other),
    }
}
