#[path = "../common/mod.rs"]
mod common;

use rl866::protocol::{BlockType, Frame, codec};
use rl866::{ProtocolError, ResourceId};

#[test]
fn decode_envelope_splits_header_and_payload() {
    let bytes = hex::decode("400731010203").unwrap();
    let frame = codec::decode_envelope(&bytes).unwrap();
    assert_eq!(frame.pcb(), 0x40);
    assert_eq!(frame.resource_id(), ResourceId::new(0x07));
    assert_eq!(frame.block_type().unwrap(), BlockType::Information);
    assert_eq!(frame.sequence_bit(), 1);
    assert_eq!(frame.command_code(), Some(0x31));
    assert_eq!(frame.parameter_field(), &[0x01, 0x02, 0x03]);
    assert_eq!(frame.serialize(), bytes);
}

#[test]
fn one_byte_is_truncated() {
    match Frame::decode_envelope(&[0x00]) {
        Err(ProtocolError::Truncated {
            needed: 2,
            available: 1,
        }) => {}
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn reserved_block_type_rejected() {
    let frame = Frame::decode_envelope(&[0x80, 0x00]).unwrap();
    assert!(matches!(
        frame.block_type(),
        Err(ProtocolError::InvalidFrame(_))
    ));
}

#[test]
fn serialization_is_deterministic() {
    let frame = Frame::new(0x00, ResourceId::new(0x01), vec![0x01, 0x85, 0x03]);
    assert_eq!(frame.serialize(), frame.serialize());
    assert_eq!(hex::encode(frame.serialize()), "0001018503");
}
