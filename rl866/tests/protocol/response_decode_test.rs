#[path = "../common/mod.rs"]
mod common;

use rl866::protocol::ByteCursor;
use rl866::protocol::responses::decode_tag_record;
use rl866::protocol::{Response, StopReason};
use rl866::{AirProtocol, ProtocolError};

#[test]
fn config_response_decodes_blocks() {
    let inf = common::fixtures::config_inf(&[
        common::fixtures::sample_block(0x11),
        common::fixtures::sample_block(0x22),
    ]);
    match Response::decode(0x01, &inf).unwrap() {
        Response::ReadSystemConfigurationBlock(cfg) => {
            assert_eq!(cfg.blocks_read(), 2);
            assert_eq!(cfg.data().len(), 2 * 14);
            let blocks: Vec<_> = cfg.blocks().collect();
            assert_eq!(blocks[0].as_bytes(), &common::fixtures::sample_block(0x11));
            assert_eq!(blocks[1].as_bytes(), &common::fixtures::sample_block(0x22));
        }
        other => panic!("expected configuration response, got {:?}", other),
    }
}

#[test]
fn config_response_short_by_one_byte() {
    let mut inf = common::fixtures::config_inf(&[
        common::fixtures::sample_block(0x11),
        common::fixtures::sample_block(0x22),
    ]);
    inf.pop();
    assert!(matches!(
        Response::decode(0x01, &inf),
        Err(ProtocolError::LengthMismatch {
            expected: 28,
            actual: 27
        })
    ));
}

#[test]
fn flag_driven_record_parse() {
    let bytes = hex::decode("090102aabb").unwrap();
    let mut cur = ByteCursor::new(&bytes);
    let tag = decode_tag_record(&mut cur).unwrap();
    assert_eq!(tag.antenna_id, Some(1));
    assert!(tag.air_protocol.is_none());
    assert!(tag.tag_type_id.is_none());
    assert_eq!(tag.serial_number.unwrap().as_bytes(), &[0xAA, 0xBB]);
    assert!(tag.memory.is_none());
    assert_eq!(cur.position(), 1 + 4);
}

#[test]
fn full_record_round() {
    let inf = common::fixtures::inventory_inf(0, 1, &[common::fixtures::full_record()]);
    let result = match Response::decode(0x31, &inf).unwrap() {
        Response::TagInventory(r) => r,
        other => panic!("expected inventory response, got {:?}", other),
    };
    assert_eq!(result.stop_reason, StopReason::Completed);
    let tag = &result.tags[0];
    assert_eq!(tag.air_protocol, Some(AirProtocol::Iso18000_6C));
    assert_eq!(tag.tag_type_id, Some(2));
    assert_eq!(tag.serial_number.as_ref().unwrap().to_hex(), "0x1180e2");
    let mem = tag.memory.as_ref().unwrap();
    assert_eq!(mem.bit_count(), 5);
    assert_eq!(mem.as_bytes(), &[0x0d]);
}

#[test]
fn tags_keep_discovery_order() {
    let records = vec![
        common::fixtures::antenna_serial_record(1, &[0x01]),
        common::fixtures::antenna_serial_record(2, &[0x02, 0x00]),
        common::fixtures::antenna_serial_record(1, &[]),
    ];
    let inf = common::fixtures::inventory_inf(0, 7, &records);
    let Response::TagInventory(result) = Response::decode(0x31, &inf).unwrap() else {
        panic!("expected inventory response");
    };
    assert_eq!(result.total_tags_buffered, 7);
    assert_eq!(result.tags_transmitted, 3);
    let serials: Vec<_> = result
        .tags
        .iter()
        .map(|t| t.serial_number.as_ref().unwrap().as_bytes().to_vec())
        .collect();
    assert_eq!(serials, vec![vec![0x01], vec![0x02, 0x00], vec![]]);
}

#[test]
fn declared_two_tags_but_one_sent() {
    let mut inf = common::fixtures::inventory_inf(
        0,
        2,
        &[common::fixtures::antenna_serial_record(1, &[0xAA, 0xBB])],
    );
    // patch transmitted count
    inf[4] = 2;
    match Response::decode(0x31, &inf) {
        Err(ProtocolError::Truncated { .. }) => {}
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn echoed_code_must_match() {
    let inf = common::fixtures::inventory_inf(0, 0, &[]);
    assert!(matches!(
        Response::decode(0x01, &inf),
        Err(ProtocolError::UnexpectedResponse {
            expected: 0x01,
            actual: 0x31
        })
    ));
}
