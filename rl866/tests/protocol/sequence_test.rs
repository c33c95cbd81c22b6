#[path = "../common/mod.rs"]
mod common;

use rl866::protocol::{SequenceState, build_request, build_resync};
use rl866::{ProtocolError, ResourceId};

#[test]
fn fresh_session_stamps_zero_one_zero() {
    let mut seq = SequenceState::new();
    let rid = ResourceId::default();
    let bits: Vec<u8> = (0..3)
        .map(|_| build_request(&mut seq, rid, vec![0x01, 0x00, 0x01]).unwrap().sequence_bit())
        .collect();
    assert_eq!(bits, [0, 1, 0]);
}

#[test]
fn resync_between_requests_restarts_at_zero() {
    let mut seq = SequenceState::new();
    let rid = ResourceId::default();
    build_request(&mut seq, rid, vec![0x31, 0x00]).unwrap();
    let resync = build_resync(&mut seq, rid);
    assert!(resync.information_field().is_empty());
    let f = build_request(&mut seq, rid, vec![0x31, 0x00]).unwrap();
    assert_eq!(f.sequence_bit(), 0);
}

#[test]
fn resync_twice_is_same_as_once() {
    let mut seq = SequenceState::with_raw(1);
    let rid = ResourceId::new(0x02);
    let a = build_resync(&mut seq, rid);
    let after_one = seq;
    let b = build_resync(&mut seq, rid);
    assert_eq!(a, b);
    assert_eq!(seq, after_one);
    assert_eq!(seq.current().unwrap(), 0);
}

#[test]
fn out_of_range_sequence_fails_fast() {
    for raw in [2u8, 0x40, 0xff] {
        let mut seq = SequenceState::with_raw(raw);
        match build_request(&mut seq, ResourceId::default(), vec![0x31, 0x00]) {
            Err(ProtocolError::InvalidState(_)) => {}
            other => panic!("expected InvalidState, got {:?}", other),
        }
    }
}
