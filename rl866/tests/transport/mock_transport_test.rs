#[path = "../common/mod.rs"]
mod common;

use rl866::transport::{MockTransport, Transport};

#[test]
fn replies_follow_writes_in_order() {
    let mut m = MockTransport::new();
    m.push_reply(vec![0x01]);
    m.push_reply(vec![0x02]);

    m.write(&[0xa0]).unwrap();
    assert_eq!(m.read_available().unwrap(), vec![0x01]);
    m.write(&[0xa1]).unwrap();
    assert_eq!(m.read_available().unwrap(), vec![0x02]);

    // no more replies: the wire stays quiet
    m.write(&[0xa2]).unwrap();
    assert_eq!(m.bytes_waiting().unwrap(), 0);
    assert_eq!(m.sent(), vec![vec![0xa0], vec![0xa1], vec![0xa2]]);
}

#[test]
fn clones_share_the_wire() {
    let inspector = MockTransport::new();
    let mut boxed: Box<dyn Transport> = Box::new(inspector.clone());
    inspector.push_unsolicited(vec![0xee]);
    assert_eq!(boxed.bytes_waiting().unwrap(), 1);
    boxed.reset().unwrap();
    assert_eq!(inspector.clone().bytes_waiting().unwrap(), 0);
    assert_eq!(inspector.reset_count(), 1);
}
