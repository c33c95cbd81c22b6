#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use rl866::session::{Session, SessionBuilder, SessionConfig};
use rl866::test_support::{fast_config, resync_reply};
use rl866::transport::MockTransport;
use rl866::{ProtocolError, ResourceId};

#[test]
fn resynchronize_sends_s_block_and_transitions() -> Result<()> {
    common::init_logger();
    let mock = MockTransport::new();
    mock.push_reply(resync_reply(ResourceId::new(0x09)));

    let session = SessionBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_config(fast_config())
        .resource_id(ResourceId::new(0x09))
        .build_unsynchronized()?;
    assert_eq!(session.resource_id(), ResourceId::new(0x09));

    let synced = session.resynchronize()?;
    assert_eq!(mock.sent(), vec![vec![0xC0, 0x09]]);
    assert_eq!(mock.reset_count(), 1);
    assert_eq!(synced.sequence().current()?, 0);
    Ok(())
}

#[test]
fn resync_resets_nonzero_initial_sequence() -> Result<()> {
    let mock = MockTransport::new();
    mock.push_reply(resync_reply(ResourceId::default()));
    let config = SessionConfig {
        initial_sequence: 1,
        ..fast_config()
    };
    let synced = Session::new(Box::new(mock), config).resynchronize()?;
    assert_eq!(synced.sequence().raw(), 0);
    Ok(())
}

#[test]
fn resync_reply_with_wrong_rid() {
    let mock = MockTransport::new();
    mock.push_reply(resync_reply(ResourceId::new(0x01)));
    let res = Session::new(Box::new(mock), fast_config()).resynchronize();
    assert!(matches!(
        res.err(),
        Some(ProtocolError::ResourceMismatch {
            expected: 0x00,
            actual: 0x01
        })
    ));
}

#[test]
fn silent_reader_times_out_resync() {
    let res = Session::new(Box::new(MockTransport::new()), fast_config()).resynchronize();
    assert!(matches!(res.err(), Some(ProtocolError::Timeout)));
}

#[test]
fn repeated_resync_is_idempotent() -> Result<()> {
    let (mut session, mock) = rl866::test_support::synchronized_mock_session()?;
    for _ in 0..3 {
        mock.push_reply(resync_reply(ResourceId::default()));
        session.resync()?;
        assert_eq!(session.sequence().current()?, 0);
    }
    let sent = mock.sent();
    assert_eq!(sent.len(), 4);
    assert!(sent.iter().all(|f| f == &vec![0xC0, 0x00]));
    Ok(())
}
