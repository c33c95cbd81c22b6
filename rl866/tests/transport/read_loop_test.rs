#[path = "../common/mod.rs"]
mod common;

use std::thread;
use std::time::{Duration, Instant};

use rl866::transport::{MockTransport, ReadPolicy, ShutdownSignal, Transport, read_response};
use rl866::utils::ms;
use rl866::ProtocolError;

fn policy(timeout_ms: u64) -> ReadPolicy {
    ReadPolicy {
        timeout: ms(timeout_ms),
        poll_interval: ms(2),
        burst_delay: ms(2),
    }
}

#[test]
fn response_split_across_two_reads_is_joined() {
    common::init_logger();
    let mut m = MockTransport::new();
    m.push_split_reply(hex::decode("0000310000").unwrap(), hex::decode("0000").unwrap());
    m.write(&[0x00, 0x00, 0x31, 0x00]).unwrap();

    let got = read_response(&mut m, &policy(100), &ShutdownSignal::new()).unwrap();
    assert_eq!(hex::encode(got), "00003100000000");
}

#[test]
fn timeout_respects_deadline() {
    let mut m = MockTransport::new();
    let start = Instant::now();
    let err = read_response(&mut m, &policy(40), &ShutdownSignal::new()).unwrap_err();
    assert!(matches!(err, ProtocolError::Timeout));
    assert!(start.elapsed() >= Duration::from_millis(40));
}

#[test]
fn shutdown_from_another_thread() {
    let mut m = MockTransport::new();
    let signal = ShutdownSignal::new();
    let remote = signal.clone();

    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        remote.trigger();
    });

    let start = Instant::now();
    let err = read_response(&mut m, &policy(10_000), &signal).unwrap_err();
    stopper.join().unwrap();

    assert!(matches!(err, ProtocolError::Cancelled));
    assert!(start.elapsed() < Duration::from_secs(5));
}
