// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]


/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
