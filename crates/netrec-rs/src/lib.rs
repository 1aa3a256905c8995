//! Public surface for the networking recommendations lookup.
//!
//! This crate re-exports the building blocks and hosts the command
//! implementations behind the `netrec` binary.

pub mod commands;

/// Re-export for convenience.
pub use netrec_rs_config as config;
pub use netrec_rs_core as core;
/// Re-export for convenience.
pub use netrec_rs_tui as tui;

#[inline]
/// Initialize logging with `env_logger`, honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
}
