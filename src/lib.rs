//! Smoke-test probes for the dapp deploy/call HTTP API.

pub mod config;
pub mod error;
pub mod models;
pub mod probe;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use probe::{Operation, ProbeOutcome, Prober};
