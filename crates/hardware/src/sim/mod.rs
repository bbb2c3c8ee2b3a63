//! Load stream sources and the replay driver.
//!
//! Provides the host side of a run: reading recorded load traces, generating
//! synthetic load streams, and driving a predictor through them.

/// Replay driver that runs loads through a predictor.
pub mod driver;
/// Text trace parsing and loading.
pub mod trace;
/// Deterministic synthetic load streams.
pub mod workload;

pub use driver::{LoadDriver, LoadEvent, RunSummary};
pub use trace::LoadRecord;
pub use workload::SyntheticWorkload;
