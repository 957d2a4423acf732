//! Shared utilities for the PSP protocol.

pub mod logging;

pub use logging::{init_logging, LogFormat};
