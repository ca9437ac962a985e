//! Logging utilities for registration and dispatch
//!
//! Thin wrappers over the `log` macros so every host and mapper reports the
//! same events in the same format.

pub mod log;

pub use log::{
    log_dispatch, log_dispatch_complete, log_duplicate, log_missing, log_registration,
};
