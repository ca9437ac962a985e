//! Common traits used across the codebase
//!
//! The mapper, the hosts and the mappings only meet through the traits
//! defined here, so custom hosts and hand-written mappings plug in the same
//! way the built-in ones do.

pub mod traits;

pub use traits::*;
