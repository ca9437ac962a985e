//! Utilities shared by the host and the mapper

pub mod lockstep;
pub mod logging;

pub use lockstep::for_each_pair;
