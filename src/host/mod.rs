//! Mapping hosts

pub mod delegate;
pub mod report;

pub use delegate::DelegateMappingHost;
pub use report::{HostReport, MappingSummary};
