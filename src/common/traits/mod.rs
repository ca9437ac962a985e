//! Seams between the mapper, its hosts and the mappings they hold.

pub mod host;
pub mod mapping;

pub use host::{MappingHost, MappingHostExt};
pub use mapping::{AnyMapping, Mapping};
