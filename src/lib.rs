//! A runtime object-to-object mapping registry.
//!
//! Applications register explicit conversion rules for (source, destination)
//! type pairs in a [`DelegateMappingHost`], then map values through a
//! [`Mapper`]: one value or a whole sequence, into new destinations or onto
//! existing ones, with optional (nullable) sources, and with the source type
//! either fixed by a [`MappingDescriptor`] or read from the value at runtime.
//!
//! ```
//! use std::sync::Arc;
//! use obj_mapper::{DelegateMappingHost, Mapper, descriptor};
//!
//! struct User { name: String, age: u8 }
//! #[derive(Debug, PartialEq)]
//! struct UserView { label: String }
//!
//! let host = DelegateMappingHost::new();
//! host.add_mapping(|u: &User| UserView { label: format!("{} ({})", u.name, u.age) })?;
//!
//! let mapper = Mapper::new(Arc::new(host));
//! let user = User { name: "Ada".into(), age: 36 };
//! let view = mapper.map_create(descriptor::<User, UserView>(), &user)?;
//! assert_eq!(view, UserView { label: "Ada (36)".into() });
//! # Ok::<(), obj_mapper::MapperError>(())
//! ```

pub mod common;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod mapper;
pub mod mapping;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{HostConfig, MapperConfig};
pub use error::{CollectionSide, MapperError, MapperErrorReason, MappingMode, Result};
pub use mapper::{MapWith, Mapper};

// Descriptors and runtime type discovery
pub use descriptor::{DescriptorKey, Mappable, MappingDescriptor, TypeKey, descriptor, innermost};

// Mappings and hosts
pub use common::traits::{AnyMapping, Mapping, MappingHost, MappingHostExt};
pub use host::{DelegateMappingHost, HostReport, MappingSummary};
pub use mapping::{DelegateMapping, RegisteredMapping};
