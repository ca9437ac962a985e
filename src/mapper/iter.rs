//! Iterator adapters for the collection operations
//!
//! ```
//! use std::sync::Arc;
//! use obj_mapper::{DelegateMappingHost, MapWith, Mapper, descriptor};
//!
//! let host = DelegateMappingHost::new();
//! host.add_mapping(|n: &u32| n.to_string()).unwrap();
//! let mapper = Mapper::new(Arc::new(host));
//!
//! let numbers = [1u32, 2, 3];
//! let texts = numbers
//!     .iter()
//!     .map_with(&mapper, descriptor::<u32, String>())
//!     .unwrap();
//! assert_eq!(texts, ["1", "2", "3"]);
//! ```

use crate::common::traits::MappingHost;
use crate::descriptor::{Mappable, MappingDescriptor};
use crate::error::Result;

use super::Mapper;

/// Collection mapping as methods on the source iterator
pub trait MapWith: Iterator + Sized {
    /// See [`Mapper::map_create_many`]
    fn map_with<'a, S, D, H>(self, mapper: &Mapper<H>, descriptor: MappingDescriptor<S, D>) -> Result<Vec<D>>
    where
        Self: Iterator<Item = &'a S>,
        S: 'static,
        D: 'static,
        H: MappingHost + ?Sized,
    {
        mapper.map_create_many(descriptor, self)
    }

    /// See [`Mapper::map_populate_many`]
    fn map_into_with<'a, 'b, S, D, H, J>(
        self,
        mapper: &Mapper<H>,
        descriptor: MappingDescriptor<S, D>,
        destinations: J,
    ) -> Result<()>
    where
        Self: Iterator<Item = &'a S>,
        S: 'static,
        D: 'static,
        H: MappingHost + ?Sized,
        J: IntoIterator<Item = &'b mut D>,
    {
        mapper.map_populate_many(descriptor, self, destinations)
    }

    /// See [`Mapper::map_create_many_nullable`]
    fn map_nullable_with<'a, S, D, H>(
        self,
        mapper: &Mapper<H>,
        descriptor: MappingDescriptor<S, D>,
    ) -> Result<Vec<Option<D>>>
    where
        Self: Iterator<Item = Option<&'a S>>,
        S: 'static,
        D: 'static,
        H: MappingHost + ?Sized,
    {
        mapper.map_create_many_nullable(descriptor, self)
    }

    /// See [`Mapper::map_populate_many_nullable`]
    fn map_nullable_into_with<'a, 'b, S, D, H, J>(
        self,
        mapper: &Mapper<H>,
        descriptor: MappingDescriptor<S, D>,
        destinations: J,
    ) -> Result<()>
    where
        Self: Iterator<Item = Option<&'a S>>,
        S: 'static,
        D: 'static,
        H: MappingHost + ?Sized,
        J: IntoIterator<Item = &'b mut Option<D>>,
    {
        mapper.map_populate_many_nullable(descriptor, self, destinations)
    }

    /// See [`Mapper::runtime_map_create_many`]
    fn runtime_map_with<'a, D, H>(self, mapper: &Mapper<H>) -> Result<Vec<D>>
    where
        Self: Iterator<Item = &'a dyn Mappable>,
        D: 'static,
        H: MappingHost + ?Sized,
    {
        mapper.runtime_map_create_many(self)
    }

    /// See [`Mapper::runtime_map_create_many_nullable`]
    fn runtime_map_nullable_with<'a, D, H>(self, mapper: &Mapper<H>) -> Result<Vec<Option<D>>>
    where
        Self: Iterator<Item = Option<&'a dyn Mappable>>,
        D: 'static,
        H: MappingHost + ?Sized,
    {
        mapper.runtime_map_create_many_nullable(self)
    }
}

impl<I: Iterator> MapWith for I {}
