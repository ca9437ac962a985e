//! The mapper façade.
//!
//! A [`Mapper`] holds one host and turns every call into the same two steps:
//! resolve the mapping for a descriptor, then invoke its create or populate
//! operation. The operation surface is spread over a few files along the
//! axes it varies on:
//!
//! - this file: resolution plus single-value and nullable operations
//! - `collections`: ordered sequences, with lockstep size checking
//! - `runtime`: descriptors derived from the runtime type of the source
//! - `iter`: the same collection operations as iterator adapters

mod collections;
pub mod iter;
mod runtime;

use std::fmt;
use std::sync::Arc;

use crate::common::traits::{AnyMapping, Mapping, MappingHost};
use crate::config::MapperConfig;
use crate::descriptor::{DescriptorKey, MappingDescriptor};
use crate::error::{MapperError, Result};
use crate::host::DelegateMappingHost;
use crate::mapping::{RegisteredMapping, downcast_mapping};
use crate::utils::logging::log_dispatch;

pub use iter::MapWith;

/// Public entry point for mapping values through a host
///
/// The mapper is stateless apart from its host reference; every call is a
/// self-contained resolve-then-invoke. Cloning it is cheap and shares the
/// host.
pub struct Mapper<H: MappingHost + ?Sized = DelegateMappingHost> {
    host: Arc<H>,
    config: MapperConfig,
}

impl<H: MappingHost + ?Sized> Mapper<H> {
    #[must_use]
    pub fn new(host: Arc<H>) -> Self {
        Self::with_config(host, MapperConfig::default())
    }

    #[must_use]
    pub fn with_config(host: Arc<H>, config: MapperConfig) -> Self {
        Self { host, config }
    }

    #[must_use]
    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Resolve the mapping registered for `descriptor`
    ///
    /// Fails with [`MapperError::MappingNotFound`] when the host has none.
    pub fn resolve<S: 'static, D: 'static>(
        &self,
        descriptor: MappingDescriptor<S, D>,
    ) -> Result<Arc<RegisteredMapping<S, D>>> {
        let mapping = self.resolve_key(&descriptor.key())?;
        downcast_mapping(mapping, descriptor)
    }

    /// Erased resolution; the only place `MappingNotFound` comes from
    fn resolve_key(&self, descriptor: &DescriptorKey) -> Result<Arc<dyn AnyMapping>> {
        if self.config.log_dispatch {
            log_dispatch("resolve", descriptor);
        }
        self.host
            .find(descriptor)
            .ok_or(MapperError::MappingNotFound {
                descriptor: *descriptor,
            })
    }

    /// Map `source` into a new destination
    pub fn map_create<S: 'static, D: 'static>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        source: &S,
    ) -> Result<D> {
        self.resolve(descriptor)?.create_from(source)
    }

    /// Map `source` onto an existing `destination`
    pub fn map_populate<S: 'static, D: 'static>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        source: &S,
        destination: &mut D,
    ) -> Result<()> {
        self.resolve(descriptor)?.populate(source, destination)
    }

    /// Like [`map_create`](Self::map_create), passing absence through
    ///
    /// An absent source yields `Ok(None)` without resolving anything.
    pub fn map_create_nullable<S: 'static, D: 'static>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        source: Option<&S>,
    ) -> Result<Option<D>> {
        source
            .map(|source| self.map_create(descriptor, source))
            .transpose()
    }

    /// Like [`map_populate`](Self::map_populate), skipping absent sources
    ///
    /// An absent source leaves `destination` untouched; it is not cleared.
    pub fn map_populate_nullable<S: 'static, D: 'static>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        source: Option<&S>,
        destination: &mut D,
    ) -> Result<()> {
        match source {
            Some(source) => self.map_populate(descriptor, source, destination),
            None => Ok(()),
        }
    }
}

impl<H: MappingHost + ?Sized> Clone for Mapper<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            config: self.config.clone(),
        }
    }
}

impl<H: MappingHost + ?Sized> fmt::Debug for Mapper<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Fill one nullable slot from one nullable source
///
/// Present source and occupied slot: populate. Present source and empty slot:
/// create into the slot. Absent source: clear the slot.
fn fill_slot<S: ?Sized, D, C, P>(source: Option<&S>, slot: &mut Option<D>, create: C, populate: P) -> Result<()>
where
    C: FnOnce(&S) -> Result<D>,
    P: FnOnce(&S, &mut D) -> Result<()>,
{
    let Some(source) = source else {
        *slot = None;
        return Ok(());
    };
    if let Some(destination) = slot {
        return populate(source, destination);
    }
    *slot = Some(create(source)?);
    Ok(())
}
