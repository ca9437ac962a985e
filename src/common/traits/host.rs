//! Mapping host traits
//!
//! A host answers one question: which mapping is registered for a
//! descriptor. Absence is a normal answer here; the
//! [`Mapper`](crate::Mapper) decides that it is fatal.

use std::sync::Arc;

use crate::descriptor::{DescriptorKey, MappingDescriptor};
use crate::error::Result;
use crate::mapping::{RegisteredMapping, downcast_mapping};

use super::AnyMapping;

/// Lookup service from descriptor to registered mapping
pub trait MappingHost: Send + Sync {
    /// Find the mapping registered for `descriptor`, if any
    fn find(&self, descriptor: &DescriptorKey) -> Option<Arc<dyn AnyMapping>>;
}

impl<H: MappingHost + ?Sized> MappingHost for Arc<H> {
    fn find(&self, descriptor: &DescriptorKey) -> Option<Arc<dyn AnyMapping>> {
        (**self).find(descriptor)
    }
}

impl<H: MappingHost + ?Sized> MappingHost for &H {
    fn find(&self, descriptor: &DescriptorKey) -> Option<Arc<dyn AnyMapping>> {
        (**self).find(descriptor)
    }
}

/// Typed lookups on top of [`MappingHost::find`]
pub trait MappingHostExt: MappingHost {
    /// Find the typed mapping for `descriptor`
    ///
    /// Returns `Ok(None)` when nothing is registered, and an error only when
    /// the host returns a mapping for a different pair of types.
    fn find_mapping<S: 'static, D: 'static>(
        &self,
        descriptor: MappingDescriptor<S, D>,
    ) -> Result<Option<Arc<RegisteredMapping<S, D>>>> {
        self.find(&descriptor.key())
            .map(|mapping| downcast_mapping(mapping, descriptor))
            .transpose()
    }

    /// Whether a mapping is registered for `S -> D`
    fn has_mapping<S: 'static, D: 'static>(&self) -> bool {
        self.find(&DescriptorKey::of::<S, D>()).is_some()
    }
}

impl<H: MappingHost + ?Sized> MappingHostExt for H {}
