//! Type-tagged wrapper the registry stores for every mapping.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::common::traits::{AnyMapping, Mapping};
use crate::descriptor::{DescriptorKey, Mappable, MappingDescriptor, TypeKey};
use crate::error::{MapperError, MappingMode, Result};

/// A mapping together with the descriptor it was registered under
///
/// This is the concrete type behind every [`AnyMapping`] handed out by the
/// built-in host, so a typed lookup is a single `Arc` downcast.
pub struct RegisteredMapping<S, D> {
    descriptor: MappingDescriptor<S, D>,
    inner: Box<dyn Mapping<S, D>>,
}

impl<S: 'static, D: 'static> RegisteredMapping<S, D> {
    pub fn new<M>(descriptor: MappingDescriptor<S, D>, mapping: M) -> Self
    where
        M: Mapping<S, D> + 'static,
    {
        Self {
            descriptor,
            inner: Box::new(mapping),
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> MappingDescriptor<S, D> {
        self.descriptor
    }
}

impl<S: 'static, D: 'static> fmt::Debug for RegisteredMapping<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredMapping")
            .field("descriptor", &self.descriptor.key())
            .field("create", &self.inner.supports(MappingMode::Create))
            .field("populate", &self.inner.supports(MappingMode::Populate))
            .finish()
    }
}

impl<S: 'static, D: 'static> Mapping<S, D> for RegisteredMapping<S, D> {
    fn create_from(&self, source: &S) -> Result<D> {
        self.inner.create_from(source)
    }

    fn populate(&self, source: &S, destination: &mut D) -> Result<()> {
        self.inner.populate(source, destination)
    }

    fn supports(&self, mode: MappingMode) -> bool {
        self.inner.supports(mode)
    }
}

impl<S: 'static, D: 'static> AnyMapping for RegisteredMapping<S, D> {
    fn descriptor(&self) -> DescriptorKey {
        self.descriptor.key()
    }

    fn supports_any(&self, mode: MappingMode) -> bool {
        self.inner.supports(mode)
    }

    fn create_any(&self, source: &dyn Mappable) -> Result<Box<dyn Any>> {
        let source = downcast_source::<S>(source)?;
        let created = self.inner.create_from(source)?;
        Ok(Box::new(created))
    }

    fn populate_any(&self, source: &dyn Mappable, destination: &mut dyn Mappable) -> Result<()> {
        let source = downcast_source::<S>(source)?;
        let found = (*destination).type_key();
        let destination = destination
            .as_any_mut()
            .downcast_mut::<D>()
            .ok_or(MapperError::TypeMismatch {
                expected: TypeKey::of::<D>(),
                found,
            })?;
        self.inner.populate(source, destination)
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

fn downcast_source<S: 'static>(source: &dyn Mappable) -> Result<&S> {
    source
        .as_any()
        .downcast_ref::<S>()
        .ok_or_else(|| MapperError::TypeMismatch {
            expected: TypeKey::of::<S>(),
            found: source.type_key(),
        })
}

/// Recover the typed mapping behind an erased one
///
/// Fails with [`MapperError::TypeMismatch`] when the erased mapping converts
/// between other types than `descriptor` names.
pub fn downcast_mapping<S: 'static, D: 'static>(
    mapping: Arc<dyn AnyMapping>,
    descriptor: MappingDescriptor<S, D>,
) -> Result<Arc<RegisteredMapping<S, D>>> {
    let registered = mapping.descriptor();
    if registered.source() != descriptor.source_type() {
        return Err(MapperError::TypeMismatch {
            expected: descriptor.source_type(),
            found: registered.source(),
        });
    }
    if registered.destination() != descriptor.destination_type() {
        return Err(MapperError::TypeMismatch {
            expected: descriptor.destination_type(),
            found: registered.destination(),
        });
    }

    mapping
        .into_any()
        .downcast::<RegisteredMapping<S, D>>()
        .map_err(|_| MapperError::TypeMismatch {
            expected: TypeKey::of::<RegisteredMapping<S, D>>(),
            found: TypeKey::of::<dyn AnyMapping>(),
        })
}
