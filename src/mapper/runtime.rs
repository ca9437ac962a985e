//! Runtime operations: the source type is read from the value itself.
//!
//! The destination type is given statically (or, for
//! [`runtime_map_populate_dyn`](Mapper::runtime_map_populate_dyn), read from
//! the destination value). Collection forms resolve per element because
//! every element may have a different concrete type.
//!
//! Sources wrapped in `Box<dyn Mappable>` or `Arc<dyn Mappable>` are keyed by
//! the value inside (see [`innermost`]). A boxed destination passed to
//! [`runtime_map_populate_dyn`](Mapper::runtime_map_populate_dyn) must be
//! unwrapped by the caller with `boxed.as_mut()`.

use crate::common::traits::MappingHost;
use crate::descriptor::{DescriptorKey, Mappable, TypeKey, innermost};
use crate::error::{MapperError, Result};
use crate::utils::for_each_pair;
use crate::utils::logging::log_dispatch_complete;

use super::{Mapper, fill_slot};

impl<H: MappingHost + ?Sized> Mapper<H> {
    /// Map `source` into a new `D`, keyed by the concrete type of `source`
    pub fn runtime_map_create<D: 'static>(&self, source: &dyn Mappable) -> Result<D> {
        let source = innermost(source);
        let descriptor = DescriptorKey::new(source.type_key(), TypeKey::of::<D>());
        let mapping = self.resolve_key(&descriptor)?;
        let created = mapping.create_any(source)?;
        created
            .downcast::<D>()
            .map(|created| *created)
            .map_err(|_| MapperError::TypeMismatch {
                expected: TypeKey::of::<D>(),
                found: mapping.descriptor().destination(),
            })
    }

    /// Populate `destination`, keyed by the concrete type of `source`
    pub fn runtime_map_populate<D: 'static>(
        &self,
        source: &dyn Mappable,
        destination: &mut D,
    ) -> Result<()> {
        let source = innermost(source);
        let descriptor = DescriptorKey::new(source.type_key(), TypeKey::of::<D>());
        self.resolve_key(&descriptor)?
            .populate_any(source, destination)
    }

    /// Populate `destination`, keyed by the concrete types of both values
    ///
    /// Pass a boxed destination as `boxed.as_mut()`; `&mut boxed` would be
    /// keyed as `Box<dyn Mappable>` and fail with `MappingNotFound`.
    pub fn runtime_map_populate_dyn(
        &self,
        source: &dyn Mappable,
        destination: &mut dyn Mappable,
    ) -> Result<()> {
        let source = innermost(source);
        let descriptor = DescriptorKey::new(source.type_key(), (*destination).type_key());
        self.resolve_key(&descriptor)?
            .populate_any(source, destination)
    }

    /// Like [`runtime_map_create`](Self::runtime_map_create), passing absence through
    pub fn runtime_map_create_nullable<D: 'static>(
        &self,
        source: Option<&dyn Mappable>,
    ) -> Result<Option<D>> {
        source
            .map(|source| self.runtime_map_create(source))
            .transpose()
    }

    /// Like [`runtime_map_populate`](Self::runtime_map_populate), skipping absent sources
    pub fn runtime_map_populate_nullable<D: 'static>(
        &self,
        source: Option<&dyn Mappable>,
        destination: &mut D,
    ) -> Result<()> {
        match source {
            Some(source) => self.runtime_map_populate(source, destination),
            None => Ok(()),
        }
    }

    /// Map every source into a new `D`, preserving order
    pub fn runtime_map_create_many<'a, D, I>(&self, sources: I) -> Result<Vec<D>>
    where
        D: 'static,
        I: IntoIterator<Item = &'a dyn Mappable>,
    {
        let created = sources
            .into_iter()
            .map(|source| self.runtime_map_create(source))
            .collect::<Result<Vec<D>>>()?;
        self.runtime_complete::<D>("runtime_map_create_many", created.len());
        Ok(created)
    }

    /// Populate each destination from the source at the same position
    pub fn runtime_map_populate_many<'a, 'b, D, I, J>(&self, sources: I, destinations: J) -> Result<()>
    where
        D: 'static,
        I: IntoIterator<Item = &'a dyn Mappable>,
        J: IntoIterator<Item = &'b mut D>,
    {
        let processed = for_each_pair(
            sources,
            destinations,
            TypeKey::of::<D>(),
            |source, destination| self.runtime_map_populate(source, destination),
        )?;
        self.runtime_complete::<D>("runtime_map_populate_many", processed);
        Ok(())
    }

    /// Map a sequence with gaps; absent sources become absent destinations
    pub fn runtime_map_create_many_nullable<'a, D, I>(&self, sources: I) -> Result<Vec<Option<D>>>
    where
        D: 'static,
        I: IntoIterator<Item = Option<&'a dyn Mappable>>,
    {
        let created = sources
            .into_iter()
            .map(|source| self.runtime_map_create_nullable(source))
            .collect::<Result<Vec<Option<D>>>>()?;
        self.runtime_complete::<D>("runtime_map_create_many_nullable", created.len());
        Ok(created)
    }

    /// Populate a sequence of nullable slots from a sequence with gaps
    ///
    /// Same slot policy as
    /// [`map_populate_many_nullable`](Self::map_populate_many_nullable).
    pub fn runtime_map_populate_many_nullable<'a, 'b, D, I, J>(
        &self,
        sources: I,
        destinations: J,
    ) -> Result<()>
    where
        D: 'static,
        I: IntoIterator<Item = Option<&'a dyn Mappable>>,
        J: IntoIterator<Item = &'b mut Option<D>>,
    {
        let processed = for_each_pair(
            sources,
            destinations,
            TypeKey::of::<D>(),
            |source, slot| {
                fill_slot(
                    source,
                    slot,
                    |source| self.runtime_map_create(source),
                    |source, destination| self.runtime_map_populate(source, destination),
                )
            },
        )?;
        self.runtime_complete::<D>("runtime_map_populate_many_nullable", processed);
        Ok(())
    }

    fn runtime_complete<D: 'static>(&self, operation: &str, items: usize) {
        if self.config.log_dispatch {
            log_dispatch_complete(operation, TypeKey::of::<D>().name(), items);
        }
    }
}
