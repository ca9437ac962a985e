//! Collection operations with a statically known descriptor.
//!
//! Each call resolves its mapping once and reuses it for every element.

use crate::common::traits::{Mapping, MappingHost};
use crate::descriptor::MappingDescriptor;
use crate::error::Result;
use crate::utils::for_each_pair;
use crate::utils::logging::log_dispatch_complete;

use super::{Mapper, fill_slot};

impl<H: MappingHost + ?Sized> Mapper<H> {
    /// Map every source into a new destination, preserving order
    pub fn map_create_many<'a, S, D, I>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        sources: I,
    ) -> Result<Vec<D>>
    where
        S: 'static,
        D: 'static,
        I: IntoIterator<Item = &'a S>,
    {
        let mapping = self.resolve(descriptor)?;
        let created = sources
            .into_iter()
            .map(|source| mapping.create_from(source))
            .collect::<Result<Vec<D>>>()?;
        self.complete("map_create_many", descriptor, created.len());
        Ok(created)
    }

    /// Populate each destination from the source at the same position
    ///
    /// Fails with
    /// [`CollectionSizeMismatch`](crate::MapperError::CollectionSizeMismatch)
    /// as soon as one side runs out before the other. Destinations already
    /// populated at that point stay populated.
    pub fn map_populate_many<'a, 'b, S, D, I, J>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        sources: I,
        destinations: J,
    ) -> Result<()>
    where
        S: 'static,
        D: 'static,
        I: IntoIterator<Item = &'a S>,
        J: IntoIterator<Item = &'b mut D>,
    {
        let mapping = self.resolve(descriptor)?;
        let processed = for_each_pair(
            sources,
            destinations,
            descriptor.destination_type(),
            |source, destination| mapping.populate(source, destination),
        )?;
        self.complete("map_populate_many", descriptor, processed);
        Ok(())
    }

    /// Map a sequence with gaps; absent sources become absent destinations
    pub fn map_create_many_nullable<'a, S, D, I>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        sources: I,
    ) -> Result<Vec<Option<D>>>
    where
        S: 'static,
        D: 'static,
        I: IntoIterator<Item = Option<&'a S>>,
    {
        let mapping = self.resolve(descriptor)?;
        let created = sources
            .into_iter()
            .map(|source| source.map(|source| mapping.create_from(source)).transpose())
            .collect::<Result<Vec<Option<D>>>>()?;
        self.complete("map_create_many_nullable", descriptor, created.len());
        Ok(created)
    }

    /// Populate a sequence of nullable slots from a sequence with gaps
    ///
    /// Per position: an occupied slot is populated, an empty slot receives a
    /// newly created destination, and an absent source clears the slot.
    pub fn map_populate_many_nullable<'a, 'b, S, D, I, J>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        sources: I,
        destinations: J,
    ) -> Result<()>
    where
        S: 'static,
        D: 'static,
        I: IntoIterator<Item = Option<&'a S>>,
        J: IntoIterator<Item = &'b mut Option<D>>,
    {
        let mapping = self.resolve(descriptor)?;
        let processed = for_each_pair(
            sources,
            destinations,
            descriptor.destination_type(),
            |source, slot| {
                fill_slot(
                    source,
                    slot,
                    |source| mapping.create_from(source),
                    |source, destination| mapping.populate(source, destination),
                )
            },
        )?;
        self.complete("map_populate_many_nullable", descriptor, processed);
        Ok(())
    }

    fn complete<S: 'static, D: 'static>(
        &self,
        operation: &str,
        descriptor: MappingDescriptor<S, D>,
        items: usize,
    ) {
        if self.config.log_dispatch {
            log_dispatch_complete(operation, descriptor.destination_type().name(), items);
        }
    }
}
