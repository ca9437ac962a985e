//! In-memory mapping registry.

use std::collections::hash_map::Entry;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;

use crate::common::traits::{AnyMapping, Mapping, MappingHost};
use crate::config::HostConfig;
use crate::descriptor::{DescriptorKey, MappingDescriptor};
use crate::error::{MapperError, MappingMode, Result};
use crate::mapping::{DelegateMapping, RegisteredMapping};
use crate::utils::logging::{log_duplicate, log_missing, log_registration};

use super::report::{HostReport, MappingSummary};

type Registry = FxHashMap<DescriptorKey, Arc<dyn AnyMapping>>;

/// Registry of mappings keyed by descriptor
///
/// Registration is meant to happen during setup. It takes `&self` so a host
/// can be shared before it is complete, and each registration checks and
/// inserts under one write lock: when two threads race on the same
/// descriptor exactly one of them wins. Nothing is ever removed.
pub struct DelegateMappingHost {
    config: HostConfig,
    mappings: RwLock<Registry>,
}

impl DelegateMappingHost {
    /// Create an empty host with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    #[must_use]
    pub fn with_config(config: HostConfig) -> Self {
        let mappings =
            FxHashMap::with_capacity_and_hasher(config.initial_capacity, Default::default());
        Self {
            config,
            mappings: RwLock::new(mappings),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Register `mapping` under `descriptor`
    ///
    /// Fails with [`MapperError::DuplicateMapping`] if the descriptor is
    /// already taken; the existing mapping stays in place.
    pub fn register<S, D, M>(&self, descriptor: MappingDescriptor<S, D>, mapping: M) -> Result<()>
    where
        S: 'static,
        D: 'static,
        M: Mapping<S, D> + 'static,
    {
        let key = descriptor.key();
        let mut mappings = self.write();
        match mappings.entry(key) {
            Entry::Occupied(_) => {
                log_duplicate(&self.config.name, &key);
                Err(MapperError::DuplicateMapping { descriptor: key })
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(RegisteredMapping::new(descriptor, mapping)));
                log_registration(&self.config.name, &key, mappings.len());
                Ok(())
            }
        }
    }

    /// Register a [`DelegateMapping`] under `descriptor`
    pub fn register_delegate<S: 'static, D: 'static>(
        &self,
        descriptor: MappingDescriptor<S, D>,
        mapping: DelegateMapping<S, D>,
    ) -> Result<()> {
        self.register(descriptor, mapping)
    }

    /// Register a create-only mapping for the pair the function converts
    pub fn add_mapping<S, D, C>(&self, create: C) -> Result<()>
    where
        S: 'static,
        D: 'static,
        C: Fn(&S) -> D + Send + Sync + 'static,
    {
        self.register(MappingDescriptor::new(), DelegateMapping::from_create(create))
    }

    /// Register a populate-only mapping for the pair the function converts
    pub fn add_populate_mapping<S, D, P>(&self, populate: P) -> Result<()>
    where
        S: 'static,
        D: 'static,
        P: Fn(&S, &mut D) + Send + Sync + 'static,
    {
        self.register(MappingDescriptor::new(), DelegateMapping::from_populate(populate))
    }

    /// Register a mapping supporting both create and populate
    pub fn add_mappings<S, D, C, P>(&self, create: C, populate: P) -> Result<()>
    where
        S: 'static,
        D: 'static,
        C: Fn(&S) -> D + Send + Sync + 'static,
        P: Fn(&S, &mut D) + Send + Sync + 'static,
    {
        self.register(MappingDescriptor::new(), DelegateMapping::new(create, populate))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    #[must_use]
    pub fn contains(&self, descriptor: &DescriptorKey) -> bool {
        self.read().contains_key(descriptor)
    }

    /// All registered descriptors, ordered by type name
    #[must_use]
    pub fn descriptors(&self) -> Vec<DescriptorKey> {
        let mut descriptors: Vec<DescriptorKey> = self.read().keys().copied().collect();
        descriptors.sort_by_key(|key| (key.source().name(), key.destination().name()));
        descriptors
    }

    /// Snapshot of the registry for diagnostics
    #[must_use]
    pub fn report(&self) -> HostReport {
        let mappings = self.read();
        let mut summaries: Vec<MappingSummary> = mappings
            .iter()
            .map(|(key, mapping)| MappingSummary {
                source: key.source().name().to_string(),
                destination: key.destination().name().to_string(),
                create: mapping.supports_any(MappingMode::Create),
                populate: mapping.supports_any(MappingMode::Populate),
            })
            .collect();
        summaries.sort_by(|a, b| (&a.source, &a.destination).cmp(&(&b.source, &b.destination)));

        HostReport {
            name: self.config.name.clone(),
            mappings: summaries,
        }
    }

    // The map is only ever changed by a single insert, so a panic while the
    // lock was held cannot leave it half-updated.
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.mappings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.mappings.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DelegateMappingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DelegateMappingHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegateMappingHost")
            .field("name", &self.config.name)
            .field("mappings", &self.len())
            .finish()
    }
}

impl MappingHost for DelegateMappingHost {
    fn find(&self, descriptor: &DescriptorKey) -> Option<Arc<dyn AnyMapping>> {
        let found = self.read().get(descriptor).cloned();
        if found.is_none() {
            log_missing(descriptor);
        }
        found
    }
}
