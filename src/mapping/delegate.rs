//! Mappings built from plain functions.

use std::fmt;

use crate::common::traits::Mapping;
use crate::error::{MapperError, MappingMode, Result};

/// Function producing a new destination from a source
pub type CreateFn<S, D> = Box<dyn Fn(&S) -> D + Send + Sync>;

/// Function writing a source onto an existing destination
pub type PopulateFn<S, D> = Box<dyn Fn(&S, &mut D) + Send + Sync>;

/// A [`Mapping`] backed by up to two caller-supplied functions
///
/// Either slot may be empty. Nothing checks that the two functions agree with
/// each other; that is the caller's business.
pub struct DelegateMapping<S, D> {
    create: Option<CreateFn<S, D>>,
    populate: Option<PopulateFn<S, D>>,
}

impl<S, D> DelegateMapping<S, D> {
    /// A mapping that supports neither operation
    #[must_use]
    pub fn empty() -> Self {
        Self {
            create: None,
            populate: None,
        }
    }

    /// A mapping supporting both create and populate
    pub fn new<C, P>(create: C, populate: P) -> Self
    where
        C: Fn(&S) -> D + Send + Sync + 'static,
        P: Fn(&S, &mut D) + Send + Sync + 'static,
    {
        Self::empty().with_create(create).with_populate(populate)
    }

    /// A create-only mapping
    pub fn from_create<C>(create: C) -> Self
    where
        C: Fn(&S) -> D + Send + Sync + 'static,
    {
        Self::empty().with_create(create)
    }

    /// A populate-only mapping
    pub fn from_populate<P>(populate: P) -> Self
    where
        P: Fn(&S, &mut D) + Send + Sync + 'static,
    {
        Self::empty().with_populate(populate)
    }

    #[must_use]
    pub fn with_create<C>(mut self, create: C) -> Self
    where
        C: Fn(&S) -> D + Send + Sync + 'static,
    {
        self.create = Some(Box::new(create));
        self
    }

    #[must_use]
    pub fn with_populate<P>(mut self, populate: P) -> Self
    where
        P: Fn(&S, &mut D) + Send + Sync + 'static,
    {
        self.populate = Some(Box::new(populate));
        self
    }

    #[must_use]
    pub fn supports_create(&self) -> bool {
        self.create.is_some()
    }

    #[must_use]
    pub fn supports_populate(&self) -> bool {
        self.populate.is_some()
    }
}

impl<S, D> Default for DelegateMapping<S, D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S, D> fmt::Debug for DelegateMapping<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateMapping")
            .field("create", &self.supports_create())
            .field("populate", &self.supports_populate())
            .finish()
    }
}

impl<S, D> Mapping<S, D> for DelegateMapping<S, D> {
    fn create_from(&self, source: &S) -> Result<D> {
        let create = self
            .create
            .as_ref()
            .ok_or(MapperError::MappingUnsupported(MappingMode::Create))?;
        Ok(create(source))
    }

    fn populate(&self, source: &S, destination: &mut D) -> Result<()> {
        let populate = self
            .populate
            .as_ref()
            .ok_or(MapperError::MappingUnsupported(MappingMode::Populate))?;
        populate(source, destination);
        Ok(())
    }

    fn supports(&self, mode: MappingMode) -> bool {
        match mode {
            MappingMode::Create => self.supports_create(),
            MappingMode::Populate => self.supports_populate(),
        }
    }
}
