//! Mapping traits
//!
//! [`Mapping`] is the typed conversion rule applications implement or build
//! from closures. [`AnyMapping`] is its object-safe, type-erased face, which
//! is what hosts store and what the runtime mapping family dispatches through.

use std::any::Any;
use std::sync::Arc;

use crate::descriptor::{DescriptorKey, Mappable};
use crate::error::{MappingMode, Result};

/// A conversion rule for one (source, destination) pair
///
/// A mapping may support only one of its two operations. Calling the
/// unsupported one must fail with
/// [`MapperError::MappingUnsupported`](crate::MapperError::MappingUnsupported)
/// rather than silently doing nothing.
pub trait Mapping<S, D>: Send + Sync {
    /// Convert `source` into a new destination
    fn create_from(&self, source: &S) -> Result<D>;

    /// Convert `source` onto an existing `destination`
    fn populate(&self, source: &S, destination: &mut D) -> Result<()>;

    /// Whether the operation for `mode` is implemented
    ///
    /// Must agree with what `create_from` and `populate` actually do; hosts
    /// report it as-is.
    fn supports(&self, mode: MappingMode) -> bool;
}

/// Type-erased mapping as stored by a [`MappingHost`](super::MappingHost)
pub trait AnyMapping: Send + Sync {
    /// The pair this mapping converts between
    fn descriptor(&self) -> DescriptorKey;

    /// Erased counterpart of [`Mapping::supports`]
    fn supports_any(&self, mode: MappingMode) -> bool;

    /// Create a destination from a source whose type is only known at runtime
    fn create_any(&self, source: &dyn Mappable) -> Result<Box<dyn Any>>;

    /// Populate a destination from a source, both only known at runtime
    fn populate_any(&self, source: &dyn Mappable, destination: &mut dyn Mappable) -> Result<()>;

    /// Upcast for recovering the typed mapping behind this object
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}
