//! Mapping descriptors: the (source type, destination type) keys of the registry.
//!
//! Two layers live here. [`TypeKey`] and [`DescriptorKey`] are erased, plain
//! data keys with structural equality, which is what the registry stores.
//! [`MappingDescriptor`] is the typed, zero-sized handle callers pass around so
//! that the compiler ties a descriptor to the source and destination types of
//! the call it is used in.

pub mod runtime;

use std::any::{TypeId, type_name};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use runtime::{Mappable, innermost};

/// Stable identifier of a Rust type
///
/// Equality, ordering and hashing only look at the [`TypeId`]; the name is
/// carried along for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key of the type `T`
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by [`std::any::type_name`]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this key identifies `T`
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Erased (source, destination) pair used as the registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorKey {
    source: TypeKey,
    destination: TypeKey,
}

impl DescriptorKey {
    #[must_use]
    pub fn new(source: TypeKey, destination: TypeKey) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Key for the static pair `S -> D`
    #[must_use]
    pub fn of<S: 'static, D: 'static>() -> Self {
        Self::new(TypeKey::of::<S>(), TypeKey::of::<D>())
    }

    #[must_use]
    pub fn source(&self) -> TypeKey {
        self.source
    }

    #[must_use]
    pub fn destination(&self) -> TypeKey {
        self.destination
    }
}

impl fmt::Display for DescriptorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Typed descriptor of the mapping from `S` to `D`
///
/// Zero-sized; construct it with [`MappingDescriptor::new`] or
/// [`descriptor`] and let inference fill in the types where it can.
pub struct MappingDescriptor<S, D> {
    _types: PhantomData<fn() -> (S, D)>,
}

impl<S: 'static, D: 'static> MappingDescriptor<S, D> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _types: PhantomData,
        }
    }

    /// Erased registry key for this pair
    #[must_use]
    pub fn key(&self) -> DescriptorKey {
        DescriptorKey::of::<S, D>()
    }

    #[must_use]
    pub fn source_type(&self) -> TypeKey {
        TypeKey::of::<S>()
    }

    #[must_use]
    pub fn destination_type(&self) -> TypeKey {
        TypeKey::of::<D>()
    }
}

/// Shorthand for `MappingDescriptor::<S, D>::new()`
#[must_use]
pub const fn descriptor<S: 'static, D: 'static>() -> MappingDescriptor<S, D> {
    MappingDescriptor::new()
}

// Manual impls: derives would put bounds on `S` and `D`.
impl<S, D> Clone for MappingDescriptor<S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, D> Copy for MappingDescriptor<S, D> {}

impl<S: 'static, D: 'static> Default for MappingDescriptor<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, D> PartialEq for MappingDescriptor<S, D> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<S, D> Eq for MappingDescriptor<S, D> {}

impl<S: 'static, D: 'static> Hash for MappingDescriptor<S, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<S: 'static, D: 'static> fmt::Debug for MappingDescriptor<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MappingDescriptor({})", self.key())
    }
}

impl<S: 'static, D: 'static> From<MappingDescriptor<S, D>> for DescriptorKey {
    fn from(descriptor: MappingDescriptor<S, D>) -> Self {
        descriptor.key()
    }
}
