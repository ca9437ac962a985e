//! Runtime type discovery for the "runtime" mapping family.
//!
//! [`Mappable`] is implemented for every `'static` type. Calling
//! [`Mappable::type_key`] through a `&dyn Mappable` dispatches to the concrete
//! type behind the reference, which is how the mapper derives a descriptor
//! from an actual value.
//!
//! A `&Box<dyn Mappable>` or `&Arc<dyn Mappable>` reports the wrapper's own
//! type. Source values go through [`innermost`] before the mapper reads their
//! key, so such wrappers are looked through. Mutable destinations are not:
//! pass `boxed.as_mut()` there.

use std::any::Any;
use std::sync::Arc;

use super::TypeKey;

/// A value that can report its concrete type at runtime
// `'static` is spelled out so a bare `&dyn Mappable` means `dyn Mappable + 'static`.
pub trait Mappable: Any + 'static {
    /// Key of the concrete type of this value
    fn type_key(&self) -> TypeKey;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> Mappable for T {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Look through `Box<dyn Mappable>` and `Arc<dyn Mappable>` wrappers
///
/// Returns the innermost value, so its [`Mappable::type_key`] names the type
/// a mapping is registered for. Any other value is returned unchanged.
pub fn innermost(value: &dyn Mappable) -> &dyn Mappable {
    let any = value.as_any();
    if let Some(boxed) = any.downcast_ref::<Box<dyn Mappable>>() {
        return innermost(&**boxed);
    }
    if let Some(shared) = any.downcast_ref::<Arc<dyn Mappable>>() {
        return innermost(&**shared);
    }
    value
}
