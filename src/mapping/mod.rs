//! Concrete mappings: the closure-backed [`DelegateMapping`] and the
//! [`RegisteredMapping`] wrapper hosts store.

pub mod delegate;
pub mod registered;

pub use delegate::{CreateFn, DelegateMapping, PopulateFn};
pub use registered::{RegisteredMapping, downcast_mapping};
