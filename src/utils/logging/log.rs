//! Logging utilities
//!
//! Standardized log lines for registry and mapper events.

use crate::descriptor::DescriptorKey;

/// Log a successful registration
///
/// # Arguments
/// * `host` - Name of the host the mapping was added to
/// * `descriptor` - Pair the mapping converts between
/// * `total` - Number of mappings the host holds afterwards
pub fn log_registration(host: &str, descriptor: &DescriptorKey, total: usize) {
    log::debug!("[{host}] registered mapping {descriptor} ({total} total)");
}

/// Log a rejected duplicate registration
pub fn log_duplicate(host: &str, descriptor: &DescriptorKey) {
    log::warn!("[{host}] rejected duplicate mapping {descriptor}");
}

/// Log a lookup that found nothing
pub fn log_missing(descriptor: &DescriptorKey) {
    log::debug!("No mapping registered for {descriptor}");
}

/// Log the start of a mapper operation
///
/// # Arguments
/// * `operation` - Name of the mapper operation
/// * `descriptor` - Resolved pair
pub fn log_dispatch(operation: &str, descriptor: &DescriptorKey) {
    log::trace!("{operation}: {descriptor}");
}

/// Log the end of a collection operation
///
/// # Arguments
/// * `operation` - Name of the mapper operation
/// * `destination` - Destination type name
/// * `items` - Number of elements processed
pub fn log_dispatch_complete(operation: &str, destination: &str, items: usize) {
    log::trace!("{operation}: mapped {items} items into {destination}");
}
