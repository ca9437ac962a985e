//! Error handling for the mapper.
//!
//! Every failure here is a programmer or configuration error: a missing
//! registration, a duplicate registration, a half-built mapping or a pair of
//! collections that do not line up. None of them is retried internally.

use std::fmt;

use crate::descriptor::{DescriptorKey, TypeKey};

/// Which half of a [`Mapping`](crate::Mapping) was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingMode {
    /// Produce a new destination from a source (no receiver)
    Create,
    /// Write onto an existing destination (with receiver)
    Populate,
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create (without receiver)"),
            Self::Populate => write!(f, "populate (with receiver)"),
        }
    }
}

/// The collection that still had elements when its partner ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionSide {
    Source,
    Destination,
}

impl fmt::Display for CollectionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Coarse reason code for an error, handy for matching at call sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapperErrorReason {
    MappingNotFound,
    MappingAlreadyExists,
    MappingWithoutReceiverNotSupported,
    MappingWithReceiverNotSupported,
    MappingCollectionDifferentSize,
    MappingTypeMismatch,
}

/// Specialized error type for mapper operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapperError {
    /// No mapping is registered for the descriptor
    #[error("No mapping registered for {descriptor}")]
    MappingNotFound { descriptor: DescriptorKey },

    /// A mapping is already registered for the descriptor
    #[error("Mapping already registered for {descriptor}")]
    DuplicateMapping { descriptor: DescriptorKey },

    /// The resolved mapping does not implement the requested operation
    #[error("Mapping does not support {0}")]
    MappingUnsupported(MappingMode),

    /// Paired collections have different lengths
    #[error(
        "Collection size mismatch while mapping into {destination}: \
         {longer} collection has extra elements at position {position}"
    )]
    CollectionSizeMismatch {
        destination: TypeKey,
        position: usize,
        longer: CollectionSide,
    },

    /// A host handed back a mapping whose types disagree with the request
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: TypeKey, found: TypeKey },
}

impl MapperError {
    /// Reason code for this error
    #[must_use]
    pub fn reason(&self) -> MapperErrorReason {
        match self {
            Self::MappingNotFound { .. } => MapperErrorReason::MappingNotFound,
            Self::DuplicateMapping { .. } => MapperErrorReason::MappingAlreadyExists,
            Self::MappingUnsupported(MappingMode::Create) => {
                MapperErrorReason::MappingWithoutReceiverNotSupported
            }
            Self::MappingUnsupported(MappingMode::Populate) => {
                MapperErrorReason::MappingWithReceiverNotSupported
            }
            Self::CollectionSizeMismatch { .. } => MapperErrorReason::MappingCollectionDifferentSize,
            Self::TypeMismatch { .. } => MapperErrorReason::MappingTypeMismatch,
        }
    }

    /// Whether this error carries the given reason
    #[must_use]
    pub fn has_reason(&self, reason: MapperErrorReason) -> bool {
        self.reason() == reason
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MappingNotFound { .. })
    }

    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateMapping { .. })
    }

    #[must_use]
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, Self::CollectionSizeMismatch { .. })
    }
}

/// Result type for mapper operations
pub type Result<T> = std::result::Result<T, MapperError>;
