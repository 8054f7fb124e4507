//! Domain error model.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers the failures the product collection can report: storage that could
/// not be reserved, queries that need a value from an empty collection, and
/// malformed caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Storage for a record, its name, or the collection could not be reserved.
    #[error("allocation failed: {0}")]
    AllocationFailure(String),

    /// A query result was required but the collection holds no records.
    #[error("collection is empty")]
    EmptyCollection,

    /// A value failed validation (e.g. misaligned input, bad position).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::AllocationFailure(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn empty_collection() -> Self {
        Self::EmptyCollection
    }

    /// Wrap a failed `try_reserve*` call, naming what was being reserved.
    pub fn from_reserve(what: &str, err: TryReserveError) -> Self {
        Self::AllocationFailure(format!("{what}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reserve_names_the_target() {
        let mut buf: Vec<u8> = Vec::new();
        let err = buf.try_reserve(usize::MAX).unwrap_err();

        match DomainError::from_reserve("collection", err) {
            DomainError::AllocationFailure(msg) => assert!(msg.starts_with("collection: ")),
            other => panic!("Expected AllocationFailure, got {other:?}"),
        }
    }

    #[test]
    fn empty_collection_displays_plainly() {
        assert_eq!(DomainError::empty_collection().to_string(), "collection is empty");
    }
}
