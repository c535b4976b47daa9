//! Error types for metafactory.
//!
//! A candidate that matches nothing is not an error: the factory reports it
//! structurally (the default member of a variant, or `None` for a handle).
//! The types here exist for callers that *choose* to treat a miss as a
//! failure, and for candidate constructors that wrap fallible parsing.
//!
//! - [`MetaFactoryError`] - Top-level error type
//! - [`FactoryError`] - Errors raised by the fallible factory helpers

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for metafactory operations.
#[derive(Error, Debug)]
pub enum MetaFactoryError {
    /// An error raised by a factory helper.
    #[error("factory error: {0}")]
    Factory(#[from] FactoryError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised by the opt-in fallible factory helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// No candidate accepted the identifier.
    #[error("no candidate matched identifier {id} (tried {candidates} candidates)")]
    NoMatch {
        /// The identifier, rendered with `Debug`.
        id: String,
        /// How many candidates were tested.
        candidates: usize,
    },
}

impl FactoryError {
    /// Builds a [`FactoryError::NoMatch`] from any debuggable identifier.
    pub fn no_match<K: std::fmt::Debug + ?Sized>(id: &K, candidates: usize) -> Self {
        FactoryError::NoMatch {
            id: format!("{id:?}"),
            candidates,
        }
    }
}

impl From<BoxError> for MetaFactoryError {
    fn from(err: BoxError) -> Self {
        MetaFactoryError::Custom(err)
    }
}
