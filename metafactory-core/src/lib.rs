//! # metafactory-core
//!
//! Core contracts for the metafactory type-dispatch factory.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that only *define* candidate types and predicates, without pulling
//! in the dispatch machinery from `metafactory-std`.
//!
//! # Contracts
//!
//! A dispatch involves three parties, each with its own contract:
//!
//! ## Identity ([`Identified`], [`Keyed`])
//!
//! How a candidate type names itself. These are conventions: the factory never
//! reads them directly, only the predicate does.
//!
//! ## Predicate ([`Matches`])
//!
//! The caller-supplied test deciding whether a candidate type corresponds to a
//! runtime identifier. One predicate value serves every candidate in a list.
//!
//! ## Construction ([`Construct`], [`Upcast`])
//!
//! How the chosen candidate is built from the forwarded arguments, and, for
//! pointer-mode dispatch, how it is handed out as a boxed capability.
//!
//! # Error Types
//!
//! - [`MetaFactoryError`] - Top-level error type
//! - [`FactoryError`] - Errors from the opt-in fallible helpers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod construct;
mod error;
mod identity;
mod predicate;

// Re-exports
pub use construct::{Construct, Empty, Upcast};
pub use error::{BoxError, FactoryError, MetaFactoryError};
pub use identity::{Identified, Keyed};
pub use predicate::{ById, Matches, SameId, SameIdIgnoreAsciiCase, SameKey};
