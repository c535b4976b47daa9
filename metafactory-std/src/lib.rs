//! # metafactory-std
//!
//! Standard implementations for the metafactory type-dispatch factory.
//!
//! This crate provides:
//! - **Candidate lists**: [`HCons`], [`HNil`], the [`Candidates!`] type macro
//! - **Sum results**: [`Coproduct`], [`CNil`], type-indexed access
//! - **Selection**: the shared first-match scan ([`Scan`], [`Select`])
//! - **Factory**: [`MetaFactory`] and its `produce_*` operations
//! - **Testing**: construction logs, drop counters, counting predicates
//!
//! [`HCons`]: candidates::HCons
//! [`HNil`]: candidates::HNil
//! [`Coproduct`]: coproduct::Coproduct
//! [`CNil`]: coproduct::CNil
//! [`Scan`]: select::Scan
//! [`Select`]: select::Select
//! [`MetaFactory`]: factory::MetaFactory

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use metafactory_core;

// Modules
pub mod candidates;
pub mod coproduct;
pub mod factory;
pub mod select;
pub mod testing;
