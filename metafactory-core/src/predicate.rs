//! # Match Predicates
//!
//! A match predicate decides whether a candidate type corresponds to a runtime
//! identifier. It is a single value, stored once in the factory and asked once
//! per candidate, so it is generic over the candidate *type*: a predicate
//! implements [`Matches<T, K>`] for every candidate `T` it can judge against
//! keys of type `K`.
//!
//! Most predicates are a single blanket impl over an identity trait:
//!
//! - [`SameId`]: `T::ID == id` for [`Identified`] candidates
//! - [`SameIdIgnoreAsciiCase`]: the same, ignoring ASCII case
//! - [`SameKey`]: `T::KEY == id` for [`Keyed`] candidates
//! - [`ById`]: a closure receiving `T::ID` and the identifier
//!
//! Predicates hold no state the factory depends on. They may capture
//! configuration (see [`ById`]).

use crate::identity::{Identified, Keyed};
use std::fmt;

/// Decides whether candidate `T` answers to an identifier of type `K`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot judge candidate `{T}` against identifiers of type `{K}`",
    label = "missing `Matches<{T}, {K}>` implementation",
    note = "Every candidate in the list needs a `Matches` impl on the predicate; stock predicates require `Identified` or `Keyed`."
)]
pub trait Matches<T: ?Sized, K: ?Sized> {
    /// Returns `true` if `T` corresponds to `id`.
    fn matches(&self, id: &K) -> bool;
}

impl<T, K, P> Matches<T, K> for &P
where
    T: ?Sized,
    K: ?Sized,
    P: Matches<T, K> + ?Sized,
{
    fn matches(&self, id: &K) -> bool {
        (**self).matches(id)
    }
}

/// Exact string comparison against [`Identified::ID`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SameId;

impl<T: Identified> Matches<T, str> for SameId {
    fn matches(&self, id: &str) -> bool {
        T::ID == id
    }
}

impl<T: Identified> Matches<T, String> for SameId {
    fn matches(&self, id: &String) -> bool {
        T::ID == id.as_str()
    }
}

/// ASCII case-insensitive comparison against [`Identified::ID`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SameIdIgnoreAsciiCase;

impl<T: Identified> Matches<T, str> for SameIdIgnoreAsciiCase {
    fn matches(&self, id: &str) -> bool {
        T::ID.eq_ignore_ascii_case(id)
    }
}

impl<T: Identified> Matches<T, String> for SameIdIgnoreAsciiCase {
    fn matches(&self, id: &String) -> bool {
        T::ID.eq_ignore_ascii_case(id)
    }
}

/// Equality against [`Keyed::KEY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SameKey;

impl<T, K> Matches<T, K> for SameKey
where
    T: Keyed<K>,
    K: PartialEq,
{
    fn matches(&self, id: &K) -> bool {
        T::KEY == *id
    }
}

/// A predicate built from a closure over the candidate's [`Identified::ID`].
///
/// The closure receives the candidate's identifier first and the runtime
/// identifier second.
///
/// # Example
///
/// ```rust
/// use metafactory_core::{ById, Identified, Matches};
///
/// struct Circle;
/// impl Identified for Circle {
///     const ID: &'static str = "circle";
/// }
///
/// let prefix = ById::new(|candidate: &'static str, id: &str| candidate.starts_with(id));
/// assert!(Matches::<Circle, str>::matches(&prefix, "circ"));
/// assert!(!Matches::<Circle, str>::matches(&prefix, "square"));
/// ```
#[derive(Clone, Copy)]
pub struct ById<F> {
    compare: F,
}

impl<F> ById<F> {
    /// Wraps a comparison closure.
    pub const fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<F> fmt::Debug for ById<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ById").finish_non_exhaustive()
    }
}

impl<T, K, F> Matches<T, K> for ById<F>
where
    T: Identified,
    K: ?Sized,
    F: Fn(&'static str, &K) -> bool,
{
    fn matches(&self, id: &K) -> bool {
        (self.compare)(T::ID, id)
    }
}
