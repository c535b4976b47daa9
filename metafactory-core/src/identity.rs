//! Identity conventions for candidate types.
//!
//! The factory never reads these traits itself. They are the vocabulary the
//! stock predicates ([`SameId`], [`SameKey`], [`ById`]) understand; a custom
//! predicate is free to identify candidates some other way.
//!
//! [`SameId`]: crate::SameId
//! [`SameKey`]: crate::SameKey
//! [`ById`]: crate::ById

/// A candidate identified by a static string.
///
/// # Example
///
/// ```rust
/// use metafactory_core::Identified;
///
/// struct Circle;
///
/// impl Identified for Circle {
///     const ID: &'static str = "circle";
/// }
///
/// assert_eq!(Circle::ID, "circle");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no string identifier",
    label = "missing `Identified` implementation",
    note = "Implement `Identified` (or derive `Candidate` with `#[candidate(id = \"...\")]`)."
)]
pub trait Identified {
    /// The identifier this candidate answers to.
    const ID: &'static str;
}

/// A candidate identified by a constant of an arbitrary key type.
///
/// Use this for enum, integer, or other non-string keys.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no key of type `{K}`",
    label = "missing `Keyed<{K}>` implementation",
    note = "Implement `Keyed<{K}>` (or derive `Candidate` with `#[candidate(key = ..., key_type = ...)]`)."
)]
pub trait Keyed<K> {
    /// The key this candidate answers to.
    const KEY: K;
}
