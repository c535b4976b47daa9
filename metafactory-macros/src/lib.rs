//! Derive macros for metafactory.
//!
//! - `#[derive(Candidate)]` - identity and capability impls for a candidate type
//! - `#[derive(Dispatch)]` - a named sum type with a first-match `produce` constructor
//!
//! Generated code refers to the `metafactory` facade crate.

use proc_macro::TokenStream;

mod candidate;
mod dispatch;

/// Derive macro implementing `Identified`, and optionally `Keyed` and
/// `Upcast`, for a candidate type.
///
/// # Attributes
///
/// - `id = "..."`: the string identifier (defaults to the type name)
/// - `key = <expr>, key_type = <type>`: a non-string key
/// - `base = <type>`: implement `Upcast<type>`; may be repeated
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Candidate)]
/// #[candidate(id = "circle", base = dyn Shape)]
/// struct Circle { radius: f64 }
/// ```
#[proc_macro_derive(Candidate, attributes(candidate))]
pub fn derive_candidate(item: TokenStream) -> TokenStream {
    candidate::candidate_impl(item)
}

/// Derive macro turning an enum into a dispatch result.
///
/// Exactly one variant carries `#[dispatch(default)]` and is either a unit
/// variant or holds one `Default` field. Every other variant holds exactly one
/// candidate type. Candidates are tried in declaration order.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Dispatch)]
/// enum Shape {
///     #[dispatch(default)]
///     Unknown,
///     Circle(Circle),
///     Square(Square),
/// }
///
/// let shape = Shape::produce(&SameId, "circle", (2.0,));
/// ```
#[proc_macro_derive(Dispatch, attributes(dispatch))]
pub fn derive_dispatch(item: TokenStream) -> TokenStream {
    dispatch::dispatch_impl(item)
}
