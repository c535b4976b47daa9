//! # metafactory - Compile-Time Type-Dispatch Factory
//!
//! `metafactory` turns a runtime identifier into a statically typed value.
//! The candidate types are a list fixed at the call site; a predicate picks
//! the first candidate that answers to the identifier, and the factory
//! constructs it from forwarded arguments. There is no runtime registry and
//! no string-keyed map of constructors: every candidate is known, and
//! checked, at compile time.
//!
//! ## Quick Start
//!
//! ```rust
//! use metafactory::prelude::*;
//!
//! #[derive(Debug, PartialEq, Candidate)]
//! #[candidate(id = "A")]
//! struct A { value: i32 }
//!
//! #[derive(Debug, PartialEq, Candidate)]
//! #[candidate(id = "B")]
//! struct B { value: i32 }
//!
//! impl Construct<(&str,)> for A {
//!     fn construct((raw,): (&str,)) -> Self {
//!         A { value: raw.parse().unwrap_or_default() }
//!     }
//! }
//!
//! impl Construct<(&str,)> for B {
//!     fn construct((raw,): (&str,)) -> Self {
//!         B { value: raw.parse().unwrap_or_default() }
//!     }
//! }
//!
//! let factory = MetaFactory::<Candidates![A, B], _>::new(SameId);
//!
//! let product = factory.produce_variant("A", ("42",));
//! assert_eq!(product.get::<A, _>(), Some(&A { value: 42 }));
//!
//! let missing = factory.produce_variant("Z", ("42",));
//! assert_eq!(missing.head(), Some(&Empty));
//! ```
//!
//! ## Two result shapes
//!
//! - **Variant** ([`MetaFactory::produce_variant`],
//!   [`MetaFactory::produce_variant_with_default`]): a [`Coproduct`] holding
//!   either the default member or the matched candidate. `#[derive(Dispatch)]`
//!   gives the same thing as a named enum.
//! - **Handle** ([`MetaFactory::produce_ptr_to`]): `Option<Box<dyn Base>>`,
//!   the single owner of the matched candidate.
//!
//! ## Build-time contracts
//!
//! Every candidate must accept the argument pack:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! struct OnlyNumbers(u32);
//!
//! impl Construct<(u32,)> for OnlyNumbers {
//!     fn construct((n,): (u32,)) -> Self { OnlyNumbers(n) }
//! }
//!
//! let factory = MetaFactory::<Candidates![OnlyNumbers], _>::new(SameId);
//! let _ = factory.produce_variant("OnlyNumbers", ("not a number",));
//! ```
//!
//! Every candidate must provide the requested capability:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! trait Speak {
//!     fn speak(&self) -> &'static str;
//! }
//!
//! #[derive(Candidate)]
//! struct Mute;
//!
//! impl Construct<()> for Mute {
//!     fn construct((): ()) -> Self { Mute }
//! }
//!
//! let factory = MetaFactory::<Candidates![Mute], _>::new(SameId);
//! let _ = factory.produce_ptr_to::<dyn Speak, _, _>("Mute", ());
//! ```
//!
//! The default member must be default-constructible:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! struct NoDefault;
//!
//! #[derive(Candidate)]
//! struct Unit;
//!
//! impl Construct<()> for Unit {
//!     fn construct((): ()) -> Self { Unit }
//! }
//!
//! let factory = MetaFactory::<Candidates![Unit], _>::new(SameId);
//! let _ = factory.produce_variant_with_default::<NoDefault, _, _>("Unit", ());
//! ```
//!
//! The predicate must be able to judge every candidate. `SameId` needs
//! `Identified`, which `Anonymous` lacks:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! struct Named;
//!
//! struct Anonymous;
//!
//! impl Construct<()> for Named {
//!     fn construct((): ()) -> Self { Named }
//! }
//! impl Construct<()> for Anonymous {
//!     fn construct((): ()) -> Self { Anonymous }
//! }
//!
//! let factory = MetaFactory::<Candidates![Named, Anonymous], _>::new(SameId);
//! let _ = factory.produce_variant("Named", ());
//! ```
//!
//! ## Derive errors
//!
//! `#[derive(Dispatch)]` only accepts enums:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Dispatch)]
//! struct NotAnEnum;
//! ```
//!
//! Exactly one variant is the default. None:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! struct Circle;
//!
//! #[derive(Dispatch)]
//! enum Shape {
//!     Circle(Circle),
//! }
//! ```
//!
//! Two:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! struct Circle;
//!
//! #[derive(Dispatch)]
//! enum Shape {
//!     #[dispatch(default)]
//!     Unknown,
//!     #[dispatch(default)]
//!     Blank,
//!     Circle(Circle),
//! }
//! ```
//!
//! Candidate variants hold exactly one unnamed field:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! struct Circle;
//!
//! #[derive(Dispatch)]
//! enum Shape {
//!     #[dispatch(default)]
//!     Unknown,
//!     Pair(Circle, Circle),
//! }
//! ```
//!
//! `default` is the only `dispatch` option:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! struct Circle;
//!
//! #[derive(Dispatch)]
//! enum Shape {
//!     #[dispatch(fallback)]
//!     Unknown,
//!     Circle(Circle),
//! }
//! ```
//!
//! `#[derive(Candidate)]` needs `key` and `key_type` together:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! #[candidate(key = 7u8)]
//! struct Port;
//! ```
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! #[candidate(key_type = u8)]
//! struct Port;
//! ```
//!
//! Unknown attribute keys are rejected:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! #[candidate(name = "port")]
//! struct Port;
//! ```
//!
//! Each of `id`, `key` and `key_type` may be given once, even across
//! several `#[candidate(..)]` attributes:
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! #[candidate(key = 7u8, key_type = u8)]
//! #[candidate(key = 8u8)]
//! struct Port;
//! ```
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! #[candidate(key = 7u8, key_type = u8, key_type = u16)]
//! struct Port;
//! ```
//!
//! ```rust,compile_fail
//! use metafactory::prelude::*;
//!
//! #[derive(Candidate)]
//! #[candidate(id = "port")]
//! #[candidate(id = "socket")]
//! struct Port;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use metafactory_core::{
    // Errors
    BoxError,
    // Predicates
    ById,
    // Construction
    Construct,
    Empty,
    FactoryError,
    // Identity
    Identified,
    Keyed,
    Matches,
    MetaFactoryError,
    SameId,
    SameIdIgnoreAsciiCase,
    SameKey,
    Upcast,
};

// Candidate lists and results
pub use metafactory_std::{
    Candidates,
    candidates::{CandidateList, HCons, HListLen, HNil},
    coproduct::{
        CNil, CoprodInjector, CoprodSelector, Coproduct, CoproductMeta, Here, IntoBase, There,
    },
    factory::{MetaFactory, Variant, meta_factory},
    select::{Scan, Select},
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use metafactory_std::testing::*;
}

/// Prelude module - common imports for metafactory.
///
/// # Usage
///
/// ```rust,ignore
/// use metafactory::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Candidates,
        // Results
        CoproductMeta,
        Coproduct,
        // Contracts
        Construct,
        Empty,
        Identified,
        Keyed,
        Matches,
        // Factory
        MetaFactory,
        // Predicates
        SameId,
        SameKey,
        Upcast,
        meta_factory,
    };

    #[cfg(feature = "macros")]
    pub use crate::{Candidate, Dispatch};
}

#[cfg(feature = "macros")]
pub use metafactory_macros::{Candidate, Dispatch};
