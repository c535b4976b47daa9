//! Closed sum types over a candidate list.
//!
//! `Coproduct<H, T>` is either an `H` (`Inl`) or something from the rest of
//! the sum (`Inr`), and the chain ends in the uninhabited [`CNil`]. For a
//! candidate list `[A, B]` with default `D` the variant result is
//!
//! ```text
//! Coproduct<D, Coproduct<A, Coproduct<B, CNil>>>
//! ```
//!
//! which holds exactly one of `D`, `A`, `B`. Matching on it is exhaustive:
//!
//! ```rust
//! use metafactory_std::coproduct::{CNil, Coproduct};
//!
//! let value: Coproduct<(), Coproduct<u8, Coproduct<&str, CNil>>> =
//!     Coproduct::Inr(Coproduct::Inl(7));
//!
//! let described = match value {
//!     Coproduct::Inl(()) => "nothing".to_string(),
//!     Coproduct::Inr(Coproduct::Inl(n)) => format!("number {n}"),
//!     Coproduct::Inr(Coproduct::Inr(Coproduct::Inl(s))) => format!("text {s}"),
//!     Coproduct::Inr(Coproduct::Inr(Coproduct::Inr(never))) => match never {},
//! };
//! assert_eq!(described, "number 7");
//! ```
//!
//! Access by type goes through type-level indices ([`Here`], [`There`]) that
//! the compiler infers: `value.get::<u8, _>()`.

use metafactory_core::Upcast;
use std::marker::PhantomData;

/// A binary sum: the head type `H`, or one of the types in the tail `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coproduct<H, T> {
    /// The head member is active.
    Inl(H),
    /// A tail member is active.
    Inr(T),
}

/// The empty sum. No value of this type exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CNil {}

impl CNil {
    /// Eliminates the impossible value.
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

/// Type-level index: the head of a coproduct.
#[derive(Debug, Clone, Copy, Default)]
pub struct Here;

/// Type-level index: somewhere in the tail, at index `I`.
#[derive(Debug, Clone, Copy, Default)]
pub struct There<I>(PhantomData<I>);

// ============================================================================
// Selection by type
// ============================================================================

/// Borrows or extracts member `S` located at index `I`.
pub trait CoprodSelector<S, I> {
    /// Borrows the member if it is active.
    fn get(&self) -> Option<&S>;

    /// Mutably borrows the member if it is active.
    fn get_mut(&mut self) -> Option<&mut S>;

    /// Extracts the member if it is active.
    fn take(self) -> Option<S>
    where
        Self: Sized;
}

impl<H, T> CoprodSelector<H, Here> for Coproduct<H, T> {
    fn get(&self) -> Option<&H> {
        match self {
            Coproduct::Inl(head) => Some(head),
            Coproduct::Inr(_) => None,
        }
    }

    fn get_mut(&mut self) -> Option<&mut H> {
        match self {
            Coproduct::Inl(head) => Some(head),
            Coproduct::Inr(_) => None,
        }
    }

    fn take(self) -> Option<H> {
        match self {
            Coproduct::Inl(head) => Some(head),
            Coproduct::Inr(_) => None,
        }
    }
}

impl<H, T, S, I> CoprodSelector<S, There<I>> for Coproduct<H, T>
where
    T: CoprodSelector<S, I>,
{
    fn get(&self) -> Option<&S> {
        match self {
            Coproduct::Inl(_) => None,
            Coproduct::Inr(tail) => tail.get(),
        }
    }

    fn get_mut(&mut self) -> Option<&mut S> {
        match self {
            Coproduct::Inl(_) => None,
            Coproduct::Inr(tail) => tail.get_mut(),
        }
    }

    fn take(self) -> Option<S> {
        match self {
            Coproduct::Inl(_) => None,
            Coproduct::Inr(tail) => tail.take(),
        }
    }
}

/// Builds a coproduct with member `S` (at index `I`) active.
pub trait CoprodInjector<S, I> {
    /// Wraps `value` in the right number of `Inr`s.
    fn inject(value: S) -> Self;
}

impl<H, T> CoprodInjector<H, Here> for Coproduct<H, T> {
    fn inject(value: H) -> Self {
        Coproduct::Inl(value)
    }
}

impl<H, T, S, I> CoprodInjector<S, There<I>> for Coproduct<H, T>
where
    T: CoprodInjector<S, I>,
{
    fn inject(value: S) -> Self {
        Coproduct::Inr(T::inject(value))
    }
}

impl<H, T> Coproduct<H, T> {
    /// Builds a coproduct with `value` as the active member.
    pub fn inject<S, I>(value: S) -> Self
    where
        Self: CoprodInjector<S, I>,
    {
        <Self as CoprodInjector<S, I>>::inject(value)
    }

    /// Borrows the member of type `S`, if it is the active one.
    pub fn get<S, I>(&self) -> Option<&S>
    where
        Self: CoprodSelector<S, I>,
    {
        CoprodSelector::get(self)
    }

    /// Mutably borrows the member of type `S`, if it is the active one.
    pub fn get_mut<S, I>(&mut self) -> Option<&mut S>
    where
        Self: CoprodSelector<S, I>,
    {
        CoprodSelector::get_mut(self)
    }

    /// Extracts the member of type `S`, if it is the active one.
    pub fn take<S, I>(self) -> Option<S>
    where
        Self: CoprodSelector<S, I>,
    {
        CoprodSelector::take(self)
    }

    /// Returns `true` if the active member has type `S`.
    pub fn is<S, I>(&self) -> bool
    where
        Self: CoprodSelector<S, I>,
    {
        CoprodSelector::get(self).is_some()
    }

    /// Borrows the head member, if active.
    ///
    /// For a variant result this is the default member.
    pub fn head(&self) -> Option<&H> {
        CoprodSelector::<H, Here>::get(self)
    }

    /// Borrows the tail, if a tail member is active.
    pub fn tail(&self) -> Option<&T> {
        match self {
            Coproduct::Inl(_) => None,
            Coproduct::Inr(tail) => Some(tail),
        }
    }

    /// Extracts the tail, if a tail member is active.
    ///
    /// For a variant result this is the matched candidate, if any.
    pub fn into_tail(self) -> Option<T> {
        match self {
            Coproduct::Inl(_) => None,
            Coproduct::Inr(tail) => Some(tail),
        }
    }
}

// ============================================================================
// Introspection
// ============================================================================

/// Position and type name of the active member.
pub trait CoproductMeta {
    /// Zero-based position of the active member.
    fn index(&self) -> usize;

    /// `std::any::type_name` of the active member.
    fn type_name(&self) -> &'static str;
}

impl CoproductMeta for CNil {
    fn index(&self) -> usize {
        match *self {}
    }

    fn type_name(&self) -> &'static str {
        match *self {}
    }
}

impl<H, T: CoproductMeta> CoproductMeta for Coproduct<H, T> {
    fn index(&self) -> usize {
        match self {
            Coproduct::Inl(_) => 0,
            Coproduct::Inr(tail) => 1 + tail.index(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Coproduct::Inl(_) => std::any::type_name::<H>(),
            Coproduct::Inr(tail) => tail.type_name(),
        }
    }
}

// ============================================================================
// Boxing into a capability
// ============================================================================

/// Moves the active member into a `Box<B>`.
///
/// Implemented when every member of the sum is [`Upcast<B>`].
pub trait IntoBase<B: ?Sized> {
    /// Boxes the active member and upcasts it.
    fn into_base(self) -> Box<B>;
}

impl<B: ?Sized> IntoBase<B> for CNil {
    fn into_base(self) -> Box<B> {
        match self {}
    }
}

impl<B, H, T> IntoBase<B> for Coproduct<H, T>
where
    B: ?Sized,
    H: Upcast<B>,
    T: IntoBase<B>,
{
    fn into_base(self) -> Box<B> {
        match self {
            Coproduct::Inl(head) => Box::new(head).upcast(),
            Coproduct::Inr(tail) => tail.into_base(),
        }
    }
}
