//! The dispatch factory.
//!
//! A [`MetaFactory`] pairs a candidate list (a type) with a match predicate (a
//! value). Each `produce_*` call scans the list in declaration order, builds
//! the first candidate the predicate accepts from the forwarded arguments,
//! and returns it either as a closed sum ([`Variant`]) or as an owned
//! capability handle (`Box<B>`).
//!
//! A miss is a normal outcome: the variant holds its default member and the
//! handle is `None`.

use crate::candidates::{CandidateList, HListLen};
use crate::coproduct::{Coproduct, IntoBase};
use crate::select::{Scan, Select};
use metafactory_core::{Empty, FactoryError};
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "tracing")]
use crate::coproduct::CoproductMeta;

/// The closed sum `{D, T1, ..., Tn}` produced for candidate list `L`.
///
/// `Inl` holds the default member; `Inr` holds the matched candidate.
pub type Variant<D, L> = Coproduct<D, <L as CandidateList>::Coproduct>;

/// A type-dispatch factory over candidate list `L` using predicate `P`.
///
/// The candidate list costs nothing at runtime: the factory stores only the
/// predicate, and can be built once and reused for any number of calls.
///
/// # Example
///
/// ```rust
/// use metafactory_core::{Construct, Identified, SameId};
/// use metafactory_std::{Candidates, factory::MetaFactory};
///
/// struct Tcp(u16);
/// struct Udp(u16);
///
/// impl Identified for Tcp { const ID: &'static str = "tcp"; }
/// impl Identified for Udp { const ID: &'static str = "udp"; }
///
/// impl Construct<(u16,)> for Tcp {
///     fn construct((port,): (u16,)) -> Self { Tcp(port) }
/// }
/// impl Construct<(u16,)> for Udp {
///     fn construct((port,): (u16,)) -> Self { Udp(port) }
/// }
///
/// let factory = MetaFactory::<Candidates![Tcp, Udp], _>::new(SameId);
///
/// let product = factory.produce_variant("udp", (53u16,));
/// assert_eq!(product.get::<Udp, _>().map(|u| u.0), Some(53));
///
/// let missing = factory.produce_variant("icmp", (0u16,));
/// assert!(missing.head().is_some());
/// ```
pub struct MetaFactory<L, P> {
    predicate: P,
    _candidates: PhantomData<fn() -> L>,
}

/// Creates a [`MetaFactory`] over candidate list `L`.
///
/// ```rust,ignore
/// let factory = meta_factory::<Candidates![A, B], _>(SameId);
/// ```
pub const fn meta_factory<L, P>(predicate: P) -> MetaFactory<L, P> {
    MetaFactory::new(predicate)
}

impl<L, P> MetaFactory<L, P> {
    /// Creates a factory that stores `predicate` by value.
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            _candidates: PhantomData,
        }
    }

    /// The match predicate.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Consumes the factory, returning the predicate.
    pub fn into_predicate(self) -> P {
        self.predicate
    }
}

impl<L: CandidateList, P> MetaFactory<L, P> {
    /// Number of candidates.
    pub const fn len(&self) -> usize {
        <L as HListLen>::LEN
    }

    /// Returns `true` if the candidate list is empty.
    pub const fn is_empty(&self) -> bool {
        <L as HListLen>::LEN == 0
    }

    /// Candidate type names, in declaration order.
    pub fn candidate_names(&self) -> Vec<&'static str> {
        L::names()
    }

    /// Produces a variant whose default member is `D`.
    ///
    /// Candidates are tested in declaration order. The first match is built
    /// from `args` and stored as the active member; no later candidate is
    /// tested. If nothing matches, the active member is `D::default()` and
    /// `args` is dropped without being passed to it.
    ///
    /// `D::default()` runs only on a miss. A hit never builds the default
    /// member, so a `Default` impl with side effects observes misses only.
    ///
    /// The key and argument types are inferred:
    /// `factory.produce_variant_with_default::<Fallback, _, _>("id", (arg,))`.
    pub fn produce_variant_with_default<D, K, Args>(&self, id: &K, args: Args) -> Variant<D, L>
    where
        D: Default,
        K: ?Sized,
        L: Select<P, K, Args>,
    {
        let product = match L::select(&self.predicate, id, args) {
            Ok(matched) => Coproduct::Inr(matched),
            Err(_unused) => Coproduct::Inl(D::default()),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            selected = product.type_name(),
            index = product.index(),
            "variant produced"
        );

        product
    }

    /// Produces a variant whose default member is [`Empty`].
    pub fn produce_variant<K, Args>(&self, id: &K, args: Args) -> Variant<Empty, L>
    where
        K: ?Sized,
        L: Select<P, K, Args>,
    {
        self.produce_variant_with_default::<Empty, K, Args>(id, args)
    }

    /// Produces an owned handle to capability `B`.
    ///
    /// Uses the same first-match scan as the variant producers. On a match the
    /// candidate is moved to the heap and upcast to `B`; the returned box is
    /// its only owner. On a miss nothing is allocated and `None` is returned.
    ///
    /// ```rust,ignore
    /// let shape: Option<Box<dyn Shape>> = factory.produce_ptr_to::<dyn Shape, _, _>("circle", (2.0,));
    /// ```
    pub fn produce_ptr_to<B, K, Args>(&self, id: &K, args: Args) -> Option<Box<B>>
    where
        B: ?Sized,
        K: ?Sized,
        L: Select<P, K, Args>,
        L::Coproduct: IntoBase<B>,
    {
        match L::select(&self.predicate, id, args) {
            Ok(matched) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    selected = matched.type_name(),
                    base = std::any::type_name::<B>(),
                    "handle produced"
                );

                Some(matched.into_base())
            }
            Err(_unused) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(base = std::any::type_name::<B>(), "no candidate matched");

                None
            }
        }
    }

    /// Like [`produce_ptr_to`](Self::produce_ptr_to), but reports a miss as
    /// [`FactoryError::NoMatch`].
    pub fn try_produce_ptr_to<B, K, Args>(&self, id: &K, args: Args) -> Result<Box<B>, FactoryError>
    where
        B: ?Sized,
        K: ?Sized + fmt::Debug,
        L: Select<P, K, Args>,
        L::Coproduct: IntoBase<B>,
    {
        self.produce_ptr_to::<B, K, Args>(id, args)
            .ok_or_else(|| FactoryError::no_match(id, self.len()))
    }

    /// Position of the candidate `id` would select, without constructing it.
    pub fn matching_index<K>(&self, id: &K) -> Option<usize>
    where
        K: ?Sized,
        L: Scan<P, K>,
    {
        L::position(&self.predicate, id)
    }
}

impl<L, P: Clone> Clone for MetaFactory<L, P> {
    fn clone(&self) -> Self {
        Self::new(self.predicate.clone())
    }
}

impl<L, P: Copy> Copy for MetaFactory<L, P> {}

impl<L, P: Default> Default for MetaFactory<L, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<L: CandidateList, P: fmt::Debug> fmt::Debug for MetaFactory<L, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaFactory")
            .field("predicate", &self.predicate)
            .field("candidates", &L::names())
            .finish()
    }
}
