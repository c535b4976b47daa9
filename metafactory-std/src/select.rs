//! First-match selection over a candidate list.
//!
//! Both traits recurse head first through `HCons`, so candidates are tested in
//! declaration order, and stop at the first candidate the predicate accepts.
//! Candidates after the winner are never tested and never constructed.

use crate::candidates::{CandidateList, HCons, HNil};
use crate::coproduct::{CNil, Coproduct};
use metafactory_core::{Construct, Matches};

/// Predicate-only scan: which candidate would be chosen.
pub trait Scan<P, K: ?Sized>: CandidateList {
    /// Zero-based position of the first candidate `predicate` accepts.
    fn position(predicate: &P, id: &K) -> Option<usize>;
}

impl<P, K: ?Sized> Scan<P, K> for HNil {
    fn position(_predicate: &P, _id: &K) -> Option<usize> {
        None
    }
}

impl<P, K, H, T> Scan<P, K> for HCons<H, T>
where
    K: ?Sized,
    P: Matches<H, K>,
    T: Scan<P, K>,
{
    fn position(predicate: &P, id: &K) -> Option<usize> {
        if predicate.matches(id) {
            Some(0)
        } else {
            T::position(predicate, id).map(|i| i + 1)
        }
    }
}

/// Scan and construct: builds the first accepted candidate from `args`.
///
/// On a miss the argument pack is handed back untouched in `Err`.
pub trait Select<P, K: ?Sized, Args>: CandidateList {
    /// Selects and constructs the first candidate `predicate` accepts.
    fn select(predicate: &P, id: &K, args: Args) -> Result<Self::Coproduct, Args>;
}

impl<P, K: ?Sized, Args> Select<P, K, Args> for HNil {
    fn select(_predicate: &P, _id: &K, args: Args) -> Result<CNil, Args> {
        Err(args)
    }
}

impl<P, K, Args, H, T> Select<P, K, Args> for HCons<H, T>
where
    K: ?Sized,
    P: Matches<H, K>,
    H: Construct<Args>,
    T: Select<P, K, Args>,
{
    fn select(predicate: &P, id: &K, args: Args) -> Result<Self::Coproduct, Args> {
        if predicate.matches(id) {
            #[cfg(feature = "tracing")]
            tracing::trace!(candidate = std::any::type_name::<H>(), "candidate matched");

            Ok(Coproduct::Inl(H::construct(args)))
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(candidate = std::any::type_name::<H>(), "candidate skipped");

            T::select(predicate, id, args).map(Coproduct::Inr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metafactory_core::{Identified, SameId};

    #[derive(Debug, PartialEq)]
    struct Red(u8);
    #[derive(Debug, PartialEq)]
    struct Green(u8);

    impl Identified for Red {
        const ID: &'static str = "red";
    }
    impl Identified for Green {
        const ID: &'static str = "green";
    }
    impl Construct<(u8,)> for Red {
        fn construct((v,): (u8,)) -> Self {
            Red(v)
        }
    }
    impl Construct<(u8,)> for Green {
        fn construct((v,): (u8,)) -> Self {
            Green(v)
        }
    }

    type Colors = crate::Candidates![Red, Green];

    #[test]
    fn test_position() {
        assert_eq!(<Colors as Scan<_, str>>::position(&SameId, "red"), Some(0));
        assert_eq!(<Colors as Scan<_, str>>::position(&SameId, "green"), Some(1));
        assert_eq!(<Colors as Scan<_, str>>::position(&SameId, "blue"), None);
    }

    #[test]
    fn test_select_hit() {
        let selected = Colors::select(&SameId, "green", (9u8,)).ok();
        assert_eq!(
            selected.and_then(|c| c.take::<Green, _>()),
            Some(Green(9))
        );
    }

    #[test]
    fn test_select_miss_returns_args() {
        let result = <Colors as Select<_, str, _>>::select(&SameId, "blue", (5u8,));
        assert_eq!(result.err(), Some((5,)));
    }

    #[test]
    fn test_empty_list() {
        let result = <HNil as Select<_, str, _>>::select(&SameId, "red", ());
        assert!(result.is_err());
        assert_eq!(<HNil as Scan<SameId, str>>::position(&SameId, "red"), None);
    }
}
