//! Type-level candidate lists.
//!
//! A candidate list is an HList of *types*, never instantiated:
//! `HCons<A, HCons<B, HNil>>`, usually spelled `Candidates![A, B]`. The
//! nesting order is the declaration order, and the dispatch recursion walks
//! it head first, which is what gives the factory its first-match-wins
//! tie-break.

use crate::coproduct::{CNil, Coproduct, CoproductMeta};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// HList terminator - the empty candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HNil;

/// HList cons cell - candidate `H` followed by the candidates in `T`.
pub struct HCons<H, T> {
    _marker: PhantomData<fn() -> (H, T)>,
}

impl<H, T> HCons<H, T> {
    /// The (zero-sized) value of this list type.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

// Written by hand so that none of them bound the candidate types.

impl<H, T> Clone for HCons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for HCons<H, T> {}

impl<H, T> Default for HCons<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, T> PartialEq for HCons<H, T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<H, T> Eq for HCons<H, T> {}

impl<H, T> Hash for HCons<H, T> {
    fn hash<S: Hasher>(&self, _state: &mut S) {}
}

impl<H, T: CandidateList> fmt::Debug for HCons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HCons").field(&Self::names()).finish()
    }
}

/// A statically known, ordered list of candidate types.
pub trait CandidateList: HListLen {
    /// The closed sum of every candidate in the list, in order.
    type Coproduct: CoproductMeta;

    /// Appends the candidate type names, in declaration order.
    fn collect_names(out: &mut Vec<&'static str>);

    /// The candidate type names, in declaration order.
    fn names() -> Vec<&'static str> {
        let mut out = Vec::with_capacity(Self::LEN);
        Self::collect_names(&mut out);
        out
    }
}

impl CandidateList for HNil {
    type Coproduct = CNil;

    fn collect_names(_out: &mut Vec<&'static str>) {}
}

impl<H, T: CandidateList> CandidateList for HCons<H, T> {
    type Coproduct = Coproduct<H, T::Coproduct>;

    fn collect_names(out: &mut Vec<&'static str>) {
        out.push(std::any::type_name::<H>());
        T::collect_names(out);
    }
}

// ============================================================================
// HList Length
// ============================================================================

/// Trait for computing HList length at compile time.
pub trait HListLen {
    /// The length of this HList.
    const LEN: usize;
}

impl HListLen for HNil {
    const LEN: usize = 0;
}

impl<H, T: HListLen> HListLen for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

// ============================================================================
// Macro
// ============================================================================

/// Spell a candidate list type.
///
/// # Example
/// ```ignore
/// type Shapes = Candidates![Circle, Square, Triangle];
/// ```
#[macro_export]
macro_rules! Candidates {
    () => { $crate::candidates::HNil };
    ($head:ty $(,)?) => {
        $crate::candidates::HCons<$head, $crate::candidates::HNil>
    };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        $crate::candidates::HCons<$head, $crate::Candidates!($($rest),+)>
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct A;
    struct B;
    struct C;

    #[test]
    fn test_len() {
        assert_eq!(<Candidates![] as HListLen>::LEN, 0);
        assert_eq!(<Candidates![A] as HListLen>::LEN, 1);
        assert_eq!(<Candidates![A, B, C,] as HListLen>::LEN, 3);
    }

    #[test]
    fn test_cons_cells_need_nothing_from_candidates() {
        // `A`, `B` and `C` implement none of these traits.
        let list = <Candidates![A, B, C]>::default();
        let copy = list;
        assert_eq!(list.clone(), copy);
        assert_eq!(HCons::<A, HNil>::new(), HCons::<A, HNil>::default());

        let debug = format!("{list:?}");
        assert!(debug.starts_with("HCons(["));
        assert!(debug.contains("::A"));
        assert!(debug.contains("::C"));
        assert_eq!(format!("{:?}", HNil), "HNil");
    }

    #[test]
    fn test_names_in_declaration_order() {
        let names = <Candidates![C, A, B]>::names();
        assert_eq!(names.len(), 3);
        assert!(names[0].ends_with("::C"));
        assert!(names[1].ends_with("::A"));
        assert!(names[2].ends_with("::B"));
    }
}
