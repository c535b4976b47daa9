//! Testing utilities for metafactory.
//!
//! Candidates are built through an associated function (`Construct::construct`)
//! with no `self`, so test doubles observe them through shared handles passed
//! in the forwarded argument pack.
//!
//! # Features
//!
//! - [`ConstructionLog`]: records which candidate constructors ran
//! - [`DropCounter`]: counts how many instances were released
//! - [`CountingPredicate`]: records which candidates a predicate was asked about

use metafactory_core::Matches;
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Construction Log
// ============================================================================

/// A shared log of constructor invocations.
///
/// # Example
///
/// ```rust,ignore
/// let log = ConstructionLog::new();
///
/// impl Construct<(ConstructionLog,)> for Circle {
///     fn construct((log,): (ConstructionLog,)) -> Self {
///         log.record("Circle");
///         Circle
///     }
/// }
///
/// factory.produce_variant("circle", (log.clone(),));
/// assert_eq!(log.entries(), vec!["Circle"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstructionLog {
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl ConstructionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` was constructed.
    pub fn record(&self, name: &'static str) {
        lock(&self.entries).push(name);
    }

    /// Get a copy of the recorded entries, oldest first.
    pub fn entries(&self) -> Vec<&'static str> {
        lock(&self.entries).clone()
    }

    /// How many times `name` was constructed.
    pub fn count_of(&self, name: &str) -> usize {
        lock(&self.entries).iter().filter(|e| **e == name).count()
    }

    /// Total number of recorded constructions.
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    /// Returns `true` if nothing was constructed.
    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        lock(&self.entries).clear();
    }
}

// ============================================================================
// Drop Counter
// ============================================================================

/// Counts releases of the values holding its [`DropToken`]s.
///
/// # Example
///
/// ```rust
/// use metafactory_std::testing::DropCounter;
///
/// let counter = DropCounter::new();
/// let token = counter.token();
/// assert_eq!(counter.drops(), 0);
/// drop(token);
/// assert_eq!(counter.drops(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    drops: Arc<AtomicUsize>,
}

impl DropCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token that bumps the counter when dropped.
    pub fn token(&self) -> DropToken {
        DropToken {
            drops: self.drops.clone(),
        }
    }

    /// Number of tokens dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// Increments its [`DropCounter`] exactly once, when dropped.
#[derive(Debug)]
pub struct DropToken {
    drops: Arc<AtomicUsize>,
}

impl Drop for DropToken {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Counting Predicate
// ============================================================================

/// Wraps a predicate and records every candidate it is asked about.
///
/// Useful for checking that the scan stops at the first match.
#[derive(Debug, Clone, Default)]
pub struct CountingPredicate<P> {
    inner: P,
    asked: Arc<Mutex<Vec<&'static str>>>,
}

impl<P> CountingPredicate<P> {
    /// Wrap `inner`.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            asked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Type names of the candidates tested so far, in order.
    pub fn asked(&self) -> Vec<&'static str> {
        lock(&self.asked).clone()
    }

    /// Number of predicate evaluations so far.
    pub fn evaluations(&self) -> usize {
        lock(&self.asked).len()
    }

    /// Forget recorded evaluations.
    pub fn reset(&self) {
        lock(&self.asked).clear();
    }
}

impl<T, K, P> Matches<T, K> for CountingPredicate<P>
where
    K: ?Sized,
    P: Matches<T, K>,
{
    fn matches(&self, id: &K) -> bool {
        lock(&self.asked).push(std::any::type_name::<T>());
        self.inner.matches(id)
    }
}
