//! Construction contracts.
//!
//! - [`Construct`]: how a candidate is built from the forwarded arguments
//! - [`Upcast`]: how a boxed candidate becomes a boxed capability
//! - [`Empty`]: the implicit "nothing produced" default member

/// Builds `Self` from a forwarded argument pack.
///
/// The pack is a tuple: `()` for no arguments, `(a,)` for one, `(a, b)` for
/// two, and so on. The factory hands the pack, unmodified, to exactly one
/// candidate's `construct`.
///
/// Every candidate in a list must accept the same pack type; a candidate
/// without a matching impl is rejected when the factory call is compiled.
///
/// # Example
///
/// ```rust
/// use metafactory_core::Construct;
///
/// struct Port(u16);
///
/// impl Construct<(&str,)> for Port {
///     fn construct((raw,): (&str,)) -> Self {
///         Port(raw.parse().unwrap_or(0))
///     }
/// }
///
/// assert_eq!(Port::construct(("8080",)).0, 8080);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be constructed from `{Args}`",
    label = "missing `Construct<{Args}>` implementation",
    note = "Every candidate must accept the argument pack passed to `produce_*`."
)]
pub trait Construct<Args>: Sized {
    /// Builds the candidate.
    fn construct(args: Args) -> Self;
}

/// Converts a boxed candidate into a boxed capability `B`.
///
/// For a trait object `B = dyn Base` the body is just `self`: the unsizing
/// coercion only compiles when the candidate implements `Base`, which is what
/// makes pointer-mode dispatch a build-time checked contract.
///
/// ```rust
/// use metafactory_core::Upcast;
///
/// trait Shape {
///     fn sides(&self) -> u32;
/// }
///
/// struct Triangle;
/// impl Shape for Triangle {
///     fn sides(&self) -> u32 { 3 }
/// }
///
/// impl Upcast<dyn Shape> for Triangle {
///     fn upcast(self: Box<Self>) -> Box<dyn Shape> {
///         self
///     }
/// }
///
/// let shape: Box<dyn Shape> = Box::new(Triangle).upcast();
/// assert_eq!(shape.sides(), 3);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as `{B}`",
    label = "missing `Upcast<{B}>` implementation",
    note = "Implement the capability for `{Self}` and add `Upcast` (or `#[candidate(base = ...)]`)."
)]
pub trait Upcast<B: ?Sized> {
    /// Transfers ownership of the boxed candidate into a `Box<B>`.
    fn upcast(self: Box<Self>) -> Box<B>;
}

/// The implicit default member: nothing was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Empty;

impl Construct<()> for Empty {
    fn construct((): ()) -> Self {
        Empty
    }
}
