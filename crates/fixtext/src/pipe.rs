//! The composition protocol: algorithms as values, chainable with `|`.
//!
//! Every algorithm in the crate is a small value implementing
//! [`Transform`]. It can be invoked directly (`trim().apply(text)`) or
//! piped (`text | trim()`), and two algorithm values combine into a new one
//! (`trim() | to_lower()`) that applies them left to right. Parameterized
//! algorithms such as `split(',')` are ordinary structs capturing their
//! parameters, so they satisfy the same contract.

use core::ops::BitOr;

use crate::text::FixedText;

/// A pure text transformation.
///
/// The input type is generic, which makes algorithms capacity-polymorphic:
/// a concrete algorithm implements `Transform<FixedText<N>>` for every `N`,
/// and alone decides how the output capacity derives from the input's.
pub trait Transform<I> {
    /// Result of applying the transformation.
    type Output;

    /// Applies the transformation to `input`. Equivalent to `input | self`.
    fn apply(&self, input: I) -> Self::Output;
}

/// Two transformations fused into one, applying `first` then `second`.
///
/// Built by the `|` operator on algorithm values. Chaining is associative:
/// `(f | g) | h` and `f | (g | h)` apply `f`, `g`, `h` in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain<F, G> {
    first: F,
    second: G,
}

impl<F, G> Chain<F, G> {
    pub(crate) fn new(first: F, second: G) -> Self {
        Self { first, second }
    }
}

impl<I, F, G> Transform<I> for Chain<F, G>
where
    F: Transform<I>,
    G: Transform<F::Output>,
{
    type Output = G::Output;

    fn apply(&self, input: I) -> Self::Output {
        self.second.apply(self.first.apply(input))
    }
}

impl<F, G, Rhs> BitOr<Rhs> for Chain<F, G> {
    type Output = Chain<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        Chain::new(self, rhs)
    }
}

/// `text | algo` is `algo.apply(text)`.
impl<const N: usize, T> BitOr<T> for FixedText<N>
where
    T: Transform<FixedText<N>>,
{
    type Output = T::Output;

    fn bitor(self, op: T) -> T::Output {
        op.apply(self)
    }
}

/// Implements `|`-composition for a concrete algorithm type. Generic
/// parameters are bracket-delimited: `pipeable!([const P: usize] Split<P>)`.
macro_rules! pipeable {
    ($name:ident) => {
        impl<Rhs> core::ops::BitOr<Rhs> for $name {
            type Output = $crate::pipe::Chain<$name, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                $crate::pipe::Chain::new(self, rhs)
            }
        }
    };
    ([$($gen:tt)*] $name:ident<$($arg:tt),*>) => {
        impl<$($gen)*, Rhs> core::ops::BitOr<Rhs> for $name<$($arg),*> {
            type Output = $crate::pipe::Chain<$name<$($arg),*>, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                $crate::pipe::Chain::new(self, rhs)
            }
        }
    };
}

pub(crate) use pipeable;
