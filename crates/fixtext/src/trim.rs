//! Whitespace trimming.

use crate::{
    pipe::{Transform, pipeable},
    text::FixedText,
};

/// The whitespace set recognized by the trim and split family: space, tab,
/// newline, carriage return, form feed and vertical tab. Deliberately not
/// `char::is_whitespace` — no Unicode space characters.
#[must_use]
pub fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

pub(crate) fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C | 0x0B)
}

/// Removes leading and trailing whitespace. See [`trim`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Trim;

/// Removes leading whitespace. See [`trim_left`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimLeft;

/// Removes trailing whitespace. See [`trim_right`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimRight;

/// Removes leading and trailing characters matching a predicate. See
/// [`trim_if`].
#[derive(Debug, Clone, Copy)]
pub struct TrimIf<F> {
    pred: F,
}

/// Removes leading and trailing whitespace; an all-whitespace input yields
/// the empty buffer.
///
/// ```
/// use fixtext::{FixedText, trim};
///
/// let t = FixedText::<16>::from("  hi  ");
/// assert_eq!(t | trim(), "hi");
/// ```
#[must_use]
pub fn trim() -> Trim {
    Trim
}

/// Removes leading whitespace only.
#[must_use]
pub fn trim_left() -> TrimLeft {
    TrimLeft
}

/// Removes trailing whitespace only.
#[must_use]
pub fn trim_right() -> TrimRight {
    TrimRight
}

/// Generalized trim: strips characters matching `pred` from both ends.
#[must_use]
pub fn trim_if<F: Fn(char) -> bool>(pred: F) -> TrimIf<F> {
    TrimIf { pred }
}

impl<const N: usize> Transform<FixedText<N>> for Trim {
    type Output = FixedText<N>;

    fn apply(&self, input: FixedText<N>) -> FixedText<N> {
        FixedText::from(input.as_str().trim_matches(is_space))
    }
}

impl<const N: usize> Transform<FixedText<N>> for TrimLeft {
    type Output = FixedText<N>;

    fn apply(&self, input: FixedText<N>) -> FixedText<N> {
        FixedText::from(input.as_str().trim_start_matches(is_space))
    }
}

impl<const N: usize> Transform<FixedText<N>> for TrimRight {
    type Output = FixedText<N>;

    fn apply(&self, input: FixedText<N>) -> FixedText<N> {
        FixedText::from(input.as_str().trim_end_matches(is_space))
    }
}

impl<const N: usize, F: Fn(char) -> bool> Transform<FixedText<N>> for TrimIf<F> {
    type Output = FixedText<N>;

    fn apply(&self, input: FixedText<N>) -> FixedText<N> {
        FixedText::from(input.as_str().trim_matches(|c| (self.pred)(c)))
    }
}

pipeable!(Trim);
pipeable!(TrimLeft);
pipeable!(TrimRight);
pipeable!([F] TrimIf<F>);
