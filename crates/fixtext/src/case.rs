//! ASCII case conversion.
//!
//! Only the ASCII alphabetic ranges are mapped; everything else (including
//! multi-byte UTF-8 sequences, whose bytes are all >= 0x80) passes through
//! unchanged. Locale- and Unicode-aware casing are out of scope.

use crate::{
    pipe::{Transform, pipeable},
    text::FixedText,
    trim::is_space_byte,
};

/// Lowercases ASCII letters. See [`to_lower`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToLower;

/// Uppercases ASCII letters. See [`to_upper`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToUpper;

/// Title-cases words. See [`to_title`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToTitle;

/// Flips the case of ASCII letters. See [`toggle_case`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleCase;

/// Maps ASCII uppercase letters to lowercase.
#[must_use]
pub fn to_lower() -> ToLower {
    ToLower
}

/// Maps ASCII lowercase letters to uppercase.
#[must_use]
pub fn to_upper() -> ToUpper {
    ToUpper
}

/// Capitalizes the first alphabetic character after each whitespace run and
/// lowercases the following ones. A non-alphabetic character also ends the
/// capitalize-next state, so `"o'neil"` becomes `"O'neil"`.
#[must_use]
pub fn to_title() -> ToTitle {
    ToTitle
}

/// Flips the case of every ASCII letter.
#[must_use]
pub fn toggle_case() -> ToggleCase {
    ToggleCase
}

/// ASCII case-insensitive content equality across capacities.
#[must_use]
pub fn equals_ignore_case<const N: usize, const M: usize>(
    a: &FixedText<N>,
    b: &FixedText<M>,
) -> bool {
    a.as_str().eq_ignore_ascii_case(b.as_str())
}

impl<const N: usize> Transform<FixedText<N>> for ToLower {
    type Output = FixedText<N>;

    fn apply(&self, input: FixedText<N>) -> FixedText<N> {
        let mut out = input;
        for b in out.bytes_mut() {
            *b = b.to_ascii_lowercase();
        }
        out
    }
}

impl<const N: usize> Transform<FixedText<N>> for ToUpper {
    type Output = FixedText<N>;

    fn apply(&self, input: FixedText<N>) -> FixedText<N> {
        let mut out = input;
        for b in out.bytes_mut() {
            *b = b.to_ascii_uppercase();
        }
        out
    }
}

impl<const N: usize> Transform<FixedText<N>> for ToTitle {
    type Output = FixedText<N>;

    fn apply(&self, input: FixedText<N>) -> FixedText<N> {
        let mut out = input;
        let mut capitalize_next = true;
        for b in out.bytes_mut() {
            if is_space_byte(*b) {
                capitalize_next = true;
            } else if b.is_ascii_alphabetic() {
                let mapped = if capitalize_next {
                    b.to_ascii_uppercase()
                } else {
                    b.to_ascii_lowercase()
                };
                *b = mapped;
                capitalize_next = false;
            } else {
                capitalize_next = false;
            }
        }
        out
    }
}

impl<const N: usize> Transform<FixedText<N>> for ToggleCase {
    type Output = FixedText<N>;

    fn apply(&self, input: FixedText<N>) -> FixedText<N> {
        let mut out = input;
        for b in out.bytes_mut() {
            if b.is_ascii_lowercase() {
                *b = b.to_ascii_uppercase();
            } else if b.is_ascii_uppercase() {
                *b = b.to_ascii_lowercase();
            }
        }
        out
    }
}

pipeable!(ToLower);
pipeable!(ToUpper);
pipeable!(ToTitle);
pipeable!(ToggleCase);
