//! Fixed-capacity text buffers and composable text algorithms.
//!
//! The core type, [`FixedText<N>`], is a `Copy` buffer that lives entirely
//! on the stack: the capacity `N` is part of the type, writes past it clamp
//! silently, and the content is always valid UTF-8 followed by a zero
//! terminator. Around it sits a family of value-level algorithms — trim,
//! case mapping, split/join, searching, formatting — that compose with `|`:
//!
//! ```
//! use fixtext::{FixedText, to_lower, trim};
//!
//! let raw = FixedText::<64>::from("  Hello WORLD  ");
//! let cleaned = raw | trim() | to_lower();
//! assert_eq!(cleaned, "hello world");
//! ```
//!
//! Pipelines are ordinary values. `trim() | to_lower()` builds a reusable
//! [`Chain`] before any text is touched, and applying it to a buffer of any
//! capacity yields the same result as applying the stages one at a time.
//!
//! The crate is `no_std` (`alloc` only for `String` conversions at the
//! boundary) and never allocates internally.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod case;
mod error;
mod find;
mod fmt;
mod join;
mod parse;
mod parts;
mod pipe;
mod split;
mod text;
mod trim;

#[cfg(test)]
mod tests;

pub use case::{
    ToLower, ToTitle, ToUpper, ToggleCase, equals_ignore_case, to_lower, to_title, to_upper,
    toggle_case,
};
pub use error::OutOfRange;
pub use find::{
    Contains, ContainsAny, CountOf, EndsWith, FindIn, Needle, StartsWith, contains,
    contains_any_of, count_of, ends_with, find_in, starts_with,
};
pub use fmt::{
    Bin, Bits, DEFAULT_PRECISION, FMT_CAPACITY, Hex, PadLeft, ToText, bin, hex, hex_upper,
    pad_left, pad_left_with, to_text, to_text_precision, to_text_sized,
};
pub use join::{join, join_char, join_slice};
pub use parse::{parse_float, parse_int};
pub use parts::{MAX_PARTS, Parts};
pub use pipe::{Chain, Transform};
pub use split::{
    Partition, Partitioned, Rsplit, Split, SplitBy, SplitLines, SplitWhitespace, partition,
    rsplit, split, split_by, split_lines, split_whitespace,
};
pub use text::FixedText;
pub use trim::{
    Trim, TrimIf, TrimLeft, TrimRight, is_space, trim, trim_if, trim_left, trim_right,
};

/// 32-byte buffer, for identifiers and short tokens.
pub type SmallText = FixedText<32>;

/// 256-byte buffer, the general-purpose default.
pub type Text = FixedText<256>;

/// 1024-byte buffer, for lines and small documents.
pub type LargeText = FixedText<1024>;

/// A [`SmallText`] holding (a clamped copy of) `s`.
#[must_use]
pub fn small_text(s: &str) -> SmallText {
    SmallText::from(s)
}

/// A [`Text`] holding (a clamped copy of) `s`.
#[must_use]
pub fn text(s: &str) -> Text {
    Text::from(s)
}

/// A [`LargeText`] holding (a clamped copy of) `s`.
#[must_use]
pub fn large_text(s: &str) -> LargeText {
    LargeText::from(s)
}
