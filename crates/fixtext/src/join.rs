//! Joining split results back into a single buffer.

use crate::{parts::Parts, text::FixedText};

/// Concatenates `items` with `sep` between consecutive entries, into a
/// buffer of the capacity chosen at the call site.
///
/// For a lossless join, `R` must cover the worst case:
/// `sum of part capacities + (n - 1) * sep.len()`. An undersized `R` clamps
/// silently like every other write.
#[must_use]
pub fn join_slice<const N: usize, const R: usize>(
    items: &[FixedText<N>],
    sep: &str,
) -> FixedText<R> {
    let mut out = FixedText::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(item.as_str());
    }
    out
}

/// Joins a split result with a string delimiter.
///
/// ```
/// use fixtext::{FixedText, join, split};
///
/// let parts = FixedText::<16>::from("a,b,c") | split(',');
/// let joined: FixedText<16> = join(&parts, ",");
/// assert_eq!(joined, "a,b,c");
/// ```
#[must_use]
pub fn join<const N: usize, const P: usize, const R: usize>(
    parts: &Parts<N, P>,
    sep: &str,
) -> FixedText<R> {
    join_slice(parts.as_slice(), sep)
}

/// Joins a split result with a single-character delimiter.
#[must_use]
pub fn join_char<const N: usize, const P: usize, const R: usize>(
    parts: &Parts<N, P>,
    sep: char,
) -> FixedText<R> {
    let mut tmp = [0u8; 4];
    join_slice(parts.as_slice(), sep.encode_utf8(&mut tmp))
}
