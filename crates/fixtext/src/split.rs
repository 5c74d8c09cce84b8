//! The split family.
//!
//! All splitters discard empty fields: a leading, trailing or doubled
//! delimiter never produces an empty part. This is a deliberate policy
//! (callers that must preserve empty fields can reach the standard
//! `str::split` through the buffer's `Deref<Target = str>`), and it is what
//! makes `join(split(s, d), d) == s` hold exactly when `s` has no empty
//! fields around `d`.

use crate::{
    parts::{MAX_PARTS, Parts},
    pipe::{Transform, pipeable},
    text::FixedText,
    trim::is_space,
};

/// Capacity of the delimiter buffer captured by [`split_by`].
const DELIM_CAPACITY: usize = 64;

/// Splits on a single character. See [`split`].
#[derive(Debug, Clone, Copy)]
pub struct Split<const P: usize = MAX_PARTS> {
    delim: char,
}

/// Splits on an exact delimiter string. See [`split_by`].
#[derive(Debug, Clone, Copy)]
pub struct SplitBy<const P: usize = MAX_PARTS> {
    delim: FixedText<DELIM_CAPACITY>,
}

/// Splits on line boundaries. See [`split_lines`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitLines<const P: usize = MAX_PARTS>;

/// Splits on whitespace runs. See [`split_whitespace`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitWhitespace<const P: usize = MAX_PARTS>;

/// Splits on a single character, scanning from the right. See [`rsplit`].
#[derive(Debug, Clone, Copy)]
pub struct Rsplit<const P: usize = MAX_PARTS> {
    delim: char,
}

/// Splits into at most two parts around a delimiter. See [`partition`].
#[derive(Debug, Clone, Copy)]
pub struct Partition {
    delim: char,
}

/// Result of [`partition`]: the content before and after the first
/// delimiter occurrence. When the delimiter is absent the whole input is in
/// `first`, `second` is empty and `found` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioned<const N: usize> {
    /// Content before the delimiter (or the whole input).
    pub first: FixedText<N>,
    /// Content after the delimiter.
    pub second: FixedText<N>,
    /// Whether the delimiter occurred.
    pub found: bool,
}

impl<const P: usize> Split<P> {
    /// Splitter with an explicit part limit `P`.
    #[must_use]
    pub fn new(delim: char) -> Self {
        Self { delim }
    }
}

impl<const P: usize> SplitBy<P> {
    /// Splitter with an explicit part limit `P`.
    #[must_use]
    pub fn new(delim: &str) -> Self {
        Self {
            delim: FixedText::from(delim),
        }
    }
}

impl<const P: usize> Rsplit<P> {
    /// Right-scanning splitter with an explicit part limit `P`.
    #[must_use]
    pub fn new(delim: char) -> Self {
        Self { delim }
    }
}

/// Partitions on exact matches of `delim`, discarding empty fields and
/// keeping at most [`MAX_PARTS`] parts.
///
/// ```
/// use fixtext::{FixedText, split};
///
/// let parts = FixedText::<16>::from("a,b,c") | split(',');
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts[0], "a");
/// ```
#[must_use]
pub fn split(delim: char) -> Split {
    Split::new(delim)
}

/// Like [`split`] but on an exact delimiter string. An empty delimiter
/// yields the whole input as a single part.
#[must_use]
pub fn split_by(delim: &str) -> SplitBy {
    SplitBy::new(delim)
}

/// Splits on `\n`, `\r` and `\r\n` line boundaries (`\r\n` counts as one),
/// discarding empty lines.
#[must_use]
pub fn split_lines() -> SplitLines {
    SplitLines
}

/// Splits on runs of whitespace, collapsing runs and discarding empty
/// fields.
#[must_use]
pub fn split_whitespace() -> SplitWhitespace {
    SplitWhitespace
}

/// Computes the same parts as [`split`] by scanning from the right, in the
/// same left-to-right output order. Output-identical to `split` whenever
/// the field count fits the part limit.
#[must_use]
pub fn rsplit(delim: char) -> Rsplit {
    Rsplit::new(delim)
}

/// Splits around the first occurrence of `delim`.
///
/// ```
/// use fixtext::{FixedText, partition};
///
/// let kv = FixedText::<32>::from("key=value") | partition('=');
/// assert!(kv.found);
/// assert_eq!(kv.first, "key");
/// assert_eq!(kv.second, "value");
/// ```
#[must_use]
pub fn partition(delim: char) -> Partition {
    Partition { delim }
}

impl<const N: usize, const P: usize> Transform<FixedText<N>> for Split<P> {
    type Output = Parts<N, P>;

    fn apply(&self, input: FixedText<N>) -> Parts<N, P> {
        let mut parts = Parts::new();
        for field in input.as_str().split(self.delim) {
            if field.is_empty() {
                continue;
            }
            if !parts.push(FixedText::from(field)) {
                break;
            }
        }
        parts
    }
}

impl<const N: usize, const P: usize> Transform<FixedText<N>> for SplitBy<P> {
    type Output = Parts<N, P>;

    fn apply(&self, input: FixedText<N>) -> Parts<N, P> {
        let mut parts = Parts::new();
        if self.delim.is_empty() {
            parts.push(input);
            return parts;
        }
        for field in input.as_str().split(self.delim.as_str()) {
            if field.is_empty() {
                continue;
            }
            if !parts.push(FixedText::from(field)) {
                break;
            }
        }
        parts
    }
}

impl<const N: usize, const P: usize> Transform<FixedText<N>> for SplitLines<P> {
    type Output = Parts<N, P>;

    fn apply(&self, input: FixedText<N>) -> Parts<N, P> {
        let mut parts = Parts::new();
        let s = input.as_str();
        let bytes = s.as_bytes();
        let mut start = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'\n' || bytes[i] == b'\r' {
                if i > start && !parts.push(FixedText::from(&s[start..i])) {
                    return parts;
                }
                if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                i += 1;
                start = i;
            } else {
                i += 1;
            }
        }
        if start < bytes.len() {
            parts.push(FixedText::from(&s[start..]));
        }
        parts
    }
}

impl<const N: usize, const P: usize> Transform<FixedText<N>> for SplitWhitespace<P> {
    type Output = Parts<N, P>;

    fn apply(&self, input: FixedText<N>) -> Parts<N, P> {
        let mut parts = Parts::new();
        for field in input.as_str().split(is_space) {
            if field.is_empty() {
                continue;
            }
            if !parts.push(FixedText::from(field)) {
                break;
            }
        }
        parts
    }
}

impl<const N: usize, const P: usize> Transform<FixedText<N>> for Rsplit<P> {
    type Output = Parts<N, P>;

    fn apply(&self, input: FixedText<N>) -> Parts<N, P> {
        let mut parts = Parts::new();
        for field in input.as_str().rsplit(self.delim) {
            if field.is_empty() {
                continue;
            }
            if !parts.push(FixedText::from(field)) {
                break;
            }
        }
        parts.reverse();
        parts
    }
}

impl<const N: usize> Transform<FixedText<N>> for Partition {
    type Output = Partitioned<N>;

    fn apply(&self, input: FixedText<N>) -> Partitioned<N> {
        match input.as_str().split_once(self.delim) {
            Some((first, second)) => Partitioned {
                first: FixedText::from(first),
                second: FixedText::from(second),
                found: true,
            },
            None => Partitioned {
                first: input,
                second: FixedText::new(),
                found: false,
            },
        }
    }
}

pipeable!([const P: usize] Split<P>);
pipeable!([const P: usize] SplitBy<P>);
pipeable!([const P: usize] SplitLines<P>);
pipeable!([const P: usize] SplitWhitespace<P>);
pipeable!([const P: usize] Rsplit<P>);
pipeable!(Partition);
