//! The find family: read-only scans and predicates.
//!
//! Everything here is available twice: as inherent methods on [`FixedText`]
//! for direct calls, and as pipeable values (`text | contains('x')`) so the
//! predicates participate in the composition protocol like any other
//! algorithm. Search misses are `None` or `false`, never errors.

use crate::{
    pipe::{Transform, pipeable},
    text::FixedText,
};

/// A search needle: a `char`, a `&str`, or a `&FixedText` of any capacity.
pub trait Needle: Copy {
    /// Position of the first match in `hay`.
    fn find_in(self, hay: &str) -> Option<usize>;
    /// Position of the last match in `hay`.
    fn rfind_in(self, hay: &str) -> Option<usize>;
    /// Whether `hay` starts with this needle.
    fn is_prefix_of(self, hay: &str) -> bool;
    /// Whether `hay` ends with this needle.
    fn is_suffix_of(self, hay: &str) -> bool;
    /// Number of non-overlapping matches in `hay`; an empty needle counts
    /// zero.
    fn count_in(self, hay: &str) -> usize;
}

impl Needle for char {
    fn find_in(self, hay: &str) -> Option<usize> {
        hay.find(self)
    }

    fn rfind_in(self, hay: &str) -> Option<usize> {
        hay.rfind(self)
    }

    fn is_prefix_of(self, hay: &str) -> bool {
        hay.starts_with(self)
    }

    fn is_suffix_of(self, hay: &str) -> bool {
        hay.ends_with(self)
    }

    fn count_in(self, hay: &str) -> usize {
        hay.matches(self).count()
    }
}

impl Needle for &str {
    fn find_in(self, hay: &str) -> Option<usize> {
        hay.find(self)
    }

    fn rfind_in(self, hay: &str) -> Option<usize> {
        hay.rfind(self)
    }

    fn is_prefix_of(self, hay: &str) -> bool {
        hay.starts_with(self)
    }

    fn is_suffix_of(self, hay: &str) -> bool {
        hay.ends_with(self)
    }

    fn count_in(self, hay: &str) -> usize {
        if self.is_empty() {
            return 0;
        }
        hay.matches(self).count()
    }
}

impl<const N: usize> Needle for &FixedText<N> {
    fn find_in(self, hay: &str) -> Option<usize> {
        self.as_str().find_in(hay)
    }

    fn rfind_in(self, hay: &str) -> Option<usize> {
        self.as_str().rfind_in(hay)
    }

    fn is_prefix_of(self, hay: &str) -> bool {
        self.as_str().is_prefix_of(hay)
    }

    fn is_suffix_of(self, hay: &str) -> bool {
        self.as_str().is_suffix_of(hay)
    }

    fn count_in(self, hay: &str) -> usize {
        self.as_str().count_in(hay)
    }
}

impl<const N: usize> FixedText<N> {
    /// Byte position of the first match of `needle`.
    #[must_use]
    pub fn find<Nd: Needle>(&self, needle: Nd) -> Option<usize> {
        needle.find_in(self.as_str())
    }

    /// Byte position of the last match of `needle`.
    #[must_use]
    pub fn rfind<Nd: Needle>(&self, needle: Nd) -> Option<usize> {
        needle.rfind_in(self.as_str())
    }

    /// Whether `needle` occurs anywhere in the content.
    #[must_use]
    pub fn contains<Nd: Needle>(&self, needle: Nd) -> bool {
        needle.find_in(self.as_str()).is_some()
    }

    /// Whether the content starts with `needle`.
    #[must_use]
    pub fn starts_with<Nd: Needle>(&self, needle: Nd) -> bool {
        needle.is_prefix_of(self.as_str())
    }

    /// Whether the content ends with `needle`.
    #[must_use]
    pub fn ends_with<Nd: Needle>(&self, needle: Nd) -> bool {
        needle.is_suffix_of(self.as_str())
    }

    /// Number of non-overlapping matches of `needle`: after a match the
    /// scan resumes immediately past it, so `"aaaa".count("aa")` is 2.
    #[must_use]
    pub fn count<Nd: Needle>(&self, needle: Nd) -> usize {
        needle.count_in(self.as_str())
    }

    /// Byte position of the first character that occurs in `set`.
    #[must_use]
    pub fn find_first_of(&self, set: &str) -> Option<usize> {
        self.as_str()
            .char_indices()
            .find(|&(_, c)| set.contains(c))
            .map(|(i, _)| i)
    }

    /// Byte position of the last character that occurs in `set`.
    #[must_use]
    pub fn find_last_of(&self, set: &str) -> Option<usize> {
        self.as_str()
            .char_indices()
            .rev()
            .find(|&(_, c)| set.contains(c))
            .map(|(i, _)| i)
    }

    /// Byte position of the first character that does not occur in `set`.
    #[must_use]
    pub fn find_first_not_of(&self, set: &str) -> Option<usize> {
        self.as_str()
            .char_indices()
            .find(|&(_, c)| !set.contains(c))
            .map(|(i, _)| i)
    }

    /// Whether any character from `set` occurs in the content.
    #[must_use]
    pub fn contains_any(&self, set: &str) -> bool {
        self.find_first_of(set).is_some()
    }
}

/// Pipeable form of [`FixedText::contains`]. See [`contains`].
#[derive(Debug, Clone, Copy)]
pub struct Contains<Nd> {
    needle: Nd,
}

/// Pipeable form of [`FixedText::starts_with`]. See [`starts_with`].
#[derive(Debug, Clone, Copy)]
pub struct StartsWith<Nd> {
    needle: Nd,
}

/// Pipeable form of [`FixedText::ends_with`]. See [`ends_with`].
#[derive(Debug, Clone, Copy)]
pub struct EndsWith<Nd> {
    needle: Nd,
}

/// Pipeable form of [`FixedText::count`]. See [`count_of`].
#[derive(Debug, Clone, Copy)]
pub struct CountOf<Nd> {
    needle: Nd,
}

/// Pipeable form of [`FixedText::find`]. See [`find_in`].
#[derive(Debug, Clone, Copy)]
pub struct FindIn<Nd> {
    needle: Nd,
}

/// Pipeable form of [`FixedText::contains_any`]. See [`contains_any_of`].
#[derive(Debug, Clone, Copy)]
pub struct ContainsAny<'a> {
    set: &'a str,
}

/// `text | contains(needle)` — whether `needle` occurs in the content.
#[must_use]
pub fn contains<Nd: Needle>(needle: Nd) -> Contains<Nd> {
    Contains { needle }
}

/// `text | starts_with(needle)`.
#[must_use]
pub fn starts_with<Nd: Needle>(needle: Nd) -> StartsWith<Nd> {
    StartsWith { needle }
}

/// `text | ends_with(needle)`.
#[must_use]
pub fn ends_with<Nd: Needle>(needle: Nd) -> EndsWith<Nd> {
    EndsWith { needle }
}

/// `text | count_of(needle)` — non-overlapping match count.
#[must_use]
pub fn count_of<Nd: Needle>(needle: Nd) -> CountOf<Nd> {
    CountOf { needle }
}

/// `text | find_in(needle)` — position of the first match.
#[must_use]
pub fn find_in<Nd: Needle>(needle: Nd) -> FindIn<Nd> {
    FindIn { needle }
}

/// `text | contains_any_of(set)` — whether any character of `set` occurs.
#[must_use]
pub fn contains_any_of(set: &str) -> ContainsAny<'_> {
    ContainsAny { set }
}

impl<const N: usize, Nd: Needle> Transform<FixedText<N>> for Contains<Nd> {
    type Output = bool;

    fn apply(&self, input: FixedText<N>) -> bool {
        input.contains(self.needle)
    }
}

impl<const N: usize, Nd: Needle> Transform<FixedText<N>> for StartsWith<Nd> {
    type Output = bool;

    fn apply(&self, input: FixedText<N>) -> bool {
        input.starts_with(self.needle)
    }
}

impl<const N: usize, Nd: Needle> Transform<FixedText<N>> for EndsWith<Nd> {
    type Output = bool;

    fn apply(&self, input: FixedText<N>) -> bool {
        input.ends_with(self.needle)
    }
}

impl<const N: usize, Nd: Needle> Transform<FixedText<N>> for CountOf<Nd> {
    type Output = usize;

    fn apply(&self, input: FixedText<N>) -> usize {
        input.count(self.needle)
    }
}

impl<const N: usize, Nd: Needle> Transform<FixedText<N>> for FindIn<Nd> {
    type Output = Option<usize>;

    fn apply(&self, input: FixedText<N>) -> Option<usize> {
        input.find(self.needle)
    }
}

impl<const N: usize> Transform<FixedText<N>> for ContainsAny<'_> {
    type Output = bool;

    fn apply(&self, input: FixedText<N>) -> bool {
        input.contains_any(self.set)
    }
}

pipeable!([Nd] Contains<Nd>);
pipeable!([Nd] StartsWith<Nd>);
pipeable!([Nd] EndsWith<Nd>);
pipeable!([Nd] CountOf<Nd>);
pipeable!([Nd] FindIn<Nd>);
pipeable!(['a] ContainsAny<'a>);
