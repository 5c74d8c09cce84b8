//! Container for split results.

use core::{fmt, ops::Index, slice};

use crate::text::FixedText;

/// Default maximum number of parts produced by the split family.
pub const MAX_PARTS: usize = 16;

/// Result of a split: up to `P` buffers of capacity `N` plus a count.
///
/// Entries past [`len`] are unspecified and never exposed: `as_slice`,
/// `iter`, `get` and indexing only cover the valid prefix. Fields beyond
/// `P` produced by a split are silently dropped, consistent with the
/// crate's capacity model.
///
/// [`len`]: Parts::len
#[derive(Clone, Copy)]
pub struct Parts<const N: usize, const P: usize = MAX_PARTS> {
    items: [FixedText<N>; P],
    count: usize,
}

impl<const N: usize, const P: usize> Parts<N, P> {
    /// An empty result.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: [FixedText::new(); P],
            count: 0,
        }
    }

    /// Appends a part. Returns `false` (dropping `item`) when `P` parts
    /// are already stored.
    pub fn push(&mut self, item: FixedText<N>) -> bool {
        if self.count == P {
            return false;
        }
        self.items[self.count] = item;
        self.count += 1;
        true
    }

    /// Number of valid parts.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// True when no parts were produced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The valid parts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FixedText<N>] {
        &self.items[..self.count]
    }

    /// Part at `index`, or `None` past the valid prefix.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FixedText<N>> {
        self.as_slice().get(index)
    }

    /// First valid part.
    #[must_use]
    pub fn first(&self) -> Option<&FixedText<N>> {
        self.as_slice().first()
    }

    /// Last valid part.
    #[must_use]
    pub fn last(&self) -> Option<&FixedText<N>> {
        self.as_slice().last()
    }

    /// Iterator over the valid parts.
    pub fn iter(&self) -> slice::Iter<'_, FixedText<N>> {
        self.as_slice().iter()
    }

    pub(crate) fn reverse(&mut self) {
        self.items[..self.count].reverse();
    }
}

impl<const N: usize, const P: usize> Default for Parts<N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const P: usize> Index<usize> for Parts<N, P> {
    type Output = FixedText<N>;

    fn index(&self, index: usize) -> &FixedText<N> {
        &self.as_slice()[index]
    }
}

impl<'a, const N: usize, const P: usize> IntoIterator for &'a Parts<N, P> {
    type Item = &'a FixedText<N>;
    type IntoIter = slice::Iter<'a, FixedText<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<const N: usize, const P: usize, const Q: usize> PartialEq<Parts<N, Q>> for Parts<N, P> {
    fn eq(&self, other: &Parts<N, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize, const P: usize> Eq for Parts<N, P> {}

impl<const N: usize, const P: usize> fmt::Debug for Parts<N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
