//! The core fixed-capacity buffer type.

use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, Index},
};

use alloc::string::String;

use crate::error::OutOfRange;

/// A stack-resident text buffer holding at most `N` bytes of UTF-8.
///
/// The capacity is part of the type and never changes; writes that would
/// exceed it are clamped to the available space and the excess is silently
/// dropped. The storage always keeps a zero byte immediately after the
/// content (see [`as_bytes_with_nul`]), so the buffer can be handed to
/// null-terminated-string consumers without copying.
///
/// Truncation never splits a UTF-8 sequence: a multi-byte character that
/// does not fit entirely is dropped entirely, so [`as_str`] is always valid.
/// For ASCII content the clamp is byte-exact.
///
/// `FixedText` is `Copy` with plain value semantics; distinct instances can
/// be used from different threads without coordination.
///
/// ```
/// use fixtext::FixedText;
///
/// let t = FixedText::<5>::from("123456");
/// assert_eq!(t, "12345");
/// assert!(t.is_full());
/// ```
///
/// [`as_bytes_with_nul`]: FixedText::as_bytes_with_nul
/// [`as_str`]: FixedText::as_str
#[derive(Clone, Copy)]
#[repr(C)]
pub struct FixedText<const N: usize> {
    buf: [u8; N],
    // Lives immediately after `buf` (repr(C)), so the terminator slot exists
    // even when the buffer is full.
    nul: u8,
    len: usize,
}

/// Largest `i <= max` that falls on a char boundary of `s`.
fn clamp_to_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut i = max;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

impl<const N: usize> FixedText<N> {
    /// The immutable maximum byte count this buffer can hold.
    pub const CAPACITY: usize = N;

    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            nul: 0,
            len: 0,
        }
    }

    /// Clamping copy of `s`; identical to `FixedText::from(s)` but usable
    /// where type inference needs a named constructor.
    #[must_use]
    pub fn from_str_clamped(s: &str) -> Self {
        let mut out = Self::new();
        out.push_str(s);
        out
    }

    /// Fill constructor: `count` repetitions of `ch`, clamped to capacity.
    #[must_use]
    pub fn filled(count: usize, ch: char) -> Self {
        let mut out = Self::new();
        out.resize(count, ch);
        out
    }

    /// Capacity in bytes. Equal to [`Self::CAPACITY`].
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Current length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no content is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when no further bytes fit.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Remaining room in bytes.
    #[must_use]
    pub const fn available(&self) -> usize {
        N - self.len
    }

    /// The content as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor and mutator only admits whole UTF-8
        // sequences, so `buf[..len]` is always valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(&self.buf[..self.len]) }
    }

    /// The content as raw bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The content plus the zero terminator: `len() + 1` bytes, the last of
    /// which is always `0`.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.len < N {
            &self.buf[..=self.len]
        } else {
            // SAFETY: repr(C) places `nul` immediately after `buf` with no
            // padding (both have alignment 1), so the N + 1 bytes starting
            // at `buf` form one contiguous initialized run.
            unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), N + 1) }
        }
    }

    /// Mutable view of the content bytes.
    ///
    /// Callers must preserve UTF-8 validity; only ASCII-to-ASCII rewrites
    /// are performed through this.
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }

    fn set_terminator(&mut self) {
        if self.len < N {
            self.buf[self.len] = 0;
        }
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= len()`. This is the only
    /// failing operation in the crate; plain indexing (`text[i]`) is the
    /// unchecked-by-design alternative.
    pub fn at(&self, index: usize) -> Result<u8, OutOfRange> {
        self.get(index).ok_or(OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Byte at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        (index < self.len).then(|| self.buf[index])
    }

    /// First character, if any.
    #[must_use]
    pub fn first(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// Last character, if any.
    #[must_use]
    pub fn last(&self) -> Option<char> {
        self.as_str().chars().next_back()
    }

    /// Appends one character. Returns `false` (and leaves the buffer
    /// untouched) when it does not fit entirely.
    pub fn push(&mut self, ch: char) -> bool {
        let mut tmp = [0u8; 4];
        let encoded = ch.encode_utf8(&mut tmp);
        if encoded.len() > self.available() {
            return false;
        }
        self.push_str(encoded);
        true
    }

    /// Appends as much of `s` as fits, returning the number of bytes
    /// actually copied. A no-op returning `0` when already full.
    pub fn push_str(&mut self, s: &str) -> usize {
        let n = clamp_to_boundary(s, self.available());
        if n > 0 {
            self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
            self.len += n;
            self.set_terminator();
        }
        n
    }

    /// Inserts `s` at byte position `pos`, shifting the tail right. Tail
    /// bytes pushed past the capacity are dropped. Returns the number of
    /// bytes inserted; a no-op returning `0` when `pos` is past the end or
    /// not on a character boundary.
    pub fn insert_str(&mut self, pos: usize, s: &str) -> usize {
        if pos > self.len || !self.as_str().is_char_boundary(pos) {
            return 0;
        }
        let n = clamp_to_boundary(s, N - pos);
        if n == 0 {
            return 0;
        }
        let kept = {
            let tail = &self.as_str()[pos..];
            clamp_to_boundary(tail, N - pos - n)
        };
        self.buf.copy_within(pos..pos + kept, pos + n);
        self.buf[pos..pos + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len = pos + n + kept;
        self.set_terminator();
        n
    }

    /// Removes up to `count` bytes starting at `pos`, shifting the tail
    /// left. Returns the number of bytes removed; a no-op returning `0`
    /// when `pos` is at or past the end.
    pub fn erase(&mut self, pos: usize, count: usize) -> usize {
        if pos >= self.len || !self.as_str().is_char_boundary(pos) {
            return 0;
        }
        let m = {
            let tail = &self.as_str()[pos..];
            clamp_to_boundary(tail, count.min(tail.len()))
        };
        if m == 0 {
            return 0;
        }
        self.buf.copy_within(pos + m..self.len, pos);
        self.len -= m;
        self.set_terminator();
        m
    }

    /// Removes and returns the last character.
    pub fn pop(&mut self) -> Option<char> {
        let ch = self.as_str().chars().next_back()?;
        self.len -= ch.len_utf8();
        self.set_terminator();
        Some(ch)
    }

    /// Shortens the buffer to at most `new_len` bytes (backing off to a
    /// character boundary). Growing requests are ignored.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = clamp_to_boundary(self.as_str(), new_len);
            self.set_terminator();
        }
    }

    /// Resizes to `min(new_len, capacity)` bytes, padding with `fill` when
    /// growing.
    pub fn resize(&mut self, new_len: usize, fill: char) {
        let target = new_len.min(N);
        if target <= self.len {
            self.truncate(target);
        } else {
            let mut tmp = [0u8; 4];
            let encoded = fill.encode_utf8(&mut tmp);
            while self.len + encoded.len() <= target {
                self.push_str(encoded);
            }
        }
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.len = 0;
        self.set_terminator();
    }

    /// Copy of the byte range `[pos, pos + count)` into a buffer of the
    /// capacity chosen at the call site. Out-of-range requests clamp;
    /// `count` may be `usize::MAX` for "the rest".
    #[must_use]
    pub fn substr<const R: usize>(&self, pos: usize, count: usize) -> FixedText<R> {
        if pos >= self.len || !self.as_str().is_char_boundary(pos) {
            return FixedText::new();
        }
        let tail = &self.as_str()[pos..];
        let end = clamp_to_boundary(tail, count.min(tail.len()));
        FixedText::from(&tail[..end])
    }

    /// Three-way lexicographic comparison with a buffer of any capacity.
    /// When one operand is a prefix of the other, the shorter is less.
    #[must_use]
    pub fn compare<const M: usize>(&self, other: &FixedText<M>) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    /// Concatenation into a buffer of the capacity chosen at the call site.
    ///
    /// The declared policy is `R = N + M`: at that capacity two operands
    /// that were not themselves truncated can never lose data here. An
    /// undersized `R` clamps as usual.
    #[must_use]
    pub fn concat<const M: usize, const R: usize>(&self, other: &FixedText<M>) -> FixedText<R> {
        let mut out = FixedText::new();
        out.push_str(self.as_str());
        out.push_str(other.as_str());
        out
    }
}

impl<const N: usize> Default for FixedText<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<&str> for FixedText<N> {
    fn from(s: &str) -> Self {
        Self::from_str_clamped(s)
    }
}

impl<const N: usize> From<&String> for FixedText<N> {
    fn from(s: &String) -> Self {
        Self::from_str_clamped(s)
    }
}

impl<const N: usize> From<FixedText<N>> for String {
    fn from(text: FixedText<N>) -> Self {
        String::from(text.as_str())
    }
}

impl<const N: usize> Deref for FixedText<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for FixedText<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedText<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> Borrow<str> for FixedText<N> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// Unchecked indexed byte access; panics past the current length. Use
/// [`FixedText::at`] for the checked variant.
impl<const N: usize> Index<usize> for FixedText<N> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedText<M>> for FixedText<N> {
    fn eq(&self, other: &FixedText<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedText<N> {}

impl<const N: usize> PartialEq<str> for FixedText<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for FixedText<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> PartialEq<FixedText<N>> for str {
    fn eq(&self, other: &FixedText<N>) -> bool {
        self == other.as_str()
    }
}

impl<const N: usize> PartialEq<FixedText<N>> for &str {
    fn eq(&self, other: &FixedText<N>) -> bool {
        *self == other.as_str()
    }
}

impl<const N: usize, const M: usize> PartialOrd<FixedText<M>> for FixedText<N> {
    fn partial_cmp(&self, other: &FixedText<M>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<const N: usize> Ord for FixedText<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<const N: usize> Hash for FixedText<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<const N: usize> fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Character sink with the crate's clamp semantics: output past the
/// capacity is dropped, never reported as an error.
impl<const N: usize> fmt::Write for FixedText<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let _ = self.push_str(s);
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::FixedText;

    impl<const N: usize> Serialize for FixedText<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for FixedText<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct Visitor<const N: usize>;

            impl<const N: usize> de::Visitor<'_> for Visitor<N> {
                type Value = FixedText<N>;

                fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str("a string")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<FixedText<N>, E> {
                    // Oversized input clamps, same as every other write.
                    Ok(FixedText::from(v))
                }
            }

            deserializer.deserialize_str(Visitor::<N>)
        }
    }
}
