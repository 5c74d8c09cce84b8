use alloc::string::{String, ToString};
use core::fmt::Write;

use rstest::rstest;

use crate::{FixedText, OutOfRange};

#[test]
fn construction_clamps() {
    let t = FixedText::<5>::from("123456");
    assert_eq!(t, "12345");
    assert_eq!(t.len(), 5);
    assert!(t.is_full());
    assert_eq!(t.available(), 0);
}

#[test]
fn truncation_respects_char_boundaries() {
    // 'é' is two bytes; it does not fit after 'h' in a 2-byte buffer, so it
    // is dropped entirely.
    let t = FixedText::<2>::from("héllo");
    assert_eq!(t, "h");
    assert_eq!(t.len(), 1);
}

#[test]
fn empty_and_zero_capacity() {
    let t = FixedText::<8>::new();
    assert!(t.is_empty());
    assert_eq!(t.as_str(), "");
    assert_eq!(t.as_bytes_with_nul(), &[0]);

    let z = FixedText::<0>::from("abc");
    assert!(z.is_empty());
    assert!(z.is_full());
}

#[test]
fn push_str_reports_copied_count() {
    let mut t = FixedText::<6>::from("abc");
    assert_eq!(t.push_str("defgh"), 3);
    assert_eq!(t, "abcdef");
    assert_eq!(t.push_str("x"), 0);
}

#[test]
fn push_char_is_all_or_nothing() {
    let mut t = FixedText::<4>::from("abc");
    assert!(t.push('d'));
    assert!(!t.push('e'));
    assert_eq!(t, "abcd");

    let mut u = FixedText::<4>::from("abc");
    // 'é' needs two bytes but only one is free.
    assert!(!u.push('é'));
    assert_eq!(u, "abc");
}

#[test]
fn insert_shifts_and_drops_overflow() {
    let mut t = FixedText::<8>::from("abcdef");
    assert_eq!(t.insert_str(2, "XY"), 2);
    assert_eq!(t, "abXYcdef");

    // Full buffer: the inserted bytes displace the tail past capacity.
    let mut u = FixedText::<6>::from("abcdef");
    assert_eq!(u.insert_str(2, "XY"), 2);
    assert_eq!(u, "abXYcd");

    // Past-the-end and mid-character positions are no-ops.
    let mut v = FixedText::<8>::from("abc");
    assert_eq!(v.insert_str(7, "x"), 0);
    assert_eq!(v, "abc");
}

#[test]
fn erase_clamps_count() {
    let mut t = FixedText::<8>::from("abcdef");
    assert_eq!(t.erase(1, 2), 2);
    assert_eq!(t, "adef");
    assert_eq!(t.erase(2, 100), 2);
    assert_eq!(t, "ad");
    assert_eq!(t.erase(5, 1), 0);
}

#[test]
fn pop_truncate_resize_clear() {
    let mut t = FixedText::<8>::from("abé");
    assert_eq!(t.pop(), Some('é'));
    assert_eq!(t, "ab");

    t.truncate(1);
    assert_eq!(t, "a");
    t.truncate(10);
    assert_eq!(t, "a");

    t.resize(4, 'x');
    assert_eq!(t, "axxx");
    t.resize(100, 'y');
    assert_eq!(t, "axxxyyyy");
    t.resize(2, 'z');
    assert_eq!(t, "ax");

    t.clear();
    assert!(t.is_empty());
    assert_eq!(t.pop(), None);
}

#[test]
fn filled_clamps() {
    assert_eq!(FixedText::<8>::filled(3, 'z'), "zzz");
    assert_eq!(FixedText::<4>::filled(10, 'z'), "zzzz");
}

#[test]
fn substr_and_concat() {
    let t = FixedText::<16>::from("hello world");
    assert_eq!(t.substr::<8>(6, usize::MAX), "world");
    assert_eq!(t.substr::<8>(0, 5), "hello");
    assert_eq!(t.substr::<3>(0, 5), "hel");
    assert_eq!(t.substr::<8>(20, 1), "");

    let a = FixedText::<4>::from("foo");
    let b = FixedText::<4>::from("bar");
    assert_eq!(a.concat::<4, 8>(&b), "foobar");
    assert_eq!(a.concat::<4, 4>(&b), "foob");
}

#[test]
fn checked_access_errors() {
    let t = FixedText::<8>::from("abc");
    assert_eq!(t.at(1), Ok(b'b'));
    let err = t.at(5).unwrap_err();
    assert_eq!(err, OutOfRange { index: 5, len: 3 });
    assert_eq!(err.to_string(), "index 5 out of range for text of length 3");
    assert_eq!(t.get(5), None);
    assert_eq!(t[0], b'a');
}

#[test]
fn first_and_last() {
    let t = FixedText::<8>::from("héllo");
    assert_eq!(t.first(), Some('h'));
    assert_eq!(t.last(), Some('o'));
    assert_eq!(FixedText::<8>::new().first(), None);
}

#[test]
fn terminator_visible_at_full_capacity() {
    let t = FixedText::<3>::from("abc");
    assert_eq!(t.as_bytes(), b"abc");
    assert_eq!(t.as_bytes_with_nul(), b"abc\0");
}

#[rstest]
#[case("ab", "abc")]
#[case("abc", "abd")]
#[case("", "a")]
fn ordering(#[case] lo: &str, #[case] hi: &str) {
    let a = FixedText::<8>::from(lo);
    let b = FixedText::<4>::from(hi);
    assert!(a < b);
    assert_eq!(a.compare(&b), core::cmp::Ordering::Less);
}

#[test]
fn cross_capacity_equality() {
    let a = FixedText::<8>::from("same");
    let b = FixedText::<32>::from("same");
    assert_eq!(a, b);
    assert_eq!(a, "same");
    assert_eq!("same", a);
}

#[test]
fn string_conversions() {
    let s = String::from("owned");
    let t = FixedText::<8>::from(&s);
    assert_eq!(String::from(t), "owned");
}

#[test]
fn deref_exposes_str_api() {
    let t = FixedText::<16>::from("a,b");
    // Callers needing empty fields can reach str::split directly.
    assert_eq!(t.split(',').count(), 2);
    assert!(t.chars().eq("a,b".chars()));
}

#[test]
fn write_sink_clamps_without_error() {
    let mut t = FixedText::<8>::new();
    write!(t, "{}-{}", 12, 34).unwrap();
    assert_eq!(t, "12-34");

    let mut small = FixedText::<3>::new();
    write!(small, "{}", 123_456).unwrap();
    assert_eq!(small, "123");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    use serde::de::{Deserialize, IntoDeserializer, value};

    let de: value::StrDeserializer<'_, value::Error> = "hello".into_deserializer();
    let t = FixedText::<8>::deserialize(de).unwrap();
    assert_eq!(t, "hello");

    let de: value::StrDeserializer<'_, value::Error> = "overlong".into_deserializer();
    let clamped = FixedText::<4>::deserialize(de).unwrap();
    assert_eq!(clamped, "over");
}
