use rstest::rstest;

use crate::{
    FixedText, Parts, Split, Transform, join, join_char, join_slice, partition, rsplit, split,
    split_by, split_lines, split_whitespace,
};

type T = FixedText<32>;

#[rstest]
#[case("a,b,c", &["a", "b", "c"])]
#[case("a,,b", &["a", "b"])]
#[case(",a,", &["a"])]
#[case(",,,", &[])]
#[case("", &[])]
#[case("abc", &["abc"])]
fn split_discards_empty_fields(#[case] input: &str, #[case] expected: &[&str]) {
    let parts = T::from(input) | split(',');
    assert_eq!(parts.len(), expected.len());
    for (part, want) in parts.iter().zip(expected) {
        assert_eq!(part, *want);
    }
}

#[rstest]
#[case("a::b::c", "::", &["a", "b", "c"])]
#[case("a::::b", "::", &["a", "b"])]
#[case("no-delim", "::", &["no-delim"])]
#[case("whole", "", &["whole"])]
fn split_by_exact_delimiter(#[case] input: &str, #[case] delim: &str, #[case] expected: &[&str]) {
    let parts = T::from(input) | split_by(delim);
    assert_eq!(parts.len(), expected.len());
    for (part, want) in parts.iter().zip(expected) {
        assert_eq!(part, *want);
    }
}

#[rstest]
#[case("one\ntwo\nthree", 3)]
#[case("one\r\ntwo\r\nthree\r\n", 3)]
#[case("mixed\rendings\nhere\r\n", 3)]
#[case("\n\n\n", 0)]
#[case("single", 1)]
fn split_lines_normalizes_endings(#[case] input: &str, #[case] expected: usize) {
    let parts = T::from(input) | split_lines();
    assert_eq!(parts.len(), expected);
}

#[test]
fn split_lines_does_not_split_crlf_twice() {
    let parts = T::from("a\r\nb") | split_lines();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0], "a");
    assert_eq!(parts[1], "b");
}

#[test]
fn split_whitespace_collapses_runs() {
    let parts = T::from("  alpha\tbeta \r\n gamma ") | split_whitespace();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "alpha");
    assert_eq!(parts[1], "beta");
    assert_eq!(parts[2], "gamma");
}

#[test]
fn rsplit_matches_split_order() {
    let forward = T::from("a.b.c.d") | split('.');
    let backward = T::from("a.b.c.d") | rsplit('.');
    assert_eq!(forward, backward);
    assert_eq!(backward[0], "a");
    assert_eq!(backward[3], "d");
}

#[test]
fn parts_overflow_drops_excess() {
    let mut input = FixedText::<64>::new();
    for _ in 0..20 {
        input.push_str("x,");
    }
    let parts = input | split(',');
    assert_eq!(parts.len(), 16);

    let limited: Parts<64, 4> = Split::<4>::new(',').apply(input);
    assert_eq!(limited.len(), 4);
}

#[test]
fn partition_found_and_missing() {
    let kv = T::from("key=value") | partition('=');
    assert!(kv.found);
    assert_eq!(kv.first, "key");
    assert_eq!(kv.second, "value");

    let miss = T::from("no-delimiter") | partition('=');
    assert!(!miss.found);
    assert_eq!(miss.first, "no-delimiter");
    assert_eq!(miss.second, "");
}

#[test]
fn partition_splits_at_first_occurrence() {
    let kv = T::from("a=b=c") | partition('=');
    assert_eq!(kv.first, "a");
    assert_eq!(kv.second, "b=c");
}

#[test]
fn join_round_trips_without_empty_fields() {
    let parts = T::from("a,b,c") | split(',');
    let joined: T = join(&parts, ",");
    assert_eq!(joined, "a,b,c");
}

#[test]
fn join_normalizes_empty_fields() {
    // "a,,b" does not round-trip: the empty field between the delimiters is
    // discarded by the split and the join cannot restore it.
    let parts = T::from("a,,b") | split(',');
    let joined: T = join(&parts, ",");
    assert_eq!(joined, "a,b");
}

#[test]
fn join_variants() {
    let parts = T::from("x y z") | split_whitespace();
    let dashed: T = join_char(&parts, '-');
    assert_eq!(dashed, "x-y-z");

    let glued: T = join(&parts, "");
    assert_eq!(glued, "xyz");

    let items = [FixedText::<8>::from("a"), FixedText::<8>::from("b")];
    let joined: FixedText<8> = join_slice(&items, ", ");
    assert_eq!(joined, "a, b");
}

#[test]
fn join_clamps_to_result_capacity() {
    let parts = T::from("longish,fields,here") | split(',');
    let tiny: FixedText<8> = join(&parts, ",");
    assert_eq!(tiny, "longish,");
}
