//! End-to-end scenarios through the public surface.

use fixtext::{
    FixedText, LargeText, SmallText, Text, hex, hex_upper, join, large_text, pad_left, partition,
    small_text, split, text, to_lower, to_text, to_title, trim,
};
use rstest::rstest;

#[rstest]
#[case("  HELLO WORLD  ", "hello world")]
#[case("MIXED case", "mixed case")]
#[case("\t tabs and spaces \r\n", "tabs and spaces")]
#[case("", "")]
fn normalize_pipeline(#[case] input: &str, #[case] expected: &str) {
    let cleaned = Text::from(input) | trim() | to_lower();
    assert_eq!(cleaned, expected);
}

#[test]
fn csv_fields() {
    let parts = text("a,b,c") | split(',');
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "a");
    assert_eq!(parts[1], "b");
    assert_eq!(parts[2], "c");
}

#[test]
fn radix_and_padding() {
    assert_eq!(to_text(hex(255u8)), "0xff");
    assert_eq!(to_text(hex_upper(255u8)), "0xFF");
    assert_eq!(to_text(pad_left(7, 3)), "007");
}

#[test]
fn key_value_extraction() {
    let kv = text("key=value") | partition('=');
    assert!(kv.found);
    assert_eq!(kv.first, "key");
    assert_eq!(kv.second, "value");
}

#[test]
fn capacity_five_truncates() {
    let t = FixedText::<5>::from("123456");
    assert_eq!(t, "12345");
    assert_eq!(t.len(), 5);
    assert!(t.is_full());
}

#[test]
fn aliases_and_factories() {
    let s: SmallText = small_text("id-1234");
    assert_eq!(s.capacity(), 32);
    let t: Text = text("general purpose");
    assert_eq!(t.capacity(), 256);
    let l: LargeText = large_text("a whole line of input");
    assert_eq!(l.capacity(), 1024);
    assert_eq!(s, "id-1234");
    assert_eq!(t, "general purpose");
    assert_eq!(l, "a whole line of input");
}

#[test]
fn config_line_processing() {
    // Parse a config-style line end to end: strip comment, split on '=',
    // normalize the key.
    let line = text("  Max_Connections = 150  # tuned 2024-05  ");
    let without_comment = line | partition('#');
    let kv = without_comment.first | partition('=');
    assert!(kv.found);
    let key = kv.first | trim() | to_lower();
    let value = kv.second | trim();
    assert_eq!(key, "max_connections");
    assert_eq!(fixtext::parse_int(value.as_str(), 10), 150);
}

#[test]
fn titlecase_report_line() {
    let names = text("ada,grace,edsger") | split(',');
    let mut rendered = Text::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            rendered.push_str(", ");
        }
        rendered.push_str((*name | to_title()).as_str());
    }
    assert_eq!(rendered, "Ada, Grace, Edsger");
}

#[test]
fn join_survives_reordering_free_split() {
    let parts = text("2024/05/17") | split('/');
    let dashed: Text = join(&parts, "-");
    assert_eq!(dashed, "2024-05-17");
}
