use crate::pattern::{alternation_order, alternation_set, CompiledPattern};
use crate::transform::clean;
use std::cmp::Ordering;
use wl_core::EmojiDictionary;

fn pattern_for(keys: &[&str]) -> CompiledPattern {
    CompiledPattern::compile(&EmojiDictionary::from_keys(keys.iter().copied())).unwrap()
}

// ========== Alternation ordering ==========

#[test]
fn test_order_longer_first() {
    assert_eq!(alternation_order("🇺🇸", "🇺"), Ordering::Less);
    assert_eq!(alternation_order("🇺", "🇺🇸"), Ordering::Greater);
}

#[test]
fn test_order_ties_lexicographic() {
    assert_eq!(alternation_order("🎈", "🎉"), Ordering::Less);
    assert_eq!(alternation_order("🎉", "🎈"), Ordering::Greater);
    assert_eq!(alternation_order("🎉", "🎉"), Ordering::Equal);
}

#[test]
fn test_order_counts_code_points_not_bytes() {
    // Two code points beat one, regardless of UTF-8 byte length.
    let pair = "e\u{301}"; // 3 bytes
    let single = "🎉"; // 4 bytes
    assert_eq!(alternation_order(pair, single), Ordering::Less);
}

#[test]
fn test_alternation_set_sorted_and_escaped() {
    let dict = EmojiDictionary::from_keys(["🇺", "*⃣", "🇺🇸"]);
    let set = alternation_set(&dict);
    let flag = set.iter().position(|a| *a == regex::escape("🇺🇸")).unwrap();
    let base = set.iter().position(|a| *a == regex::escape("🇺")).unwrap();
    assert!(flag < base, "two-code-point flag must precede its prefix");
    // The *-prefixed keycap key is escaped to a literal.
    assert!(set.iter().any(|a| a.starts_with("\\*")));
}

// ========== Pattern compilation ==========

#[test]
fn test_empty_dictionary_degrades() {
    let p = CompiledPattern::compile(&EmojiDictionary::empty()).unwrap();
    assert!(!p.has_emoji());
    assert_eq!(p.isolate_emoji("great😀day"), "great😀day");
}

#[test]
fn test_star_key_is_literal() {
    let p = pattern_for(&["*⃣"]);
    // A bare asterisk must not match; only the full keycap sequence does.
    assert_eq!(p.isolate_emoji("2*3"), "2*3");
    assert_eq!(p.isolate_emoji("press*⃣now"), "press *⃣ now");
}

// ========== URL truncation ==========

#[test]
fn test_url_truncated_to_host() {
    let p = pattern_for(&[]);
    let out = p.truncate_urls("check this out https://example.com/a/b?x=1 cool");
    assert_eq!(out, "check this out https://example.com cool");
}

#[test]
fn test_url_http_scheme() {
    let p = pattern_for(&[]);
    assert_eq!(p.truncate_urls("http://foo.bar/baz"), "http://foo.bar");
}

#[test]
fn test_url_without_path_unchanged() {
    let p = pattern_for(&[]);
    assert_eq!(p.truncate_urls("see https://example.com now"), "see https://example.com now");
}

#[test]
fn test_multiple_urls_each_truncated() {
    let p = pattern_for(&[]);
    let out = p.truncate_urls("https://a.io/x and https://b.io/y?q=1");
    assert_eq!(out, "https://a.io and https://b.io");
}

// ========== Punctuation stripping ==========

#[test]
fn test_punctuation_deleted_not_spaced() {
    let p = pattern_for(&[]);
    assert_eq!(p.strip_punctuation(r#"hello! (wow) "really""#), "hello wow really");
    assert_eq!(p.strip_punctuation("a,b.c"), "abc");
}

#[test]
fn test_punctuation_preserves_url_dots() {
    let p = pattern_for(&[]);
    let out = p.strip_punctuation("wow! https://example.com neat.");
    assert_eq!(out, "wow https://example.com neat");
}

#[test]
fn test_punctuation_after_url_deleted() {
    let p = pattern_for(&[]);
    // Only interior dots are protected; noise glued to the host still goes.
    assert_eq!(p.strip_punctuation("see https://example.com, ok"), "see https://example.com ok");
    assert_eq!(p.strip_punctuation("(https://example.com!)"), "https://example.com");
}

#[test]
fn test_punctuation_keeps_other_symbols() {
    let p = pattern_for(&[]);
    assert_eq!(p.strip_punctuation("50% #tag @you?"), "50% #tag @you?");
}

// ========== Emoji isolation ==========

#[test]
fn test_emoji_isolated_with_spaces() {
    let p = pattern_for(&["😀"]);
    assert_eq!(p.isolate_emoji("great😀day"), "great 😀 day");
}

#[test]
fn test_variation_selector_consumed() {
    let p = pattern_for(&["❤"]);
    assert_eq!(p.isolate_emoji("love❤\u{FE0F}you"), "love ❤\u{FE0F} you");
}

#[test]
fn test_longest_match_precedence() {
    // "🇺" is a strict prefix of the flag sequence "🇺🇸"; the longer
    // alternative must win or the second code point is left dangling.
    let p = pattern_for(&["🇺", "🇺🇸"]);
    assert_eq!(p.isolate_emoji("go🇺🇸go"), "go 🇺🇸 go");
}

#[test]
fn test_adjacent_emoji_each_isolated() {
    let p = pattern_for(&["😀", "🎉"]);
    // No whitespace collapsing: adjacent matches produce a double space.
    assert_eq!(p.isolate_emoji("hi😀🎉"), "hi 😀  🎉 ");
}

// ========== Full transform ==========

#[test]
fn test_clean_applies_all_passes() {
    let p = pattern_for(&["😀"]);
    let out = clean(&p, "Check THIS: https://example.com/a/b?x=1 wow!😀");
    assert_eq!(out, "check this: https://example.com wow 😀 ");
}

#[test]
fn test_clean_lowercases() {
    let p = pattern_for(&[]);
    assert_eq!(clean(&p, "HeLLo WoRLD"), "hello world");
}

#[test]
fn test_clean_empty_input() {
    let p = pattern_for(&["😀"]);
    assert_eq!(clean(&p, ""), "");
}

#[test]
fn test_clean_is_pure() {
    let p = pattern_for(&["😀"]);
    let a = clean(&p, "same😀input");
    let b = clean(&p, "same😀input");
    assert_eq!(a, b);
}
