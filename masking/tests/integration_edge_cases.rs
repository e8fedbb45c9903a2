//! Edge-case coverage for `RegexMaskingOperator` substitution.
//!
//! These tests focus on degenerate patterns, empty inputs and masks, Unicode
//! input, and replacement templates that mix group references, literal
//! dollars and the mask placeholder.

#![cfg(feature = "regex")]

use masking::{MaskingOperator, RegexMaskingOperator, MASK_PLACEHOLDER, WHOLE_MATCH_REPLACEMENT};
use regex::Regex;

fn operator(pattern: &str) -> RegexMaskingOperator {
    RegexMaskingOperator::new(Regex::new(pattern).unwrap())
}

fn templated(pattern: &str, template: &str) -> RegexMaskingOperator {
    RegexMaskingOperator::with_replacement(Regex::new(pattern).unwrap(), template).unwrap()
}

#[test]
fn test_default_template_is_mask_placeholder() {
    assert_eq!(WHOLE_MATCH_REPLACEMENT, MASK_PLACEHOLDER);
    assert_eq!(MASK_PLACEHOLDER, "{mask}");
}

#[test]
fn test_empty_pattern_replaces_entire_input() {
    let result = operator("").mask("TEST", "***MASK***");
    assert!(result.is_match());
    assert_eq!(result.value(), "***MASK***");
}

#[test]
fn test_non_capturing_empty_pattern_replaces_entire_input() {
    let result = operator("(?:)").mask("TEST", "***MASK***");
    assert!(result.is_match());
    assert_eq!(result.value(), "***MASK***");
}

#[test]
fn test_start_anchor_inserts_mask_once() {
    let result = operator("^").mask("TEST", "> ");
    assert!(result.is_match());
    assert_eq!(result.value(), "> TEST");
}

#[test]
fn test_empty_input_without_match() {
    let result = operator(".+").mask("", "***");
    assert!(!result.is_match());
    assert_eq!(result.value(), "");
}

#[test]
fn test_empty_mask_deletes_match() {
    let result = operator(r"\s*password=\S+").mask("user=bob password=hunter2", "");
    assert!(result.is_match());
    assert_eq!(result.value(), "user=bob");
}

#[test]
fn test_unicode_input() {
    let result = operator("秘密").mask("这是秘密数据", "**");
    assert_eq!(result.value(), "这是**数据");

    let result = operator("🔒").mask("key🔒value", "*");
    assert_eq!(result.value(), "key*value");
}

#[test]
fn test_template_without_mask_placeholder() {
    let result = templated(r"\d{4}-\d{4}", "[card]").mask("paid with 1234-5678", "***");
    assert!(result.is_match());
    assert_eq!(result.value(), "paid with [card]");
}

#[test]
fn test_template_with_mask_repeated() {
    let result = templated(r"(\w+)@(\w+)\.com", "{mask}@{mask}.com").mask("a@b.com", "x");
    assert_eq!(result.value(), "x@x.com");
}

#[test]
fn test_template_keeps_last_four_digits() {
    let result = templated(r"\d{12}(\d{4})", "{mask}$1").mask("4111111111111111", "************");
    assert_eq!(result.value(), "************1111");
}

#[test]
fn test_template_with_literal_dollar() {
    let result = templated(r"\d+\.\d{2}", "$${mask}").mask("total 19.99", "X");
    assert_eq!(result.value(), "total $X");
}

#[test]
fn test_mask_containing_placeholder_text_is_not_expanded_twice() {
    let result = operator("abc").mask("abc", "{mask}");
    assert_eq!(result.value(), "{mask}");
}

#[test]
fn test_group_named_mask_expands_to_capture() {
    let result = templated(r"(?P<mask>\d+)", "<${mask}>").mask("pin 1234", "***");
    assert!(result.is_match());
    assert_eq!(result.value(), "pin <1234>");
}

#[test]
fn test_group_named_mask_next_to_placeholder() {
    let result = templated(r"(?P<mask>\d{2})\d{2}", "$mask{mask}").mask("pin 1234", "**");
    assert_eq!(result.value(), "pin 12**");
}

#[test]
fn test_mask_containing_group_syntax_is_literal() {
    let result = templated(r"(\d+)", "<{mask}>").mask("42", "${1}$$");
    assert_eq!(result.value(), "<${1}$$>");
}

#[test]
fn test_case_insensitive_flag_in_pattern() {
    let result = operator("(?i)bearer [a-z0-9.]+").mask("Authorization: BEARER abc.def", "***");
    assert_eq!(result.value(), "Authorization: ***");
}

#[test]
fn test_multiline_input() {
    let result = operator(r"(?m)^token=.*$").mask("a=1\ntoken=xyz\nb=2", "token=***");
    assert_eq!(result.value(), "a=1\ntoken=***\nb=2");
}

#[test]
fn test_very_long_input() {
    let input = format!("{}1234{}", "x".repeat(50_000), "y".repeat(50_000));
    let result = operator(r"\d+").mask(&input, "#");

    assert!(result.is_match());
    assert_eq!(result.value().len(), 100_001);
    assert!(result.value().contains("x#y"));
}
