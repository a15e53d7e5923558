//! Record Parser and Validator Tests
//!
//! Tokenizing follows strtok semantics and conversion follows atoi; both are
//! pinned here exactly, since terminal input leans on them.

use sine_micro::io::record::{parse, validate, ARITY, MAX_TOKENS};

// ═══════════════════════════════════════════════════════════════════════════════
// BASIC PARSING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_seven_integers() {
    let ints = parse(b"1,2,3,4,5,6,7");
    assert_eq!(ints.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_parse_three_integers() {
    let ints = parse(b"1,2,3");
    assert_eq!(ints.len(), 3);
    assert_eq!(ints.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_parse_negative_and_signed() {
    let ints = parse(b"-5,+3,0,-128,200");
    assert_eq!(ints.as_slice(), &[-5, 3, 0, -128, 200]);
}

#[test]
fn test_parse_empty_record() {
    let ints = parse(b"");
    assert_eq!(ints.len(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// STRTOK SEMANTICS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_token_between_delimiters_skipped() {
    let ints = parse(b"1,,3");
    assert_eq!(ints.as_slice(), &[1, 3]);
}

#[test]
fn test_trailing_delimiter_produces_no_entry() {
    let ints = parse(b"1,2,3,");
    assert_eq!(ints.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_leading_and_repeated_delimiters() {
    let ints = parse(b",,,4,,5,,");
    assert_eq!(ints.as_slice(), &[4, 5]);
}

#[test]
fn test_token_cap_at_eight() {
    let ints = parse(b"9,9,9,9,9,9,9,9,9");
    assert_eq!(ints.len(), MAX_TOKENS);
    assert_eq!(ints.as_slice(), &[9; 8]);
}

#[test]
fn test_tokens_beyond_cap_ignored_not_merged() {
    let ints = parse(b"1,2,3,4,5,6,7,8,100,200");
    assert_eq!(ints.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATOI SEMANTICS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_garbage_token_reads_as_zero() {
    let ints = parse(b"1,abc,3");
    assert_eq!(ints.as_slice(), &[1, 0, 3]);
}

#[test]
fn test_leading_whitespace_skipped() {
    let ints = parse(b"1, 2,\t3");
    assert_eq!(ints.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_trailing_garbage_ignored() {
    let ints = parse(b"12ab,7x");
    assert_eq!(ints.as_slice(), &[12, 7]);
}

#[test]
fn test_bare_sign_reads_as_zero() {
    let ints = parse(b"-,+,5");
    assert_eq!(ints.as_slice(), &[0, 0, 5]);
}

#[test]
fn test_whitespace_only_token_reads_as_zero() {
    // strtok yields the " " token, atoi turns it into 0; it still counts.
    let ints = parse(b"1, ,3");
    assert_eq!(ints.as_slice(), &[1, 0, 3]);
}

// ═══════════════════════════════════════════════════════════════════════════════
// VALIDATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_validate_exact_arity() {
    assert!(validate(ARITY).is_ok());
}

#[test]
fn test_validate_rejects_other_counts() {
    for count in [0, 1, 3, 6, 8] {
        let err = validate(count).unwrap_err();
        assert_eq!(err.count, count);
    }
}

#[test]
fn test_parse_then_validate_roundtrip() {
    assert!(validate(parse(b"1,2,3,4,5,6,7").len()).is_ok());
    assert!(validate(parse(b"1,2,3").len()).is_err());
}
