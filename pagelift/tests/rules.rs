use pagelift::Rule;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_bare_keywords() {
    assert_eq!(Rule::parse("required"), Rule::Required);
    assert_eq!(Rule::parse("email"), Rule::Email);
    assert_eq!(Rule::parse("phone"), Rule::Phone);
}

#[test]
fn test_parse_min_length() {
    assert_eq!(Rule::parse("minLength:10"), Rule::MinLength(10));
    assert_eq!(Rule::parse("minLength: 2"), Rule::MinLength(2));
}

#[test]
fn test_parse_unknown_becomes_other() {
    assert_eq!(Rule::parse("maxLength:5"), Rule::Other("maxLength:5".to_string()));
    assert_eq!(Rule::parse("minLength:abc"), Rule::Other("minLength:abc".to_string()));
    assert_eq!(Rule::parse("zipcode"), Rule::Other("zipcode".to_string()));
}

// ============================================================================
// Required
// ============================================================================

#[test]
fn test_required_nonempty_passes() {
    assert!(Rule::Required.check("hello"));
    assert!(Rule::Required.check("  x  "));
}

#[test]
fn test_required_blank_fails() {
    assert!(!Rule::Required.check(""));
    assert!(!Rule::Required.check("   "));
    assert!(!Rule::Required.check("\t\n"));
}

// ============================================================================
// MinLength
// ============================================================================

#[test]
fn test_min_length_untrimmed() {
    assert!(Rule::MinLength(3).check("abc"));
    assert!(Rule::MinLength(3).check("ab c"));
    // Whitespace counts: no trimming
    assert!(Rule::MinLength(3).check("   "));
    assert!(!Rule::MinLength(3).check("ab"));
}

#[test]
fn test_min_length_zero_always_passes() {
    assert!(Rule::MinLength(0).check(""));
}

#[test]
fn test_min_length_counts_characters() {
    // Multi-byte characters count once each
    assert!(Rule::MinLength(3).check("äöü"));
    assert!(!Rule::MinLength(4).check("äöü"));
}

// ============================================================================
// Email
// ============================================================================

#[test]
fn test_email_basic() {
    assert!(Rule::Email.check("a@b.co"));
    assert!(Rule::Email.check("first.last@example.com"));
}

#[test]
fn test_email_missing_dot_after_at() {
    assert!(!Rule::Email.check("a@b"));
}

#[test]
fn test_email_empty_local_part() {
    assert!(!Rule::Email.check("@b.co"));
}

#[test]
fn test_email_empty_string() {
    assert!(!Rule::Email.check(""));
}

#[test]
fn test_email_exactly_one_at() {
    assert!(!Rule::Email.check("a@@b.co"));
    assert!(!Rule::Email.check("a@b@c.co"));
    assert!(!Rule::Email.check("ab.co"));
}

#[test]
fn test_email_no_whitespace() {
    assert!(!Rule::Email.check("a b@c.co"));
    assert!(!Rule::Email.check("a@b c.co"));
    assert!(!Rule::Email.check("a@b.c o"));
}

#[test]
fn test_email_dot_needs_both_sides() {
    assert!(!Rule::Email.check("a@.co"));
    assert!(!Rule::Email.check("a@b."));
}

// ============================================================================
// Phone
// ============================================================================

#[test]
fn test_phone_empty_passes() {
    assert!(Rule::Phone.check(""));
}

#[test]
fn test_phone_seven_digits_pass() {
    assert!(Rule::Phone.check("1234567"));
}

#[test]
fn test_phone_too_short_fails() {
    assert!(!Rule::Phone.check("12345"));
}

#[test]
fn test_phone_letters_fail() {
    assert!(!Rule::Phone.check("abc-defg"));
}

#[test]
fn test_phone_formatting_characters() {
    assert!(Rule::Phone.check("+1 (555) 123-4567"));
    assert!(Rule::Phone.check("555 123 4567"));
}

#[test]
fn test_phone_whitespace_only_is_too_short() {
    // Allowed characters, but under the length floor
    assert!(!Rule::Phone.check("   "));
}

// ============================================================================
// Permissive default
// ============================================================================

#[test]
fn test_unknown_rule_always_passes() {
    let rule = Rule::Other("maxLength:5".to_string());
    assert!(rule.check(""));
    assert!(rule.check("anything at all"));
}
