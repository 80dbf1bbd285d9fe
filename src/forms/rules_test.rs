use super::*;

// =============================================================
// Password strength
// =============================================================

#[test]
fn strength_scores_each_check() {
    assert_eq!(password_strength(""), 0);
    assert_eq!(password_strength("abc"), 25);
    assert_eq!(password_strength("abcdefgh"), 50);
    assert_eq!(password_strength("Abcdefgh"), 75);
    assert_eq!(password_strength("Abcdefg1"), 100);
}

#[test]
fn strength_symbol_counts_like_digit() {
    assert_eq!(password_strength("Abcdefg!"), 100);
    assert_eq!(password_strength("Abcdefg?"), 75);
}

#[test]
fn strength_labels() {
    assert_eq!(strength_label(0), "");
    assert_eq!(strength_label(25), "Weak");
    assert_eq!(strength_label(75), "Good");
    assert_eq!(strength_label(100), "Strong");
}

#[test]
fn complexity_reports_first_unmet_rule() {
    assert_eq!(password_complexity_error(""), Some("Password is required"));
    assert_eq!(password_complexity_error("Ab1!"), Some("Password must be at least 8 characters long"));
    assert_eq!(password_complexity_error("abcdefg1!"), Some("Password must contain at least one uppercase letter"));
    assert_eq!(password_complexity_error("Abcdefgh!"), Some("Password must contain at least one number"));
    assert_eq!(password_complexity_error("Abcdefgh1"), Some("Password must contain at least one special character"));
    assert_eq!(password_complexity_error("Abcdefg1?"), None);
}

// =============================================================
// Shapes
// =============================================================

#[test]
fn email_requires_dot_after_at() {
    assert!(!is_valid_email("foo@bar"));
    assert!(is_valid_email("foo@bar.com"));
    assert!(!is_valid_email("foo bar@baz.com"));
    assert!(!is_valid_email("foo@@bar.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn contact_email_allows_extra_at() {
    assert!(is_valid_contact_email("a@b@c.de"));
    assert!(!is_valid_contact_email("a@b"));
}

#[test]
fn phone_ignores_whitespace() {
    assert!(is_valid_phone("+971 50 123 4567"));
    assert!(is_valid_phone("12345678"));
    assert!(!is_valid_phone("1234567"));
    assert!(!is_valid_phone("1234567890123456"));
    assert!(!is_valid_phone("12-345-678"));
}

#[test]
fn url_must_parse() {
    assert!(is_valid_url("https://linkedin.com/in/someone"));
    assert!(!is_valid_url("linkedin.com/in/someone"));
}

#[test]
fn code_is_exactly_six_digits() {
    assert!(is_six_digit_code("123456"));
    assert!(!is_six_digit_code("12345"));
    assert!(!is_six_digit_code("1234567"));
    assert!(!is_six_digit_code("12345a"));
}

#[test]
fn code_input_keeps_six_digits() {
    assert_eq!(sanitize_code_input("12-34 56 78"), "123456");
    assert_eq!(sanitize_code_input("abc"), "");
}

#[test]
fn blank_means_whitespace_only() {
    assert!(is_blank(""));
    assert!(is_blank(" \t\n"));
    assert!(!is_blank(" x "));
}

// =============================================================
// Selections
// =============================================================

#[test]
fn toggle_refuses_past_max() {
    let mut selected = Vec::new();
    for item in ["Media", "Retail", "Software"] {
        assert!(toggle_selection(&mut selected, item, DEFAULT_MAX_SELECTIONS));
    }
    assert!(!toggle_selection(&mut selected, "Finance", DEFAULT_MAX_SELECTIONS));
    assert_eq!(selected.len(), 3);
    assert!(!exceeds_max_selections(selected.len(), DEFAULT_MAX_SELECTIONS));
}

#[test]
fn toggle_removes_existing_even_at_max() {
    let mut selected = vec!["Media".to_owned(), "Retail".to_owned(), "Software".to_owned()];
    assert!(toggle_selection(&mut selected, "Retail", 3));
    assert_eq!(selected, vec!["Media", "Software"]);
}

#[test]
fn exceeds_max_is_strict() {
    assert!(exceeds_max_selections(4, 3));
    assert!(!exceeds_max_selections(3, 3));
}

#[test]
fn parse_amount_accepts_separators_and_padding() {
    assert_eq!(parse_amount(" 10,000 "), Some(10_000));
    assert_eq!(parse_amount("0"), Some(0));
}

#[test]
fn parse_amount_rejects_non_numbers() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("-5"), None);
    assert_eq!(parse_amount("1.5"), None);
}
