use super::*;

fn login(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

fn signup() -> SignupForm {
    SignupForm {
        first_name: "Mohamed".to_owned(),
        last_name: "G".to_owned(),
        email: "mohamed@coreup.com".to_owned(),
        password: "password1".to_owned(),
        confirm_password: "password1".to_owned(),
        terms: true,
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_accepts_valid_credentials() {
    assert!(validate_login(&login("foo@bar.com", "12345678")).is_empty());
}

#[test]
fn login_requires_both_fields() {
    let errors = validate_login(&login("  ", ""));
    assert_eq!(errors.get(field::EMAIL), Some("Email is required"));
    assert_eq!(errors.get(field::PASSWORD), Some("Password is required"));
}

#[test]
fn login_checks_email_shape_and_password_length() {
    let errors = validate_login(&login("foo@bar", "short"));
    assert_eq!(errors.get(field::EMAIL), Some("Invalid email address"));
    assert_eq!(errors.get(field::PASSWORD), Some("Password must be at least 8 characters"));
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_accepts_complete_form() {
    assert!(validate_signup(&signup()).is_empty());
}

#[test]
fn signup_reports_every_missing_field() {
    let errors = validate_signup(&SignupForm::default());
    for key in [field::FIRST_NAME, field::LAST_NAME, field::EMAIL, field::PASSWORD, field::CONFIRM_PASSWORD, field::TERMS] {
        assert!(errors.contains(key), "missing {key}");
    }
    assert_eq!(errors.get(field::CONFIRM_PASSWORD), Some("Confirm password is required"));
}

#[test]
fn signup_rejects_mismatched_confirmation() {
    let form = SignupForm { confirm_password: "password2".to_owned(), ..signup() };
    let errors = validate_signup(&form);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(field::CONFIRM_PASSWORD), Some("Passwords do not match"));
}

#[test]
fn signup_requires_terms() {
    let form = SignupForm { terms: false, ..signup() };
    assert_eq!(validate_signup(&form).get(field::TERMS), Some("You must agree to the terms"));
}

// =============================================================
// Recovery
// =============================================================

#[test]
fn forgot_password_checks_shape_only() {
    assert!(validate_forgot_password("foo@bar.com").is_empty());
    assert_eq!(validate_forgot_password("").get(field::EMAIL), Some("Please enter a valid email address"));
}

#[test]
fn new_password_needs_strength_75() {
    let weak = NewPasswordForm { password: "abcdefgh".to_owned(), confirm_password: "abcdefgh".to_owned() };
    assert_eq!(validate_new_password(&weak).get(field::PASSWORD), Some("Password is too weak"));

    let ok = NewPasswordForm { password: "Abcdefgh".to_owned(), confirm_password: "Abcdefgh".to_owned() };
    assert!(validate_new_password(&ok).is_empty());
}

#[test]
fn new_password_requires_matching_confirmation() {
    let form = NewPasswordForm { password: "Abcdefg1".to_owned(), confirm_password: "Abcdefg2".to_owned() };
    assert_eq!(validate_new_password(&form).get(field::CONFIRM_PASSWORD), Some("Passwords do not match"));

    let empty = validate_new_password(&NewPasswordForm::default());
    assert_eq!(empty.get(field::PASSWORD), Some("Password is required"));
    assert_eq!(empty.get(field::CONFIRM_PASSWORD), Some("Confirm password is required"));
}

#[test]
fn verify_code_requires_six_digits() {
    assert!(validate_verify_code("654321").is_empty());
    assert_eq!(validate_verify_code("65432").get(field::CODE), Some("Please enter a valid 6-digit code"));
}
