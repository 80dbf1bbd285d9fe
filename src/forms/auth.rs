//! Validators for the signed-out pages: login, signup and password recovery.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::FieldErrors;
use super::field;
use super::rules::{MIN_NEW_PASSWORD_STRENGTH, is_blank, is_six_digit_code, is_too_short, is_valid_email, password_strength};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if is_blank(email) {
        errors.insert(field::EMAIL, "Email is required");
    } else if !is_valid_email(email) {
        errors.insert(field::EMAIL, "Invalid email address");
    }
}

fn check_password_length(errors: &mut FieldErrors, password: &str) {
    if is_blank(password) {
        errors.insert(field::PASSWORD, "Password is required");
    } else if is_too_short(password) {
        errors.insert(field::PASSWORD, "Password must be at least 8 characters");
    }
}

fn check_confirmation(errors: &mut FieldErrors, password: &str, confirm: &str) {
    if is_blank(confirm) {
        errors.insert(field::CONFIRM_PASSWORD, "Confirm password is required");
    } else if password != confirm {
        errors.insert(field::CONFIRM_PASSWORD, "Passwords do not match");
    }
}

pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &form.email);
    check_password_length(&mut errors, &form.password);
    errors
}

pub fn validate_signup(form: &SignupForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.first_name) {
        errors.insert(field::FIRST_NAME, "First name is required");
    }
    if is_blank(&form.last_name) {
        errors.insert(field::LAST_NAME, "Last name is required");
    }
    check_email(&mut errors, &form.email);
    check_password_length(&mut errors, &form.password);
    check_confirmation(&mut errors, &form.password, &form.confirm_password);
    if !form.terms {
        errors.insert(field::TERMS, "You must agree to the terms");
    }
    errors
}

pub fn validate_forgot_password(email: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !is_valid_email(email) {
        errors.insert(field::EMAIL, "Please enter a valid email address");
    }
    errors
}

pub fn validate_new_password(form: &NewPasswordForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.password) {
        errors.insert(field::PASSWORD, "Password is required");
    } else if password_strength(&form.password) < MIN_NEW_PASSWORD_STRENGTH {
        errors.insert(field::PASSWORD, "Password is too weak");
    }
    check_confirmation(&mut errors, &form.password, &form.confirm_password);
    errors
}

pub fn validate_verify_code(code: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !is_six_digit_code(code) {
        errors.insert(field::CODE, "Please enter a valid 6-digit code");
    }
    errors
}
