//! Shared validation rules used by the per-page validators.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

/// Minimum length for login, signup and change-password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Strength score a new password must reach.
pub const MIN_NEW_PASSWORD_STRENGTH: u8 = 75;

/// Default cap for multi-select pickers such as industries.
pub const DEFAULT_MAX_SELECTIONS: usize = 3;

/// Characters that count toward the strength meter's last check.
const STRENGTH_SYMBOLS: &str = "!@#$%^&*";

/// Characters that satisfy change-password's "special character" rule.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static LOOSE_EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$"));
static PHONE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$"));

fn matches(pattern: &LazyLock<Result<Regex, regex::Error>>, value: &str) -> bool {
    match pattern.as_ref() {
        Ok(re) => re.is_match(value),
        Err(e) => {
            log::error!("validation pattern failed to compile: {e}");
            false
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `local@domain.tld` with no whitespace or extra `@`.
pub fn is_valid_email(value: &str) -> bool {
    matches(&EMAIL, value)
}

/// Looser shape used by the contact form: any non-space runs around `@` and `.`.
pub fn is_valid_contact_email(value: &str) -> bool {
    matches(&LOOSE_EMAIL, value)
}

/// Optional `+` then 8 to 15 digits, ignoring whitespace.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    matches(&PHONE, &compact)
}

pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

pub fn is_six_digit_code(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Keep only digits and cap at six, as the code input does while typing.
pub fn sanitize_code_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(6).collect()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// 0 to 100 in steps of 25: non-empty, long enough, has an uppercase
/// letter, has a digit or one of `!@#$%^&*`.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        !password.is_empty(),
        char_len(password) >= MIN_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit() || STRENGTH_SYMBOLS.contains(c)),
    ];
    checks.iter().map(|passed| if *passed { 25 } else { 0 }).sum()
}

/// Meter caption for a strength score.
pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "",
        1..=25 => "Weak",
        26..=50 => "Fair",
        51..=75 => "Good",
        _ => "Strong",
    }
}

pub fn is_too_short(password: &str) -> bool {
    char_len(password) < MIN_PASSWORD_LENGTH
}

/// First unmet complexity requirement, or `None` if the password passes.
pub fn password_complexity_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Password is required");
    }
    if is_too_short(password) {
        return Some("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number");
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Some("Password must contain at least one special character");
    }
    None
}

/// Shown when an investment bound is not a whole number.
pub const AMOUNT_ERROR: &str = "Enter whole amounts for the investment range";

/// Parse a typed money amount, ignoring thousands separators.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let Ok(amount) = cleaned.parse::<u64>() else {
        return None;
    };
    Some(amount)
}

pub fn exceeds_max_selections(selected: usize, max: usize) -> bool {
    selected > max
}

/// Add or remove `item`. Adding past `max` is refused and returns `false`.
pub fn toggle_selection(selected: &mut Vec<String>, item: &str, max: usize) -> bool {
    if let Some(pos) = selected.iter().position(|s| s == item) {
        selected.remove(pos);
        return true;
    }
    if selected.len() >= max {
        return false;
    }
    selected.push(item.to_owned());
    true
}
