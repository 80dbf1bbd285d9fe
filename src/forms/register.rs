//! Validator for the investor onboarding form at `/investor/register`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::FieldErrors;
use super::field;
use super::rules::{exceeds_max_selections, is_blank};

pub const REGISTER_INDUSTRIES: &[&str] = &[
    "Agriculture",
    "Business Services",
    "Education & Training",
    "Energy & Natural Resources",
    "Entertainment & Leisure",
    "Fashion & Beauty",
    "Finance",
    "Food & Beverage",
    "Hospitality, Restaurants & Bars",
    "Manufacturing & Engineering",
    "Media",
    "Medical & Sciences",
    "Personal Services",
    "Products & Inventions",
    "Property",
    "Retail",
    "Sales & Marketing",
    "Software",
    "Technology",
    "Transportation",
];

pub const REGISTER_COUNTRIES: &[&str] = &["UAE", "Egypt", "Qatar", "Saudi Arabia", "Jordan", "Kuwait"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvestorRegisterForm {
    pub city: String,
    pub countries: Vec<String>,
    pub range_min: u64,
    pub range_max: u64,
    pub industries: Vec<String>,
    pub background: String,
}

impl Default for InvestorRegisterForm {
    fn default() -> Self {
        Self {
            city: String::new(),
            countries: Vec::new(),
            range_min: 0,
            range_max: 10_000,
            industries: Vec::new(),
            background: String::new(),
        }
    }
}

/// Validate the onboarding form against `max_industries` (normally 3).
pub fn validate_investor_register(form: &InvestorRegisterForm, max_industries: usize) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.city) {
        errors.insert(field::CITY, "City is required");
    }
    if form.countries.is_empty() {
        errors.insert(field::COUNTRY, "Please select at least one country");
    }
    if form.range_min > form.range_max {
        errors.insert(field::INVESTMENT_RANGE, "Minimum investment cannot exceed maximum");
    }
    if form.industries.is_empty() {
        errors.insert(field::INDUSTRIES, "Please select at least one industry");
    } else if exceeds_max_selections(form.industries.len(), max_industries) {
        errors.insert(field::INDUSTRIES, format!("Select up to {max_industries} industries"));
    }
    if is_blank(&form.background) {
        errors.insert(field::BACKGROUND, "Professional background is required");
    }
    errors
}
