//! Validators for the investor profile editing pages.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::FieldErrors;
use super::field;
use super::rules::{is_blank, is_valid_contact_email, is_valid_phone, is_valid_url, password_complexity_error};
use crate::state::search::FilterOption;

pub const CONTACT_COUNTRY_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "UAE", label: "UAE" },
    FilterOption { value: "Egypt", label: "Egypt" },
    FilterOption { value: "Qatar", label: "Qatar" },
];

pub const INVESTOR_TYPE_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "angel", label: "Angel Investor" },
    FilterOption { value: "venture", label: "Venture Capitalist" },
    FilterOption { value: "private", label: "Private Equity" },
];

pub const CRITERIA_LOCATIONS: &[&str] = &[
    "Afghanistan",
    "Armenia",
    "Azerbaijan",
    "Bahrain",
    "Brunei",
    "Egypt",
    "Iraq",
    "Iran",
    "Jordan",
    "Kyrgyzstan",
    "Kuwait",
    "Kazakhstan",
    "Lebanon",
    "Oman",
    "Palestine",
    "Qatar",
    "Saudi Arabia",
    "Syria",
    "Turkmenistan",
    "Uzbekistan",
    "Yemen",
];

pub const CRITERIA_STAGES: &[&str] = &[
    "Achieving Sales",
    "Breaking Even",
    "MVP/Finished Product",
    "Pre-Startup/R&D",
    "Profitable",
    "Other",
];

pub const CRITERIA_INDUSTRIES: &[&str] = &[
    "Agriculture",
    "Business Services",
    "Education & Training",
    "Energy & Natural Resources",
    "Finance",
    "Media",
    "Property",
    "Food & Beverage",
    "Medical & Sciences",
    "Entertainment & Leisure",
    "Retail",
    "Software",
    "Technology",
    "Sales & Marketing",
    "Products & Inventions",
    "Manufacturing & Engineering",
    "Transportation",
    "Hospitality, Restaurants & Bars",
    "Fashion & Beauty",
];

pub const CRITERIA_LANGUAGES: &[&str] = &[
    "Arabic",
    "English",
    "French",
    "German",
    "Italian",
    "Russian",
    "Spanish",
    "Japanese",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactInfoForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
}

impl Default for ContactInfoForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            country: CONTACT_COUNTRY_OPTIONS[0].value.to_owned(),
            city: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvestmentCriteriaForm {
    pub locations: Vec<String>,
    pub stages: Vec<String>,
    pub industries: Vec<String>,
    pub languages: Vec<String>,
    pub range_min: u64,
    pub range_max: u64,
}

impl Default for InvestmentCriteriaForm {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            stages: Vec::new(),
            industries: Vec::new(),
            languages: Vec::new(),
            range_min: 0,
            range_max: 6000,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileSettingsForm {
    pub investor_type: Option<String>,
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub website: String,
    pub about: String,
    pub expertise: String,
    pub investment_count: u8,
    pub companies: Vec<String>,
}

pub fn validate_contact_info(form: &ContactInfoForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&form.first_name) {
        errors.insert(field::FIRST_NAME, "First name is required");
    }
    if is_blank(&form.last_name) {
        errors.insert(field::LAST_NAME, "Last name is required");
    }
    if is_blank(&form.email) {
        errors.insert(field::EMAIL, "Email is required");
    } else if !is_valid_contact_email(&form.email) {
        errors.insert(field::EMAIL, "Invalid email format");
    }
    if is_blank(&form.phone) {
        errors.insert(field::PHONE, "Phone number is required");
    } else if !is_valid_phone(&form.phone) {
        errors.insert(field::PHONE, "Invalid phone number");
    }
    if form.country.is_empty() {
        errors.insert(field::COUNTRY, "Country is required");
    }
    if is_blank(&form.city) {
        errors.insert(field::CITY, "City is required");
    }
    errors
}

pub fn validate_investment_criteria(form: &InvestmentCriteriaForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.locations.is_empty() {
        errors.insert(field::LOCATIONS, "Select at least one location");
    }
    if form.stages.is_empty() {
        errors.insert(field::STAGES, "Select at least one stage");
    }
    if form.industries.is_empty() {
        errors.insert(field::INDUSTRIES, "Select at least one industry");
    }
    if form.range_max <= form.range_min {
        errors.insert(field::INVESTMENT_RANGE, "Maximum must be greater than minimum");
    }
    errors
}

pub fn validate_change_password(form: &ChangePasswordForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Some(message) = password_complexity_error(&form.current_password) {
        errors.insert(field::CURRENT_PASSWORD, message);
    }
    if let Some(message) = password_complexity_error(&form.new_password) {
        errors.insert(field::NEW_PASSWORD, message);
    }
    if form.new_password != form.confirm_password {
        errors.insert(field::CONFIRM_PASSWORD, "Passwords do not match");
    }
    errors
}

pub fn validate_profile_settings(form: &ProfileSettingsForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.investor_type.as_deref().is_none_or(str::is_empty) {
        errors.insert(field::INVESTOR_TYPE, "Investor type is required");
    }
    if is_blank(&form.about) {
        errors.insert(field::ABOUT, "About Me is required");
    }
    if is_blank(&form.expertise) {
        errors.insert(field::EXPERTISE, "Expertise is required");
    }
    let links = [
        (field::LINKEDIN, &form.linkedin),
        (field::TWITTER, &form.twitter),
        (field::FACEBOOK, &form.facebook),
        (field::WEBSITE, &form.website),
    ];
    for (key, value) in links {
        if !value.is_empty() && !is_valid_url(value) {
            errors.insert(key, "Invalid URL format");
        }
    }
    // Empty rows are unfilled and dropped on save; whitespace-only names are not.
    if form.companies.iter().any(|name| !name.is_empty() && is_blank(name)) {
        errors.insert(field::COMPANIES, "Company names cannot be empty");
    }
    errors
}

pub fn validate_delete_account(confirmed: bool) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !confirmed {
        errors.insert(field::CONFIRM, "Please confirm account deletion.");
    }
    errors
}
