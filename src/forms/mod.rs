//! Form validation for every page that accepts user input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build a plain record from their inputs on submit and hand it to a
//! `validate` function here. The returned `FieldErrors` drives the inline
//! `role="alert"` messages; an empty map means the submit is accepted.
//!
//! DESIGN
//! ======
//! Validators are pure and synchronous. Field keys are `&'static str`
//! constants so pages and validators agree on names without stringly-typed
//! lookups scattered through the views.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod auth;
pub mod profile;
pub mod register;
pub mod rules;

/// Field keys shared by validators and the views that render their errors.
pub mod field {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    pub const CURRENT_PASSWORD: &str = "current_password";
    pub const NEW_PASSWORD: &str = "new_password";
    pub const TERMS: &str = "terms";
    pub const CODE: &str = "code";
    pub const PHONE: &str = "phone";
    pub const COUNTRY: &str = "country";
    pub const CITY: &str = "city";
    pub const LOCATIONS: &str = "locations";
    pub const STAGES: &str = "stages";
    pub const INDUSTRIES: &str = "industries";
    pub const LANGUAGES: &str = "languages";
    pub const INVESTMENT_RANGE: &str = "investment_range";
    pub const BACKGROUND: &str = "background";
    pub const INVESTOR_TYPE: &str = "investor_type";
    pub const ABOUT: &str = "about";
    pub const EXPERTISE: &str = "expertise";
    pub const LINKEDIN: &str = "linkedin";
    pub const TWITTER: &str = "twitter";
    pub const FACEBOOK: &str = "facebook";
    pub const WEBSITE: &str = "website";
    pub const COMPANIES: &str = "companies";
    pub const CONFIRM: &str = "confirm";
}

/// Field → message mapping, in the order problems were found.
///
/// Only invalid fields have entries. Inserting a field twice keeps the
/// first message, so the earliest failing check wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if !self.contains(field) {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.iter().find(|(f, _)| *f == field).map(|(_, m)| m.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }

    /// Drop one field's message, e.g. when the user edits that input.
    pub fn clear_field(&mut self, field: &str) {
        self.entries.retain(|(f, _)| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }
}
