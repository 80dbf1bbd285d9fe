use super::*;

fn contact() -> ContactInfoForm {
    ContactInfoForm {
        first_name: "Mohamed".to_owned(),
        last_name: "G".to_owned(),
        email: "mohamed@coreup.com".to_owned(),
        phone: "+971 50 123 4567".to_owned(),
        country: "UAE".to_owned(),
        city: "Dubai".to_owned(),
    }
}

fn criteria() -> InvestmentCriteriaForm {
    InvestmentCriteriaForm {
        locations: vec!["Egypt".to_owned()],
        stages: vec!["Profitable".to_owned()],
        industries: vec!["Software".to_owned()],
        ..InvestmentCriteriaForm::default()
    }
}

fn settings() -> ProfileSettingsForm {
    ProfileSettingsForm {
        investor_type: Some("angel".to_owned()),
        about: "Early-stage investor.".to_owned(),
        expertise: "Fintech".to_owned(),
        ..ProfileSettingsForm::default()
    }
}

// =============================================================
// Contact info
// =============================================================

#[test]
fn contact_accepts_complete_form() {
    assert!(validate_contact_info(&contact()).is_empty());
}

#[test]
fn contact_default_preselects_country() {
    let errors = validate_contact_info(&ContactInfoForm::default());
    assert!(!errors.contains(field::COUNTRY));
    assert_eq!(errors.get(field::PHONE), Some("Phone number is required"));
    assert_eq!(errors.get(field::CITY), Some("City is required"));
}

#[test]
fn contact_checks_email_and_phone_shapes() {
    let form = ContactInfoForm { email: "mohamed@coreup".to_owned(), phone: "0501".to_owned(), ..contact() };
    let errors = validate_contact_info(&form);
    assert_eq!(errors.get(field::EMAIL), Some("Invalid email format"));
    assert_eq!(errors.get(field::PHONE), Some("Invalid phone number"));
}

#[test]
fn contact_requires_country() {
    let form = ContactInfoForm { country: String::new(), ..contact() };
    assert_eq!(validate_contact_info(&form).get(field::COUNTRY), Some("Country is required"));
}

// =============================================================
// Investment criteria
// =============================================================

#[test]
fn criteria_option_lists_are_complete_and_distinct() {
    for (list, expected) in [
        (CRITERIA_LOCATIONS, 21),
        (CRITERIA_STAGES, 6),
        (CRITERIA_INDUSTRIES, 19),
        (CRITERIA_LANGUAGES, 8),
    ] {
        assert_eq!(list.len(), expected);
        let unique: std::collections::HashSet<_> = list.iter().collect();
        assert_eq!(unique.len(), list.len());
    }
    assert_eq!(CRITERIA_LOCATIONS.first(), Some(&"Afghanistan"));
    assert_eq!(CRITERIA_STAGES.last(), Some(&"Other"));
    assert!(CRITERIA_INDUSTRIES.contains(&"Hospitality, Restaurants & Bars"));
}

#[test]
fn criteria_accepts_one_of_each() {
    assert!(validate_investment_criteria(&criteria()).is_empty());
}

#[test]
fn criteria_requires_each_group() {
    let errors = validate_investment_criteria(&InvestmentCriteriaForm::default());
    assert_eq!(errors.get(field::LOCATIONS), Some("Select at least one location"));
    assert_eq!(errors.get(field::STAGES), Some("Select at least one stage"));
    assert_eq!(errors.get(field::INDUSTRIES), Some("Select at least one industry"));
    assert!(!errors.contains(field::INVESTMENT_RANGE));
}

#[test]
fn criteria_max_must_exceed_min() {
    let form = InvestmentCriteriaForm { range_min: 5000, range_max: 5000, ..criteria() };
    assert_eq!(
        validate_investment_criteria(&form).get(field::INVESTMENT_RANGE),
        Some("Maximum must be greater than minimum")
    );
}

// =============================================================
// Change password
// =============================================================

#[test]
fn change_password_accepts_complex_passwords() {
    let form = ChangePasswordForm {
        current_password: "OldPass1!".to_owned(),
        new_password: "NewPass2?".to_owned(),
        confirm_password: "NewPass2?".to_owned(),
    };
    assert!(validate_change_password(&form).is_empty());
}

#[test]
fn change_password_checks_current_and_new() {
    let form = ChangePasswordForm {
        current_password: "oldpass".to_owned(),
        new_password: "Newpass12".to_owned(),
        confirm_password: "Newpass13".to_owned(),
    };
    let errors = validate_change_password(&form);
    assert_eq!(errors.get(field::CURRENT_PASSWORD), Some("Password must be at least 8 characters long"));
    assert_eq!(errors.get(field::NEW_PASSWORD), Some("Password must contain at least one special character"));
    assert_eq!(errors.get(field::CONFIRM_PASSWORD), Some("Passwords do not match"));
}

#[test]
fn change_password_empty_form_requires_passwords() {
    let errors = validate_change_password(&ChangePasswordForm::default());
    assert_eq!(errors.get(field::CURRENT_PASSWORD), Some("Password is required"));
    assert_eq!(errors.get(field::NEW_PASSWORD), Some("Password is required"));
    assert!(!errors.contains(field::CONFIRM_PASSWORD));
}

// =============================================================
// Profile settings
// =============================================================

#[test]
fn settings_accepts_required_fields_only() {
    assert!(validate_profile_settings(&settings()).is_empty());
}

#[test]
fn settings_requires_type_about_and_expertise() {
    let errors = validate_profile_settings(&ProfileSettingsForm::default());
    assert_eq!(errors.get(field::INVESTOR_TYPE), Some("Investor type is required"));
    assert_eq!(errors.get(field::ABOUT), Some("About Me is required"));
    assert_eq!(errors.get(field::EXPERTISE), Some("Expertise is required"));
}

#[test]
fn settings_rejects_unparseable_links() {
    let form = ProfileSettingsForm {
        linkedin: "https://www.linkedin.com/in/mohamed".to_owned(),
        website: "coreup dot com".to_owned(),
        ..settings()
    };
    let errors = validate_profile_settings(&form);
    assert!(!errors.contains(field::LINKEDIN));
    assert_eq!(errors.get(field::WEBSITE), Some("Invalid URL format"));
}

#[test]
fn settings_flags_whitespace_company_names() {
    let blank_row = ProfileSettingsForm { companies: vec!["Acme".to_owned(), String::new()], ..settings() };
    assert!(validate_profile_settings(&blank_row).is_empty());

    let spaces = ProfileSettingsForm { companies: vec!["   ".to_owned()], ..settings() };
    assert_eq!(validate_profile_settings(&spaces).get(field::COMPANIES), Some("Company names cannot be empty"));
}

// =============================================================
// Delete account
// =============================================================

#[test]
fn delete_requires_confirmation() {
    assert!(validate_delete_account(true).is_empty());
    assert_eq!(validate_delete_account(false).get(field::CONFIRM), Some("Please confirm account deletion."));
}
