use super::*;

#[test]
fn new_map_is_empty() {
    let errors = FieldErrors::new();
    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
}

#[test]
fn first_message_for_a_field_wins() {
    let mut errors = FieldErrors::new();
    errors.insert("email", "Email is required");
    errors.insert("email", "Invalid email address");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("email"), Some("Email is required"));
}

#[test]
fn fields_keep_insertion_order() {
    let mut errors = FieldErrors::new();
    errors.insert("password", "Password is required");
    errors.insert("email", "Email is required");
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["password", "email"]);
}

#[test]
fn clear_field_removes_only_that_field() {
    let mut errors = FieldErrors::new();
    errors.insert("password", "Password is required");
    errors.insert("email", "Email is required");
    errors.clear_field("email");
    assert!(!errors.contains("email"));
    assert!(errors.contains("password"));
}
