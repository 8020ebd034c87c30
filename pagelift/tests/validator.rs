use std::time::{Duration, Instant};

use pagedom::{Document, Element};
use pagelift::{EnhanceConfig, FieldState, FormValidator};

// ============================================================================
// Helpers
// ============================================================================

fn contact_page() -> Document {
    let form = Element::form()
        .id("contact-form")
        .attr("name", "contact")
        .child(
            Element::div()
                .id("name-group")
                .child(Element::input("text").id("name-input").attr("name", "name")),
        )
        .child(
            Element::div()
                .id("email-group")
                .child(Element::input("email").id("email-input").attr("name", "email")),
        )
        .child(
            Element::div()
                .id("phone-group")
                .child(Element::input("tel").id("phone-input").attr("name", "phone")),
        )
        .child(
            Element::div().id("message-group").child(
                Element::textarea().id("message-input").attr("name", "message"),
            ),
        );

    Document::new(Element::div().id("root").child(form))
}

fn validator_for(doc: &Document) -> FormValidator {
    FormValidator::bind(doc, &EnhanceConfig::default())
}

fn set_value(doc: &mut Document, id: &str, value: &str) {
    doc.find_mut(id).unwrap().set_value(value);
}

fn fill_valid(doc: &mut Document) {
    set_value(doc, "name-input", "Alice");
    set_value(doc, "email-input", "alice@example.com");
    set_value(doc, "phone-input", "");
    set_value(doc, "message-input", "Hello, this is long enough.");
}

/// Error-message texts inside a field's container.
fn error_messages(doc: &Document, group_id: &str) -> Vec<String> {
    doc.find(group_id)
        .map(|group| {
            group
                .child_elements()
                .iter()
                .filter(|c| c.has_class("error-message"))
                .map(|c| c.text_content().to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn banner_ids(doc: &Document) -> Vec<String> {
    doc.find("contact-form")
        .map(|form| {
            form.child_elements()
                .iter()
                .filter(|c| c.has_class("success-message"))
                .map(|c| c.id.clone())
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_bind_named_form() {
    let doc = contact_page();
    let validator = validator_for(&doc);

    assert!(!validator.is_inert());
    assert_eq!(validator.form_id(), Some("contact-form"));
}

#[test]
fn test_bind_class_fallback() {
    // No name attribute: the `.contact-form` lookup picks it up
    let form = Element::form().id("f").class("contact-form");
    let doc = Document::new(Element::div().child(form));

    let validator = validator_for(&doc);
    assert_eq!(validator.form_id(), Some("f"));
}

#[test]
fn test_bind_generic_form_fallback() {
    let form = Element::form().id("plain");
    let doc = Document::new(Element::div().child(form));

    let validator = validator_for(&doc);
    assert_eq!(validator.form_id(), Some("plain"));
}

#[test]
fn test_bind_without_form_is_inert() {
    let mut doc = Document::new(Element::div().id("root"));
    let mut validator = validator_for(&doc);

    assert!(validator.is_inert());
    // Every operation no-ops
    assert!(!validator.handle_submit(&mut doc, Instant::now()));
    assert!(banner_ids(&doc).is_empty());
}

// ============================================================================
// Field validation
// ============================================================================

#[test]
fn test_unknown_element_is_valid_without_side_effects() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);

    assert!(validator.validate_field(&mut doc, "root"));
    assert!(error_messages(&doc, "name-group").is_empty());
}

#[test]
fn test_blur_marks_invalid_field() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);

    set_value(&mut doc, "email-input", "not-an-email");
    assert!(!validator.handle_blur(&mut doc, "email-input"));

    assert_eq!(validator.field_state("email"), Some(FieldState::Error));
    assert!(doc.find("email-input").unwrap().has_class("error"));
    assert_eq!(
        error_messages(&doc, "email-group"),
        vec!["Please enter a valid email address".to_string()]
    );
}

#[test]
fn test_error_marking_idempotent() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);

    set_value(&mut doc, "email-input", "nope");
    validator.validate_field(&mut doc, "email-input");
    validator.validate_field(&mut doc, "email-input");

    // Exactly one message node, exactly one class entry
    assert_eq!(error_messages(&doc, "email-group").len(), 1);
    let el = doc.find("email-input").unwrap();
    assert_eq!(el.classes.iter().filter(|c| *c == "error").count(), 1);
}

#[test]
fn test_valid_value_clears_error() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);

    set_value(&mut doc, "email-input", "nope");
    validator.validate_field(&mut doc, "email-input");

    set_value(&mut doc, "email-input", "a@b.co");
    assert!(validator.validate_field(&mut doc, "email-input"));

    assert_eq!(validator.field_state("email"), Some(FieldState::Clean));
    assert!(!doc.find("email-input").unwrap().has_class("error"));
    assert!(error_messages(&doc, "email-group").is_empty());

    // Clearing again is safe
    assert!(validator.validate_field(&mut doc, "email-input"));
    assert!(error_messages(&doc, "email-group").is_empty());
}

#[test]
fn test_field_failure_reports_shared_message_once() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);

    // message field: [required, minLength:10] and an empty value.
    // The first failing rule wins; one shared message, not one per rule.
    set_value(&mut doc, "message-input", "");
    assert!(!validator.validate_field(&mut doc, "message-input"));

    assert_eq!(
        error_messages(&doc, "message-group"),
        vec!["Please enter a message (at least 10 characters)".to_string()]
    );
}

#[test]
fn test_input_clears_error_without_revalidating() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);

    set_value(&mut doc, "email-input", "nope");
    validator.handle_blur(&mut doc, "email-input");
    assert_eq!(validator.field_state("email"), Some(FieldState::Error));

    // Still invalid, but the input event clears the marker anyway
    set_value(&mut doc, "email-input", "still-nope");
    validator.handle_input(&mut doc, "email-input");

    assert_eq!(validator.field_state("email"), Some(FieldState::Clean));
    assert!(!doc.find("email-input").unwrap().has_class("error"));
    assert!(error_messages(&doc, "email-group").is_empty());

    // The next blur re-checks and flags it again
    assert!(!validator.handle_blur(&mut doc, "email-input"));
    assert_eq!(validator.field_state("email"), Some(FieldState::Error));
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_mixed_marks_only_invalid_field() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);

    fill_valid(&mut doc);
    set_value(&mut doc, "name-input", ""); // invalid

    assert!(!validator.handle_submit(&mut doc, Instant::now()));

    assert_eq!(validator.field_state("name"), Some(FieldState::Error));
    assert_eq!(validator.field_state("email"), Some(FieldState::Clean));
    assert_eq!(validator.field_state("message"), Some(FieldState::Clean));
    assert_eq!(error_messages(&doc, "name-group").len(), 1);
    assert!(error_messages(&doc, "email-group").is_empty());

    // No banner, no reset
    assert!(banner_ids(&doc).is_empty());
    assert!(!validator.has_pending_sequence());
    assert_eq!(doc.find("email-input").unwrap().value_text(), "alice@example.com");
}

#[test]
fn test_submit_validates_every_field() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);

    // Two invalid fields: both get marked, not just the first
    set_value(&mut doc, "name-input", "");
    set_value(&mut doc, "message-input", "short");
    set_value(&mut doc, "email-input", "a@b.co");

    assert!(!validator.handle_submit(&mut doc, Instant::now()));

    assert_eq!(error_messages(&doc, "name-group").len(), 1);
    assert_eq!(error_messages(&doc, "message-group").len(), 1);
}

#[test]
fn test_submit_valid_runs_success_sequence() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);
    let t0 = Instant::now();

    fill_valid(&mut doc);
    assert!(validator.handle_submit(&mut doc, t0));

    // Banner is the form's first child
    let form = doc.find("contact-form").unwrap();
    assert!(form.child_elements()[0].has_class("success-message"));
    assert_eq!(
        form.child_elements()[0].text_content(),
        "Thank you! Your message has been sent."
    );
    assert!(validator.has_pending_sequence());

    // Just before the hold expires nothing has happened
    validator.tick(&mut doc, t0 + Duration::from_millis(1999));
    assert_eq!(doc.find("name-input").unwrap().value_text(), "Alice");

    // At 2000 ms the form resets and the banner starts fading
    validator.tick(&mut doc, t0 + Duration::from_millis(2000));
    assert_eq!(doc.find("name-input").unwrap().value_text(), "");
    assert_eq!(doc.find("email-input").unwrap().value_text(), "");
    assert_eq!(doc.find("message-input").unwrap().value_text(), "");
    let banners = banner_ids(&doc);
    assert_eq!(banners.len(), 1);
    assert_eq!(doc.find(&banners[0]).unwrap().style.opacity, Some(0.0));

    // 300 ms later the banner is gone
    validator.tick(&mut doc, t0 + Duration::from_millis(2300));
    assert!(banner_ids(&doc).is_empty());
    assert!(!validator.has_pending_sequence());
}

#[test]
fn test_submit_leaves_foreign_errors_alone() {
    let mut doc = contact_page();

    // A stray error-message node outside the form's field containers
    let stray = Element::span("unrelated").id("stray").class("error-message");
    doc.find_mut("root").unwrap().push_child(stray);

    let mut validator = validator_for(&doc);
    let t0 = Instant::now();

    fill_valid(&mut doc);
    assert!(validator.handle_submit(&mut doc, t0));
    validator.tick(&mut doc, t0 + Duration::from_millis(2300));

    assert!(doc.find("stray").is_some());
}

#[test]
fn test_overlapping_submission_keeps_single_banner() {
    let mut doc = contact_page();
    let mut validator = validator_for(&doc);
    let t0 = Instant::now();

    fill_valid(&mut doc);
    assert!(validator.handle_submit(&mut doc, t0));
    let first_banner = banner_ids(&doc)[0].clone();

    // Second submission while the first sequence is pending
    assert!(validator.handle_submit(&mut doc, t0 + Duration::from_millis(1000)));
    let banners = banner_ids(&doc);
    assert_eq!(banners.len(), 1);
    assert_ne!(banners[0], first_banner);

    // The first sequence's timers were cancelled: nothing fires at t0+2000
    validator.tick(&mut doc, t0 + Duration::from_millis(2000));
    assert_eq!(doc.find("name-input").unwrap().value_text(), "Alice");
    assert_eq!(banner_ids(&doc).len(), 1);

    // The fresh sequence runs on its own clock
    validator.tick(&mut doc, t0 + Duration::from_millis(3000));
    assert_eq!(doc.find("name-input").unwrap().value_text(), "");
    validator.tick(&mut doc, t0 + Duration::from_millis(3300));
    assert!(banner_ids(&doc).is_empty());
    assert!(!validator.has_pending_sequence());
}
