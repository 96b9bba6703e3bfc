//! Integration tests for common FieldGuard workflows.
//!
//! These tests walk through the typical record-validation scenarios end to end.

use fieldguard::prelude::*;

const EMAIL_PATTERN: &str = r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct User {
    name: String,
    email: String,
    age: i32,
}

// =============================================================================
// Record Validation
// =============================================================================

#[test]
fn test_empty_name_runs_every_rule() {
    init_tracing();

    let mut validator = StructValidator::new();
    validator.add_field("Name", "", [required(), min_length(3)]);

    let errors = validator.validate();
    let name_errors = errors.field_failures("Name");
    assert_eq!(name_errors.len(), 2);
    assert_eq!(name_errors[0].code, codes::REQUIRED);
    assert_eq!(name_errors[1].code, codes::TOO_SHORT);
}

#[test]
fn test_invalid_email_reports_format() {
    init_tracing();

    let mut validator = StructValidator::new();
    validator.add_field("Email", "invalid_email", [match_regex(EMAIL_PATTERN).unwrap()]);

    let errors = validator.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.failures()[0].field, "Email");
    assert_eq!(errors.failures()[0].code, codes::FORMAT_INVALID);
}

#[test]
fn test_role_in_enum_passes() {
    let mut validator = StructValidator::new();
    validator.add_field("Role", "admin", [enums(["admin", "user"])]);

    assert!(!validator.validate().has_failures());
}

#[test]
fn test_conditional_name_length() {
    fn name_has_errors(user: &User) -> bool {
        let name = user.name.clone();
        let not_admin = move || name != "admin";

        let mut validator = StructValidator::new();
        validator.add_field("Name", &user.name, [conditional(not_admin, min_length(6))]);
        validator.validate().has_failures()
    }

    let cases = [("", true), ("dalei", true), ("admin", false), ("long name", false)];
    for (name, expected) in cases {
        let user = User {
            name: name.to_string(),
            email: String::new(),
            age: 0,
        };
        assert_eq!(
            name_has_errors(&user),
            expected,
            "name `{}` conditional result",
            name
        );
    }
}

#[test]
fn test_full_user_report() {
    init_tracing();

    let user = User {
        name: String::new(),
        email: "invalid_email".to_string(),
        age: 25,
    };

    let mut validator = StructValidator::new();
    validator
        .add_field("Name", &user.name, [required(), min_length(3)])
        .add_field(
            "Email",
            &user.email,
            [required(), match_regex(EMAIL_PATTERN).unwrap()],
        )
        .add_field("Age", user.age, [required()]);

    let errors = validator.validate();
    assert_eq!(errors.len(), 3);

    let report = errors.render();
    assert!(report.starts_with("Error 1:\n  Field: Name\n  Message: is required\n  Code: 1001\n"));
    assert!(report.contains("Error 3:\n  Field: Email\n  Message: format is invalid\n  Code: 1008\n"));
}

// =============================================================================
// Modes and Shared Rules
// =============================================================================

#[test]
fn test_stop_on_first_failure_vs_collect_all() {
    let build = |stop: bool| {
        let mut validator = StructValidator::with_config(ValidatorConfig {
            stop_on_first_failure: stop,
        });
        validator
            .add_field("Name", "", [required()])
            .add_field("Age", 5, [min_value(18)]);
        validator.validate()
    };

    let collected = build(false);
    assert_eq!(collected.len(), 2);

    let stopped = build(true);
    assert_eq!(stopped.len(), 1);
    assert_eq!(stopped.failures()[0].field, "Name");
}

#[test]
fn test_group_rules_apply_after_registration() {
    let mut validator = StructValidator::new();
    validator
        .add_field("First", "Alexandria", [required()])
        .add_field("Last", "Li", [required()])
        .add_field("Age", 40, [min_value(18)]);
    validator.add_field_group(["First", "Last", "Middle"], &[max_length(8), min_length(3)]);

    let errors = validator.validate();
    let summary: Vec<_> = errors.iter().map(|e| (e.field.as_str(), e.code)).collect();
    assert_eq!(
        summary,
        [("First", codes::TOO_LONG), ("Last", codes::TOO_SHORT)]
    );
    assert!(validator.field("Middle").is_none());
}

#[test]
fn test_custom_rule_and_message() {
    let no_spaces = custom("noSpaces", |field, value, collector| {
        match value.as_str() {
            Some(s) if s.contains(' ') => {
                collector.push(
                    ValidationFailure::new(field, "must not contain spaces")
                        .with_constraint("noSpaces"),
                );
                Outcome::Fail
            }
            _ => Outcome::Pass,
        }
    });

    let mut validator = StructValidator::new();
    validator
        .add_field("Handle", "two words", [no_spaces])
        .add_field("Bio", "", [required_with_message("tell us about yourself")]);

    let errors = validator.validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.failures()[0].code, codes::UNCATEGORIZED);
    assert_eq!(errors.failures()[1].code, codes::REQUIRED_CUSTOM);

    let report = errors.render();
    assert!(report.contains("Error 1:\n  Field: Handle\n  Message: must not contain spaces\n\n"));
    assert!(report.contains("Message: tell us about yourself\n  Code: 1002\n"));
}

// =============================================================================
// Reporting
// =============================================================================

#[test]
fn test_report_as_json_for_api_response() {
    init_tracing();

    let span = tracing::info_span!("signup_request", form = "signup");
    let errors = span.in_scope(|| {
        let mut validator = StructValidator::new();
        validator
            .add_field("Email", "not-an-email", [required(), is_email()])
            .add_field("Age", 12, [min_value(18)]);

        let errors = validator.validate();
        tracing::info!(failures = errors.len(), "Signup form validated");
        errors
    });

    let body = serde_json::json!({ "status": 422, "details": errors.to_json() });
    assert_eq!(body["details"]["errors"][0]["field"], "Email");
    assert_eq!(body["details"]["errors"][0]["code"], codes::FORMAT_INVALID);
    assert_eq!(body["details"]["errors"][1]["code"], codes::TOO_SMALL);

    let serialized = serde_json::to_value(&errors).unwrap();
    assert_eq!(serialized, errors.to_json());
}
