// crates/message-gate-core/tests/content_selector.rs
// ============================================================================
// Module: Content Selector Tests
// Description: Tests for three-source content selection and fallback policy.
// ============================================================================
//! ## Overview
//! Validates the inline > template > default priority order, subject
//! defaults per source, fallback on missing templates and store errors, and
//! selection idempotence.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use std::collections::BTreeMap;

use message_gate_core::EmailSpec;
use message_gate_core::SmsSpec;
use message_gate_core::SubstitutionMap;
use message_gate_core::SubstitutionValue;
use message_gate_core::TemplateName;
use message_gate_core::TemplateRecord;
use message_gate_core::TemplateStore;
use message_gate_core::TemplateStoreError;
use message_gate_core::select_email;
use message_gate_core::select_sms;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Map-backed template store fixture.
#[derive(Default)]
struct MapStore {
    /// Stored templates by name.
    templates: BTreeMap<TemplateName, TemplateRecord>,
}

impl MapStore {
    /// Adds a template record.
    fn with(mut self, name: &str, body: &str, subject: Option<&str>) -> Self {
        self.templates.insert(
            TemplateName::from(name),
            TemplateRecord {
                message_body: body.to_string(),
                subject: subject.map(ToString::to_string),
            },
        );
        self
    }
}

impl TemplateStore for MapStore {
    fn fetch(&self, name: &TemplateName) -> Result<Option<TemplateRecord>, TemplateStoreError> {
        Ok(self.templates.get(name).cloned())
    }
}

/// Store fixture that always fails.
struct FailingStore;

impl TemplateStore for FailingStore {
    fn fetch(&self, _name: &TemplateName) -> Result<Option<TemplateRecord>, TemplateStoreError> {
        Err(TemplateStoreError::Store("store offline".to_string()))
    }
}

/// Builds a substitution map from string pairs.
fn subs(pairs: &[(&str, &str)]) -> SubstitutionMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), SubstitutionValue::from(*value)))
        .collect()
}

// ============================================================================
// SECTION: Email Selection
// ============================================================================

#[test]
fn test_inline_body_takes_priority_over_template() {
    let store = MapStore::default().with("welcome", "template body", Some("Template Subject"));
    let spec = EmailSpec {
        message_body: Some("Hi {name}".to_string()),
        template_name: Some(TemplateName::from("welcome")),
        ..EmailSpec::default()
    };
    let content = select_email(&spec, &subs(&[("name", "Ann")]), &store);
    assert_eq!(content.body, "Hi Ann");
    assert_eq!(content.subject.as_deref(), Some("Notification"));
}

#[test]
fn test_inline_subject_from_spec() {
    let spec = EmailSpec {
        message_body: Some("body".to_string()),
        subject: Some("Custom".to_string()),
        ..EmailSpec::default()
    };
    let content = select_email(&spec, &SubstitutionMap::new(), &MapStore::default());
    assert_eq!(content.subject.as_deref(), Some("Custom"));
}

#[test]
fn test_template_body_and_subject_rendered() {
    let store = MapStore::default().with("welcome", "Hello {name}", Some("For {name}"));
    let spec = EmailSpec {
        template_name: Some(TemplateName::from("welcome")),
        ..EmailSpec::default()
    };
    let content = select_email(&spec, &subs(&[("name", "Ann")]), &store);
    assert_eq!(content.body, "Hello Ann");
    assert_eq!(content.subject.as_deref(), Some("For Ann"));
}

#[test]
fn test_template_without_subject_defaults_to_notification() {
    let store = MapStore::default().with("welcome", "Hello", None);
    let spec = EmailSpec {
        template_name: Some(TemplateName::from("welcome")),
        ..EmailSpec::default()
    };
    let content = select_email(&spec, &SubstitutionMap::new(), &store);
    assert_eq!(content.subject.as_deref(), Some("Notification"));
}

#[test]
fn test_missing_template_falls_back_to_default() {
    let spec = EmailSpec {
        template_name: Some(TemplateName::from("missing")),
        ..EmailSpec::default()
    };
    let content = select_email(&spec, &SubstitutionMap::new(), &MapStore::default());
    assert!(content.body.contains("Account Alert"));
    assert_eq!(content.subject.as_deref(), Some("Account Alert"));
}

#[test]
fn test_store_error_falls_back_to_default() {
    let spec = EmailSpec {
        template_name: Some(TemplateName::from("any")),
        ..EmailSpec::default()
    };
    let content = select_email(&spec, &SubstitutionMap::new(), &FailingStore);
    assert!(content.body.contains("Account Alert"));
}

#[test]
fn test_default_body_uses_substitution_defaults() {
    let spec = EmailSpec::default();
    let content = select_email(&spec, &SubstitutionMap::new(), &MapStore::default());
    assert!(content.body.contains("Your Account account ending in ****"));
    assert!(content.body.contains("$0.00"));
    assert_eq!(content.subject.as_deref(), Some("Account Alert"));
}

#[test]
fn test_default_body_applies_provided_substitutions() {
    let spec = EmailSpec::default();
    let merged = subs(&[("productName", "Savings"), ("membershipNumber", "1234"), ("threshold", "25.00")]);
    let content = select_email(&spec, &merged, &MapStore::default());
    assert!(content.body.contains("Your Savings account ending in 1234"));
    assert!(content.body.contains("$25.00"));
}

#[test]
fn test_selection_is_idempotent() {
    let store = MapStore::default().with("welcome", "Hello {name}", Some("For {name}"));
    let spec = EmailSpec {
        template_name: Some(TemplateName::from("welcome")),
        ..EmailSpec::default()
    };
    let merged = subs(&[("name", "Ann")]);
    let first = select_email(&spec, &merged, &store);
    let second = select_email(&spec, &merged, &store);
    assert_eq!(first, second);
}

// ============================================================================
// SECTION: SMS Selection
// ============================================================================

#[test]
fn test_sms_inline_body() {
    let spec = SmsSpec {
        message_body: Some("Code: {code}".to_string()),
        ..SmsSpec::default()
    };
    let body = select_sms(&spec, &subs(&[("code", "1234")]), &MapStore::default());
    assert_eq!(body, "Code: 1234");
}

#[test]
fn test_sms_template_hit() {
    let store = MapStore::default().with("otp", "Your code is {code}", None);
    let spec = SmsSpec {
        template_name: Some(TemplateName::from("otp")),
        ..SmsSpec::default()
    };
    let body = select_sms(&spec, &subs(&[("code", "9")]), &store);
    assert_eq!(body, "Your code is 9");
}

#[test]
fn test_sms_missing_template_falls_back_to_default() {
    let spec = SmsSpec {
        template_name: Some(TemplateName::from("missing")),
        ..SmsSpec::default()
    };
    let body = select_sms(&spec, &SubstitutionMap::new(), &MapStore::default());
    assert_eq!(
        body,
        "Alert: Your Account account ending in **** has a low balance of $0.00"
    );
}
