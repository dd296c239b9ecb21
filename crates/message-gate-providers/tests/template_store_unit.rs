// crates/message-gate-providers/tests/template_store_unit.rs
// ============================================================================
// Module: Template Store Tests
// Description: Tests for in-memory and JSON-catalog template stores.
// ============================================================================
//! ## Overview
//! Validates catalog loading, wire field names, lookup misses, and the
//! catalog size limit.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]

use std::io::Write;

use message_gate_core::TemplateName;
use message_gate_core::TemplateRecord;
use message_gate_core::TemplateStore;
use message_gate_providers::InMemoryTemplateStore;
use message_gate_providers::JsonTemplateStore;
use tempfile::NamedTempFile;

/// Writes `content` to a temp file and returns the handle.
fn catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_in_memory_fetch_and_miss() {
    let mut store = InMemoryTemplateStore::new();
    store.insert(
        TemplateName::from("low-balance"),
        TemplateRecord {
            message_body: "Hello {name}".to_string(),
            subject: Some("Balance".to_string()),
        },
    );

    let hit = store.fetch(&TemplateName::from("low-balance")).unwrap().unwrap();
    assert_eq!(hit.message_body, "Hello {name}");
    assert_eq!(hit.subject.as_deref(), Some("Balance"));
    assert!(store.fetch(&TemplateName::from("missing")).unwrap().is_none());
}

#[test]
fn test_json_catalog_uses_wire_field_names() {
    let file = catalog_file(
        r#"{
            "low-balance": {"MessageBody": "Hi {name}", "Subject": "Balance"},
            "welcome": {"MessageBody": "Welcome"}
        }"#,
    );
    let store = JsonTemplateStore::load(file.path()).unwrap();

    assert_eq!(store.len(), 2);
    let hit = store.fetch(&TemplateName::from("low-balance")).unwrap().unwrap();
    assert_eq!(hit.message_body, "Hi {name}");
    let bare = store.fetch(&TemplateName::from("welcome")).unwrap().unwrap();
    assert!(bare.subject.is_none());
}

#[test]
fn test_json_catalog_miss_is_none() {
    let file = catalog_file("{}");
    let store = JsonTemplateStore::load(file.path()).unwrap();
    assert!(store.is_empty());
    assert!(store.fetch(&TemplateName::from("missing")).unwrap().is_none());
}

#[test]
fn test_invalid_catalog_is_rejected() {
    let file = catalog_file("not json");
    assert!(JsonTemplateStore::load(file.path()).is_err());
}

#[test]
fn test_missing_catalog_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(JsonTemplateStore::load(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_oversized_catalog_is_rejected() {
    let padding = " ".repeat(1024 * 1024);
    let file = catalog_file(&format!("{{{padding}}}"));
    assert!(JsonTemplateStore::load(file.path()).is_err());
}
