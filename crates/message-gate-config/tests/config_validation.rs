// crates/message-gate-config/tests/config_validation.rs
// ============================================================================
// Module: Configuration Validation Tests
// Description: Tests for config loading, defaults, and fail-closed checks.
// ============================================================================
//! ## Overview
//! Validates TOML loading, defaulted sections, trust mode selection, and
//! rejection of invalid settings.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::panic, reason = "Tests use panic-based assertions on enum shape.")]

use std::io::Write;

use message_gate_config::GatewayConfig;
use message_gate_config::TrustModeConfig;
use tempfile::NamedTempFile;

/// Writes `content` to a temp file and returns the handle.
fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = config_file("");
    let config = GatewayConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.auth.issuer, "messaging-api");
    assert_eq!(config.auth.leeway_secs, 0);
    assert!(matches!(config.auth.trust, TrustModeConfig::SharedSecret { .. }));
    assert!(config.email.configuration_set.is_none());
    assert!(config.templates.catalog_path.is_none());
}

#[test]
fn test_full_config_round_trip() {
    let file = config_file(
        r#"
        [auth]
        issuer = "billing-api"
        leeway_secs = 30

        [auth.trust]
        mode = "shared_secret"
        secret_variable = "BILLING_SECRET"

        [email]
        configuration_set = "email-events"

        [sms]
        configuration_set = "sms-events"

        [templates]
        catalog_path = "templates.json"
        "#,
    );
    let config = GatewayConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.auth.issuer, "billing-api");
    assert_eq!(config.auth.leeway_secs, 30);
    match &config.auth.trust {
        TrustModeConfig::SharedSecret {
            secret_variable,
        } => assert_eq!(secret_variable, "BILLING_SECRET"),
        TrustModeConfig::KeySet {
            ..
        } => panic!("expected shared secret trust mode"),
    }
    assert_eq!(config.email.configuration_set.as_deref(), Some("email-events"));
    assert_eq!(config.sms.configuration_set.as_deref(), Some("sms-events"));
}

#[test]
fn test_key_set_trust_mode() {
    let file = config_file(
        r#"
        [auth.trust]
        mode = "key_set"
        jwks_url = "https://issuer.example.com/.well-known/jwks.json"
        "#,
    );
    let config = GatewayConfig::load(Some(file.path())).unwrap();
    assert!(matches!(config.auth.trust, TrustModeConfig::KeySet { .. }));
}

#[test]
fn test_key_set_rejects_non_http_url() {
    let file = config_file(
        r#"
        [auth.trust]
        mode = "key_set"
        jwks_url = "ftp://issuer.example.com/keys"
        "#,
    );
    assert!(GatewayConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_empty_issuer_is_rejected() {
    let file = config_file("[auth]\nissuer = \"  \"\n");
    assert!(GatewayConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_excessive_leeway_is_rejected() {
    let file = config_file("[auth]\nissuer = \"messaging-api\"\nleeway_secs = 301\n");
    assert!(GatewayConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_empty_secret_variable_is_rejected() {
    let file = config_file(
        r#"
        [auth.trust]
        mode = "shared_secret"
        secret_variable = ""
        "#,
    );
    assert!(GatewayConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_empty_configuration_set_is_rejected() {
    let file = config_file("[email]\nconfiguration_set = \"\"\n");
    assert!(GatewayConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_unknown_trust_mode_is_rejected() {
    let file = config_file(
        r#"
        [auth.trust]
        mode = "mutual_tls"
        "#,
    );
    assert!(GatewayConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_oversized_config_file_is_rejected() {
    let padding = format!("# {}\n", "x".repeat(1024 * 1024));
    let file = config_file(&padding);
    assert!(GatewayConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_malformed_toml_is_rejected() {
    let file = config_file("[auth\nissuer=");
    assert!(GatewayConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(GatewayConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
}
