// crates/message-gate-auth/tests/authorizer.rs
// ============================================================================
// Module: Request Authorizer Tests
// Description: Tests for shared-secret authorization decisions.
// ============================================================================
//! ## Overview
//! Validates allow decisions for valid tokens, opaque failures for invalid
//! ones, Bearer prefix handling, the default principal, the set-once secret
//! cache, and audit record emission.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]
#![allow(clippy::expect_used, reason = "Tests use expect for explicit failure messages.")]

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use message_gate_auth::ClaimValidator;
use message_gate_auth::RequestAuthorizer;
use message_gate_auth::TokenRequest;
use message_gate_auth::issue_token;
use message_gate_core::Claims;
use message_gate_core::PolicyEffect;
use message_gate_core::ResourceId;
use message_gate_core::SecretError;
use message_gate_core::SecretProvider;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Shared secret used by all fixtures.
const SECRET: &str = "test-secret";
/// Issuer configured on all validators.
const ISSUER: &str = "messaging-api";

/// Secret provider fixture counting fetches.
struct CountingSecret {
    /// Number of `shared_secret` calls observed.
    fetches: AtomicUsize,
}

impl CountingSecret {
    /// Creates a provider with a zeroed counter.
    fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
        }
    }
}

impl SecretProvider for CountingSecret {
    fn shared_secret(&self) -> Result<String, SecretError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(SECRET.to_string())
    }
}

/// Secret provider fixture that always fails.
struct BrokenSecret;

impl SecretProvider for BrokenSecret {
    fn shared_secret(&self) -> Result<String, SecretError> {
        Err(SecretError::Unavailable("store offline".to_string()))
    }
}

/// Write fixture capturing audit bytes behind a shared buffer.
#[derive(Clone, Default)]
struct SharedBuffer {
    /// Captured bytes.
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.bytes.lock().map_err(|_| std::io::Error::other("poisoned"))?.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Builds an authorizer over a counting secret provider.
fn authorizer() -> RequestAuthorizer {
    let validator = ClaimValidator::shared_secret(Arc::new(CountingSecret::new()), ISSUER);
    RequestAuthorizer::new(validator)
}

/// Returns the current unix time in seconds.
fn now_secs() -> i64 {
    i64::try_from(SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs()).unwrap()
}

/// Encodes arbitrary claims with the shared test secret.
fn encode_claims(claims: &Claims) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

// ============================================================================
// SECTION: Allow Decisions
// ============================================================================

#[test]
fn test_valid_token_yields_allow_with_context() {
    let token = issue_token(
        &TokenRequest::new("user-123").with_email("ann@example.com").with_customer_id("cust-9"),
        SECRET,
        ISSUER,
    )
    .unwrap();
    let decision = authorizer()
        .authorize(&format!("Bearer {token}"), &ResourceId::from("arn:resource"))
        .unwrap();

    assert_eq!(decision.principal_id.as_str(), "user-123");
    assert_eq!(decision.effect, PolicyEffect::Allow);
    assert_eq!(decision.resource.as_str(), "arn:resource");
    assert_eq!(decision.context.user_id, "user-123");
    assert_eq!(decision.context.email, "ann@example.com");
    assert_eq!(decision.context.customer_id, "cust-9");
}

#[test]
fn test_token_without_scheme_prefix_accepted() {
    let token = issue_token(&TokenRequest::new("user-123"), SECRET, ISSUER).unwrap();
    let decision = authorizer().authorize(&token, &ResourceId::from("arn:resource")).unwrap();
    assert_eq!(decision.effect, PolicyEffect::Allow);
}

#[test]
fn test_missing_subject_defaults_to_user() {
    let claims = Claims {
        sub: None,
        iss: Some(ISSUER.to_string()),
        iat: Some(now_secs()),
        exp: now_secs() + 3_600,
        email: None,
        customer_id: None,
    };
    let decision = authorizer()
        .authorize(&encode_claims(&claims), &ResourceId::from("arn:resource"))
        .unwrap();

    assert_eq!(decision.principal_id.as_str(), "user");
    assert_eq!(decision.context.user_id, "");
}

#[test]
fn test_absent_optional_claims_forward_empty_strings() {
    let token = issue_token(&TokenRequest::new("user-123"), SECRET, ISSUER).unwrap();
    let decision = authorizer().authorize(&token, &ResourceId::from("arn:resource")).unwrap();
    assert_eq!(decision.context.email, "");
    assert_eq!(decision.context.customer_id, "");
}

// ============================================================================
// SECTION: Opaque Failures
// ============================================================================

#[test]
fn test_expired_token_is_unauthorized() {
    let claims = Claims {
        sub: Some("user-123".to_string()),
        iss: Some(ISSUER.to_string()),
        iat: Some(now_secs() - 7_200),
        exp: now_secs() - 3_600,
        email: None,
        customer_id: None,
    };
    let err = authorizer()
        .authorize(&encode_claims(&claims), &ResourceId::from("arn:resource"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized");
}

#[test]
fn test_issuer_mismatch_is_unauthorized() {
    let token = issue_token(&TokenRequest::new("user-123"), SECRET, "other-issuer").unwrap();
    assert!(authorizer().authorize(&token, &ResourceId::from("arn:resource")).is_err());
}

#[test]
fn test_wrong_secret_is_unauthorized() {
    let token = issue_token(&TokenRequest::new("user-123"), "other-secret", ISSUER).unwrap();
    assert!(authorizer().authorize(&token, &ResourceId::from("arn:resource")).is_err());
}

#[test]
fn test_garbage_token_is_unauthorized() {
    assert!(authorizer().authorize("not-a-token", &ResourceId::from("arn:resource")).is_err());
}

#[test]
fn test_lowercase_bearer_prefix_is_not_stripped() {
    let token = issue_token(&TokenRequest::new("user-123"), SECRET, ISSUER).unwrap();
    let err = authorizer()
        .authorize(&format!("bearer {token}"), &ResourceId::from("arn:resource"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized");
}

#[test]
fn test_secret_provider_failure_is_unauthorized() {
    let validator = ClaimValidator::shared_secret(Arc::new(BrokenSecret), ISSUER);
    let authorizer = RequestAuthorizer::new(validator);
    let token = issue_token(&TokenRequest::new("user-123"), SECRET, ISSUER).unwrap();
    assert!(authorizer.authorize(&token, &ResourceId::from("arn:resource")).is_err());
}

// ============================================================================
// SECTION: Secret Cache
// ============================================================================

#[test]
fn test_secret_fetched_once_across_requests() {
    let provider = Arc::new(CountingSecret::new());
    let validator = ClaimValidator::shared_secret(provider.clone(), ISSUER);
    let authorizer = RequestAuthorizer::new(validator);
    let token = issue_token(&TokenRequest::new("user-123"), SECRET, ISSUER).unwrap();

    authorizer.authorize(&token, &ResourceId::from("arn:a")).unwrap();
    authorizer.authorize(&token, &ResourceId::from("arn:b")).unwrap();

    assert_eq!(provider.fetches.load(Ordering::SeqCst), 1);
}

// ============================================================================
// SECTION: Audit Records
// ============================================================================

#[test]
fn test_denial_writes_audit_record() {
    let buffer = SharedBuffer::default();
    let validator = ClaimValidator::shared_secret(Arc::new(CountingSecret::new()), ISSUER);
    let authorizer = RequestAuthorizer::new(validator).with_audit_writer(buffer.clone());

    assert!(authorizer.authorize("garbage", &ResourceId::from("arn:resource")).is_err());

    let bytes = buffer.bytes.lock().unwrap();
    let line = String::from_utf8(bytes.clone()).unwrap();
    let record: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(record["event"], "authorization_denied");
    assert_eq!(record["resource"], "arn:resource");
}

#[test]
fn test_success_writes_no_audit_record() {
    let buffer = SharedBuffer::default();
    let validator = ClaimValidator::shared_secret(Arc::new(CountingSecret::new()), ISSUER);
    let authorizer = RequestAuthorizer::new(validator).with_audit_writer(buffer.clone());
    let token = issue_token(&TokenRequest::new("user-123"), SECRET, ISSUER).unwrap();

    authorizer.authorize(&token, &ResourceId::from("arn:resource")).unwrap();

    assert!(buffer.bytes.lock().unwrap().is_empty());
}
