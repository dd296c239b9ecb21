// crates/message-gate-auth/src/issue.rs
// ============================================================================
// Module: Message Gate Token Issuance
// Description: Shared-secret token issuance for manual testing.
// Purpose: Mint HS256 tokens compatible with the claim validator.
// Dependencies: jsonwebtoken, message-gate-core
// ============================================================================

//! ## Overview
//! Token issuance exists for the CLI helper and tests; it is not part of the
//! production authorization path. Tokens are signed HS256 with the shared
//! secret and are valid for 24 hours unless a different validity is
//! requested.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::encode;
use message_gate_core::Claims;

use crate::error::IssueError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default token validity: 24 hours.
pub const DEFAULT_VALIDITY_SECS: u64 = 24 * 60 * 60;

// ============================================================================
// SECTION: Token Request
// ============================================================================

/// Parameters for one issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    /// Subject (principal) identifier.
    pub subject: String,
    /// Optional email claim.
    pub email: Option<String>,
    /// Optional customer identifier claim.
    pub customer_id: Option<String>,
    /// Validity window in seconds from issuance.
    pub validity_secs: u64,
}

impl TokenRequest {
    /// Creates a request with the default 24 hour validity.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: None,
            customer_id: None,
            validity_secs: DEFAULT_VALIDITY_SECS,
        }
    }

    /// Sets the email claim.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the customer identifier claim.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Sets the validity window in seconds.
    #[must_use]
    pub const fn with_validity_secs(mut self, validity_secs: u64) -> Self {
        self.validity_secs = validity_secs;
        self
    }
}

// ============================================================================
// SECTION: Issuance
// ============================================================================

/// Issues a signed HS256 token for the given request.
///
/// # Errors
///
/// Returns [`IssueError::Clock`] when the system clock is unusable and
/// [`IssueError::Encode`] when signing fails.
pub fn issue_token(
    request: &TokenRequest,
    secret: &str,
    issuer: &str,
) -> Result<String, IssueError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| IssueError::Clock)?
        .as_secs();
    let issued_at = i64::try_from(now).map_err(|_| IssueError::Clock)?;
    let validity = i64::try_from(request.validity_secs).map_err(|_| IssueError::Clock)?;
    let claims = Claims {
        sub: Some(request.subject.clone()),
        iss: Some(issuer.to_string()),
        iat: Some(issued_at),
        exp: issued_at.saturating_add(validity),
        email: request.email.clone(),
        customer_id: request.customer_id.clone(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| IssueError::Encode(err.to_string()))
}
