// crates/message-gate-auth/src/validator.rs
// ============================================================================
// Module: Message Gate Claim Validator
// Description: Signature, issuer, and expiry validation for bearer tokens.
// Purpose: Turn a raw token string into verified claims or a typed failure.
// Dependencies: jsonwebtoken, message-gate-core
// ============================================================================

//! ## Overview
//! The claim validator verifies one token against the configured trust
//! anchor: signature under the anchor's single pinned algorithm, issuer
//! equality, and expiry (`now < exp`, zero leeway unless configured).
//! Successful validation releases the decoded claims; failures map onto the
//! stable [`ValidationError`] taxonomy.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use jsonwebtoken::TokenData;
use jsonwebtoken::Validation;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use message_gate_core::Claims;
use message_gate_core::SecretProvider;

use crate::error::ValidationError;
use crate::trust::KeySetAnchor;
use crate::trust::SharedSecretAnchor;
use crate::trust::TrustAnchor;

// ============================================================================
// SECTION: Claim Validator
// ============================================================================

/// Validates bearer tokens against one configured trust anchor.
pub struct ClaimValidator {
    /// Verification strategy.
    anchor: TrustAnchor,
    /// Expected issuer, matched for equality.
    issuer: String,
    /// Clock-skew leeway in seconds applied to expiry validation.
    leeway: u64,
}

impl fmt::Debug for ClaimValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimValidator")
            .field("issuer", &self.issuer)
            .field("leeway", &self.leeway)
            .finish_non_exhaustive()
    }
}

impl ClaimValidator {
    /// Creates a validator in shared-secret trust mode.
    #[must_use]
    pub fn shared_secret(provider: Arc<dyn SecretProvider>, issuer: impl Into<String>) -> Self {
        Self {
            anchor: TrustAnchor::SharedSecret(SharedSecretAnchor::new(provider)),
            issuer: issuer.into(),
            leeway: 0,
        }
    }

    /// Creates a validator in external-key-set trust mode.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::KeySetUnavailable`] when the endpoint URL
    /// is rejected or the HTTP client cannot be created.
    pub fn key_set(url: &str, issuer: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            anchor: TrustAnchor::KeySet(KeySetAnchor::new(url)?),
            issuer: issuer.into(),
            leeway: 0,
        })
    }

    /// Sets the clock-skew leeway in seconds.
    #[must_use]
    pub const fn with_leeway(mut self, leeway: u64) -> Self {
        self.leeway = leeway;
        self
    }

    /// Validates one token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Expired`] when expiry has passed,
    /// [`ValidationError::IssuerMismatch`] when the issuer claim differs,
    /// and [`ValidationError::Malformed`] when decode or signature
    /// verification fails. Collaborator failures surface as
    /// [`ValidationError::SecretUnavailable`] or
    /// [`ValidationError::KeySetUnavailable`].
    pub fn validate(&self, token: &str) -> Result<Claims, ValidationError> {
        let key = self.anchor.decoding_key(token)?;
        let mut validation = Validation::new(self.anchor.algorithm());
        validation.leeway = self.leeway;
        validation.validate_aud = false;
        validation.set_issuer(&[&self.issuer]);
        let data: TokenData<Claims> = decode(token, &key, &validation).map_err(map_jwt_error)?;
        Ok(data.claims)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps jsonwebtoken errors onto the stable validation taxonomy.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> ValidationError {
    match err.kind() {
        ErrorKind::ExpiredSignature => ValidationError::Expired,
        ErrorKind::InvalidIssuer => ValidationError::IssuerMismatch,
        _ => ValidationError::Malformed(err.to_string()),
    }
}
