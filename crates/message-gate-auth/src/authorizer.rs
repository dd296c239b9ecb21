// crates/message-gate-auth/src/authorizer.rs
// ============================================================================
// Module: Message Gate Request Authorizer
// Description: Authorization decisions from bearer credentials.
// Purpose: Convert claim validation outcomes into gateway access decisions.
// Dependencies: message-gate-core, serde_json
// ============================================================================

//! ## Overview
//! The request authorizer strips an optional `Bearer ` scheme prefix,
//! validates the token, and produces an Allow decision carrying the
//! forwarded identity context. It never produces a Deny decision: any
//! validation failure terminates the call with an opaque `Unauthorized`
//! error, and the failure detail is written only to the optional audit
//! writer as a newline-delimited JSON record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use message_gate_core::AccessDecision;
use message_gate_core::DEFAULT_PRINCIPAL;
use message_gate_core::IdentityContext;
use message_gate_core::PolicyEffect;
use message_gate_core::PrincipalId;
use message_gate_core::ResourceId;
use serde_json::json;

use crate::error::AuthorizationError;
use crate::error::ValidationError;
use crate::validator::ClaimValidator;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Scheme prefix stripped from raw authorization headers (case-sensitive).
pub const BEARER_PREFIX: &str = "Bearer ";

// ============================================================================
// SECTION: Request Authorizer
// ============================================================================

/// Produces access decisions for inbound requests.
pub struct RequestAuthorizer {
    /// Claim validator configured for the active trust mode.
    validator: ClaimValidator,
    /// Optional audit writer for denial detail.
    audit: Option<Mutex<Box<dyn Write + Send>>>,
}

impl RequestAuthorizer {
    /// Creates an authorizer over the given validator.
    #[must_use]
    pub const fn new(validator: ClaimValidator) -> Self {
        Self {
            validator,
            audit: None,
        }
    }

    /// Attaches an audit writer receiving newline-delimited JSON records.
    #[must_use]
    pub fn with_audit_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.audit = Some(Mutex::new(Box::new(writer)));
        self
    }

    /// Authorizes one request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Unauthorized`] on any validation
    /// failure; the cause is recorded in the audit log only.
    pub fn authorize(
        &self,
        raw_header: &str,
        resource: &ResourceId,
    ) -> Result<AccessDecision, AuthorizationError> {
        let token = raw_header.strip_prefix(BEARER_PREFIX).unwrap_or(raw_header);
        match self.validator.validate(token) {
            Ok(claims) => {
                let principal = claims
                    .sub
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PRINCIPAL.to_string());
                Ok(AccessDecision {
                    principal_id: PrincipalId::new(principal),
                    effect: PolicyEffect::Allow,
                    resource: resource.clone(),
                    context: IdentityContext::from_claims(&claims),
                })
            }
            Err(err) => {
                self.audit_denial(resource, &err);
                Err(AuthorizationError::Unauthorized)
            }
        }
    }

    /// Writes a denial record to the audit writer, if configured.
    ///
    /// Audit failures are swallowed; auditing never affects the decision.
    fn audit_denial(&self, resource: &ResourceId, err: &ValidationError) {
        let Some(writer) = &self.audit else {
            return;
        };
        let Ok(mut guard) = writer.lock() else {
            return;
        };
        let record = json!({
            "event": "authorization_denied",
            "resource": resource.as_str(),
            "reason": err.to_string(),
        });
        let _ = serde_json::to_writer(&mut *guard, &record);
        let _ = guard.write_all(b"\n");
    }
}
