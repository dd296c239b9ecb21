// crates/message-gate-core/src/core/identity.rs
// ============================================================================
// Module: Message Gate Identity Model
// Description: Token claims, forwarded identity context, and access decisions.
// Purpose: Provide the identity-context propagation contract shared by
//          authorization and dispatch.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Claims are the decoded, verified payload of a bearer token. A validated
//! token yields an [`IdentityContext`] which is forwarded opaquely to
//! downstream processing inside an [`AccessDecision`]. The serialized shapes
//! match the calling gateway's contract exactly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::PrincipalId;
use crate::core::identifiers::ResourceId;

// ============================================================================
// SECTION: Claims
// ============================================================================

/// Default principal used when a token carries no `sub` claim.
pub const DEFAULT_PRINCIPAL: &str = "user";

/// Decoded, verified token claims.
///
/// # Invariants
/// - `exp` is unix seconds and is validated before a `Claims` value is
///   released by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal) identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Token issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Issued-at time, unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry time, unix seconds.
    pub exp: i64,
    /// Optional email claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Optional customer identifier claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

// ============================================================================
// SECTION: Identity Context
// ============================================================================

/// Identity context forwarded to downstream processing.
///
/// Absent claims are forwarded as empty strings; the gateway contract
/// requires all three keys to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityContext {
    /// Subject of the validated token, or empty when absent.
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Email claim, or empty when absent.
    pub email: String,
    /// Customer identifier claim, or empty when absent.
    #[serde(rename = "customerId")]
    pub customer_id: String,
}

impl IdentityContext {
    /// Derives the forwarded context from validated claims.
    #[must_use]
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub.clone().unwrap_or_default(),
            email: claims.email.clone().unwrap_or_default(),
            customer_id: claims.customer_id.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// SECTION: Access Decision
// ============================================================================

/// Policy effect carried by an access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyEffect {
    /// Permit the request.
    Allow,
    /// Deny the request. Modeled for completeness; the authorizer fails with
    /// an opaque error instead of producing a deny decision.
    Deny,
}

/// Access decision returned to the calling gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Principal identifier derived from the token subject.
    #[serde(rename = "principalId")]
    pub principal_id: PrincipalId,
    /// Policy effect.
    pub effect: PolicyEffect,
    /// Resource the decision applies to.
    pub resource: ResourceId,
    /// Forwarded identity context.
    pub context: IdentityContext,
}
