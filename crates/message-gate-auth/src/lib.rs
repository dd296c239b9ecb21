// crates/message-gate-auth/src/lib.rs
// ============================================================================
// Module: Message Gate Auth Library
// Description: Token authorization for the Message Gate API surface.
// Purpose: Expose the claim validator, trust anchors, and request authorizer.
// Dependencies: crate::{authorizer, error, issue, trust, validator}
// ============================================================================

//! ## Overview
//! This crate implements the authorization decision engine: bearer token
//! validation under shared-secret or external-key-set trust modes, and the
//! conversion of validation outcomes into gateway access decisions with
//! forwarded identity context. Failure detail never crosses the
//! authorization boundary; callers observe only an opaque `Unauthorized`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod authorizer;
pub mod error;
pub mod issue;
pub mod trust;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use authorizer::BEARER_PREFIX;
pub use authorizer::RequestAuthorizer;
pub use error::AuthorizationError;
pub use error::IssueError;
pub use error::ValidationError;
pub use issue::DEFAULT_VALIDITY_SECS;
pub use issue::TokenRequest;
pub use issue::issue_token;
pub use trust::KeySetAnchor;
pub use trust::SharedSecretAnchor;
pub use trust::TrustAnchor;
pub use validator::ClaimValidator;
