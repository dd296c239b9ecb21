// crates/message-gate-auth/src/error.rs
// ============================================================================
// Module: Message Gate Auth Errors
// Description: Validation error taxonomy and the opaque authorization failure.
// Purpose: Keep detailed failure causes internal to the authorization boundary.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Claim validation distinguishes expiry, malformed credentials, issuer
//! mismatch, and collaborator failures. The authorization boundary collapses
//! all of them into one opaque `Unauthorized` failure; detail is written to
//! the audit log only, never returned to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// Claim validation errors.
///
/// # Invariants
/// - Variants are stable for audit records and tests; none of them cross the
///   authorization boundary.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The credential's expiry time has passed.
    #[error("credential expired")]
    Expired,
    /// The credential failed to decode or its signature did not verify.
    #[error("malformed credential: {0}")]
    Malformed(String),
    /// The issuer claim does not match the configured issuer.
    #[error("issuer mismatch")]
    IssuerMismatch,
    /// The shared secret could not be retrieved.
    #[error("secret unavailable: {0}")]
    SecretUnavailable(String),
    /// The external key set could not be fetched or holds no usable key.
    #[error("key set unavailable: {0}")]
    KeySetUnavailable(String),
}

// ============================================================================
// SECTION: Authorization Errors
// ============================================================================

/// Opaque authorization failure returned to the calling gateway.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// The request is not authorized. No further detail is surfaced.
    #[error("Unauthorized")]
    Unauthorized,
}

// ============================================================================
// SECTION: Issuance Errors
// ============================================================================

/// Token issuance errors.
#[derive(Debug, Error)]
pub enum IssueError {
    /// The system clock is before the unix epoch or out of range.
    #[error("system clock out of range")]
    Clock,
    /// Token encoding failed.
    #[error("token encoding failed: {0}")]
    Encode(String),
}
