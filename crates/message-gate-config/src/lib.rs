// crates/message-gate-config/src/lib.rs
// ============================================================================
// Module: Message Gate Config Library
// Description: Canonical config model and fail-closed validation.
// Purpose: Single source of truth for message-gate.toml semantics.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! `message-gate-config` defines the canonical configuration model for
//! Message Gate: trust mode, issuer, channel settings, and the template
//! catalog location. Validation is strict and fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
