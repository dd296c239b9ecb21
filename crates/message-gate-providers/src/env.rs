// crates/message-gate-providers/src/env.rs
// ============================================================================
// Module: Environment Secret Provider
// Description: Secret provider backed by process environment variables.
// Purpose: Supply the shared signing secret without an external store.
// Dependencies: message-gate-core, serde
// ============================================================================

//! ## Overview
//! The environment secret provider reads the shared signing secret from one
//! named process environment variable. An explicit override value takes
//! precedence over the environment read, which keeps tests and local runs
//! deterministic. Empty and oversized secrets are rejected so the validator
//! fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;

use message_gate_core::SecretError;
use message_gate_core::SecretProvider;
use serde::Deserialize;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default environment variable naming the shared secret.
pub const DEFAULT_SECRET_VARIABLE: &str = "MESSAGE_GATE_SECRET";

/// Configuration for the environment secret provider.
///
/// # Invariants
/// - `override_value` takes precedence over the environment read.
/// - `max_value_bytes` is enforced as a hard upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvSecretConfig {
    /// Environment variable holding the secret.
    pub variable: String,
    /// Optional override used for deterministic lookups.
    pub override_value: Option<String>,
    /// Maximum bytes allowed for the secret value.
    pub max_value_bytes: usize,
}

impl Default for EnvSecretConfig {
    fn default() -> Self {
        Self {
            variable: DEFAULT_SECRET_VARIABLE.to_string(),
            override_value: None,
            max_value_bytes: 4 * 1024,
        }
    }
}

// ============================================================================
// SECTION: Provider Implementation
// ============================================================================

/// Secret provider backed by the process environment.
pub struct EnvSecretProvider {
    /// Provider configuration, including the variable name and size limit.
    config: EnvSecretConfig,
}

impl EnvSecretProvider {
    /// Creates a provider with the given configuration.
    #[must_use]
    pub const fn new(config: EnvSecretConfig) -> Self {
        Self {
            config,
        }
    }

    /// Creates a provider reading the named environment variable.
    #[must_use]
    pub fn for_variable(variable: impl Into<String>) -> Self {
        Self::new(EnvSecretConfig {
            variable: variable.into(),
            ..EnvSecretConfig::default()
        })
    }
}

impl SecretProvider for EnvSecretProvider {
    fn shared_secret(&self) -> Result<String, SecretError> {
        let value = match &self.config.override_value {
            Some(value) => value.clone(),
            None => env::var(&self.config.variable).map_err(|_| {
                SecretError::Unavailable(format!("variable {} is not set", self.config.variable))
            })?,
        };
        if value.is_empty() {
            return Err(SecretError::Unavailable("secret value is empty".to_string()));
        }
        if value.len() > self.config.max_value_bytes {
            return Err(SecretError::Unavailable("secret value exceeds limit".to_string()));
        }
        Ok(value)
    }
}
