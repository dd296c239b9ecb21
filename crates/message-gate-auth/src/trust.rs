// crates/message-gate-auth/src/trust.rs
// ============================================================================
// Module: Message Gate Trust Anchors
// Description: Shared-secret and external-key-set verification strategies.
// Purpose: Resolve the decoding key and algorithm for one token.
// Dependencies: jsonwebtoken, message-gate-core, reqwest, serde, url
// ============================================================================

//! ## Overview
//! A trust anchor is the verification strategy selected once at startup:
//! shared secret (HS256) or externally published key set (JWKS, RS256).
//! Validation logic does not branch on trust mode beyond key resolution.
//! The shared secret is fetched from its provider at most once per process;
//! a concurrent race to populate performs a redundant fetch whose loser is
//! discarded. No expiry or refresh is performed; rotating the secret
//! requires a process restart.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Duration;

use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use message_gate_core::SecretProvider;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use serde::Deserialize;
use url::Url;

use crate::error::ValidationError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Timeout for key-set endpoint fetches, in milliseconds.
const KEY_SET_TIMEOUT_MS: u64 = 5_000;

// ============================================================================
// SECTION: Shared Secret Anchor
// ============================================================================

/// Shared-secret trust anchor with a process-lifetime set-once cache.
pub struct SharedSecretAnchor {
    /// Secret retrieval collaborator.
    provider: Arc<dyn SecretProvider>,
    /// Set-once secret cache; never refreshed.
    cache: OnceLock<String>,
}

impl SharedSecretAnchor {
    /// Creates a shared-secret anchor over the given provider.
    #[must_use]
    pub fn new(provider: Arc<dyn SecretProvider>) -> Self {
        Self {
            provider,
            cache: OnceLock::new(),
        }
    }

    /// Returns the cached secret, fetching it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SecretUnavailable`] when the provider
    /// fails before the cache is populated.
    pub fn secret(&self) -> Result<&str, ValidationError> {
        if let Some(secret) = self.cache.get() {
            return Ok(secret);
        }
        let fetched = self
            .provider
            .shared_secret()
            .map_err(|err| ValidationError::SecretUnavailable(err.to_string()))?;
        // A populate race keeps the winner's value and discards this fetch.
        Ok(self.cache.get_or_init(|| fetched))
    }
}

// ============================================================================
// SECTION: Key Set Anchor
// ============================================================================

/// One JSON Web Key from a published key set (RFC 7517, RSA members only).
#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    /// Key type; only `RSA` keys are usable.
    kty: String,
    /// Key identifier matched against the token header.
    kid: Option<String>,
    /// RSA modulus, base64url encoded.
    n: Option<String>,
    /// RSA exponent, base64url encoded.
    e: Option<String>,
}

/// A published key set.
#[derive(Debug, Clone, Deserialize)]
struct JwkSet {
    /// Keys in publication order.
    keys: Vec<Jwk>,
}

/// External-key-set trust anchor.
pub struct KeySetAnchor {
    /// Key set endpoint.
    url: Url,
    /// Blocking HTTP client with timeout and redirects disabled.
    client: Client,
}

impl KeySetAnchor {
    /// Creates a key-set anchor for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::KeySetUnavailable`] when the URL is not
    /// http(s) or the HTTP client cannot be created.
    pub fn new(url: &str) -> Result<Self, ValidationError> {
        let url = Url::parse(url)
            .map_err(|_| ValidationError::KeySetUnavailable("invalid key set url".to_string()))?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ValidationError::KeySetUnavailable(
                "unsupported key set url scheme".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(KEY_SET_TIMEOUT_MS))
            .redirect(Policy::none())
            .build()
            .map_err(|_| {
                ValidationError::KeySetUnavailable("http client build failed".to_string())
            })?;
        Ok(Self {
            url,
            client,
        })
    }

    /// Resolves the decoding key for the given token key identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::KeySetUnavailable`] when the endpoint
    /// cannot be fetched or no matching RSA key exists.
    pub fn resolve(&self, kid: Option<&str>) -> Result<DecodingKey, ValidationError> {
        let set: JwkSet = self
            .client
            .get(self.url.clone())
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|_| ValidationError::KeySetUnavailable("key set fetch failed".to_string()))?
            .json()
            .map_err(|_| ValidationError::KeySetUnavailable("key set parse failed".to_string()))?;
        let key = set
            .keys
            .iter()
            .filter(|key| key.kty == "RSA")
            .find(|key| kid.is_none() || key.kid.as_deref() == kid)
            .ok_or_else(|| {
                ValidationError::KeySetUnavailable("no matching signing key".to_string())
            })?;
        let (modulus, exponent) = match (&key.n, &key.e) {
            (Some(n), Some(e)) => (n, e),
            _ => {
                return Err(ValidationError::KeySetUnavailable(
                    "signing key missing rsa components".to_string(),
                ));
            }
        };
        DecodingKey::from_rsa_components(modulus, exponent)
            .map_err(|_| ValidationError::KeySetUnavailable("invalid signing key".to_string()))
    }
}

// ============================================================================
// SECTION: Trust Anchor
// ============================================================================

/// Verification strategy selected by configuration at startup.
pub enum TrustAnchor {
    /// Symmetric verification with a cached shared secret.
    SharedSecret(SharedSecretAnchor),
    /// Asymmetric verification against an external key set.
    KeySet(KeySetAnchor),
}

impl TrustAnchor {
    /// Returns the single signature algorithm accepted by this anchor.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::SharedSecret(_) => Algorithm::HS256,
            Self::KeySet(_) => Algorithm::RS256,
        }
    }

    /// Resolves the decoding key for one token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the key material cannot be obtained.
    pub fn decoding_key(&self, token: &str) -> Result<DecodingKey, ValidationError> {
        match self {
            Self::SharedSecret(anchor) => {
                Ok(DecodingKey::from_secret(anchor.secret()?.as_bytes()))
            }
            Self::KeySet(anchor) => {
                let header = jsonwebtoken::decode_header(token)
                    .map_err(|err| ValidationError::Malformed(err.to_string()))?;
                anchor.resolve(header.kid.as_deref())
            }
        }
    }
}
