// crates/message-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Message Gate Interfaces
// Description: Backend-agnostic interfaces for secrets, templates, and delivery.
// Purpose: Define the contract surfaces used by the Message Gate runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how Message Gate integrates with external systems
//! without embedding backend-specific details. Delivery transports are
//! treated as atomic fallible operations; their own timeout and retry policy
//! lives behind the trait boundary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::TemplateName;
use crate::core::message::SmsMessageType;
use crate::core::template::TemplateRecord;

// ============================================================================
// SECTION: Secret Provider
// ============================================================================

/// Secret retrieval errors.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The secret store reported an error or the secret is absent.
    #[error("secret unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the shared signing secret for token validation.
///
/// The provider is assumed slow or rate-limited; callers cache the returned
/// secret for the process lifetime.
pub trait SecretProvider: Send + Sync {
    /// Returns the shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError`] when the secret cannot be retrieved; this is
    /// fatal to authorization for the current request.
    fn shared_secret(&self) -> Result<String, SecretError>;
}

// ============================================================================
// SECTION: Template Store
// ============================================================================

/// Template store errors.
#[derive(Debug, Error)]
pub enum TemplateStoreError {
    /// The template store reported an error.
    #[error("template store error: {0}")]
    Store(String),
}

/// Read-only template persistence.
pub trait TemplateStore: Send + Sync {
    /// Fetches a template by exact name; `Ok(None)` signals not found.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateStoreError`] when the store cannot be read. Content
    /// selection treats store errors as recoverable and falls back to the
    /// built-in default.
    fn fetch(&self, name: &TemplateName) -> Result<Option<TemplateRecord>, TemplateStoreError>;
}

// ============================================================================
// SECTION: Delivery Transports
// ============================================================================

/// Delivery transport errors.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The delivery transport rejected or failed the send.
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
    /// The channel spec is missing a field required for sending.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Receipt returned after a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Transport-assigned delivery identifier.
    pub delivery_id: String,
}

/// Fully shaped email delivery request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    /// Sender address.
    pub from_address: String,
    /// Destination address.
    pub to_address: String,
    /// Reply-to addresses.
    pub reply_to_addresses: Vec<String>,
    /// Rendered subject line.
    pub subject: String,
    /// Rendered HTML body.
    pub html_body: String,
    /// Optional delivery-tracking configuration set name.
    pub configuration_set: Option<String>,
}

/// Fully shaped SMS delivery request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsRequest {
    /// Normalized destination phone number.
    pub destination_number: String,
    /// Origination number or identity.
    pub origination_identity: String,
    /// Traffic class.
    pub message_type: SmsMessageType,
    /// Rendered message body.
    pub body: String,
    /// Optional delivery-tracking configuration set name.
    pub configuration_set: Option<String>,
}

/// Email delivery transport.
pub trait EmailTransport: Send + Sync {
    /// Delivers one email.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the transport fails; the failure
    /// propagates and aborts the remaining recipients of the current message.
    fn send_email(&self, request: &EmailRequest) -> Result<DeliveryReceipt, DeliveryError>;
}

/// SMS delivery transport.
pub trait SmsTransport: Send + Sync {
    /// Delivers one SMS.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the transport fails; the failure
    /// propagates and aborts the remaining recipients of the current message.
    fn send_sms(&self, request: &SmsRequest) -> Result<DeliveryReceipt, DeliveryError>;
}
