// crates/message-gate-core/src/runtime/senders.rs
// ============================================================================
// Module: Message Gate Channel Senders
// Description: Input shaping for email and SMS delivery.
// Purpose: Build fully shaped transport requests from specs and rendered content.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Senders are thin wrappers around the delivery transports. Their input
//! shaping is the core behavior: reply-to merge and required-sender checks
//! for email, destination normalization and traffic-class defaults for SMS,
//! plus optional configuration-set attachment for both. Transport failures
//! propagate unchanged and abort the remaining recipients of the current
//! message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::message::EmailSpec;
use crate::core::message::SmsSpec;
use crate::interfaces::DeliveryError;
use crate::interfaces::DeliveryReceipt;
use crate::interfaces::EmailRequest;
use crate::interfaces::EmailTransport;
use crate::interfaces::SmsRequest;
use crate::interfaces::SmsTransport;
use crate::runtime::content::SelectedContent;

// ============================================================================
// SECTION: Email Sender
// ============================================================================

/// Email channel sender.
pub struct EmailSender {
    /// Delivery transport.
    transport: Arc<dyn EmailTransport>,
    /// Optional delivery-tracking configuration set name.
    configuration_set: Option<String>,
}

impl EmailSender {
    /// Creates an email sender over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn EmailTransport>) -> Self {
        Self {
            transport,
            configuration_set: None,
        }
    }

    /// Attaches a delivery-tracking configuration set name.
    #[must_use]
    pub fn with_configuration_set(mut self, name: impl Into<String>) -> Self {
        self.configuration_set = Some(name.into());
        self
    }

    /// Sends rendered content to one recipient.
    ///
    /// Reply-to defaults to the sender address when the spec carries none.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::MissingField`] when the spec has no sender
    /// address, or the transport's [`DeliveryError`] when delivery fails.
    pub fn send(
        &self,
        spec: &EmailSpec,
        to_address: &str,
        content: &SelectedContent,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let from_address = spec
            .from_address
            .clone()
            .ok_or(DeliveryError::MissingField("FromAddress"))?;
        let reply_to_addresses = spec
            .reply_to_addresses
            .clone()
            .unwrap_or_else(|| vec![from_address.clone()]);
        let request = EmailRequest {
            from_address,
            to_address: to_address.to_string(),
            reply_to_addresses,
            subject: content.subject.clone().unwrap_or_default(),
            html_body: content.body.clone(),
            configuration_set: self.configuration_set.clone(),
        };
        self.transport.send_email(&request)
    }
}

// ============================================================================
// SECTION: SMS Sender
// ============================================================================

/// SMS channel sender.
pub struct SmsSender {
    /// Delivery transport.
    transport: Arc<dyn SmsTransport>,
    /// Optional delivery-tracking configuration set name.
    configuration_set: Option<String>,
}

impl SmsSender {
    /// Creates an SMS sender over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn SmsTransport>) -> Self {
        Self {
            transport,
            configuration_set: None,
        }
    }

    /// Attaches a delivery-tracking configuration set name.
    #[must_use]
    pub fn with_configuration_set(mut self, name: impl Into<String>) -> Self {
        self.configuration_set = Some(name.into());
        self
    }

    /// Sends a rendered body to one recipient.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::MissingField`] when the spec has no
    /// origination number, or the transport's [`DeliveryError`] when delivery
    /// fails.
    pub fn send(
        &self,
        spec: &SmsSpec,
        to_address: &str,
        body: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let origination_identity = spec
            .origination_number
            .clone()
            .ok_or(DeliveryError::MissingField("OriginationNumber"))?;
        let request = SmsRequest {
            destination_number: normalize_destination(to_address),
            origination_identity,
            message_type: spec.message_type,
            body: body.to_string(),
            configuration_set: self.configuration_set.clone(),
        };
        self.transport.send_sms(&request)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Normalizes an SMS destination: trims whitespace and prefixes `+` when
/// missing. Interior characters are left untouched.
#[must_use]
pub fn normalize_destination(address: &str) -> String {
    let trimmed = address.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{trimmed}")
    }
}
