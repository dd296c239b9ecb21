// crates/message-gate-core/src/runtime/dispatch.rs
// ============================================================================
// Module: Message Gate Dispatch Engine
// Description: Batch orchestration with per-message failure isolation.
// Purpose: Fan out queued messages to channel senders and report failures.
// Dependencies: crate::{core, interfaces, runtime}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The dispatch engine processes one batch of queued messages. Each message
//! fans out to its recipients in address document order; the first failure
//! inside a message aborts that message's remaining recipients and marks the
//! whole message failed. Failure isolation is per message: processing always
//! continues with the next batch entry, and the result lists failed
//! identifiers in input order for selective upstream retry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use thiserror::Error;

use crate::core::batch::BatchEntry;
use crate::core::batch::BatchResult;
use crate::core::message::ChannelType;
use crate::core::message::MessageSpec;
use crate::core::substitution::SubstitutionMap;
use crate::core::substitution::merge_substitutions;
use crate::interfaces::DeliveryError;
use crate::interfaces::TemplateStore;
use crate::runtime::content::select_email;
use crate::runtime::content::select_sms;
use crate::runtime::senders::EmailSender;
use crate::runtime::senders::SmsSender;

// ============================================================================
// SECTION: Message Errors
// ============================================================================

/// Message-scope processing errors.
///
/// These never escape [`DispatchEngine::process`]; they mark the current
/// message failed and processing continues with the next entry.
#[derive(Debug, Error)]
pub enum MessageError {
    /// The message body is not valid JSON for the message contract.
    #[error("message body parse failed: {0}")]
    Parse(String),
    /// A channel send failed.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

// ============================================================================
// SECTION: Dispatch Engine
// ============================================================================

/// Batch dispatch orchestrator.
///
/// # Invariants
/// - Holds no mutable state across invocations; safe to invoke concurrently
///   from independent worker instances.
pub struct DispatchEngine {
    /// Template persistence used by content selection.
    template_store: Arc<dyn TemplateStore>,
    /// Email channel sender.
    email: EmailSender,
    /// SMS channel sender.
    sms: SmsSender,
}

impl DispatchEngine {
    /// Creates a dispatch engine over the given store and senders.
    #[must_use]
    pub fn new(template_store: Arc<dyn TemplateStore>, email: EmailSender, sms: SmsSender) -> Self {
        Self {
            template_store,
            email,
            sms,
        }
    }

    /// Processes one batch and returns the failed identifiers in input order.
    #[must_use]
    pub fn process(&self, batch: &[BatchEntry]) -> BatchResult {
        let mut result = BatchResult::new();
        for entry in batch {
            if self.process_entry(entry).is_err() {
                result.record_failure(entry.message_id.clone());
            }
        }
        result
    }

    /// Processes one batch entry end to end.
    fn process_entry(&self, entry: &BatchEntry) -> Result<(), MessageError> {
        let message: MessageSpec = serde_json::from_str(&entry.body)
            .map_err(|err| MessageError::Parse(err.to_string()))?;
        self.process_message(&message)
    }

    /// Fans one parsed message out to its recipients, channel by channel.
    fn process_message(&self, message: &MessageSpec) -> Result<(), MessageError> {
        if let Some(spec) = &message.email {
            for (address, config) in message.addresses.iter() {
                if config.channel_type != ChannelType::Email {
                    continue;
                }
                let subs = merge_substitutions(&spec.substitutions, &config.substitutions);
                let content = select_email(spec, &subs, self.template_store.as_ref());
                self.email.send(spec, address, &content)?;
            }
        }
        if let Some(spec) = &message.sms {
            for (address, config) in message.addresses.iter() {
                if config.channel_type != ChannelType::Sms {
                    continue;
                }
                // SMS carries no message-global substitutions.
                let subs: SubstitutionMap = config.substitutions.clone();
                let body = select_sms(spec, &subs, self.template_store.as_ref());
                self.sms.send(spec, address, &body)?;
            }
        }
        Ok(())
    }
}
