// crates/message-gate-core/src/core/batch.rs
// ============================================================================
// Module: Message Gate Batch Model
// Description: Batch input entries and partial-failure results.
// Purpose: Provide the retry contract between the upstream feed and the
//          dispatch engine.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The upstream feed delivers batches of records, each carrying an opaque
//! message identifier and a raw JSON body. The dispatch engine reports the
//! identifiers of messages that failed to fully process, in input order, so
//! the feed can retry exactly the failed subset.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::MessageId;

// ============================================================================
// SECTION: Batch Input
// ============================================================================

/// One batch record from the upstream feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Opaque message identifier tracked by the feed.
    #[serde(rename = "messageId")]
    pub message_id: MessageId,
    /// Raw JSON message body, parsed by the dispatch engine.
    pub body: String,
}

impl BatchEntry {
    /// Creates a batch entry from an identifier and raw body.
    #[must_use]
    pub fn new(message_id: impl Into<MessageId>, body: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            body: body.into(),
        }
    }
}

// ============================================================================
// SECTION: Batch Result
// ============================================================================

/// One failed item in a batch result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    /// Identifier of the message that failed to fully process.
    #[serde(rename = "itemIdentifier")]
    pub item_identifier: MessageId,
}

/// Partial-failure result for one dispatch invocation.
///
/// # Invariants
/// - An identifier appears here if and only if its message failed to fully
///   process; order matches the input batch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Failed item identifiers in input order.
    #[serde(rename = "batchItemFailures")]
    pub batch_item_failures: Vec<ItemFailure>,
}

impl BatchResult {
    /// Creates an empty (all-success) result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            batch_item_failures: Vec::new(),
        }
    }

    /// Records a failed message identifier.
    pub fn record_failure(&mut self, message_id: MessageId) {
        self.batch_item_failures.push(ItemFailure {
            item_identifier: message_id,
        });
    }

    /// Returns true when every message in the batch succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.batch_item_failures.is_empty()
    }
}
