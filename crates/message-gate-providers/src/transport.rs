// crates/message-gate-providers/src/transport.rs
// ============================================================================
// Module: Memory Delivery Transport
// Description: Recording in-memory transport for both delivery channels.
// Purpose: Capture shaped delivery requests without external side effects.
// Dependencies: message-gate-core, std
// ============================================================================

//! ## Overview
//! `MemoryTransport` records every email and SMS request it receives and
//! returns deterministic receipts. Destinations can be marked as failing to
//! exercise partial-failure paths. The receipt factory is shared with the
//! log transport so every built-in transport issues `prefix-N` identifiers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use message_gate_core::DeliveryError;
use message_gate_core::DeliveryReceipt;
use message_gate_core::EmailRequest;
use message_gate_core::EmailTransport;
use message_gate_core::SmsRequest;
use message_gate_core::SmsTransport;

// ============================================================================
// SECTION: Receipt Factory
// ============================================================================

/// Issues deterministic `prefix-N` delivery identifiers.
pub struct ReceiptFactory {
    /// Identifier prefix naming the transport.
    prefix: String,
    /// Monotonic delivery counter.
    counter: AtomicU64,
}

impl ReceiptFactory {
    /// Creates a factory with the given identifier prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Issues the next receipt.
    pub fn next(&self) -> DeliveryReceipt {
        let seq = self.counter.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        DeliveryReceipt {
            delivery_id: format!("{}-{seq}", self.prefix),
        }
    }
}

// ============================================================================
// SECTION: Memory Transport
// ============================================================================

/// Recording transport for both delivery channels.
pub struct MemoryTransport {
    /// Captured email requests in arrival order.
    emails: Mutex<Vec<EmailRequest>>,
    /// Captured SMS requests in arrival order.
    smses: Mutex<Vec<SmsRequest>>,
    /// Destinations that fail delivery.
    failing: BTreeSet<String>,
    /// Receipt factory for deterministic delivery IDs.
    receipts: ReceiptFactory,
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransport {
    /// Creates an empty recording transport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            emails: Mutex::new(Vec::new()),
            smses: Mutex::new(Vec::new()),
            failing: BTreeSet::new(),
            receipts: ReceiptFactory::new("mem"),
        }
    }

    /// Marks a destination address or number as failing.
    #[must_use]
    pub fn failing_destination(mut self, destination: impl Into<String>) -> Self {
        self.failing.insert(destination.into());
        self
    }

    /// Returns the captured email requests.
    #[must_use]
    pub fn emails(&self) -> Vec<EmailRequest> {
        self.emails.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Returns the captured SMS requests.
    #[must_use]
    pub fn smses(&self) -> Vec<SmsRequest> {
        self.smses.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Fails the send when the destination is marked as failing.
    fn check_destination(&self, destination: &str) -> Result<(), DeliveryError> {
        if self.failing.contains(destination) {
            return Err(DeliveryError::DeliveryFailed(format!(
                "destination {destination} rejected"
            )));
        }
        Ok(())
    }
}

impl EmailTransport for MemoryTransport {
    fn send_email(&self, request: &EmailRequest) -> Result<DeliveryReceipt, DeliveryError> {
        self.check_destination(&request.to_address)?;
        let mut guard = self
            .emails
            .lock()
            .map_err(|_| DeliveryError::DeliveryFailed("email record mutex poisoned".to_string()))?;
        guard.push(request.clone());
        drop(guard);
        Ok(self.receipts.next())
    }
}

impl SmsTransport for MemoryTransport {
    fn send_sms(&self, request: &SmsRequest) -> Result<DeliveryReceipt, DeliveryError> {
        self.check_destination(&request.destination_number)?;
        let mut guard = self
            .smses
            .lock()
            .map_err(|_| DeliveryError::DeliveryFailed("sms record mutex poisoned".to_string()))?;
        guard.push(request.clone());
        drop(guard);
        Ok(self.receipts.next())
    }
}
