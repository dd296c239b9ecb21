// crates/message-gate-providers/src/log.rs
// ============================================================================
// Module: Log Delivery Transport
// Description: Log-only transport for audit-grade delivery records.
// Purpose: Persist delivery records without dispatching to external systems.
// Dependencies: message-gate-core, serde_json, std
// ============================================================================

//! ## Overview
//! `LogTransport` writes a newline-delimited JSON record for each delivery
//! and returns the receipt. It does not deliver payloads to external
//! systems, which makes it the default transport for dry runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use message_gate_core::DeliveryError;
use message_gate_core::DeliveryReceipt;
use message_gate_core::EmailRequest;
use message_gate_core::EmailTransport;
use message_gate_core::SmsRequest;
use message_gate_core::SmsTransport;
use serde_json::json;

use crate::transport::ReceiptFactory;

// ============================================================================
// SECTION: Log Transport
// ============================================================================

/// Log-only delivery transport.
pub struct LogTransport<W: Write + Send> {
    /// Output writer for delivery records.
    writer: Mutex<W>,
    /// Receipt factory for deterministic delivery IDs.
    receipts: ReceiptFactory,
}

impl<W: Write + Send> LogTransport<W> {
    /// Creates a log transport with the default identifier prefix.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            receipts: ReceiptFactory::new("log"),
        }
    }

    /// Writes one record followed by a newline.
    fn write_record(&self, record: &serde_json::Value) -> Result<(), DeliveryError> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| DeliveryError::DeliveryFailed("log writer mutex poisoned".to_string()))?;
        serde_json::to_writer(&mut *guard, record)
            .map_err(|err| DeliveryError::DeliveryFailed(err.to_string()))?;
        guard.write_all(b"\n").map_err(|err| DeliveryError::DeliveryFailed(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}

impl<W: Write + Send> EmailTransport for LogTransport<W> {
    fn send_email(&self, request: &EmailRequest) -> Result<DeliveryReceipt, DeliveryError> {
        let receipt = self.receipts.next();
        let record = json!({
            "event": "email_delivered",
            "delivery_id": receipt.delivery_id,
            "to": request.to_address,
            "from": request.from_address,
            "subject": request.subject,
            "body_len": request.html_body.len(),
            "configuration_set": request.configuration_set,
        });
        self.write_record(&record)?;
        Ok(receipt)
    }
}

impl<W: Write + Send> SmsTransport for LogTransport<W> {
    fn send_sms(&self, request: &SmsRequest) -> Result<DeliveryReceipt, DeliveryError> {
        let receipt = self.receipts.next();
        let record = json!({
            "event": "sms_delivered",
            "delivery_id": receipt.delivery_id,
            "destination": request.destination_number,
            "origination": request.origination_identity,
            "message_type": request.message_type.as_str(),
            "body_len": request.body.len(),
            "configuration_set": request.configuration_set,
        });
        self.write_record(&record)?;
        Ok(receipt)
    }
}
