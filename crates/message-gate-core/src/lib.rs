// crates/message-gate-core/src/lib.rs
// ============================================================================
// Module: Message Gate Core Library
// Description: Public API surface for the Message Gate core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Message Gate core provides the queued-message data model, the
//! identity-context propagation contract, backend-agnostic collaborator
//! interfaces, and the dispatch runtime. It is transport-agnostic and
//! integrates through explicit interfaces rather than embedding into a
//! specific delivery backend.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::DeliveryError;
pub use interfaces::DeliveryReceipt;
pub use interfaces::EmailRequest;
pub use interfaces::EmailTransport;
pub use interfaces::SecretError;
pub use interfaces::SecretProvider;
pub use interfaces::SmsRequest;
pub use interfaces::SmsTransport;
pub use interfaces::TemplateStore;
pub use interfaces::TemplateStoreError;
pub use runtime::DispatchEngine;
pub use runtime::EmailSender;
pub use runtime::MessageError;
pub use runtime::SelectedContent;
pub use runtime::SmsSender;
pub use runtime::normalize_destination;
pub use runtime::render;
pub use runtime::select_email;
pub use runtime::select_sms;
