// crates/message-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Message Gate Runtime
// Description: Substitution, content selection, senders, and dispatch.
// Purpose: Execute queued messages against stores and delivery transports.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the dispatch pipeline: effective-substitution
//! merging, three-source content selection, channel senders, and the batch
//! dispatch engine with per-message failure isolation.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod content;
pub mod dispatch;
pub mod senders;
pub mod substitution;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use content::DEFAULT_ALERT_SUBJECT;
pub use content::DEFAULT_SUBJECT;
pub use content::SelectedContent;
pub use content::select_email;
pub use content::select_sms;
pub use dispatch::DispatchEngine;
pub use dispatch::MessageError;
pub use senders::EmailSender;
pub use senders::SmsSender;
pub use senders::normalize_destination;
pub use substitution::render;
