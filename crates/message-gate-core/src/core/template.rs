// crates/message-gate-core/src/core/template.rs
// ============================================================================
// Module: Message Gate Template Model
// Description: Stored template records keyed by template name.
// Purpose: Provide the template store record shape shared by all stores.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Templates are created and updated externally and are read-only from this
//! core's perspective. Absence of a template is a recoverable condition, not
//! an error; callers fall back to built-in default content.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Template Record
// ============================================================================

/// A stored template: body plus optional subject (email only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Template body with `{placeholder}` tokens.
    #[serde(rename = "MessageBody")]
    pub message_body: String,
    /// Optional subject line with `{placeholder}` tokens.
    #[serde(rename = "Subject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}
