// crates/message-gate-core/src/runtime/content.rs
// ============================================================================
// Module: Message Gate Content Selector
// Description: Per-recipient content selection across three sources.
// Purpose: Choose inline, template, or built-in default content and render it.
// Dependencies: crate::{core, interfaces, runtime::substitution}
// ============================================================================

//! ## Overview
//! Content selection applies a fixed priority per recipient: inline body
//! first, then named template, then the built-in default. Template absence
//! and template store errors are both recoverable and fall through to the
//! default; selection never fails a message. Selection is idempotent given
//! identical inputs and nothing is cached across messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::message::EmailSpec;
use crate::core::message::SmsSpec;
use crate::core::substitution::SubstitutionMap;
use crate::core::substitution::value_or;
use crate::interfaces::TemplateStore;
use crate::runtime::substitution::render;

// ============================================================================
// SECTION: Subject Defaults
// ============================================================================

/// Default subject for inline and template email content.
pub const DEFAULT_SUBJECT: &str = "Notification";
/// Default subject for built-in default email content.
pub const DEFAULT_ALERT_SUBJECT: &str = "Account Alert";

// ============================================================================
// SECTION: Selected Content
// ============================================================================

/// Fully rendered content for one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedContent {
    /// Rendered body.
    pub body: String,
    /// Rendered subject; present for email content only.
    pub subject: Option<String>,
}

// ============================================================================
// SECTION: Email Selection
// ============================================================================

/// Selects and renders email content for one recipient.
#[must_use]
pub fn select_email(
    spec: &EmailSpec,
    subs: &SubstitutionMap,
    store: &dyn TemplateStore,
) -> SelectedContent {
    if let Some(body) = &spec.message_body {
        let subject = spec.subject.clone().unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
        return SelectedContent {
            body: render(body, subs),
            subject: Some(render(&subject, subs)),
        };
    }
    if let Some(name) = &spec.template_name {
        // Store errors fall through to the default alongside not-found.
        if let Ok(Some(record)) = store.fetch(name) {
            let subject =
                record.subject.clone().unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
            return SelectedContent {
                body: render(&record.message_body, subs),
                subject: Some(render(&subject, subs)),
            };
        }
        return SelectedContent {
            body: default_email_body(subs),
            subject: Some(DEFAULT_ALERT_SUBJECT.to_string()),
        };
    }
    let subject = spec.subject.clone().unwrap_or_else(|| DEFAULT_ALERT_SUBJECT.to_string());
    SelectedContent {
        body: default_email_body(subs),
        subject: Some(render(&subject, subs)),
    }
}

// ============================================================================
// SECTION: SMS Selection
// ============================================================================

/// Selects and renders SMS content for one recipient.
#[must_use]
pub fn select_sms(spec: &SmsSpec, subs: &SubstitutionMap, store: &dyn TemplateStore) -> String {
    if let Some(body) = &spec.message_body {
        return render(body, subs);
    }
    if let Some(name) = &spec.template_name {
        if let Ok(Some(record)) = store.fetch(name) {
            return render(&record.message_body, subs);
        }
        return default_sms_body(subs);
    }
    default_sms_body(subs)
}

// ============================================================================
// SECTION: Built-In Defaults
// ============================================================================

/// Builds the built-in default HTML email body.
fn default_email_body(subs: &SubstitutionMap) -> String {
    let product = value_or(subs, "productName", "Account");
    let membership = value_or(subs, "membershipNumber", "****");
    let threshold = value_or(subs, "threshold", "0.00");
    format!(
        "<html>\n<body>\n<h2>Account Alert</h2>\n<p>Your {product} account ending in \
         {membership} has a low balance of ${threshold}.</p>\n<p>Please take action to avoid \
         any service interruptions.</p>\n</body>\n</html>"
    )
}

/// Builds the built-in default SMS body.
fn default_sms_body(subs: &SubstitutionMap) -> String {
    let product = value_or(subs, "productName", "Account");
    let membership = value_or(subs, "membershipNumber", "****");
    let threshold = value_or(subs, "threshold", "0.00");
    format!(
        "Alert: Your {product} account ending in {membership} has a low balance of ${threshold}"
    )
}
