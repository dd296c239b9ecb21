// crates/message-gate-core/src/core/message.rs
// ============================================================================
// Module: Message Gate Message Model
// Description: Queued message bodies, channel specs, and recipient routing.
// Purpose: Provide the canonical wire types consumed by the dispatch engine.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A queued message carries an optional email spec, an optional SMS spec, and
//! an `Addresses` object mapping destination addresses to recipient routing
//! configuration. Field names mirror the upstream JSON contract exactly.
//! Address iteration preserves the JSON document order of the `Addresses`
//! object; recipients are processed in that order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use crate::core::identifiers::TemplateName;
use crate::core::substitution::SubstitutionMap;

// ============================================================================
// SECTION: Channel Routing
// ============================================================================

/// Delivery channel for a recipient entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelType {
    /// Email delivery.
    #[serde(rename = "EMAIL")]
    Email,
    /// SMS delivery.
    #[serde(rename = "SMS")]
    Sms,
}

/// Per-recipient routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientConfig {
    /// Channel this recipient is routed to.
    #[serde(rename = "ChannelType")]
    pub channel_type: ChannelType,
    /// Per-recipient substitutions, overriding message-global entries.
    #[serde(rename = "Substitutions", default)]
    pub substitutions: SubstitutionMap,
}

// ============================================================================
// SECTION: Address Book
// ============================================================================

/// Ordered mapping from destination address to recipient configuration.
///
/// # Invariants
/// - Iteration order matches the JSON document order of the `Addresses`
///   object (insertion order for programmatic construction).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook(Vec<(String, RecipientConfig)>);

impl AddressBook {
    /// Creates an empty address book.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an address entry, preserving insertion order.
    pub fn insert(&mut self, address: impl Into<String>, config: RecipientConfig) {
        self.0.push((address.into(), config));
    }

    /// Iterates entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecipientConfig)> {
        self.0.iter().map(|(address, config)| (address.as_str(), config))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for AddressBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (address, config) in &self.0 {
            map.serialize_entry(address, config)?;
        }
        map.end()
    }
}

/// Visitor that collects address entries in document order.
struct AddressBookVisitor;

impl<'de> Visitor<'de> for AddressBookVisitor {
    type Value = AddressBook;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of destination address to recipient config")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((address, config)) = access.next_entry::<String, RecipientConfig>()? {
            entries.push((address, config));
        }
        Ok(AddressBook(entries))
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AddressBookVisitor)
    }
}

// ============================================================================
// SECTION: Channel Specs
// ============================================================================

/// Email channel configuration for a queued message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSpec {
    /// Sender address; required for sending.
    #[serde(rename = "FromAddress")]
    pub from_address: Option<String>,
    /// Reply-to addresses; defaults to the sender address at send time.
    #[serde(rename = "ReplyToAddresses")]
    pub reply_to_addresses: Option<Vec<String>>,
    /// Message-global substitutions applied to every email recipient.
    #[serde(rename = "Substitutions", default)]
    pub substitutions: SubstitutionMap,
    /// Template name for template-sourced content.
    #[serde(rename = "TemplateName")]
    pub template_name: Option<TemplateName>,
    /// Inline message body; takes priority over any template.
    #[serde(rename = "MessageBody")]
    pub message_body: Option<String>,
    /// Subject line for inline or default content.
    #[serde(rename = "Subject")]
    pub subject: Option<String>,
}

/// SMS message type passed through to the delivery transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmsMessageType {
    /// Transactional traffic class (default).
    #[default]
    #[serde(rename = "TRANSACTIONAL")]
    Transactional,
    /// Promotional traffic class.
    #[serde(rename = "PROMOTIONAL")]
    Promotional,
}

impl SmsMessageType {
    /// Returns the wire form of the message type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transactional => "TRANSACTIONAL",
            Self::Promotional => "PROMOTIONAL",
        }
    }
}

/// SMS channel configuration for a queued message.
///
/// SMS carries no message-global substitutions; the effective set for an SMS
/// recipient is the per-recipient set alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsSpec {
    /// Traffic class; defaults to `TRANSACTIONAL`.
    #[serde(rename = "MessageType", default)]
    pub message_type: SmsMessageType,
    /// Origination number or identity; required for sending.
    #[serde(rename = "OriginationNumber")]
    pub origination_number: Option<String>,
    /// Template name for template-sourced content.
    #[serde(rename = "TemplateName")]
    pub template_name: Option<TemplateName>,
    /// Inline message body; takes priority over any template.
    #[serde(rename = "MessageBody")]
    pub message_body: Option<String>,
}

// ============================================================================
// SECTION: Message Spec
// ============================================================================

/// One queued message: channel specs plus recipient routing.
///
/// A message with neither spec present is a successful no-op. An address
/// whose channel has no matching spec is skipped silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSpec {
    /// Email channel configuration.
    #[serde(rename = "EmailMessage")]
    pub email: Option<EmailSpec>,
    /// SMS channel configuration.
    #[serde(rename = "SMSMessage")]
    pub sms: Option<SmsSpec>,
    /// Destination addresses and their routing configuration.
    #[serde(rename = "Addresses", default)]
    pub addresses: AddressBook,
}
