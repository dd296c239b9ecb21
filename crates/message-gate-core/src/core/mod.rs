// crates/message-gate-core/src/core/mod.rs
// ============================================================================
// Module: Message Gate Core Types
// Description: Canonical message, identity, and batch structures.
// Purpose: Provide stable, serializable types for the gateway and dispatch contracts.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the queued-message wire contract, the identity-context
//! propagation contract shared by authorization and dispatch, template store
//! records, and batch partial-failure results. These types are the canonical
//! source of truth for any derived API surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod batch;
pub mod identifiers;
pub mod identity;
pub mod message;
pub mod substitution;
pub mod template;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use batch::BatchEntry;
pub use batch::BatchResult;
pub use batch::ItemFailure;
pub use identifiers::MessageId;
pub use identifiers::PrincipalId;
pub use identifiers::ResourceId;
pub use identifiers::TemplateName;
pub use identity::AccessDecision;
pub use identity::Claims;
pub use identity::DEFAULT_PRINCIPAL;
pub use identity::IdentityContext;
pub use identity::PolicyEffect;
pub use message::AddressBook;
pub use message::ChannelType;
pub use message::EmailSpec;
pub use message::MessageSpec;
pub use message::RecipientConfig;
pub use message::SmsMessageType;
pub use message::SmsSpec;
pub use substitution::SubstitutionMap;
pub use substitution::SubstitutionValue;
pub use substitution::merge_substitutions;
pub use substitution::value_or;
pub use template::TemplateRecord;
