// crates/message-gate-providers/src/lib.rs
// ============================================================================
// Module: Message Gate Providers
// Description: Built-in secret, template, and transport backends.
// Purpose: Provide zero-config backends aligned with Message Gate core.
// Dependencies: message-gate-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate ships built-in backends for the Message Gate interfaces: an
//! environment-variable secret provider, in-memory and JSON-catalog template
//! stores, and recording and log-only delivery transports. All backends fail
//! closed on policy or size violations and stay free of external services.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod env;
pub mod log;
pub mod template;
pub mod transport;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use env::DEFAULT_SECRET_VARIABLE;
pub use env::EnvSecretConfig;
pub use env::EnvSecretProvider;
pub use log::LogTransport;
pub use template::InMemoryTemplateStore;
pub use template::JsonTemplateStore;
pub use transport::MemoryTransport;
pub use transport::ReceiptFactory;

#[cfg(test)]
mod tests;
