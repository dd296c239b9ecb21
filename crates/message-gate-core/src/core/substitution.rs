// crates/message-gate-core/src/core/substitution.rs
// ============================================================================
// Module: Message Gate Substitution Values
// Description: Dynamic substitution values and effective-set merging.
// Purpose: Normalize scalar-or-list substitution values for rendering.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Substitution mappings arrive as JSON objects whose values are either a
//! single string or an ordered list of strings. One normalization rule is
//! applied everywhere: a list contributes its first element, and an empty
//! list contributes the empty string.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Substitution Value
// ============================================================================

/// A substitution value: a single string or an ordered list of strings.
///
/// # Invariants
/// - Normalization is first-element-or-empty; deeper list structure is never
///   consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubstitutionValue {
    /// A single string value.
    Scalar(String),
    /// An ordered list of string values.
    List(Vec<String>),
}

impl SubstitutionValue {
    /// Returns the normalized text form: the scalar, the first list element,
    /// or the empty string for an empty list.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Scalar(value) => value,
            Self::List(values) => values.first().map_or("", String::as_str),
        }
    }
}

impl From<&str> for SubstitutionValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for SubstitutionValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for SubstitutionValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

// ============================================================================
// SECTION: Substitution Map
// ============================================================================

/// Substitution mapping from placeholder key to value.
pub type SubstitutionMap = BTreeMap<String, SubstitutionValue>;

/// Merges global and per-recipient substitutions into the effective set.
///
/// Per-recipient entries override global entries key by key.
#[must_use]
pub fn merge_substitutions(global: &SubstitutionMap, recipient: &SubstitutionMap) -> SubstitutionMap {
    let mut merged = global.clone();
    for (key, value) in recipient {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Returns the normalized text for `key`, or `default` when absent.
#[must_use]
pub fn value_or<'a>(subs: &'a SubstitutionMap, key: &str, default: &'a str) -> &'a str {
    subs.get(key).map_or(default, SubstitutionValue::as_text)
}
