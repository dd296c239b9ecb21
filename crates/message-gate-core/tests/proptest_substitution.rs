// crates/message-gate-core/tests/proptest_substitution.rs
// ============================================================================
// Module: Substitution Property Tests
// Description: Property-based checks for placeholder rendering.
// ============================================================================
//! ## Overview
//! Rendering with an empty substitution map is the identity. Repeated
//! replacement means leftover braces around a replaced token can recombine
//! into a new token, so idempotence holds only when no stray braces remain
//! after the first pass; the property below constructs templates whose only
//! braces are well-formed placeholders and uses brace-free values.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]

use message_gate_core::SubstitutionMap;
use message_gate_core::SubstitutionValue;
use message_gate_core::render;
use proptest::prelude::*;

proptest! {
    #[test]
    fn render_with_empty_map_is_identity(template in ".*") {
        let subs = SubstitutionMap::new();
        prop_assert_eq!(render(&template, &subs), template);
    }

    #[test]
    fn render_is_idempotent_without_stray_braces(
        prefix in "[^{}]*",
        middle in "[^{}]*",
        suffix in "[^{}]*",
        key in "[a-zA-Z][a-zA-Z0-9]{0,8}",
        value in "[a-zA-Z0-9 ]*",
    ) {
        let template = format!("{prefix}{{{key}}}{middle}{{{key}}}{suffix}");
        let mut subs = SubstitutionMap::new();
        subs.insert(key, SubstitutionValue::from(value));
        let once = render(&template, &subs);
        let twice = render(&once, &subs);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn render_replaces_every_occurrence(
        count in 1usize..5,
        key in "[a-zA-Z][a-zA-Z0-9]{0,8}",
        value in "[a-zA-Z0-9 ]*",
    ) {
        let template = format!("{{{key}}}").repeat(count);
        let mut subs = SubstitutionMap::new();
        subs.insert(key, SubstitutionValue::from(value.clone()));
        prop_assert_eq!(render(&template, &subs), value.repeat(count));
    }
}
