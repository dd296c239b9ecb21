// crates/message-gate-core/src/runtime/substitution.rs
// ============================================================================
// Module: Message Gate Substitution Engine
// Description: Single-level placeholder rendering for bodies and subjects.
// Purpose: Replace `{key}` tokens with normalized substitution values.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Rendering replaces every literal `{key}` occurrence with the normalized
//! value text. Unmatched placeholders are left untouched, and replacement
//! keys are distinct literal tokens, so key application order does not affect
//! the result. There is no nesting or recursion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::substitution::SubstitutionMap;

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders `{placeholder}` tokens in `template` using `subs`.
#[must_use]
pub fn render(template: &str, subs: &SubstitutionMap) -> String {
    let mut rendered = template.to_string();
    for (key, value) in subs {
        let token = format!("{{{key}}}");
        rendered = rendered.replace(&token, value.as_text());
    }
    rendered
}
