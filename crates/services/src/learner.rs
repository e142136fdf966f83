//! Learner identity resolution.
//!
//! The identity is resolved once at startup and trusted as-is; who the
//! learner really is stays out of scope.

use course_core::model::LearnerId;

/// Stand-in identity for environments where the host supplies none, e.g. a
/// plain desktop browser during development.
pub const FALLBACK_LEARNER_ID: &str = "123456789";

/// Resolves the learner identifier from its possible sources, in priority
/// order: an explicit value (query parameter or CLI flag), then the
/// host-supplied embedded value, then the fixed fallback.
///
/// Blank candidates are skipped. Resolution is synchronous and happens once.
#[must_use]
pub fn resolve_learner_id(explicit: Option<&str>, embedded: Option<&str>) -> LearnerId {
    for candidate in [explicit, embedded] {
        if let Some(value) = candidate {
            let value = value.trim();
            if !value.is_empty() {
                return LearnerId::new(value);
            }
        }
    }
    LearnerId::new(FALLBACK_LEARNER_ID)
}
