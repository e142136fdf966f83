use serde::{Deserialize, Serialize};
use std::fmt;

/// External identity of the learner, threaded through navigation and API calls.
///
/// The value is supplied by the host environment and trusted as-is; this type
/// never validates or derives it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LearnerId(String);

impl LearnerId {
    /// Creates a new `LearnerId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stable identifier of a lesson, used for navigation and content lookup.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonSlug(String);

impl LessonSlug {
    /// Creates a new `LessonSlug`
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of a block of consecutive lessons.
///
/// Backends may send block ids as strings or numbers; numbers are carried as
/// their decimal rendering. A record without a block id is assigned the
/// `unknown` sentinel instead of being rejected.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockKey(String);

pub(crate) const UNKNOWN_BLOCK: &str = "unknown";

impl BlockKey {
    /// Creates a new `BlockKey`
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Creates a `BlockKey` from a numeric backend id
    #[must_use]
    pub fn from_number(id: i64) -> Self {
        Self(id.to_string())
    }

    /// The sentinel block for records that arrived without a block id.
    #[must_use]
    pub fn unknown() -> Self {
        Self(UNKNOWN_BLOCK.to_string())
    }

    /// Returns true if this is the sentinel block.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_BLOCK
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LearnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LearnerId({})", self.0)
    }
}

impl fmt::Debug for LessonSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonSlug({})", self.0)
    }
}

impl fmt::Debug for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockKey({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for LearnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LessonSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
