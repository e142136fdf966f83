use serde::{Deserialize, Serialize};

use crate::model::{BlockKey, LessonSlug};

//
// ─── LESSON TYPES ──────────────────────────────────────────────────────────────
//

/// Access state of a single lesson.
///
/// Statuses are backend-authoritative: the client renders them but never
/// infers or mutates them on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Locked,
    Active,
    Completed,
}

impl LessonStatus {
    /// Parses a wire status string. Unrecognized values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "locked" => Some(Self::Locked),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// A validated lesson entry of the course timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRecord {
    pub slug: LessonSlug,
    pub title: String,
    pub status: LessonStatus,
    pub block: BlockKey,
    /// Backend marker that this record opens a new visual block when the
    /// timeline arrives as one pre-flattened sequence.
    pub starts_block: bool,
}

//
// ─── WIRE SHAPE ────────────────────────────────────────────────────────────────
//

/// Block id as it appears on the wire: some backends send strings, others
/// numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawBlockId {
    Text(String),
    Number(i64),
}

/// Loosely-typed lesson entry exactly as received from the network boundary.
///
/// Every field is optional; [`crate::normalize`] turns this into a
/// [`LessonRecord`] or drops it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawLesson {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub block_id: Option<RawBlockId>,
    #[serde(default)]
    pub is_new_block: Option<bool>,
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
