//! Turns loosely-typed wire records into validated [`LessonRecord`]s.
//!
//! The policy is partial-data tolerance: a malformed entry is dropped or
//! defaulted, never allowed to fail the whole timeline.

use crate::model::{BlockKey, LessonRecord, LessonSlug, LessonStatus, RawBlockId, RawLesson};

/// Placeholder title for records that arrive without one.
pub const DEFAULT_LESSON_TITLE: &str = "Lesson";

/// Normalizes a raw timeline into well-formed records.
///
/// Records without a slug are excluded; everything downstream can rely on a
/// closed, known shape. Never fails.
#[must_use]
pub fn normalize_timeline(raw: Vec<RawLesson>) -> Vec<LessonRecord> {
    raw.into_iter().filter_map(normalize_lesson).collect()
}

fn normalize_lesson(raw: RawLesson) -> Option<LessonRecord> {
    let slug = raw.slug.as_deref().map(str::trim).filter(|s| !s.is_empty())?;

    let title = raw
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_LESSON_TITLE)
        .to_string();

    let status = raw
        .status
        .as_deref()
        .and_then(LessonStatus::parse)
        .unwrap_or(LessonStatus::Locked);

    let block = match raw.block_id {
        Some(RawBlockId::Text(ref text)) if !text.trim().is_empty() => {
            BlockKey::new(text.trim())
        }
        Some(RawBlockId::Number(id)) => BlockKey::from_number(id),
        _ => BlockKey::unknown(),
    };

    Some(LessonRecord {
        slug: LessonSlug::new(slug),
        title,
        status,
        block,
        starts_block: raw.is_new_block.unwrap_or(false),
    })
}
