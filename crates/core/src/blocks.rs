//! Grouping of an ordered lesson sequence into named blocks.
//!
//! Two mutually exclusive strategies exist, selected by the caller:
//! splitting into per-block sequences for a block-switcher UI, or keeping one
//! flat sequence with inline divider markers. Block order is first-seen
//! encounter order, not a numeric sort.

use std::collections::HashMap;

use crate::model::{BlockKey, LessonRecord};

/// How the view wants the timeline grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingMode {
    /// Independent per-block sequences behind a block-switcher menu.
    Grouped,
    /// One flat, continuously scrollable sequence with inline block dividers.
    InlineMarkers,
}

/// Lessons split by block, with blocks kept in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockPartition {
    order: Vec<BlockKey>,
    groups: HashMap<BlockKey, Vec<LessonRecord>>,
}

impl BlockPartition {
    /// Distinct block keys in the order they were first encountered.
    #[must_use]
    pub fn order(&self) -> &[BlockKey] {
        &self.order
    }

    /// The lessons of one block, in original relative order.
    #[must_use]
    pub fn lessons(&self, key: &BlockKey) -> &[LessonRecord] {
        self.groups.get(key).map_or(&[], Vec::as_slice)
    }

    /// The first block in first-seen order, if any.
    #[must_use]
    pub fn first_block(&self) -> Option<&BlockKey> {
        self.order.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Splits the normalized sequence into per-block sub-sequences.
#[must_use]
pub fn group_by_block(records: &[LessonRecord]) -> BlockPartition {
    let mut order = Vec::new();
    let mut groups: HashMap<BlockKey, Vec<LessonRecord>> = HashMap::new();

    for record in records {
        let entry = groups.entry(record.block.clone()).or_default();
        if entry.is_empty() {
            order.push(record.block.clone());
        }
        entry.push(record.clone());
    }

    BlockPartition { order, groups }
}

/// A lesson within the flat, inline-marker rendering of the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedLesson {
    /// A block-title divider renders above this lesson.
    pub starts_block: bool,
    pub record: LessonRecord,
}

/// Keeps the sequence flat and flags where block-title dividers render.
///
/// The divider placement comes from the backend's own marker; records stay in
/// their delivered order without splitting.
#[must_use]
pub fn annotate_block_starts(records: &[LessonRecord]) -> Vec<AnnotatedLesson> {
    records
        .iter()
        .map(|record| AnnotatedLesson {
            starts_block: record.starts_block,
            record: record.clone(),
        })
        .collect()
}
