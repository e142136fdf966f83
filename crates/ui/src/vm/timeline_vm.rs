use course_core::blocks::{GroupingMode, annotate_block_starts, group_by_block};
use course_core::model::{BlockKey, LearnerId, LessonRecord};
use course_core::presentation::{DisplayModifier, RenderDirective, render_directive};
use services::TimelineSnapshot;

/// One entry of the rendered timeline list.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineRowVm {
    /// Block-title divider rendered above this row (inline-marker mode only).
    pub divider: Option<String>,
    pub slug: String,
    pub title: String,
    pub directive: RenderDirective,
}

impl TimelineRowVm {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.directive.modifier == DisplayModifier::Locked
    }
}

/// One entry of the block-switcher menu.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockTabVm {
    pub key: BlockKey,
    pub label: String,
    pub selected: bool,
}

/// Presentation model for the whole timeline page.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineVm {
    pub greeting_name: String,
    pub tabs: Vec<BlockTabVm>,
    pub rows: Vec<TimelineRowVm>,
}

/// Menu/divider label for a block.
#[must_use]
pub fn block_label(key: &BlockKey) -> String {
    if key.is_unknown() {
        "Other lessons".to_string()
    } else {
        format!("Block {key}")
    }
}

/// The block shown before the learner picks one: first in first-seen order.
#[must_use]
pub fn initial_block(snapshot: &TimelineSnapshot) -> Option<BlockKey> {
    group_by_block(&snapshot.lessons).first_block().cloned()
}

/// Maps the snapshot to its presentation model for the chosen grouping mode
/// and block selection. Pure: mapping twice with the same inputs yields the
/// same model, which is what makes re-selecting the active block a no-op.
#[must_use]
pub fn map_timeline(
    snapshot: &TimelineSnapshot,
    mode: GroupingMode,
    selected: Option<&BlockKey>,
    learner: &LearnerId,
) -> TimelineVm {
    let greeting_name = snapshot
        .learner_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Learner")
        .to_string();

    let (tabs, rows) = match mode {
        GroupingMode::Grouped => {
            let partition = group_by_block(&snapshot.lessons);
            let current = selected
                .cloned()
                .or_else(|| partition.first_block().cloned());

            let tabs = partition
                .order()
                .iter()
                .map(|key| BlockTabVm {
                    key: key.clone(),
                    label: block_label(key),
                    selected: Some(key) == current.as_ref(),
                })
                .collect();

            let rows = current
                .as_ref()
                .map(|key| partition.lessons(key).to_vec())
                .unwrap_or_default()
                .iter()
                .map(|record| row(record, None, learner))
                .collect();

            (tabs, rows)
        }
        GroupingMode::InlineMarkers => {
            let rows = annotate_block_starts(&snapshot.lessons)
                .iter()
                .map(|entry| {
                    let divider = entry.starts_block.then(|| block_label(&entry.record.block));
                    row(&entry.record, divider, learner)
                })
                .collect();

            (Vec::new(), rows)
        }
    };

    TimelineVm {
        greeting_name,
        tabs,
        rows,
    }
}

/// Parallel completion flags for the geometry engine, in render order.
#[must_use]
pub fn completed_flags(rows: &[TimelineRowVm]) -> Vec<bool> {
    rows.iter()
        .map(|row| row.directive.modifier == DisplayModifier::Completed)
        .collect()
}

fn row(record: &LessonRecord, divider: Option<String>, learner: &LearnerId) -> TimelineRowVm {
    TimelineRowVm {
        divider,
        slug: record.slug.as_str().to_string(),
        title: record.title.clone(),
        directive: render_directive(record, learner),
    }
}
