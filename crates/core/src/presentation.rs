//! Maps a lesson and its status to a render directive.
//!
//! This is a total pure function over the closed status enum; it performs no
//! rendering itself, which keeps the decision table testable without a page.

use url::form_urlencoded;

use crate::model::{LearnerId, LessonRecord, LessonSlug, LessonStatus};

/// Inert navigation target for lessons the learner cannot open yet.
pub const INERT_HREF: &str = "#";

/// CSS-style state tag for a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayModifier {
    Active,
    Completed,
    Locked,
}

impl DisplayModifier {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Locked => "locked",
        }
    }
}

/// Marker glyph shown inside a timeline dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Check,
    Lock,
}

/// Everything the view needs to draw one timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDirective {
    pub modifier: DisplayModifier,
    pub status_label: &'static str,
    pub href: String,
    pub icon: Option<IconKind>,
}

/// Builds the lesson-detail navigation target, carrying the learner identity
/// forward so it survives a full-page navigation.
///
/// Both values are percent-encoded; identifiers containing reserved URL
/// characters must not corrupt the query string.
#[must_use]
pub fn lesson_detail_href(slug: &LessonSlug, learner: &LearnerId) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("slug", slug.as_str())
        .append_pair("telegram_id", learner.as_str())
        .finish();
    format!("lesson?{query}")
}

/// Converts a lesson into its render directive.
#[must_use]
pub fn render_directive(record: &LessonRecord, learner: &LearnerId) -> RenderDirective {
    match record.status {
        LessonStatus::Locked => RenderDirective {
            modifier: DisplayModifier::Locked,
            status_label: "Access closed",
            href: INERT_HREF.to_string(),
            icon: Some(IconKind::Lock),
        },
        LessonStatus::Active => RenderDirective {
            modifier: DisplayModifier::Active,
            status_label: "Start lesson",
            href: lesson_detail_href(&record.slug, learner),
            icon: None,
        },
        LessonStatus::Completed => RenderDirective {
            modifier: DisplayModifier::Completed,
            status_label: "Completed",
            href: lesson_detail_href(&record.slug, learner),
            icon: Some(IconKind::Check),
        },
    }
}
