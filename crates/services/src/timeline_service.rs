use std::sync::Arc;

use course_core::model::{LearnerId, LessonRecord};
use course_core::normalize::normalize_timeline;

use crate::course_api::CourseApi;
use crate::error::CourseApiError;

/// One page load's worth of timeline data, replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSnapshot {
    pub learner_name: Option<String>,
    pub lessons: Vec<LessonRecord>,
}

/// Fetches and normalizes the learner's course timeline.
///
/// There is no retry policy: a failed load is terminal for the current page
/// view and the caller surfaces it until a manual reload.
#[derive(Clone)]
pub struct TimelineService {
    api: Arc<dyn CourseApi>,
}

impl TimelineService {
    #[must_use]
    pub fn new(api: Arc<dyn CourseApi>) -> Self {
        Self { api }
    }

    /// Load the timeline for a learner.
    ///
    /// # Errors
    ///
    /// Returns `CourseApiError` when the backend rejects the request or the
    /// transport fails. Malformed individual records never fail the load;
    /// they are dropped during normalization.
    pub async fn load(&self, learner: &LearnerId) -> Result<TimelineSnapshot, CourseApiError> {
        let payload = self.api.fetch_timeline(learner).await?;
        Ok(TimelineSnapshot {
            learner_name: payload.user_name,
            lessons: normalize_timeline(payload.timeline),
        })
    }
}
