use std::sync::Arc;

use course_core::model::{LearnerId, LessonSlug};

use crate::course_api::CourseApi;
use crate::error::CourseApiError;

/// Reports a finished lesson to the backend.
///
/// Completion state is backend-owned; this service never records anything
/// locally, it only relays the acknowledgement.
#[derive(Clone)]
pub struct CompletionService {
    api: Arc<dyn CourseApi>,
}

impl CompletionService {
    #[must_use]
    pub fn new(api: Arc<dyn CourseApi>) -> Self {
        Self { api }
    }

    /// Mark a lesson as completed.
    ///
    /// # Errors
    ///
    /// Returns `CourseApiError` when the backend rejects the completion or
    /// the transport fails; the caller re-enables its retry affordance.
    pub async fn complete(
        &self,
        learner: &LearnerId,
        slug: &LessonSlug,
    ) -> Result<(), CourseApiError> {
        self.api.complete_lesson(learner, slug).await
    }
}
