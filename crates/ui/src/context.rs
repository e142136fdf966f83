use std::sync::Arc;

use course_core::blocks::GroupingMode;
use course_core::model::LearnerId;
use services::{CompletionService, TimelineService};

pub trait UiApp: Send + Sync {
    fn learner_id(&self) -> LearnerId;
    fn grouping_mode(&self) -> GroupingMode;

    fn timeline(&self) -> Arc<TimelineService>;
    fn completion(&self) -> Arc<CompletionService>;
}

#[derive(Clone)]
pub struct AppContext {
    learner_id: LearnerId,
    grouping_mode: GroupingMode,

    timeline: Arc<TimelineService>,
    completion: Arc<CompletionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            learner_id: app.learner_id(),
            grouping_mode: app.grouping_mode(),
            timeline: app.timeline(),
            completion: app.completion(),
        }
    }

    #[must_use]
    pub fn learner_id(&self) -> LearnerId {
        self.learner_id.clone()
    }

    #[must_use]
    pub fn grouping_mode(&self) -> GroupingMode {
        self.grouping_mode
    }

    #[must_use]
    pub fn timeline(&self) -> Arc<TimelineService> {
        Arc::clone(&self.timeline)
    }

    #[must_use]
    pub fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
