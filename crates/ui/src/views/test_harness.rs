use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use course_core::blocks::GroupingMode;
use course_core::model::{LearnerId, LessonSlug};
use services::{
    CompletionService, CourseApi, CourseApiError, TimelinePayload, TimelineService,
};

use crate::context::{UiApp, build_app_context};
use crate::views::lesson::LessonTestHandles;
use crate::views::{LessonView, TimelineView};

/// Canned backend outcome for a stubbed request.
pub enum StubOutcome {
    Success(TimelinePayload),
    Rejected(String),
}

/// In-memory transport for view tests.
pub struct StubCourseApi {
    timeline: StubOutcome,
    complete_rejection: Option<String>,
    completions: Mutex<Vec<(String, String)>>,
}

impl StubCourseApi {
    pub fn success(payload: TimelinePayload) -> Self {
        Self {
            timeline: StubOutcome::Success(payload),
            complete_rejection: None,
            completions: Mutex::new(Vec::new()),
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            timeline: StubOutcome::Rejected(message.to_string()),
            complete_rejection: Some(message.to_string()),
            completions: Mutex::new(Vec::new()),
        }
    }

    pub fn completions(&self) -> Vec<(String, String)> {
        self.completions.lock().unwrap().clone()
    }
}

#[async_trait]
impl CourseApi for StubCourseApi {
    async fn fetch_timeline(&self, _learner: &LearnerId) -> Result<TimelinePayload, CourseApiError> {
        match &self.timeline {
            StubOutcome::Success(payload) => Ok(payload.clone()),
            StubOutcome::Rejected(message) => Err(CourseApiError::Rejected {
                message: message.clone(),
            }),
        }
    }

    async fn complete_lesson(
        &self,
        learner: &LearnerId,
        slug: &LessonSlug,
    ) -> Result<(), CourseApiError> {
        if let Some(message) = &self.complete_rejection {
            return Err(CourseApiError::Rejected {
                message: message.clone(),
            });
        }
        self.completions
            .lock()
            .unwrap()
            .push((learner.as_str().to_string(), slug.as_str().to_string()));
        Ok(())
    }
}

struct TestApp {
    learner_id: LearnerId,
    grouping: GroupingMode,
    timeline: Arc<TimelineService>,
    completion: Arc<CompletionService>,
}

impl UiApp for TestApp {
    fn learner_id(&self) -> LearnerId {
        self.learner_id.clone()
    }

    fn grouping_mode(&self) -> GroupingMode {
        self.grouping
    }

    fn timeline(&self) -> Arc<TimelineService> {
        Arc::clone(&self.timeline)
    }

    fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Timeline,
    Lesson(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    lesson_handles: Option<LessonTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.lesson_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Timeline => rsx! { TimelineView {} },
        ViewKind::Lesson(slug) => rsx! { LessonView { slug } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub lesson_handles: Option<LessonTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    api: Arc<StubCourseApi>,
    grouping: GroupingMode,
) -> ViewHarness {
    let api: Arc<dyn CourseApi> = api;
    let timeline = Arc::new(TimelineService::new(Arc::clone(&api)));
    let completion = Arc::new(CompletionService::new(api));

    let app = Arc::new(TestApp {
        learner_id: LearnerId::new("42"),
        grouping,
        timeline,
        completion,
    });

    let lesson_handles = match view {
        ViewKind::Lesson(_) => Some(LessonTestHandles::default()),
        ViewKind::Timeline => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            lesson_handles: lesson_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        lesson_handles,
    }
}
