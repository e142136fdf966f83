use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use course_core::model::LessonSlug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{
    CompletionPhase, RETURN_TO_TIMELINE_DELAY_MS, completion_error_message, lesson_content,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn LessonView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let completion = ctx.completion();
    let learner = ctx.learner_id();

    let mut phase = use_signal(|| CompletionPhase::Idle);

    let slug = slug.trim().to_string();

    let on_complete = {
        let completion = completion.clone();
        let learner = learner.clone();
        let slug = slug.clone();
        use_callback(move |()| {
            if phase.read().button_disabled() {
                return;
            }
            let completion = completion.clone();
            let learner = learner.clone();
            let lesson = LessonSlug::new(slug.clone());

            spawn(async move {
                phase.set(CompletionPhase::Submitting);
                match completion.complete(&learner, &lesson).await {
                    Ok(()) => {
                        phase.set(CompletionPhase::Succeeded);
                        tokio::time::sleep(Duration::from_millis(RETURN_TO_TIMELINE_DELAY_MS))
                            .await;
                        navigator.push(Route::Timeline {});
                    }
                    Err(err) => {
                        phase.set(CompletionPhase::Failed(completion_error_message(&err)));
                    }
                }
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(on_complete);
            }
        }
    }

    // No slug, no lesson: fail before any request leaves the page.
    if slug.is_empty() {
        return rsx! {
            div { class: "page lesson-page",
                p { class: "lesson-page__error", "Lesson not found" }
                Link { class: "lesson-page__back", to: Route::Timeline {}, "← Back to course" }
            }
        };
    }

    let content = lesson_content(&slug);
    let phase_now = phase.read().clone();

    rsx! {
        div { class: "page lesson-page",
            Link { class: "lesson-page__back", to: Route::Timeline {}, "← Back to course" }
            h2 { class: "lesson-page__title", "{content.title}" }
            div { class: "lesson-page__content",
                div { class: "lesson-page__text", dangerous_inner_html: "{content.body_html}" }
            }
            if let CompletionPhase::Failed(message) = &phase_now {
                p { class: "lesson-page__error", "{message}" }
            }
            button {
                class: if matches!(phase_now, CompletionPhase::Succeeded) {
                    "lesson-page__complete-btn lesson-page__complete-btn--success"
                } else {
                    "lesson-page__complete-btn"
                },
                id: "lesson-complete",
                r#type: "button",
                disabled: phase_now.button_disabled(),
                onclick: move |_| on_complete.call(()),
                "{phase_now.button_label()}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    complete: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, complete: Callback<()>) {
        *self.complete.borrow_mut() = Some(complete);
    }

    pub(crate) fn complete(&self) -> Callback<()> {
        (*self.complete.borrow()).expect("lesson complete callback registered")
    }
}
