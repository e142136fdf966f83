use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use course_core::blocks::GroupingMode;
use course_core::geometry::{GuideLineGeometry, guide_lines};
use course_core::model::BlockKey;
use course_core::presentation::IconKind;

use super::scripts::measure_timeline_script;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    BlockSwitch, FADE_IN_MS, FADE_OUT_MS, SwitchPhase, TimelineRowVm, completed_flags,
    initial_block, map_timeline,
};

/// Vertical offset of a dot's center inside its timeline item. Must track the
/// `.timeline__dot` placement in `assets/style.css`.
const DOT_CENTER_OFFSET_PX: f64 = 22.0;

const TIMELINE_LIST_ID: &str = "timeline-list";
const TIMELINE_ITEM_SELECTOR: &str = ".timeline__item";

#[component]
pub fn TimelineView() -> Element {
    let ctx = use_context::<AppContext>();
    let learner = ctx.learner_id();
    let mode = ctx.grouping_mode();
    let timeline = ctx.timeline();

    let mut selected = use_signal(|| None::<BlockKey>);
    let mut switching = use_signal(|| None::<SwitchPhase>);
    let mut switch_seq = use_signal(|| 0_u64);
    let mut geometry = use_signal(GuideLineGeometry::default);
    let mut measure_task = use_signal(|| None::<Task>);

    let learner_for_resource = learner.clone();
    let resource = use_resource(move || {
        let timeline = timeline.clone();
        let learner = learner_for_resource.clone();

        async move {
            timeline
                .load(&learner)
                .await
                .map_err(|err| ViewError::from_service(&err))
        }
    });

    let state = view_state_from_resource(&resource);

    // Pick the first block (first-seen order) once the snapshot lands.
    use_effect(move || {
        let first = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok())
            .and_then(initial_block);
        if mode == GroupingMode::Grouped && selected.read().is_none() {
            if let Some(first) = first {
                selected.set(Some(first));
            }
        }
    });

    // Measure rendered item offsets and recompute guide-line geometry.
    // Re-runs whenever the snapshot or the block selection changes; the
    // script re-sends measurements on every webview resize.
    let learner_for_measure = learner.clone();
    use_effect(move || {
        let flags = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok())
            .map(|snapshot| {
                let vm = map_timeline(
                    snapshot,
                    mode,
                    selected.read().as_ref(),
                    &learner_for_measure,
                );
                completed_flags(&vm.rows)
            });

        if let Some(task) = measure_task.write().take() {
            task.cancel();
        }

        let Some(flags) = flags else {
            geometry.set(GuideLineGeometry::default());
            return;
        };

        let script = measure_timeline_script(TIMELINE_LIST_ID, TIMELINE_ITEM_SELECTOR);
        let task = spawn(async move {
            let mut measurements = eval(&script);
            while let Ok(tops) = measurements.recv::<Vec<f64>>().await {
                geometry.set(guide_lines(&tops, &flags, DOT_CENTER_OFFSET_PX));
            }
        });
        measure_task.set(Some(task));
    });

    let on_select_block = use_callback(move |key: BlockKey| {
        if selected.read().as_ref() == Some(&key) {
            // Re-selecting the active block is a no-op.
            return;
        }

        let seq = switch_seq() + 1;
        switch_seq.set(seq);

        let mut switch = BlockSwitch::new(key);
        switching.set(switch.phase());

        spawn(async move {
            tokio::time::sleep(Duration::from_millis(FADE_OUT_MS)).await;
            if switch_seq() != seq {
                // A later switch took over this transition.
                return;
            }
            switch.advance();
            selected.set(Some(switch.target().clone()));

            switch.advance();
            switching.set(switch.phase());
            tokio::time::sleep(Duration::from_millis(FADE_IN_MS)).await;
            if switch_seq() != seq {
                return;
            }
            switch.advance();
            switching.set(None);
        });
    });

    let fade_class = switching()
        .map(|phase| phase.css_class())
        .unwrap_or_default();

    rsx! {
        div { class: "page timeline-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "timeline-loading", "Loading course..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "timeline-error", id: "timeline-error",
                        p { "{err.message()}" }
                        p { class: "timeline-error__hint", "Reload the page to try again." }
                    }
                },
                ViewState::Ready(snapshot) => {
                    let vm = map_timeline(&snapshot, mode, selected.read().as_ref(), &learner);
                    let lines = geometry();

                    rsx! {
                        header { class: "user-header",
                            div { class: "user-header__greeting", "Welcome back" }
                            div { class: "user-header__name", "{vm.greeting_name}" }
                        }
                        if !vm.tabs.is_empty() {
                            nav { class: "block-menu",
                                for tab in vm.tabs.clone() {
                                    button {
                                        key: "{tab.key}",
                                        class: if tab.selected {
                                            "block-menu__tab block-menu__tab--active"
                                        } else {
                                            "block-menu__tab"
                                        },
                                        onclick: {
                                            let key = tab.key.clone();
                                            move |_| on_select_block.call(key.clone())
                                        },
                                        "{tab.label}"
                                    }
                                }
                            }
                        }
                        if vm.rows.is_empty() {
                            p { class: "timeline-empty", "No lessons yet." }
                        } else {
                            div { class: "timeline {fade_class}", id: TIMELINE_LIST_ID,
                                if let Some(line) = lines.dashed {
                                    div {
                                        class: "timeline__line timeline__line--dashed",
                                        style: "top: {line.top}px; height: {line.height}px;",
                                    }
                                }
                                if let Some(line) = lines.progress {
                                    div {
                                        class: "timeline__line timeline__line--progress",
                                        style: "top: {line.top}px; height: {line.height}px;",
                                    }
                                }
                                for row in vm.rows.clone() {
                                    if let Some(divider) = row.divider.clone() {
                                        div { class: "block-title", "{divider}" }
                                    }
                                    TimelineItem { key: "{row.slug}", row }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TimelineItem(row: TimelineRowVm) -> Element {
    let navigator = use_navigator();

    let modifier = row.directive.modifier.as_str();
    let glyph = match row.directive.icon {
        Some(IconKind::Check) => Some("✓"),
        Some(IconKind::Lock) => Some("🔒"),
        None => None,
    };
    let locked = row.is_locked();
    let slug = row.slug.clone();

    rsx! {
        div { class: "timeline__item timeline__item--{modifier}",
            div { class: "timeline__dot",
                if let Some(glyph) = glyph {
                    span { class: "timeline__dot-icon", "{glyph}" }
                }
            }
            a {
                class: "lesson-card",
                href: "{row.directive.href}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    if !locked {
                        navigator.push(Route::Lesson { slug: slug.clone() });
                    }
                },
                div { class: "lesson-card__title", "{row.title}" }
                div { class: "lesson-card__status", "{row.directive.status_label}" }
            }
        }
    }
}
