use std::sync::Arc;

use course_core::blocks::GroupingMode;
use course_core::model::{RawBlockId, RawLesson};
use services::TimelinePayload;

use super::test_harness::{StubCourseApi, ViewKind, setup_view_harness};

fn lesson(slug: &str, status: &str, block: i64, new_block: bool) -> RawLesson {
    RawLesson {
        slug: Some(slug.to_string()),
        title: Some(slug.to_string()),
        status: Some(status.to_string()),
        block_id: Some(RawBlockId::Number(block)),
        is_new_block: Some(new_block),
    }
}

fn payload(timeline: Vec<RawLesson>) -> TimelinePayload {
    TimelinePayload {
        user_name: Some("Dasha".to_string()),
        timeline,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn timeline_smoke_renders_empty_course_without_guide_lines() {
    let api = Arc::new(StubCourseApi::success(payload(Vec::new())));
    let mut harness = setup_view_harness(ViewKind::Timeline, api, GroupingMode::Grouped);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Welcome back"), "missing header in {html}");
    assert!(html.contains("Dasha"), "missing learner name in {html}");
    assert!(html.contains("No lessons yet."), "missing empty state in {html}");
    assert!(
        !html.contains("timeline__line"),
        "unexpected guide line in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn timeline_smoke_surfaces_the_backend_error_text() {
    let api = Arc::new(StubCourseApi::rejected("nope"));
    let mut harness = setup_view_harness(ViewKind::Timeline, api, GroupingMode::Grouped);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("nope"), "missing backend message in {html}");
    assert!(
        !html.contains("timeline__item"),
        "error state must replace the list in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn timeline_smoke_grouped_mode_shows_the_first_block_only() {
    let api = Arc::new(StubCourseApi::success(payload(vec![
        lesson("intro", "completed", 1, true),
        lesson("centering", "active", 1, false),
        lesson("glazing", "locked", 2, true),
    ])));
    let mut harness = setup_view_harness(ViewKind::Timeline, api, GroupingMode::Grouped);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Block 1"), "missing block menu in {html}");
    assert!(html.contains("Block 2"), "missing block menu in {html}");
    assert!(html.contains("Completed"), "missing completed label in {html}");
    assert!(html.contains("Start lesson"), "missing active label in {html}");
    // Block 2's locked lesson is behind the switcher, not on screen.
    assert!(
        !html.contains("Access closed"),
        "unselected block leaked into {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn timeline_smoke_inline_mode_renders_dividers_in_one_flat_list() {
    let api = Arc::new(StubCourseApi::success(payload(vec![
        lesson("intro", "completed", 1, true),
        lesson("centering", "active", 1, false),
        lesson("glazing", "locked", 2, true),
    ])));
    let mut harness = setup_view_harness(ViewKind::Timeline, api, GroupingMode::InlineMarkers);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("block-menu"), "inline mode has no menu: {html}");
    assert!(html.contains("Block 1"), "missing first divider in {html}");
    assert!(html.contains("Block 2"), "missing second divider in {html}");
    assert!(html.contains("Access closed"), "missing locked lesson in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_missing_slug_errors_before_any_fetch() {
    let api = Arc::new(StubCourseApi::success(payload(Vec::new())));
    let mut harness = setup_view_harness(
        ViewKind::Lesson(String::new()),
        api,
        GroupingMode::Grouped,
    );

    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_renders_known_content_and_the_complete_button() {
    let api = Arc::new(StubCourseApi::success(payload(Vec::new())));
    let mut harness = setup_view_harness(
        ViewKind::Lesson("intro".to_string()),
        api,
        GroupingMode::Grouped,
    );

    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Introduction to Clay"),
        "missing lesson title in {html}"
    );
    assert!(
        html.contains("Mark lesson complete"),
        "missing complete button in {html}"
    );
    assert!(html.contains("Back to course"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_completion_success_reaches_the_backend() {
    let api = Arc::new(StubCourseApi::success(payload(Vec::new())));
    let mut harness = setup_view_harness(
        ViewKind::Lesson("intro".to_string()),
        Arc::clone(&api),
        GroupingMode::Grouped,
    );
    harness.rebuild();

    let complete = harness.lesson_handles.as_ref().unwrap().complete();
    complete.call(());
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Lesson completed"), "missing success label in {html}");
    assert_eq!(
        api.completions(),
        vec![("42".to_string(), "intro".to_string())]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_smoke_completion_failure_keeps_the_retry_affordance() {
    let api = Arc::new(StubCourseApi::rejected("Could not save progress"));
    let mut harness = setup_view_harness(
        ViewKind::Lesson("intro".to_string()),
        api,
        GroupingMode::Grouped,
    );
    harness.rebuild();

    let complete = harness.lesson_handles.as_ref().unwrap().complete();
    complete.call(());
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Could not save progress"),
        "missing failure message in {html}"
    );
    // The button is re-enabled for another attempt.
    assert!(
        html.contains("Mark lesson complete"),
        "missing retry affordance in {html}"
    );
}
