use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{LessonView, TimelineView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", TimelineView)] Timeline {},
    #[route("/lesson?:slug", LessonView)] Lesson { slug: String },
}
