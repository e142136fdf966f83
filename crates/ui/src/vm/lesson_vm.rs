use std::collections::{HashMap, HashSet};

use services::CourseApiError;

/// Delay before returning to the timeline after a successful completion.
pub const RETURN_TO_TIMELINE_DELAY_MS: u64 = 1000;

/// Renderable lesson content for the detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonContent {
    pub title: String,
    pub body_html: String,
}

/// Built-in lesson content, keyed by slug.
///
/// Content authoring is backend territory; this registry only covers the
/// seeded course so the detail page has something real to show, with a
/// placeholder for slugs it does not know.
#[must_use]
pub fn lesson_content(slug: &str) -> LessonContent {
    let (title, body_md) = match slug {
        "intro" => ("Introduction to Clay", INTRO_MD),
        "centering" => ("Centering on the Wheel", CENTERING_MD),
        "glazing" => ("Glazing Basics", GLAZING_MD),
        _ => ("Lesson", PLACEHOLDER_MD),
    };

    LessonContent {
        title: title.to_string(),
        body_html: markdown_to_html(body_md),
    }
}

const INTRO_MD: &str = "\
Welcome to the pottery course! In this first lesson we get to know the \
basics of working with clay.

Clay is a natural material people have shaped for thousands of years. We \
look at the main clay types, their properties, and how to prepare them for \
the wheel.";

const CENTERING_MD: &str = "\
Centering clay on the wheel is the fundamental skill every potter has to \
master.

You will learn the correct centering technique and practice it, and we walk \
through the usual beginner mistakes and how to avoid them.";

const GLAZING_MD: &str = "\
Glazing is the final step that gives a piece its finished look and its \
protection.

You will learn about glaze types, application techniques, and firing, plus \
color choices and decoration.";

const PLACEHOLDER_MD: &str = "Lesson content is on its way.";

/// Lifecycle of the "mark complete" action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl CompletionPhase {
    #[must_use]
    pub fn button_label(&self) -> &str {
        match self {
            Self::Idle | Self::Failed(_) => "Mark lesson complete",
            Self::Submitting => "Sending...",
            Self::Succeeded => "✓ Lesson completed!",
        }
    }

    #[must_use]
    pub fn button_disabled(&self) -> bool {
        matches!(self, Self::Submitting | Self::Succeeded)
    }
}

/// User-facing text for a failed completion attempt.
#[must_use]
pub fn completion_error_message(err: &CourseApiError) -> String {
    err.backend_message()
        .unwrap_or("Connection error. Please try again.")
        .to_string()
}

#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}
