use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use course_core::blocks::GroupingMode;
use course_core::model::LearnerId;
use services::{
    CompletionService, CourseApi, HttpCourseApi, TimelineService, api_base_for_host,
    resolve_learner_id,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    learner_id: LearnerId,
    grouping: GroupingMode,
    timeline: Arc<TimelineService>,
    completion: Arc<CompletionService>,
}

impl UiApp for DesktopApp {
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

struct Args {
    base_url: String,
    learner_id: LearnerId,
    grouping: GroupingMode,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--base-url <url>] [--host <hostname>] [--learner-id <id>] [--inline-blocks]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --host 127.0.0.1   (the API base is picked from the hostname)");
    eprintln!("  block-switcher grouping; --inline-blocks renders one flat list");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_API_BASE, COURSE_LEARNER_ID");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut base_url = std::env::var("COURSE_API_BASE").ok();
        let mut host: Option<String> = None;
        let mut explicit_learner: Option<String> = None;
        let mut grouping = GroupingMode::Grouped;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    base_url = Some(require_value(args, "--base-url")?);
                }
                "--host" => {
                    host = Some(require_value(args, "--host")?);
                }
                "--learner-id" => {
                    explicit_learner = Some(require_value(args, "--learner-id")?);
                }
                "--inline-blocks" => {
                    grouping = GroupingMode::InlineMarkers;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let base_url = base_url
            .unwrap_or_else(|| api_base_for_host(host.as_deref().unwrap_or("127.0.0.1")));

        // CLI flag plays the role of the explicit query parameter; the
        // environment stands in for the host-embedded value.
        let embedded = std::env::var("COURSE_LEARNER_ID").ok();
        let learner_id = resolve_learner_id(explicit_learner.as_deref(), embedded.as_deref());

        Ok(Self {
            base_url,
            learner_id,
            grouping,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let api: Arc<dyn CourseApi> = Arc::new(HttpCourseApi::new(parsed.base_url));
    let timeline = Arc::new(TimelineService::new(Arc::clone(&api)));
    let completion = Arc::new(CompletionService::new(api));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        learner_id: parsed.learner_id,
        grouping: parsed.grouping,
        timeline,
        completion,
    });

    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Course")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
