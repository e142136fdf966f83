mod lesson;
mod state;
mod timeline;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use lesson::LessonView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use timeline::TimelineView;
