mod ids;
mod lesson;

pub use ids::{BlockKey, LearnerId, LessonSlug};
pub use lesson::{LessonRecord, LessonStatus, RawBlockId, RawLesson};
