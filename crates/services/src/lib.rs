#![forbid(unsafe_code)]

pub mod completion_service;
pub mod course_api;
pub mod error;
pub mod learner;
pub mod timeline_service;

pub use error::CourseApiError;

pub use completion_service::CompletionService;
pub use course_api::{
    CourseApi, HttpCourseApi, LOCAL_API_BASE, TimelinePayload, api_base_for_host,
};
pub use learner::{FALLBACK_LEARNER_ID, resolve_learner_id};
pub use timeline_service::{TimelineService, TimelineSnapshot};
