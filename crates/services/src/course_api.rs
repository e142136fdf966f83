use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use course_core::model::{LearnerId, LessonSlug, RawLesson};

use crate::error::CourseApiError;

/// Endpoint used when the page is served from a loopback host during
/// development.
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:8000";

const TIMELINE_PATH: &str = "/api/v1/course/timeline";
const COMPLETE_PATH: &str = "/api/v1/course/complete";

const SUCCESS_STATUS: &str = "success";
const GENERIC_TIMELINE_MESSAGE: &str = "The course could not be loaded. Try refreshing the page.";
const GENERIC_COMPLETE_MESSAGE: &str = "The lesson could not be completed.";

/// Picks the API base for the current host.
///
/// A single runtime check, not injected configuration: loopback hosts talk to
/// the local development server, everything else uses the same-origin
/// relative path.
#[must_use]
pub fn api_base_for_host(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_API_BASE.to_string()
    } else {
        String::new()
    }
}

/// Successful timeline response, still carrying raw lesson entries.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePayload {
    pub user_name: Option<String>,
    pub timeline: Vec<RawLesson>,
}

/// Network seam for the course backend.
///
/// Services depend on this trait so tests can swap the transport out.
#[async_trait]
pub trait CourseApi: Send + Sync {
    /// Fetch the learner's lesson-progress list.
    ///
    /// # Errors
    ///
    /// Returns `CourseApiError` on transport failure or a non-success
    /// envelope.
    async fn fetch_timeline(&self, learner: &LearnerId) -> Result<TimelinePayload, CourseApiError>;

    /// Mark one lesson as completed for the learner.
    ///
    /// # Errors
    ///
    /// Returns `CourseApiError` on transport failure or a non-success
    /// envelope.
    async fn complete_lesson(
        &self,
        learner: &LearnerId,
        slug: &LessonSlug,
    ) -> Result<(), CourseApiError>;
}

/// `reqwest`-backed implementation of [`CourseApi`].
#[derive(Clone)]
pub struct HttpCourseApi {
    client: Client,
    base_url: String,
}

impl HttpCourseApi {
    /// An empty `base_url` means same-origin relative requests.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn fetch_timeline(&self, learner: &LearnerId) -> Result<TimelinePayload, CourseApiError> {
        let response = self
            .client
            .get(self.endpoint(TIMELINE_PATH))
            .query(&[("telegram_id", learner.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CourseApiError::HttpStatus(response.status()));
        }

        let envelope: TimelineEnvelope = response.json().await?;
        timeline_payload_from_envelope(envelope)
    }

    async fn complete_lesson(
        &self,
        learner: &LearnerId,
        slug: &LessonSlug,
    ) -> Result<(), CourseApiError> {
        let payload = CompleteRequest {
            telegram_id: learner.as_str(),
            lesson_slug: slug.as_str(),
        };

        let response = self
            .client
            .post(self.endpoint(COMPLETE_PATH))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CourseApiError::HttpStatus(response.status()));
        }

        let envelope: CompleteEnvelope = response.json().await?;
        ack_from_envelope(envelope)
    }
}

fn timeline_payload_from_envelope(
    envelope: TimelineEnvelope,
) -> Result<TimelinePayload, CourseApiError> {
    if envelope.status != SUCCESS_STATUS {
        return Err(CourseApiError::Rejected {
            message: envelope
                .message
                .unwrap_or_else(|| GENERIC_TIMELINE_MESSAGE.to_string()),
        });
    }

    Ok(TimelinePayload {
        user_name: envelope.user_name,
        timeline: envelope.timeline.unwrap_or_default(),
    })
}

fn ack_from_envelope(envelope: CompleteEnvelope) -> Result<(), CourseApiError> {
    if envelope.status != SUCCESS_STATUS {
        return Err(CourseApiError::Rejected {
            message: envelope
                .message
                .unwrap_or_else(|| GENERIC_COMPLETE_MESSAGE.to_string()),
        });
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct TimelineEnvelope {
    status: String,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    timeline: Option<Vec<RawLesson>>,
}

#[derive(Debug, Serialize)]
struct CompleteRequest<'a> {
    telegram_id: &'a str,
    lesson_slug: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompleteEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
}
