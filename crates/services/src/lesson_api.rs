use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use lingua_core::model::{EnrichmentResult, ItemPayload, ProcessingResult};

use crate::config::LessonApiConfig;
use crate::error::{EnrichmentError, GENERIC_PROCESSING_ERROR, ProcessingError};
use crate::ingest::VideoPayload;

/// The remote language-processing service.
#[async_trait]
pub trait LessonBackend: Send + Sync {
    /// Turn a video into a transcript and lesson plan.
    async fn process_video(&self, video: VideoPayload) -> Result<ProcessingResult, ProcessingError>;

    /// Expand one vocabulary or grammar item into extra examples.
    async fn generate_examples(
        &self,
        item: &ItemPayload,
    ) -> Result<EnrichmentResult, EnrichmentError>;
}

/// HTTP client for `POST /llm/process-video` and `POST /llm/generate-examples`.
#[derive(Clone)]
pub struct LessonApiClient {
    client: Client,
    config: LessonApiConfig,
}

impl LessonApiClient {
    #[must_use]
    pub fn new(config: LessonApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: LessonApiConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &LessonApiConfig {
        &self.config
    }
}

#[async_trait]
impl LessonBackend for LessonApiClient {
    async fn process_video(
        &self,
        video: VideoPayload,
    ) -> Result<ProcessingResult, ProcessingError> {
        let part = Part::bytes(video.bytes)
            .file_name(video.file_name)
            .mime_str(&video.mime_type)?;
        let form = Form::new().part("video", part);

        let response = self
            .client
            .post(self.config.process_video_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(rejection(status, response.bytes().await));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ProcessingError::Malformed {
            message: error_detail(&body),
            source,
        })
    }

    async fn generate_examples(
        &self,
        item: &ItemPayload,
    ) -> Result<EnrichmentResult, EnrichmentError> {
        let response = self
            .client
            .post(self.config.generate_examples_url())
            .json(item)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EnrichmentError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let parsed: ExamplesResponse =
            serde_json::from_slice(&body).map_err(EnrichmentError::Malformed)?;
        Ok(EnrichmentResult {
            description: parsed.description.unwrap_or_default(),
            examples: parsed.examples.unwrap_or_default(),
        })
    }
}

/// The `detail` string of an error body, or the generic message.
#[must_use]
pub fn error_detail(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| GENERIC_PROCESSING_ERROR.to_string())
}

/// Error for a non-2xx reply. An unreadable body gets the generic message.
fn rejection<B: AsRef<[u8]>, E>(status: StatusCode, body: Result<B, E>) -> ProcessingError {
    let message = body.map_or_else(|_| error_detail(&[]), |body| error_detail(body.as_ref()));
    ProcessingError::Rejected { status, message }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExamplesResponse {
    description: Option<String>,
    examples: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_prefers_server_message() {
        assert_eq!(
            error_detail(br#"{"detail": "Video too long"}"#),
            "Video too long"
        );
    }

    #[test]
    fn error_detail_falls_back_on_unusable_bodies() {
        assert_eq!(error_detail(b"<html>502</html>"), GENERIC_PROCESSING_ERROR);
        assert_eq!(error_detail(br#"{"error": "x"}"#), GENERIC_PROCESSING_ERROR);
        assert_eq!(error_detail(br#"{"detail": ""}"#), GENERIC_PROCESSING_ERROR);
        // FastAPI validation errors carry a list, not a string.
        assert_eq!(
            error_detail(br#"{"detail": [{"loc": ["body", "video"]}]}"#),
            GENERIC_PROCESSING_ERROR
        );
    }

    #[test]
    fn rejection_with_unreadable_body_uses_generic_message() {
        let err = rejection::<&[u8], _>(StatusCode::BAD_GATEWAY, Err("connection reset"));
        assert!(matches!(
            err,
            ProcessingError::Rejected { status, .. } if status == StatusCode::BAD_GATEWAY
        ));
        assert_eq!(err.to_string(), GENERIC_PROCESSING_ERROR);
    }

    #[test]
    fn rejection_reads_detail_from_body() {
        let body = br#"{"detail": "Too long"}"#;
        let err = rejection::<_, ()>(StatusCode::UNPROCESSABLE_ENTITY, Ok(body));
        assert_eq!(err.to_string(), "Too long");
    }
}
