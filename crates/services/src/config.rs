use reqwest::Url;

use crate::error::AppServicesError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Relative to the working directory.
pub const DEFAULT_VIDEO_DIR: &str = "videos";

const PROCESS_VIDEO_PATH: &str = "/llm/process-video";
const GENERATE_EXAMPLES_PATH: &str = "/llm/generate-examples";

/// Location of the lesson processing service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonApiConfig {
    pub base_url: String,
}

impl Default for LessonApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

impl LessonApiConfig {
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidBaseUrl` if the base URL is not an http(s) URL.
    pub fn validate(&self) -> Result<(), AppServicesError> {
        let parsed = Url::parse(self.base_url.trim()).map_err(|_| self.invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(self.invalid());
        }
        Ok(())
    }

    fn invalid(&self) -> AppServicesError {
        AppServicesError::InvalidBaseUrl {
            raw: self.base_url.clone(),
        }
    }

    #[must_use]
    pub fn process_video_url(&self) -> String {
        self.endpoint(PROCESS_VIDEO_PATH)
    }

    #[must_use]
    pub fn generate_examples_url(&self) -> String {
        self.endpoint(GENERATE_EXAMPLES_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_without_double_slash() {
        let config = LessonApiConfig {
            base_url: "http://api.test:9000/".into(),
        };
        assert_eq!(
            config.process_video_url(),
            "http://api.test:9000/llm/process-video"
        );
        assert_eq!(
            config.generate_examples_url(),
            "http://api.test:9000/llm/generate-examples"
        );
    }

    #[test]
    fn validate_rejects_non_http_urls() {
        assert!(LessonApiConfig::default().validate().is_ok());
        let bad = LessonApiConfig {
            base_url: "ftp://files".into(),
        };
        assert!(matches!(
            bad.validate(),
            Err(AppServicesError::InvalidBaseUrl { .. })
        ));
    }
}
