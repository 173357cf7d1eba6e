use std::path::Path;
use std::sync::Arc;

use reqwest::Client;

use crate::catalog::VideoCatalog;
use crate::config::LessonApiConfig;
use crate::error::AppServicesError;
use crate::ingest::SourceIngestor;
use crate::lesson_api::LessonApiClient;
use crate::session_controller::LessonSessionController;

/// Assembles app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<VideoCatalog>,
    lesson_sessions: Arc<LessonSessionController>,
}

impl AppServices {
    /// Build services talking to the lesson API over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the API URL is invalid, the sample catalog
    /// cannot be resolved, or the HTTP client cannot be built.
    pub fn new_http(api: LessonApiConfig, video_dir: &Path) -> Result<Self, AppServicesError> {
        api.validate()?;
        let client = Client::builder().build()?;

        let ingestor = Arc::new(SourceIngestor::new(client.clone()));
        let backend = Arc::new(LessonApiClient::with_client(client, api));
        let lesson_sessions = Arc::new(LessonSessionController::new(ingestor, backend));
        let catalog = Arc::new(VideoCatalog::samples(video_dir)?);

        Ok(Self {
            catalog,
            lesson_sessions,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<VideoCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn lesson_sessions(&self) -> Arc<LessonSessionController> {
        Arc::clone(&self.lesson_sessions)
    }
}
