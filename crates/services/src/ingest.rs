use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use lingua_core::model::{VideoRef, VideoSource, guess_video_mime};

use crate::error::IngestError;

/// A video packaged for multipart submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoPayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
}

/// Obtains a selected video's bytes.
#[async_trait]
pub trait VideoIngestor: Send + Sync {
    async fn ingest(&self, video: &VideoRef) -> Result<VideoPayload, IngestError>;
}

/// Reads local files from disk and fetches remote URLs over HTTP.
#[derive(Clone, Default)]
pub struct SourceIngestor {
    client: Client,
}

impl SourceIngestor {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_remote(
        &self,
        url: &reqwest::Url,
    ) -> Result<(Vec<u8>, Option<String>), IngestError> {
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(IngestError::HttpStatus(response.status()));
        }
        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let bytes = response.bytes().await?;
        Ok((bytes.to_vec(), mime))
    }
}

#[async_trait]
impl VideoIngestor for SourceIngestor {
    async fn ingest(&self, video: &VideoRef) -> Result<VideoPayload, IngestError> {
        let source = video.source();
        let file_name = source.file_name();

        let (bytes, mime) = match source {
            VideoSource::Remote(url) => self.fetch_remote(url).await?,
            VideoSource::Local(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| IngestError::Io {
                        path: path.clone(),
                        source,
                    })?;
                (bytes, None)
            }
        };

        let mime_type = mime.unwrap_or_else(|| guess_video_mime(&file_name).to_string());
        Ok(VideoPayload {
            bytes,
            mime_type,
            file_name,
        })
    }
}
