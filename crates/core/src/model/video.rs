use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::model::VideoId;

/// Filename used when a locator has no usable last segment.
pub const DEFAULT_VIDEO_FILENAME: &str = "video.mp4";

/// MIME type used when neither the source nor the extension tells us better.
pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VideoRefError {
    #[error("video id cannot be empty")]
    EmptyId,
    #[error("video locator cannot be empty")]
    EmptyLocator,
    #[error("unsupported locator scheme: {0}")]
    UnsupportedScheme(String),
}

/// Where the bytes of a video live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoSource {
    Remote(Url),
    Local(PathBuf),
}

impl VideoSource {
    /// Parse a locator string. `http(s)` URLs are remote, `file://` URLs and
    /// bare paths are local.
    ///
    /// # Errors
    ///
    /// Returns `VideoRefError::EmptyLocator` for blank input and
    /// `VideoRefError::UnsupportedScheme` for URLs that are neither http(s) nor file.
    pub fn parse(locator: &str) -> Result<Self, VideoRefError> {
        let trimmed = locator.trim();
        if trimmed.is_empty() {
            return Err(VideoRefError::EmptyLocator);
        }

        match Url::parse(trimmed) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::Local)
                    .map_err(|()| VideoRefError::UnsupportedScheme("file".into())),
                // Windows drive letters parse as a one-letter scheme.
                scheme if scheme.len() == 1 => Ok(Self::Local(PathBuf::from(trimmed))),
                scheme => Err(VideoRefError::UnsupportedScheme(scheme.to_string())),
            },
            Err(_) => Ok(Self::Local(PathBuf::from(trimmed))),
        }
    }

    /// Last path segment of the locator, or [`DEFAULT_VIDEO_FILENAME`].
    #[must_use]
    pub fn file_name(&self) -> String {
        let name = match self {
            Self::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
            Self::Local(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string),
        };
        name.unwrap_or_else(|| DEFAULT_VIDEO_FILENAME.to_string())
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl std::fmt::Display for VideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Guess a video MIME type from a filename extension.
#[must_use]
pub fn guess_video_mime(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("mp4" | "m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        _ => DEFAULT_VIDEO_MIME,
    }
}

/// A selectable video. Immutable once selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoRef {
    id: VideoId,
    title: String,
    source: VideoSource,
}

impl VideoRef {
    /// Build a video reference from a raw locator.
    ///
    /// # Errors
    ///
    /// Returns `VideoRefError` if the id is blank or the locator cannot be parsed.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        locator: &str,
    ) -> Result<Self, VideoRefError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(VideoRefError::EmptyId);
        }
        Ok(Self {
            id: VideoId::new(id.trim()),
            title: title.into(),
            source: VideoSource::parse(locator)?,
        })
    }

    #[must_use]
    pub fn from_source(id: VideoId, title: impl Into<String>, source: VideoSource) -> Self {
        Self {
            id,
            title: title.into(),
            source,
        }
    }

    #[must_use]
    pub fn id(&self) -> &VideoId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn source(&self) -> &VideoSource {
        &self.source
    }
}
