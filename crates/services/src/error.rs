//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use lingua_core::model::VideoRefError;

/// Message shown when the processing service fails without a usable `detail`.
pub const GENERIC_PROCESSING_ERROR: &str = "Failed to process video";

/// Errors emitted while obtaining a video's bytes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    #[error("Failed to load video file (HTTP {0})")]
    HttpStatus(reqwest::StatusCode),
    #[error("Failed to load video file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the video-to-lesson request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProcessingError {
    /// Non-2xx reply. `message` is the server's `detail`, or the generic message.
    #[error("{message}")]
    Rejected {
        status: reqwest::StatusCode,
        message: String,
    },
    /// 2xx reply that is not a lesson. `message` is derived the same way as
    /// for `Rejected`.
    #[error("{message}")]
    Malformed {
        message: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the enrichment request. Never shown to the user.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnrichmentError {
    #[error("example generation failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("example response was malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("invalid API base URL {raw:?}")]
    InvalidBaseUrl { raw: String },
    #[error(transparent)]
    Catalog(#[from] VideoRefError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
