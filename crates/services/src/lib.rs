#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ingest;
pub mod lesson_api;
pub mod session_controller;

pub use app_services::AppServices;
pub use catalog::{CatalogEntry, VideoCatalog};
pub use config::LessonApiConfig;
pub use error::{AppServicesError, EnrichmentError, IngestError, ProcessingError};
pub use ingest::{SourceIngestor, VideoIngestor, VideoPayload};
pub use lesson_api::{LessonApiClient, LessonBackend};
pub use session_controller::{Dispatch, FetchOutcome, LessonSessionController};
