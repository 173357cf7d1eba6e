#![forbid(unsafe_code)]

pub mod enrichment;
pub mod fetch;
pub mod model;
pub mod quiz;
pub mod session;
pub mod tab;

pub use enrichment::{EnrichmentCache, EnrichmentStatus};
pub use fetch::{FetchStatus, LessonFetcher};
pub use quiz::{Feedback, QuizGrader};
pub use session::{LessonAction, SessionEvent, SessionState, Transition};
pub use tab::{LessonTab, TabController};
