mod enrichment;
mod ids;
mod lesson;
mod video;

pub use enrichment::{EnrichmentKey, EnrichmentRequest, EnrichmentResult, ItemKind, ItemPayload};
pub use ids::{SessionId, VideoId};
pub use lesson::{
    LessonPlan, ProcessingResult, Question, QuestionKind, SentenceStructure, VocabWord,
};
pub use video::{
    DEFAULT_VIDEO_FILENAME, DEFAULT_VIDEO_MIME, VideoRef, VideoRefError, VideoSource,
    guess_video_mime,
};
