//! Aggregate state of one lesson session and its transition functions.
//!
//! User actions go through [`SessionState::apply`]; completions of async
//! work go through [`SessionState::handle`]. Both return whether anything
//! changed, so callers can skip notifying observers on no-ops.

use crate::enrichment::EnrichmentCache;
use crate::fetch::{FetchStatus, LessonFetcher};
use crate::model::{
    EnrichmentKey, EnrichmentRequest, EnrichmentResult, LessonPlan, ProcessingResult, SessionId,
    VideoRef,
};
use crate::quiz::{Feedback, QuizGrader};
use crate::tab::{LessonTab, TabController};

/// Discrete user action against a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonAction {
    SelectTab(LessonTab),
    SelectOption { question: usize, option: String },
    SetAnswer { question: usize, text: String },
    SubmitAnswer { question: usize },
    RequestExamples(EnrichmentRequest),
}

impl LessonAction {
    /// Enrichment action for `key`, with its payload taken from the plan.
    #[must_use]
    pub fn request_examples(plan: &LessonPlan, key: EnrichmentKey) -> Option<Self> {
        EnrichmentRequest::for_item(plan, key).map(Self::RequestExamples)
    }
}

/// Completion of async work started for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    LessonLoaded {
        attempt: u32,
        outcome: Result<ProcessingResult, String>,
    },
    /// `None` when the enrichment fetch failed.
    ExamplesLoaded {
        key: EnrichmentKey,
        outcome: Option<EnrichmentResult>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    #[must_use]
    pub fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl From<bool> for Transition {
    fn from(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::Ignored }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    id: SessionId,
    video: VideoRef,
    fetcher: LessonFetcher,
    tabs: TabController,
    enrichment: EnrichmentCache,
    quiz: QuizGrader,
}

impl SessionState {
    #[must_use]
    pub fn new(id: SessionId, video: VideoRef) -> Self {
        Self {
            id,
            video,
            fetcher: LessonFetcher::default(),
            tabs: TabController::default(),
            enrichment: EnrichmentCache::default(),
            quiz: QuizGrader::default(),
        }
    }

    /// Start the lesson fetch. `None` if it was already started.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        self.fetcher.begin()
    }

    /// Start a fresh attempt after a failure. `None` unless the fetch failed.
    pub fn retry_fetch(&mut self) -> Option<u32> {
        self.fetcher.retry()
    }

    pub fn apply(&mut self, action: &LessonAction) -> Transition {
        match action {
            LessonAction::SelectTab(tab) => {
                if self.tabs.active() == *tab {
                    return Transition::Ignored;
                }
                self.tabs.select(*tab);
                Transition::Applied
            }
            LessonAction::SelectOption { question, option } => {
                let Some(q) = self.question(*question) else {
                    return Transition::Ignored;
                };
                let q = q.clone();
                self.quiz.select_option(*question, &q, option).into()
            }
            LessonAction::SetAnswer { question, text } => {
                let Some(q) = self.question(*question) else {
                    return Transition::Ignored;
                };
                let q = q.clone();
                self.quiz.set_answer(*question, &q, text).into()
            }
            LessonAction::SubmitAnswer { question } => {
                let Some(q) = self.question(*question) else {
                    return Transition::Ignored;
                };
                let q = q.clone();
                self.quiz.submit(*question, &q).into()
            }
            LessonAction::RequestExamples(request) => {
                let Some(plan) = self.lesson_plan() else {
                    return Transition::Ignored;
                };
                if EnrichmentRequest::for_item(plan, request.key()).is_none() {
                    return Transition::Ignored;
                }
                self.enrichment.begin(request.key()).into()
            }
        }
    }

    pub fn handle(&mut self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::LessonLoaded { attempt, outcome } => {
                self.fetcher.resolve(attempt, outcome).into()
            }
            SessionEvent::ExamplesLoaded {
                key,
                outcome: Some(result),
            } => self.enrichment.resolve(key, result).into(),
            SessionEvent::ExamplesLoaded { key, outcome: None } => {
                self.enrichment.fail(key).into()
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn video(&self) -> &VideoRef {
        &self.video
    }

    #[must_use]
    pub fn fetch_status(&self) -> &FetchStatus {
        self.fetcher.status()
    }

    #[must_use]
    pub fn result(&self) -> Option<&ProcessingResult> {
        self.fetcher.result()
    }

    #[must_use]
    pub fn lesson_plan(&self) -> Option<&LessonPlan> {
        self.result().map(|result| &result.lesson_plan)
    }

    #[must_use]
    pub fn active_tab(&self) -> LessonTab {
        self.tabs.active()
    }

    #[must_use]
    pub fn enrichment(&self) -> &EnrichmentCache {
        &self.enrichment
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizGrader {
        &self.quiz
    }

    /// Grading of question `index`, recomputed from the stored answer.
    #[must_use]
    pub fn feedback(&self, index: usize) -> Option<Feedback> {
        self.question(index)
            .and_then(|question| self.quiz.feedback(index, question))
    }

    fn question(&self, index: usize) -> Option<&crate::model::Question> {
        self.lesson_plan().and_then(|plan| plan.question(index))
    }
}
