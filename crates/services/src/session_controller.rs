//! Drives one lesson session: the video-to-lesson fetch, on-demand
//! enrichment and the synchronous tab/quiz actions.
//!
//! All state lives in a single `watch` channel. Every mutation is one
//! `send_if_modified` call against the session it was started for, so an
//! async completion that resolves after teardown (or after another session
//! replaced this one) finds a different id and is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use lingua_core::model::{EnrichmentRequest, ProcessingResult, SessionId, VideoRef};
use lingua_core::{LessonAction, SessionEvent, SessionState, Transition};

use crate::error::ProcessingError;
use crate::ingest::VideoIngestor;
use crate::lesson_api::LessonBackend;

/// Result of asking the controller to load (or retry) the lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fetch was already started (or not in a retryable state); nothing was sent.
    Skipped,
    Ready,
    Failed,
    /// The session was torn down or replaced before the result arrived.
    Discarded,
    /// The session id is not the current session.
    Stale,
}

/// Result of dispatching a user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// State changed. For `RequestExamples` this means a request was issued.
    Applied,
    Ignored,
    Stale,
}

pub struct LessonSessionController {
    ingestor: Arc<dyn VideoIngestor>,
    backend: Arc<dyn LessonBackend>,
    next_id: AtomicU64,
    state: watch::Sender<Option<SessionState>>,
}

impl LessonSessionController {
    #[must_use]
    pub fn new(ingestor: Arc<dyn VideoIngestor>, backend: Arc<dyn LessonBackend>) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            ingestor,
            backend,
            next_id: AtomicU64::new(1),
            state,
        }
    }

    /// Open a session for `video`. Selecting the video of the current session
    /// returns that session untouched; any other video replaces it with fresh state.
    pub fn select_video(&self, video: VideoRef) -> SessionId {
        let existing = self
            .state
            .borrow()
            .as_ref()
            .filter(|session| session.video() == &video)
            .map(SessionState::id);
        if let Some(id) = existing {
            return id;
        }

        let id = SessionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        info!(session = %id, video = %video.id(), "lesson session started");
        self.state.send_replace(Some(SessionState::new(id, video)));
        id
    }

    /// Discard the current session (return to video selection).
    pub fn leave(&self) {
        if let Some(old) = self.state.send_replace(None) {
            info!(session = %old.id(), "lesson session closed");
        }
    }

    /// Ingest the video and request its lesson. Only the first call for a
    /// session does any work; later calls return `FetchOutcome::Skipped`.
    pub async fn load(&self, id: SessionId) -> FetchOutcome {
        let started = self.update(id, |session| {
            let attempt = session.begin_fetch();
            let changed = attempt.is_some();
            (attempt.map(|attempt| (attempt, session.video().clone())), changed)
        });
        match started {
            None => FetchOutcome::Stale,
            Some(None) => FetchOutcome::Skipped,
            Some(Some((attempt, video))) => self.run_fetch(id, attempt, video).await,
        }
    }

    /// Start a fresh attempt after a failed fetch.
    pub async fn retry(&self, id: SessionId) -> FetchOutcome {
        let started = self.update(id, |session| {
            let attempt = session.retry_fetch();
            let changed = attempt.is_some();
            (attempt.map(|attempt| (attempt, session.video().clone())), changed)
        });
        match started {
            None => FetchOutcome::Stale,
            Some(None) => FetchOutcome::Skipped,
            Some(Some((attempt, video))) => {
                info!(session = %id, attempt, "retrying lesson fetch");
                self.run_fetch(id, attempt, video).await
            }
        }
    }

    /// Apply a user action. `RequestExamples` also performs the enrichment
    /// fetch and resolves once its result has been recorded.
    pub async fn dispatch(&self, id: SessionId, action: LessonAction) -> Dispatch {
        let transition = self.update(id, |session| {
            let transition = session.apply(&action);
            (transition, transition.applied())
        });

        match (transition, action) {
            (None, _) => Dispatch::Stale,
            (Some(Transition::Ignored), LessonAction::RequestExamples(request)) => {
                debug!(session = %id, item = %request.key(), "examples request ignored");
                Dispatch::Ignored
            }
            (Some(Transition::Ignored), _) => Dispatch::Ignored,
            (Some(Transition::Applied), LessonAction::RequestExamples(request)) => {
                self.fetch_examples(id, request).await;
                Dispatch::Applied
            }
            (Some(Transition::Applied), _) => Dispatch::Applied,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<SessionState> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn current_id(&self) -> Option<SessionId> {
        self.state.borrow().as_ref().map(SessionState::id)
    }

    /// Observe every state change; `None` means no session is open.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionState>> {
        self.state.subscribe()
    }

    async fn run_fetch(&self, id: SessionId, attempt: u32, video: VideoRef) -> FetchOutcome {
        let outcome = self.fetch_lesson(&video).await;
        let failed = outcome.is_err();
        match &outcome {
            Ok(result) => info!(
                session = %id,
                language = %result.lesson_plan.detected_language,
                questions = result.lesson_plan.comprehension_questions.len(),
                "lesson ready"
            ),
            Err(err) => warn!(session = %id, attempt, error = %err, "lesson fetch failed"),
        }

        let event = SessionEvent::LessonLoaded {
            attempt,
            outcome: outcome.map_err(|err| err.to_string()),
        };
        match self.handle(id, event) {
            Some(Transition::Applied) if failed => FetchOutcome::Failed,
            Some(Transition::Applied) => FetchOutcome::Ready,
            Some(Transition::Ignored) | None => {
                debug!(session = %id, attempt, "discarding lesson for inactive session");
                FetchOutcome::Discarded
            }
        }
    }

    async fn fetch_lesson(&self, video: &VideoRef) -> Result<ProcessingResult, ProcessingError> {
        let payload = self.ingestor.ingest(video).await?;
        debug!(
            file = %payload.file_name,
            mime = %payload.mime_type,
            bytes = payload.bytes.len(),
            "video ingested"
        );
        self.backend.process_video(payload).await
    }

    async fn fetch_examples(&self, id: SessionId, request: EnrichmentRequest) {
        let key = request.key();
        let outcome = match self.backend.generate_examples(request.payload()).await {
            Ok(result) => Some(result),
            Err(err) => {
                warn!(session = %id, item = %key, error = %err, "example generation failed");
                None
            }
        };

        if !matches!(
            self.handle(id, SessionEvent::ExamplesLoaded { key, outcome }),
            Some(Transition::Applied)
        ) {
            debug!(session = %id, item = %key, "discarding examples for inactive session");
        }
    }

    fn handle(&self, id: SessionId, event: SessionEvent) -> Option<Transition> {
        self.update(id, |session| {
            let transition = session.handle(event);
            (transition, transition.applied())
        })
    }

    /// Run `f` against session `id` if it is still current. Observers are
    /// notified only when `f` reports a change. `None` if the session is gone.
    fn update<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut SessionState) -> (R, bool),
    ) -> Option<R> {
        let mut output = None;
        self.state.send_if_modified(|current| match current.as_mut() {
            Some(session) if session.id() == id => {
                let (value, changed) = f(session);
                output = Some(value);
                changed
            }
            _ => false,
        });
        output
    }
}
