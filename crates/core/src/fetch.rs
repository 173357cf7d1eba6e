//! Lifecycle of the one-shot video-to-lesson request.

use crate::model::ProcessingResult;

/// `Idle -> Pending -> (Ready | Failed)`. A failed attempt may be retried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending { attempt: u32 },
    Ready,
    Failed { attempt: u32, message: String },
}

impl FetchStatus {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Fetch status plus the write-once processing result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonFetcher {
    status: FetchStatus,
    result: Option<ProcessingResult>,
    attempts: u32,
}

impl LessonFetcher {
    /// `Idle -> Pending`. Returns the attempt number, or `None` if a fetch was
    /// already started for this session.
    pub fn begin(&mut self) -> Option<u32> {
        if self.status != FetchStatus::Idle {
            return None;
        }
        Some(self.start_attempt())
    }

    /// `Failed -> Pending` with a fresh attempt.
    pub fn retry(&mut self) -> Option<u32> {
        if !matches!(self.status, FetchStatus::Failed { .. }) {
            return None;
        }
        Some(self.start_attempt())
    }

    fn start_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.status = FetchStatus::Pending {
            attempt: self.attempts,
        };
        self.attempts
    }

    /// Apply the outcome of `attempt`. Outcomes for any attempt other than the
    /// one currently pending are dropped, and a stored result is never replaced.
    pub fn resolve(&mut self, attempt: u32, outcome: Result<ProcessingResult, String>) -> bool {
        if self.status != (FetchStatus::Pending { attempt }) || self.result.is_some() {
            return false;
        }
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.status = FetchStatus::Ready;
            }
            Err(message) => {
                self.status = FetchStatus::Failed { attempt, message };
            }
        }
        true
    }

    #[must_use]
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    #[must_use]
    pub fn result(&self) -> Option<&ProcessingResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
