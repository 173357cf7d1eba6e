use std::sync::Arc;

use services::{LessonSessionController, VideoCatalog};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<VideoCatalog>;
    fn lesson_sessions(&self) -> Arc<LessonSessionController>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<VideoCatalog>,
    lesson_sessions: Arc<LessonSessionController>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            lesson_sessions: app.lesson_sessions(),
        }
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
