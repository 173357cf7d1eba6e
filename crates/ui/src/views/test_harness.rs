use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lingua_core::model::{
    EnrichmentResult, ItemPayload, LessonPlan, ProcessingResult, Question, VideoRef, VocabWord,
};
use services::{
    EnrichmentError, IngestError, LessonBackend, LessonSessionController, ProcessingError,
    VideoCatalog, VideoIngestor, VideoPayload,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{LessonView, WelcomeView};

pub struct StubIngestor {
    pub fail: bool,
}

#[async_trait]
impl VideoIngestor for StubIngestor {
    async fn ingest(&self, video: &VideoRef) -> Result<VideoPayload, IngestError> {
        if self.fail {
            return Err(IngestError::Io {
                path: video.source().file_name().into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            });
        }
        Ok(VideoPayload {
            bytes: vec![0, 1, 2],
            mime_type: "video/mp4".into(),
            file_name: video.source().file_name(),
        })
    }
}

#[derive(Default)]
pub struct StubBackend {
    pub process_calls: AtomicUsize,
}

#[async_trait]
impl LessonBackend for StubBackend {
    async fn process_video(
        &self,
        _video: VideoPayload,
    ) -> Result<ProcessingResult, ProcessingError> {
        self.process_calls.fetch_add(1, Ordering::SeqCst);
        Ok(sample_lesson())
    }

    async fn generate_examples(
        &self,
        _item: &ItemPayload,
    ) -> Result<EnrichmentResult, EnrichmentError> {
        Ok(EnrichmentResult::default())
    }
}

pub fn sample_lesson() -> ProcessingResult {
    ProcessingResult {
        transcript: "Hello, how are you today?".into(),
        lesson_plan: LessonPlan {
            detected_language: "English".into(),
            proficiency_level: "Beginner".into(),
            summary: "Two friends greet each other.".into(),
            vocabulary_words: vec![VocabWord {
                word: "today".into(),
                translation: "hoy".into(),
                definition: "On this day".into(),
                example_sentence: "I am busy today.".into(),
            }],
            sentence_structures: Vec::new(),
            learning_objectives: vec!["Greet someone".into()],
            comprehension_questions: vec![Question {
                question: "What is asked?".into(),
                question_type: "multiple_choice".into(),
                correct_answer: "How are you".into(),
                options: vec!["How are you".into(), "Where are you".into()],
                explanation: "The speaker asks how the other is.".into(),
            }],
        },
    }
}

struct TestApp {
    catalog: Arc<VideoCatalog>,
    lesson_sessions: Arc<LessonSessionController>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<VideoCatalog> {
        Arc::clone(&self.catalog)
    }

    fn lesson_sessions(&self) -> Arc<LessonSessionController> {
        Arc::clone(&self.lesson_sessions)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Lesson(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Lesson(video_id) => rsx! { LessonView { video_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub controller: Arc<LessonSessionController>,
    pub backend: Arc<StubBackend>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until the rendered html contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, ingest_fails: bool) -> ViewHarness {
    let catalog = Arc::new(VideoCatalog::samples(Path::new("videos")).expect("sample catalog"));
    let backend = Arc::new(StubBackend::default());
    let controller = Arc::new(LessonSessionController::new(
        Arc::new(StubIngestor { fail: ingest_fails }),
        Arc::clone(&backend) as Arc<dyn LessonBackend>,
    ));

    let app = Arc::new(TestApp {
        catalog,
        lesson_sessions: Arc::clone(&controller),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        controller,
        backend,
    }
}
